use std::future::Future;
use std::time::Duration;

use crate::common::GatewayError;
use crate::log_failure;

/// Read timeout used when the configuration does not say otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

/// Progress of one asynchronous read.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Bounds a gateway call; an elapsed timer becomes [`GatewayError::Timeout`].
pub async fn with_timeout<T, F>(limit: Duration, call: F) -> Result<T, GatewayError>
where
    F: Future<Output = Result<T, GatewayError>>,
{
    tokio::time::timeout(limit, call)
        .await
        .unwrap_or(Err(GatewayError::Timeout))
}

/// One independently loaded region of a page.
///
/// A failed read is logged and kept as [`LoadState::Failed`]; it never
/// escapes to the caller, so the page still renders.
#[derive(Debug, Clone, PartialEq)]
pub struct Section<T> {
    name: &'static str,
    state: LoadState<T>,
}

impl<T> Section<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: LoadState::Idle,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn value(&self) -> Option<&T> {
        self.state.value()
    }

    pub async fn load<F>(&mut self, limit: Duration, read: F)
    where
        F: Future<Output = Result<T, GatewayError>>,
    {
        self.state = LoadState::Loading;

        self.state = match with_timeout(limit, read).await {
            Ok(value) => LoadState::Ready(value),
            Err(err) => {
                log_failure!(&err, self.name);
                LoadState::Failed(err.to_string())
            }
        };
    }
}

impl<T> Section<Vec<T>> {
    /// Loaded items, or an empty slice while loading or after a failure.
    pub fn items(&self) -> &[T] {
        self.state.value().map(Vec::as_slice).unwrap_or_default()
    }
}
