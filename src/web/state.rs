use std::time::Duration;

use internhub::common::GatewayError;
use internhub::gateway::{Gateway, MemoryGateway, PgGateway, Record, Select, Session};
use internhub::models::Collection;

use crate::web::security::SubmitGuard;

/// The store this process serves from.
pub enum Backend {
    Postgres(PgGateway),
    /// Seeded at startup when no `DATABASE_URL` is configured.
    Memory(MemoryGateway),
}

impl Gateway for Backend {
    async fn select(&self, query: &Select) -> Result<Vec<Record>, GatewayError> {
        match self {
            Self::Postgres(gateway) => gateway.select(query).await,
            Self::Memory(gateway) => gateway.select(query).await,
        }
    }

    async fn count(&self, query: &Select) -> Result<u64, GatewayError> {
        match self {
            Self::Postgres(gateway) => gateway.count(query).await,
            Self::Memory(gateway) => gateway.count(query).await,
        }
    }

    async fn insert(&self, collection: Collection, record: Record) -> Result<(), GatewayError> {
        match self {
            Self::Postgres(gateway) => gateway.insert(collection, record).await,
            Self::Memory(gateway) => gateway.insert(collection, record).await,
        }
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, GatewayError> {
        match self {
            Self::Postgres(gateway) => gateway.sign_in_with_password(email, password).await,
            Self::Memory(gateway) => gateway.sign_in_with_password(email, password).await,
        }
    }

    async fn sign_out(&self, token: &str) -> Result<(), GatewayError> {
        match self {
            Self::Postgres(gateway) => gateway.sign_out(token).await,
            Self::Memory(gateway) => gateway.sign_out(token).await,
        }
    }

    async fn get_session(&self, token: &str) -> Result<Option<Session>, GatewayError> {
        match self {
            Self::Postgres(gateway) => gateway.get_session(token).await,
            Self::Memory(gateway) => gateway.get_session(token).await,
        }
    }
}

pub struct AppState {
    pub gateway: Backend,
    /// Applied to every gateway call made while serving a request.
    pub timeout: Duration,
    pub cookie_secure: bool,
    /// One-time tokens for the public submission forms.
    pub submissions: SubmitGuard,
}

impl AppState {
    pub fn new(gateway: Backend, timeout: Duration, cookie_secure: bool) -> Self {
        Self {
            gateway,
            timeout,
            cookie_secure,
            submissions: SubmitGuard::default(),
        }
    }
}
