use std::time::Duration;

use tokio::time::Instant;

use super::{Draft, FormFlow};
use crate::common::FormError;
use crate::gateway::Gateway;

/// A dialog over a list: closed, or open on exactly one selected item.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Modal<T> {
    #[default]
    Closed,
    Open(T),
}

impl<T> Modal<T> {
    /// Opening replaces whatever was open before.
    pub fn open(&mut self, item: T) {
        *self = Self::Open(item);
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn selected(&self) -> Option<&T> {
        match self {
            Self::Open(item) => Some(item),
            Self::Closed => None,
        }
    }
}

/// A modal whose form submits against the selected item.
pub struct ModalForm<T, D: Draft> {
    modal: Modal<T>,
    form: FormFlow<D>,
    parent_of: fn(&T) -> D::Parent,
}

impl<T, D: Draft> ModalForm<T, D> {
    pub fn new(dwell: Duration, parent_of: fn(&T) -> D::Parent) -> Self {
        Self {
            modal: Modal::Closed,
            form: FormFlow::new(dwell),
            parent_of,
        }
    }

    pub fn open(&mut self, item: T) {
        self.form.bind_parent((self.parent_of)(&item));
        self.modal.open(item);
    }

    pub fn close(&mut self) {
        self.modal.close();
        self.form.clear_parent();
    }

    pub fn modal(&self) -> &Modal<T> {
        &self.modal
    }

    pub fn selected(&self) -> Option<&T> {
        self.modal.selected()
    }

    pub fn is_open(&self) -> bool {
        self.modal.is_open()
    }

    pub fn form(&self) -> &FormFlow<D> {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormFlow<D> {
        &mut self.form
    }

    pub async fn submit<G: Gateway>(&mut self, gateway: &G, limit: Duration) -> Result<(), FormError> {
        if !self.modal.is_open() {
            return Err(FormError::NoParent);
        }
        self.form.submit(gateway, limit).await
    }

    /// Closes the dialog when the form resets after its acknowledgment.
    pub fn poll(&mut self, now: Instant) -> bool {
        let reset = self.form.poll(now);
        if reset {
            self.close();
        }
        reset
    }

    pub async fn settle(&mut self) -> bool {
        let reset = self.form.settle().await;
        if reset {
            self.close();
        }
        reset
    }
}
