//! # Table Client
//!
//! The caller side of a table.

use crate::error::StoreError;
use crate::message::TableRequest;
use crate::row::Row;
use tokio::sync::{mpsc, oneshot};

/// Typed, cloneable handle for sending requests to a [`TableActor`](crate::TableActor).
///
/// Holds only the channel sender, so clones are cheap and can be moved into other tasks.
/// Every method resolves once the table has replied.
pub struct TableClient<T: Row> {
    sender: mpsc::Sender<TableRequest<T>>,
}

impl<T: Row> Clone for TableClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Row> TableClient<T> {
    pub fn new(sender: mpsc::Sender<TableRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn insert(&self, params: T::Insert) -> Result<T::Id, StoreError> {
        let (respond_to, reply) = oneshot::channel();
        self.sender
            .send(TableRequest::Insert { params, respond_to })
            .await
            .map_err(|_| StoreError::TableClosed)?;
        reply.await.map_err(|_| StoreError::ReplyDropped)?
    }

    pub async fn select(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        let (respond_to, reply) = oneshot::channel();
        self.sender
            .send(TableRequest::Select { id, respond_to })
            .await
            .map_err(|_| StoreError::TableClosed)?;
        reply.await.map_err(|_| StoreError::ReplyDropped)?
    }

    /// Run a remote procedure against the row `id`.
    pub async fn call(&self, id: T::Id, procedure: T::Procedure) -> Result<T::Output, StoreError> {
        let (respond_to, reply) = oneshot::channel();
        self.sender
            .send(TableRequest::Call {
                id,
                procedure,
                respond_to,
            })
            .await
            .map_err(|_| StoreError::TableClosed)?;
        reply.await.map_err(|_| StoreError::ReplyDropped)?
    }
}
