//! # Table Requests
//!
//! The messages a [`TableClient`](crate::TableClient) sends to a
//! [`TableActor`](crate::TableActor).

use crate::error::StoreError;
use crate::row::Row;
use tokio::sync::oneshot;

/// One-shot reply channel used by every request.
pub type Reply<T> = oneshot::Sender<Result<T, StoreError>>;

/// A request against a table of `T` rows.
///
/// - **Insert**: validate the payload, assign an id, store the row.
/// - **Select**: read one row by id.
/// - **Call**: run a [`Row::Procedure`] against one row.
#[derive(Debug)]
pub enum TableRequest<T: Row> {
    Insert {
        params: T::Insert,
        respond_to: Reply<T::Id>,
    },
    Select {
        id: T::Id,
        respond_to: Reply<Option<T>>,
    },
    Call {
        id: T::Id,
        procedure: T::Procedure,
        respond_to: Reply<T::Output>,
    },
}

impl<T: Row> TableRequest<T> {
    /// Short name of the request kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            TableRequest::Insert { .. } => "insert",
            TableRequest::Select { .. } => "select",
            TableRequest::Call { .. } => "call",
        }
    }
}
