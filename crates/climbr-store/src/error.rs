//! # Store Errors
//!
//! Failures of the table runtime itself, plus a wrapper for errors raised by a row.

/// Errors surfaced by a [`TableClient`](crate::TableClient).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Table closed")]
    TableClosed,
    #[error("Table dropped the reply channel")]
    ReplyDropped,
    #[error("Row not found: {0}")]
    NotFound(String),
    #[error("Row error: {0}")]
    RowError(Box<dyn std::error::Error + Send + Sync>),
}
