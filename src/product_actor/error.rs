//! Error types for the products table.

use crate::inbox_actor::InboxError;
use crate::model::InboxId;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// Submissions need a display name.
    #[error("Product name must not be empty")]
    EmptyName,

    /// The submission names a maker inbox that does not exist.
    #[error("Maker inbox not found: {0}")]
    UnknownInbox(InboxId),

    #[error("Product not found: {0}")]
    NotFound(String),

    /// The inbox table failed while validating a submission.
    #[error("Inbox error: {0}")]
    Inbox(#[from] InboxError),

    /// The products table could not be reached or dropped the request.
    #[error("Products table error: {0}")]
    Store(String),
}
