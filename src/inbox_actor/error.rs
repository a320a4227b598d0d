use thiserror::Error;

/// Errors raised by the inbox table or while talking to it.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InboxError {
    #[error("Inbox owner must not be empty")]
    EmptyOwner,

    #[error("Inbox not found: {0}")]
    NotFound(String),

    #[error("Feed entry {0} not found")]
    EntryNotFound(u32),

    #[error("Inbox table error: {0}")]
    Store(String),
}
