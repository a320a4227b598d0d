//! Boundaries between the engagement core and the outside world.
//!
//! The controller depends only on these traits. Production wires them to the hosted
//! backend, the browser clipboard and the toast layer; tests wire them to the recorders in
//! [`crate::testing`].

use crate::model::{ActorId, Notification, ProductId};
use async_trait::async_trait;
use tracing::{info, warn};

/// What the backend reports after a toggle: the durable count and whether the voter now
/// holds a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpvoteReceipt {
    pub upvotes: i64,
    pub upvoted: bool,
}

/// Failure of the upvote procedure.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum GatewayError {
    /// The backend ran the procedure and refused it.
    #[error("Upvote rejected: {0}")]
    Rejected(String),
    /// The backend could not be reached or did not answer.
    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

/// The remote procedure that durably toggles a vote.
///
/// Implementations guarantee at most one vote per (voter, product): calling it for a voter
/// who already holds a vote removes that vote.
#[async_trait]
pub trait UpvoteGateway: Send + Sync {
    async fn toggle_upvote(
        &self,
        product: &ProductId,
        voter: &ActorId,
    ) -> Result<UpvoteReceipt, GatewayError>;
}

/// Receiver of toasts. Must not panic; the controller treats a missing sink as a no-op.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Failure of a clipboard write.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard unavailable")]
    Unavailable,
    #[error("Clipboard write denied: {0}")]
    Denied(String),
}

/// Best-effort text clipboard.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// A sink that writes every toast to the log. Useful for headless embeddings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notification: Notification) {
        if notification.is_destructive() {
            warn!(title = %notification.title, description = %notification.description, "Notification");
        } else {
            info!(title = %notification.title, description = %notification.description, "Notification");
        }
    }
}
