//! Recording doubles for the ports in [`crate::ports`].
//!
//! All doubles are cheap to clone and share their recordings between clones, so a test
//! can hand one clone to the controller and keep another to assert on.

use crate::model::{ActorId, Notification, ProductId};
use crate::ports::{
    Clipboard, ClipboardError, GatewayError, NotificationSink, UpvoteGateway, UpvoteReceipt,
};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Keeps every notification it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    received: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        lock(&self.received).clone()
    }

    pub fn titles(&self) -> Vec<String> {
        lock(&self.received)
            .iter()
            .map(|n| n.title.clone())
            .collect()
    }

    /// Returns the recorded notifications and clears the record.
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *lock(&self.received))
    }

    pub fn len(&self) -> usize {
        lock(&self.received).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: Notification) {
        lock(&self.received).push(notification);
    }
}

/// A clipboard that accepts every write.
#[derive(Debug, Clone, Default)]
pub struct RecordingClipboard {
    writes: Arc<Mutex<Vec<String>>>,
}

impl RecordingClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> Vec<String> {
        lock(&self.writes).clone()
    }
}

#[async_trait]
impl Clipboard for RecordingClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        lock(&self.writes).push(text.to_string());
        Ok(())
    }
}

/// A clipboard that refuses every write and counts the attempts.
#[derive(Debug, Clone, Default)]
pub struct FailingClipboard {
    attempts: Arc<Mutex<usize>>,
}

impl FailingClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempts(&self) -> usize {
        *lock(&self.attempts)
    }
}

#[async_trait]
impl Clipboard for FailingClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        *lock(&self.attempts) += 1;
        Err(ClipboardError::Denied("document is not focused".into()))
    }
}

/// An [`UpvoteGateway`] that answers from a script.
///
/// Queued results are returned in order; once the queue is empty every call gets the
/// fallback, which is a successful toggle unless built with [`ScriptedGateway::failing`].
#[derive(Debug, Clone)]
pub struct ScriptedGateway {
    script: Arc<Mutex<VecDeque<Result<UpvoteReceipt, GatewayError>>>>,
    fallback: Result<UpvoteReceipt, GatewayError>,
    calls: Arc<Mutex<Vec<(ProductId, ActorId)>>>,
}

impl Default for ScriptedGateway {
    fn default() -> Self {
        Self {
            script: Arc::default(),
            fallback: Ok(UpvoteReceipt {
                upvotes: 0,
                upvoted: true,
            }),
            calls: Arc::default(),
        }
    }
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// A gateway whose every call fails with `error`.
    pub fn failing(error: GatewayError) -> Self {
        Self {
            fallback: Err(error),
            ..Self::default()
        }
    }

    pub fn push(&self, result: Result<UpvoteReceipt, GatewayError>) {
        lock(&self.script).push_back(result);
    }

    pub fn calls(&self) -> Vec<(ProductId, ActorId)> {
        lock(&self.calls).clone()
    }
}

#[async_trait]
impl UpvoteGateway for ScriptedGateway {
    async fn toggle_upvote(
        &self,
        product: &ProductId,
        voter: &ActorId,
    ) -> Result<UpvoteReceipt, GatewayError> {
        lock(&self.calls).push((product.clone(), voter.clone()));
        let next = lock(&self.script).pop_front();
        next.unwrap_or_else(|| self.fallback.clone())
    }
}
