//! # Notification Feed
//!
//! Client-side view of an inbox: the unread badge on the notification bell.
//!
//! Every query in this crate reports its progress as a [`QueryState`]. A mutation never
//! patches the cached value; it marks it stale and the value is fetched again.

use crate::clients::InboxClient;
use crate::inbox_actor::InboxError;
use crate::model::InboxId;
use tracing::{debug, warn};

/// Progress of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryState<T> {
    /// Nothing fetched yet.
    Pending,
    Success(T),
    /// The last fetch failed; holds the rendered error.
    Error(String),
}

impl<T> QueryState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, QueryState::Pending)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, QueryState::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, QueryState::Error(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Success(data) => Some(data),
            _ => None,
        }
    }
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        QueryState::Pending
    }
}

/// Cached unread count of one inbox.
pub struct UnreadCounter {
    inboxes: InboxClient,
    inbox: InboxId,
    state: QueryState<usize>,
    stale: bool,
}

impl UnreadCounter {
    pub fn new(inboxes: InboxClient, inbox: InboxId) -> Self {
        Self {
            inboxes,
            inbox,
            state: QueryState::Pending,
            stale: true,
        }
    }

    pub fn state(&self) -> &QueryState<usize> {
        &self.state
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Fetches the count, replacing the cached state.
    pub async fn refresh(&mut self) -> &QueryState<usize> {
        self.state = match self.inboxes.unread_count(self.inbox).await {
            Ok(count) => {
                debug!(inbox = %self.inbox, count, "Unread count fetched");
                QueryState::Success(count)
            }
            Err(e) => {
                warn!(inbox = %self.inbox, error = %e, "Unread count fetch failed");
                QueryState::Error(e.to_string())
            }
        };
        self.stale = false;
        &self.state
    }

    /// Marks the cached count stale. The current value stays readable until the next fetch.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Fetches only when the cached count is stale.
    pub async fn ensure_fresh(&mut self) -> &QueryState<usize> {
        if self.stale {
            return self.refresh().await;
        }
        &self.state
    }

    pub async fn mark_read(&mut self, entry: u32) -> Result<(), InboxError> {
        self.inboxes.mark_read(self.inbox, entry).await?;
        self.invalidate();
        self.refresh().await;
        Ok(())
    }

    /// Returns how many entries were unread before the call.
    pub async fn mark_all_read(&mut self) -> Result<usize, InboxError> {
        let changed = self.inboxes.mark_all_read(self.inbox).await?;
        self.invalidate();
        self.refresh().await;
        Ok(changed)
    }
}
