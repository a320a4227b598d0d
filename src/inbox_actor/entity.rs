//! [`Row`] implementation for the inbox table.

use super::{InboxError, InboxOutput, InboxProcedure};
use crate::model::{ActorId, FeedEntry, InboxId};
use async_trait::async_trait;
use climbr_store::Row;

/// A user's notification feed.
#[derive(Debug, Clone, PartialEq)]
pub struct Inbox {
    pub id: InboxId,
    pub owner: ActorId,
    pub entries: Vec<FeedEntry>,
    next_entry: u32,
}

/// Payload for opening an inbox.
#[derive(Debug, Clone)]
pub struct InboxOpen {
    pub owner: ActorId,
}

impl Inbox {
    pub fn unread(&self) -> usize {
        self.entries.iter().filter(|entry| !entry.read).count()
    }
}

#[async_trait]
impl Row for Inbox {
    const TABLE: &'static str = "inboxes";

    type Id = InboxId;
    type Insert = InboxOpen;
    type Procedure = InboxProcedure;
    type Output = InboxOutput;
    type Context = ();
    type Error = InboxError;

    fn from_insert(id: InboxId, params: InboxOpen) -> Result<Self, InboxError> {
        if params.owner.0.trim().is_empty() {
            return Err(InboxError::EmptyOwner);
        }
        Ok(Self {
            id,
            owner: params.owner,
            entries: Vec::new(),
            next_entry: 1,
        })
    }

    async fn call(&mut self, procedure: InboxProcedure, _ctx: &()) -> Result<InboxOutput, InboxError> {
        match procedure {
            InboxProcedure::Push { title, body } => {
                let id = self.next_entry;
                self.next_entry += 1;
                self.entries.push(FeedEntry {
                    id,
                    title,
                    body,
                    read: false,
                });
                Ok(InboxOutput::Push(id))
            }
            InboxProcedure::UnreadCount => Ok(InboxOutput::UnreadCount(self.unread())),
            InboxProcedure::MarkRead(entry_id) => {
                let entry = self
                    .entries
                    .iter_mut()
                    .find(|entry| entry.id == entry_id)
                    .ok_or(InboxError::EntryNotFound(entry_id))?;
                entry.read = true;
                Ok(InboxOutput::MarkRead(()))
            }
            InboxProcedure::MarkAllRead => {
                let changed = self.unread();
                self.entries.iter_mut().for_each(|entry| entry.read = true);
                Ok(InboxOutput::MarkAllRead(changed))
            }
            InboxProcedure::Entries => {
                Ok(InboxOutput::Entries(self.entries.iter().rev().cloned().collect()))
            }
        }
    }
}
