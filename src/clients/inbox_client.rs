//! # Inbox Client
//!
//! Typed access to the inbox table.

use crate::inbox_actor::{Inbox, InboxError, InboxOpen, InboxOutput, InboxProcedure};
use crate::model::{ActorId, FeedEntry, InboxId};
use async_trait::async_trait;
use climbr_store::{StoreError, TableClient, TableHandle};
use tracing::{debug, instrument};

/// Client for the inbox table.
#[derive(Clone)]
pub struct InboxClient {
    inner: TableClient<Inbox>,
}

impl InboxClient {
    pub fn new(inner: TableClient<Inbox>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl TableHandle<Inbox> for InboxClient {
    type Error = InboxError;

    fn inner(&self) -> &TableClient<Inbox> {
        &self.inner
    }

    /// Row errors come back as the [`InboxError`] the row raised.
    fn map_error(e: StoreError) -> InboxError {
        match e {
            StoreError::RowError(inner) => match inner.downcast::<InboxError>() {
                Ok(error) => *error,
                Err(other) => InboxError::Store(other.to_string()),
            },
            StoreError::NotFound(id) => InboxError::NotFound(id),
            other => InboxError::Store(other.to_string()),
        }
    }
}

impl InboxClient {
    #[instrument(skip(self))]
    pub async fn open(&self, owner: ActorId) -> Result<InboxId, InboxError> {
        debug!("Opening inbox");
        self.inner
            .insert(InboxOpen { owner })
            .await
            .map_err(Self::map_error)
    }

    async fn run(&self, inbox: InboxId, procedure: InboxProcedure) -> Result<InboxOutput, InboxError> {
        self.inner
            .call(inbox, procedure)
            .await
            .map_err(Self::map_error)
    }

    /// Appends an unread entry and returns its id.
    #[instrument(skip(self, title, body))]
    pub async fn push(
        &self,
        inbox: InboxId,
        title: impl Into<String> + Send,
        body: impl Into<String> + Send,
    ) -> Result<u32, InboxError> {
        let procedure = InboxProcedure::Push {
            title: title.into(),
            body: body.into(),
        };
        match self.run(inbox, procedure).await? {
            InboxOutput::Push(entry) => Ok(entry),
            _ => unreachable!("Push procedure must return Push output"),
        }
    }

    #[instrument(skip(self))]
    pub async fn unread_count(&self, inbox: InboxId) -> Result<usize, InboxError> {
        match self.run(inbox, InboxProcedure::UnreadCount).await? {
            InboxOutput::UnreadCount(count) => Ok(count),
            _ => unreachable!("UnreadCount procedure must return UnreadCount output"),
        }
    }

    #[instrument(skip(self))]
    pub async fn mark_read(&self, inbox: InboxId, entry: u32) -> Result<(), InboxError> {
        match self.run(inbox, InboxProcedure::MarkRead(entry)).await? {
            InboxOutput::MarkRead(()) => Ok(()),
            _ => unreachable!("MarkRead procedure must return MarkRead output"),
        }
    }

    /// Returns how many entries were unread.
    #[instrument(skip(self))]
    pub async fn mark_all_read(&self, inbox: InboxId) -> Result<usize, InboxError> {
        match self.run(inbox, InboxProcedure::MarkAllRead).await? {
            InboxOutput::MarkAllRead(changed) => Ok(changed),
            _ => unreachable!("MarkAllRead procedure must return MarkAllRead output"),
        }
    }

    #[instrument(skip(self))]
    pub async fn entries(&self, inbox: InboxId) -> Result<Vec<FeedEntry>, InboxError> {
        match self.run(inbox, InboxProcedure::Entries).await? {
            InboxOutput::Entries(entries) => Ok(entries),
            _ => unreachable!("Entries procedure must return Entries output"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use climbr_store::mock::{create_mock_client, expect_call, MockClient};

    #[tokio::test]
    async fn test_unread_count_returns_count() {
        let (client, mut receiver) = create_mock_client::<Inbox>(10);
        let inboxes = InboxClient::new(client);

        let task = tokio::spawn(async move { inboxes.unread_count(InboxId(1)).await });

        let (id, procedure, reply) = expect_call(&mut receiver)
            .await
            .expect("Expected Call request");
        assert_eq!(id, InboxId(1));
        assert!(matches!(procedure, InboxProcedure::UnreadCount));
        reply.send(Ok(InboxOutput::UnreadCount(4))).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), 4);
    }

    #[tokio::test]
    async fn test_row_error_is_recovered() {
        let mut mock = MockClient::<Inbox>::new();
        mock.expect_call(InboxId(1))
            .return_err(StoreError::RowError(Box::new(InboxError::EntryNotFound(7))));
        let inboxes = InboxClient::new(mock.client());

        let err = inboxes.mark_read(InboxId(1), 7).await.unwrap_err();
        assert_eq!(err, InboxError::EntryNotFound(7));
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_table_is_a_store_error() {
        let mut mock = MockClient::<Inbox>::new();
        mock.expect_call(InboxId(1)).return_err(StoreError::TableClosed);
        let inboxes = InboxClient::new(mock.client());

        let err = inboxes.entries(InboxId(1)).await.unwrap_err();
        assert!(matches!(err, InboxError::Store(_)));
        mock.verify();
    }
}
