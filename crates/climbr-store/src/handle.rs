//! # TableHandle Trait
//!
//! Shared plumbing for domain clients that wrap a [`TableClient`].
use crate::{Row, StoreError, TableClient};
use async_trait::async_trait;

/// Implemented by domain clients (e.g. `ProductClient`) to get a typed `select` for free
/// and to fix how store failures map into the domain's error type.
///
/// ```rust
/// use async_trait::async_trait;
/// use climbr_store::{Row, StoreError, TableClient, TableHandle};
///
/// #[derive(Clone, Debug)] struct Tag { id: u32 }
/// #[derive(Debug)] struct NewTag;
/// #[derive(Debug)] enum TagCall {}
/// #[derive(Debug, thiserror::Error)] #[error("tag error: {0}")] struct TagError(String);
///
/// #[async_trait]
/// impl Row for Tag {
///     const TABLE: &'static str = "tags";
///     type Id = u32; type Insert = NewTag; type Procedure = TagCall;
///     type Output = (); type Context = (); type Error = TagError;
///     fn from_insert(id: u32, _: NewTag) -> Result<Self, Self::Error> { Ok(Self { id }) }
///     async fn call(&mut self, c: TagCall, _: &()) -> Result<(), Self::Error> { match c {} }
/// }
///
/// struct TagClient { inner: TableClient<Tag> }
///
/// impl TableHandle<Tag> for TagClient {
///     type Error = TagError;
///     fn inner(&self) -> &TableClient<Tag> { &self.inner }
///     fn map_error(e: StoreError) -> TagError { TagError(e.to_string()) }
/// }
///
/// async fn usage(tags: TagClient) {
///     let _ = tags.select(1).await;
/// }
/// ```
#[async_trait]
pub trait TableHandle<T: Row>: Send + Sync {
    /// The domain error type.
    type Error: Send + Sync;

    /// The wrapped generic client.
    fn inner(&self) -> &TableClient<T>;

    /// Map store failures into the domain error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a row by id.
    #[tracing::instrument(skip(self))]
    async fn select(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!(table = T::TABLE, "Sending select");
        self.inner().select(id).await.map_err(Self::map_error)
    }
}
