//! # Row Trait
//!
//! The contract a row type implements to live in a [`TableActor`](crate::TableActor).
//!
//! Associated types pin down, per table, what an insert payload looks like, which remote
//! procedures exist and what they return. A `products` table can only be sent a product
//! submission and can only run product procedures; the compiler rejects anything else.
//!
//! # Provided Methods
//! [`Row::on_insert`] defaults to `Ok(())`. Override it when an insert has to be checked
//! against another table.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A row type managed by a [`TableActor`](crate::TableActor).
///
/// # Async & Context
/// Hooks are async so a row can consult other tables while handling a request. The
/// `Context` associated type carries those dependencies; it is supplied once to
/// [`TableActor::run`](crate::TableActor::run) and lent to every hook.
#[async_trait]
pub trait Row: Clone + Send + Sync + 'static {
    /// Table name used in log fields (e.g. `"products"`).
    const TABLE: &'static str;

    /// Row identifier. Generated by the table from a monotonically increasing `u32`.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload of an insert.
    type Insert: Send + Sync + Debug;

    /// Remote procedures that can run against one row.
    type Procedure: Send + Sync + Debug;

    /// Result of a remote procedure.
    type Output: Send + Sync + Debug;

    /// Dependencies injected at `run()` time. Use `()` for none.
    type Context: Send + Sync;

    /// Row-level error. One enum per table covers every procedure.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the row from its freshly assigned id and the insert payload.
    fn from_insert(id: Self::Id, params: Self::Insert) -> Result<Self, Self::Error>;

    /// Runs after `from_insert` and before the row becomes visible.
    async fn on_insert(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Run a remote procedure against this row.
    async fn call(
        &mut self,
        procedure: Self::Procedure,
        ctx: &Self::Context,
    ) -> Result<Self::Output, Self::Error>;
}
