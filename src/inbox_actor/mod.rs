//! # Inbox Table
//!
//! One inbox per actor, holding the feed entries shown in the notification bell.
//!
//! ## Structure
//!
//! - [`entity`] - [`Row`](climbr_store::Row) implementation for [`Inbox`]
//! - [`procedures`] - [`InboxProcedure`] and its 1:1 [`InboxOutput`]
//! - [`error`] - [`InboxError`]
//! - [`new()`] - creates the table and its domain client
//!
//! The table has no dependencies, so it runs with a unit context:
//!
//! ```rust
//! use climbr::inbox_actor;
//! use climbr::model::ActorId;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (table, inboxes) = inbox_actor::new(8);
//!     tokio::spawn(table.run(()));
//!
//!     let inbox = inboxes.open(ActorId::from("maker")).await?;
//!     inboxes.push(inbox, "New upvote", "Chalk was upvoted.").await?;
//!     assert_eq!(inboxes.unread_count(inbox).await?, 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;
pub mod procedures;

pub use entity::*;
pub use error::*;
pub use procedures::*;

use crate::clients::InboxClient;
use climbr_store::TableActor;

/// Creates the inbox table and its client.
pub fn new(buffer_size: usize) -> (TableActor<Inbox>, InboxClient) {
    let (table, inner) = TableActor::new(buffer_size);
    (table, InboxClient::new(inner))
}
