//! # Products Table
//!
//! Submitted products and the upvote procedure that backs the card's upvote button.
//!
//! ## Structure
//!
//! - [`entity`] - [`Row`](climbr_store::Row) implementation for [`Product`]
//! - [`procedures`] - [`ProductProcedure`] and its 1:1 [`ProductOutput`]
//! - [`error`] - [`ProductError`]
//! - [`new()`] - creates the table and its domain client
//!
//! The table needs an [`InboxClient`](crate::clients::InboxClient) as its context:
//!
//! ```rust
//! use climbr::model::{ActorId, ProductSubmission};
//! use climbr::{inbox_actor, product_actor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (inbox_table, inboxes) = inbox_actor::new(8);
//!     let (product_table, products) = product_actor::new(8);
//!     tokio::spawn(inbox_table.run(()));
//!     tokio::spawn(product_table.run(inboxes.clone()));
//!
//!     let maker = inboxes.open(ActorId::from("maker")).await?;
//!     let id = products
//!         .submit(ProductSubmission::new("Chalk").with_maker_inbox(maker))
//!         .await?;
//!
//!     let receipt = products.toggle_upvote(id, ActorId::from("ana")).await?;
//!     assert!(receipt.upvoted);
//!     assert_eq!(inboxes.unread_count(maker).await?, 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;
pub mod procedures;

pub use error::*;
pub use procedures::*;

use crate::clients::ProductClient;
use crate::model::Product;
use climbr_store::TableActor;

/// Creates the products table and its client.
pub fn new(buffer_size: usize) -> (TableActor<Product>, ProductClient) {
    let (table, inner) = TableActor::new(buffer_size);
    (table, ProductClient::new(inner))
}
