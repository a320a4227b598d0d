//! # Climbr Store
//!
//! An in-process stand-in for the hosted backend that Climbr talks to. Each table is a
//! Tokio task that exclusively owns its rows and serves three kinds of request:
//!
//! - **insert**: validate a payload, assign the next id, run the `on_insert` hook.
//! - **select**: read a copy of one row by id.
//! - **call**: run a remote procedure against one row (e.g. the upvote toggle).
//!
//! Requests travel over an mpsc channel and replies come back on a oneshot channel, so a
//! table processes one request at a time and its rows never need a lock. That is the same
//! guarantee the hosted procedure gives us: a toggle on a row is atomic with respect to
//! every other request on that row.
//!
//! ## Layers
//!
//! 1. **Row layer** ([`Row`]) - the schema and procedures of one table.
//! 2. **Runtime layer** ([`TableActor`]) - the request loop.
//! 3. **Interface layer** ([`TableClient`], [`TableHandle`]) - typed access for callers.
//!
//! ## Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use climbr_store::{Row, TableActor};
//!
//! #[derive(Clone, Debug)]
//! struct Counter { id: u32, hits: u64 }
//!
//! #[derive(Debug)] struct NewCounter;
//! #[derive(Debug)] enum CounterCall { Hit }
//! #[derive(Debug, thiserror::Error)] #[error("counter error")] struct CounterError;
//!
//! #[async_trait]
//! impl Row for Counter {
//!     const TABLE: &'static str = "counters";
//!     type Id = u32;
//!     type Insert = NewCounter;
//!     type Procedure = CounterCall;
//!     type Output = u64;
//!     type Context = ();
//!     type Error = CounterError;
//!
//!     fn from_insert(id: u32, _: NewCounter) -> Result<Self, Self::Error> {
//!         Ok(Self { id, hits: 0 })
//!     }
//!
//!     async fn call(&mut self, call: CounterCall, _: &()) -> Result<u64, Self::Error> {
//!         match call {
//!             CounterCall::Hit => { self.hits += 1; Ok(self.hits) }
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (table, client) = TableActor::<Counter>::new(8);
//!     tokio::spawn(table.run(()));
//!
//!     let id = client.insert(NewCounter).await.unwrap();
//!     assert_eq!(client.call(id, CounterCall::Hit).await.unwrap(), 1);
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies (usually clients of other tables) are passed to [`TableActor::run`], not to
//! [`TableActor::new`]. All tables can be created first and wired afterwards, which is how
//! the products table receives the inbox client it notifies makers through.
//!
//! ## Testing
//!
//! [`mock::MockClient`] serves a [`TableClient`] from a queue of canned replies so callers
//! can be tested against failures that are awkward to provoke with a real table.

pub mod client;
pub mod error;
pub mod handle;
pub mod message;
pub mod mock;
pub mod row;
pub mod table;
pub mod tracing;

pub use client::TableClient;
pub use error::StoreError;
pub use handle::TableHandle;
pub use message::{Reply, TableRequest};
pub use row::Row;
pub use table::TableActor;
