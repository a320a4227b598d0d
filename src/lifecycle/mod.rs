//! # Backend Lifecycle
//!
//! Starts the in-process tables, wires their dependencies, and shuts them down.
//!
//! Tables are created first and receive their dependencies when spawned, so the products
//! table gets the inbox client as its context without either table knowing about the
//! other at construction time.
//!
//! ## Shutdown
//!
//! 1. Drop every client, closing the request channels.
//! 2. Each table sees its channel close and leaves its loop.
//! 3. Await the tasks. Products go first: they hold an inbox client in their context, so
//!    the inbox table can only stop after them.
//!
//! Clones of the clients held elsewhere keep their tables alive; drop them before calling
//! [`Backend::shutdown`].

pub mod backend;

pub use backend::*;
pub use climbr_store::tracing::{setup_tracing, try_setup_tracing};
