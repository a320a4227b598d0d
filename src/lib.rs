//! # Climbr
//!
//! The engagement core behind Climbr's product cards: optimistic upvotes with rollback,
//! link sharing, follows, daily quotas, and the notifications each action produces.
//!
//! ## Design
//!
//! ### 1. Explicit inputs
//! A card controller is built from a product snapshot, the signed-in actor (or `None`),
//! and the ports it talks through. There is no ambient session: whoever renders a card
//! decides who is looking at it.
//!
//! ### 2. Optimistic upvotes
//! An upvote click captures the current values, flips the vote locally, calls the remote
//! procedure, then commits or restores the captured values. While the call is out the
//! card refuses further upvote clicks.
//!
//! ### 3. Notifications as values
//! Every terminal outcome of an action produces exactly one [`Notification`](model::Notification),
//! handed to an optional [`NotificationSink`](ports::NotificationSink). Handlers return
//! unit and never fail.
//!
//! ### 4. An in-process backend
//! The products and inbox tables run on [`climbr_store`], one Tokio task per table. The
//! products table implements the upvote procedure, so the same controller code runs
//! against it and against scripted test doubles.
//!
//! ## Module Tour
//!
//! - [`engagement`] - [`EngagementController`](engagement::EngagementController), its state, toast texts and card view.
//! - [`quota`] - [`can_perform`](quota::can_perform), the daily limit check.
//! - [`ports`] - gateway, notification sink and clipboard traits.
//! - [`model`] - products, actors and their quotas, notifications.
//! - [`product_actor`], [`inbox_actor`] - the backend tables.
//! - [`clients`] - typed clients for those tables; `ProductClient` is the production gateway.
//! - [`feed`] - the unread counter and the query-state contract.
//! - [`lifecycle`] - starting and stopping the backend, tracing setup.
//! - [`config`] - `climbr.toml` and environment overrides.
//! - [`testing`] - recording doubles for the ports.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use climbr::config::ClimbrConfig;
//! use climbr::engagement::EngagementController;
//! use climbr::lifecycle::Backend;
//! use climbr::model::{Actor, ProductSubmission};
//! use climbr::testing::RecordingSink;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClimbrConfig::default();
//!     let backend = Backend::start(&config);
//!
//!     let ana = Actor::new("ana");
//!     let id = backend.products.submit(ProductSubmission::new("Chalk")).await?;
//!     let snapshot = backend.products.snapshot(id, Some(&ana.id)).await?;
//!
//!     let sink = Arc::new(RecordingSink::new());
//!     let mut card = EngagementController::new(snapshot, Some(ana), backend.products.clone(), &config)
//!         .with_notifier(sink.clone());
//!     card.upvote().await;
//!
//!     assert_eq!(card.state().upvote_count, 1);
//!     assert_eq!(sink.titles(), vec!["Product upvoted!"]);
//!
//!     drop(card);
//!     backend.shutdown().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Everything logs through `tracing`. Call [`lifecycle::setup_tracing`] once and filter
//! with `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=climbr=debug,climbr_store=info cargo test
//! ```

pub mod clients;
pub mod config;
pub mod engagement;
pub mod feed;
pub mod inbox_actor;
pub mod lifecycle;
pub mod model;
pub mod ports;
pub mod product_actor;
pub mod quota;
pub mod testing;
