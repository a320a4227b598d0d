//! # Observability
//!
//! Log setup shared by every binary and test harness that embeds the store.
//!
//! Output is a compact `tracing-subscriber` fmt layer without module targets; each table
//! tags its lines with a `table` field instead. Verbosity comes from `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info    # table lifecycle, inserts, procedure outcomes
//! RUST_LOG=debug   # full request payloads, denials, clipboard failures
//! RUST_LOG=climbr::engagement=debug   # one module only
//! ```
//!
//! A typical upvote at `debug` reads:
//!
//! ```text
//! DEBUG Upvote issued product_id=product_1 upvoted=true
//! DEBUG Call table="products" id=product_1 procedure=ToggleUpvote { voter: ActorId("u-1") }
//!  INFO Call ok table="products" id=product_1
//!  INFO Upvote committed product_id=product_1 upvote_count=43
//! ```

/// Installs the global subscriber. Panics if one is already installed.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

/// Like [`setup_tracing`], but reports an already-installed subscriber as an error.
/// Test harnesses call this from every test.
pub fn try_setup_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init()
}
