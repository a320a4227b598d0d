//! Domain clients wrapping [`TableClient`](climbr_store::TableClient).

pub mod inbox_client;
pub mod product_client;

pub use inbox_client::*;
pub use product_client::*;
