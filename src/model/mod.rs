//! Plain data: products, actors with their daily quotas, and notifications.

pub mod actor;
pub mod notification;
pub mod product;

pub use actor::*;
pub use notification::*;
pub use product::*;
