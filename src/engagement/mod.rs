//! Per-card engagement: optimistic upvotes, shares and follows.

pub mod controller;
pub mod messages;
pub mod state;
pub mod view;

pub use controller::EngagementController;
pub use messages::Denial;
pub use state::{EngagementState, PendingUpvote, UpvoteCheckpoint};
pub use view::{badge_variant, BadgeVariant, BadgeView, CardView};
