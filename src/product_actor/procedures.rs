//! Procedures of the products table.

use crate::model::ActorId;
use crate::ports::UpvoteReceipt;

/// Remote procedures run against one product.
#[derive(Debug, Clone)]
pub enum ProductProcedure {
    /// Adds the voter's vote, or removes it if the voter already holds one.
    ToggleUpvote { voter: ActorId },
    /// Adds a badge. Awarding a badge the product already has is a no-op.
    AwardBadge(String),
    SetRank(Option<u32>),
}

/// Results of [`ProductProcedure`]s; variants match 1:1.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductOutput {
    ToggleUpvote(UpvoteReceipt),
    AwardBadge(()),
    SetRank(()),
}
