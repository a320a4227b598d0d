use crate::model::{ActorId, ProductId, ProductSnapshot};

/// Interaction state of one product card.
///
/// Created from the product snapshot when the card is built and dropped with the card.
/// `upvote_count` moves by exactly one whenever `has_upvoted` flips, and is never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngagementState {
    pub upvote_count: i64,
    pub has_upvoted: bool,
    pub is_following: bool,
    pub is_mutation_in_flight: bool,
}

impl EngagementState {
    pub fn from_snapshot(snapshot: &ProductSnapshot) -> Self {
        Self {
            upvote_count: snapshot.upvotes,
            has_upvoted: snapshot.viewer_has_upvoted(),
            is_following: false,
            is_mutation_in_flight: false,
        }
    }

    /// Flips the vote optimistically and marks a mutation in flight. Returns the values
    /// from before the flip.
    pub(crate) fn apply_toggle(&mut self) -> UpvoteCheckpoint {
        let checkpoint = UpvoteCheckpoint {
            upvote_count: self.upvote_count,
            has_upvoted: self.has_upvoted,
        };
        self.has_upvoted = !self.has_upvoted;
        self.upvote_count += if self.has_upvoted { 1 } else { -1 };
        self.is_mutation_in_flight = true;
        checkpoint
    }

    pub(crate) fn commit(&mut self) {
        self.is_mutation_in_flight = false;
    }

    pub(crate) fn revert(&mut self, checkpoint: UpvoteCheckpoint) {
        self.upvote_count = checkpoint.upvote_count;
        self.has_upvoted = checkpoint.has_upvoted;
        self.is_mutation_in_flight = false;
    }
}

/// Upvote values captured right before an optimistic toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpvoteCheckpoint {
    pub upvote_count: i64,
    pub has_upvoted: bool,
}

/// An issued upvote mutation awaiting its result.
///
/// Handed out by [`EngagementController::begin_upvote`](super::EngagementController::begin_upvote)
/// and consumed by `settle_upvote`, so each mutation settles exactly once.
#[derive(Debug)]
#[must_use = "an issued upvote must be settled or the card stays disabled"]
pub struct PendingUpvote {
    pub(crate) product: ProductId,
    pub(crate) voter: ActorId,
    pub(crate) checkpoint: UpvoteCheckpoint,
}

impl PendingUpvote {
    pub fn product(&self) -> &ProductId {
        &self.product
    }

    pub fn voter(&self) -> &ActorId {
        &self.voter
    }

    /// Whether the vote existed before this toggle (i.e. the toggle removes it).
    pub fn was_upvoted(&self) -> bool {
        self.checkpoint.has_upvoted
    }

    pub fn checkpoint(&self) -> UpvoteCheckpoint {
        self.checkpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_snapshot_gives_same_initial_state() {
        let snapshot = ProductSnapshot::new(ProductId(1), "Chalk", 42, Some(true));
        let first = EngagementState::from_snapshot(&snapshot);
        let second = EngagementState::from_snapshot(&snapshot);
        assert_eq!(first, second);
        assert_eq!(first.upvote_count, 42);
        assert!(first.has_upvoted);
        assert!(!first.is_following);
        assert!(!first.is_mutation_in_flight);
    }

    #[test]
    fn test_negative_counts_are_kept() {
        let state = EngagementState::from_snapshot(&ProductSnapshot::new(ProductId(1), "Chalk", -5, None));
        assert_eq!(state.upvote_count, -5);
        assert!(!state.has_upvoted);
    }

    #[test]
    fn test_toggle_then_revert_restores_checkpoint() {
        let mut state = EngagementState::from_snapshot(&ProductSnapshot::new(ProductId(1), "Chalk", 0, None));
        let checkpoint = state.apply_toggle();
        assert_eq!(state.upvote_count, 1);
        assert!(state.has_upvoted);
        assert!(state.is_mutation_in_flight);

        state.revert(checkpoint);
        assert_eq!(state.upvote_count, 0);
        assert!(!state.has_upvoted);
        assert!(!state.is_mutation_in_flight);
    }

    #[test]
    fn test_removing_a_vote_can_go_negative() {
        let mut state =
            EngagementState::from_snapshot(&ProductSnapshot::new(ProductId(1), "Chalk", 0, Some(true)));
        state.apply_toggle();
        state.commit();
        assert_eq!(state.upvote_count, -1);
        assert!(!state.has_upvoted);
        assert!(!state.is_mutation_in_flight);
    }
}
