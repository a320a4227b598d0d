//! Daily-limit checks.
//!
//! A pure decision over the actor's quota snapshot. The backend owns and enforces the
//! counters; this check only spares the user a request that is bound to be refused.

use crate::model::{ActionKind, Actor};

/// Outcome of a quota check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotaDecision {
    Allowed,
    /// The daily limit for the kind is exhausted; carries the limit for messaging.
    Denied { max: u32 },
}

impl QuotaDecision {
    pub fn is_allowed(self) -> bool {
        self == QuotaDecision::Allowed
    }
}

/// Whether `actor` may perform `kind` now.
///
/// Allowed when there is no actor, when the actor has no limits at all, when the limit for
/// `kind` is not recorded, or when `used < max`. Denied when `used >= max`, including a
/// limit of zero.
pub fn can_perform(kind: ActionKind, actor: Option<&Actor>) -> QuotaDecision {
    match actor.and_then(|actor| actor.quota(kind)) {
        Some(quota) if quota.used >= quota.max => QuotaDecision::Denied { max: quota.max },
        _ => QuotaDecision::Allowed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DailyLimits, Quota};

    fn actor_with(kind: ActionKind, used: u32, max: u32) -> Actor {
        Actor::new("u-1").with_limits(DailyLimits::default().with(kind, Quota::new(used, max)))
    }

    #[test]
    fn test_anonymous_is_allowed() {
        assert_eq!(can_perform(ActionKind::Sharing, None), QuotaDecision::Allowed);
    }

    #[test]
    fn test_missing_limits_are_unlimited() {
        let bare = Actor::new("u-1");
        let empty = Actor::new("u-1").with_limits(DailyLimits::default());
        for kind in [
            ActionKind::Upvoting,
            ActionKind::Sharing,
            ActionKind::Following,
            ActionKind::Commenting,
        ] {
            assert!(can_perform(kind, Some(&bare)).is_allowed());
            assert!(can_perform(kind, Some(&empty)).is_allowed());
        }
    }

    #[test]
    fn test_under_limit_is_allowed() {
        let actor = actor_with(ActionKind::Upvoting, 9, 10);
        assert_eq!(can_perform(ActionKind::Upvoting, Some(&actor)), QuotaDecision::Allowed);
    }

    #[test]
    fn test_at_or_over_limit_is_denied_with_max() {
        for max in [0, 1, 5, 1000] {
            let actor = actor_with(ActionKind::Upvoting, max, max);
            assert_eq!(
                can_perform(ActionKind::Upvoting, Some(&actor)),
                QuotaDecision::Denied { max }
            );
        }
        let over = actor_with(ActionKind::Following, 7, 3);
        assert_eq!(
            can_perform(ActionKind::Following, Some(&over)),
            QuotaDecision::Denied { max: 3 }
        );
    }

    #[test]
    fn test_limits_are_per_kind() {
        let actor = actor_with(ActionKind::Sharing, 5, 5);
        assert!(!can_perform(ActionKind::Sharing, Some(&actor)).is_allowed());
        assert!(can_perform(ActionKind::Upvoting, Some(&actor)).is_allowed());
    }
}
