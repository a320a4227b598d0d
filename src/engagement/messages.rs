//! Toast texts for every terminal outcome of a card action.

use crate::model::{ActionKind, Notification};

/// Why an action was refused before anything was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Denial {
    #[error("Please log in to upvote products.")]
    LoginRequired,
    #[error("You've reached your daily limit of {max} {noun}.", noun = .kind.noun())]
    LimitReached { kind: ActionKind, max: u32 },
}

impl Denial {
    pub fn title(&self) -> &'static str {
        match self {
            Denial::LoginRequired => "Login required",
            Denial::LimitReached { kind, .. } => match kind {
                ActionKind::Upvoting => "Upvote Limit Reached",
                ActionKind::Sharing => "Sharing Limit Reached",
                ActionKind::Following => "Following Limit Reached",
                ActionKind::Commenting => "Commenting Limit Reached",
            },
        }
    }

    pub fn notification(&self) -> Notification {
        Notification::destructive(self.title(), self.to_string())
    }
}

/// Confirmation of a settled upvote. Worded after the action taken, so `was_upvoted` is
/// the value from before the click.
pub fn upvote_committed(was_upvoted: bool) -> Notification {
    if was_upvoted {
        Notification::new("Upvote removed", "Your upvote has been removed.")
    } else {
        Notification::new("Product upvoted!", "Thanks for supporting this product.")
    }
}

pub fn upvote_failed() -> Notification {
    Notification::destructive(
        "Upvote failed",
        "We couldn't save your upvote. Please try again.",
    )
}

pub fn link_copied(click_points: u32) -> Notification {
    Notification::new(
        "Link copied!",
        format!("Share it around: you earn {click_points} points every time someone clicks your link."),
    )
}

/// Worded after the action taken, so `was_following` is the value from before the click.
pub fn follow_toggled(was_following: bool) -> Notification {
    if was_following {
        Notification::new("Unfollowed", "You won't get updates about this product anymore.")
    } else {
        Notification::new("Following!", "You'll get updates about this product.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NotificationVariant;

    #[test]
    fn test_limit_denial_interpolates_max() {
        let toast = Denial::LimitReached {
            kind: ActionKind::Sharing,
            max: 5,
        }
        .notification();
        assert_eq!(toast.title, "Sharing Limit Reached");
        assert_eq!(toast.description, "You've reached your daily limit of 5 shares.");
        assert_eq!(toast.variant, NotificationVariant::Destructive);
    }

    #[test]
    fn test_login_denial() {
        let toast = Denial::LoginRequired.notification();
        assert_eq!(toast.title, "Login required");
        assert!(toast.is_destructive());
    }

    #[test]
    fn test_messages_follow_pre_click_value() {
        assert_eq!(upvote_committed(false).title, "Product upvoted!");
        assert_eq!(upvote_committed(true).title, "Upvote removed");
        assert_eq!(follow_toggled(false).title, "Following!");
        assert_eq!(follow_toggled(true).title, "Unfollowed");
    }
}
