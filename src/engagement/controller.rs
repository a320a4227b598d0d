use super::messages::{self, Denial};
use super::state::{EngagementState, PendingUpvote};
use super::view::{badge_variant, points_label, rank_label, BadgeView, CardView};
use crate::config::ClimbrConfig;
use crate::model::{ActionKind, Actor, Notification, ProductSnapshot};
use crate::ports::{Clipboard, GatewayError, NotificationSink, UpvoteGateway, UpvoteReceipt};
use crate::quota::{can_perform, QuotaDecision};
use std::sync::Arc;
use tracing::{debug, warn};

/// Drives the upvote, share and follow actions of one product card.
///
/// The controller owns the card's [`EngagementState`] and reports every terminal outcome
/// as exactly one [`Notification`]. Handlers never return errors: denials and remote
/// failures end up in the sink, and a missing sink turns them into log lines.
pub struct EngagementController<G: UpvoteGateway> {
    product: ProductSnapshot,
    actor: Option<Actor>,
    state: EngagementState,
    gateway: G,
    notifier: Option<Arc<dyn NotificationSink>>,
    clipboard: Option<Arc<dyn Clipboard>>,
    page_url: String,
    share_click_points: u32,
}

impl<G: UpvoteGateway> EngagementController<G> {
    /// Builds a card controller for `actor` viewing `product`.
    ///
    /// # Arguments
    /// * `product` - Snapshot the state is seeded from
    /// * `actor` - The signed-in viewer, `None` when anonymous
    /// * `gateway` - Remote procedure that durably toggles votes
    /// * `config` - Supplies the page address and share reward
    pub fn new(
        product: ProductSnapshot,
        actor: Option<Actor>,
        gateway: G,
        config: &ClimbrConfig,
    ) -> Self {
        let state = EngagementState::from_snapshot(&product);
        let page_url = config.product_url(&product.id);
        Self {
            product,
            actor,
            state,
            gateway,
            notifier: None,
            clipboard: None,
            page_url,
            share_click_points: config.share_click_points,
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn NotificationSink>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn with_clipboard(mut self, clipboard: Arc<dyn Clipboard>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    /// Overrides the address the share action copies.
    pub fn with_page_url(mut self, page_url: impl Into<String>) -> Self {
        self.page_url = page_url.into();
        self
    }

    pub fn state(&self) -> EngagementState {
        self.state
    }

    pub fn product(&self) -> &ProductSnapshot {
        &self.product
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn page_url(&self) -> &str {
        &self.page_url
    }

    /// Whether the upvote control accepts a click.
    pub fn upvote_enabled(&self) -> bool {
        self.actor.is_some() && !self.state.is_mutation_in_flight
    }

    /// First half of an upvote click: gate, then apply the toggle optimistically.
    ///
    /// Returns `None` when the click is denied (a notification has been emitted) or when a
    /// mutation is already in flight (the click is ignored). Otherwise the returned
    /// [`PendingUpvote`] must be passed to [`settle_upvote`](Self::settle_upvote) with the
    /// gateway's result.
    pub fn begin_upvote(&mut self) -> Option<PendingUpvote> {
        if self.state.is_mutation_in_flight {
            debug!(product = %self.product.id, "Upvote already in flight, click ignored");
            return None;
        }

        let Some(actor) = self.actor.as_ref() else {
            self.deny(Denial::LoginRequired);
            return None;
        };

        if let QuotaDecision::Denied { max } = can_perform(ActionKind::Upvoting, Some(actor)) {
            self.deny(Denial::LimitReached {
                kind: ActionKind::Upvoting,
                max,
            });
            return None;
        }

        let voter = actor.id.clone();
        let checkpoint = self.state.apply_toggle();
        debug!(
            product = %self.product.id,
            voter = %voter,
            count = self.state.upvote_count,
            "Upvote applied optimistically"
        );

        Some(PendingUpvote {
            product: self.product.id.clone(),
            voter,
            checkpoint,
        })
    }

    /// Second half of an upvote click: keep the optimistic values on success, restore the
    /// checkpoint on failure.
    pub fn settle_upvote(
        &mut self,
        pending: PendingUpvote,
        result: Result<UpvoteReceipt, GatewayError>,
    ) {
        match result {
            Ok(receipt) => {
                self.state.commit();
                debug!(
                    product = %pending.product,
                    durable_count = receipt.upvotes,
                    upvoted = receipt.upvoted,
                    "Upvote committed"
                );
                self.emit(messages::upvote_committed(pending.was_upvoted()));
            }
            Err(error) => {
                warn!(product = %pending.product, error = %error, "Upvote failed, rolling back");
                self.state.revert(pending.checkpoint);
                self.emit(messages::upvote_failed());
            }
        }
    }

    /// Handles an upvote click end to end.
    pub async fn upvote(&mut self) {
        let Some(pending) = self.begin_upvote() else {
            return;
        };
        let result = self
            .gateway
            .toggle_upvote(&pending.product, &pending.voter)
            .await;
        self.settle_upvote(pending, result);
    }

    /// Copies the page address and announces the share reward. Anonymous viewers may share.
    pub async fn share(&self) {
        if let QuotaDecision::Denied { max } =
            can_perform(ActionKind::Sharing, self.actor.as_ref())
        {
            self.deny(Denial::LimitReached {
                kind: ActionKind::Sharing,
                max,
            });
            return;
        }

        if let Some(clipboard) = &self.clipboard {
            if let Err(error) = clipboard.write_text(&self.page_url).await {
                debug!(url = %self.page_url, error = %error, "Clipboard write failed");
            }
        }
        self.emit(messages::link_copied(self.share_click_points));
    }

    /// Flips the local follow flag. Anonymous viewers may follow.
    pub fn toggle_follow(&mut self) {
        if let QuotaDecision::Denied { max } =
            can_perform(ActionKind::Following, self.actor.as_ref())
        {
            self.deny(Denial::LimitReached {
                kind: ActionKind::Following,
                max,
            });
            return;
        }

        let was_following = self.state.is_following;
        self.state.is_following = !was_following;
        self.emit(messages::follow_toggled(was_following));
    }

    pub fn view(&self) -> CardView {
        CardView {
            product_id: self.product.id.clone(),
            name: self.product.name.clone(),
            tagline: self.product.tagline.clone(),
            upvote_count: self.state.upvote_count,
            has_upvoted: self.state.has_upvoted,
            is_following: self.state.is_following,
            upvote_enabled: self.upvote_enabled(),
            rank_label: self.product.rank.map(rank_label),
            points_label: points_label(self.product.points),
            badges: self
                .product
                .badges
                .iter()
                .map(|name| BadgeView {
                    name: name.clone(),
                    variant: badge_variant(name),
                })
                .collect(),
        }
    }

    fn deny(&self, denial: Denial) {
        debug!(product = %self.product.id, reason = %denial, "Action denied");
        self.emit(denial.notification());
    }

    fn emit(&self, notification: Notification) {
        match &self.notifier {
            Some(sink) => sink.notify(notification),
            None => debug!(title = %notification.title, "No notification sink attached"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ActorId, DailyLimits, ProductId, Quota};
    use crate::testing::{RecordingSink, ScriptedGateway};

    fn controller(
        upvotes: i64,
        upvoted: Option<bool>,
        actor: Option<Actor>,
    ) -> (EngagementController<ScriptedGateway>, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::new());
        let snapshot = ProductSnapshot::new(ProductId(1), "Chalk", upvotes, upvoted);
        let controller = EngagementController::new(
            snapshot,
            actor,
            ScriptedGateway::new(),
            &ClimbrConfig::default(),
        )
        .with_notifier(sink.clone());
        (controller, sink)
    }

    #[test]
    fn test_begin_then_settle_success() {
        let (mut card, sink) = controller(42, Some(false), Some(Actor::new("ana")));

        let pending = card.begin_upvote().unwrap();
        assert!(card.state().is_mutation_in_flight);
        assert!(!card.upvote_enabled());
        assert_eq!(card.state().upvote_count, 43);
        assert!(card.begin_upvote().is_none());
        assert!(sink.is_empty());

        card.settle_upvote(
            pending,
            Ok(UpvoteReceipt {
                upvotes: 43,
                upvoted: true,
            }),
        );
        assert_eq!(card.state().upvote_count, 43);
        assert!(card.upvote_enabled());
        assert_eq!(sink.titles(), vec!["Product upvoted!"]);
    }

    #[test]
    fn test_settle_failure_restores_checkpoint() {
        let (mut card, sink) = controller(42, Some(true), Some(Actor::new("ana")));

        let pending = card.begin_upvote().unwrap();
        assert_eq!(card.state().upvote_count, 41);
        card.settle_upvote(pending, Err(GatewayError::Unavailable("timeout".into())));

        assert_eq!(card.state().upvote_count, 42);
        assert!(card.state().has_upvoted);
        assert!(!card.state().is_mutation_in_flight);
        let toasts = sink.take();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].title, "Upvote failed");
        assert!(toasts[0].is_destructive());
    }

    #[test]
    fn test_quota_gate_leaves_state_untouched() {
        let actor = Actor::new(ActorId::from("ana"))
            .with_limits(DailyLimits::default().with(ActionKind::Upvoting, Quota::new(10, 10)));
        let (mut card, sink) = controller(7, None, Some(actor));

        assert!(card.begin_upvote().is_none());
        assert_eq!(card.state().upvote_count, 7);
        assert!(!card.state().is_mutation_in_flight);
        let toasts = sink.take();
        assert_eq!(toasts[0].title, "Upvote Limit Reached");
        assert!(toasts[0].description.contains("10"));
    }

    #[test]
    fn test_view_labels_and_badges() {
        let mut snapshot = ProductSnapshot::new(ProductId(4), "Harness", 3, None);
        snapshot.rank = Some(1);
        snapshot.points = 250;
        snapshot.badges = vec!["Top Hunter".into()];
        let card = EngagementController::new(
            snapshot,
            None,
            ScriptedGateway::new(),
            &ClimbrConfig::default(),
        );

        let view = card.view();
        assert_eq!(view.rank_label.as_deref(), Some("#1"));
        assert_eq!(view.points_label, "250 pts");
        assert_eq!(view.badges.len(), 1);
        assert!(!view.upvote_enabled);
        assert_eq!(card.page_url(), "https://climbr.app/product/4");
    }
}
