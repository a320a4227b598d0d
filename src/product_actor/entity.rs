//! [`Row`] implementation for the products table.
//!
//! Products depend on the inbox table: submissions are checked against it and makers are
//! told about new upvotes through it.

use super::{ProductError, ProductOutput, ProductProcedure};
use crate::clients::InboxClient;
use crate::model::{ActorId, Product, ProductId, ProductSubmission};
use crate::ports::UpvoteReceipt;
use async_trait::async_trait;
use climbr_store::{Row, TableHandle};
use tracing::{debug, warn};

#[async_trait]
impl Row for Product {
    const TABLE: &'static str = "products";

    type Id = ProductId;
    type Insert = ProductSubmission;
    type Procedure = ProductProcedure;
    type Output = ProductOutput;
    type Context = InboxClient;
    type Error = ProductError;

    fn from_insert(id: ProductId, params: ProductSubmission) -> Result<Self, ProductError> {
        if params.name.trim().is_empty() {
            return Err(ProductError::EmptyName);
        }
        Ok(Product::new(id, params))
    }

    /// Rejects submissions whose maker inbox does not exist.
    async fn on_insert(&mut self, inboxes: &InboxClient) -> Result<(), ProductError> {
        if let Some(inbox) = self.maker_inbox {
            if inboxes.select(inbox).await?.is_none() {
                return Err(ProductError::UnknownInbox(inbox));
            }
        }
        Ok(())
    }

    async fn call(
        &mut self,
        procedure: ProductProcedure,
        inboxes: &InboxClient,
    ) -> Result<ProductOutput, ProductError> {
        match procedure {
            ProductProcedure::ToggleUpvote { voter } => {
                let receipt = self.toggle_vote(voter.clone());
                if receipt.upvoted {
                    self.notify_maker(inboxes, &voter).await;
                }
                Ok(ProductOutput::ToggleUpvote(receipt))
            }
            ProductProcedure::AwardBadge(badge) => {
                if !self.badges.contains(&badge) {
                    self.badges.push(badge);
                }
                Ok(ProductOutput::AwardBadge(()))
            }
            ProductProcedure::SetRank(rank) => {
                self.rank = rank;
                Ok(ProductOutput::SetRank(()))
            }
        }
    }
}

impl Product {
    /// Each vote is worth one upvote and one point; removing it takes both back.
    fn toggle_vote(&mut self, voter: ActorId) -> UpvoteReceipt {
        let upvoted = if self.voters.remove(&voter) {
            self.upvotes -= 1;
            self.points -= 1;
            false
        } else {
            self.voters.insert(voter);
            self.upvotes += 1;
            self.points += 1;
            true
        };
        UpvoteReceipt {
            upvotes: self.upvotes,
            upvoted,
        }
    }

    /// Best effort: a failed push is logged and the vote stands.
    async fn notify_maker(&self, inboxes: &InboxClient, voter: &ActorId) {
        let Some(inbox) = self.maker_inbox else {
            return;
        };
        let body = format!("{} upvoted {}.", voter, self.name);
        match inboxes.push(inbox, "New upvote", body).await {
            Ok(entry) => debug!(product = %self.id, %inbox, entry, "Maker notified"),
            Err(e) => warn!(product = %self.id, %inbox, error = %e, "Maker notification failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbox_actor::{InboxOutput, InboxProcedure};
    use crate::model::InboxId;
    use climbr_store::mock::{create_mock_client, expect_call};
    use climbr_store::StoreError;

    fn product(maker_inbox: Option<InboxId>) -> Product {
        let mut submission = ProductSubmission::new("Chalk");
        submission.maker_inbox = maker_inbox;
        Product::from_insert(ProductId(1), submission).unwrap()
    }

    fn toggle(voter: &str) -> ProductProcedure {
        ProductProcedure::ToggleUpvote {
            voter: ActorId::from(voter),
        }
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let result = Product::from_insert(ProductId(1), ProductSubmission::new("   "));
        assert_eq!(result.unwrap_err(), ProductError::EmptyName);
    }

    #[tokio::test]
    async fn test_toggle_is_one_vote_per_voter() {
        let (inboxes, _receiver) = create_mock_client(4);
        let inboxes = InboxClient::new(inboxes);
        let mut product = product(None);

        let first = product.call(toggle("ana"), &inboxes).await.unwrap();
        assert_eq!(
            first,
            ProductOutput::ToggleUpvote(UpvoteReceipt {
                upvotes: 1,
                upvoted: true
            })
        );
        product.call(toggle("bo"), &inboxes).await.unwrap();
        let again = product.call(toggle("ana"), &inboxes).await.unwrap();
        assert_eq!(
            again,
            ProductOutput::ToggleUpvote(UpvoteReceipt {
                upvotes: 1,
                upvoted: false
            })
        );
        assert_eq!(product.points, 1);
        assert!(!product.voters.contains(&ActorId::from("ana")));
    }

    #[tokio::test]
    async fn test_new_vote_pushes_to_maker_inbox() {
        let (inboxes, mut receiver) = create_mock_client(4);
        let inboxes = InboxClient::new(inboxes);
        let mut product = product(Some(InboxId(3)));

        let serve = tokio::spawn(async move {
            let (id, procedure, reply) = expect_call(&mut receiver).await.unwrap();
            assert_eq!(id, InboxId(3));
            assert!(matches!(procedure, InboxProcedure::Push { .. }));
            reply.send(Ok(InboxOutput::Push(1))).unwrap();
        });

        product.call(toggle("ana"), &inboxes).await.unwrap();
        serve.await.unwrap();
    }

    #[tokio::test]
    async fn test_inbox_failure_does_not_fail_the_vote() {
        let (inboxes, mut receiver) = create_mock_client(4);
        let inboxes = InboxClient::new(inboxes);
        let mut product = product(Some(InboxId(3)));

        let serve = tokio::spawn(async move {
            let (_, _, reply) = expect_call(&mut receiver).await.unwrap();
            reply.send(Err(StoreError::NotFound("inbox_3".into()))).unwrap();
        });

        let output = product.call(toggle("ana"), &inboxes).await.unwrap();
        assert_eq!(
            output,
            ProductOutput::ToggleUpvote(UpvoteReceipt {
                upvotes: 1,
                upvoted: true
            })
        );
        serve.await.unwrap();
    }

    #[tokio::test]
    async fn test_badges_are_deduplicated() {
        let (inboxes, _receiver) = create_mock_client(4);
        let inboxes = InboxClient::new(inboxes);
        let mut product = product(None);

        product
            .call(ProductProcedure::AwardBadge("Top Hunter".into()), &inboxes)
            .await
            .unwrap();
        product
            .call(ProductProcedure::AwardBadge("Top Hunter".into()), &inboxes)
            .await
            .unwrap();
        assert_eq!(product.badges, vec!["Top Hunter".to_string()]);
    }
}
