//! # Product Client
//!
//! Typed access to the products table. Also the production
//! [`UpvoteGateway`](crate::ports::UpvoteGateway).

use crate::model::{ActorId, Product, ProductId, ProductSnapshot, ProductSubmission};
use crate::ports::{GatewayError, UpvoteGateway, UpvoteReceipt};
use crate::product_actor::{ProductError, ProductOutput, ProductProcedure};
use async_trait::async_trait;
use climbr_store::{StoreError, TableClient, TableHandle};
use tracing::{debug, instrument};

/// Client for the products table.
#[derive(Clone)]
pub struct ProductClient {
    inner: TableClient<Product>,
}

impl ProductClient {
    pub fn new(inner: TableClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl TableHandle<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &TableClient<Product> {
        &self.inner
    }

    fn map_error(e: StoreError) -> ProductError {
        match e {
            StoreError::RowError(inner) => match inner.downcast::<ProductError>() {
                Ok(error) => *error,
                Err(other) => ProductError::Store(other.to_string()),
            },
            StoreError::NotFound(id) => ProductError::NotFound(id),
            other => ProductError::Store(other.to_string()),
        }
    }
}

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn submit(&self, submission: ProductSubmission) -> Result<ProductId, ProductError> {
        debug!("Submitting product");
        self.inner.insert(submission).await.map_err(Self::map_error)
    }

    /// Loads the product as `viewer` sees it.
    #[instrument(skip(self))]
    pub async fn snapshot(
        &self,
        id: ProductId,
        viewer: Option<&ActorId>,
    ) -> Result<ProductSnapshot, ProductError> {
        let product = self
            .select(id.clone())
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;
        Ok(product.snapshot_for(viewer))
    }

    #[instrument(skip(self))]
    pub async fn toggle_upvote(
        &self,
        id: ProductId,
        voter: ActorId,
    ) -> Result<UpvoteReceipt, ProductError> {
        match self.run(id, ProductProcedure::ToggleUpvote { voter }).await? {
            ProductOutput::ToggleUpvote(receipt) => Ok(receipt),
            _ => unreachable!("ToggleUpvote procedure must return ToggleUpvote output"),
        }
    }

    #[instrument(skip(self))]
    pub async fn award_badge(&self, id: ProductId, badge: String) -> Result<(), ProductError> {
        match self.run(id, ProductProcedure::AwardBadge(badge)).await? {
            ProductOutput::AwardBadge(()) => Ok(()),
            _ => unreachable!("AwardBadge procedure must return AwardBadge output"),
        }
    }

    #[instrument(skip(self))]
    pub async fn set_rank(&self, id: ProductId, rank: Option<u32>) -> Result<(), ProductError> {
        match self.run(id, ProductProcedure::SetRank(rank)).await? {
            ProductOutput::SetRank(()) => Ok(()),
            _ => unreachable!("SetRank procedure must return SetRank output"),
        }
    }

    async fn run(&self, id: ProductId, procedure: ProductProcedure) -> Result<ProductOutput, ProductError> {
        self.inner.call(id, procedure).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl UpvoteGateway for ProductClient {
    /// Failures the table decided on are rejections; failures to reach it are outages.
    async fn toggle_upvote(
        &self,
        product: &ProductId,
        voter: &ActorId,
    ) -> Result<UpvoteReceipt, GatewayError> {
        ProductClient::toggle_upvote(self, product.clone(), voter.clone())
            .await
            .map_err(|e| match e {
                ProductError::Store(msg) => GatewayError::Unavailable(msg),
                other => GatewayError::Rejected(other.to_string()),
            })
    }
}
