use crate::clients::{InboxClient, ProductClient};
use crate::config::ClimbrConfig;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// A table task ended abnormally.
#[derive(Debug, thiserror::Error)]
#[error("Table task failed: {0}")]
pub struct ShutdownError(#[from] JoinError);

/// The running backend: one task per table plus the clients to reach them.
///
/// ```rust
/// use climbr::config::ClimbrConfig;
/// use climbr::lifecycle::Backend;
/// use climbr::model::ProductSubmission;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let backend = Backend::start(&ClimbrConfig::default());
///     let id = backend.products.submit(ProductSubmission::new("Chalk")).await?;
///     let snapshot = backend.products.snapshot(id, None).await?;
///     assert_eq!(snapshot.upvotes, 0);
///     backend.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct Backend {
    pub products: ProductClient,
    pub inboxes: InboxClient,
    /// Products first, then inboxes.
    handles: Vec<(&'static str, JoinHandle<()>)>,
}

impl Backend {
    /// Spawns the inbox and products tables. Must be called inside a Tokio runtime.
    pub fn start(config: &ClimbrConfig) -> Self {
        let (inbox_table, inboxes) = crate::inbox_actor::new(config.table_buffer);
        let (product_table, products) = crate::product_actor::new(config.table_buffer);

        let inbox_handle = tokio::spawn(inbox_table.run(()));
        let product_handle = tokio::spawn(product_table.run(inboxes.clone()));
        info!(buffer = config.table_buffer, "Backend started");

        Self {
            products,
            inboxes,
            handles: vec![("products", product_handle), ("inboxes", inbox_handle)],
        }
    }

    /// Drops the clients and waits for every table to stop.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down backend");
        drop(self.products);
        drop(self.inboxes);

        for (table, handle) in self.handles {
            if let Err(e) = handle.await {
                error!(table, error = %e, "Table task failed");
                return Err(ShutdownError(e));
            }
        }

        info!("Backend stopped");
        Ok(())
    }
}
