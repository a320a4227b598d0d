//! # Table Actor
//!
//! The server half of a table: owns the rows and the receiving end of the request channel,
//! and handles one request at a time.

use crate::client::TableClient;
use crate::error::StoreError;
use crate::message::TableRequest;
use crate::row::Row;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// A table of `T` rows running in its own task.
///
/// Requests are handled sequentially, so a procedure observes and mutates its row without
/// interleaving with any other request. Several tables run in parallel.
///
/// # Usage
///
/// 1. `TableActor::new(buffer)` returns the table and a cloneable client.
/// 2. `table.run(context)` is spawned with the table's dependencies.
/// 3. The client (and its clones) send requests; dropping them all ends the loop.
///
/// Ids come from an internal counter starting at 1 and are converted with
/// `T::Id::from(u32)`. A failed insert still consumes its id.
pub struct TableActor<T: Row> {
    receiver: mpsc::Receiver<TableRequest<T>>,
    rows: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: Row> TableActor<T> {
    /// Creates the table and its client.
    ///
    /// `buffer_size` bounds the request channel; senders wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, TableClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let table = Self {
            receiver,
            rows: HashMap::new(),
            next_id: 1,
        };
        (table, TableClient::new(sender))
    }

    /// Serves requests until every client has been dropped.
    pub async fn run(mut self, context: T::Context) {
        let table = T::TABLE;
        info!(table, "Table started");

        while let Some(request) = self.receiver.recv().await {
            match request {
                TableRequest::Insert { params, respond_to } => {
                    debug!(table, ?params, "Insert");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    let mut row = match T::from_insert(id.clone(), params) {
                        Ok(row) => row,
                        Err(e) => {
                            warn!(table, error = %e, "Insert rejected");
                            let _ = respond_to.send(Err(StoreError::RowError(Box::new(e))));
                            continue;
                        }
                    };
                    if let Err(e) = row.on_insert(&context).await {
                        warn!(table, %id, error = %e, "on_insert failed");
                        let _ = respond_to.send(Err(StoreError::RowError(Box::new(e))));
                        continue;
                    }
                    self.rows.insert(id.clone(), row);
                    info!(table, %id, rows = self.rows.len(), "Inserted");
                    let _ = respond_to.send(Ok(id));
                }
                TableRequest::Select { id, respond_to } => {
                    let row = self.rows.get(&id).cloned();
                    debug!(table, %id, found = row.is_some(), "Select");
                    let _ = respond_to.send(Ok(row));
                }
                TableRequest::Call {
                    id,
                    procedure,
                    respond_to,
                } => {
                    debug!(table, %id, ?procedure, "Call");
                    let Some(row) = self.rows.get_mut(&id) else {
                        warn!(table, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        continue;
                    };
                    let result = row
                        .call(procedure, &context)
                        .await
                        .map_err(|e| StoreError::RowError(Box::new(e)));
                    match &result {
                        Ok(_) => info!(table, %id, "Call ok"),
                        Err(e) => warn!(table, %id, error = %e, "Call failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(table, rows = self.rows.len(), "Table stopped");
    }
}
