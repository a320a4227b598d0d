//! # Mock Tables
//!
//! Test doubles for code that talks to a [`TableClient`].
//!
//! | | `MockClient` | Real table |
//! |---|---|---|
//! | State | None, replies are scripted | Real rows |
//! | Determinism | Full | Subject to the scheduler |
//! | Error injection | `return_err` | Needs a row in a failing state |
//!
//! Two styles are offered:
//!
//! - [`MockClient`]: queue expectations up front, run the code under test, then `verify()`.
//! - [`create_mock_client`] + [`expect_call`] / [`expect_select`] / [`expect_insert`]:
//!   receive each request yourself and answer it whenever the test is ready. Use this one
//!   to observe a caller while its request is still pending.
//!
//! ```rust
//! use async_trait::async_trait;
//! use climbr_store::mock::MockClient;
//! use climbr_store::{Row, StoreError};
//!
//! #[derive(Clone, Debug)] struct Vote { id: u32 }
//! #[derive(Debug)] struct NewVote;
//! #[derive(Debug)] enum VoteCall { Toggle }
//! #[derive(Debug, thiserror::Error)] #[error("vote error")] struct VoteError;
//!
//! #[async_trait]
//! impl Row for Vote {
//!     const TABLE: &'static str = "votes";
//!     type Id = u32; type Insert = NewVote; type Procedure = VoteCall;
//!     type Output = bool; type Context = (); type Error = VoteError;
//!     fn from_insert(id: u32, _: NewVote) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn call(&mut self, _: VoteCall, _: &()) -> Result<bool, Self::Error> { Ok(true) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Vote>::new();
//!     mock.expect_call(1).return_err(StoreError::TableClosed);
//!
//!     let result = mock.client().call(1, VoteCall::Toggle).await;
//!     assert!(matches!(result, Err(StoreError::TableClosed)));
//!     mock.verify();
//! }
//! ```

use crate::client::TableClient;
use crate::error::StoreError;
use crate::message::{Reply, TableRequest};
use crate::row::Row;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// A scripted reply, consumed in FIFO order.
enum Expectation<T: Row> {
    Insert {
        response: Result<T::Id, StoreError>,
    },
    Select {
        response: Result<Option<T>, StoreError>,
    },
    Call {
        response: Result<T::Output, StoreError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A [`TableClient`] backed by a queue of scripted replies.
///
/// A request that does not match the kind of the next expectation panics the serving
/// task, which surfaces in the test as a dropped reply.
pub struct MockClient<T: Row> {
    client: TableClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Row> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Row> MockClient<T> {
    /// Creates a mock with an empty expectation queue. Must be called inside a runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<TableRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue.lock().unwrap().pop_front();

                match (request, next) {
                    (
                        TableRequest::Insert { respond_to, .. },
                        Some(Expectation::Insert { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        TableRequest::Select { respond_to, .. },
                        Some(Expectation::Select { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (TableRequest::Call { respond_to, .. }, Some(Expectation::Call { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected {} request on {}", request.kind(), T::TABLE);
                    }
                }
            }
        });

        Self {
            client: TableClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// The client to hand to the code under test.
    pub fn client(&self) -> TableClient<T> {
        self.client.clone()
    }

    pub fn expect_insert(&mut self) -> InsertExpectation<T> {
        InsertExpectation {
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_select(&mut self, _id: T::Id) -> SelectExpectation<T> {
        SelectExpectation {
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_call(&mut self, _id: T::Id) -> CallExpectation<T> {
        CallExpectation {
            expectations: self.expectations.clone(),
        }
    }

    /// Panics if any expectation is still queued.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

pub struct InsertExpectation<T: Row> {
    expectations: Queue<T>,
}

impl<T: Row> InsertExpectation<T> {
    pub fn return_ok(self, id: T::Id) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Insert { response: Ok(id) });
    }

    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Insert {
                response: Err(error),
            });
    }
}

pub struct SelectExpectation<T: Row> {
    expectations: Queue<T>,
}

impl<T: Row> SelectExpectation<T> {
    pub fn return_ok(self, row: Option<T>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Select { response: Ok(row) });
    }

    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Select {
                response: Err(error),
            });
    }
}

pub struct CallExpectation<T: Row> {
    expectations: Queue<T>,
}

impl<T: Row> CallExpectation<T> {
    pub fn return_ok(self, output: T::Output) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Call {
                response: Ok(output),
            });
    }

    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Call {
                response: Err(error),
            });
    }
}

// =============================================================================
// MANUAL HELPERS
// =============================================================================

/// Creates a client whose requests land on a receiver owned by the test.
pub fn create_mock_client<T: Row>(
    buffer_size: usize,
) -> (TableClient<T>, mpsc::Receiver<TableRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (TableClient::new(sender), receiver)
}

/// Waits for the next request and returns it if it is an insert.
pub async fn expect_insert<T: Row>(
    receiver: &mut mpsc::Receiver<TableRequest<T>>,
) -> Option<(T::Insert, Reply<T::Id>)> {
    match receiver.recv().await {
        Some(TableRequest::Insert { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is a select.
pub async fn expect_select<T: Row>(
    receiver: &mut mpsc::Receiver<TableRequest<T>>,
) -> Option<(T::Id, Reply<Option<T>>)> {
    match receiver.recv().await {
        Some(TableRequest::Select { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is a procedure call.
pub async fn expect_call<T: Row>(
    receiver: &mut mpsc::Receiver<TableRequest<T>>,
) -> Option<(T::Id, T::Procedure, Reply<T::Output>)> {
    match receiver.recv().await {
        Some(TableRequest::Call {
            id,
            procedure,
            respond_to,
        }) => Some((id, procedure, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Badge {
        id: u32,
        name: String,
    }

    #[derive(Debug)]
    struct NewBadge {
        name: String,
    }

    #[derive(Debug)]
    enum BadgeCall {
        Rename(String),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("badge error")]
    struct BadgeError;

    #[async_trait]
    impl Row for Badge {
        const TABLE: &'static str = "badges";
        type Id = u32;
        type Insert = NewBadge;
        type Procedure = BadgeCall;
        type Output = String;
        type Context = ();
        type Error = BadgeError;

        fn from_insert(id: u32, params: NewBadge) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                name: params.name,
            })
        }

        async fn call(&mut self, call: BadgeCall, _ctx: &()) -> Result<String, Self::Error> {
            match call {
                BadgeCall::Rename(name) => {
                    self.name = name;
                    Ok(self.name.clone())
                }
            }
        }
    }

    #[tokio::test]
    async fn test_manual_mock_observes_pending_request() {
        let (client, mut receiver) = create_mock_client::<Badge>(4);

        let pending = tokio::spawn(async move {
            client
                .call(7, BadgeCall::Rename("Early Climber".into()))
                .await
        });

        let (id, call, respond_to) = expect_call(&mut receiver).await.expect("call request");
        assert_eq!(id, 7);
        assert!(matches!(call, BadgeCall::Rename(ref name) if name == "Early Climber"));
        assert!(!pending.is_finished());

        respond_to.send(Ok("Early Climber".into())).unwrap();
        assert_eq!(pending.await.unwrap().unwrap(), "Early Climber");
    }

    #[tokio::test]
    async fn test_scripted_mock_replays_in_order() {
        let mut mock = MockClient::<Badge>::new();
        mock.expect_insert().return_ok(3);
        mock.expect_select(3).return_ok(Some(Badge {
            id: 3,
            name: "Top Hunter".into(),
        }));
        mock.expect_call(3).return_err(StoreError::NotFound("3".into()));

        let client = mock.client();
        let id = client
            .insert(NewBadge {
                name: "Top Hunter".into(),
            })
            .await
            .unwrap();
        assert_eq!(id, 3);
        assert_eq!(client.select(3).await.unwrap().unwrap().name, "Top Hunter");
        assert!(matches!(
            client.call(3, BadgeCall::Rename("x".into())).await,
            Err(StoreError::NotFound(_))
        ));

        mock.verify();
    }
}
