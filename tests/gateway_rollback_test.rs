//! The controller against a `ProductClient` served by the store's mocks.

use climbr::clients::ProductClient;
use climbr::config::ClimbrConfig;
use climbr::engagement::EngagementController;
use climbr::model::{Actor, ActorId, Product, ProductId, ProductSnapshot};
use climbr::ports::{UpvoteGateway, UpvoteReceipt};
use climbr::product_actor::{ProductError, ProductOutput, ProductProcedure};
use climbr::testing::RecordingSink;
use climbr_store::mock::{create_mock_client, expect_call, MockClient};
use climbr_store::StoreError;
use std::sync::Arc;

fn controller(
    products: ProductClient,
    upvotes: i64,
) -> (EngagementController<ProductClient>, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    let controller = EngagementController::new(
        ProductSnapshot::new(ProductId(1), "Chalk", upvotes, Some(false)),
        Some(Actor::new("ana")),
        products,
        &ClimbrConfig::default(),
    )
    .with_notifier(sink.clone());
    (controller, sink)
}

#[tokio::test]
async fn test_row_error_rolls_back() {
    let mut mock = MockClient::<Product>::new();
    mock.expect_call(ProductId(1))
        .return_err(StoreError::RowError(Box::new(ProductError::NotFound(
            "product_1".into(),
        ))));
    let (mut card, sink) = controller(ProductClient::new(mock.client()), 42);

    card.upvote().await;

    assert_eq!(card.state().upvote_count, 42);
    assert!(!card.state().has_upvoted);
    assert_eq!(sink.titles(), vec!["Upvote failed"]);
    mock.verify();
}

#[tokio::test]
async fn test_closed_table_rolls_back() {
    let mut mock = MockClient::<Product>::new();
    mock.expect_call(ProductId(1))
        .return_err(StoreError::TableClosed);
    let (mut card, sink) = controller(ProductClient::new(mock.client()), 0);

    card.upvote().await;

    assert_eq!(card.state().upvote_count, 0);
    assert!(card.upvote_enabled());
    assert_eq!(sink.titles(), vec!["Upvote failed"]);
    mock.verify();
}

#[tokio::test]
async fn test_control_disabled_while_in_flight() {
    let (client, mut receiver) = create_mock_client::<Product>(4);
    let (mut card, sink) = controller(ProductClient::new(client), 42);

    let pending = card.begin_upvote().expect("upvote should be issued");
    assert_eq!(card.state().upvote_count, 43);
    assert!(card.state().is_mutation_in_flight);
    assert!(!card.view().upvote_enabled);
    // a re-click while in flight is ignored
    assert!(card.begin_upvote().is_none());

    let gateway = card.gateway().clone();
    let (product, voter) = (pending.product().clone(), pending.voter().clone());
    let call = tokio::spawn(async move {
        UpvoteGateway::toggle_upvote(&gateway, &product, &voter).await
    });

    let (id, procedure, reply) = expect_call(&mut receiver)
        .await
        .expect("Expected Call request");
    assert_eq!(id, ProductId(1));
    match procedure {
        ProductProcedure::ToggleUpvote { voter } => assert_eq!(voter, ActorId::from("ana")),
        other => panic!("Expected ToggleUpvote, got {other:?}"),
    }
    assert!(sink.is_empty());
    reply
        .send(Err(StoreError::RowError(Box::new(ProductError::NotFound(
            "product_1".into(),
        )))))
        .unwrap();

    card.settle_upvote(pending, call.await.unwrap());
    assert_eq!(card.state().upvote_count, 42);
    assert!(!card.state().is_mutation_in_flight);
    assert!(card.upvote_enabled());
    assert_eq!(sink.titles(), vec!["Upvote failed"]);
}

#[tokio::test]
async fn test_success_reply_commits() {
    let mut mock = MockClient::<Product>::new();
    mock.expect_call(ProductId(1))
        .return_ok(ProductOutput::ToggleUpvote(UpvoteReceipt {
            upvotes: 43,
            upvoted: true,
        }));
    let (mut card, sink) = controller(ProductClient::new(mock.client()), 42);

    card.upvote().await;

    assert_eq!(card.state().upvote_count, 43);
    assert!(card.state().has_upvoted);
    assert_eq!(sink.titles(), vec!["Product upvoted!"]);
    mock.verify();
}
