//! Integration tests for the checkout link builder against the mock commerce service.

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use stripe_client::{AfterCompletion, StripeError};
use travel_core::domains::payments::{
    CheckoutConfig, CheckoutError, CheckoutLinkBuilder, CheckoutRequest,
};
use travel_core::kernel::{CommerceCall, MockCommerceService};

fn builder_with(mock: &Arc<MockCommerceService>) -> CheckoutLinkBuilder {
    let config = CheckoutConfig::new("https://tourvisto.app").unwrap();
    CheckoutLinkBuilder::new(mock.clone(), config)
}

fn kyoto_request(price: &str) -> CheckoutRequest {
    CheckoutRequest::new(
        "Kyoto in Autumn",
        "Five days of temples and tea houses",
        vec![
            "https://images.test/kyoto-1.jpg".to_string(),
            "https://images.test/kyoto-2.jpg".to_string(),
        ],
        Decimal::from_str(price).unwrap(),
        "trip_abc123",
    )
}

fn api_error(status: u16, message: &str) -> StripeError {
    StripeError::Api {
        status,
        error_type: Some("invalid_request_error".to_string()),
        code: None,
        message: message.to_string(),
    }
}

#[tokio::test]
async fn creates_product_price_and_link_in_order() {
    let mock = Arc::new(MockCommerceService::new());
    let builder = builder_with(&mock);

    let link = builder
        .create_checkout_link(&kyoto_request("19.99"))
        .await
        .unwrap();

    assert_eq!(link.url, "https://buy.stripe.com/test_mock_3");

    let calls = mock.calls();
    assert_eq!(calls.len(), 3);
    assert!(matches!(calls[0], CommerceCall::CreateProduct(_)));
    assert!(matches!(calls[1], CommerceCall::CreatePrice(_)));
    assert!(matches!(calls[2], CommerceCall::CreatePaymentLink(_)));
}

#[tokio::test]
async fn product_receives_name_description_and_images() {
    let mock = Arc::new(MockCommerceService::new());
    builder_with(&mock)
        .create_checkout_link(&kyoto_request("250"))
        .await
        .unwrap();

    let product = &mock.product_calls()[0];
    assert_eq!(product.name, "Kyoto in Autumn");
    assert_eq!(
        product.description.as_deref(),
        Some("Five days of temples and tea houses")
    );
    assert_eq!(product.images.len(), 2);
}

#[tokio::test]
async fn price_is_sent_in_cents_exactly() {
    let mock = Arc::new(MockCommerceService::new());
    builder_with(&mock)
        .create_checkout_link(&kyoto_request("19.99"))
        .await
        .unwrap();

    let price = &mock.price_calls()[0];
    assert_eq!(price.unit_amount, 1999);
    assert_eq!(price.currency, "usd");
    assert_eq!(price.product, "prod_mock_1");
}

#[tokio::test]
async fn link_has_single_quantity_metadata_and_redirect() {
    let mock = Arc::new(MockCommerceService::new());
    let link = builder_with(&mock)
        .create_checkout_link(&kyoto_request("19.99"))
        .await
        .unwrap();

    let request = &mock.payment_link_calls()[0];
    assert_eq!(request.line_items.len(), 1);
    assert_eq!(request.line_items[0].price, "price_mock_2");
    assert_eq!(request.line_items[0].quantity, 1);
    assert_eq!(
        request.metadata.get("tripId").map(String::as_str),
        Some("trip_abc123")
    );
    assert_eq!(
        request.after_completion,
        Some(AfterCompletion::Redirect {
            url: "https://tourvisto.app/travel/trip_abc123/success".to_string()
        })
    );

    // Remote object comes back untouched
    assert_eq!(link.metadata.get("tripId").map(String::as_str), Some("trip_abc123"));
}

#[tokio::test]
async fn product_failure_stops_the_sequence() {
    let mock = Arc::new(
        MockCommerceService::new().with_product_failure(api_error(400, "Invalid image URL")),
    );

    let err = builder_with(&mock)
        .create_checkout_link(&kyoto_request("19.99"))
        .await
        .unwrap_err();

    match err {
        CheckoutError::RemoteService(StripeError::Api {
            status, message, ..
        }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "Invalid image URL");
        }
        other => panic!("expected remote service error, got {:?}", other),
    }

    assert_eq!(mock.calls().len(), 1);
    assert!(mock.price_calls().is_empty());
    assert!(mock.payment_link_calls().is_empty());
}

#[tokio::test]
async fn price_failure_leaves_product_and_skips_link() {
    let mock = Arc::new(
        MockCommerceService::new().with_price_failure(api_error(429, "Too many requests")),
    );

    let err = builder_with(&mock)
        .create_checkout_link(&kyoto_request("19.99"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CheckoutError::RemoteService(StripeError::Api { status: 429, .. })
    ));
    // No rollback: the product call happened and nothing tried to undo it
    assert_eq!(mock.product_calls().len(), 1);
    assert_eq!(mock.price_calls().len(), 1);
    assert!(mock.payment_link_calls().is_empty());
}

#[tokio::test]
async fn link_failure_propagates() {
    let mock = Arc::new(
        MockCommerceService::new()
            .with_payment_link_failure(StripeError::Parse("unexpected body".to_string())),
    );

    let err = builder_with(&mock)
        .create_checkout_link(&kyoto_request("19.99"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CheckoutError::RemoteService(StripeError::Parse(_))
    ));
    assert_eq!(mock.calls().len(), 3);
}

#[tokio::test]
async fn non_positive_price_makes_no_remote_call() {
    let mock = Arc::new(MockCommerceService::new());

    let err = builder_with(&mock)
        .create_checkout_link(&kyoto_request("0"))
        .await
        .unwrap_err();

    assert!(matches!(err, CheckoutError::InvalidPrice { .. }));
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn each_call_creates_fresh_remote_records() {
    let mock = Arc::new(MockCommerceService::new());
    let builder = builder_with(&mock);

    let first = builder
        .create_checkout_link(&kyoto_request("10"))
        .await
        .unwrap();
    let second = builder
        .create_checkout_link(&kyoto_request("10"))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(mock.product_calls().len(), 2);
}
