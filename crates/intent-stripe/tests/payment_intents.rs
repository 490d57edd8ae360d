use intent_core::{GatewayError, PaymentIntentRequest, PaymentProvider};
use intent_stripe::{StripeConfig, StripeIntentProvider};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_string_contains, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_for(server: &MockServer) -> StripeIntentProvider {
    let config = StripeConfig::new("sk_test_123").with_api_base_url(server.uri());
    StripeIntentProvider::new(config).unwrap()
}

#[tokio::test]
async fn creates_intent_and_returns_client_secret() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/payment_intents"))
        .and(header("authorization", "Bearer sk_test_123"))
        .and(header("stripe-version", "2024-06-20"))
        .and(header_exists("idempotency-key"))
        .and(body_string_contains("amount=1000"))
        .and(body_string_contains("currency=usd"))
        .and(body_string_contains("automatic_payment_methods%5Benabled%5D=true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "pi_3Abc",
            "object": "payment_intent",
            "client_secret": "pi_3Abc_secret_xyz",
            "status": "requires_payment_method",
            "created": 1718000000
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = PaymentIntentRequest::new(1000).unwrap().to_params();
    let intent = provider_for(&server).create_intent(&params).await.unwrap();

    assert_eq!(intent.id, "pi_3Abc");
    assert_eq!(intent.client_secret, "pi_3Abc_secret_xyz");
    assert_eq!(intent.status.as_deref(), Some("requires_payment_method"));
    assert_eq!(intent.created_at.map(|t| t.timestamp()), Some(1718000000));
}

#[tokio::test]
async fn forwards_metadata_as_bracketed_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/payment_intents"))
        .and(body_string_contains("metadata%5Border_id%5D=ord_42"))
        .and(body_string_contains("currency=eur"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "pi_meta",
            "client_secret": "pi_meta_secret"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let metadata = json!({ "order_id": "ord_42" });
    let params = PaymentIntentRequest::new(250)
        .unwrap()
        .with_currency("eur")
        .with_metadata(metadata.as_object().unwrap().clone())
        .to_params();

    let intent = provider_for(&server).create_intent(&params).await.unwrap();
    assert_eq!(intent.client_secret, "pi_meta_secret");
    assert!(intent.created_at.is_none());
}

#[tokio::test]
async fn stripe_error_message_is_forwarded() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/payment_intents"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {
                "type": "invalid_request_error",
                "message": "Invalid API Key provided: sk_test_***123"
            }
        })))
        .mount(&server)
        .await;

    let params = PaymentIntentRequest::new(1000).unwrap().to_params();
    let err = provider_for(&server).create_intent(&params).await.unwrap_err();

    match err {
        GatewayError::Provider { provider, message } => {
            assert_eq!(provider, "stripe");
            assert_eq!(message, "Invalid API Key provided: sk_test_***123");
        }
        other => panic!("expected provider error, got {:?}", other),
    }
}

#[tokio::test]
async fn unparseable_error_body_keeps_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let params = PaymentIntentRequest::new(1000).unwrap().to_params();
    let err = provider_for(&server).create_intent(&params).await.unwrap_err();

    assert!(err.is_provider_error());
    assert_eq!(err.to_string(), "HTTP 502 Bad Gateway: bad gateway");
}

#[tokio::test]
async fn missing_client_secret_is_a_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "pi_nosecret" })))
        .mount(&server)
        .await;

    let params = PaymentIntentRequest::new(1000).unwrap().to_params();
    let err = provider_for(&server).create_intent(&params).await.unwrap_err();

    assert_eq!(err.to_string(), "Provider response missing client_secret");
}

#[tokio::test]
async fn slow_provider_fails_after_client_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "id": "pi_slow", "client_secret": "late" }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = StripeConfig::new("sk_test_123")
        .with_api_base_url(server.uri())
        .with_timeout(Duration::from_millis(200));
    let provider = StripeIntentProvider::new(config).unwrap();

    let params = PaymentIntentRequest::new(1000).unwrap().to_params();
    let err = provider.create_intent(&params).await.unwrap_err();
    assert!(err.is_provider_error());
}

#[tokio::test]
async fn unreachable_provider_is_a_provider_error() {
    let config = StripeConfig::new("sk_test_123").with_api_base_url("http://127.0.0.1:1");
    let provider = StripeIntentProvider::new(config).unwrap();

    let params = PaymentIntentRequest::new(1000).unwrap().to_params();
    let err = provider.create_intent(&params).await.unwrap_err();
    assert!(err.is_provider_error());
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn nested_and_null_metadata_reach_stripe_unflattened() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/payment_intents"))
        .and(body_string_contains("metadata%5Bnested%5D%5Ba%5D=1"))
        .and(body_string_contains("metadata%5Bgone%5D="))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "type": "invalid_request_error",
                "message": "Invalid string: {:a=>\"1\"}",
                "param": "metadata[nested]"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = PaymentIntentRequest::from_json(&json!({
        "amount": 500,
        "metadata": { "nested": { "a": 1 }, "gone": null }
    }))
    .unwrap();

    let err = provider_for(&server)
        .create_intent(&request.to_params())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid string: {:a=>\"1\"}");
}

#[tokio::test]
async fn fractional_amount_is_judged_by_stripe() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/payment_intents"))
        .and(body_string_contains("amount=10.5"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "message": "Invalid integer: 10.5", "param": "amount" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = PaymentIntentRequest::from_json(&json!({ "amount": 10.5 })).unwrap();
    let err = provider_for(&server)
        .create_intent(&request.to_params())
        .await
        .unwrap_err();

    assert!(err.is_provider_error());
    assert_eq!(err.to_string(), "Invalid integer: 10.5");
}

#[tokio::test]
async fn missing_key_still_calls_stripe_and_relays_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/payment_intents"))
        .and(|req: &wiremock::Request| {
            req.headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .map(|v| v.trim() == "Bearer")
                .unwrap_or(false)
        })
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {
                "type": "invalid_request_error",
                "message": "You did not provide an API key."
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = StripeConfig::new("").with_api_base_url(server.uri());
    assert!(!config.is_configured());
    let provider = StripeIntentProvider::new(config).unwrap();

    let params = PaymentIntentRequest::new(1000).unwrap().to_params();
    match provider.create_intent(&params).await.unwrap_err() {
        GatewayError::Provider { provider, message } => {
            assert_eq!(provider, "stripe");
            assert_eq!(message, "You did not provide an API key.");
        }
        other => panic!("expected provider error, got {:?}", other),
    }
}
