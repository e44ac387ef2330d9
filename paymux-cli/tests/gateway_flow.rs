use paymux_cli::{build_gateway, run_demo, Config};
use paymux_gateway::{GatewayError, PaymentGateway};
use paymux_providers::{PayPalAdapter, PayPalClient, StripeAdapter, StripeClient};
use std::sync::Arc;

#[tokio::test]
async fn test_uniform_dispatch_over_both_providers() {
    let mut gateway = PaymentGateway::new();
    gateway.register("PayPal", Arc::new(PayPalAdapter::new(PayPalClient::new())));
    gateway.register("Stripe", Arc::new(StripeAdapter::new(StripeClient::new())));

    gateway.process_payment("PayPal", "apple").await.unwrap();
    gateway.process_payment("Stripe", "orange").await.unwrap();

    gateway.refund_payment("PayPal", "apple").await.unwrap();
    gateway.refund_payment("Stripe", "orange").await.unwrap();

    assert!(gateway.verify_payment("PayPal", "1").await.unwrap());
    assert!(gateway.verify_payment("Stripe", "2").await.unwrap());
}

#[tokio::test]
async fn test_unregistered_provider_is_rejected() {
    let gateway = PaymentGateway::new();

    let err = gateway.verify_payment("Square", "1").await.unwrap_err();

    assert!(matches!(err, GatewayError::ProviderNotFound(name) if name == "Square"));
}

#[tokio::test]
async fn test_demo_covers_every_registered_provider() {
    let config = Config::default();
    let gateway = build_gateway(&config);

    let summary = run_demo(&gateway).await.unwrap();

    assert_eq!(summary["providers"], serde_json::json!(["PayPal", "Stripe"]));
    assert_eq!(summary["operations"], 6);
    assert_eq!(summary["verified_transactions"], 2);
}

#[tokio::test]
async fn test_disabled_provider_is_not_registered() {
    let mut config = Config::default();
    config.providers.paypal.enabled = false;

    let gateway = build_gateway(&config);

    assert_eq!(gateway.provider_names(), vec!["Stripe"]);

    let err = gateway.process_payment("PayPal", "apple").await.unwrap_err();
    assert!(matches!(err, GatewayError::ProviderNotFound(_)));
}
