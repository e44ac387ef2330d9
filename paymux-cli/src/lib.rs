pub mod app_config;

pub use app_config::Config;

use paymux_core::PaymentProvider;
use paymux_gateway::{GatewayError, PaymentGateway};
use paymux_providers::{PayPalAdapter, PayPalClient, StripeAdapter, StripeClient};
use std::sync::Arc;
use uuid::Uuid;

/// Build a gateway with every provider enabled in the configuration
pub fn build_gateway(config: &Config) -> PaymentGateway {
    let mut gateway = PaymentGateway::new();

    if config.providers.paypal.enabled {
        let adapter: Arc<dyn PaymentProvider> = Arc::new(PayPalAdapter::new(PayPalClient::new()));
        gateway.register(&config.providers.paypal.registration_name("PayPal"), adapter);
    }

    if config.providers.stripe.enabled {
        let adapter: Arc<dyn PaymentProvider> = Arc::new(StripeAdapter::new(StripeClient::new()));
        gateway.register(&config.providers.stripe.registration_name("Stripe"), adapter);
    }

    gateway
}

/// Exercise each registered provider once per operation, returning a summary
/// of the run
pub async fn run_demo(gateway: &PaymentGateway) -> Result<serde_json::Value, GatewayError> {
    const DEMO_ITEMS: [&str; 4] = ["apple", "orange", "pear", "plum"];

    let names = gateway.provider_names();
    let mut operations = 0;
    let mut verified = 0;

    for (i, name) in names.iter().enumerate() {
        let item = DEMO_ITEMS[i % DEMO_ITEMS.len()];

        gateway.process_payment(name, item).await?;
        gateway.refund_payment(name, item).await?;

        let transaction_id = Uuid::new_v4().to_string();
        if gateway.verify_payment(name, &transaction_id).await? {
            verified += 1;
        }

        operations += 3;
    }

    Ok(serde_json::json!({
        "providers": names,
        "operations": operations,
        "verified_transactions": verified,
    }))
}
