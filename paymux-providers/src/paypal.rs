use async_trait::async_trait;
use paymux_core::PaymentProvider;
use uuid::Uuid;

/// Simulated PayPal backend
///
/// Stands in for the external network client; every operation succeeds and
/// returns a synthesized reference.
#[derive(Debug, Default)]
pub struct PayPalClient;

impl PayPalClient {
    pub fn new() -> Self {
        Self
    }

    /// Capture a payment for an item
    pub async fn make_payment(&self, item: &str) -> String {
        let reference = format!("PP-{}", Uuid::new_v4().simple());
        tracing::info!("Making PayPal payment for item: {} ({})", item, reference);
        reference
    }

    /// Check a transaction against PayPal records
    pub async fn verify_payment(&self, transaction_id: &str) -> bool {
        tracing::info!(
            "Verifying PayPal payment with transaction ID: {}",
            transaction_id
        );
        true
    }

    /// Return funds for an item
    pub async fn refund_payment(&self, item: &str) -> String {
        let reference = format!("PPR-{}", Uuid::new_v4().simple());
        tracing::info!("Refunding PayPal payment for item: {} ({})", item, reference);
        reference
    }
}

/// Translates the uniform capability calls into PayPal's own method names
pub struct PayPalAdapter {
    client: PayPalClient,
}

impl PayPalAdapter {
    pub fn new(client: PayPalClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PaymentProvider for PayPalAdapter {
    async fn process_payment(
        &self,
        item: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let reference = self.client.make_payment(item).await;
        tracing::debug!("PayPal capture recorded as {}", reference);
        Ok(())
    }

    async fn handle_refund(
        &self,
        item: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let reference = self.client.refund_payment(item).await;
        tracing::debug!("PayPal refund recorded as {}", reference);
        Ok(())
    }

    async fn verify_payment(
        &self,
        transaction_id: &str,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.client.verify_payment(transaction_id).await)
    }
}
