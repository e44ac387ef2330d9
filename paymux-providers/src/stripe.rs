use async_trait::async_trait;
use paymux_core::PaymentProvider;
use uuid::Uuid;

/// Simulated Stripe backend
///
/// Same role as [`crate::PayPalClient`], but with Stripe's incompatible
/// method names and reference formats.
#[derive(Debug, Default)]
pub struct StripeClient;

impl StripeClient {
    pub fn new() -> Self {
        Self
    }

    /// Charge the card for an item
    pub async fn charge_payment(&self, item: &str) -> String {
        let charge_id = format!("ch_{}", Uuid::new_v4().simple());
        tracing::info!("Charging Stripe payment for item: {} ({})", item, charge_id);
        charge_id
    }

    /// Check a charge against Stripe records
    pub async fn verify_charge(&self, transaction_id: &str) -> bool {
        tracing::info!(
            "Verifying Stripe payment with transaction ID: {}",
            transaction_id
        );
        true
    }

    /// Reverse a charge for an item
    pub async fn issue_refund(&self, item: &str) -> String {
        let refund_id = format!("re_{}", Uuid::new_v4().simple());
        tracing::info!(
            "Issuing refund for Stripe payment for item: {} ({})",
            item,
            refund_id
        );
        refund_id
    }
}

/// Translates the uniform capability calls into Stripe's own method names
pub struct StripeAdapter {
    client: StripeClient,
}

impl StripeAdapter {
    pub fn new(client: StripeClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PaymentProvider for StripeAdapter {
    async fn process_payment(
        &self,
        item: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let charge_id = self.client.charge_payment(item).await;
        tracing::debug!("Stripe charge recorded as {}", charge_id);
        Ok(())
    }

    async fn handle_refund(
        &self,
        item: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let refund_id = self.client.issue_refund(item).await;
        tracing::debug!("Stripe refund recorded as {}", refund_id);
        Ok(())
    }

    async fn verify_payment(
        &self,
        transaction_id: &str,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.client.verify_charge(transaction_id).await)
    }
}
