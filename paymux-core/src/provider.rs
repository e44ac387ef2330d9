use async_trait::async_trait;

/// Uniform contract for charging, refunding and verifying payments.
///
/// The gateway only ever depends on this trait; concrete provider clients
/// stay behind their adapters.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Charge the customer for an item
    async fn process_payment(
        &self,
        item: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Return funds for a previously purchased item
    async fn handle_refund(
        &self,
        item: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Check whether a transaction settled with the provider
    async fn verify_payment(
        &self,
        transaction_id: &str,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}
