use paymux_core::PaymentProvider;
use std::collections::HashMap;
use std::sync::Arc;

/// Routes payment operations to registered provider adapters by name
pub struct PaymentGateway {
    providers: HashMap<String, Arc<dyn PaymentProvider>>,
}

impl PaymentGateway {
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Register an adapter under a provider name; re-registering a name
    /// replaces the previous adapter
    pub fn register(&mut self, name: &str, provider: Arc<dyn PaymentProvider>) {
        tracing::info!("Registering payment provider: {}", name);
        self.providers.insert(name.to_string(), provider);
    }

    /// Remove a registration, returning the adapter if one was present
    pub fn unregister(&mut self, name: &str) -> Option<Arc<dyn PaymentProvider>> {
        tracing::info!("Unregistering payment provider: {}", name);
        self.providers.remove(name)
    }

    /// Names of all registered providers, sorted for stable output
    pub fn provider_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.providers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Charge the customer through the named provider
    pub async fn process_payment(&self, provider: &str, item: &str) -> Result<(), GatewayError> {
        let adapter = self.get(provider)?;
        tracing::info!("Dispatching payment for {} via {}", item, provider);
        adapter
            .process_payment(item)
            .await
            .map_err(GatewayError::Provider)
    }

    /// Refund the customer through the named provider
    pub async fn refund_payment(&self, provider: &str, item: &str) -> Result<(), GatewayError> {
        let adapter = self.get(provider)?;
        tracing::info!("Dispatching refund for {} via {}", item, provider);
        adapter
            .handle_refund(item)
            .await
            .map_err(GatewayError::Provider)
    }

    /// Check a transaction through the named provider
    pub async fn verify_payment(
        &self,
        provider: &str,
        transaction_id: &str,
    ) -> Result<bool, GatewayError> {
        let adapter = self.get(provider)?;
        adapter
            .verify_payment(transaction_id)
            .await
            .map_err(GatewayError::Provider)
    }

    /// Helper to look up an adapter by name
    fn get(&self, name: &str) -> Result<&Arc<dyn PaymentProvider>, GatewayError> {
        self.providers
            .get(name)
            .ok_or_else(|| GatewayError::ProviderNotFound(name.to_string()))
    }
}

impl Default for PaymentGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Payment provider not registered: {0}")]
    ProviderNotFound(String),

    #[error("Provider call failed: {0}")]
    Provider(#[source] Box<dyn std::error::Error + Send + Sync>),
}
