pub mod paypal;
pub mod stripe;

pub use paypal::{PayPalAdapter, PayPalClient};
pub use stripe::{StripeAdapter, StripeClient};
