pub mod registry;

pub use registry::{GatewayError, PaymentGateway};
