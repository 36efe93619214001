//! # samurai-gateway
//!
//! A Rust client for the Samurai payment gateway, exposing its six
//! operations (authorize, purchase, capture, refund, void, and card
//! storage) through one uniform method surface and response shape.
//!
//! ## Features
//!
//! - **Uniform results**: every operation returns a [`GatewayResponse`]
//!   with the same success/message/params/authorization shape
//! - **Typed payment methods**: [`PaymentMethod`] distinguishes raw cards
//!   from vault tokens, so an already-issued token is never re-tokenized
//! - **Per-instance credentials**: nothing is written to process-wide
//!   state; gateways for different merchants can coexist in one process
//! - **Pluggable transport**: the [`Processor`] trait is the seam between
//!   the adapter and the wire, letting tests script the processor
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use samurai_gateway::{GatewayConfig, PaymentMethod, SamuraiGateway, TransactionOptions};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GatewayConfig::new("merchant_key", "merchant_password", "proc_token")
//!     .with_sandbox(true);
//! let gateway = SamuraiGateway::new(config)?;
//!
//! // Charge a previously stored card. Amounts are integer cents.
//! let response = gateway
//!     .purchase(1000, PaymentMethod::token("tok_abc"), &TransactionOptions::default())
//!     .await?;
//!
//! if response.success {
//!     println!("charged, authorization {:?}", response.authorization);
//! } else {
//!     println!("declined: {}", response.message);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Operation Flow
//!
//! 1. **Resolve**: a [`PaymentMethod::Token`] passes through untouched; a
//!    [`PaymentMethod::Card`] is stored first, and a failed store
//!    short-circuits the operation with the store's response
//! 2. **Call**: the adapter invokes the matching [`Processor`] operation.
//!    Capture and refund look the prior transaction up first; void
//!    addresses it by identifier directly
//! 3. **Normalize**: the processor's result folds into a
//!    [`GatewayResponse`]: identifiers copied on success, error messages
//!    joined on failure, AVS/CVV codes extracted either way
//!
//! ## Errors
//!
//! Declines are not errors: they arrive as `Ok` responses with
//! `success == false`. Hard errors ([`GatewayError`]) are reserved for bad
//! configuration, transport failures, and malformed processor payloads.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod errors;
pub mod gateway;
pub mod processor;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::{GatewayConfig, DEFAULT_ENDPOINT};
pub use errors::{GatewayError, Result};
pub use gateway::{ResolvedPaymentMethod, SamuraiGateway};
pub use processor::{HttpProcessor, Processor};
pub use types::{
    AvsResult, BillingAddress, CreditCard, CvvResult, ErrorGroup, GatewayResponse,
    PaymentMethod, PaymentMethodCreateRequest, PaymentMethodCreateResult, ProcessorResponse,
    ProcessorTransaction, ResponseParams, TransactionOptions, TransactionPaymentMethod,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_accessibility() {
        // Ensure the public construction surface is reachable
        let config = GatewayConfig::new("key", "password", "token");
        assert!(config.validate().is_ok());

        let _ = PaymentMethod::token("tok_1");
        let _ = TransactionOptions::default();
        let _ = ResponseParams::default();
    }

    #[test]
    fn test_default_endpoint() {
        assert!(DEFAULT_ENDPOINT.starts_with("https://"));
        assert!(DEFAULT_ENDPOINT.ends_with('/'));
    }
}
