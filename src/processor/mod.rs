//! Processor client seam.
//!
//! [`Processor`] describes the remote API surface the gateway delegates to.
//! [`HttpProcessor`] is the wire implementation; tests substitute their own
//! implementation to exercise the adapter without a network.

pub mod http;

pub use http::HttpProcessor;

use async_trait::async_trait;

use crate::errors::Result;
use crate::types::{
    PaymentMethodCreateRequest, PaymentMethodCreateResult, ProcessorTransaction,
    TransactionOptions,
};

/// Operations the Samurai processor exposes.
///
/// Amounts arrive pre-formatted as decimal major-unit strings (see
/// [`format_amount`](crate::utils::format_amount)); the processor consumes
/// them verbatim.
#[async_trait]
pub trait Processor: Send + Sync {
    /// Reserves an amount against a stored payment method without
    /// capturing it.
    async fn authorize(
        &self,
        payment_method_token: &str,
        amount: &str,
        options: &TransactionOptions,
    ) -> Result<ProcessorTransaction>;

    /// Authorizes and captures in one step.
    async fn purchase(
        &self,
        payment_method_token: &str,
        amount: &str,
        options: &TransactionOptions,
    ) -> Result<ProcessorTransaction>;

    /// Cancels an uncaptured authorization.
    ///
    /// Takes the transaction identifier directly; no prior lookup is
    /// required.
    async fn void(
        &self,
        transaction_id: &str,
        amount: &str,
        options: &TransactionOptions,
    ) -> Result<ProcessorTransaction>;

    /// Fetches a previously created transaction.
    ///
    /// # Errors
    ///
    /// [`GatewayError::TransactionNotFound`](crate::errors::GatewayError::TransactionNotFound)
    /// if the processor has no transaction with this identifier.
    async fn find_transaction(&self, transaction_id: &str) -> Result<ProcessorTransaction>;

    /// Settles a previously authorized transaction, addressed by its
    /// transaction token.
    async fn capture(&self, transaction_token: &str, amount: &str)
        -> Result<ProcessorTransaction>;

    /// Returns funds for a settled transaction, addressed by its
    /// transaction token.
    async fn credit(&self, transaction_token: &str, amount: &str)
        -> Result<ProcessorTransaction>;

    /// Exchanges raw card data for a reusable vault token.
    async fn create_payment_method(
        &self,
        request: &PaymentMethodCreateRequest,
    ) -> Result<PaymentMethodCreateResult>;
}
