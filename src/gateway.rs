//! The gateway adapter: six uniform operations over a [`Processor`].
//!
//! Each operation resolves its payment method if needed, makes the
//! corresponding processor call, and folds the processor's result into a
//! [`GatewayResponse`]. Amounts are integer cents; the conversion to the
//! processor's major-unit convention happens here.

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::errors::{GatewayError, Result};
use crate::processor::{HttpProcessor, Processor};
use crate::types::{
    AvsResult, CreditCard, CvvResult, GatewayResponse, PaymentMethod,
    PaymentMethodCreateRequest, ProcessorTransaction, ResponseParams, TransactionOptions,
};
use crate::utils::{format_amount, pad_expiry_month};

/// Outcome of resolving a [`PaymentMethod`] to a vault token.
///
/// A failed tokenization is not an error: the processor's response travels
/// back to the caller unchanged, and the type forces call sites to handle
/// both arms.
#[derive(Debug, Clone)]
pub enum ResolvedPaymentMethod {
    /// A token ready to transact with
    Token(String),

    /// Tokenization failed; the response carries the processor's messages
    Failed(GatewayResponse),
}

/// Adapter exposing the Samurai gateway through one uniform surface.
///
/// # Examples
///
/// ```rust,no_run
/// use samurai_gateway::{GatewayConfig, PaymentMethod, SamuraiGateway, TransactionOptions};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = GatewayConfig::new("merchant_key", "merchant_password", "proc_token");
/// let gateway = SamuraiGateway::new(config)?;
///
/// let response = gateway
///     .purchase(1000, PaymentMethod::token("tok_abc"), &TransactionOptions::default())
///     .await?;
///
/// if response.success {
///     println!("charged, authorization {:?}", response.authorization);
/// }
/// # Ok(())
/// # }
/// ```
pub struct SamuraiGateway {
    config: GatewayConfig,
    processor: Arc<dyn Processor>,
}

impl SamuraiGateway {
    /// Creates a gateway talking to the real Samurai API.
    ///
    /// # Errors
    ///
    /// [`GatewayError::MissingCredential`] or
    /// [`GatewayError::InvalidConfig`] for bad configuration,
    /// [`GatewayError::ClientUnavailable`] if the HTTP client cannot be
    /// built.
    pub fn new(config: GatewayConfig) -> Result<Self> {
        config.validate()?;
        let processor = Arc::new(HttpProcessor::new(&config)?);
        Ok(Self { config, processor })
    }

    /// Creates a gateway over a caller-supplied processor implementation.
    ///
    /// This is the seam tests use; it also lets callers bring their own
    /// transport.
    pub fn with_processor(config: GatewayConfig, processor: Arc<dyn Processor>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, processor })
    }

    /// True when transactions are routed to the processor's sandbox.
    pub fn is_test(&self) -> bool {
        self.config.sandbox
    }

    /// Reserves `amount` cents against a card or token without capturing.
    pub async fn authorize(
        &self,
        amount: i64,
        method: PaymentMethod,
        options: &TransactionOptions,
    ) -> Result<GatewayResponse> {
        let token = match self.resolve_payment_method(method, options).await? {
            ResolvedPaymentMethod::Token(token) => token,
            ResolvedPaymentMethod::Failed(response) => return Ok(response),
        };

        tracing::debug!(amount, "authorizing payment");
        let transaction = self
            .processor
            .authorize(&token, &format_amount(amount), options)
            .await?;
        Ok(self.normalize(&transaction))
    }

    /// Authorizes and captures `amount` cents in one step.
    pub async fn purchase(
        &self,
        amount: i64,
        method: PaymentMethod,
        options: &TransactionOptions,
    ) -> Result<GatewayResponse> {
        let token = match self.resolve_payment_method(method, options).await? {
            ResolvedPaymentMethod::Token(token) => token,
            ResolvedPaymentMethod::Failed(response) => return Ok(response),
        };

        tracing::debug!(amount, "purchasing");
        let transaction = self
            .processor
            .purchase(&token, &format_amount(amount), options)
            .await?;
        Ok(self.normalize(&transaction))
    }

    /// Settles `amount` cents of a prior authorization.
    ///
    /// The transaction is looked up first; a lookup miss comes back as a
    /// non-success response rather than an error, matching the other
    /// operations.
    pub async fn capture(
        &self,
        amount: i64,
        authorization_id: &str,
        _options: &TransactionOptions,
    ) -> Result<GatewayResponse> {
        let token = match self.lookup_transaction_token(authorization_id).await? {
            Ok(token) => token,
            Err(response) => return Ok(response),
        };

        tracing::debug!(amount, authorization_id, "capturing");
        let transaction = self.processor.capture(&token, &format_amount(amount)).await?;
        Ok(self.normalize(&transaction))
    }

    /// Returns `amount` cents of a settled transaction.
    pub async fn refund(
        &self,
        amount: i64,
        transaction_id: &str,
        _options: &TransactionOptions,
    ) -> Result<GatewayResponse> {
        let token = match self.lookup_transaction_token(transaction_id).await? {
            Ok(token) => token,
            Err(response) => return Ok(response),
        };

        tracing::debug!(amount, transaction_id, "refunding");
        let transaction = self.processor.credit(&token, &format_amount(amount)).await?;
        Ok(self.normalize(&transaction))
    }

    /// Cancels an uncaptured authorization.
    ///
    /// Unlike capture and refund, void addresses the transaction by
    /// identifier directly and performs no lookup.
    pub async fn void(
        &self,
        amount: i64,
        transaction_id: &str,
        options: &TransactionOptions,
    ) -> Result<GatewayResponse> {
        tracing::debug!(amount, transaction_id, "voiding");
        let transaction = self
            .processor
            .void(transaction_id, &format_amount(amount), options)
            .await?;
        Ok(self.normalize(&transaction))
    }

    /// Exchanges a raw card for a reusable vault token.
    ///
    /// On success the issued token lands in
    /// `response.params.payment_method_token`; failures carry no token.
    pub async fn store(
        &self,
        card: &CreditCard,
        options: &TransactionOptions,
    ) -> Result<GatewayResponse> {
        let address = options.billing_address.clone().unwrap_or_default();
        let request = PaymentMethodCreateRequest {
            card_number: card.number.clone(),
            expiry_month: pad_expiry_month(card.month),
            expiry_year: card.year.to_string(),
            cvv: card.verification_value.clone(),
            first_name: card.first_name.clone(),
            last_name: card.last_name.clone(),
            address_1: address.address1,
            address_2: address.address2,
            city: address.city,
            zip: address.zip,
            sandbox: self.is_test(),
        };

        let result = self.processor.create_payment_method(&request).await?;

        let success = result.is_sensitive_data_valid;
        tracing::debug!(success, "stored payment method");

        let params = ResponseParams {
            payment_method_token: if success {
                result.payment_method_token.clone()
            } else {
                None
            },
            ..Default::default()
        };
        let message = if success {
            "OK".to_string()
        } else {
            result.error_messages()
        };

        Ok(GatewayResponse {
            success,
            message,
            params,
            authorization: None,
            test: self.is_test(),
            avs_result: AvsResult::default(),
            cvv_result: CvvResult::default(),
        })
    }

    /// Resolves a payment method to a vault token, tokenizing raw cards.
    ///
    /// A token input passes through with no processor call.
    pub async fn resolve_payment_method(
        &self,
        method: PaymentMethod,
        options: &TransactionOptions,
    ) -> Result<ResolvedPaymentMethod> {
        match method {
            PaymentMethod::Token(token) => Ok(ResolvedPaymentMethod::Token(token)),
            PaymentMethod::Card(card) => {
                let response = self.store(&card, options).await?;
                if !response.success {
                    return Ok(ResolvedPaymentMethod::Failed(response));
                }
                match response.params.payment_method_token.clone() {
                    Some(token) => Ok(ResolvedPaymentMethod::Token(token)),
                    None => Err(GatewayError::Processor(
                        "card storage succeeded without a payment method token".to_string(),
                    )),
                }
            }
        }
    }

    /// Looks a transaction up and extracts the token capture/credit need.
    ///
    /// A lookup miss folds into a non-success response (the inner `Err`);
    /// transport failures stay hard errors (the outer `Err`).
    async fn lookup_transaction_token(
        &self,
        transaction_id: &str,
    ) -> Result<std::result::Result<String, GatewayResponse>> {
        let found = match self.processor.find_transaction(transaction_id).await {
            Ok(found) => found,
            Err(err @ GatewayError::TransactionNotFound(_)) => {
                tracing::debug!(transaction_id, "transaction lookup failed");
                return Ok(Err(self.failure_response(err.to_string())));
            }
            Err(err) => return Err(err),
        };

        match found.transaction_token {
            Some(token) => Ok(Ok(token)),
            None => Err(GatewayError::Processor(format!(
                "transaction {transaction_id} carries no transaction token"
            ))),
        }
    }

    fn failure_response(&self, message: String) -> GatewayResponse {
        GatewayResponse {
            success: false,
            message,
            params: ResponseParams::default(),
            authorization: None,
            test: self.is_test(),
            avs_result: AvsResult::default(),
            cvv_result: CvvResult::default(),
        }
    }

    /// Folds a processor transaction into the uniform response shape.
    ///
    /// Identifiers are copied only out of successes; AVS and CVV codes are
    /// extracted whenever the acquirer reported them, success or not.
    fn normalize(&self, transaction: &ProcessorTransaction) -> GatewayResponse {
        let mut params = ResponseParams::default();
        let mut authorization = None;

        if transaction.success {
            params.reference_id = transaction.reference_id.clone();
            params.transaction_token = transaction.transaction_token.clone();
            params.payment_method_token = transaction
                .payment_method
                .as_ref()
                .and_then(|pm| pm.payment_method_token.clone());
            authorization = transaction.reference_id.clone();
        }

        let avs_result = AvsResult {
            code: transaction
                .processor_response
                .as_ref()
                .and_then(|r| r.avs_result_code.clone()),
        };
        let cvv_result = CvvResult {
            code: transaction
                .processor_response
                .as_ref()
                .and_then(|r| r.cvv_result_code.clone()),
        };

        let message = if transaction.success {
            "OK".to_string()
        } else {
            transaction.error_messages()
        };

        GatewayResponse {
            success: transaction.success,
            message,
            params,
            authorization,
            test: self.is_test(),
            avs_result,
            cvv_result,
        }
    }
}
