//! Core type definitions for the Samurai gateway.
//!
//! This module contains the data structures used on both sides of the
//! adapter: the caller-facing payment method and response types, and the
//! wire-level shapes exchanged with the processor.

use serde::{Deserialize, Serialize};

/// A raw payment card, as collected from the cardholder.
///
/// Raw cards are exchanged for a vault token before any transaction runs;
/// see [`store`](crate::gateway::SamuraiGateway::store).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditCard {
    /// Primary account number
    pub number: String,

    /// Expiry month, 1-12
    pub month: u32,

    /// Four-digit expiry year
    pub year: u32,

    /// Card verification value (CVV/CVC)
    pub verification_value: String,

    /// Cardholder first name
    pub first_name: String,

    /// Cardholder last name
    pub last_name: String,
}

/// Billing address fields attached to a card at storage time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BillingAddress {
    /// Street address, first line
    pub address1: Option<String>,

    /// Street address, second line
    pub address2: Option<String>,

    /// City
    pub city: Option<String>,

    /// Postal code
    pub zip: Option<String>,
}

/// A payment method reference: either a raw card or a previously issued
/// vault token.
///
/// Tokens pass through the gateway untouched; a raw card is tokenized
/// first. This makes the "already tokenized" check a type-level decision
/// instead of a runtime guess.
///
/// # Examples
///
/// ```
/// use samurai_gateway::types::PaymentMethod;
///
/// let method = PaymentMethod::token("tok_abc123");
/// assert!(matches!(method, PaymentMethod::Token(_)));
/// ```
#[derive(Debug, Clone)]
pub enum PaymentMethod {
    /// A raw card that still needs tokenization
    Card(CreditCard),

    /// An opaque token issued by a prior store operation
    Token(String),
}

impl PaymentMethod {
    /// Creates a payment method from an already-issued vault token.
    pub fn token(token: impl Into<String>) -> Self {
        PaymentMethod::Token(token.into())
    }
}

impl From<CreditCard> for PaymentMethod {
    fn from(card: CreditCard) -> Self {
        PaymentMethod::Card(card)
    }
}

/// Options forwarded to the processor with each transaction.
///
/// Only the serialized fields travel on the wire; the billing address is
/// consumed locally when a card is stored.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransactionOptions {
    /// Merchant-side billing reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_reference: Option<String>,

    /// Merchant-side customer reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_reference: Option<String>,

    /// Free-form custom data echoed back by the processor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<String>,

    /// Statement descriptor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<String>,

    /// Billing address used when storing a card
    #[serde(skip)]
    pub billing_address: Option<BillingAddress>,
}

/// One field-keyed group of processor error messages.
///
/// The processor reports groups in a defined order and messages in order
/// within each group; both orders are preserved when messages are joined
/// into a response message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorGroup {
    /// Field or context the messages apply to (e.g. `"input.card_number"`)
    pub context: String,

    /// Messages in the order the processor reported them
    pub messages: Vec<String>,
}

/// Nested payment method summary on a processor transaction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionPaymentMethod {
    /// Vault token of the payment method the transaction ran against
    pub payment_method_token: Option<String>,
}

/// The acquiring processor's own response fragment, when present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessorResponse {
    /// Address Verification System result code
    pub avs_result_code: Option<String>,

    /// Card verification value result code
    pub cvv_result_code: Option<String>,
}

/// A transaction as reported by the processor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessorTransaction {
    /// Whether the processor accepted the transaction
    pub success: bool,

    /// Merchant-facing reference identifier
    pub reference_id: Option<String>,

    /// Opaque token addressing this transaction in later operations
    pub transaction_token: Option<String>,

    /// Payment method the transaction ran against
    pub payment_method: Option<TransactionPaymentMethod>,

    /// Acquirer response details; absent for failures that never reached
    /// the acquirer
    pub processor_response: Option<ProcessorResponse>,

    /// Error groups, empty on success
    #[serde(default)]
    pub errors: Vec<ErrorGroup>,
}

impl ProcessorTransaction {
    /// Space-joins every error message, preserving group order and then
    /// message order within each group.
    pub fn error_messages(&self) -> String {
        join_messages(&self.errors)
    }
}

/// Fields sent to the processor to store a card.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentMethodCreateRequest {
    /// Primary account number
    pub card_number: String,

    /// Expiry month, zero-padded to two digits
    pub expiry_month: String,

    /// Four-digit expiry year
    pub expiry_year: String,

    /// Card verification value
    pub cvv: String,

    /// Cardholder first name
    pub first_name: String,

    /// Cardholder last name
    pub last_name: String,

    /// Street address, first line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_1: Option<String>,

    /// Street address, second line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_2: Option<String>,

    /// City
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Postal code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,

    /// Route the card to the processor's sandbox vault
    pub sandbox: bool,
}

/// The processor's answer to a card storage request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentMethodCreateResult {
    /// Issued vault token
    pub payment_method_token: Option<String>,

    /// Whether the submitted card data passed validation
    pub is_sensitive_data_valid: bool,

    /// Error groups, empty on success
    #[serde(default)]
    pub errors: Vec<ErrorGroup>,
}

impl PaymentMethodCreateResult {
    /// Space-joins every error message, preserving group order and then
    /// message order within each group.
    pub fn error_messages(&self) -> String {
        join_messages(&self.errors)
    }
}

fn join_messages(errors: &[ErrorGroup]) -> String {
    errors
        .iter()
        .flat_map(|group| group.messages.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Identifiers copied out of a successful processor transaction.
///
/// Every field is `None` on a failed response; identifiers never leak out
/// of declines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseParams {
    /// Merchant-facing reference identifier
    pub reference_id: Option<String>,

    /// Token addressing the transaction in capture/refund/void
    pub transaction_token: Option<String>,

    /// Vault token of the payment method involved
    pub payment_method_token: Option<String>,
}

impl ResponseParams {
    /// True when no identifier is set.
    pub fn is_empty(&self) -> bool {
        self.reference_id.is_none()
            && self.transaction_token.is_none()
            && self.payment_method_token.is_none()
    }
}

/// Address Verification System result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvsResult {
    /// Raw AVS code from the acquirer, if any was reported
    pub code: Option<String>,
}

/// Card verification value check result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvvResult {
    /// Raw CVV code from the acquirer, if any was reported
    pub code: Option<String>,
}

/// The uniform result every gateway operation returns.
///
/// # Examples
///
/// ```
/// use samurai_gateway::types::GatewayResponse;
///
/// fn report(response: &GatewayResponse) {
///     if response.success {
///         println!("authorized: {:?}", response.authorization);
///     } else {
///         println!("declined: {}", response.message);
///     }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayResponse {
    /// Whether the operation succeeded
    pub success: bool,

    /// `"OK"` on success; the processor's joined error messages otherwise
    pub message: String,

    /// Identifiers from the processor, empty on failure
    pub params: ResponseParams,

    /// Reference identifier to feed into capture/refund/void
    pub authorization: Option<String>,

    /// Whether the gateway ran in sandbox mode
    pub test: bool,

    /// Address verification outcome
    pub avs_result: AvsResult,

    /// Card verification value outcome
    pub cvv_result: CvvResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_preserve_order() {
        let transaction = ProcessorTransaction {
            success: false,
            errors: vec![
                ErrorGroup {
                    context: "input.card_number".to_string(),
                    messages: vec!["is invalid".to_string(), "too short".to_string()],
                },
                ErrorGroup {
                    context: "processor.transaction".to_string(),
                    messages: vec!["declined".to_string()],
                },
            ],
            ..Default::default()
        };

        assert_eq!(transaction.error_messages(), "is invalid too short declined");
    }

    #[test]
    fn test_error_messages_empty() {
        let transaction = ProcessorTransaction::default();
        assert_eq!(transaction.error_messages(), "");
    }

    #[test]
    fn test_response_params_is_empty() {
        assert!(ResponseParams::default().is_empty());

        let params = ResponseParams {
            reference_id: Some("ref_1".to_string()),
            ..Default::default()
        };
        assert!(!params.is_empty());
    }

    #[test]
    fn test_transaction_deserialization() {
        let json = r#"{
            "success": true,
            "reference_id": "ref_1",
            "transaction_token": "txn_1",
            "payment_method": {"payment_method_token": "pm_1"},
            "processor_response": {"avs_result_code": "Y", "cvv_result_code": "M"}
        }"#;

        let transaction: ProcessorTransaction = serde_json::from_str(json).unwrap();
        assert!(transaction.success);
        assert_eq!(transaction.reference_id.as_deref(), Some("ref_1"));
        assert!(transaction.errors.is_empty());

        let avs = transaction.processor_response.unwrap().avs_result_code;
        assert_eq!(avs.as_deref(), Some("Y"));
    }

    #[test]
    fn test_transaction_options_serialization() {
        let options = TransactionOptions {
            billing_reference: Some("bill_1".to_string()),
            descriptor: Some("ACME CORP".to_string()),
            billing_address: Some(BillingAddress::default()),
            ..Default::default()
        };

        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value["billing_reference"], "bill_1");
        assert_eq!(value["descriptor"], "ACME CORP");
        // local-only field never reaches the wire
        assert!(value.get("billing_address").is_none());
        // absent options are omitted entirely
        assert!(value.get("customer_reference").is_none());
    }

    #[test]
    fn test_create_request_omits_missing_address() {
        let request = PaymentMethodCreateRequest {
            card_number: "4111111111111111".to_string(),
            expiry_month: "09".to_string(),
            expiry_year: "2025".to_string(),
            cvv: "123".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            address_1: None,
            address_2: None,
            city: None,
            zip: None,
            sandbox: true,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["expiry_month"], "09");
        assert_eq!(value["sandbox"], true);
        assert!(value.get("address_1").is_none());
    }
}
