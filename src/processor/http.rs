//! HTTP implementation of the [`Processor`] trait.
//!
//! Talks to the Samurai REST API with per-instance credentials over HTTP
//! basic auth. Declines come back with a 2xx status and `success: false`
//! in the body; only transport problems and unexpected statuses surface
//! as errors.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use url::Url;

use super::Processor;
use crate::config::GatewayConfig;
use crate::errors::{GatewayError, Result};
use crate::types::{
    PaymentMethodCreateRequest, PaymentMethodCreateResult, ProcessorTransaction,
    TransactionOptions,
};

/// A processor client bound to one merchant's credentials.
pub struct HttpProcessor {
    client: Client,
    base: Url,
    merchant_key: String,
    merchant_password: String,
    processor_token: String,
}

#[derive(Serialize)]
struct TransactionRequest<'a> {
    payment_method_token: &'a str,
    amount: &'a str,
    #[serde(flatten)]
    options: &'a TransactionOptions,
}

#[derive(Serialize)]
struct VoidRequest<'a> {
    amount: &'a str,
    #[serde(flatten)]
    options: &'a TransactionOptions,
}

#[derive(Serialize)]
struct AmountRequest<'a> {
    amount: &'a str,
}

impl HttpProcessor {
    /// Builds a processor client from gateway configuration.
    ///
    /// # Errors
    ///
    /// [`GatewayError::ClientUnavailable`] if the HTTP client cannot be
    /// constructed, [`GatewayError::InvalidConfig`] if the endpoint does
    /// not parse.
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| GatewayError::ClientUnavailable(e.to_string()))?;

        Ok(Self {
            client,
            base: config.endpoint_url()?,
            merchant_key: config.merchant_key.clone(),
            merchant_password: config.merchant_password.clone(),
            processor_token: config.processor_token.clone(),
        })
    }

    fn url(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path)?)
    }

    async fn post_transaction<B>(&self, path: &str, body: &B) -> Result<ProcessorTransaction>
    where
        B: Serialize + Sync,
    {
        let url = self.url(path)?;
        tracing::debug!(path, "posting transaction request");
        let response = self
            .client
            .post(url)
            .basic_auth(&self.merchant_key, Some(&self.merchant_password))
            .json(body)
            .send()
            .await?;
        Self::read_transaction(response).await
    }

    async fn read_transaction(response: Response) -> Result<ProcessorTransaction> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<ProcessorTransaction>().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(GatewayError::Processor(format!("{status}: {body}")))
        }
    }
}

#[async_trait]
impl Processor for HttpProcessor {
    async fn authorize(
        &self,
        payment_method_token: &str,
        amount: &str,
        options: &TransactionOptions,
    ) -> Result<ProcessorTransaction> {
        let path = format!("processors/{}/authorize.json", self.processor_token);
        let request = TransactionRequest {
            payment_method_token,
            amount,
            options,
        };
        self.post_transaction(&path, &request).await
    }

    async fn purchase(
        &self,
        payment_method_token: &str,
        amount: &str,
        options: &TransactionOptions,
    ) -> Result<ProcessorTransaction> {
        let path = format!("processors/{}/purchase.json", self.processor_token);
        let request = TransactionRequest {
            payment_method_token,
            amount,
            options,
        };
        self.post_transaction(&path, &request).await
    }

    async fn void(
        &self,
        transaction_id: &str,
        amount: &str,
        options: &TransactionOptions,
    ) -> Result<ProcessorTransaction> {
        let path = format!("transactions/{transaction_id}/void.json");
        let request = VoidRequest { amount, options };
        self.post_transaction(&path, &request).await
    }

    async fn find_transaction(&self, transaction_id: &str) -> Result<ProcessorTransaction> {
        let url = self.url(&format!("transactions/{transaction_id}.json"))?;
        tracing::debug!(transaction_id, "fetching transaction");
        let response = self
            .client
            .get(url)
            .basic_auth(&self.merchant_key, Some(&self.merchant_password))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(GatewayError::TransactionNotFound(transaction_id.to_string()));
        }
        Self::read_transaction(response).await
    }

    async fn capture(
        &self,
        transaction_token: &str,
        amount: &str,
    ) -> Result<ProcessorTransaction> {
        let path = format!("transactions/{transaction_token}/capture.json");
        self.post_transaction(&path, &AmountRequest { amount }).await
    }

    async fn credit(
        &self,
        transaction_token: &str,
        amount: &str,
    ) -> Result<ProcessorTransaction> {
        let path = format!("transactions/{transaction_token}/credit.json");
        self.post_transaction(&path, &AmountRequest { amount }).await
    }

    async fn create_payment_method(
        &self,
        request: &PaymentMethodCreateRequest,
    ) -> Result<PaymentMethodCreateResult> {
        let url = self.url("payment_methods.json")?;
        tracing::debug!("creating payment method");
        let response = self
            .client
            .post(url)
            .basic_auth(&self.merchant_key, Some(&self.merchant_password))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(response.json::<PaymentMethodCreateResult>().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(GatewayError::Processor(format!("{status}: {body}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn processor() -> HttpProcessor {
        let config = GatewayConfig::new("key", "password", "proc_abc")
            .with_endpoint("https://gateway.test/v1/");
        HttpProcessor::new(&config).unwrap()
    }

    #[test]
    fn test_url_joins_relative_paths() {
        let processor = processor();
        let url = processor.url("processors/proc_abc/purchase.json").unwrap();
        assert_eq!(
            url.as_str(),
            "https://gateway.test/v1/processors/proc_abc/purchase.json"
        );

        let url = processor.url("transactions/txn_1.json").unwrap();
        assert_eq!(url.as_str(), "https://gateway.test/v1/transactions/txn_1.json");
    }

    #[test]
    fn test_transaction_request_flattens_options() {
        let options = TransactionOptions {
            descriptor: Some("ACME CORP".to_string()),
            ..Default::default()
        };
        let request = TransactionRequest {
            payment_method_token: "pm_1",
            amount: "10.00",
            options: &options,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["payment_method_token"], "pm_1");
        assert_eq!(value["amount"], "10.00");
        assert_eq!(value["descriptor"], "ACME CORP");
        assert!(value.get("billing_reference").is_none());
    }

    #[test]
    fn test_void_request_has_no_payment_method() {
        let options = TransactionOptions::default();
        let request = VoidRequest {
            amount: "5.00",
            options: &options,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["amount"], "5.00");
        assert!(value.get("payment_method_token").is_none());
    }
}
