//! Gateway construction options.
//!
//! Credentials are held per gateway instance and travel with every request.
//! Nothing is written to process-wide state, so gateways for different
//! merchants can coexist in one process.

use url::Url;

use crate::errors::{GatewayError, Result};

/// Default API endpoint for the Samurai gateway.
pub const DEFAULT_ENDPOINT: &str = "https://api.samurai.feefighters.com/v1/";

/// Credentials and mode for a
/// [`SamuraiGateway`](crate::gateway::SamuraiGateway).
///
/// # Examples
///
/// ```
/// use samurai_gateway::config::GatewayConfig;
///
/// let config = GatewayConfig::new("merchant_key", "merchant_password", "proc_token")
///     .with_sandbox(true);
///
/// assert!(config.sandbox);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Merchant key identifying the account ("login")
    pub merchant_key: String,

    /// Merchant password
    pub merchant_password: String,

    /// Token of the processor transactions run against
    pub processor_token: String,

    /// Route transactions to the processor's sandbox
    pub sandbox: bool,

    /// API endpoint; override to point at a stub server in tests
    pub endpoint: String,
}

impl GatewayConfig {
    /// Creates a configuration with the three required credentials.
    pub fn new(
        merchant_key: impl Into<String>,
        merchant_password: impl Into<String>,
        processor_token: impl Into<String>,
    ) -> Self {
        Self {
            merchant_key: merchant_key.into(),
            merchant_password: merchant_password.into(),
            processor_token: processor_token.into(),
            sandbox: false,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Sets sandbox mode.
    pub fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Overrides the API endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Checks that every required credential is present and the endpoint
    /// parses as a URL.
    pub fn validate(&self) -> Result<()> {
        if self.merchant_key.is_empty() {
            return Err(GatewayError::MissingCredential("merchant_key"));
        }
        if self.merchant_password.is_empty() {
            return Err(GatewayError::MissingCredential("merchant_password"));
        }
        if self.processor_token.is_empty() {
            return Err(GatewayError::MissingCredential("processor_token"));
        }
        self.endpoint_url()?;
        Ok(())
    }

    pub(crate) fn endpoint_url(&self) -> Result<Url> {
        Url::parse(&self.endpoint)
            .map_err(|e| GatewayError::InvalidConfig(format!("endpoint {}: {e}", self.endpoint)))
    }
}
