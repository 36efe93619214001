//! Example card storage (tokenization).
//!
//! Run with:
//! ```bash
//! cargo run --example store_card
//! ```
//!
//! Environment variables:
//! - MERCHANT_KEY: Samurai merchant key
//! - MERCHANT_PASSWORD: Samurai merchant password
//! - PROCESSOR_TOKEN: Token of the processor to transact against

use anyhow::Result;
use samurai_gateway::{
    BillingAddress, CreditCard, GatewayConfig, SamuraiGateway, TransactionOptions,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let merchant_key =
        std::env::var("MERCHANT_KEY").unwrap_or_else(|_| "demo_merchant_key".to_string());
    let merchant_password =
        std::env::var("MERCHANT_PASSWORD").unwrap_or_else(|_| "demo_merchant_password".to_string());
    let processor_token =
        std::env::var("PROCESSOR_TOKEN").unwrap_or_else(|_| "demo_processor_token".to_string());

    println!("🗄️  Samurai card storage example");
    println!();

    let config = GatewayConfig::new(merchant_key, merchant_password, processor_token)
        .with_sandbox(true);
    let gateway = SamuraiGateway::new(config)?;

    // The Samurai sandbox test card
    let card = CreditCard {
        number: "4111111111111111".to_string(),
        month: 9,
        year: 2027,
        verification_value: "123".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
    };

    let options = TransactionOptions {
        billing_address: Some(BillingAddress {
            address1: Some("1 Main St".to_string()),
            address2: None,
            city: Some("Springfield".to_string()),
            zip: Some("12345".to_string()),
        }),
        ..Default::default()
    };

    println!("📡 Tokenizing card ending in {}...", &card.number[card.number.len() - 4..]);
    let response = gateway.store(&card, &options).await?;

    if response.success {
        println!("✅ Stored");
        println!("   token: {:?}", response.params.payment_method_token);
        println!("   reuse it with PaymentMethod::token(...)");
    } else {
        println!("❌ Rejected: {}", response.message);
    }

    Ok(())
}
