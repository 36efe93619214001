//! Example purchase against a stored card.
//!
//! Run with:
//! ```bash
//! cargo run --example purchase
//! ```
//!
//! Environment variables:
//! - MERCHANT_KEY: Samurai merchant key
//! - MERCHANT_PASSWORD: Samurai merchant password
//! - PROCESSOR_TOKEN: Token of the processor to transact against
//! - PAYMENT_METHOD_TOKEN: Vault token of a previously stored card

use anyhow::Result;
use samurai_gateway::{GatewayConfig, PaymentMethod, SamuraiGateway, TransactionOptions};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let merchant_key = std::env::var("MERCHANT_KEY").unwrap_or_else(|_| {
        println!("⚠️  No MERCHANT_KEY set, using sandbox placeholder");
        "demo_merchant_key".to_string()
    });
    let merchant_password =
        std::env::var("MERCHANT_PASSWORD").unwrap_or_else(|_| "demo_merchant_password".to_string());
    let processor_token =
        std::env::var("PROCESSOR_TOKEN").unwrap_or_else(|_| "demo_processor_token".to_string());
    let payment_method_token =
        std::env::var("PAYMENT_METHOD_TOKEN").unwrap_or_else(|_| "tok_demo".to_string());

    println!("💳 Samurai purchase example");
    println!("   processor: {}", processor_token);
    println!();

    let config = GatewayConfig::new(merchant_key, merchant_password, processor_token)
        .with_sandbox(true);
    let gateway = SamuraiGateway::new(config)?;

    let options = TransactionOptions {
        descriptor: Some("DEMO PURCHASE".to_string()),
        ..Default::default()
    };

    println!("📡 Charging $10.00...");
    let response = gateway
        .purchase(1000, PaymentMethod::token(payment_method_token), &options)
        .await?;

    if response.success {
        println!("✅ Charged");
        println!("   authorization: {:?}", response.authorization);
        println!("   transaction token: {:?}", response.params.transaction_token);
        println!("   AVS: {:?}", response.avs_result.code);
    } else {
        println!("❌ Declined: {}", response.message);
    }

    Ok(())
}
