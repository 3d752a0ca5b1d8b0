//! Verifies a transaction reference against the configured Paystack account.
//!
//! Reads PAYSTACK_SECRET_KEY (and optionally PAYSTACK_BASE_URL) from the
//! environment or a `.env` file.
//!
//! Run with: cargo run -p paystack-client --example verify_transaction -- <reference>

use anyhow::Context;
use paystack_client::PaystackClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,paystack_client=debug".into()),
        )
        .init();

    let reference = std::env::args()
        .nth(1)
        .context("usage: verify_transaction <reference>")?;

    let client = PaystackClient::from_env();
    tracing::info!("Verifying {} against {}", reference, client.config().base_url());

    let (ok, payload) = client.transactions().verify(&reference).await?.into_parts();
    if ok {
        println!("✅ {}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("✗ {}", payload.as_str().unwrap_or("unknown error"));
        std::process::exit(1);
    }

    Ok(())
}
