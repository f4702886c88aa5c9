//! CLI for creating a hosted payment link for a trip
//!
//! Prints the link URL, or the full payment link object with `--json`.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use travel_core::config::Config;
use travel_core::domains::payments::{CheckoutLinkBuilder, CheckoutRequest};
use travel_core::kernel::StripeAdapter;

#[derive(Parser)]
#[command(name = "create_payment_link")]
#[command(about = "Create a Stripe payment link for a trip")]
struct Cli {
    /// Product name shown on the checkout page
    #[arg(long)]
    name: String,

    /// Product description
    #[arg(long, default_value = "")]
    description: String,

    /// Image URL (repeatable)
    #[arg(long = "image")]
    images: Vec<String>,

    /// Price in dollars, e.g. 19.99
    #[arg(long)]
    price: Decimal,

    /// Trip id, stored as metadata and used in the success redirect
    #[arg(long)]
    trip_id: String,

    /// Print the full payment link as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,travel_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    let commerce = Arc::new(StripeAdapter::new(Arc::new(config.stripe_client())));
    let builder = CheckoutLinkBuilder::new(commerce, config.checkout_config()?);

    let request = CheckoutRequest::new(
        cli.name,
        cli.description,
        cli.images,
        cli.price,
        cli.trip_id,
    );

    let link = builder
        .create_checkout_link(&request)
        .await
        .context("Failed to create payment link")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&link)?);
    } else {
        println!("{}", link.url);
    }

    Ok(())
}
