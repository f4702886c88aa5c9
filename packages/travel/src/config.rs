use std::env;
use std::fmt;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use secrecy::{ExposeSecret, SecretString};
use stripe_client::StripeClient;

use crate::domains::payments::CheckoutConfig;

/// Application configuration loaded from environment variables
pub struct Config {
    stripe_secret_key: SecretString,
    pub base_url: String,
}

impl Clone for Config {
    fn clone(&self) -> Self {
        Self {
            stripe_secret_key: SecretString::new(Box::from(self.stripe_secret_key.expose_secret())),
            base_url: self.base_url.clone(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("stripe_secret_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// `STRIPE_SECRET_KEY` is required; there is no placeholder fallback.
    /// The redirect base comes from `BASE_URL`, or `VITE_BASE_URL` for
    /// deployments that share the frontend's env file.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let stripe_secret_key =
            env::var("STRIPE_SECRET_KEY").context("STRIPE_SECRET_KEY must be set")?;
        let base_url = resolve_base_url(
            env::var("BASE_URL").ok(),
            env::var("VITE_BASE_URL").ok(),
        )
        .context("BASE_URL (or VITE_BASE_URL) must be set")?;

        Self::new(stripe_secret_key, base_url)
    }

    /// Build and validate a configuration from explicit values
    pub fn new(stripe_secret_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let stripe_secret_key = stripe_secret_key.into();
        if stripe_secret_key.trim().is_empty() {
            anyhow::bail!("STRIPE_SECRET_KEY must not be empty");
        }

        let checkout = CheckoutConfig::new(base_url).context("BASE_URL is not usable")?;

        Ok(Self {
            stripe_secret_key: SecretString::new(Box::from(stripe_secret_key.as_str())),
            base_url: checkout.base_url().to_string(),
        })
    }

    pub fn checkout_config(&self) -> Result<CheckoutConfig> {
        CheckoutConfig::new(self.base_url.clone()).context("BASE_URL is not usable")
    }

    pub fn stripe_client(&self) -> StripeClient {
        StripeClient::new(self.stripe_secret_key.expose_secret())
    }
}

/// First non-blank value of `BASE_URL`, then `VITE_BASE_URL`
fn resolve_base_url(primary: Option<String>, fallback: Option<String>) -> Option<String> {
    primary
        .filter(|value| !value.trim().is_empty())
        .or_else(|| fallback.filter(|value| !value.trim().is_empty()))
}
