//! Pure Stripe REST API client.
//!
//! A minimal client for the parts of the Stripe API needed to sell a single
//! item through a hosted page: products, prices and payment links.
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_client::{CreatePrice, CreateProduct, StripeClient};
//!
//! let client = StripeClient::new(std::env::var("STRIPE_SECRET_KEY")?);
//!
//! let product = client.create_product(&CreateProduct::new("Kyoto in Autumn")).await?;
//! let price = client
//!     .create_price(&CreatePrice {
//!         product: product.id,
//!         unit_amount: 1999,
//!         currency: "usd".into(),
//!     })
//!     .await?;
//! ```

pub mod error;
pub mod types;

pub use error::{Result, StripeError};
pub use types::{
    AfterCompletion, CreatePaymentLink, CreatePrice, CreateProduct, FormParams, LineItem,
    PaymentLink, Price, Product,
};

use std::fmt;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretBox};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

const BASE_URL: &str = "https://api.stripe.com/v1";

/// Pinned API version; response shapes in [`types`] follow it.
pub const API_VERSION: &str = "2022-11-15";

/// Secret API key that never shows up in `Debug` output.
struct SecretKey(SecretBox<str>);

impl SecretKey {
    fn new(value: impl Into<String>) -> Self {
        Self(SecretBox::new(Box::from(value.into().as_str())))
    }

    fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for SecretKey {
    fn clone(&self) -> Self {
        Self::new(self.expose())
    }
}

/// Pure Stripe API client.
#[derive(Clone)]
pub struct StripeClient {
    http_client: Client,
    secret_key: SecretKey,
    base_url: String,
}

impl fmt::Debug for StripeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StripeClient")
            .field("secret_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl StripeClient {
    /// Create a new Stripe client with the given secret key.
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            secret_key: SecretKey::new(secret_key),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Set a custom base URL (for stripe-mock, proxies, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a catalog product.
    pub async fn create_product(&self, request: &CreateProduct) -> Result<Product> {
        let product: Product = self.post_form("products", &request.to_form()).await?;
        debug!(product_id = %product.id, "Created Stripe product");
        Ok(product)
    }

    /// Create a one-off price for an existing product.
    pub async fn create_price(&self, request: &CreatePrice) -> Result<Price> {
        let price: Price = self.post_form("prices", &request.to_form()).await?;
        debug!(price_id = %price.id, product_id = %price.product, "Created Stripe price");
        Ok(price)
    }

    /// Create a hosted payment link.
    pub async fn create_payment_link(&self, request: &CreatePaymentLink) -> Result<PaymentLink> {
        let link: PaymentLink = self.post_form("payment_links", &request.to_form()).await?;
        debug!(payment_link_id = %link.id, "Created Stripe payment link");
        Ok(link)
    }

    async fn post_form<T: DeserializeOwned>(&self, path: &str, form: &FormParams) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);

        let resp = self
            .http_client
            .post(&url)
            .bearer_auth(self.secret_key.expose())
            .header("Stripe-Version", API_VERSION)
            .form(form)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "Stripe request failed");
            return Err(StripeError::from_response(status.as_u16(), &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| StripeError::Parse(format!("{} (path: {})", e, path)))
    }
}
