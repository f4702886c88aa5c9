use rust_decimal::Decimal;
use stripe_client::StripeError;
use thiserror::Error;

/// Errors from building a checkout link.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout configuration is unusable (e.g. base URL not absolute)
    #[error("checkout config error: {0}")]
    Config(String),

    /// Price rejected locally, before any remote call
    #[error("invalid price {price}: {reason}")]
    InvalidPrice { price: Decimal, reason: String },

    /// One of the remote commerce calls failed; passed through unchanged
    #[error("remote commerce service error: {0}")]
    RemoteService(#[from] StripeError),
}

pub type Result<T> = std::result::Result<T, CheckoutError>;
