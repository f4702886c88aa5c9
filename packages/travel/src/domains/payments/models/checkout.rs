use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domains::payments::error::{CheckoutError, Result};

/// The hosted payment page returned by the commerce service, passed through as-is.
pub type CheckoutLink = stripe_client::PaymentLink;

/// Everything needed to sell one trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    /// Major currency units (dollars)
    pub price: Decimal,
    pub trip_id: String,
}

impl CheckoutRequest {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        images: Vec<String>,
        price: Decimal,
        trip_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            images,
            price,
            trip_id: trip_id.into(),
        }
    }
}

/// Settings the checkout builder needs up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutConfig {
    base_url: String,
}

impl CheckoutConfig {
    /// `base_url` must be an absolute http(s) URL; a trailing slash is dropped.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let parsed = Url::parse(base_url.trim())
            .map_err(|e| CheckoutError::Config(format!("invalid base URL {:?}: {}", base_url, e)))?;

        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(CheckoutError::Config(format!(
                "base URL must be an absolute http(s) URL, got {:?}",
                base_url
            )));
        }

        Ok(Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Where the customer lands after paying for `trip_id`.
    pub fn success_url(&self, trip_id: &str) -> String {
        format!("{}/travel/{}/success", self.base_url, trip_id)
    }
}

/// Convert a major-unit price to minor units (cents), rounding half away from zero.
///
/// Done in decimal arithmetic so `19.99` is exactly `1999`.
pub fn to_minor_units(price: Decimal) -> Result<i64> {
    if price <= Decimal::ZERO {
        return Err(CheckoutError::InvalidPrice {
            price,
            reason: "price must be positive".into(),
        });
    }

    let cents = price
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|c| c.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|c| c.to_i64())
        .ok_or_else(|| CheckoutError::InvalidPrice {
            price,
            reason: "amount out of range".into(),
        })?;

    if cents == 0 {
        return Err(CheckoutError::InvalidPrice {
            price,
            reason: "price rounds to zero cents".into(),
        });
    }

    Ok(cents)
}
