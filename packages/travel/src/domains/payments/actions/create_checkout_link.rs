//! Create checkout link action

use std::collections::BTreeMap;
use std::sync::Arc;

use stripe_client::{AfterCompletion, CreatePaymentLink, CreatePrice, CreateProduct, LineItem};
use tracing::{error, info, instrument};

use crate::domains::payments::error::Result;
use crate::domains::payments::models::{
    to_minor_units, CheckoutConfig, CheckoutLink, CheckoutRequest,
};
use crate::kernel::BaseCommerceService;

/// All checkout links are priced in US dollars.
pub const CURRENCY: &str = "usd";

/// Metadata key the trip id is stored under on the payment link.
pub const TRIP_ID_METADATA_KEY: &str = "tripId";

/// Builds hosted checkout links for trips.
///
/// Each call makes three dependent remote calls in order: product, price,
/// payment link. A failure at any step aborts the rest and is returned as
/// `CheckoutError::RemoteService`. Records created by earlier steps are left
/// in place on the remote side; nothing is rolled back.
#[derive(Clone)]
pub struct CheckoutLinkBuilder {
    commerce: Arc<dyn BaseCommerceService>,
    config: CheckoutConfig,
}

impl CheckoutLinkBuilder {
    pub fn new(commerce: Arc<dyn BaseCommerceService>, config: CheckoutConfig) -> Self {
        Self { commerce, config }
    }

    #[instrument(skip(self, request), fields(trip_id = %request.trip_id))]
    pub async fn create_checkout_link(&self, request: &CheckoutRequest) -> Result<CheckoutLink> {
        // Validate locally so a bad price never creates a stray product
        let unit_amount = to_minor_units(request.price)?;

        // 1. Catalog item
        let product = self
            .commerce
            .create_product(&CreateProduct {
                name: request.name.clone(),
                description: Some(request.description.clone()),
                images: request.images.clone(),
            })
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to create product");
                e
            })?;

        // 2. Price for it
        let price = self
            .commerce
            .create_price(&CreatePrice {
                product: product.id.clone(),
                unit_amount,
                currency: CURRENCY.to_string(),
            })
            .await
            .map_err(|e| {
                error!(error = %e, product_id = %product.id, "Failed to create price");
                e
            })?;

        // 3. Hosted link that redirects back to the trip
        let mut metadata = BTreeMap::new();
        metadata.insert(TRIP_ID_METADATA_KEY.to_string(), request.trip_id.clone());

        let link = self
            .commerce
            .create_payment_link(&CreatePaymentLink {
                line_items: vec![LineItem {
                    price: price.id.clone(),
                    quantity: 1,
                }],
                metadata,
                after_completion: Some(AfterCompletion::Redirect {
                    url: self.config.success_url(&request.trip_id),
                }),
            })
            .await
            .map_err(|e| {
                error!(error = %e, price_id = %price.id, "Failed to create payment link");
                e
            })?;

        info!(
            product_id = %product.id,
            price_id = %price.id,
            payment_link_id = %link.id,
            unit_amount,
            "Checkout link created"
        );

        Ok(link)
    }
}
