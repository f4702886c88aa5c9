// Adapters from concrete clients to kernel traits

use std::sync::Arc;

use async_trait::async_trait;
use stripe_client::{
    CreatePaymentLink, CreatePrice, CreateProduct, PaymentLink, Price, Product, StripeClient,
};

use super::traits::BaseCommerceService;

// =============================================================================
// Stripe Adapter
// =============================================================================

/// Wrapper to implement BaseCommerceService for the Stripe REST client
#[derive(Debug, Clone)]
pub struct StripeAdapter(pub Arc<StripeClient>);

impl StripeAdapter {
    pub fn new(client: Arc<StripeClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseCommerceService for StripeAdapter {
    async fn create_product(&self, request: &CreateProduct) -> stripe_client::Result<Product> {
        self.0.create_product(request).await
    }

    async fn create_price(&self, request: &CreatePrice) -> stripe_client::Result<Price> {
        self.0.create_price(request).await
    }

    async fn create_payment_link(
        &self,
        request: &CreatePaymentLink,
    ) -> stripe_client::Result<PaymentLink> {
        self.0.create_payment_link(request).await
    }
}
