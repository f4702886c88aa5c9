// Test doubles for kernel traits
//
// Provides mock services that can be injected in place of the real clients.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use stripe_client::{
    CreatePaymentLink, CreatePrice, CreateProduct, PaymentLink, Price, Product, StripeError,
};

use super::diagnostics::DiagnosticEvent;
use super::traits::{BaseCommerceService, BaseDiagnostics};

// =============================================================================
// Mock Commerce Service
// =============================================================================

/// A call made against the mock commerce service, with its arguments
#[derive(Debug, Clone, PartialEq)]
pub enum CommerceCall {
    CreateProduct(CreateProduct),
    CreatePrice(CreatePrice),
    CreatePaymentLink(CreatePaymentLink),
}

#[derive(Default)]
struct QueuedFailures {
    product: Option<StripeError>,
    price: Option<StripeError>,
    payment_link: Option<StripeError>,
}

/// In-memory commerce backend that records calls and can fail on demand.
///
/// Ids are deterministic: `prod_mock_1`, `price_mock_2`, `plink_mock_3`...
/// numbered by call order across all three endpoints.
#[derive(Default)]
pub struct MockCommerceService {
    calls: Arc<Mutex<Vec<CommerceCall>>>,
    failures: Arc<Mutex<QueuedFailures>>,
}

impl MockCommerceService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the next product creation with `error`
    pub fn with_product_failure(self, error: StripeError) -> Self {
        self.failures.lock().unwrap().product = Some(error);
        self
    }

    /// Fail the next price creation with `error`
    pub fn with_price_failure(self, error: StripeError) -> Self {
        self.failures.lock().unwrap().price = Some(error);
        self
    }

    /// Fail the next payment link creation with `error`
    pub fn with_payment_link_failure(self, error: StripeError) -> Self {
        self.failures.lock().unwrap().payment_link = Some(error);
        self
    }

    /// All calls, in the order they were made
    pub fn calls(&self) -> Vec<CommerceCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn product_calls(&self) -> Vec<CreateProduct> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                CommerceCall::CreateProduct(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    pub fn price_calls(&self) -> Vec<CreatePrice> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                CommerceCall::CreatePrice(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    pub fn payment_link_calls(&self) -> Vec<CreatePaymentLink> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                CommerceCall::CreatePaymentLink(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: CommerceCall) -> usize {
        let mut calls = self.calls.lock().unwrap();
        calls.push(call);
        calls.len()
    }
}

#[async_trait]
impl BaseCommerceService for MockCommerceService {
    async fn create_product(&self, request: &CreateProduct) -> stripe_client::Result<Product> {
        let n = self.record(CommerceCall::CreateProduct(request.clone()));
        if let Some(error) = self.failures.lock().unwrap().product.take() {
            return Err(error);
        }

        Ok(Product {
            id: format!("prod_mock_{}", n),
            name: request.name.clone(),
            description: request.description.clone(),
            images: request.images.clone(),
            active: true,
        })
    }

    async fn create_price(&self, request: &CreatePrice) -> stripe_client::Result<Price> {
        let n = self.record(CommerceCall::CreatePrice(request.clone()));
        if let Some(error) = self.failures.lock().unwrap().price.take() {
            return Err(error);
        }

        Ok(Price {
            id: format!("price_mock_{}", n),
            product: request.product.clone(),
            unit_amount: Some(request.unit_amount),
            currency: request.currency.clone(),
        })
    }

    async fn create_payment_link(
        &self,
        request: &CreatePaymentLink,
    ) -> stripe_client::Result<PaymentLink> {
        let n = self.record(CommerceCall::CreatePaymentLink(request.clone()));
        if let Some(error) = self.failures.lock().unwrap().payment_link.take() {
            return Err(error);
        }

        Ok(PaymentLink {
            id: format!("plink_mock_{}", n),
            url: format!("https://buy.stripe.com/test_mock_{}", n),
            active: true,
            metadata: request.metadata.clone(),
        })
    }
}

// =============================================================================
// Recording Diagnostics
// =============================================================================

/// Captures diagnostic events for assertions
#[derive(Default)]
pub struct RecordingDiagnostics {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl BaseDiagnostics for RecordingDiagnostics {
    fn emit(&self, event: DiagnosticEvent) {
        self.events.lock().unwrap().push(event);
    }
}
