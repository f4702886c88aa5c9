// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "build a checkout link for a trip") lives in domain
// actions that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseCommerceService)

use async_trait::async_trait;
use stripe_client::{CreatePaymentLink, CreatePrice, CreateProduct, PaymentLink, Price, Product};

use super::diagnostics::DiagnosticEvent;

// =============================================================================
// Commerce Service Trait (Infrastructure - catalog, prices, payment links)
// =============================================================================

/// Remote commerce backend. Every call creates state on the remote side.
///
/// Errors are passed through as `StripeError` so callers can tell API
/// rejections apart from network failures.
#[async_trait]
pub trait BaseCommerceService: Send + Sync {
    /// Create a catalog item (returns the product with its id)
    async fn create_product(&self, request: &CreateProduct) -> stripe_client::Result<Product>;

    /// Create a price for an existing catalog item
    async fn create_price(&self, request: &CreatePrice) -> stripe_client::Result<Price>;

    /// Create a hosted checkout link for a price
    async fn create_payment_link(
        &self,
        request: &CreatePaymentLink,
    ) -> stripe_client::Result<PaymentLink>;
}

// =============================================================================
// Diagnostics Trait (Infrastructure - non-fatal warnings)
// =============================================================================

/// Sink for recoverable problems (JSON misses, parse failures, type mismatches).
///
/// Utilities report here instead of failing; the production sink writes to
/// `tracing`, tests use `RecordingDiagnostics` to assert on what was emitted.
pub trait BaseDiagnostics: Send + Sync {
    fn emit(&self, event: DiagnosticEvent);
}
