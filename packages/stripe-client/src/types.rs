use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Stripe takes `application/x-www-form-urlencoded` bodies with bracketed
/// keys for nested values (`line_items[0][price]`).
pub type FormParams = Vec<(String, String)>;

// =============================================================================
// Requests
// =============================================================================

/// Parameters for `POST /v1/products`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateProduct {
    pub name: String,
    pub description: Option<String>,
    pub images: Vec<String>,
}

impl CreateProduct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn to_form(&self) -> FormParams {
        let mut form = vec![("name".to_string(), self.name.clone())];
        // Stripe rejects an empty description, so omit it instead
        if let Some(description) = self.description.as_ref().filter(|d| !d.is_empty()) {
            form.push(("description".to_string(), description.clone()));
        }
        for (i, image) in self.images.iter().enumerate() {
            form.push((format!("images[{}]", i), image.clone()));
        }
        form
    }
}

/// Parameters for `POST /v1/prices`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePrice {
    pub product: String,
    /// Amount in the currency's minor unit (cents for USD)
    pub unit_amount: i64,
    pub currency: String,
}

impl CreatePrice {
    pub fn to_form(&self) -> FormParams {
        vec![
            ("product".to_string(), self.product.clone()),
            ("unit_amount".to_string(), self.unit_amount.to_string()),
            ("currency".to_string(), self.currency.clone()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub price: String,
    pub quantity: u32,
}

/// What the customer sees after paying.
#[derive(Debug, Clone, PartialEq)]
pub enum AfterCompletion {
    Redirect { url: String },
}

/// Parameters for `POST /v1/payment_links`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreatePaymentLink {
    pub line_items: Vec<LineItem>,
    pub metadata: BTreeMap<String, String>,
    pub after_completion: Option<AfterCompletion>,
}

impl CreatePaymentLink {
    pub fn to_form(&self) -> FormParams {
        let mut form = FormParams::new();
        for (i, item) in self.line_items.iter().enumerate() {
            form.push((format!("line_items[{}][price]", i), item.price.clone()));
            form.push((
                format!("line_items[{}][quantity]", i),
                item.quantity.to_string(),
            ));
        }
        for (key, value) in &self.metadata {
            form.push((format!("metadata[{}]", key), value.clone()));
        }
        if let Some(AfterCompletion::Redirect { url }) = &self.after_completion {
            form.push(("after_completion[type]".to_string(), "redirect".to_string()));
            form.push(("after_completion[redirect][url]".to_string(), url.clone()));
        }
        form
    }
}

// =============================================================================
// Responses
// =============================================================================

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub active: bool,
}

/// A price attached to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub id: String,
    pub product: String,
    pub unit_amount: Option<i64>,
    pub currency: String,
}

/// A hosted payment page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentLink {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}
