//! The paginated product catalog.
//!
//! The catalog is a virtual collection of [`PRODUCT_COUNT`] products that is
//! never materialized. Each call to [`Catalog::page`] synthesizes the records
//! inside the requested window from their index, so nothing is cached and
//! repeated requests for the same window return fresh ids and prices.

use crate::constants::PRODUCT_COUNT;
use crate::id;
use crate::random::RandomSource;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub use request::PageRequest;
mod request;

/// One synthesized product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Fresh random identifier, different on every synthesis.
    pub id: String,
    /// `"Product N"` where N is the 1-based position.
    pub name: String,
    /// Image URL shared by every product.
    pub image: String,
    /// `(N * 10) + jitter` with jitter in `[0, 100)`, rounded to cents.
    pub price: f64,
}

/// The products in one window plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    pub products: Vec<Product>,
    /// Size of the whole collection.
    pub total: usize,
    /// Whether records exist past the end of this window.
    pub has_more: bool,
}

/// Generator for windows over the virtual product collection.
///
/// Holds only immutable data and a shared randomness source, so one instance
/// can serve any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct Catalog {
    size: usize,
    image_url: String,
    rng: Arc<dyn RandomSource>,
}

impl Catalog {
    /// Creates a catalog of [`PRODUCT_COUNT`] products.
    pub fn new(image_url: impl Into<String>, rng: Arc<dyn RandomSource>) -> Self {
        Self {
            size: PRODUCT_COUNT,
            image_url: image_url.into(),
            rng,
        }
    }

    /// Overrides the collection size.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// Synthesizes the window described by `request`.
    ///
    /// The window is clamped to the collection. An offset at or past the end
    /// returns an empty page without any synthesis.
    pub fn page(&self, request: &PageRequest) -> PageResult {
        if request.offset >= self.size {
            tracing::debug!(
                offset = request.offset,
                size = self.size,
                "Offset past the end of the catalog"
            );
            return PageResult {
                products: Vec::new(),
                total: self.size,
                has_more: false,
            };
        }

        let end = request.offset.saturating_add(request.limit).min(self.size);
        let products: Vec<Product> = (request.offset..end)
            .map(|index| self.product_at(index))
            .collect();

        tracing::debug!(
            offset = request.offset,
            limit = request.limit,
            returned = products.len(),
            "Synthesized product page"
        );

        PageResult {
            products,
            total: self.size,
            has_more: end < self.size,
        }
    }

    fn product_at(&self, index: usize) -> Product {
        let position = index + 1;
        let jitter = self.rng.next_f64() * 100.0;
        Product {
            id: id::generate(self.rng.as_ref()),
            name: format!("Product {}", position),
            image: self.image_url.clone(),
            price: round_to_cents(position as f64 * 10.0 + jitter),
        }
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
