//! `mock-server` is a local stand-in for a real backend during client
//! development.
//!
//! It answers a fixed set of routes with fixture data wrapped in a uniform
//! `{ code, message, data }` envelope:
//!
//! | Route           | Method     | Data                                         |
//! |-----------------|------------|----------------------------------------------|
//! | `/`             | GET        | `{ status, timestamp }`                      |
//! | `/get-banners`  | POST       | five banners                                 |
//! | `/get-products` | POST       | a window over a virtual product collection   |
//! | `/login`        | POST       | `{ token, user }` for the demo credentials   |
//! | `/logout`       | POST       | `null`                                       |
//! | `/profile`      | GET / POST | the demo user, if `Authorization` is present |
//!
//! Files under the assets directory are served below `/assets/`.
//!
//! The only part with real logic is the product [`catalog`]: `(offset, limit)`
//! input is coerced and clamped into a [`PageRequest`], and every record in the
//! resulting window is synthesized on the spot with a fresh identifier and a
//! jittered price.
//!
//! # Example: Library Usage
//!
//! ```
//! use mock_server::{Catalog, PageRequest, SeededRandom};
//! use std::sync::Arc;
//!
//! let catalog = Catalog::new(
//!     "http://localhost:3000/assets/images/products/product.jpg",
//!     Arc::new(SeededRandom::new(1)),
//! );
//!
//! let page = catalog.page(&PageRequest::new(100, 20));
//! assert_eq!(page.products.len(), 2);
//! assert_eq!(page.products[0].name, "Product 101");
//! assert_eq!(page.total, 102);
//! assert!(!page.has_more);
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod envelope;
pub mod errors;
pub mod fixtures;
pub mod id;
pub mod prelude;
pub mod random;
pub mod signal;
pub mod web;

// Re-export key public types for easier use as a library
pub use catalog::{Catalog, PageRequest, PageResult, Product};
pub use config::{ConfigBuilder, ServerConfig};
pub use envelope::Envelope;
pub use errors::{ApiError, Error, Result};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
