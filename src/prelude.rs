//! The `mock_server` prelude for convenient library usage.
//!
//! # Example
//!
//! ```
//! use mock_server::prelude::*;
//! # fn main() -> Result<()> {
//!
//! let config = ConfigBuilder::new().port(4000).build()?;
//! let state = AppState::new(&config, std::sync::Arc::new(SeededRandom::new(7)));
//! let _router = create_router_with_state(&config, state);
//!
//! # Ok(())
//! # }
//! ```

pub use crate::catalog::{Catalog, PageRequest, PageResult, Product};
pub use crate::config::{ConfigBuilder, ServerConfig};
pub use crate::envelope::Envelope;
pub use crate::errors::{ApiError, Error, Result};
pub use crate::fixtures::{Banner, LoginData, UserProfile};
pub use crate::random::{RandomSource, SeededRandom, ThreadRandom};
pub use crate::web::{
    create_router, create_router_with_config, create_router_with_state, start_server, AppState,
};
