//! Defines the `ServerConfig` struct built from the CLI or programmatically.

use crate::constants::{DEFAULT_ASSETS_DIR, DEFAULT_HOST, DEFAULT_PORT, PRODUCT_IMAGE_PATH};
use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;

/// Settings for one server instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host name or address to bind.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory mounted under `/assets/`.
    pub assets_dir: PathBuf,
    /// Base URL prefixed to every generated image link, without a trailing slash.
    pub public_url: String,
}

impl ServerConfig {
    /// `host:port`, as passed to the listener.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The image URL shared by every product.
    pub fn product_image_url(&self) -> String {
        format!("{}{}", self.public_url, PRODUCT_IMAGE_PATH)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            public_url: default_public_url(DEFAULT_HOST, DEFAULT_PORT),
        }
    }
}

fn default_public_url(host: &str, port: u16) -> String {
    format!("http://{}:{}", host, port)
}
