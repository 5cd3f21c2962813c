// src/config/builder.rs

use super::{default_public_url, ServerConfig};
use crate::cli::Cli;
use crate::errors::{Error, Result};
use std::path::PathBuf;
use url::Url;

/// A builder for creating a `ServerConfig` programmatically.
///
/// Unset fields take the defaults of [`ServerConfig::default`]. When no
/// public URL is given it is derived from the final host and port.
///
/// # Example
///
/// ```
/// use mock_server::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .host("127.0.0.1")
///     .port(8080)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.public_url, "http://127.0.0.1:8080");
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    host: Option<String>,
    port: Option<u16>,
    assets_dir: Option<PathBuf>,
    public_url: Option<String>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a builder from parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        let mut builder = Self::new()
            .host(cli.host)
            .port(cli.port)
            .assets_dir(cli.assets_dir);
        if let Some(url) = cli.public_url {
            builder = builder.public_url(url);
        }
        builder
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = Some(dir.into());
        self
    }

    pub fn public_url(mut self, url: impl Into<String>) -> Self {
        self.public_url = Some(url.into());
        self
    }

    /// Validates the settings and produces the final configuration.
    ///
    /// # Errors
    /// Returns [`Error::Config`] for an empty host or a public URL that is not
    /// an absolute `http`/`https` URL.
    pub fn build(self) -> Result<ServerConfig> {
        let defaults = ServerConfig::default();

        let host = self.host.unwrap_or(defaults.host);
        let host = host.trim().to_string();
        if host.is_empty() {
            return Err(Error::Config("host must not be empty".to_string()));
        }

        let port = self.port.unwrap_or(defaults.port);

        let public_url = match self.public_url {
            Some(url) => validate_public_url(&url)?,
            None => default_public_url(&host, port),
        };

        let config = ServerConfig {
            host,
            port,
            assets_dir: self.assets_dir.unwrap_or(defaults.assets_dir),
            public_url,
        };
        log::debug!("Built server configuration: {:?}", config);
        Ok(config)
    }
}

impl TryFrom<Cli> for ServerConfig {
    type Error = Error;

    fn try_from(cli: Cli) -> Result<Self> {
        ConfigBuilder::from_cli(cli).build()
    }
}

fn validate_public_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed)
        .map_err(|e| Error::Config(format!("Invalid public URL '{}': {}", raw, e)))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::Config(format!(
            "Public URL '{}' must use http or https",
            raw
        )));
    }
    Ok(trimmed.to_string())
}
