// src/cli.rs

use crate::constants::{DEFAULT_ASSETS_DIR, DEFAULT_HOST, DEFAULT_PORT};
use clap::Parser;

/// A local mock backend for client development.
///
/// Serves banners, paginated product fixtures and stub login/profile/logout
/// endpoints wrapped in a `{ code, message, data }` envelope, plus a static
/// mount of image assets under `/assets/`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Host name or address to bind.
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on.
    #[arg(short = 'p', long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Directory served under /assets/.
    #[arg(short = 'a', long, value_name = "DIR", default_value = DEFAULT_ASSETS_DIR)]
    pub assets_dir: String,

    /// Base URL used when building image links (defaults to http://HOST:PORT).
    #[arg(long, value_name = "URL")]
    pub public_url: Option<String>,
}
