// src/main.rs

use anyhow::Result;
use clap::Parser;
use mock_server::cli::Cli;
use mock_server::web;
use mock_server::ServerConfig;
use std::any::Any;

fn main() -> Result<()> {
    // Initialize logging. RUST_LOG overrides the crate default.
    let default_directive = if cfg!(debug_assertions) {
        "mock_server=debug"
    } else {
        "mock_server=info"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_directive.parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    log::info!("Starting mock-server v{}...", env!("CARGO_PKG_VERSION"));

    // Panic hook that keeps build paths out of the message
    std::panic::set_hook(Box::new(|info| {
        let msg = panic_message(info.payload());
        eprintln!(
            "Application Error: {}",
            msg.replace(env!("CARGO_MANIFEST_DIR"), "<redacted>")
        );
    }));

    let cli = Cli::parse();
    let config = ServerConfig::try_from(cli)?;
    log::debug!("Configuration built successfully.");

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(web::start_server(config))?;
    Ok(())
}

/// Extracts the text of a panic payload; `panic!` with format args yields a `String`.
fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "Box<Any>"
    }
}
