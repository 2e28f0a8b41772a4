//! Tracing subscribers for the rebalance-sim binary.
//!
//! Both subscribers write to stderr so stdout only carries the simulation reports.
//! Verbosity is controlled by `RUST_LOG` (eg: `RUST_LOG=rebalance_sim=debug`).
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry};

const SERVICE_NAME: &str = "rebalance-sim";

/// Human readable logs
pub fn initialize_fmt_subscriber() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Bunyan formatted json logs, one object per line
pub fn initialize_json_subscriber() {
    let formatting_layer = BunyanFormattingLayer::new(SERVICE_NAME.to_string(), std::io::stderr);

    Registry::default()
        .with(EnvFilter::from_default_env())
        .with(JsonStorageLayer)
        .with(formatting_layer)
        .init();
}
