//! tokd command-line driver library.
//!
//! The binary in `main.rs` only dispatches on the command name; option
//! parsing and the command bodies live here so they can be tested.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the `tracing` subscriber, once, and only when `RUST_LOG` is set.
///
/// `RUST_LOG=tokd_train=debug tokd train corpus.txt` shows each iteration's
/// proposals, culls and namings.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}
