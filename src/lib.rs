#![doc(test(attr(deny(warnings))))]

//! Listing Core implements the advertisement submission wizard of a
//! real-estate marketplace: field accumulation, per-step validation gates,
//! step sequencing, preview projection, and the final submission flow.

pub mod cli;
pub mod config;
pub mod errors;
pub mod format;
pub mod preview;
pub mod submit;
pub mod utils;
pub mod wizard;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Listing Core tracing initialized.");
    });
}
