// src/logging.rs

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// Safe to call more than once; only the first call installs the logger.
/// `RUST_LOG` overrides the defaults below.
pub fn init_logger() {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        builder
            .filter_level(log::LevelFilter::Info)
            .filter_module("kmdb", log::LevelFilter::Debug)
            .filter_module("hyper", log::LevelFilter::Warn)
            .filter_module("tower", log::LevelFilter::Warn)
            .filter_module("r2d2", log::LevelFilter::Warn)
            .format_timestamp_secs()
            .format_module_path(false);

        if let Ok(spec) = std::env::var("RUST_LOG") {
            builder.parse_filters(&spec);
        }

        // A test harness may already have installed a logger
        if builder.try_init().is_ok() {
            log::info!("Logging system initialized");
        }
    });
}
