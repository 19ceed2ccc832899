// src/logging.rs
use env_logger::{Builder, Env};

const DEFAULT_FILTER: &str = "warn";

/// Installs the stderr logger. `RUST_LOG` overrides the default `warn` filter.
///
/// Calling it more than once is harmless; later calls keep the first logger.
pub fn init() {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    builder.format_timestamp(None);
    if builder.try_init().is_err() {
        log::debug!("logger already initialised");
    }
}
