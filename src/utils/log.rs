// src/utils/log.rs

//! Log output for the command-line tool.
//!
//! The library emits records through the `log` macros (`trace!`, `debug!`,
//! `info!`, `warn!`, `error!`) and leaves the choice of backend to the
//! application. The binary routes them into a `tracing` subscriber that
//! writes to standard error:
//!
//! ```
//! huffman_codec::utils::log::init_subscriber(tracing::Level::DEBUG);
//! log::debug!("codec ready");
//! ```

pub use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Installs a global stderr subscriber that also receives `log` records.
///
/// Only the first call takes effect; later calls leave the installed
/// subscriber in place.
pub fn init_subscriber(max_level: Level) {
    let result = FmtSubscriber::builder()
        .with_max_level(max_level)
        .with_target(false) // Don't print the module path
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(err) = result {
        log::debug!("subscriber already installed: {}", err);
    }
}
