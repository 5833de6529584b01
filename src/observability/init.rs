//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::infrastructure::{expand_tilde, get_data_dir};
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber.
///
/// # Trace Level Resolution
///
/// 1. `RUST_LOG` if set and valid
/// 2. `config.trace_level`
///
/// # Output
///
/// Events go to stderr, or to `config.log_file` (rotated at 10 MB) when one
/// is set. A leading `~` is expanded and relative paths are placed in the data
/// directory. If the log file's directory cannot be created, stderr is used
/// instead.
///
/// Idempotent: only the first call in a process installs a subscriber.
///
/// # Example
///
/// ```rust
/// use tour_carousel::observability::init_tracing;
/// use tour_carousel::Config;
///
/// let config = Config {
///     trace_level: "debug".to_string(),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.trace_level));
    let registry = tracing_subscriber::registry().with(filter);

    let log_file = config.log_file.as_deref().map(|path| {
        let path = expand_tilde(path);
        if path.is_relative() {
            get_data_dir().join(path)
        } else {
            path
        }
    });
    if let Some(path) = log_file {
        let dir_ready = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map_or(true, |dir| std::fs::create_dir_all(dir).is_ok());
        if dir_ready {
            let layer = fmt::layer().with_ansi(false).with_writer(FileWriter::new(path));
            let _ = registry.with(layer).try_init();
            return;
        }
    }

    let _ = registry.with(fmt::layer().with_writer(std::io::stderr)).try_init();
}
