//! Structured logging through `tracing`.
//!
//! Every state transition runs inside a `handle_event` span and the content
//! layer logs each CMS round-trip, so a log at `debug` replays a whole
//! session.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in the config file
//! 3. Default: `"info"`
//!
//! Output goes to stderr unless `log_file` is set, in which case a rotating
//! file is used (10 MB per file, 3 backups).
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer

pub mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
