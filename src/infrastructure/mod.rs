//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module resolves user-facing paths from configuration: tilde
//! expansion and the default data directory where log files live.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
