//! Host runtimes executing carousel actions.
//!
//! - [`host`]: [`SimulatedHost`], a virtual-clock host used by the demo
//!   binary and the test suite

pub mod host;

pub use host::{HostOptions, SimulatedHost, DEFAULT_FRAME, DEFAULT_SMOOTH_SCROLL, EXECUTED_LOG_CAP};
