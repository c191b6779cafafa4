//! # User Interface
//!
//! Colored, timestamped terminal output.

pub mod log;

pub use log::{debug, error, header, info, print_banner, success, summary, warn, Log};
