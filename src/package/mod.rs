//! # Package Manager
//!
//! Command construction and execution for pip, curl and conda.

pub mod download;
pub mod pip;
pub mod runner;

pub use download::curl_download;
pub use pip::Pip;
pub use runner::{CommandRunner, DryRunner, Invocation, StepOutcome, SystemRunner};
