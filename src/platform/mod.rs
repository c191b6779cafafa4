//! # Platform
//!
//! Host OS identity, process environment and interpreter facts.

pub mod env;
pub mod os;
pub mod python;

pub use env::Environment;
pub use os::HostOs;
pub use python::PythonVersion;
