//! # ONNX Runtime
//!
//! Runtime variant selection and wheel locations.

pub mod rocm;
pub mod table;

pub use rocm::RocmWheel;
pub use table::{OnnxRuntime, RuntimeTable};
