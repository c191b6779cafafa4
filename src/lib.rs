//! # FaceFusion Installer Library
//!
//! Picks the ONNX runtime variant for the host OS, drives pip to install it
//! and prepares CUDA library search paths.

pub mod cli;
pub mod config;
pub mod installer;
pub mod library_path;
pub mod package;
pub mod platform;
pub mod runtime;
pub mod ui;
pub mod wording;
