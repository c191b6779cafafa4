//! Shared-library search path assembly for the CUDA runtime
//!
//! The CUDA build of ONNX Runtime loads cuDNN, cuBLAS, the CUDA runtime and
//! TensorRT at session creation; they ship inside the conda environment and
//! must be reachable through LD_LIBRARY_PATH (Linux) or PATH (Windows).

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{CUDA_REQUIRED_LIBS, TENSORRT_LIBS_DIR};
use crate::platform::PythonVersion;
use crate::ui;

/// Variable holding the dynamic library search path on Linux
pub const LINUX_VAR: &str = "LD_LIBRARY_PATH";
/// Variable holding the dynamic library search path on Windows
pub const WINDOWS_VAR: &str = "PATH";

/// Environment library directories to add on Linux.
///
/// The TensorRT directory lives under the interpreter's site-packages, so it
/// is only added when the interpreter version is known.
pub fn linux_candidates(root: &Path, python: Option<PythonVersion>) -> Vec<PathBuf> {
	let lib = root.join("lib");
	let mut candidates = vec![lib.clone()];
	if let Some(python) = python {
		candidates.push(
			lib.join(python.lib_dir_name())
				.join("site-packages")
				.join(TENSORRT_LIBS_DIR),
		);
	}
	candidates
}

/// Environment library directories to add on Windows
pub fn windows_candidates(root: &Path) -> Vec<PathBuf> {
	let lib = root.join("Lib");
	vec![lib.clone(), lib.join("site-packages").join(TENSORRT_LIBS_DIR)]
}

/// Existing entries followed by `extra`, keeping only directories present on disk.
pub fn assemble(existing: Option<&str>, separator: char, extra: Vec<PathBuf>) -> Vec<PathBuf> {
	existing
		.map(|value| {
			value
				.split(separator)
				.filter(|entry| !entry.is_empty())
				.map(PathBuf::from)
				.collect::<Vec<_>>()
		})
		.unwrap_or_default()
		.into_iter()
		.chain(extra)
		.filter(|path| {
			let exists = path.exists();
			if !exists {
				ui::debug(&format!("Dropping missing library path: {}", path.display()));
			}
			exists
		})
		.collect()
}

pub fn join(paths: &[PathBuf], separator: char) -> String {
	paths
		.iter()
		.map(|path| path.to_string_lossy())
		.collect::<Vec<_>>()
		.join(&separator.to_string())
}

/// Required CUDA libraries found directly inside `dir`
pub fn required_libs_in(dir: &Path) -> Vec<String> {
	let Ok(entries) = fs::read_dir(dir) else {
		return Vec::new();
	};

	let mut found: Vec<String> = entries
		.filter_map(|entry| entry.ok())
		.filter_map(|entry| entry.file_name().to_str().map(str::to_string))
		.filter(|name| CUDA_REQUIRED_LIBS.iter().any(|lib| name.contains(lib)))
		.collect();
	found.sort();
	found
}

/// Debug listing of each search path entry and the CUDA libraries it provides
pub fn log_required_libs(paths: &[PathBuf]) {
	if !ui::Log::is_verbose() {
		return;
	}

	ui::debug("Found library paths:");
	for path in paths {
		let libs = required_libs_in(path);
		if libs.is_empty() {
			ui::debug(&format!("  {}", path.display()));
		} else {
			ui::debug(&format!("  {} [{}]", path.display(), libs.join(", ")));
		}
	}
}
