//! ONNX runtime variants available per operating system

use std::collections::BTreeMap;
use std::fmt;

use crate::platform::HostOs;

pub const DEFAULT: &str = "default";
pub const CUDA: &str = "cuda";
pub const OPENVINO: &str = "openvino";
pub const ROCM: &str = "rocm";
pub const DIRECTML: &str = "directml";

/// A pip package pinned to an exact version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnnxRuntime {
	pub name: &'static str,
	pub version: &'static str,
}

impl OnnxRuntime {
	const fn new(name: &'static str, version: &'static str) -> Self {
		Self { name, version }
	}

	/// Requirement string with an equality pin, e.g. `onnxruntime-gpu==1.19.2`
	pub fn requirement(&self) -> String {
		format!("{}=={}", self.name, self.version)
	}

	/// Plain string comparison, matching how the version threshold was always checked.
	pub fn version_below(&self, threshold: &str) -> bool {
		self.version < threshold
	}
}

impl fmt::Display for OnnxRuntime {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.name, self.version)
	}
}

/// Selector key to runtime package, built once from the host OS
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeTable {
	entries: BTreeMap<&'static str, OnnxRuntime>,
}

impl RuntimeTable {
	pub fn resolve(os: HostOs) -> Self {
		let mut entries = BTreeMap::new();

		entries.insert(DEFAULT, OnnxRuntime::new("onnxruntime", "1.19.2"));

		if !os.is_macos() {
			entries.insert(CUDA, OnnxRuntime::new("onnxruntime-gpu", "1.19.2"));
			entries.insert(OPENVINO, OnnxRuntime::new("onnxruntime-openvino", "1.19.0"));
		}
		if os.is_linux() {
			entries.insert(ROCM, OnnxRuntime::new("onnxruntime-rocm", "1.18.0"));
		}
		if os.is_windows() {
			entries.insert(DIRECTML, OnnxRuntime::new("onnxruntime-directml", "1.17.3"));
		}

		Self { entries }
	}

	pub fn get(&self, key: &str) -> Option<&OnnxRuntime> {
		self.entries.get(key)
	}

	pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.entries.keys().copied()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn keys(os: HostOs) -> Vec<&'static str> {
		RuntimeTable::resolve(os).keys().collect()
	}

	#[test]
	fn keys_per_os() {
		assert_eq!(keys(HostOs::MacOs), vec![DEFAULT]);
		assert_eq!(keys(HostOs::Linux), vec![CUDA, DEFAULT, OPENVINO, ROCM]);
		assert_eq!(keys(HostOs::Windows), vec![CUDA, DEFAULT, DIRECTML, OPENVINO]);
		assert_eq!(keys(HostOs::Other), vec![CUDA, DEFAULT, OPENVINO]);
	}

	#[test]
	fn version_threshold_is_lexicographic() {
		let table = RuntimeTable::resolve(HostOs::Windows);
		assert!(table.get(DIRECTML).unwrap().version_below("1.19.0"));
		assert!(!table.get(OPENVINO).unwrap().version_below("1.19.0"));
		assert!(!table.get(CUDA).unwrap().version_below("1.19.0"));
	}

	#[test]
	fn requirement_pins_exact_version() {
		let table = RuntimeTable::resolve(HostOs::Linux);
		assert_eq!(table.get(OPENVINO).unwrap().requirement(), "onnxruntime-openvino==1.19.0");
	}
}
