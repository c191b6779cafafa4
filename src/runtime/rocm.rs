//! Prebuilt ROCm wheel location

use std::path::{Path, PathBuf};

use crate::config::{ROCM_WHEEL_BASE_URL, ROCM_WHEEL_PLATFORM};

/// Where the ROCm wheel is fetched from and downloaded to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RocmWheel {
	pub file_name: String,
	pub url: String,
	pub path: PathBuf,
}

impl RocmWheel {
	pub fn new(version: &str, abi_tag: &str, download_dir: &Path) -> Self {
		let file_name = format!(
			"onnxruntime_rocm-{}-{}-{}-{}.whl",
			version, abi_tag, abi_tag, ROCM_WHEEL_PLATFORM
		);
		let url = format!("{}{}", ROCM_WHEEL_BASE_URL, file_name);
		let path = download_dir.join(&file_name);

		Self { file_name, url, path }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn wheel_name_and_url() {
		let wheel = RocmWheel::new("1.18.0", "cp310", Path::new("/tmp"));
		assert_eq!(wheel.file_name, "onnxruntime_rocm-1.18.0-cp310-cp310-linux_x86_64.whl");
		assert_eq!(
			wheel.url,
			"https://repo.radeon.com/rocm/manylinux/rocm-rel-6.2/onnxruntime_rocm-1.18.0-cp310-cp310-linux_x86_64.whl"
		);
		assert_eq!(wheel.path, Path::new("/tmp").join(&wheel.file_name));
	}
}
