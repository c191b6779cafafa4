//! Application configuration and constants

use std::path::PathBuf;

// === Package Manager ===
pub const REQUIREMENTS_FILE: &str = "requirements.txt";
pub const BASE_RUNTIME_PACKAGE: &str = "onnxruntime";

// === NumPy Pin ===
// Runtimes pinned below this version were built against the NumPy 1.x ABI.
pub const NUMPY_THRESHOLD_VERSION: &str = "1.19.0";
pub const NUMPY_PACKAGE: &str = "numpy";
pub const NUMPY_VERSION: &str = "1.26.4";

// === ROCm Wheel ===
pub const ROCM_SUPPORTED_ABI: &str = "cp310";
pub const ROCM_WHEEL_BASE_URL: &str = "https://repo.radeon.com/rocm/manylinux/rocm-rel-6.2/";
pub const ROCM_WHEEL_PLATFORM: &str = "linux_x86_64";

// === Isolated Environment ===
/// Set when a micromamba environment is active
pub const ENV_MARKERS: &[&str] = &["MAMBA_ROOT_PREFIX"];
/// Root prefix lookup order on Linux, first defined wins.
pub const ROOT_PREFIX_VARS: &[&str] = &["MAMBA_ROOT_PREFIX", "CONDA_PREFIX"];
/// On Windows the active environment itself, never the micromamba root.
pub const ROOT_PREFIX_VARS_WINDOWS: &[&str] = &["CONDA_PREFIX"];

// === CUDA Libraries ===
pub const TENSORRT_LIBS_DIR: &str = "tensorrt_libs";
pub const CUDA_REQUIRED_LIBS: &[&str] = &[
    "libcudnn.so.9",
    "libcublas.so.12",
    "libcublasLt.so.12",
    "libcudart.so.12",
];

// === Tool Overrides ===
pub const PIP_ENV: &str = "INSTALLER_PIP";
pub const CURL_ENV: &str = "INSTALLER_CURL";
pub const CONDA_ENV: &str = "INSTALLER_CONDA";
pub const REQUIREMENTS_ENV: &str = "INSTALLER_REQUIREMENTS";

/// External programs the installer drives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tools {
    pub pip: String,
    pub curl: String,
    pub conda: String,
    pub requirements: PathBuf,
}

impl Default for Tools {
    fn default() -> Self {
        Self {
            pip: "pip".to_string(),
            curl: "curl".to_string(),
            conda: "conda".to_string(),
            requirements: PathBuf::from(REQUIREMENTS_FILE),
        }
    }
}

impl Tools {
    /// Defaults, overridden by INSTALLER_* environment variables
    pub fn from_env(env: &crate::platform::Environment) -> Self {
        let defaults = Self::default();
        let pick = |key: &str, fallback: String| -> String {
            match env.get(key) {
                Some(value) if !value.is_empty() => {
                    crate::ui::debug(&format!("Using {}: {}", key, value));
                    value.to_string()
                }
                _ => fallback,
            }
        };

        Self {
            pip: pick(PIP_ENV, defaults.pip),
            curl: pick(CURL_ENV, defaults.curl),
            conda: pick(CONDA_ENV, defaults.conda),
            requirements: PathBuf::from(pick(
                REQUIREMENTS_ENV,
                defaults.requirements.to_string_lossy().into_owned(),
            )),
        }
    }
}
