//! Host operating system detection

use std::fmt;

/// Operating system the installer targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
	MacOs,
	Linux,
	Windows,
	/// Anything else (BSDs, etc.)
	Other,
}

impl HostOs {
	/// The OS this binary was compiled for
	pub fn current() -> Self {
		if cfg!(target_os = "macos") {
			HostOs::MacOs
		} else if cfg!(target_os = "linux") {
			HostOs::Linux
		} else if cfg!(target_os = "windows") {
			HostOs::Windows
		} else {
			HostOs::Other
		}
	}

	pub fn is_macos(self) -> bool {
		self == HostOs::MacOs
	}

	pub fn is_linux(self) -> bool {
		self == HostOs::Linux
	}

	pub fn is_windows(self) -> bool {
		self == HostOs::Windows
	}

	/// Separator used by PATH-like variables
	pub fn path_separator(self) -> char {
		if self.is_windows() { ';' } else { ':' }
	}
}

impl fmt::Display for HostOs {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			HostOs::MacOs => "macOS",
			HostOs::Linux => "Linux",
			HostOs::Windows => "Windows",
			HostOs::Other => "unknown OS",
		};
		f.write_str(name)
	}
}
