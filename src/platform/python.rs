//! Interpreter version lookup
//!
//! The version is read from `pip --version` so the ABI tag always matches the
//! interpreter the installer's pip belongs to.

use anyhow::{bail, Context, Result};
use std::fmt;

use crate::package::{CommandRunner, Invocation};

/// Major/minor version of the environment's Python interpreter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PythonVersion {
	pub major: u32,
	pub minor: u32,
}

impl PythonVersion {
	pub fn new(major: u32, minor: u32) -> Self {
		Self { major, minor }
	}

	/// Asks pip which interpreter it runs under.
	pub fn query(runner: &mut dyn CommandRunner, pip: &str) -> Result<Self> {
		let output = runner
			.capture(&Invocation::new(pip, ["--version"]))
			.context("Failed to query Python version")?;
		Self::parse(&output)
	}

	/// Parses the `(python X.Y)` suffix of `pip --version`, e.g.
	/// `pip 24.0 from /env/lib/python3.10/site-packages/pip (python 3.10)`.
	pub fn parse(output: &str) -> Result<Self> {
		let Some(version) = output
			.trim()
			.rsplit_once("(python ")
			.and_then(|(_, rest)| rest.strip_suffix(')'))
		else {
			bail!("Unexpected pip version output: {:?}", output);
		};
		let mut parts = version.split('.');
		let (Some(major), Some(minor)) = (parts.next(), parts.next()) else {
			bail!("Unexpected Python version: {:?}", version);
		};
		let major = major.parse::<u32>().with_context(|| format!("Invalid major version: {}", major))?;
		let minor = minor.parse::<u32>().with_context(|| format!("Invalid minor version: {}", minor))?;
		Ok(Self { major, minor })
	}

	/// CPython ABI tag, e.g. `cp310`
	pub fn abi_tag(&self) -> String {
		format!("cp{}{}", self.major, self.minor)
	}

	/// Directory name under `lib/`, e.g. `python3.10`
	pub fn lib_dir_name(&self) -> String {
		format!("python{}.{}", self.major, self.minor)
	}
}

impl fmt::Display for PythonVersion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}", self.major, self.minor)
	}
}
