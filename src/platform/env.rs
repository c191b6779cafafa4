//! Process environment snapshot
//!
//! The installer reads and writes environment variables through this type so
//! the whole sequence can run against a fake environment.

use std::collections::HashMap;

use crate::config::{ENV_MARKERS, ROOT_PREFIX_VARS, ROOT_PREFIX_VARS_WINDOWS};
use crate::platform::HostOs;

#[derive(Debug, Clone, Default)]
pub struct Environment {
	vars: HashMap<String, String>,
	/// Whether writes are forwarded to the real process environment
	live: bool,
}

impl Environment {
	/// Snapshot of the current process environment; writes go through to it
	pub fn from_process() -> Self {
		Self {
			vars: std::env::vars().collect(),
			live: true,
		}
	}

	/// Detached environment built from key/value pairs
	pub fn from_pairs<I, K, V>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			vars: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
			live: false,
		}
	}

	/// Value of a variable, treating empty values as unset
	pub fn get(&self, key: &str) -> Option<&str> {
		self.vars
			.get(key)
			.map(String::as_str)
			.filter(|value| !value.is_empty())
	}

	pub fn contains(&self, key: &str) -> bool {
		self.vars.contains_key(key)
	}

	pub fn set(&mut self, key: &str, value: &str) {
		if self.live {
			std::env::set_var(key, value);
		}
		self.vars.insert(key.to_string(), value.to_string());
	}

	/// True when a micromamba environment is active
	pub fn has_conda(&self) -> bool {
		ENV_MARKERS.iter().any(|marker| self.contains(marker))
	}

	/// Prefix whose library directories hold the CUDA libraries, first defined variable wins
	pub fn root_prefix(&self, os: HostOs) -> Option<&str> {
		let keys = if os.is_windows() { ROOT_PREFIX_VARS_WINDOWS } else { ROOT_PREFIX_VARS };
		keys.iter().find_map(|key| self.get(key))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn root_prefix_prefers_mamba() {
		let env = Environment::from_pairs([
			("CONDA_PREFIX", "/opt/conda"),
			("MAMBA_ROOT_PREFIX", "/opt/mamba"),
		]);
		assert_eq!(env.root_prefix(HostOs::Linux), Some("/opt/mamba"));
	}

	#[test]
	fn windows_prefix_is_active_environment() {
		let env = Environment::from_pairs([
			("MAMBA_ROOT_PREFIX", "C:/micromamba"),
			("CONDA_PREFIX", "C:/micromamba/envs/facefusion"),
		]);
		assert_eq!(env.root_prefix(HostOs::Windows), Some("C:/micromamba/envs/facefusion"));

		let mamba_only = Environment::from_pairs([("MAMBA_ROOT_PREFIX", "C:/micromamba")]);
		assert_eq!(mamba_only.root_prefix(HostOs::Windows), None);
	}

	#[test]
	fn empty_prefix_falls_through() {
		let env = Environment::from_pairs([("MAMBA_ROOT_PREFIX", ""), ("CONDA_PREFIX", "/opt/conda")]);
		assert!(env.has_conda());
		assert_eq!(env.root_prefix(HostOs::Linux), Some("/opt/conda"));
	}

	#[test]
	fn conda_prefix_alone_is_not_active() {
		let env = Environment::from_pairs([("CONDA_PREFIX", "/opt/conda")]);
		assert!(!env.has_conda());
	}

	#[test]
	fn detached_set_does_not_touch_process() {
		let mut env = Environment::from_pairs([("A", "1")]);
		env.set("FACEFUSION_INSTALLER_TEST_VAR", "x");
		assert_eq!(env.get("FACEFUSION_INSTALLER_TEST_VAR"), Some("x"));
		assert!(std::env::var("FACEFUSION_INSTALLER_TEST_VAR").is_err());
	}
}
