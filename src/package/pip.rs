//! pip command construction

use std::path::Path;

use super::Invocation;

/// Builds pip invocations for a given pip executable
#[derive(Debug, Clone)]
pub struct Pip<'a> {
	program: &'a str,
}

impl<'a> Pip<'a> {
	pub fn new(program: &'a str) -> Self {
		Self { program }
	}

	/// `pip install -r <manifest> --force-reinstall`
	pub fn install_requirements(&self, manifest: &Path) -> Invocation {
		Invocation::new(
			self.program,
			[
				"install".to_string(),
				"-r".to_string(),
				manifest.to_string_lossy().into_owned(),
				"--force-reinstall".to_string(),
			],
		)
	}

	/// `pip uninstall <packages...> -y -q`
	pub fn uninstall(&self, packages: &[&str]) -> Invocation {
		let mut args = vec!["uninstall".to_string()];
		args.extend(packages.iter().map(|p| p.to_string()));
		args.extend(["-y".to_string(), "-q".to_string()]);
		Invocation::new(self.program, args)
	}

	/// `pip install <requirement> --force-reinstall`
	pub fn force_install(&self, requirement: &str) -> Invocation {
		Invocation::new(self.program, ["install", requirement, "--force-reinstall"])
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn uninstall_is_quiet_and_unattended() {
		let pip = Pip::new("pip");
		let invocation = pip.uninstall(&["onnxruntime", "onnxruntime-gpu"]);
		assert_eq!(invocation.args, ["uninstall", "onnxruntime", "onnxruntime-gpu", "-y", "-q"]);
	}
}
