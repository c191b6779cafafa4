//! Install sequence
//!
//! Requirements first, then the runtime swap, then CUDA library paths, then
//! the NumPy pin. Every external step is recorded in a [`Report`]; a failing
//! step is logged and the sequence carries on.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{
	Tools, BASE_RUNTIME_PACKAGE, NUMPY_PACKAGE, NUMPY_THRESHOLD_VERSION, NUMPY_VERSION, ROCM_SUPPORTED_ABI,
};
use crate::library_path;
use crate::package::{curl_download, CommandRunner, Invocation, Pip, StepOutcome};
use crate::platform::{Environment, HostOs, PythonVersion};
use crate::runtime::{table, OnnxRuntime, RocmWheel, RuntimeTable};
use crate::ui;
use crate::wording;

/// What the user asked for
#[derive(Debug, Clone)]
pub struct Request {
	pub onnxruntime: String,
	pub skip_conda: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
	pub description: String,
	pub outcome: StepOutcome,
}

/// Ordered record of every step the installer attempted
#[derive(Debug, Clone, Default)]
pub struct Report {
	steps: Vec<Step>,
}

impl Report {
	fn push(&mut self, description: impl Into<String>, outcome: StepOutcome) {
		self.steps.push(Step {
			description: description.into(),
			outcome,
		});
	}

	pub fn succeeded(&self) -> usize {
		self.steps.iter().filter(|s| s.outcome == StepOutcome::Succeeded).count()
	}

	pub fn skipped(&self) -> usize {
		self.steps.iter().filter(|s| matches!(s.outcome, StepOutcome::Skipped(_))).count()
	}

	pub fn failed(&self) -> usize {
		self.failures().count()
	}

	pub fn failures(&self) -> impl Iterator<Item = &Step> {
		self.steps.iter().filter(|s| s.outcome.is_failure())
	}
}

#[derive(Debug)]
pub enum Completion {
	Finished(Report),
	/// No conda/micromamba environment is active and the check was not skipped
	CondaNotActivated,
}

pub struct Installer<'a> {
	os: HostOs,
	table: &'a RuntimeTable,
	tools: Tools,
	temp_dir: PathBuf,
	runner: &'a mut dyn CommandRunner,
	env: &'a mut Environment,
	report: Report,
}

impl<'a> Installer<'a> {
	pub fn new(
		os: HostOs,
		table: &'a RuntimeTable,
		tools: Tools,
		runner: &'a mut dyn CommandRunner,
		env: &'a mut Environment,
	) -> Self {
		Self {
			os,
			table,
			tools,
			temp_dir: std::env::temp_dir(),
			runner,
			env,
			report: Report::default(),
		}
	}

	/// Directory the ROCm wheel is downloaded into
	pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
		self.temp_dir = dir.into();
		self
	}

	pub fn run(mut self, request: &Request) -> Result<Completion> {
		let runtime = *self
			.table
			.get(&request.onnxruntime)
			.with_context(|| format!("Unknown onnxruntime variant '{}' for {}", request.onnxruntime, self.os))?;
		let has_conda = self.env.has_conda();

		if !request.skip_conda && !has_conda {
			return Ok(Completion::CondaNotActivated);
		}

		self.install_requirements();

		if request.onnxruntime == table::ROCM {
			self.install_rocm_wheel(&runtime);
		} else {
			self.swap_runtime(&runtime);
		}

		if request.onnxruntime == table::CUDA && has_conda {
			self.configure_library_path();
		}

		if runtime.version_below(NUMPY_THRESHOLD_VERSION) {
			self.pin_numpy(&runtime);
		}

		Ok(Completion::Finished(self.report))
	}

	fn execute(&mut self, description: String, invocation: Invocation) {
		let outcome = self.runner.run(&invocation);
		if outcome.is_failure() {
			ui::warn(&format!("{} failed: {}", description, outcome));
		}
		self.report.push(description, outcome);
	}

	fn skip(&mut self, description: String, reason: String) {
		ui::warn(&reason);
		self.report.push(description, StepOutcome::Skipped(reason));
	}

	fn install_requirements(&mut self) {
		let manifest = self.tools.requirements.clone();
		let pip = Pip::new(&self.tools.pip);
		let invocation = pip.install_requirements(&manifest);

		let path = manifest.to_string_lossy();
		ui::info(&wording::format("installing_requirements", &[("path", path.as_ref())]));
		self.execute(format!("install requirements from {}", manifest.display()), invocation);
	}

	fn swap_runtime(&mut self, runtime: &OnnxRuntime) {
		let pip = Pip::new(&self.tools.pip);
		let uninstall = pip.uninstall(&[BASE_RUNTIME_PACKAGE, runtime.name]);
		let install = pip.force_install(&runtime.requirement());

		let label = runtime.to_string();
		ui::info(&wording::format("installing_runtime", &[("runtime", label.as_str())]));
		self.execute(format!("uninstall {} {}", BASE_RUNTIME_PACKAGE, runtime.name), uninstall);
		self.execute(format!("install {}", runtime.requirement()), install);
	}

	fn install_rocm_wheel(&mut self, runtime: &OnnxRuntime) {
		let description = format!("install {}", runtime.requirement());

		let python = match PythonVersion::query(&mut *self.runner, &self.tools.pip) {
			Ok(python) => python,
			Err(e) => {
				self.skip(description, format!("{:#}", e));
				return;
			}
		};

		let abi_tag = python.abi_tag();
		if abi_tag != ROCM_SUPPORTED_ABI {
			let reason = wording::format(
				"rocm_unsupported_python",
				&[("supported", ROCM_SUPPORTED_ABI), ("found", abi_tag.as_str())],
			);
			self.skip(description, reason);
			return;
		}

		let wheel = RocmWheel::new(runtime.version, &abi_tag, &self.temp_dir);
		let wheel_path = wheel.path.to_string_lossy().into_owned();
		let pip = Pip::new(&self.tools.pip);
		let download = curl_download(&self.tools.curl, &wheel.url, &wheel.path);
		let uninstall = pip.uninstall(&[BASE_RUNTIME_PACKAGE, wheel_path.as_str()]);
		let install = pip.force_install(&wheel_path);

		ui::info(&wording::format("downloading_wheel", &[("wheel", wheel.file_name.as_str())]));
		self.execute(format!("download {}", wheel.url), download);
		self.execute(format!("uninstall {}", BASE_RUNTIME_PACKAGE), uninstall);
		self.execute(format!("install {}", wheel.file_name), install);

		remove_download(&wheel.path);
	}

	fn configure_library_path(&mut self) {
		let Some(root) = self.env.root_prefix(self.os).map(PathBuf::from) else {
			self.skip(
				"configure CUDA library path".to_string(),
				wording::get("library_path_no_prefix").to_string(),
			);
			return;
		};

		match self.os {
			HostOs::Linux => self.configure_linux_library_path(&root),
			HostOs::Windows => self.configure_windows_library_path(&root),
			HostOs::MacOs | HostOs::Other => {}
		}
	}

	/// Applies to this process only; nothing is persisted.
	fn configure_linux_library_path(&mut self, root: &Path) {
		let python = match PythonVersion::query(&mut *self.runner, &self.tools.pip) {
			Ok(python) => Some(python),
			Err(e) => {
				ui::warn(&format!("{:#}, skipping TensorRT library path", e));
				None
			}
		};

		let separator = self.os.path_separator();
		let paths = library_path::assemble(
			self.env.get(library_path::LINUX_VAR),
			separator,
			library_path::linux_candidates(root, python),
		);
		library_path::log_required_libs(&paths);

		let joined = library_path::join(&paths, separator);
		self.env.set(library_path::LINUX_VAR, &joined);
		ui::debug(&format!("Final {}: {}", library_path::LINUX_VAR, joined));

		ui::success(&wording::format("library_path_updated", &[("variable", library_path::LINUX_VAR)]));
		self.report.push(format!("set {}", library_path::LINUX_VAR), StepOutcome::Succeeded);
	}

	/// Persisted into the conda environment so new shells pick it up.
	fn configure_windows_library_path(&mut self, root: &Path) {
		let separator = self.os.path_separator();
		let paths = library_path::assemble(
			self.env.get(library_path::WINDOWS_VAR),
			separator,
			library_path::windows_candidates(root),
		);
		library_path::log_required_libs(&paths);

		let assignment = format!("{}={}", library_path::WINDOWS_VAR, library_path::join(&paths, separator));
		let invocation = Invocation::new(&self.tools.conda, ["env", "config", "vars", "set", assignment.as_str()]);

		ui::info(&wording::format("library_path_updated", &[("variable", library_path::WINDOWS_VAR)]));
		self.execute(format!("persist {} in conda environment", library_path::WINDOWS_VAR), invocation);
	}

	fn pin_numpy(&mut self, runtime: &OnnxRuntime) {
		let requirement = format!("{}=={}", NUMPY_PACKAGE, NUMPY_VERSION);
		let invocation = Pip::new(&self.tools.pip).force_install(&requirement);

		let label = runtime.to_string();
		ui::info(&wording::format(
			"numpy_pin",
			&[("package", NUMPY_PACKAGE), ("version", NUMPY_VERSION), ("runtime", label.as_str())],
		));
		self.execute(format!("install {}", requirement), invocation);
	}
}

fn remove_download(path: &Path) {
	match fs::remove_file(path) {
		Ok(()) => ui::debug(&format!("Removed {}", path.display())),
		Err(e) if e.kind() == io::ErrorKind::NotFound => {}
		Err(e) => ui::warn(&format!("Failed to remove {}: {}", path.display(), e)),
	}
}
