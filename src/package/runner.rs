//! External process execution
//!
//! Every package-manager, download and environment-tool call goes through a
//! [`CommandRunner`], so its exit status is captured instead of dropped.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::fmt;
use std::process::{Command, Stdio};

use crate::ui;

/// A single external program call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
	pub program: String,
	pub args: Vec<String>,
}

impl Invocation {
	pub fn new<I, S>(program: &str, args: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			program: program.to_string(),
			args: args.into_iter().map(Into::into).collect(),
		}
	}
}

impl fmt::Display for Invocation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.program)?;
		for arg in &self.args {
			if arg.contains(' ') {
				write!(f, " \"{}\"", arg)?;
			} else {
				write!(f, " {}", arg)?;
			}
		}
		Ok(())
	}
}

/// How one step of the install sequence ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
	Succeeded,
	/// Process ran but exited non-zero (None when killed by a signal)
	Failed(Option<i32>),
	/// Process could not be started at all
	SpawnFailed(String),
	/// Step was deliberately not performed
	Skipped(String),
}

impl StepOutcome {
	pub fn is_failure(&self) -> bool {
		matches!(self, StepOutcome::Failed(_) | StepOutcome::SpawnFailed(_))
	}
}

impl fmt::Display for StepOutcome {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			StepOutcome::Succeeded => f.write_str("ok"),
			StepOutcome::Failed(Some(code)) => write!(f, "exited with status {}", code),
			StepOutcome::Failed(None) => f.write_str("terminated by signal"),
			StepOutcome::SpawnFailed(reason) => write!(f, "could not start: {}", reason),
			StepOutcome::Skipped(reason) => write!(f, "skipped: {}", reason),
		}
	}
}

pub trait CommandRunner {
	/// Runs the invocation to completion with inherited stdio.
	fn run(&mut self, invocation: &Invocation) -> StepOutcome;

	/// Runs a read-only query and returns its trimmed stdout.
	fn capture(&mut self, invocation: &Invocation) -> Result<String>;
}

/// Runs commands for real
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
	fn run(&mut self, invocation: &Invocation) -> StepOutcome {
		ui::debug(&format!("Running: {}", invocation));

		let status = Command::new(&invocation.program)
			.args(&invocation.args)
			.stdin(Stdio::inherit())
			.stdout(Stdio::inherit())
			.stderr(Stdio::inherit())
			.status();

		match status {
			Ok(status) if status.success() => StepOutcome::Succeeded,
			Ok(status) => StepOutcome::Failed(status.code()),
			Err(e) => StepOutcome::SpawnFailed(e.to_string()),
		}
	}

	fn capture(&mut self, invocation: &Invocation) -> Result<String> {
		ui::debug(&format!("Querying: {}", invocation));

		let output = Command::new(&invocation.program)
			.args(&invocation.args)
			.stdin(Stdio::null())
			.output()
			.with_context(|| format!("Failed to start {}", invocation.program))?;

		if !output.status.success() {
			bail!(
				"{} exited with {}: {}",
				invocation.program,
				output.status,
				String::from_utf8_lossy(&output.stderr).trim()
			);
		}

		Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
	}
}

/// Prints commands instead of running them; queries still execute
#[derive(Debug, Default)]
pub struct DryRunner {
	inner: SystemRunner,
}

impl CommandRunner for DryRunner {
	fn run(&mut self, invocation: &Invocation) -> StepOutcome {
		ui::info(&format!("{} {}", "would run".dimmed(), invocation.to_string().bright_white()));
		StepOutcome::Succeeded
	}

	fn capture(&mut self, invocation: &Invocation) -> Result<String> {
		self.inner.capture(invocation)
	}
}
