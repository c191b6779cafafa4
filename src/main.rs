//! FaceFusion installer
//!
//! Installs requirements and the ONNX runtime variant chosen with
//! `--onnxruntime` into the active conda environment.

use anyhow::Result;
use std::process::ExitCode;

use facefusion_installer::cli::Cli;
use facefusion_installer::config::Tools;
use facefusion_installer::installer::{Completion, Installer, Request};
use facefusion_installer::package::{CommandRunner, DryRunner, SystemRunner};
use facefusion_installer::platform::{Environment, HostOs};
use facefusion_installer::runtime::RuntimeTable;
use facefusion_installer::{ui, wording};

fn main() -> Result<ExitCode> {
	if let Err(e) = ctrlc::set_handler(|| std::process::exit(0)) {
		ui::warn(&format!("Failed to install Ctrl+C handler: {}", e));
	}

	let os = HostOs::current();
	let table = RuntimeTable::resolve(os);
	let cli = Cli::parse_for(&table);

	ui::Log::set_verbose(cli.verbose);

	let mut env = Environment::from_process();
	let tools = Tools::from_env(&env);
	let request = Request {
		onnxruntime: cli.onnxruntime,
		skip_conda: cli.skip_conda,
	};

	let mut system = SystemRunner;
	let mut dry = DryRunner::default();
	let runner: &mut dyn CommandRunner = if cli.dry_run { &mut dry } else { &mut system };

	ui::print_banner();
	ui::debug(&format!("Host: {}, variants: {}", os, table.keys().collect::<Vec<_>>().join(", ")));

	match Installer::new(os, &table, tools, runner, &mut env).run(&request)? {
		Completion::CondaNotActivated => {
			ui::error(wording::get("conda_not_activated"));
			Ok(ExitCode::from(1))
		}
		Completion::Finished(report) => {
			ui::summary(&report);
			if report.failed() > 0 {
				let count = report.failed().to_string();
				ui::warn(&wording::format("install_incomplete", &[("count", count.as_str())]));
			} else {
				ui::success(wording::get("install_complete"));
			}
			Ok(ExitCode::SUCCESS)
		}
	}
}
