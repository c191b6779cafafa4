use clap::{builder::PossibleValuesParser, builder::Styles, ArgAction, CommandFactory, FromArgMatches, Parser};
use colored::Colorize;
use std::ffi::OsString;

use crate::runtime::RuntimeTable;
use crate::wording;

fn styles() -> Styles {
	Styles::styled()
		.header(anstyle::Style::new().bold().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.usage(anstyle::Style::new().bold().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))))
		.valid(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.invalid(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = env!("CARGO_PKG_NAME"),
	author,
	version,
	about = "Installs the ONNX runtime variant matching your OS and accelerator",
	styles = styles(),
	disable_version_flag = true,
	after_help = format!(
		"{title}
  {bin} {flag} {default}              {default_desc}
  {bin} {flag} {cuda}                 {cuda_desc}
  {bin} {flag} {openvino} {skip}  {skip_desc}",
		title = "Examples:".bright_blue().bold(),
		bin = env!("CARGO_PKG_NAME").bright_blue(),
		flag = "--onnxruntime".yellow(),
		default = "default",
		default_desc = "CPU runtime".dimmed(),
		cuda = "cuda",
		cuda_desc = "NVIDIA GPU runtime + library paths".dimmed(),
		openvino = "openvino",
		skip = "--skip-conda".yellow(),
		skip_desc = "Outside a conda environment".dimmed(),
	),
)]
pub struct Cli {
	// Possible values are attached in command_for, they depend on the host OS
	#[arg(
		long = "onnxruntime",
		value_name = "VARIANT",
		required = true,
		help = wording::format("help.install_dependency", &[("dependency", "onnxruntime")]),
	)]
	pub onnxruntime: String,

	#[arg(long = "skip-conda", help = wording::get("help.skip_conda"))]
	pub skip_conda: bool,

	#[arg(long = "verbose", help = wording::get("help.verbose"))]
	pub verbose: bool,

	#[arg(long = "dry-run", help = wording::get("help.dry_run"))]
	pub dry_run: bool,

	/// Print version
	#[arg(short = 'v', long = "version", action = ArgAction::Version)]
	version: (),
}

impl Cli {
	/// Command definition with `--onnxruntime` restricted to the table's keys
	pub fn command_for(table: &RuntimeTable) -> clap::Command {
		let keys: Vec<&'static str> = table.keys().collect();
		Cli::command().mut_arg("onnxruntime", |arg| arg.value_parser(PossibleValuesParser::new(keys)))
	}

	/// Parses the process arguments, exiting on usage errors, `--help` and `--version`.
	pub fn parse_for(table: &RuntimeTable) -> Self {
		let matches = Self::command_for(table).get_matches();
		Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
	}

	pub fn try_parse_for<I, T>(table: &RuntimeTable, args: I) -> Result<Self, clap::Error>
	where
		I: IntoIterator<Item = T>,
		T: Into<OsString> + Clone,
	{
		let matches = Self::command_for(table).try_get_matches_from(args)?;
		Self::from_arg_matches(&matches)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::platform::HostOs;

	#[test]
	fn command_is_well_formed() {
		Cli::command_for(&RuntimeTable::resolve(HostOs::Linux)).debug_assert();
	}

	#[test]
	fn accepts_table_keys_only() {
		let linux = RuntimeTable::resolve(HostOs::Linux);
		let cli = Cli::try_parse_for(&linux, ["installer", "--onnxruntime", "rocm", "--skip-conda"]).unwrap();
		assert_eq!(cli.onnxruntime, "rocm");
		assert!(cli.skip_conda);
		assert!(!cli.dry_run);

		let mac = RuntimeTable::resolve(HostOs::MacOs);
		let err = Cli::try_parse_for(&mac, ["installer", "--onnxruntime", "cuda"]).unwrap_err();
		assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
	}

	#[test]
	fn onnxruntime_is_required() {
		let table = RuntimeTable::resolve(HostOs::Windows);
		let err = Cli::try_parse_for(&table, ["installer"]).unwrap_err();
		assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
	}

	#[test]
	fn short_v_prints_version() {
		let table = RuntimeTable::resolve(HostOs::Linux);
		let err = Cli::try_parse_for(&table, ["installer", "-v"]).unwrap_err();
		assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
	}
}
