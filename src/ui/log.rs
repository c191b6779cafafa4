//! Unified logging system

use chrono::Local;
use colored::*;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::installer::Report;

static VERBOSE: AtomicBool = AtomicBool::new(false);

const SLOGANS: &[&str] = &[
	"Wheels in, wheels out",
	"pip install patience",
	"Now with 100% more CUDA",
	"Resolving the unresolvable",
	"It works on my conda env",
	"Force-reinstalling since forever",
	"LD_LIBRARY_PATH whisperer",
];

pub fn random_slogan() -> &'static str {
	let idx = rand::rng().random_range(0..SLOGANS.len());
	SLOGANS[idx]
}

/// Title line with program name, version and a slogan
pub fn print_banner() {
	println!();
	println!(
		"{}",
		format!("─── {} v{} ───", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
			.bright_blue()
			.bold()
	);
	println!("{}", random_slogan().dimmed().italic());
}

pub struct Log;

impl Log {
	pub fn set_verbose(enabled: bool) {
		VERBOSE.store(enabled, Ordering::Relaxed);
	}

	pub fn is_verbose() -> bool {
		VERBOSE.load(Ordering::Relaxed)
	}
}

fn emit(icon: ColoredString, msg: &str) {
	let time = Local::now().format("%H:%M:%S").to_string().dimmed();
	println!("[{}] {} {}", time, icon, msg);
}

pub fn info(msg: &str) {
	emit("ℹ".bright_blue().bold(), msg);
}

pub fn success(msg: &str) {
	emit("✓".bright_green().bold(), msg);
}

pub fn warn(msg: &str) {
	emit("⚠".bright_yellow().bold(), msg);
}

pub fn error(msg: &str) {
	emit("✗".bright_red().bold(), msg);
}

pub fn debug(msg: &str) {
	if Log::is_verbose() {
		emit("⚙".bright_black().bold(), &msg.dimmed().to_string());
	}
}

pub fn header(text: &str) {
	println!();
	println!("{}", format!("─── {} ───", text).bright_blue().bold());
}

/// Prints step counts and the failed steps, if any.
pub fn summary(report: &Report) {
	header("Summary");

	println!("  {} {}", "Succeeded:".bright_blue(), report.succeeded());
	if report.skipped() > 0 {
		println!("  {} {}", "Skipped:".yellow(), report.skipped());
	}
	if report.failed() > 0 {
		println!("  {} {}", "Failed:".red(), report.failed());
		for step in report.failures() {
			println!("    {} {} {}", "✗".red(), step.description, format!("({})", step.outcome).dimmed());
		}
	}
	println!();
}
