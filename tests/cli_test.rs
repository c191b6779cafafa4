// Binary tests for the installer CLI

use std::process::{Command, Output};

fn installer(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_facefusion-installer"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("MAMBA_ROOT_PREFIX")
        .env_remove("CONDA_PREFIX")
        .env_remove("INSTALLER_PIP")
        .env_remove("INSTALLER_REQUIREMENTS")
        .output()
        .expect("Failed to run facefusion-installer")
}

#[test]
fn test_version_display() {
    for flag in ["-v", "--version"] {
        let output = installer(&[flag]);
        assert!(output.status.success(), "Version command failed");

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(
            stdout.contains(&format!("facefusion-installer {}", env!("CARGO_PKG_VERSION"))),
            "Expected name and version in output, got: {}",
            stdout
        );
    }
}

#[test]
fn test_help_display() {
    let output = installer(&["--help"]);
    assert!(output.status.success(), "Help command failed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--onnxruntime") && stdout.contains("--skip-conda"),
            "Expected --onnxruntime and --skip-conda in help output");
}

#[test]
fn test_missing_selector_is_usage_error() {
    let output = installer(&[]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_unknown_selector_is_rejected() {
    let output = installer(&["--onnxruntime", "tpu", "--skip-conda"]);
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("default"), "Expected possible values in error, got: {}", stderr);
}

#[test]
fn test_conda_not_activated_exits_with_one() {
    let output = installer(&["--onnxruntime", "default"]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Conda is not activated"));
    assert!(!stdout.contains("Installing requirements"), "No package manager command expected");
}

#[test]
fn test_dry_run_prints_commands() {
    let output = installer(&["--onnxruntime", "default", "--skip-conda", "--dry-run"]);
    assert!(output.status.success(), "Dry run failed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("would run pip install -r requirements.txt --force-reinstall"));
    assert!(stdout.contains("would run pip install onnxruntime==1.19.2 --force-reinstall"));
}
