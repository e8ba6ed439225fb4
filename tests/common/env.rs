//! Isolated environment for running the `opener` binary.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running an Opener CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse every stdout line as one JSON event.
    #[allow(dead_code)]
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .map(|line| serde_json::from_str(line).expect("stdout line is JSON"))
            .collect()
    }
}

/// Temp project directory and temp HOME, so no real user config leaks in.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("create project dir"),
            home_dir: TempDir::new().expect("create home dir"),
        }
    }

    /// Project directory with the sample catalog written to `actions.toml`.
    pub fn with_catalog() -> Self {
        let env = Self::new();
        env.write_project_file("actions.toml", super::fixtures::DANCER_CATALOG);
        env
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write_project_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent directories");
        }
        std::fs::write(&path, content).expect("write project file");
        path
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = opener_command(self.home_dir.path());
        cmd.current_dir(self.project_root.path()).args(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute opener");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// `opener` with plain output and no inherited configuration.
fn opener_command(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_opener"));
    cmd.env("NO_COLOR", "1")
        .env("TERM", "dumb")
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("APPDATA", home)
        .env_remove("RUST_LOG")
        .env_remove("GITHUB_ACTIONS");
    for key in [
        "OPENER_MAX_SHIFT",
        "OPENER_CATALOG",
        "OPENER_VERBOSITY",
        "OPENER_COLOR",
    ] {
        cmd.env_remove(key);
    }
    cmd
}
