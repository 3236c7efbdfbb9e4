//! Test environment for running the drills binaries with piped stdin.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Result of running a drills binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for TestResult {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Isolated environment: a temp directory stands in for HOME and the config dir.
///
/// `DRILLS_CONFIG` always points at `config_path()`, which only exists once
/// `write_config` is called.
pub struct TestEnv {
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home_dir: TempDir::new().expect("Failed to create temp home"),
        }
    }

    /// `<home>/.config/drills/config.toml`
    pub fn config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("drills")
            .join("config.toml")
    }

    /// Write the default-location config file
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create config dir");
        }
        std::fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Run `bin` with `args`, feeding `stdin`
    pub fn run(&self, bin: &str, args: &[&str], stdin: &str) -> TestResult {
        self.run_with_env(bin, args, stdin, &[])
    }

    pub fn run_with_env(
        &self,
        bin: &str,
        args: &[&str],
        stdin: &str,
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(bin);
        cmd.args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("DRILLS_CONFIG", self.config_path())
            .env_remove("DRILLS_INPUT_MODE")
            .env_remove("DRILLS_OUTPUT_FORMAT")
            .env_remove("DRILLS_LOG")
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().expect("Failed to spawn drills binary");
        {
            let mut pipe = child.stdin.take().expect("stdin is piped");
            // The program may exit before reading everything; ignore broken pipes
            let _ = pipe.write_all(stdin.as_bytes());
        }
        child
            .wait_with_output()
            .expect("Failed to wait for drills binary")
            .into()
    }
}
