//! Common test utilities for permtree CLI tests.
//!
//! `TestEnv` gives every test its own working directory and config home so
//! a developer's `.permtree.toml` never leaks into the results.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Two directories with their menus
pub const MENUS: &str = r#"[
  {"id": "1", "name": "System", "type": "DIRECTORY", "children": [
    {"id": "11", "name": "Users", "type": "MENU", "path": "/system/users"},
    {"id": "12", "name": "Roles", "type": "MENU", "path": "/system/roles"}
  ]},
  {"id": "2", "name": "Monitor", "type": "DIRECTORY", "children": [
    {"id": "21", "name": "Logs", "type": "MENU", "path": "/monitor/logs"}
  ]}
]"#;

/// Staff member holding the Users menu only
pub const STAFF: &str = r#"{
  "id": "s-1",
  "userId": "alice",
  "menus": [
    {"id": "11", "name": "Users", "type": "MENU", "path": "/system/users"}
  ]
}"#;

/// Result of running the permtree binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Non-empty stdout lines parsed as JSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("not JSON ({e}): {line}\nstdout:\n{}", self.stdout))
            })
            .collect()
    }
}

pub struct TestEnv {
    pub root: TempDir,
    config_home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().unwrap(),
            config_home: TempDir::new().unwrap(),
        }
    }

    /// Environment with `menus.json` and `staff.json` in place
    pub fn with_payloads() -> Self {
        let env = Self::new();
        env.write("menus.json", MENUS);
        env.write("staff.json", STAFF);
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative)).unwrap()
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_permtree"));
        cmd.current_dir(self.root.path())
            .args(args)
            .env("HOME", self.config_home.path())
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("PERMTREE_CHECK_STRICTLY")
            .env_remove("PERMTREE_MULTIPLE")
            .env_remove("PERMTREE_EXPAND_ALL")
            .env_remove("PERMTREE_ASCII");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to execute permtree");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
