//! Test environment builder for isolated CodeInsight runs.
//!
//! Every run gets its own working directory, HOME and ingest output
//! directory so user config and real ingestion artifacts never leak in.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Result of running a CodeInsight CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse every stdout line as a JSON event
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON ({}): {}", e, l))
            })
            .collect()
    }
}

/// Isolated test environment with temp directories
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    pub ingest_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn ingest_path(&self) -> &Path {
        self.ingest_dir.path()
    }

    /// Run codeinsight from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_stdin(args, None)
    }

    /// Run codeinsight with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        output_to_result(cmd.output().expect("Failed to execute codeinsight"))
    }

    /// Run codeinsight, feeding `input` on stdin
    pub fn run_with_stdin(&self, args: &[&str], input: Option<&str>) -> TestResult {
        let mut cmd = self.command(args);
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd.spawn().expect("Failed to spawn codeinsight");
        {
            let mut stdin = child.stdin.take().expect("stdin is piped");
            if let Some(input) = input {
                stdin
                    .write_all(input.as_bytes())
                    .expect("Failed to write stdin");
            }
        }
        output_to_result(child.wait_with_output().expect("Failed to wait for codeinsight"))
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("CODEINSIGHT_OUTPUT_DIR", self.ingest_dir.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("CODEINSIGHT_VERBOSITY")
            .env_remove("CODEINSIGHT_COLOR")
            .env_remove("CODEINSIGHT_UNICODE");
        cmd
    }

    /// Write a file under the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    pub fn read_project_file(&self, relative_path: &str) -> String {
        std::fs::read_to_string(self.project_path(relative_path))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative_path, e))
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// An ingestion to place in the ingest output directory
struct Ingested {
    id: String,
    content: String,
    summary: Option<String>,
    tree: Option<String>,
    processed_at: Option<String>,
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    ingested: Vec<Ingested>,
    project_files: Vec<(String, String)>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            ingested: Vec::new(),
            project_files: Vec::new(),
        }
    }

    /// Add `<id>_content.txt` (and friends) to the ingest directory
    pub fn with_ingested(mut self, id: &str, content: &str) -> Self {
        self.ingested.push(Ingested {
            id: id.to_string(),
            content: content.to_string(),
            summary: None,
            tree: None,
            processed_at: None,
        });
        self
    }

    /// Like `with_ingested`, with summary, tree and metadata artifacts
    pub fn with_full_ingest(
        mut self,
        id: &str,
        content: &str,
        summary: &str,
        tree: &str,
        processed_at: &str,
    ) -> Self {
        self.ingested.push(Ingested {
            id: id.to_string(),
            content: content.to_string(),
            summary: Some(summary.to_string()),
            tree: Some(tree.to_string()),
            processed_at: Some(processed_at.to_string()),
        });
        self
    }

    /// Write a file under the project directory
    pub fn with_project_file(mut self, relative_path: &str, content: &str) -> Self {
        self.project_files
            .push((relative_path.to_string(), content.to_string()));
        self
    }

    pub fn build(self) -> TestEnv {
        let env = TestEnv {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            ingest_dir: TempDir::new().expect("Failed to create ingest dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_codeinsight")),
        };

        for (path, content) in &self.project_files {
            env.write_project_file(path, content);
        }

        let dir = env.ingest_dir.path();
        for ingest in &self.ingested {
            let write = |suffix: &str, body: &str| {
                std::fs::write(dir.join(format!("{}{}", ingest.id, suffix)), body)
                    .expect("Failed to write ingest artifact");
            };
            write("_content.txt", &ingest.content);
            if let Some(summary) = &ingest.summary {
                write("_summary.txt", summary);
            }
            if let Some(tree) = &ingest.tree {
                write("_tree.txt", tree);
            }
            if let Some(processed_at) = &ingest.processed_at {
                let metadata = serde_json::json!({
                    "repository_id": ingest.id,
                    "processed_at": processed_at,
                    "stats": {
                        "summary_length": ingest.summary.as_ref().map_or(0, |s| s.len()),
                        "tree_length": ingest.tree.as_ref().map_or(0, |s| s.len()),
                        "content_length": ingest.content.len(),
                    }
                });
                write("_metadata.json", &metadata.to_string());
            }
        }

        env
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
