//! Basic CLI E2E tests.
//!
//! Tests invoke the built `daycheck` binary with HOME pointed at a scratch
//! directory so the user's real config is never touched.

use std::io::Write;
use std::process::{Command, Stdio};

struct Cli {
    home: tempfile::TempDir,
}

impl Cli {
    fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("Failed to create temp home"),
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_daycheck"));
        cmd.args(args)
            .env("HOME", self.home.path())
            .env_remove("DAYCHECK_ENV")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Run a CLI command and return (stdout, stderr, exit code).
    fn run(&self, args: &[&str]) -> (String, String, i32) {
        self.run_with_input(args, "")
    }

    fn run_with_input(&self, args: &[&str], input: &str) -> (String, String, i32) {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to execute CLI command");
        child
            .stdin
            .take()
            .unwrap()
            .write_all(input.as_bytes())
            .unwrap();
        let output = child.wait_with_output().unwrap();

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let code = output.status.code().unwrap_or(-1);
        (stdout, stderr, code)
    }

    fn run_success(&self, args: &[&str]) -> String {
        let (stdout, stderr, code) = self.run(args);
        assert_eq!(code, 0, "CLI command failed: {args:?}\n{stderr}");
        stdout
    }

    fn run_failure(&self, args: &[&str]) -> String {
        let (_, stderr, code) = self.run(args);
        assert_ne!(code, 0, "CLI command unexpectedly succeeded: {args:?}");
        stderr
    }
}

fn parse_json(json: &str) -> serde_json::Value {
    serde_json::from_str(json).expect("Failed to parse JSON output")
}

#[test]
fn test_replay_with_follow_up() {
    let cli = Cli::new();
    let out = cli.run_success(&["replay", "-t", "morning", "4", "8", "3", "3", "balanced"]);
    let report = parse_json(&out);
    assert_eq!(report["status"], "finished");
    assert_eq!(report["time_of_day"], "morning");
    assert!(report["session_id"].is_string());
    assert!(report["completed_at"].is_string());
    assert_eq!(
        report["answers"],
        serde_json::json!({
            "sleep_quality": 4,
            "hours_sleep": 8,
            "morning_energy": 3,
            "morning_mood": 3,
            "morning_stress": "balanced",
        })
    );
}

#[test]
fn test_replay_without_follow_up() {
    let cli = Cli::new();
    let out = cli.run_success(&["replay", "--time-of-day", "morning", "4", "8", "3", "5"]);
    let report = parse_json(&out);
    assert_eq!(report["answers"].as_object().unwrap().len(), 4);
}

#[test]
fn test_replay_too_few_values_fails() {
    let cli = Cli::new();
    let stderr = cli.run_failure(&["replay", "-t", "evening", "4"]);
    assert!(stderr.contains("error: ran out of answers"), "{stderr}");
}

#[test]
fn test_replay_invalid_value_fails() {
    let cli = Cli::new();
    let stderr = cli.run_failure(&["replay", "-t", "evening", "maybe"]);
    assert!(stderr.contains("evening_mood"), "{stderr}");
}

#[test]
fn test_replay_night_is_empty() {
    let cli = Cli::new();
    let report = parse_json(&cli.run_success(&["replay", "-t", "night"]));
    assert_eq!(report["status"], "empty");
    assert!(report["completed_at"].is_null());
}

#[test]
fn test_invalid_time_of_day_rejected() {
    let cli = Cli::new();
    cli.run_failure(&["replay", "-t", "noon", "1"]);
}

#[test]
fn test_questions_json() {
    let cli = Cli::new();
    let out = cli.run_success(&["questions", "-t", "evening", "--json"]);
    let questions = parse_json(&out);
    let questions = questions.as_array().unwrap();
    assert_eq!(questions.len(), 5);
    assert_eq!(questions[2]["id"], "breaks_taken");
    assert_eq!(questions[2]["follow_up"]["question"]["id"], "break_count");
}

#[test]
fn test_questions_text() {
    let cli = Cli::new();
    let out = cli.run_success(&["questions", "-t", "afternoon"]);
    assert!(out.contains("[afternoon_mood]"));
    assert!(out.contains("[afternoon_stress]"));
}

#[test]
fn test_greet() {
    let cli = Cli::new();
    assert!(cli.run_success(&["greet", "--hour", "9"]).contains("Good morning"));
    assert!(cli.run_success(&["greet", "--hour", "23"]).contains("Hello"));
    cli.run_failure(&["greet", "--hour", "24"]);
}

#[test]
fn test_run_interactive_json() {
    let cli = Cli::new();
    let (stdout, stderr, code) = cli.run_with_input(
        &["run", "-t", "afternoon", "--json"],
        "4\n\n5\n\n",
    );
    assert_eq!(code, 0, "{stderr}");
    assert!(stderr.contains("Good afternoon!"));
    let answers = parse_json(&stdout);
    assert_eq!(answers, serde_json::json!({"afternoon_mood": 4, "productivity": 5}));
}

#[test]
fn test_run_interactive_close() {
    let cli = Cli::new();
    let (stdout, _, code) = cli.run_with_input(&["run", "-t", "morning"], "4\nq\n");
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "Check-in closed.");
}

#[test]
fn test_config_override_is_used() {
    let cli = Cli::new();
    assert_eq!(
        cli.run_success(&["config", "set", "time_of_day_override", "afternoon"]).trim(),
        "ok"
    );
    assert_eq!(
        cli.run_success(&["config", "get", "time_of_day_override"]).trim(),
        "afternoon"
    );
    let report = parse_json(&cli.run_success(&["replay", "3", "relaxed", "2"]));
    assert_eq!(report["time_of_day"], "afternoon");
    assert_eq!(report["answers"]["afternoon_stress"], "relaxed");
}

#[test]
fn test_config_unknown_key() {
    let cli = Cli::new();
    let stderr = cli.run_failure(&["config", "set", "display.colour", "red"]);
    assert!(stderr.contains("Unknown configuration key"), "{stderr}");
    let stderr = cli.run_failure(&["config", "get", "nope"]);
    assert!(stderr.contains("Unknown configuration key: nope"), "{stderr}");
}

#[test]
fn test_config_list_and_path() {
    let cli = Cli::new();
    let path = cli.run_success(&["config", "path"]);
    assert!(path.trim().ends_with("config.toml"), "{path}");
    assert!(path.starts_with(cli.home.path().to_str().unwrap()), "{path}");

    cli.run_success(&["config", "set", "display.show_icons", "false"]);
    let list = cli.run_success(&["config", "list"]);
    assert!(list.contains("[display]"), "{list}");
    assert!(list.contains("show_icons = false"), "{list}");
}

#[test]
fn test_unreadable_config_is_reported_and_kept() {
    let cli = Cli::new();
    let dir = cli.home.path().join(".config").join("daycheck");
    std::fs::create_dir_all(&dir).unwrap();
    let config = dir.join("config.toml");
    let content = b"time_of_day_override = \"evening\"\n# \xff\n".to_vec();
    std::fs::write(&config, &content).unwrap();

    let stderr = cli.run_failure(&["config", "get", "time_of_day_override"]);
    assert!(stderr.contains("Failed to load configuration"), "{stderr}");
    assert_eq!(std::fs::read(&config).unwrap(), content);
}

#[test]
fn test_missing_catalog_reported() {
    let cli = Cli::new();
    let stderr = cli.run_failure(&["questions", "--catalog", "/nonexistent/daycheck.toml"]);
    assert!(stderr.contains("Catalog error: Failed to read catalog"), "{stderr}");
}

#[test]
fn test_completions() {
    let cli = Cli::new();
    let out = cli.run_success(&["completions", "bash"]);
    assert!(out.contains("daycheck"));
}
