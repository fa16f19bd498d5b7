//! Integration tests for `crackle validate`, `command`, `inspect` and `export`.
//!
//! Each test writes its fixtures into a temp directory and points
//! `CRACKLE_CONFIG` there, so no user state is read.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const EXAMPLE_DESCRIPTOR: &str = r#"
name = "myapp"
repository = "myapp:1.0"
commandStart = "--flag"
homepage = "https://example.com"
shortDescription = "Example application"

[[ports]]
local = "8080"
container = "80"

[[ports]]
local = "8443"
container = "443"

[[volumes]]
local = "/data"
container = "/var/data"
"#;

const EXAMPLE_LAUNCH: &str =
    "/usr/bin/env docker run -t --rm -p 8080:80 -p 8443:443 -v /data:/var/data myapp:1.0 --flag";

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temp dir"),
        }
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("write fixture");
        path
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    /// `crackle` running inside the workspace with an isolated config.
    fn crackle(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("crackle"));
        cmd.current_dir(self.path())
            .env("NO_COLOR", "1")
            .env("CRACKLE_CONFIG", self.path().join("config.yaml"))
            .env_remove("CRACKLE_USERNAME")
            .env_remove("CRACKLE_LOG")
            .env_remove("RUST_LOG");
        cmd
    }
}

fn json_stdout(cmd: &mut Command) -> (Option<i32>, serde_json::Value) {
    let output = cmd.output().expect("run crackle");
    let value = serde_json::from_slice(&output.stdout).expect("valid json");
    (output.status.code(), value)
}

// ---------------------------------------------------------------------------
// `crackle validate`
// ---------------------------------------------------------------------------

#[test]
fn test_validate_default_path_succeeds() {
    let ws = Workspace::new();
    ws.write("crackle.toml", EXAMPLE_DESCRIPTOR);
    ws.crackle()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("crackle.toml is valid (myapp)"));
}

#[test]
fn test_validate_explicit_path_succeeds() {
    let ws = Workspace::new();
    let path = ws.write("other.toml", EXAMPLE_DESCRIPTOR);
    ws.crackle().arg("validate").arg(&path).assert().success();
}

#[test]
fn test_validate_invalid_name_exits_two() {
    let ws = Workspace::new();
    ws.write(
        "crackle.toml",
        "name = \"MyApp\"\nrepository = \"myapp:1.0\"\n",
    );
    ws.crackle()
        .arg("validate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Package name 'MyApp' is invalid"));
}

#[test]
fn test_validate_reports_first_violation_only() {
    let ws = Workspace::new();
    ws.write(
        "crackle.toml",
        r#"
name = "myapp"
repository = "myapp:1.0"
homepage = "https://example.com/this-homepage-is-deliberately-padded-out-past-the-one-hundred-character-limit-and-then-some"

[[ports]]
local = "0"
container = "80"
"#,
    );
    ws.crackle()
        .arg("validate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Local port \"0\" is invalid"))
        .stderr(predicate::str::contains("homepage").not());
}

#[test]
fn test_validate_json_violation_has_code() {
    let ws = Workspace::new();
    ws.write(
        "crackle.toml",
        "name = \"myapp\"\nrepository = \"myapp:1.0\"\n[[ports]]\nlocal = \"80\"\ncontainer = \"70000\"\n",
    );
    let (code, value) = json_stdout(ws.crackle().args(["validate", "--json"]));
    assert_eq!(code, Some(2));
    assert_eq!(value["error"], true);
    assert_eq!(value["code"], "invalid_port");
    assert_eq!(value["message"], "Container port \"70000\" is invalid");
}

#[test]
fn test_validate_json_success() {
    let ws = Workspace::new();
    ws.write("crackle.toml", EXAMPLE_DESCRIPTOR);
    let (code, value) = json_stdout(ws.crackle().args(["validate", "--json"]));
    assert_eq!(code, Some(0));
    assert_eq!(value["valid"], true);
    assert_eq!(value["name"], "myapp");
}

#[test]
fn test_validate_unparseable_descriptor_exits_one() {
    let ws = Workspace::new();
    ws.write("crackle.toml", "name = \n");
    ws.crackle()
        .arg("validate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cannot decode package descriptor"));
}

// ---------------------------------------------------------------------------
// `crackle command`
// ---------------------------------------------------------------------------

#[test]
fn test_command_prints_launch_line() {
    let ws = Workspace::new();
    ws.write("crackle.toml", EXAMPLE_DESCRIPTOR);
    ws.crackle()
        .arg("command")
        .assert()
        .success()
        .stdout(format!("{EXAMPLE_LAUNCH}\n"));
}

#[test]
fn test_command_minimal_descriptor() {
    let ws = Workspace::new();
    ws.write(
        "crackle.toml",
        "name = \"hello\"\nrepository = \"hello-world:latest\"\n",
    );
    ws.crackle()
        .arg("command")
        .assert()
        .success()
        .stdout("/usr/bin/env docker run -t --rm hello-world:latest\n");
}

#[test]
fn test_command_is_not_silenced_by_quiet() {
    let ws = Workspace::new();
    ws.write("crackle.toml", EXAMPLE_DESCRIPTOR);
    ws.crackle()
        .args(["command", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("docker run"));
}

#[test]
fn test_command_json_splits_executable_and_arguments() {
    let ws = Workspace::new();
    ws.write("crackle.toml", EXAMPLE_DESCRIPTOR);
    let (code, value) = json_stdout(ws.crackle().args(["command", "--json"]));
    assert_eq!(code, Some(0));
    assert_eq!(value["executable"], "/usr/bin/env");
    assert_eq!(
        value["arguments"],
        "docker run -t --rm -p 8080:80 -p 8443:443 -v /data:/var/data myapp:1.0 --flag"
    );
}

#[test]
fn test_command_validates_by_default() {
    let ws = Workspace::new();
    ws.write("crackle.toml", "name = \"x\"\nrepository = \"x:1\"\n");
    ws.crackle()
        .arg("command")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_command_skip_validation_renders_anyway() {
    let ws = Workspace::new();
    ws.write("crackle.toml", "name = \"x\"\nrepository = \"x:1\"\n");
    ws.crackle()
        .args(["command", "--skip-validation"])
        .assert()
        .success()
        .stdout("/usr/bin/env docker run -t --rm x:1\n");
}

// ---------------------------------------------------------------------------
// `crackle inspect`
// ---------------------------------------------------------------------------

#[test]
fn test_inspect_uses_username_from_env() {
    let ws = Workspace::new();
    ws.write("crackle.toml", EXAMPLE_DESCRIPTOR);
    let (code, value) = json_stdout(
        ws.crackle()
            .args(["inspect", "--json"])
            .env("CRACKLE_USERNAME", "dana"),
    );
    assert_eq!(code, Some(0));
    assert_eq!(value["name"], "myapp");
    assert_eq!(value["repository"], "myapp");
    assert_eq!(value["version"], "1.0");
    assert_eq!(value["owner"], "dana");
    assert_eq!(value["pulls"], 0);
    assert_eq!(value["ports"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_inspect_uses_username_from_config() {
    let ws = Workspace::new();
    ws.write("crackle.toml", EXAMPLE_DESCRIPTOR);
    ws.write("config.yaml", "auth:\n  username: erin\n");
    ws.crackle()
        .arg("inspect")
        .assert()
        .success()
        .stdout(predicate::str::contains("erin"))
        .stdout(predicate::str::contains("8443 → 443"));
}

#[test]
fn test_inspect_human_view_includes_long_description() {
    let ws = Workspace::new();
    ws.write(
        "crackle.toml",
        &format!(
            "longDescription = \"Runs the app.\\nMounts /data for state.\"\n{EXAMPLE_DESCRIPTOR}"
        ),
    );
    ws.crackle()
        .arg("inspect")
        .env("CRACKLE_USERNAME", "dana")
        .assert()
        .success()
        .stdout(predicate::str::contains("Details:"))
        .stdout(predicate::str::contains("Runs the app."))
        .stdout(predicate::str::contains("Mounts /data for state."));
}

#[test]
fn test_inspect_env_username_overrides_config() {
    let ws = Workspace::new();
    ws.write("crackle.toml", EXAMPLE_DESCRIPTOR);
    ws.write("config.yaml", "auth:\n  username: erin\n");
    let (_, value) = json_stdout(
        ws.crackle()
            .args(["inspect", "--json"])
            .env("CRACKLE_USERNAME", "dana"),
    );
    assert_eq!(value["owner"], "dana");
}

#[test]
fn test_inspect_without_username_fails() {
    let ws = Workspace::new();
    ws.write("crackle.toml", EXAMPLE_DESCRIPTOR);
    ws.crackle()
        .arg("inspect")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Username is not set"));
}

#[test]
fn test_inspect_malformed_repository_exits_two() {
    let ws = Workspace::new();
    ws.write(
        "crackle.toml",
        "name = \"myapp\"\nrepository = \"myapp\"\n",
    );
    let (code, value) = json_stdout(
        ws.crackle()
            .args(["inspect", "--json"])
            .env("CRACKLE_USERNAME", "dana"),
    );
    assert_eq!(code, Some(2));
    assert_eq!(value["code"], "malformed_repository");
}

// ---------------------------------------------------------------------------
// `crackle export`
// ---------------------------------------------------------------------------

fn example_record() -> serde_json::Value {
    serde_json::json!({
        "name": "myapp",
        "repository": "myapp",
        "version": "1.0",
        "owner": "dana",
        "pulls": 42,
        "commandStart": "--flag",
        "homepage": "https://example.com",
        "shortDescription": "Example application",
        "ports": [
            { "local": "8080", "container": "80" },
            { "local": "8443", "container": "443" }
        ],
        "volumes": [{ "local": "/data", "container": "/var/data" }]
    })
}

#[test]
fn test_export_prints_descriptor_toml() {
    let ws = Workspace::new();
    let record = ws.write("pkg.json", &example_record().to_string());
    ws.crackle()
        .arg("export")
        .arg(&record)
        .assert()
        .success()
        .stdout(predicate::str::contains("name = \"myapp\""))
        .stdout(predicate::str::contains("repository = \"myapp:1.0\""))
        .stdout(predicate::str::contains("owner").not())
        .stdout(predicate::str::contains("pulls").not());
}

#[test]
fn test_export_output_renders_same_command() {
    let ws = Workspace::new();
    let record = ws.write("pkg.json", &example_record().to_string());
    let output = ws
        .crackle()
        .arg("export")
        .arg(&record)
        .output()
        .expect("run crackle");
    assert!(output.status.success());
    ws.write(
        "crackle.toml",
        std::str::from_utf8(&output.stdout).expect("utf-8"),
    );
    ws.crackle()
        .arg("command")
        .assert()
        .success()
        .stdout(format!("{EXAMPLE_LAUNCH}\n"));
}

#[test]
fn test_export_invalid_record_exits_two() {
    let ws = Workspace::new();
    let mut record = example_record();
    record["volumes"][0]["container"] = serde_json::Value::String("/".repeat(4352));
    let path = ws.write("pkg.json", &record.to_string());
    ws.crackle()
        .arg("export")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Container volume"));
}

#[test]
fn test_export_missing_record_fails() {
    let ws = Workspace::new();
    ws.crackle()
        .args(["export", "absent.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot read absent.json"));
}
