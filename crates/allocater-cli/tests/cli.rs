//! End-to-end tests for the `allocater` binary.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const ASSETS: &str = "name,principal,value\nAll-Country,100000,120000\nS&P500,50000,60000\n";
const ALLOCATIONS: &str =
    "name,class,ratio\nAll-Country,US Equity,0.7\nAll-Country,Emerging,0.3\nS&P500,US Equity,1.0\n";

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), "color = false\n").unwrap();
        Self { dir }
    }

    fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("allocater").unwrap();
        cmd.env("ALLOCATER_CONFIG", self.path("config.toml"))
            .env_remove("RUST_LOG");
        cmd
    }
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_allocate_table() {
    let ws = Workspace::new();
    let assets = ws.file("assets.csv", ASSETS);
    let allocations = ws.file("allocations.csv", ALLOCATIONS);

    ws.cmd()
        .args(["allocate", "--assets", arg(&assets), "--allocations", arg(&allocations)])
        .args(["--date", "2025-01-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exposure by Class (2025-01-31)"))
        .stdout(predicate::str::contains("US Equity"))
        .stdout(predicate::str::contains("144000.00"))
        .stdout(predicate::str::contains("36000.00"))
        .stdout(predicate::str::contains("150000.00"));
}

#[test]
fn test_allocate_json() {
    let ws = Workspace::new();
    let assets = ws.file("assets.csv", ASSETS);
    let allocations = ws.file(
        "allocations.csv",
        "name,class,ratio\nAll-Country,US Equity,0.5\nMissing Fund,Bonds,1.0\n",
    );

    let output = ws
        .cmd()
        .args(["--format", "json", "allocate"])
        .args(["-a", arg(&assets), "-l", arg(&allocations)])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let classes = report["classes"].as_array().unwrap();
    assert_eq!(classes.len(), 2);
    assert_eq!(report["total_value"], 120000.0);
    assert_eq!(report["total_principal"], 100000.0);

    let kinds: Vec<_> = report["warnings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["kind"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(kinds, vec!["undefined_class_added", "missing_asset"]);

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Asset 'Missing Fund' not found in assets; skipped"));
}

#[test]
fn test_allocate_writes_output() {
    let ws = Workspace::new();
    let assets = ws.file("assets.csv", ASSETS);
    let allocations = ws.file("allocations.csv", ALLOCATIONS);
    let out = ws.path("by_class.csv");

    ws.cmd()
        .args(["-q", "allocate", "-a", arg(&assets), "-l", arg(&allocations)])
        .args(["--output", arg(&out)])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    let text = std::fs::read_to_string(&out).unwrap();
    assert_eq!(
        text,
        "name,principal,value\nEmerging,30000,36000\nUS Equity,120000,144000\n"
    );
}

#[test]
fn test_allocate_csv_stdout() {
    let ws = Workspace::new();
    let assets = ws.file("assets.csv", "name,value\nFund,1000\n");
    let allocations = ws.file("allocations.csv", "name,class,ratio\nFund,A,0.25\nFund,B,0.75\n");

    ws.cmd()
        .args(["allocate", "-a", arg(&assets), "-l", arg(&allocations), "-f", "csv"])
        .assert()
        .success()
        .stdout("name,principal,value\nA,,250\nB,,750\n");
}

#[test]
fn test_allocate_rejects_overflow() {
    let ws = Workspace::new();
    let assets = ws.file("assets.csv", ASSETS);
    let allocations = ws.file("allocations.csv", "name,class,ratio\nFund,A,0.6\nFund,B,0.5\n");

    ws.cmd()
        .args(["allocate", "-a", arg(&assets), "-l", arg(&allocations)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds 1.0"));
}

#[test]
fn test_check_lists_completed_ratios() {
    let ws = Workspace::new();
    let allocations = ws.file("allocations.csv", "name,class,ratio\nTop10,Apple,0.6\n");

    ws.cmd()
        .args(["check", "--allocations", arg(&allocations)])
        .assert()
        .success()
        .stdout(predicate::str::contains("undefined"))
        .stdout(predicate::str::contains("40.00%"))
        .stdout(predicate::str::contains("auto-completed"))
        .stderr(predicate::str::contains("1 allocations valid"));
}

#[test]
fn test_check_reports_bad_number() {
    let ws = Workspace::new();
    let allocations = ws.file("allocations.csv", "name,class,ratio\nFund,A,half\n");

    ws.cmd()
        .args(["check", "-l", arg(&allocations)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("half"));
}

#[test]
fn test_assets_summary() {
    let ws = Workspace::new();
    let assets = ws.file("assets.csv", ASSETS);

    ws.cmd()
        .args(["assets", "--assets", arg(&assets)])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Value"))
        .stdout(predicate::str::contains("180000.00"))
        .stdout(predicate::str::contains("Total Principal"))
        .stdout(predicate::str::contains("150000.00"));
}

#[test]
fn test_merge_sums_values() {
    let ws = Workspace::new();
    let first = ws.file("a.csv", "name,principal,value\nX,5,10\nY,1,1\n");
    let second = ws.file("b.csv", "name,value\nX,5\nZ,2\n");

    ws.cmd()
        .args(["merge", arg(&first), arg(&second), "--format", "csv"])
        .assert()
        .success()
        .stdout("name,principal,value\nX,,15\nY,,1\nZ,,2\n");
}

#[test]
fn test_config_show_uses_file_and_flags() {
    let ws = Workspace::new();
    ws.file("config.toml", "color = false\nprecision = 4\nsort = \"class\"\n");

    let output = ws
        .cmd()
        .args(["config", "show", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let config: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(config["precision"], 4);
    assert_eq!(config["sort"], "class");
    assert_eq!(config["format"], "json");
    assert_eq!(config["color"], false);
}

#[test]
fn test_config_init_and_path() {
    let ws = Workspace::new();
    let target = ws.path("nested").join("config.toml");

    ws.cmd()
        .args(["--config", arg(&target), "config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    ws.cmd()
        .args(["--config", arg(&target), "config", "init"])
        .assert()
        .success();
    let text = std::fs::read_to_string(&target).unwrap();
    assert!(text.contains("precision = 2"));

    ws.cmd()
        .args(["--config", arg(&target), "config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let ws = Workspace::new();
    let assets = ws.file("assets.csv", ASSETS);

    ws.cmd()
        .env("ALLOCATER_CONFIG", ws.path("nope.toml"))
        .args(["assets", "-a", arg(&assets)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}
