//! End-to-end tests for the `splice` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

const SERVER: &str = "\
import express from \"express\";
import { join } from \"path\";

const app = express();
app.use(express.json());

app.listen(3000);
";

const BUILTIN_FILES: [&str; 5] = [
    "web/database.js",
    "web/models/Timer.js",
    "web/frontend/components/TimerForm.jsx",
    "extensions/countdown-timer/assets/timer-widget.js",
    "extensions/countdown-timer/blocks/timer.liquid",
];

/// A temp dir holding an empty config file and, optionally, a Shopify app.
struct Sandbox {
    temp: TempDir,
    config: PathBuf,
}

impl Sandbox {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("splice.toml");
        fs::write(&config, "").unwrap();
        fs::create_dir(temp.path().join("app")).unwrap();
        Self { temp, config }
    }

    fn shopify_app() -> Self {
        let sandbox = Self::new();
        fs::write(sandbox.app().join("shopify.app.toml"), "name = \"demo\"\n").unwrap();
        sandbox
    }

    fn with_server(self) -> Self {
        fs::create_dir_all(self.app().join("web")).unwrap();
        fs::write(self.app().join("web/index.js"), SERVER).unwrap();
        self
    }

    fn app(&self) -> PathBuf {
        self.temp.path().join("app")
    }

    fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.app().join(rel)).unwrap()
    }

    fn splice(&self) -> assert_cmd::Command {
        let mut cmd = cargo::cargo_bin_cmd!("splice");
        cmd.current_dir(self.app())
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .arg("--config")
            .arg(&self.config);
        cmd
    }
}

fn snapshot(root: &Path) -> Vec<(String, String)> {
    BUILTIN_FILES
        .iter()
        .map(|rel| (rel.to_string(), fs::read_to_string(root.join(rel)).unwrap()))
        .collect()
}

// ── meta ─────────────────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    cargo::cargo_bin_cmd!("splice")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scaffold"))
        .stdout(predicate::str::contains("patch"));
}

#[test]
fn version_flag() {
    cargo::cargo_bin_cmd!("splice")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── scaffold ─────────────────────────────────────────────────────────────────

#[test]
fn scaffold_writes_every_builtin_file() {
    let sandbox = Sandbox::shopify_app();

    sandbox
        .splice()
        .arg("scaffold")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated: web/database.js"))
        .stdout(predicate::str::contains("Next steps:"));

    for rel in BUILTIN_FILES {
        assert!(sandbox.app().join(rel).is_file(), "{rel} missing");
    }
    let database = sandbox.read("web/database.js");
    assert!(database.starts_with("import mongoose"));
    assert_eq!(database, database.trim());
}

#[test]
fn scaffold_twice_is_byte_identical() {
    let sandbox = Sandbox::shopify_app();

    sandbox.splice().arg("scaffold").assert().success();
    let first = snapshot(&sandbox.app());
    sandbox.splice().arg("scaffold").assert().success();

    assert_eq!(snapshot(&sandbox.app()), first);
}

#[test]
fn scaffold_outside_app_is_refused_without_writing() {
    let sandbox = Sandbox::new();

    sandbox
        .splice()
        .arg("scaffold")
        .assert()
        .success()
        .stderr(predicate::str::contains("Refused:"))
        .stderr(predicate::str::contains("shopify.app.toml"));

    assert!(!sandbox.app().join("web").exists());
    assert!(!sandbox.app().join("extensions").exists());
}

#[test]
fn scaffold_dry_run_writes_nothing() {
    let sandbox = Sandbox::shopify_app();

    sandbox
        .splice()
        .args(["scaffold", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would generate: web/models/Timer.js"));

    assert!(!sandbox.app().join("web").exists());
}

#[test]
fn scaffold_with_root_flag() {
    let sandbox = Sandbox::shopify_app();
    let elsewhere = TempDir::new().unwrap();

    sandbox
        .splice()
        .current_dir(elsewhere.path())
        .arg("scaffold")
        .arg("--root")
        .arg(sandbox.app())
        .assert()
        .success();

    assert!(sandbox.app().join("web/models/Timer.js").is_file());
    assert!(!elsewhere.path().join("web").exists());
}

// ── patch ────────────────────────────────────────────────────────────────────

#[test]
fn patch_inserts_imports_and_routes() {
    let sandbox = Sandbox::shopify_app().with_server();

    sandbox
        .splice()
        .arg("patch")
        .assert()
        .success()
        .stdout(predicate::str::contains("Integration complete!"))
        .stdout(predicate::str::contains("Make sure MongoDB is running"));

    let patched = sandbox.read("web/index.js");
    let import_at = patched.find("import connectDB").unwrap();
    let join_at = patched.find("import { join }").unwrap();
    let routes_at = patched.find("app.get(\"/api/timer\"").unwrap();
    let listen_at = patched.find("app.listen(3000);").unwrap();

    assert!(join_at < import_at);
    assert!(import_at < routes_at);
    assert!(routes_at < listen_at);
}

#[test]
fn patch_twice_leaves_file_unchanged() {
    let sandbox = Sandbox::shopify_app().with_server();

    sandbox.splice().arg("patch").assert().success();
    let once = sandbox.read("web/index.js");

    sandbox
        .splice()
        .arg("patch")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    assert_eq!(sandbox.read("web/index.js"), once);
}

#[test]
fn patch_without_target_is_refused() {
    let sandbox = Sandbox::shopify_app();

    sandbox
        .splice()
        .arg("patch")
        .assert()
        .success()
        .stderr(predicate::str::contains("Patch target not found"));

    assert!(!sandbox.app().join("web").exists());
}

#[test]
fn patch_dry_run_keeps_original() {
    let sandbox = Sandbox::shopify_app().with_server();

    sandbox
        .splice()
        .args(["patch", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("was not modified"));

    assert_eq!(sandbox.read("web/index.js"), SERVER);
}

#[test]
fn patch_without_anchors_warns_but_succeeds() {
    let sandbox = Sandbox::shopify_app();
    fs::create_dir_all(sandbox.app().join("web")).unwrap();
    fs::write(sandbox.app().join("web/index.js"), "console.log(\"hi\");\n").unwrap();

    sandbox
        .splice()
        .arg("patch")
        .assert()
        .success()
        .stdout(predicate::str::contains("Import anchor not found"))
        .stdout(predicate::str::contains("Body anchor not found"));

    assert_eq!(sandbox.read("web/index.js"), "console.log(\"hi\");\n");
}

#[test]
fn patch_json_report() {
    let sandbox = Sandbox::shopify_app().with_server();

    let out = sandbox
        .splice()
        .args(["patch", "--output-format", "json"])
        .output()
        .unwrap();

    assert!(out.status.success());
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["status"], "patched");
    assert_eq!(report["target"], "web/index.js");
    assert_eq!(report["import_inserted"], true);
    assert_eq!(report["body_inserted"], true);
    assert_eq!(report["dry_run"], false);
}

#[test]
fn patch_custom_target_from_env() {
    let sandbox = Sandbox::shopify_app();
    fs::create_dir_all(sandbox.app().join("web")).unwrap();
    fs::write(sandbox.app().join("web/server.js"), SERVER).unwrap();

    sandbox
        .splice()
        .env("SPLICE_PATCH__TARGET", "web/server.js")
        .arg("patch")
        .assert()
        .success();

    assert!(sandbox.read("web/server.js").contains("connectDB();"));
}

// ── directory kits ───────────────────────────────────────────────────────────

#[test]
fn directory_kit_scaffolds_its_files() {
    let sandbox = Sandbox::shopify_app();
    let kit = sandbox.temp.path().join("kit");
    fs::create_dir_all(kit.join("files/web/lib")).unwrap();
    fs::write(kit.join("files/web/lib/hello.js"), "\nexport const hello = 1;\n").unwrap();

    sandbox
        .splice()
        .args(["scaffold", "--kit"])
        .arg(&kit)
        .assert()
        .success();

    assert_eq!(sandbox.read("web/lib/hello.js"), "export const hello = 1;");
    assert!(!sandbox.app().join("web/database.js").exists());
}

#[test]
fn directory_kit_patch_manifest() {
    let sandbox = Sandbox::shopify_app().with_server();
    let kit = sandbox.temp.path().join("kit");
    fs::create_dir_all(kit.join("files")).unwrap();
    fs::write(kit.join("files/readme.txt"), "hello").unwrap();
    fs::write(
        kit.join("patch.toml"),
        r#"
sentinel = "loyalty"
import_marker = "import express from"
body_anchor = 'app\.listen\('
import_block = "import loyalty from \"./loyalty.js\";"
body_block = "loyalty(app);"
"#,
    )
    .unwrap();

    sandbox
        .splice()
        .args(["patch", "--kit"])
        .arg(&kit)
        .assert()
        .success();

    let patched = sandbox.read("web/index.js");
    assert!(patched.contains("import loyalty from \"./loyalty.js\";"));
    assert!(patched.contains("loyalty(app);\napp.listen(3000);"));
    assert!(!patched.contains("connectDB"));
}

// ── list ─────────────────────────────────────────────────────────────────────

#[test]
fn list_json_describes_builtin_kit() {
    let sandbox = Sandbox::new();

    let out = sandbox
        .splice()
        .args(["list", "--format", "json"])
        .output()
        .unwrap();

    assert!(out.status.success());
    let listing: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(listing["name"], "countdown-timer");
    assert_eq!(listing["target"], "web/index.js");
    assert_eq!(listing["files"].as_array().map(Vec::len), Some(5));
}

#[test]
fn list_plain_prints_one_path_per_line() {
    let sandbox = Sandbox::new();

    sandbox
        .splice()
        .args(["list", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "web/database.js\nweb/models/Timer.js\n",
        ));
}

// ── config / init ────────────────────────────────────────────────────────────

#[test]
fn config_get_reads_file_then_env() {
    let sandbox = Sandbox::new();
    fs::write(&sandbox.config, "[patch]\ntarget = \"web/server.js\"\n").unwrap();

    sandbox
        .splice()
        .args(["config", "get", "patch.target"])
        .assert()
        .success()
        .stdout("web/server.js\n");

    sandbox
        .splice()
        .env("SPLICE_PATCH__TARGET", "src/app.js")
        .args(["config", "get", "patch.target"])
        .assert()
        .success()
        .stdout("src/app.js\n");
}

#[test]
fn config_path_reports_explicit_file() {
    let sandbox = Sandbox::new();

    sandbox
        .splice()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("splice.toml"));
}

#[test]
fn init_writes_defaults_and_respects_force() {
    let sandbox = Sandbox::new();
    let target = sandbox.temp.path().join("fresh").join("config.toml");

    cargo::cargo_bin_cmd!("splice")
        .arg("--config")
        .arg(&target)
        .arg("init")
        .assert()
        .success();
    let written = fs::read_to_string(&target).unwrap();
    assert!(written.contains("marker = \"shopify.app.toml\""));

    fs::write(&target, "# mine\n").unwrap();
    cargo::cargo_bin_cmd!("splice")
        .arg("--config")
        .arg(&target)
        .arg("init")
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&target).unwrap(), "# mine\n");

    cargo::cargo_bin_cmd!("splice")
        .arg("--config")
        .arg(&target)
        .args(["init", "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&target).unwrap().contains("[patch]"));
}

#[test]
fn completions_bash() {
    cargo::cargo_bin_cmd!("splice")
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("splice"));
}
