//! End-to-end tests for the flagstyle binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Project with two flags, two styles and a partial.
fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(
        root,
        "config/feature-flags.json",
        r#"{
            "featureFlags": { "newHeader": { "owner": "web" }, "darkMode": {} },
            "styles": ["less/button.less", "less/page/top.less"]
        }"#,
    );
    write(root, "less/button.less", ".button { color: red; }");
    write(root, "less/page/top.less", "@import '../_vars.less';");
    write(root, "less/_vars.less", "@c: red;");
    temp
}

fn flagstyle(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("flagstyle").unwrap();
    cmd.arg("--cwd").arg(root).arg("--no-color").env_remove("RUST_LOG");
    cmd
}

#[test]
fn prepare_prints_expanded_inputs() {
    let temp = project();

    let output = flagstyle(temp.path()).arg("prepare").assert().success().get_output().stdout.clone();
    let inputs: Vec<String> = serde_json::from_slice(&output).unwrap();

    assert_eq!(
        inputs,
        vec![
            "less/button.less",
            "less/page/top.less",
            "less/features/all/button.less",
            "less/features/all/page/top.less",
            "less/features/darkMode/button.less",
            "less/features/darkMode/page/top.less",
            "less/features/newHeader/button.less",
            "less/features/newHeader/page/top.less",
        ]
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("less/features/all/page/top.less")).unwrap(),
        "@newHeader: true;\n@darkMode: true;\n@import 'less/page/top.less';"
    );
}

#[test]
fn prepare_writes_output_file() {
    let temp = project();

    flagstyle(temp.path())
        .args(["prepare", "--output", "tmp/inputs.json"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Wrote 8 inputs (6 variants)"));

    let written = fs::read_to_string(temp.path().join("tmp/inputs.json")).unwrap();
    assert!(written.contains("less/features/darkMode/button.less"));
}

#[test]
fn prepare_fails_without_declarations() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "less/a.less", "");

    flagstyle(temp.path())
        .arg("prepare")
        .assert()
        .failure()
        .stderr(predicate::str::contains("feature flag declarations not found"));
}

#[test]
fn relocate_copies_manifest_stylesheets() {
    let temp = project();
    write(temp.path(), "tmp/vite/button.a1b2.css", ".button{color:red}");
    write(temp.path(), "tmp/vite/script.a1b2.js", "");
    write(
        temp.path(),
        "tmp/vite/manifest.json",
        r#"{
            "less/button.less": { "file": "button.a1b2.css", "isEntry": true, "src": "less/button.less" },
            "script.js": { "file": "script.a1b2.js", "isEntry": true, "src": "script.js" }
        }"#,
    );

    flagstyle(temp.path())
        .args(["relocate", "--summary"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Copied 1 stylesheets"));

    assert_eq!(
        fs::read_to_string(temp.path().join("static/css/button.css")).unwrap(),
        ".button{color:red}"
    );
    assert!(!temp.path().join("static/css/script.css").exists());
}

#[test]
fn relocate_fails_without_manifest() {
    let temp = project();

    flagstyle(temp.path())
        .arg("relocate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("build manifest"));
}

#[test]
fn clean_removes_variants() {
    let temp = project();
    flagstyle(temp.path()).arg("prepare").assert().success();
    assert!(temp.path().join("less/features/darkMode").is_dir());

    flagstyle(temp.path())
        .arg("clean")
        .assert()
        .success()
        .stderr(predicate::str::contains("Removed 6 generated variants"));
    assert!(!temp.path().join("less/features/darkMode").exists());
    assert!(temp.path().join("less/button.less").is_file());
}

#[test]
fn check_reports_counts() {
    let temp = project();

    flagstyle(temp.path())
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("2 flags, 2 styles, 6 variants, 2 direct inputs"));
}

#[test]
fn check_rejects_reserved_flag() {
    let temp = project();
    write(
        temp.path(),
        "config/feature-flags.json",
        r#"{ "featureFlags": { "all": {} }, "styles": [] }"#,
    );

    flagstyle(temp.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("reserved"));
}

#[test]
fn run_requires_a_command() {
    let temp = project();

    flagstyle(temp.path())
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No bundler command given"));
}

#[cfg(unix)]
#[test]
fn run_prepares_builds_and_relocates() {
    let temp = project();
    // Stand-in bundler: records its inputs and emits one stylesheet plus a manifest
    let script = r#"mkdir -p tmp/vite \
        && printf '%s' "$FLAGSTYLE_INPUTS" > tmp/seen.json \
        && printf '.b{}' > tmp/vite/b.css \
        && printf '{"less/features/darkMode/button.less":{"file":"b.css"}}' > tmp/vite/manifest.json"#;

    flagstyle(temp.path())
        .args(["run", "--", "sh", "-c", script])
        .assert()
        .success();

    let seen = fs::read_to_string(temp.path().join("tmp/seen.json")).unwrap();
    assert!(seen.contains("less/features/newHeader/page/top.less"));
    assert_eq!(
        fs::read_to_string(temp.path().join("static/css/features/darkMode/button.css")).unwrap(),
        ".b{}"
    );
}

#[cfg(unix)]
#[test]
fn failing_bundler_skips_relocation() {
    let temp = project();

    flagstyle(temp.path())
        .args(["run", "--", "sh", "-c", "exit 2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exited with code 2"));
    assert!(!temp.path().join("static").exists());
}

#[cfg(unix)]
#[test]
fn run_fails_when_bundler_leaves_no_manifest() {
    let temp = project();

    flagstyle(temp.path())
        .args(["run", "--", "sh", "-c", "true"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("copy-assets"))
        .stderr(predicate::str::contains("Build manifest not found"));

    // Variants were prepared before the bundler ran
    assert!(temp.path().join("less/features/all/button.less").is_file());
    assert!(!temp.path().join("static").exists());
}

#[test]
fn env_overrides_config_file() {
    let temp = project();
    write(temp.path(), "flagstyle.toml", "static_css_dir = \"public/css\"\n");
    write(temp.path(), "tmp/vite/a.css", "a");
    write(temp.path(), "tmp/vite/manifest.json", r#"{ "less/button.less": { "file": "a.css" } }"#);

    flagstyle(temp.path())
        .arg("relocate")
        .env("FLAGSTYLE_STATIC_CSS_DIR", "web/css")
        .assert()
        .success();

    assert!(temp.path().join("web/css/button.css").is_file());
    assert!(!temp.path().join("public/css/button.css").exists());
}
