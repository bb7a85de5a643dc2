//! Integration tests for the barrelgen binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn barrelgen() -> Command {
    Command::cargo_bin("barrelgen").unwrap()
}

/// A project layout with one source root, two candidate directories, and a
/// start directory carrying a manifest.
fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::create_dir_all(root.join("shared/widgets")).unwrap();
    fs::create_dir_all(root.join("shared/nav")).unwrap();
    fs::create_dir_all(root.join("app")).unwrap();
    fs::write(root.join("shared/widgets/widgets.tsx"), "").unwrap();
    fs::write(root.join("shared/widgets/widgets.scss"), "").unwrap();
    fs::write(root.join("shared/nav/nav.tsx"), "").unwrap();
    fs::write(root.join("app/index.json"), "{}").unwrap();

    fs::write(
        root.join("barrelgen.toml"),
        r#"
sources = ["shared"]
start_dirs = ["app"]
basename = "index"

[generators]
".tsx" = "import './{path}';\n"
"#,
    )
    .unwrap();

    temp
}

#[test]
fn help_flag_shows_usage() {
    barrelgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("barrel"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn version_flag_matches_cargo() {
    barrelgen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_shows_help_and_fails() {
    barrelgen().assert().failure();
}

#[test]
fn generate_writes_barrel_files() {
    let temp = project();

    barrelgen()
        .current_dir(temp.path())
        .arg("generate")
        .assert()
        .success();

    let barrel = fs::read_to_string(temp.path().join("app/index.tsx")).unwrap();
    assert!(barrel.contains("nav/nav.tsx"));
    assert!(barrel.contains("widgets/widgets.tsx"));
    // No generator registered for .scss, so no file appears for it.
    assert!(!temp.path().join("app/index.scss").exists());
}

#[test]
fn generate_respects_manifest_exclusions() {
    let temp = project();
    fs::write(
        temp.path().join("app/index.json"),
        r#"{ "exclude": ["nav"] }"#,
    )
    .unwrap();

    barrelgen()
        .current_dir(temp.path())
        .arg("generate")
        .assert()
        .success();

    let barrel = fs::read_to_string(temp.path().join("app/index.tsx")).unwrap();
    assert!(barrel.contains("widgets"));
    assert!(!barrel.contains("nav"));
}

#[test]
fn dry_run_writes_nothing() {
    let temp = project();

    barrelgen()
        .current_dir(temp.path())
        .args(["generate", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("index.tsx"));

    assert!(!temp.path().join("app/index.tsx").exists());
}

#[test]
fn missing_manifest_skips_the_root_but_exits_zero() {
    let temp = project();
    fs::remove_file(temp.path().join("app/index.json")).unwrap();

    barrelgen()
        .current_dir(temp.path())
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped"));

    assert!(!temp.path().join("app/index.tsx").exists());
}

#[test]
fn generate_without_config_is_a_user_error() {
    let temp = TempDir::new().unwrap();

    barrelgen()
        .current_dir(temp.path())
        .arg("generate")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn explicit_config_path_must_exist() {
    let temp = TempDir::new().unwrap();

    barrelgen()
        .current_dir(temp.path())
        .args(["generate", "--config", "absent.toml"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn init_creates_a_loadable_config() {
    let temp = TempDir::new().unwrap();

    barrelgen()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .success();

    assert!(temp.path().join("barrelgen.toml").exists());

    // Running init again without --force fails; with --force it succeeds.
    barrelgen()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .failure()
        .code(4);
    barrelgen()
        .current_dir(temp.path())
        .args(["init", "--force"])
        .assert()
        .success();
}

#[test]
fn completions_emit_a_script() {
    barrelgen()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("barrelgen"));
}

#[test]
fn empty_candidate_extension_still_writes_the_file() {
    let temp = project();
    // Register a generator for an extension no candidate contains.
    fs::write(
        temp.path().join("barrelgen.toml"),
        r#"
sources = ["shared"]
start_dirs = ["app"]

[generators]
".vue" = "import '{path}';\n"
"#,
    )
    .unwrap();

    barrelgen()
        .current_dir(temp.path())
        .arg("generate")
        .assert()
        .success();

    let barrel = temp.path().join("app/index.vue");
    assert!(barrel.exists());
    assert_eq!(fs::read_to_string(barrel).unwrap(), "");
}

#[test]
fn manifest_exclusion_applies_to_generated_json_name() {
    // A .json generator writes to index.generate.json, never to the manifest
    // path itself.
    let temp = project();
    fs::write(
        temp.path().join("barrelgen.toml"),
        r#"
sources = ["shared"]
start_dirs = ["app"]

[generators]
".json" = "require('{path}');\n"
"#,
    )
    .unwrap();
    fs::write(temp.path().join("shared/widgets/widgets.json"), "{}").unwrap();

    barrelgen()
        .current_dir(temp.path())
        .arg("generate")
        .assert()
        .success();

    assert!(temp.path().join("app/index.generate.json").exists());
    assert_eq!(
        fs::read_to_string(temp.path().join("app/index.json")).unwrap(),
        "{}",
        "the manifest must be left untouched"
    );
}

#[test]
fn quiet_suppresses_success_output() {
    let temp = project();

    barrelgen()
        .current_dir(temp.path())
        .args(["--quiet", "generate"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
