use assert_cmd::prelude::*;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write(path: &PathBuf, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn write_config(cfg_path: &PathBuf, workspace: &Path, extra: &str) {
    let toml = format!(
        r#"
version = 1
profile = "default"

[profiles.default]
workspace_root = "{ws}"
templates_dir = "{{{{workspace_root}}}}/.templates"
{extra}
"#,
        ws = workspace.display(),
    );
    write(cfg_path, &toml);
}

#[test]
fn new_renders_template_to_output_file() {
    let tmp = tempdir().unwrap();

    // XDG config
    let xdg = tmp.path().join("xdg");
    let cfg_path = xdg.join("filetemplates").join("config.toml");

    // Workspace and templates
    let ws = tmp.path().join("ws");
    let tpl = ws.join(".templates").join("Class.ts");
    write(
        &tpl,
        "// #{filepath}\nexport class #{filename} {}\n// created #{date}, #{year}\n",
    );
    write_config(&cfg_path, &ws, "");

    let out_dir = ws.join("src").join("models");

    let mut cmd = std::process::Command::new(assert_cmd::cargo::cargo_bin!("ftpl"));
    cmd.env("XDG_CONFIG_HOME", &xdg);
    cmd.env("NO_COLOR", "1");
    cmd.args([
        "--profile",
        "default",
        "new",
        "Class.ts",
        "--name",
        "User.ts",
        "--dir",
        out_dir.to_str().unwrap(),
        "--batch",
    ]);

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("OK   ftpl new"))
        .stdout(predicates::str::contains("template: Class.ts"));

    let rendered = fs::read_to_string(out_dir.join("User.ts")).unwrap();
    let today = Local::now().date_naive();

    assert!(rendered.contains("// src/models\n"));
    assert!(rendered.contains("export class User {}"));
    assert!(rendered.contains(&today.format("%Y").to_string()));
    assert!(rendered.contains(&format!("created {}", today.format("%-d %b %Y"))));
}

#[test]
fn new_defaults_to_template_file_name_in_workspace_root() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let ws = tmp.path().join("ws");
    write(&ws.join(".templates").join("README.md"), "# #{filename}\n");
    write_config(&cfg_path, &ws, "");

    std::process::Command::new(assert_cmd::cargo::cargo_bin!("ftpl"))
        .args(["--config", cfg_path.to_str().unwrap(), "new", "README.md", "--batch"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(ws.join("README.md")).unwrap(), "# README\n");
}

#[test]
fn new_refuses_to_overwrite_without_force() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let ws = tmp.path().join("ws");
    write(&ws.join(".templates").join("a.txt"), "fresh #{filename}");
    write(&ws.join("a.txt"), "existing");
    write_config(&cfg_path, &ws, "");

    let base = ["--config", cfg_path.to_str().unwrap(), "new", "a.txt", "--batch"];

    std::process::Command::new(assert_cmd::cargo::cargo_bin!("ftpl"))
        .args(base)
        .assert()
        .failure()
        .stderr(predicates::str::contains("Refusing to overwrite"));
    assert_eq!(fs::read_to_string(ws.join("a.txt")).unwrap(), "existing");

    std::process::Command::new(assert_cmd::cargo::cargo_bin!("ftpl"))
        .args(base)
        .arg("--force")
        .assert()
        .success();
    assert_eq!(fs::read_to_string(ws.join("a.txt")).unwrap(), "fresh a");
}

#[test]
fn new_unknown_template_fails() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let ws = tmp.path().join("ws");
    write(&ws.join(".templates").join("a.txt"), "a");
    write_config(&cfg_path, &ws, "");

    std::process::Command::new(assert_cmd::cargo::cargo_bin!("ftpl"))
        .args(["--config", cfg_path.to_str().unwrap(), "new", "nope.txt", "--batch"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Template not found: nope.txt"));
}

#[test]
fn new_creates_missing_templates_dir_and_reports_no_templates() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let ws = tmp.path().join("ws");
    fs::create_dir_all(&ws).unwrap();
    write_config(&cfg_path, &ws, "");

    std::process::Command::new(assert_cmd::cargo::cargo_bin!("ftpl"))
        .args(["--config", cfg_path.to_str().unwrap(), "new", "--batch"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("No templates found!"));

    assert!(ws.join(".templates").is_dir());
}

#[test]
fn new_without_template_in_batch_mode_fails() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let ws = tmp.path().join("ws");
    write(&ws.join(".templates").join("a.txt"), "a");
    write_config(&cfg_path, &ws, "");

    std::process::Command::new(assert_cmd::cargo::cargo_bin!("ftpl"))
        .args(["--config", cfg_path.to_str().unwrap(), "new", "--batch"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("template name is required"));
}
