//! End-to-end tests for the `herald` binary.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A `herald` command isolated from the user's config and `.env`.
fn herald(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("herald");
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("HERALD_RENDER__STRICT")
        .env_remove("HERALD_OUTPUT__FORMAT");
    cmd
}

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    herald(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("compose"))
        .stdout(predicate::str::contains("split"));
}

#[test]
fn version_flag() {
    let home = TempDir::new().unwrap();
    herald(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn render_with_set_values() {
    let home = TempDir::new().unwrap();
    herald(&home)
        .args(["render", "Hi ${name}, you are ${age}", "-s", "name=David", "-s", "age=95"])
        .assert()
        .success()
        .stdout("Hi David, you are 95\n");
}

#[test]
fn render_nested_and_dollar_prefixed() {
    let home = TempDir::new().unwrap();
    herald(&home)
        .args([
            "render",
            "in${t}nal $${leave}} is $${cost} and ${${double}}",
            "-s",
            "t=ter",
            "-s",
            "leave=foo",
            "-s",
            "cost=45",
            "-s",
            "double=woot",
        ])
        .assert()
        .success()
        .stdout("internal $foo} is $45 and ${woot}\n");
}

#[test]
fn render_leaves_missing_placeholder_and_warns() {
    let home = TempDir::new().unwrap();
    herald(&home)
        .args(["render", "Hi ${name}"])
        .assert()
        .success()
        .stdout("Hi ${name}\n")
        .stderr(predicate::str::contains("no value for: name"));
}

#[test]
fn render_unterminated_prints_template_unchanged() {
    let home = TempDir::new().unwrap();
    herald(&home)
        .args(["render", "Hi ${name", "-s", "name=x"])
        .assert()
        .success()
        .stdout("Hi ${name\n");
}

#[test]
fn strict_render_fails_with_user_error() {
    let home = TempDir::new().unwrap();
    herald(&home)
        .args(["render", "${a}${b}", "-s", "a=1", "--strict"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no value for placeholder(s): b"))
        .stderr(predicate::str::contains("--set b="));
}

#[test]
fn render_reads_stdin_and_value_files() {
    let home = TempDir::new().unwrap();
    let values = home.path().join("values.toml");
    fs::write(&values, "name = \"Luz\"\nage = 3\n").unwrap();

    herald(&home)
        .args(["render", "-d"])
        .arg(&values)
        .write_stdin("${name} is ${age}\n")
        .assert()
        .success()
        .stdout("Luz is 3\n");
}

#[test]
fn missing_values_file_is_not_found() {
    let home = TempDir::new().unwrap();
    herald(&home)
        .args(["render", "x", "-d", "nope.json"])
        .assert()
        .code(3);
}

#[test]
fn render_json_report() {
    let home = TempDir::new().unwrap();
    herald(&home)
        .args(["--output-format", "json", "render", "${a} ${b}", "-s", "a=1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"output\": \"1 ${b}\""))
        .stdout(predicate::str::contains("\"fell_back\": false"));
}

#[test]
fn compose_then_split() {
    let home = TempDir::new().unwrap();
    let composed = herald(&home)
        .args(["compose", "We have a new baby.", "-p", "{\"fake\": 4}"])
        .assert()
        .success()
        .stdout("{\"fake\": 4}\n~~~\nWe have a new baby.\n")
        .get_output()
        .stdout
        .clone();

    herald(&home)
        .args(["--output-format", "json", "split"])
        .write_stdin(composed)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"payload\": \"{\\\"fake\\\": 4}\""))
        .stdout(predicate::str::contains("\"display_text\": \"We have a new baby.\""));
}

#[test]
fn split_without_delimiter_fails() {
    let home = TempDir::new().unwrap();
    herald(&home)
        .args(["split", "just text"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("delimiter"));
}

#[test]
fn placeholders_listed_once() {
    let home = TempDir::new().unwrap();
    herald(&home)
        .args(["--quiet", "placeholders", "${b} ${a} ${b}"])
        .assert()
        .success()
        .stdout("b\na\n");
}

#[test]
fn plain_placeholders_output_is_names_only() {
    let home = TempDir::new().unwrap();
    herald(&home)
        .args(["--output-format", "plain", "placeholders", "${b} ${a} ${b}"])
        .assert()
        .success()
        .stdout("b\na\n");

    herald(&home)
        .args(["--output-format", "plain", "placeholders", "no markers here"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn placeholders_rejects_unterminated() {
    let home = TempDir::new().unwrap();
    herald(&home)
        .args(["placeholders", "oops ${"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unterminated"));
}

#[test]
fn config_file_enables_strict() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("herald.toml");
    fs::write(&config, "[render]\nstrict = true\n").unwrap();

    herald(&home)
        .arg("--config")
        .arg(&config)
        .args(["render", "${missing}"])
        .assert()
        .code(2);
}

#[test]
fn missing_explicit_config_exits_four() {
    let home = TempDir::new().unwrap();
    herald(&home)
        .args(["--config", "absent.toml", "config", "list"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"))
        .stderr(predicate::str::contains("herald config path"));
}

#[test]
fn env_enables_strict() {
    let home = TempDir::new().unwrap();
    herald(&home)
        .env("HERALD_RENDER__STRICT", "true")
        .args(["render", "${missing}"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no value for placeholder(s): missing"));
}

#[test]
fn env_overrides_config_file() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("herald.toml");
    fs::write(&config, "[render]\nstrict = true\n").unwrap();

    herald(&home)
        .env("HERALD_RENDER__STRICT", "false")
        .arg("--config")
        .arg(&config)
        .args(["render", "${missing}"])
        .assert()
        .success()
        .stdout("${missing}\n");
}

#[test]
fn env_selects_output_format() {
    let home = TempDir::new().unwrap();
    herald(&home)
        .env("HERALD_OUTPUT__FORMAT", "json")
        .args(["render", "${a}", "-s", "a=1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"output\": \"1\""));
}

#[test]
fn no_color_env_accepts_conventional_values() {
    let home = TempDir::new().unwrap();
    for value in ["1", "true", "0", ""] {
        herald(&home)
            .env("NO_COLOR", value)
            .args(["render", "Hi ${name}", "-s", "name=x"])
            .assert()
            .success()
            .stdout("Hi x\n");
    }
}
