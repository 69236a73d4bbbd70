//! CLI integration tests for rpn commands.
//!
//! These tests focus on exit codes and the postfix output itself, not table
//! layout which may change.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to create a temp directory for tests.
fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

/// Helper to get an rpn command.
fn rpn() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("rpn").unwrap()
}

/// Helper to run `rpn` with HOME isolated to the provided directory.
fn rpn_with_home(home: &Path) -> Command {
    let mut cmd = rpn();
    cmd.env("HOME", home);
    cmd.env_remove("RPN_LOG");
    cmd
}

/// Runs `rpn` in `dir` with an empty, separate home directory.
fn rpn_in(dir: &Path, home: &Path) -> Command {
    let mut cmd = rpn_with_home(home);
    cmd.current_dir(dir);
    cmd
}

mod convert {
    use super::*;

    #[test]
    fn prints_postfix_tokens() {
        let dir = temp_dir();
        let home = temp_dir();

        rpn_in(dir.path(), home.path())
            .args(["convert", "(Running OR walking) AND NOT jumps"])
            .assert()
            .success()
            .stdout("run walk OR jump NOT AND\n");
    }

    #[test]
    fn prints_one_line_per_query() {
        let dir = temp_dir();
        let home = temp_dir();

        rpn_in(dir.path(), home.path())
            .args(["convert", "A AND B", "NOT A AND B"])
            .assert()
            .success()
            .stdout("a b AND\na NOT b AND\n");
    }

    #[test]
    fn lenient_by_default() {
        let dir = temp_dir();
        let home = temp_dir();

        rpn_in(dir.path(), home.path())
            .args(["convert", "(A AND B"])
            .assert()
            .success()
            .stdout("a b AND (\n");
    }

    #[test]
    fn empty_query_prints_empty_line() {
        let dir = temp_dir();
        let home = temp_dir();

        rpn_in(dir.path(), home.path())
            .args(["convert", "   "])
            .assert()
            .success()
            .stdout("\n");
    }

    #[test]
    fn strict_rejects_unclosed_paren() {
        let dir = temp_dir();
        let home = temp_dir();

        rpn_in(dir.path(), home.path())
            .args(["convert", "--strict", "(A AND B"])
            .assert()
            .failure()
            .stdout("")
            .stderr(predicate::str::contains("expected closing parenthesis"))
            .stderr(predicate::str::contains("hint:"));
    }

    #[test]
    fn strict_rejects_stray_close_paren() {
        let dir = temp_dir();
        let home = temp_dir();

        rpn_in(dir.path(), home.path())
            .args(["convert", "--strict", "A )"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unexpected closing parenthesis"));
    }

    #[test]
    fn strict_failure_still_prints_other_queries() {
        let dir = temp_dir();
        let home = temp_dir();

        rpn_in(dir.path(), home.path())
            .args(["convert", "--strict", "A OR B", ""])
            .assert()
            .failure()
            .stdout("a b OR\n")
            .stderr(predicate::str::contains("empty query"));
    }

    #[test]
    fn strict_from_config() {
        let dir = temp_dir();
        let home = temp_dir();
        fs::write(dir.path().join(".rpn.toml"), "[query]\nstrict = true\n").unwrap();

        rpn_in(dir.path(), home.path())
            .args(["convert", "A )"])
            .assert()
            .failure();
    }

    #[test]
    fn lenient_flag_overrides_config() {
        let dir = temp_dir();
        let home = temp_dir();
        fs::write(dir.path().join(".rpn.toml"), "[query]\nstrict = true\n").unwrap();

        rpn_in(dir.path(), home.path())
            .args(["convert", "--lenient", "A )"])
            .assert()
            .success()
            .stdout("a\n");
    }

    #[test]
    fn lowercase_operators_are_terms_by_default() {
        let dir = temp_dir();
        let home = temp_dir();

        rpn_in(dir.path(), home.path())
            .args(["convert", "--stemmer", "none", "cats and dogs"])
            .assert()
            .success()
            .stdout("cats and dogs\n");
    }

    #[test]
    fn ignore_case_accepts_lowercase_operators() {
        let dir = temp_dir();
        let home = temp_dir();

        rpn_in(dir.path(), home.path())
            .args(["convert", "-i", "--stemmer", "none", "cats and not dogs"])
            .assert()
            .success()
            .stdout("cats dogs NOT AND\n");
    }

    #[test]
    fn stemmer_none_only_lowercases() {
        let dir = temp_dir();
        let home = temp_dir();

        rpn_in(dir.path(), home.path())
            .args(["convert", "--stemmer", "none", "Running AND Dogs"])
            .assert()
            .success()
            .stdout("running dogs AND\n");
    }

    #[test]
    fn stemmer_from_config() {
        let dir = temp_dir();
        let home = temp_dir();
        fs::write(dir.path().join(".rpn.toml"), "[query]\nstemmer = \"none\"\n").unwrap();

        rpn_in(dir.path(), home.path())
            .args(["convert", "Running"])
            .assert()
            .success()
            .stdout("running\n");
    }

    #[test]
    fn fails_on_unknown_stemmer() {
        let dir = temp_dir();
        let home = temp_dir();

        rpn_in(dir.path(), home.path())
            .args(["convert", "--stemmer", "klingon", "a"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("klingon"));
    }

    #[test]
    fn fails_on_invalid_toml() {
        let dir = temp_dir();
        let home = temp_dir();
        fs::write(dir.path().join(".rpn.toml"), "[query\nstrict =").unwrap();

        rpn_in(dir.path(), home.path())
            .args(["convert", "a"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load configuration"));
    }

    #[test]
    fn requires_a_query() {
        rpn().arg("convert").assert().failure();
    }

    #[test]
    fn json_output_format() {
        let dir = temp_dir();
        let home = temp_dir();

        let assert = rpn_in(dir.path(), home.path())
            .args(["convert", "--json", "A OR B"])
            .assert()
            .success();

        let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
        let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        let queries = json["queries"].as_array().unwrap();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0]["query"], "A OR B");
        assert_eq!(queries[0]["postfix"], serde_json::json!(["a", "b", "OR"]));
        assert!(queries[0].get("error").is_none());
    }

    #[test]
    fn json_includes_error_position() {
        let dir = temp_dir();
        let home = temp_dir();

        let assert = rpn_in(dir.path(), home.path())
            .args(["convert", "--json", "--strict", "A )", "B"])
            .assert()
            .failure();

        let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
        let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        let queries = json["queries"].as_array().unwrap();
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[0]["error"], "unexpected closing parenthesis");
        assert_eq!(queries[0]["position"], 2);
        assert!(queries[0].get("postfix").is_none());
        assert_eq!(queries[1]["postfix"], serde_json::json!(["b"]));
    }
}

mod tokens {
    use super::*;

    #[test]
    fn shows_token_kinds() {
        let dir = temp_dir();
        let home = temp_dir();

        rpn_in(dir.path(), home.path())
            .args(["tokens", "(cats OR dogs) AND NOT birds"])
            .assert()
            .success()
            .stdout(predicate::str::contains("operator"))
            .stdout(predicate::str::contains("group"))
            .stdout(predicate::str::contains("\"cats\""));
    }

    #[test]
    fn terms_are_not_normalized() {
        let dir = temp_dir();
        let home = temp_dir();

        rpn_in(dir.path(), home.path())
            .args(["tokens", "Running"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"Running\""));
    }

    #[test]
    fn ignore_case_classifies_operators() {
        let dir = temp_dir();
        let home = temp_dir();

        rpn_in(dir.path(), home.path())
            .args(["tokens", "-i", "a or b"])
            .assert()
            .success()
            .stdout(predicate::str::contains("operator"))
            .stdout(predicate::str::contains("\"OR\""));
    }

    #[test]
    fn lowercase_keywords_are_terms_by_default() {
        let dir = temp_dir();
        let home = temp_dir();

        rpn_in(dir.path(), home.path())
            .args(["tokens", "a and b"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"and\""))
            .stdout(predicate::str::contains("operator").not());
    }

    #[test]
    fn case_insensitive_operators_from_config() {
        let dir = temp_dir();
        let home = temp_dir();
        fs::write(
            dir.path().join(".rpn.toml"),
            "root = true\n[query]\ncase_insensitive_operators = true\n",
        )
        .unwrap();

        rpn_in(dir.path(), home.path())
            .args(["tokens", "a and b"])
            .assert()
            .success()
            .stdout(predicate::str::contains("operator"))
            .stdout(predicate::str::contains("\"AND\""))
            .stdout(predicate::str::contains("\"and\"").not());

        rpn_in(dir.path(), home.path())
            .args(["convert", "a and b"])
            .assert()
            .success()
            .stdout("a b AND\n");
    }

    #[test]
    fn empty_query_reports_no_tokens() {
        let dir = temp_dir();
        let home = temp_dir();

        rpn_in(dir.path(), home.path())
            .args(["tokens", ""])
            .assert()
            .success()
            .stdout("")
            .stderr(predicate::str::contains("no tokens"));
    }
}

mod init {
    use super::*;

    #[test]
    fn creates_config_file() {
        let dir = temp_dir();
        let home = temp_dir();

        rpn_in(dir.path(), home.path())
            .arg("init")
            .assert()
            .success()
            .stdout(predicate::str::contains("Created"));

        let config_path = dir.path().join(".rpn.toml");
        assert!(config_path.exists());

        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("[query]"));
        assert!(contents.contains("root = false"));
    }

    #[test]
    fn fails_if_config_exists() {
        let dir = temp_dir();
        let home = temp_dir();
        fs::write(dir.path().join(".rpn.toml"), "existing").unwrap();

        rpn_in(dir.path(), home.path())
            .arg("init")
            .assert()
            .failure()
            .stderr(predicate::str::contains("--force"));

        let contents = fs::read_to_string(dir.path().join(".rpn.toml")).unwrap();
        assert_eq!(contents, "existing");
    }

    #[test]
    fn force_overwrites_existing() {
        let dir = temp_dir();
        let home = temp_dir();
        fs::write(dir.path().join(".rpn.toml"), "old content").unwrap();

        rpn_in(dir.path(), home.path())
            .args(["init", "--force"])
            .assert()
            .success();

        let contents = fs::read_to_string(dir.path().join(".rpn.toml")).unwrap();
        assert!(contents.contains("[query]"));
    }

    #[test]
    fn global_writes_to_home() {
        let dir = temp_dir();
        let home = temp_dir();

        rpn_in(dir.path(), home.path())
            .args(["init", "--global"])
            .assert()
            .success();

        assert!(home.path().join(".rpn.toml").exists());
        assert!(!dir.path().join(".rpn.toml").exists());

        let contents = fs::read_to_string(home.path().join(".rpn.toml")).unwrap();
        assert!(!contents.contains("root ="));
    }

    #[test]
    fn succeeds_despite_invalid_parent_config() {
        let dir = temp_dir();
        let home = temp_dir();
        fs::write(dir.path().join(".rpn.toml"), "[query\n").unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();

        rpn_in(&sub, home.path()).arg("init").assert().success();

        assert!(sub.join(".rpn.toml").exists());
    }
}

mod config {
    use super::*;

    #[test]
    fn shows_defaults_without_config() {
        let dir = temp_dir();
        let home = temp_dir();

        rpn_in(dir.path(), home.path())
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("[query]"))
            .stdout(predicate::str::contains("stemmer = \"english\""))
            .stdout(predicate::str::contains("# from").not());
    }

    #[test]
    fn shows_merged_settings_and_sources() {
        let dir = temp_dir();
        let home = temp_dir();
        fs::write(home.path().join(".rpn.toml"), "[query]\nstrict = true\n").unwrap();
        fs::write(
            dir.path().join(".rpn.toml"),
            "[query]\nstemmer = \"french\"\n",
        )
        .unwrap();

        rpn_in(dir.path(), home.path())
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("# from"))
            .stdout(predicate::str::contains("stemmer = \"french\""))
            .stdout(predicate::str::contains("strict = true"));
    }

    #[test]
    fn root_config_stops_discovery() {
        let dir = temp_dir();
        let home = temp_dir();
        fs::write(home.path().join(".rpn.toml"), "[query]\nstrict = true\n").unwrap();
        fs::write(dir.path().join(".rpn.toml"), "root = true\n").unwrap();

        rpn_in(dir.path(), home.path())
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("strict = false"));
    }

    #[test]
    fn fails_on_unknown_stemmer() {
        let dir = temp_dir();
        let home = temp_dir();
        fs::write(
            dir.path().join(".rpn.toml"),
            "[query]\nstemmer = \"klingon\"\n",
        )
        .unwrap();

        rpn_in(dir.path(), home.path())
            .arg("config")
            .assert()
            .failure()
            .stderr(predicate::str::contains("unsupported stemmer language: klingon"));
    }
}
