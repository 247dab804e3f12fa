//! Integration tests for userctl

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;

    /// Port 9 (discard) refuses connections immediately on loopback
    const DEAD_API: &str = "http://127.0.0.1:9";

    fn userctl() -> Command {
        cargo_bin_cmd!("userctl")
    }

    #[test]
    fn help_displays() {
        userctl()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("manage users on a REST backend"));
    }

    #[test]
    fn version_displays() {
        userctl()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("userctl"));
    }

    #[test]
    fn config_path() {
        userctl()
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show() {
        userctl()
            .args(["--no-local", "config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[general]"))
            .stdout(predicate::str::contains("base_url"));
    }

    #[test]
    fn list_fails_against_unreachable_api() {
        userctl()
            .args(["--no-local", "--api-url", DEAD_API, "list", "--format", "plain"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error:"))
            .stderr(predicate::str::contains("Hint:"));
    }

    #[test]
    fn show_fails_against_unreachable_api() {
        userctl()
            .args(["--no-local", "--api-url", DEAD_API, "show", "1"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error:"));
    }

    #[test]
    fn add_validates_before_any_network_call() {
        // Only an email is given; the missing name must fail validation
        userctl()
            .args(["--no-local", "--api-url", DEAD_API, "add", "--email", "a@b.com"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid name"));
    }

    #[test]
    fn add_rejects_malformed_email() {
        userctl()
            .args([
                "--no-local",
                "--api-url",
                DEAD_API,
                "add",
                "--name",
                "Ana",
                "--email",
                "not-an-address",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid email"));
    }

    #[test]
    fn delete_requires_an_id() {
        userctl().arg("delete").assert().failure();
    }

    #[test]
    fn rejects_non_http_api_url() {
        userctl()
            .args(["--no-local", "--api-url", "localhost:3000", "list"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid API base URL"));
    }

    #[test]
    fn init_creates_local_config() {
        let temp = tempfile::TempDir::new().unwrap();
        let target = temp.path().join(".userctl.toml");

        userctl()
            .args(["init", "--path"])
            .arg(temp.path())
            .assert()
            .success();
        assert!(target.exists());

        // A second init without --force leaves the file alone
        userctl()
            .args(["init", "--path"])
            .arg(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("already exists"));
    }

    #[test]
    fn config_set_local_writes_project_file() {
        let temp = tempfile::TempDir::new().unwrap();

        userctl()
            .current_dir(temp.path())
            .args(["config", "set", "api.base_url", "http://localhost:8080", "--local"])
            .assert()
            .success();

        let written = std::fs::read_to_string(temp.path().join(".userctl.toml")).unwrap();
        assert!(written.contains("http://localhost:8080"));
    }

    #[test]
    fn config_set_local_rejects_unknown_key() {
        let temp = tempfile::TempDir::new().unwrap();

        userctl()
            .current_dir(temp.path())
            .args(["config", "set", "api.nope", "x", "--local"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown config key"));
    }
}
