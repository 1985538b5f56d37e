//! CLI integration tests for worktrack admin commands.
//!
//! Each test uses an isolated temp directory for the database, ensuring tests
//! can run in parallel safely.

#![allow(deprecated)] // Command::cargo_bin deprecation only affects custom build dirs

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_fs::TempDir;
use predicates::prelude::*;
use worktrack::auth::PasswordHasher;
use worktrack::store::{SqliteStore, Store};

struct TestContext {
    temp_dir: TempDir,
}

impl TestContext {
    fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    fn data_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    fn data_dir_str(&self) -> String {
        self.data_dir().to_string_lossy().to_string()
    }

    fn db_path(&self) -> PathBuf {
        self.data_dir().join("worktrack.db")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("worktrack").expect("failed to find binary");
        cmd.env("NO_COLOR", "1");
        cmd
    }

    fn init(&self, extra: &[&str]) -> assert_cmd::assert::Assert {
        self.cmd()
            .args(["admin", "init", "--data-dir", &self.data_dir_str(), "--non-interactive"])
            .args(extra)
            .assert()
    }

    fn store(&self) -> SqliteStore {
        SqliteStore::new(self.db_path()).expect("open store")
    }
}

#[test]
fn test_init_creates_database_and_prints_generated_password() {
    let ctx = TestContext::new();

    ctx.init(&[])
        .success()
        .stdout(predicate::str::contains("Initialized database"))
        .stdout(predicate::str::contains("admin@mydb"))
        .stdout(predicate::str::contains("won't be shown again"));

    assert!(ctx.db_path().exists());

    let store = ctx.store();
    assert!(store.get_vacation_project().unwrap().is_some());
    assert_eq!(store.list_roles().unwrap().len(), 3);
    assert!(store.get_user_by_mail("admin@mydb").unwrap().is_some());
}

#[test]
fn test_init_with_explicit_credentials() {
    let ctx = TestContext::new();

    ctx.init(&["--admin-mail", "boss@corp", "--admin-password", "hunter2"])
        .success()
        .stdout(predicate::str::contains("won't be shown again").not());

    let user = ctx.store().get_user_by_mail("boss@corp").unwrap().unwrap();
    assert!(PasswordHasher::new().verify("hunter2", &user.password).unwrap());
}

#[test]
fn test_init_twice_fails_without_fresh() {
    let ctx = TestContext::new();
    ctx.init(&["--admin-password", "first"]).success();

    ctx.init(&["--admin-password", "second"])
        .failure()
        .stderr(predicate::str::contains("already initialized"));

    let user = ctx.store().get_user_by_mail("admin@mydb").unwrap().unwrap();
    assert!(PasswordHasher::new().verify("first", &user.password).unwrap());
}

#[test]
fn test_init_fresh_resets_data() {
    let ctx = TestContext::new();
    ctx.init(&["--admin-password", "first"]).success();

    {
        let store = ctx.store();
        let mut project = store.get_vacation_project().unwrap().unwrap();
        project.project_id = 0;
        project.project_name = "Apollo".to_string();
        store.create_project(&project).unwrap();
        assert_eq!(store.list_projects().unwrap().len(), 2);
    }

    ctx.init(&["--admin-password", "second", "--fresh"]).success();

    let store = ctx.store();
    assert_eq!(store.list_projects().unwrap().len(), 1);
    let user = store.get_user_by_mail("admin@mydb").unwrap().unwrap();
    assert!(PasswordHasher::new().verify("second", &user.password).unwrap());
}

#[test]
fn test_serve_refuses_uninitialized_database() {
    let ctx = TestContext::new();

    ctx.cmd()
        .args(["serve", "--data-dir", &ctx.data_dir_str(), "--port", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"));
}

#[test]
fn test_serve_rejects_invalid_config_file() {
    let ctx = TestContext::new();
    let config = ctx.data_dir().join("worktrack.toml");
    std::fs::write(&config, "token_ttl_hours = -1\n").unwrap();

    ctx.cmd()
        .args(["serve", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("token_ttl_hours"));
}

#[test]
fn test_serve_rejects_oversized_token_ttl() {
    let ctx = TestContext::new();
    ctx.init(&["--admin-password", "pw"]).success();

    ctx.cmd()
        .args(["serve", "--data-dir", &ctx.data_dir_str(), "--port", "0"])
        .args(["--token-ttl-hours", "9223372036854775807"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("token_ttl_hours"));
}
