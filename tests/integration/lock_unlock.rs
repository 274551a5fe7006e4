//! Locking and unlocking checks

use crate::helpers::*;
use std::fs;

#[test]
fn test_liveness_locked_failure() {
    let sandbox = Sandbox::new().env("LIVENESS_CHECK", "true");

    assert_eq!(sandbox.check(&["lock", "-type", "liveness", "-state", "failure"]).code, 0);
    assert_outcome(&sandbox.check(&["run", "-type", "liveness"]), 1, "locked");
}

#[test]
fn test_liveness_locked_success() {
    let sandbox = Sandbox::new().env("LIVENESS_CHECK", "false");

    assert_eq!(sandbox.check(&["lock", "-type", "liveness", "-state", "success"]).code, 0);
    assert_outcome(&sandbox.check(&["run", "-type", "liveness"]), 0, "locked");
}

#[test]
fn test_readiness_locked_failure() {
    let sandbox = Sandbox::new().env("READINESS_CHECK", "true");

    assert_eq!(sandbox.check(&["lock", "-type", "Readiness", "-state", "failure"]).code, 0);
    assert_outcome(&sandbox.check(&["run", "-type", "Readiness"]), 1, "locked");
}

#[test]
fn test_readiness_locked_success() {
    let sandbox = Sandbox::new().env("READINESS_CHECK", "false");

    assert_eq!(sandbox.check(&["lock", "-type", "Readiness", "-state", "success"]).code, 0);
    assert_outcome(&sandbox.check(&["run", "-type", "Readiness"]), 0, "locked");
}

#[test]
fn test_lock_applies_without_command() {
    let sandbox = Sandbox::new();

    sandbox.check(&["lock", "-type", "readiness", "-state", "success"]);
    assert_outcome(&sandbox.check(&["run", "-type", "readiness"]), 0, "locked at success");
}

#[test]
fn test_lock_file_content() {
    let sandbox = Sandbox::new();

    sandbox.check(&["lock", "-type", "liveness", "-state", "Failure"]);
    assert_eq!(
        fs::read_to_string(sandbox.lock_path("liveness")).unwrap(),
        "FAILURE"
    );

    // Overwrite
    sandbox.check(&["lock", "-type", "liveness", "-state", "success"]);
    assert_eq!(
        fs::read_to_string(sandbox.lock_path("liveness")).unwrap(),
        "SUCCESS"
    );
    assert!(!sandbox.lock_path("readiness").exists());
}

#[test]
fn test_liveness_unlocked_failure() {
    let sandbox = Sandbox::new().env("LIVENESS_CHECK", "true");

    sandbox.check(&["lock", "-type", "liveness", "-state", "failure"]);
    assert_eq!(sandbox.check(&["unlock", "-type", "liveness"]).code, 0);
    assert!(!sandbox.lock_path("liveness").exists());
    assert_outcome(&sandbox.check(&["run", "-type", "liveness"]), 0, "SUCCESS");
}

#[test]
fn test_readiness_unlocked_success() {
    let sandbox = Sandbox::new().env("READINESS_CHECK", "false");

    sandbox.check(&["lock", "-type", "Readiness", "-state", "success"]);
    assert_eq!(sandbox.check(&["unlock", "-type", "Readiness"]).code, 0);
    assert_outcome(&sandbox.check(&["run", "-type", "Readiness"]), 1, "FAILURE");
}

#[test]
fn test_unlock_without_lock() {
    let sandbox = Sandbox::new();
    assert_outcome(&sandbox.check(&["unlock", "-type", "readiness"]), 0, "not locked");
}

#[test]
fn test_malformed_lock() {
    let sandbox = Sandbox::new().env("LIVENESS_CHECK", "true");
    sandbox.write_lock("liveness", "MAYBE");

    assert_outcome(&sandbox.check(&["run", "-type", "liveness"]), 254, "Invalid value");
}

#[test]
fn test_hand_written_lock_with_newline() {
    let sandbox = Sandbox::new().env("LIVENESS_CHECK", "true");
    sandbox.write_lock("liveness", "failure\n");

    assert_outcome(&sandbox.check(&["run", "-type", "liveness"]), 1, "locked at failure");
}

#[test]
fn test_lock_into_missing_dir_fails() {
    let sandbox = Sandbox::new().env("CHECK_LOCK_DIR", "/nonexistent/k8s-check-locks");
    let result = sandbox.check(&["lock", "-type", "liveness", "-state", "failure"]);

    assert_outcome(&result, 1, "failed to write lock");
}

#[test]
fn test_lock_survives_bad_log_format() {
    let sandbox = Sandbox::new();
    assert_eq!(sandbox.check(&["lock", "-type", "liveness", "-state", "success"]).code, 0);

    let sandbox = sandbox.env("LOG_FORMAT", "xml");
    let result = sandbox.check(&["run", "-type", "liveness"]);

    assert_outcome(&result, 0, "locked at success");
    assert!(result.stderr.contains("Invalid LOG_FORMAT"));
}

#[test]
fn test_unreadable_lock_is_not_bypassed() {
    let sandbox = Sandbox::new().env("LIVENESS_CHECK", "true");
    fs::create_dir(sandbox.lock_path("liveness")).unwrap();

    assert_outcome(&sandbox.check(&["run", "-type", "liveness"]), 254, "Invalid lock");
}
