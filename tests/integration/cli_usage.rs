//! Command-line usage tests

use crate::helpers::*;

#[test]
fn test_plain_call() {
    let sandbox = Sandbox::new();
    assert_outcome(&sandbox.check(&[]), 1, "Missing subcommand");
}

#[test]
fn test_unknown_subcommand() {
    let sandbox = Sandbox::new();
    let result = sandbox.check(&["status", "-type", "liveness"]);

    assert_eq!(result.code, 1);
    assert!(!result.stdout.is_empty(), "usage should go to stdout");
}

#[test]
fn test_missing_type() {
    let sandbox = Sandbox::new();
    assert_eq!(sandbox.check(&["run"]).code, 1);
    assert_eq!(sandbox.check(&["unlock"]).code, 1);
}

#[test]
fn test_lock_requires_state() {
    let sandbox = Sandbox::new();
    let result = sandbox.check(&["lock", "-type", "liveness"]);

    assert_eq!(result.code, 1);
    assert!(!sandbox.lock_path("liveness").exists());
}

#[test]
fn test_invalid_type() {
    let sandbox = Sandbox::new();
    assert_outcome(&sandbox.check(&["run", "-type", "startup"]), 1, "Not a type");
}

#[test]
fn test_invalid_state() {
    let sandbox = Sandbox::new();
    let result = sandbox.check(&["lock", "-type", "readiness", "-state", "maybe"]);

    assert_outcome(&result, 1, "Not a state");
    assert!(!sandbox.lock_path("readiness").exists());
}

#[test]
fn test_help() {
    let sandbox = Sandbox::new();
    let result = sandbox.check(&["--help"]);

    assert_outcome(&result, 0, "lock");
}
