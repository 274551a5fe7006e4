//! End-to-end sandbox lifecycle

use crate::helpers::*;

#[test]
fn test_lock_unlock_cycle() {
    let sandbox = Sandbox::new().env("LIVENESS_CHECK", "true");

    assert_outcome(&sandbox.check(&["run", "-type", "liveness"]), 0, "SUCCESS");

    assert_eq!(sandbox.check(&["lock", "-type", "liveness", "-state", "failure"]).code, 0);
    assert_outcome(&sandbox.check(&["run", "-type", "liveness"]), 1, "locked");

    assert_eq!(sandbox.check(&["unlock", "-type", "liveness"]).code, 0);
    assert_outcome(&sandbox.check(&["run", "-type", "liveness"]), 0, "SUCCESS");
}

#[test]
fn test_checks_lock_independently() {
    let sandbox = Sandbox::new()
        .env("LIVENESS_CHECK", "true")
        .env("READINESS_CHECK", "true");

    sandbox.check(&["lock", "--type", "readiness", "--state", "failure"]);

    assert_eq!(sandbox.check(&["run", "-type", "liveness"]).code, 0);
    assert_eq!(sandbox.check(&["run", "-type", "readiness"]).code, 1);
}

#[test]
fn test_json_logs_stay_off_stdout() {
    let sandbox = Sandbox::new()
        .env("LIVENESS_CHECK", "true")
        .env("LOG_LEVEL", "debug")
        .env("LOG_FORMAT", "json");
    let result = sandbox.check(&["run", "-type", "liveness"]);

    assert_outcome(&result, 0, "SUCCESS");
    assert!(!result.stdout.contains("\"level\""));
    let first = result.stderr.lines().next().expect("debug logs on stderr");
    let entry: serde_json::Value = serde_json::from_str(first).expect("JSON log line");
    assert_eq!(entry["ctx"]["service"], "k8s_check");
}

#[test]
fn test_closed_stdout_keeps_exit_code() {
    let sandbox = Sandbox::new().env("LIVENESS_CHECK", "true");

    sandbox.check(&["lock", "-type", "liveness", "-state", "failure"]);
    assert_eq!(sandbox.check_with_closed_stdout(&["run", "-type", "liveness"]), 1);

    sandbox.check(&["unlock", "-type", "liveness"]);
    assert_eq!(sandbox.check_with_closed_stdout(&["run", "-type", "liveness"]), 0);
}
