//! Tests for `stagehand check`.

use crate::support::*;

#[test]
fn test_check_reports_source_without_values() {
    let t = Test::with_secrets(APP, REQUIRED, STAGE_AND_DEFAULT);

    let output = t.check("prod");
    assert_success(&output);
    assert_stdout_contains(&output, "app1/prod (stage)");
    assert_stdout_contains(&output, "MY_ENV_VAR1");
    assert_stdout_contains(&output, "MY_ENV_VAR2");
    assert_stdout_excludes(&output, "=a");
}

#[test]
fn test_check_reports_default_origin() {
    let t = Test::with_secrets(APP, REQUIRED, DEFAULT_ONLY);

    let output = t.check("dev");
    assert_success(&output);
    assert_stdout_contains(&output, "app1/default (default)");
}

#[test]
fn test_check_json() {
    let t = Test::with_secrets(APP, REQUIRED, DEFAULT_ONLY);

    let output = t
        .cmd()
        .args(["check", "--stage", "dev", "--json"])
        .output()
        .unwrap();
    assert_success(&output);

    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["app"], "app1");
    assert_eq!(report["stage"], "dev");
    assert_eq!(report["store"], "file");
    assert_eq!(report["source"], "app1/default");
    assert_eq!(report["origin"], "default");
    assert_eq!(report["keys"], serde_json::json!(["MY_ENV_VAR1", "MY_ENV_VAR2"]));
}

#[test]
fn test_check_warns_without_required_keys() {
    let t = Test::with_secrets(APP, &[], STAGE_AND_DEFAULT);

    let output = t.check("prod");
    assert_success(&output);
    assert_stderr_contains(&output, "no required keys configured");
}

#[test]
fn test_check_missing_key_fails() {
    let t = Test::with_secrets(APP, REQUIRED, MISSING_KEY);

    let output = t.check("prod");
    assert_failure(&output);
    assert_stderr_contains(&output, "MY_ENV_VAR2");
}
