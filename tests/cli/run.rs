//! Tests for `stagehand run`.

use crate::support::*;

#[cfg(unix)]
#[test]
fn test_run_injects_environment() {
    let t = Test::with_secrets(APP, REQUIRED, STAGE_AND_DEFAULT);

    let output = t.run("prod", &["sh", "-c", "echo $MY_ENV_VAR1-$MY_ENV_VAR2"]);
    assert_success(&output);
    assert_stdout_contains(&output, "a-b");
}

#[cfg(unix)]
#[test]
fn test_run_propagates_exit_code() {
    let t = Test::with_secrets(APP, REQUIRED, STAGE_AND_DEFAULT);

    let output = t.run("prod", &["sh", "-c", "exit 3"]);
    assert_eq!(output.status.code(), Some(3));
}

#[cfg(unix)]
#[test]
fn test_run_does_not_start_on_missing_secret() {
    let t = Test::with_secrets(APP, REQUIRED, "{}");

    let output = t.run("qa", &["sh", "-c", "echo started"]);
    assert_failure(&output);
    assert_stdout_excludes(&output, "started");
    assert_stderr_contains(&output, "missing secrets");
}

#[test]
fn test_run_requires_command() {
    let t = Test::with_secrets(APP, REQUIRED, STAGE_AND_DEFAULT);

    let output = t.cmd().args(["run", "--stage", "prod"]).output().unwrap();
    assert_failure(&output);
}
