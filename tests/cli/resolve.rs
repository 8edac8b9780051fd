//! Tests for `stagehand resolve`.

use crate::support::*;

#[test]
fn test_resolve_stage_secret() {
    let t = Test::with_secrets(APP, REQUIRED, STAGE_AND_DEFAULT);

    let output = t.resolve("prod");
    assert_success(&output);
    assert_eq!(stdout(&output), "MY_ENV_VAR1=a\nMY_ENV_VAR2=b\n");
    assert_stderr_contains(&output, "app1/prod");
}

#[test]
fn test_resolve_falls_back_to_default() {
    let t = Test::with_secrets(APP, REQUIRED, DEFAULT_ONLY);

    let output = t.resolve("dev");
    assert_success(&output);
    assert_eq!(stdout(&output), "MY_ENV_VAR1=x\nMY_ENV_VAR2=y\n");
    assert_stderr_contains(&output, "app1/default");
}

#[test]
fn test_resolve_missing_secret() {
    let t = Test::with_secrets(APP, REQUIRED, "{}");

    let output = t.resolve("qa");
    assert_failure(&output);
    assert_stderr_contains(&output, "missing secrets: app1/qa or app1/default");
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_resolve_missing_key() {
    let t = Test::with_secrets(APP, REQUIRED, MISSING_KEY);

    let output = t.resolve("prod");
    assert_failure(&output);
    assert_stderr_contains(&output, "missing key MY_ENV_VAR2");
    assert_stdout_excludes(&output, "MY_ENV_VAR1");
}

#[test]
fn test_resolve_malformed_stage_secret_falls_back() {
    let t = Test::with_secrets(APP, REQUIRED, MALFORMED_STAGE);

    let output = t.resolve("prod");
    assert_success(&output);
    assert_eq!(stdout(&output), "MY_ENV_VAR1=x\nMY_ENV_VAR2=y\n");
}

#[test]
fn test_resolve_malformed_secret_is_logged() {
    let t = Test::with_secrets(APP, REQUIRED, MALFORMED_STAGE);

    let output = t.resolve("prod");
    assert_success(&output);
    assert_stderr_contains(&output, "not a JSON object");
}

#[test]
fn test_resolve_without_required_keys_is_verbatim() {
    let t = Test::with_secrets(APP, &[], SPECIAL_VALUES);

    let output = t.resolve_as("prod", "json");
    assert_success(&output);

    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(parsed["GREETING"], "hello world");
    assert_eq!(parsed["QUOTE"], "it's \"quoted\"");
    assert_eq!(parsed.as_object().unwrap().len(), 3);
}

#[test]
fn test_resolve_dotenv_quotes_values() {
    let t = Test::with_secrets(APP, &[], SPECIAL_VALUES);

    let output = t.resolve("prod");
    assert_success(&output);
    assert_stdout_contains(&output, "GREETING=\"hello world\"\n");
    assert_stdout_contains(&output, "QUOTE=\"it's \\\"quoted\\\"\"\n");
}

#[test]
fn test_resolve_shell_format() {
    let t = Test::with_secrets(APP, REQUIRED, STAGE_AND_DEFAULT);

    let output = t.resolve_as("prod", "shell");
    assert_success(&output);
    assert_eq!(
        stdout(&output),
        "export MY_ENV_VAR1='a'\nexport MY_ENV_VAR2='b'\n"
    );
}

#[test]
fn test_resolve_to_file() {
    let t = Test::with_secrets(APP, REQUIRED, STAGE_AND_DEFAULT);

    let output = t
        .cmd()
        .args(["resolve", "--stage", "prod", "--output", ".env"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "wrote 2 keys");
    assert_eq!(t.read(".env"), "MY_ENV_VAR1=a\nMY_ENV_VAR2=b\n");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(t.dir.path().join(".env"))
            .unwrap()
            .permissions()
            .mode()
            & 0o777;
        assert_eq!(mode, 0o600);
    }
}

#[test]
fn test_resolve_stage_from_env_var() {
    let t = Test::with_secrets(APP, REQUIRED, STAGE_AND_DEFAULT);

    let output = t
        .cmd()
        .env("STAGEHAND_STAGE", "prod")
        .arg("resolve")
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "MY_ENV_VAR1=a");
}

#[test]
fn test_resolve_cli_overrides_without_config() {
    let t = Test::new();
    t.write_secrets(STAGE_AND_DEFAULT);

    let output = t
        .cmd()
        .args([
            "resolve",
            "--stage",
            "staging",
            "--app",
            APP,
            "--store-file",
            SECRETS_FILE,
            "--require",
            "MY_ENV_VAR2",
        ])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output), "MY_ENV_VAR2=y\n");
}

#[test]
fn test_resolve_is_repeatable() {
    let t = Test::with_secrets(APP, REQUIRED, STAGE_AND_DEFAULT);

    let first = stdout(&t.resolve("prod"));
    let second = stdout(&t.resolve("prod"));
    assert_eq!(first, second);
}
