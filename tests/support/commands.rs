//! Command helper methods for Test.

use super::{Test, SECRETS_FILE};
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a stagehand command running in the project directory.
    ///
    /// Stage, app and log variables from the outer environment are cleared
    /// and color is disabled so output can be matched literally.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("stagehand").expect("failed to find stagehand binary");
        cmd.current_dir(self.dir.path());
        cmd.env_remove("STAGEHAND_STAGE");
        cmd.env_remove("STAGEHAND_APP");
        cmd.env_remove("STAGEHAND_LOG");
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// Shortcut for `stagehand init` against the local secrets file.
    pub fn init_cmd(&self, app: &str, required: &[&str]) -> Output {
        let mut cmd = self.cmd();
        cmd.args(["init", "--app", app, "--store-file", SECRETS_FILE]);
        for key in required {
            cmd.args(["--require", key]);
        }
        cmd.output().expect("failed to run stagehand init")
    }

    /// Shortcut for `stagehand resolve --stage <stage>`.
    pub fn resolve(&self, stage: &str) -> Output {
        self.cmd()
            .args(["resolve", "--stage", stage])
            .output()
            .expect("failed to run stagehand resolve")
    }

    /// Shortcut for `stagehand resolve --stage <stage> --format <format>`.
    pub fn resolve_as(&self, stage: &str, format: &str) -> Output {
        self.cmd()
            .args(["resolve", "--stage", stage, "--format", format])
            .output()
            .expect("failed to run stagehand resolve")
    }

    /// Shortcut for `stagehand check --stage <stage>`.
    pub fn check(&self, stage: &str) -> Output {
        self.cmd()
            .args(["check", "--stage", stage])
            .output()
            .expect("failed to run stagehand check")
    }

    /// Shortcut for `stagehand run --stage <stage> -- <command...>`.
    pub fn run(&self, stage: &str, command: &[&str]) -> Output {
        self.cmd()
            .args(["run", "--stage", stage, "--"])
            .args(command)
            .output()
            .expect("failed to run stagehand run")
    }
}
