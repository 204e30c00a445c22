//! Launcher: check the environment and hand off to the entry point

use crate::environment::Environment;
use crate::error::SetupError;
use crate::profile::SetupProfile;
use crate::stage::{exit_code_of, Outcome, Stage};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

const PROGRAM: &str = "sysview-run";

pub struct Launcher {
    root: PathBuf,
    profile: SetupProfile,
    args: Vec<OsString>,
}

impl Launcher {
    pub fn new(root: PathBuf, profile: SetupProfile) -> Self {
        Self {
            root,
            profile,
            args: Vec::new(),
        }
    }

    /// Arguments forwarded to the entry point
    pub fn with_args(mut self, args: Vec<OsString>) -> Self {
        self.args = args;
        self
    }

    /// Start the entry point as a child with inherited stdio and wait for it
    pub fn run(&self) -> Outcome {
        Stage::Start.enter(PROGRAM);

        Stage::CheckPrecondition.enter(PROGRAM);
        let env = Environment::new(self.profile.env_path(&self.root));
        if !env.exists() {
            Stage::FailExit.enter(PROGRAM);
            return Outcome::FailExit(SetupError::EnvironmentMissing(env.dir().to_path_buf()));
        }

        Stage::Proceed.enter(PROGRAM);
        if env.read_marker().is_none() {
            log::warn!(
                "{} has no install marker, the last setup may not have finished",
                env.dir().display()
            );
        }

        Stage::Action.enter(PROGRAM);
        let result = self.hand_off(&env);

        Stage::Done.enter(PROGRAM);
        Outcome::Done(result)
    }

    fn hand_off(&self, env: &Environment) -> Result<i32, SetupError> {
        let entry_point = env.executable(&self.profile.entry_point);

        let mut command = Command::new(&entry_point);
        command.args(&self.args);
        env.activate(&mut command)?;

        log::info!("Starting {}", entry_point.display());
        let status = command.status().map_err(|e| SetupError::Spawn {
            program: entry_point.clone(),
            reason: e.to_string(),
        })?;

        let code = exit_code_of(status);
        log::info!("{} exited with {}", entry_point.display(), code);
        Ok(code)
    }
}
