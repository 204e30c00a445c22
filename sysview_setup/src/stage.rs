//! The linear state machine shared by the installer and the launcher
//!
//! ```text
//! START -> CHECK_PRECONDITION -> { FAIL_EXIT | PROCEED } -> ACTION -> DONE
//! ```

use crate::error::SetupError;
use std::fmt;
use std::process::ExitStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    CheckPrecondition,
    FailExit,
    Proceed,
    Action,
    Done,
}

impl Stage {
    /// Log a transition into this stage
    pub fn enter(self, program: &str) -> Self {
        log::debug!("[{}] -> {}", program, self);
        self
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Start => "START",
            Stage::CheckPrecondition => "CHECK_PRECONDITION",
            Stage::FailExit => "FAIL_EXIT",
            Stage::Proceed => "PROCEED",
            Stage::Action => "ACTION",
            Stage::Done => "DONE",
        };
        f.write_str(name)
    }
}

/// Terminal state of a run
#[derive(Debug)]
pub enum Outcome {
    /// A precondition failed and nothing was attempted
    FailExit(SetupError),
    /// The delegated action finished, with its exit code or its failure
    Done(Result<i32, SetupError>),
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::FailExit(_) => 1,
            Outcome::Done(Ok(code)) => *code,
            Outcome::Done(Err(e)) => e.exit_code(),
        }
    }

    pub fn error(&self) -> Option<&SetupError> {
        match self {
            Outcome::FailExit(e) | Outcome::Done(Err(e)) => Some(e),
            Outcome::Done(Ok(_)) => None,
        }
    }
}

/// Exit code of a finished child; on unix a signal death maps to 128 + signal
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_exit_codes() {
        assert_eq!(
            Outcome::FailExit(SetupError::ToolchainNotFound("cargo".into())).exit_code(),
            1
        );
        assert_eq!(Outcome::Done(Ok(0)).exit_code(), 0);
        assert_eq!(Outcome::Done(Ok(7)).exit_code(), 7);
        assert_eq!(
            Outcome::Done(Err(SetupError::InstallFailed {
                package: "x".into(),
                code: 3
            }))
            .exit_code(),
            3
        );
        assert!(Outcome::Done(Ok(0)).error().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_code_of_child() {
        use std::process::Command;

        let status = Command::new("sh").args(["-c", "exit 5"]).status().unwrap();
        assert_eq!(exit_code_of(status), 5);

        let status = Command::new("sh").args(["-c", "kill -TERM $$"]).status().unwrap();
        assert_eq!(exit_code_of(status), 128 + 15);
    }
}
