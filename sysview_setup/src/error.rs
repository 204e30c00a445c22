//! Provisioning errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while provisioning or launching
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Toolchain not found in PATH (tried: {0})")]
    ToolchainNotFound(String),

    #[error("Environment not found at {}", .0.display())]
    EnvironmentMissing(PathBuf),

    #[error("Failed to create environment at {}: {reason}", path.display())]
    CreateEnvFailed { path: PathBuf, reason: String },

    #[error("Failed to activate environment: {0}")]
    ActivationFailed(String),

    #[error("Failed to read setup profile {}: {reason}", path.display())]
    Profile { path: PathBuf, reason: String },

    #[error("Failed to read dependency manifest {}: {reason}", path.display())]
    Manifest { path: PathBuf, reason: String },

    #[error("Failed to install {package}: toolchain exited with code {code}")]
    InstallFailed { package: String, code: i32 },

    #[error("Failed to run {}: {reason}", program.display())]
    Spawn { program: PathBuf, reason: String },

    #[error("Marker file error: {0}")]
    Marker(String),
}

impl SetupError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            SetupError::InstallFailed { code, .. } => *code,
            _ => 1,
        }
    }

    /// What the user should do next, when there is something to suggest
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            SetupError::ToolchainNotFound(_) => {
                Some("Install the Rust toolchain (https://rustup.rs) and re-run sysview-setup.")
            }
            SetupError::EnvironmentMissing(_) => Some("Please run sysview-setup first."),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SetupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(SetupError::ToolchainNotFound("cargo".into()).exit_code(), 1);
        assert_eq!(
            SetupError::EnvironmentMissing(PathBuf::from(".sysview-env")).exit_code(),
            1
        );
        let failed = SetupError::InstallFailed {
            package: "sysview".into(),
            code: 101,
        };
        assert_eq!(failed.exit_code(), 101);
        assert!(failed.to_string().contains("sysview"));
    }

    #[test]
    fn test_missing_environment_points_to_installer() {
        let err = SetupError::EnvironmentMissing(PathBuf::from("/tmp/env"));
        assert!(err.to_string().contains("/tmp/env"));
        assert!(err.hint().unwrap().contains("sysview-setup"));
    }
}
