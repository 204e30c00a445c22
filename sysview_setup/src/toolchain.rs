//! Locating and driving the toolchain

use crate::environment::Environment;
use crate::error::{Result, SetupError};
use crate::manifest::PackageSpec;
use crate::stage::exit_code_of;
use std::path::{Path, PathBuf};
use std::process::Command;

/// A resolved toolchain executable
#[derive(Debug, Clone)]
pub struct Toolchain {
    path: PathBuf,
}

impl Toolchain {
    /// First candidate resolvable on `PATH` (or as a direct path)
    pub fn find<S: AsRef<str>>(candidates: &[S]) -> Result<Self> {
        for candidate in candidates {
            if let Ok(path) = which::which(candidate.as_ref()) {
                log::info!("Using toolchain {}", path.display());
                return Ok(Self { path });
            }
        }

        Err(SetupError::ToolchainNotFound(
            candidates
                .iter()
                .map(|c| c.as_ref())
                .collect::<Vec<_>>()
                .join(", "),
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Install one package into the environment, inheriting stdio so the
    /// toolchain's own progress output reaches the user
    pub fn install(&self, env: &Environment, package: &PackageSpec, root: &Path) -> Result<()> {
        let mut command = Command::new(&self.path);
        command.args(package.install_args(env.dir(), root));
        env.activate(&mut command)?;

        log::debug!("Running {:?}", command);
        let status = command.status().map_err(|e| SetupError::Spawn {
            program: self.path.clone(),
            reason: e.to_string(),
        })?;

        if !status.success() {
            return Err(SetupError::InstallFailed {
                package: package.name.clone(),
                code: exit_code_of(status),
            });
        }

        Ok(())
    }
}
