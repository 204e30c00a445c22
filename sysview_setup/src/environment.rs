//! The isolated environment directory

use crate::error::{Result, SetupError};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const MARKER_NAME: &str = ".sysview-env.json";

/// Variable pointing children at their environment
pub const ENV_VAR: &str = "SYSVIEW_ENV";

/// Written after every successful install
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvMarker {
    pub created_at: String,
    pub toolchain: PathBuf,
    pub packages: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Environment {
    dir: PathBuf,
}

impl Environment {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.dir.join("bin")
    }

    /// Present means valid, nothing inside is checked
    pub fn exists(&self) -> bool {
        self.dir.is_dir()
    }

    /// Create the directory and its `bin/`
    pub fn create(&self) -> Result<()> {
        fs::create_dir_all(self.bin_dir()).map_err(|e| SetupError::CreateEnvFailed {
            path: self.dir.clone(),
            reason: e.to_string(),
        })
    }

    /// Path of an executable installed into the environment
    pub fn executable(&self, name: &str) -> PathBuf {
        self.bin_dir()
            .join(format!("{}{}", name, std::env::consts::EXE_SUFFIX))
    }

    /// Prepend `bin/` to the child's `PATH` and export the environment root
    pub fn activate(&self, command: &mut Command) -> Result<()> {
        let root = fs::canonicalize(&self.dir).unwrap_or_else(|_| self.dir.clone());

        let mut paths = vec![root.join("bin")];
        if let Some(existing) = std::env::var_os("PATH") {
            paths.extend(std::env::split_paths(&existing));
        }
        let path: OsString =
            std::env::join_paths(paths).map_err(|e| SetupError::ActivationFailed(e.to_string()))?;

        command.env("PATH", path).env(ENV_VAR, &root);
        Ok(())
    }

    fn marker_path(&self) -> PathBuf {
        self.dir.join(MARKER_NAME)
    }

    pub fn read_marker(&self) -> Option<EnvMarker> {
        let content = fs::read_to_string(self.marker_path()).ok()?;
        match serde_json::from_str(&content) {
            Ok(marker) => Some(marker),
            Err(e) => {
                log::warn!("Ignoring unreadable marker {}: {}", self.marker_path().display(), e);
                None
            }
        }
    }

    pub fn write_marker(&self, toolchain: &Path, packages: Vec<String>) -> Result<()> {
        let marker = EnvMarker {
            created_at: Local::now().to_rfc3339(),
            toolchain: toolchain.to_path_buf(),
            packages,
        };

        let content =
            serde_json::to_string_pretty(&marker).map_err(|e| SetupError::Marker(e.to_string()))?;
        fs::write(self.marker_path(), content)
            .map_err(|e| SetupError::Marker(format!("Failed to write marker: {e}")))
    }
}
