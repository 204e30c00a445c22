//! Setup profile: where things live and which toolchain to drive

use crate::error::{Result, SetupError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Profile file looked up in the project root
pub const PROFILE_FILE: &str = "sysview-setup.toml";

#[cfg(target_os = "windows")]
const TOOLCHAIN_CANDIDATES: &[&str] = &["cargo.exe", "cargo"];

#[cfg(not(target_os = "windows"))]
const TOOLCHAIN_CANDIDATES: &[&str] = &["cargo"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupProfile {
    /// Programs tried in order, names are resolved through `PATH`
    pub toolchain: Vec<String>,
    /// Environment directory, relative to the project root
    pub env_dir: PathBuf,
    /// Dependency declaration file, relative to the project root
    pub manifest: PathBuf,
    /// Executable inside `<env_dir>/bin` the launcher hands off to
    pub entry_point: String,
}

impl Default for SetupProfile {
    fn default() -> Self {
        Self {
            toolchain: TOOLCHAIN_CANDIDATES.iter().map(|s| s.to_string()).collect(),
            env_dir: PathBuf::from(".sysview-env"),
            manifest: PathBuf::from("sysview-deps.toml"),
            entry_point: "sysview".to_string(),
        }
    }
}

impl SetupProfile {
    /// Load `explicit` if given, else `<root>/sysview-setup.toml` when it
    /// exists, else the defaults. Never writes anything.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = root.join(PROFILE_FILE);
                if !candidate.is_file() {
                    log::debug!("No {} in {}, using defaults", PROFILE_FILE, root.display());
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let content = std::fs::read_to_string(&path).map_err(|e| SetupError::Profile {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        let profile: SetupProfile = toml::from_str(&content).map_err(|e| SetupError::Profile {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        if profile.toolchain.is_empty() {
            return Err(SetupError::Profile {
                path,
                reason: "toolchain list is empty".to_string(),
            });
        }

        log::info!("Loaded setup profile from {}", path.display());
        Ok(profile)
    }

    pub fn env_path(&self, root: &Path) -> PathBuf {
        root.join(&self.env_dir)
    }

    pub fn manifest_path(&self, root: &Path) -> PathBuf {
        root.join(&self.manifest)
    }
}
