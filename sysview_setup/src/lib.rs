//! Provisioning and launching of the sysview monitor
//!
//! `sysview-setup` checks for the toolchain, creates the isolated
//! environment and installs the dependency manifest into it.
//! `sysview-run` checks that environment and hands control to the
//! installed monitor.

pub mod environment;
pub mod error;
pub mod installer;
pub mod launcher;
pub mod logging;
pub mod manifest;
pub mod profile;
pub mod stage;
pub mod toolchain;

pub use environment::{EnvMarker, Environment};
pub use error::{Result, SetupError};
pub use installer::Installer;
pub use launcher::Launcher;
pub use manifest::{DependencyManifest, PackageSpec};
pub use profile::SetupProfile;
pub use stage::{Outcome, Stage};
pub use toolchain::Toolchain;

use std::path::Path;

/// Print a failed outcome to stderr with its hint
pub fn report(outcome: &Outcome) {
    if let Some(e) = outcome.error() {
        eprintln!("❌ {}", e);
        if let Some(hint) = e.hint() {
            eprintln!("   {}", hint);
        }
    }
}

/// Load the profile and apply command-line overrides
pub fn resolve_profile(
    root: &Path,
    explicit: Option<&Path>,
    toolchain: Option<String>,
    env_dir: Option<String>,
) -> Result<SetupProfile> {
    let mut profile = SetupProfile::load(root, explicit)?;
    if let Some(toolchain) = toolchain {
        profile.toolchain = vec![toolchain];
    }
    if let Some(env_dir) = env_dir {
        profile.env_dir = env_dir.into();
    }
    Ok(profile)
}
