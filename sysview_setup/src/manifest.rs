//! Dependency declaration file
//!
//! ```toml
//! [[package]]
//! name = "sysview"
//! path = "sysview"
//!
//! [[package]]
//! name = "bottom"
//! version = "0.10"
//! features = ["battery"]
//! ```

use crate::error::{Result, SetupError};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DependencyManifest {
    #[serde(default, rename = "package")]
    pub packages: Vec<PackageSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageSpec {
    pub name: String,
    /// Local source, relative to the project root
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Registry version requirement
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub locked: bool,
}

impl DependencyManifest {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SetupError::Manifest {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::parse(&content).map_err(|reason| SetupError::Manifest {
            path: path.to_path_buf(),
            reason,
        })
    }

    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        let manifest: DependencyManifest = toml::from_str(content).map_err(|e| e.to_string())?;

        for spec in &manifest.packages {
            if spec.name.trim().is_empty() {
                return Err("package without a name".to_string());
            }
            if spec.path.is_some() && spec.version.is_some() {
                return Err(format!(
                    "package {} sets both path and version",
                    spec.name
                ));
            }
        }

        Ok(manifest)
    }
}

impl PackageSpec {
    /// Arguments after the toolchain program for installing this package
    /// into `env_dir`
    pub fn install_args(&self, env_dir: &Path, root: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["install".into(), "--root".into(), env_dir.into()];

        if self.locked {
            args.push("--locked".into());
        }
        if !self.features.is_empty() {
            args.push("--features".into());
            args.push(self.features.join(",").into());
        }

        match &self.path {
            Some(path) => {
                args.push("--path".into());
                args.push(root.join(path).into());
            }
            None => {
                args.push(self.name.clone().into());
                if let Some(version) = &self.version {
                    args.push("--version".into());
                    args.push(version.into());
                }
            }
        }

        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: Vec<OsString>) -> Vec<String> {
        args.into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_parse_and_args() {
        let manifest = DependencyManifest::parse(
            r#"
            [[package]]
            name = "sysview"
            path = "sysview"
            locked = true

            [[package]]
            name = "ripgrep"
            version = "14.1"
            features = ["pcre2"]
            "#,
        )
        .unwrap();
        assert_eq!(manifest.packages.len(), 2);

        let env = Path::new("/p/.sysview-env");
        let root = Path::new("/p");
        assert_eq!(
            strings(manifest.packages[0].install_args(env, root)),
            vec!["install", "--root", "/p/.sysview-env", "--locked", "--path", "/p/sysview"]
        );
        assert_eq!(
            strings(manifest.packages[1].install_args(env, root)),
            vec![
                "install",
                "--root",
                "/p/.sysview-env",
                "--features",
                "pcre2",
                "ripgrep",
                "--version",
                "14.1"
            ]
        );
    }

    #[test]
    fn test_empty_manifest_is_valid() {
        assert!(DependencyManifest::parse("").unwrap().packages.is_empty());
    }

    #[test]
    fn test_rejects_conflicting_sources() {
        let err = DependencyManifest::parse(
            "[[package]]\nname = \"x\"\npath = \"x\"\nversion = \"1\"\n",
        )
        .unwrap_err();
        assert!(err.contains("both path and version"));
        assert!(DependencyManifest::parse("[[package]]\nname = \"\"\n").is_err());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = DependencyManifest::load(&dir.path().join("nope.toml")).unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }
}
