//! Installer: check toolchain, provision the environment, install packages

use crate::environment::Environment;
use crate::error::SetupError;
use crate::manifest::DependencyManifest;
use crate::profile::SetupProfile;
use crate::stage::{Outcome, Stage};
use crate::toolchain::Toolchain;
use std::io::Write;
use std::path::PathBuf;

const PROGRAM: &str = "sysview-setup";

pub struct Installer {
    root: PathBuf,
    profile: SetupProfile,
}

impl Installer {
    pub fn new(root: PathBuf, profile: SetupProfile) -> Self {
        Self { root, profile }
    }

    /// Run the whole install. Progress and guidance go to `out`; the
    /// toolchain writes straight to the inherited stdio.
    pub fn run(&self, out: &mut dyn Write) -> Outcome {
        Stage::Start.enter(PROGRAM);

        Stage::CheckPrecondition.enter(PROGRAM);
        let toolchain = match Toolchain::find(self.profile.toolchain.as_slice()) {
            Ok(toolchain) => toolchain,
            Err(e) => {
                Stage::FailExit.enter(PROGRAM);
                return Outcome::FailExit(e);
            }
        };

        Stage::Proceed.enter(PROGRAM);
        Stage::Action.enter(PROGRAM);
        let result = self.provision(&toolchain, out);

        Stage::Done.enter(PROGRAM);
        Outcome::Done(result.map(|()| 0))
    }

    fn provision(&self, toolchain: &Toolchain, out: &mut dyn Write) -> Result<(), SetupError> {
        let env = Environment::new(self.profile.env_path(&self.root));

        if env.exists() {
            say(out, format!("✅ Environment already exists at {}", env.dir().display()));
        } else {
            say(out, format!("📦 Creating environment at {}...", env.dir().display()));
            env.create()?;
        }

        let manifest = DependencyManifest::load(&self.profile.manifest_path(&self.root))?;
        if manifest.packages.is_empty() {
            log::warn!("Dependency manifest declares no packages");
        }

        for package in &manifest.packages {
            say(out, format!("📥 Installing {}...", package.name));
            toolchain.install(&env, package, &self.root)?;
        }

        let names = manifest.packages.iter().map(|p| p.name.clone()).collect();
        env.write_marker(toolchain.path(), names)?;

        self.print_guidance(&env, out);
        Ok(())
    }

    fn print_guidance(&self, env: &Environment, out: &mut dyn Write) {
        let entry_point = env.executable(&self.profile.entry_point);
        say(out, String::new());
        say(out, "✅ Setup complete!".to_string());
        say(out, String::new());
        say(out, "To start the System Overview monitor:".to_string());
        say(out, "  sysview-run".to_string());
        say(out, "or run the installed binary directly:".to_string());
        say(out, format!("  {}", entry_point.display()));
        say(out, String::new());
        say(out, "Press q or Ctrl+C inside the monitor to exit.".to_string());
    }
}

// stdout 被关闭时不影响安装结果
fn say(out: &mut dyn Write, line: String) {
    if let Err(e) = writeln!(out, "{}", line) {
        log::debug!("Could not write to output: {}", e);
    }
}
