use clap::Parser;
use std::io;
use std::path::PathBuf;
use sysview_setup::{logging, report, resolve_profile, Installer};

/// Create the sysview environment and install its dependencies
#[derive(Parser, Debug)]
#[command(name = "sysview-setup", version, about)]
struct Cli {
    /// Project root holding the dependency manifest
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Setup profile (default: <root>/sysview-setup.toml if present)
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Toolchain program to use instead of the profile's list
    #[arg(long, env = "SYSVIEW_TOOLCHAIN")]
    toolchain: Option<String>,

    /// Environment directory, relative to the root
    #[arg(long, env = "SYSVIEW_ENV_DIR")]
    env_dir: Option<String>,

    /// Log state transitions to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // 日志失败不影响安装
    let _logger = match logging::initialize_logging(cli.verbose) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: failed to initialize logging: {}", e);
            None
        }
    };

    let profile = match resolve_profile(&cli.root, cli.profile.as_deref(), cli.toolchain, cli.env_dir) {
        Ok(profile) => profile,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let outcome = Installer::new(cli.root, profile).run(&mut io::stdout());
    report(&outcome);
    std::process::exit(outcome.exit_code());
}
