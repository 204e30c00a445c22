use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use sysview_setup::{logging, report, resolve_profile, Launcher};

/// Start the installed sysview monitor
#[derive(Parser, Debug)]
#[command(name = "sysview-run", version, about)]
struct Cli {
    /// Project root holding the environment
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Setup profile (default: <root>/sysview-setup.toml if present)
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Environment directory, relative to the root
    #[arg(long, env = "SYSVIEW_ENV_DIR")]
    env_dir: Option<String>,

    /// Log state transitions to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Arguments passed through to the monitor
    #[arg(last = true)]
    args: Vec<OsString>,
}

fn main() {
    let cli = Cli::parse();

    let _logger = match logging::initialize_logging(cli.verbose) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: failed to initialize logging: {}", e);
            None
        }
    };

    let profile = match resolve_profile(&cli.root, cli.profile.as_deref(), None, cli.env_dir) {
        Ok(profile) => profile,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let outcome = Launcher::new(cli.root, profile).with_args(cli.args).run();
    report(&outcome);
    std::process::exit(outcome.exit_code());
}
