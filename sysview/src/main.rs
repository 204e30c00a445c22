//! sysview - System Overview dashboard

use anyhow::Result;
use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;
use sysview::{app, terminal::TerminalSession, App};
use sysview_core::{constants, logging, AppConfig, SystemMonitor};

#[derive(Parser)]
#[command(name = "sysview", version, about = "Real-time system overview in the terminal")]
struct Cli {
    /// Refresh interval in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Load configuration from this file instead of the user config dir
    #[arg(long, env = "SYSVIEW_CONFIG")]
    config: Option<PathBuf>,

    /// Hide the ASCII banner
    #[arg(long)]
    no_header: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => {
            println!("\n👋 Goodbye!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("💥 Fatal error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    // 日志失败不影响仪表盘
    let _logger = match logging::initialize_logging(constants::app::NAME, &config.logging) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("⚠️  {}", e);
            None
        }
    };
    info!("Starting sysview {}", env!("CARGO_PKG_VERSION"));

    let monitor = SystemMonitor::new(config.system.clone());
    info!("GPUs detected: {}", monitor.gpu_count());

    let mut app = App::new(monitor, config);
    let mut session = TerminalSession::new()?;
    let result = app::run(&mut session, &mut app).await;
    drop(session);

    if let Err(e) = &result {
        log::error!("Dashboard stopped: {:#}", e);
    }
    result
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => match AppConfig::load() {
            Ok(config) => config,
            // 用户写坏的配置要报错，目录不可写则退回默认值
            Err(e) if config_file_exists() => return Err(e.into()),
            Err(e) => {
                eprintln!("⚠️  {}, using defaults", e);
                AppConfig::default()
            }
        },
    };

    if let Some(interval) = cli.interval_ms {
        config.ui.refresh_interval_ms = interval;
    }
    if cli.no_header {
        config.ui.show_header = false;
    }
    config.validate()?;
    Ok(config)
}

fn config_file_exists() -> bool {
    AppConfig::config_file_path()
        .map(|path| path.exists())
        .unwrap_or(false)
}
