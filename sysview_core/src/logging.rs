//! Log file setup for the dashboard

use crate::config::LoggingConfig;
use crate::constants::app;
use crate::error::Result;
use chrono::Local;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use std::path::PathBuf;

/// Start file logging. The terminal belongs to the dashboard, so nothing is
/// duplicated to stdout/stderr. `RUST_LOG` overrides the configured level.
pub fn initialize_logging(program_name: &str, config: &LoggingConfig) -> Result<LoggerHandle> {
    let timestamp = Local::now().format("%Y-%m-%d_%H_%M_%S").to_string();
    let log_dir = resolve_log_dir(config);

    let handle = Logger::try_with_env_or_str(&config.level)?
        .format_for_files(flexi_logger::detailed_format)
        .log_to_file(
            FileSpec::default()
                .directory(&log_dir)
                .basename(format!("{}_{}", program_name, timestamp))
                .suffix("log"),
        )
        .rotate(
            Criterion::Size(config.max_file_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(config.max_files),
        )
        .start()?;

    log::info!("Log directory: {}", log_dir.display());
    Ok(handle)
}

/// First usable directory out of: configured dir, `<data_local_dir>/sysview/logs`,
/// the temp dir
pub fn resolve_log_dir(config: &LoggingConfig) -> PathBuf {
    let candidates = [
        config.log_dir.clone(),
        dirs::data_local_dir().map(|dir| dir.join(app::NAME).join("logs")),
    ];

    candidates
        .into_iter()
        .flatten()
        .find(|p| {
            std::fs::create_dir_all(p).ok();
            std::fs::metadata(p).map(|m| m.is_dir()).unwrap_or(false)
        })
        .unwrap_or_else(std::env::temp_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_dir_is_created() {
        let temp_dir = tempfile::tempdir().unwrap();
        let wanted = temp_dir.path().join("nested").join("logs");
        let config = LoggingConfig {
            log_dir: Some(wanted.clone()),
            ..LoggingConfig::default()
        };

        assert_eq!(resolve_log_dir(&config), wanted);
        assert!(wanted.is_dir());
    }

    #[test]
    fn test_logger_writes_into_configured_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            level: "info".to_string(),
            log_dir: Some(temp_dir.path().to_path_buf()),
            ..LoggingConfig::default()
        };

        let handle = initialize_logging("sysview_test", &config).unwrap();
        log::info!("hello from the test");
        handle.flush();

        let names: Vec<String> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert!(names.iter().any(|n| n.starts_with("sysview_test_") && n.ends_with(".log")));
    }
}
