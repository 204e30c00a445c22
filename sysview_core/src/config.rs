//! Configuration management

use crate::constants::{app, intervals, limits, thresholds};
use crate::error::{AppError, Result};
use crate::thresholds::Thresholds;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub system: SystemConfig,
    pub thresholds: ThresholdConfig,
    pub logging: LoggingConfig,
}

/// UI-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub refresh_interval_ms: u64,
    pub show_header: bool,
}

/// System monitoring configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub top_processes: usize,
    pub max_disks: usize,
    pub max_interfaces: usize,
    pub cpu_history_length: usize,
}

/// Color thresholds for every gauge on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    pub cpu: Thresholds,
    pub memory: Thresholds,
    pub swap: Thresholds,
    pub disk: Thresholds,
    pub gpu_utilization: Thresholds,
    pub gpu_temperature: Thresholds,
    pub process_cpu: Thresholds,
    pub process_memory: Thresholds,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub log_dir: Option<PathBuf>,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: intervals::REFRESH,
            show_header: true,
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            top_processes: limits::TOP_PROCESSES,
            max_disks: limits::MAX_DISKS,
            max_interfaces: limits::MAX_INTERFACES,
            cpu_history_length: limits::CPU_HISTORY_LENGTH,
        }
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            cpu: thresholds::CPU.into(),
            memory: thresholds::MEMORY.into(),
            swap: thresholds::SWAP.into(),
            disk: thresholds::DISK.into(),
            gpu_utilization: thresholds::GPU_UTILIZATION.into(),
            gpu_temperature: thresholds::GPU_TEMPERATURE.into(),
            process_cpu: thresholds::PROCESS_CPU.into(),
            process_memory: thresholds::PROCESS_MEMORY.into(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: app::DEFAULT_LOG_LEVEL.to_string(),
            log_dir: None,
            max_file_size: app::LOG_FILE_MAX_SIZE,
            max_files: app::LOG_FILE_MAX_COUNT,
        }
    }
}

impl AppConfig {
    /// Load configuration from the user config directory, creating the
    /// default file on first run
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            log::info!("Created default configuration at {:?}", config_path);
            Ok(config)
        }
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: AppConfig = toml::from_str(&content)?;
        config.validate()?;

        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to an explicit file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;

        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Get the config file path
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AppError::config("Cannot determine config directory"))?;

        Ok(config_dir.join(app::NAME).join(app::CONFIG_FILE))
    }

    /// Clamp configuration values into usable ranges. Thresholds that are
    /// not numbers at all are an error.
    pub fn validate(&mut self) -> Result<()> {
        self.ui.refresh_interval_ms = self
            .ui
            .refresh_interval_ms
            .clamp(intervals::MIN_REFRESH, intervals::MAX_REFRESH);

        self.system.top_processes = self.system.top_processes.clamp(1, 100);
        self.system.max_disks = self.system.max_disks.clamp(1, 32);
        self.system.max_interfaces = self.system.max_interfaces.clamp(1, 16);
        self.system.cpu_history_length = self.system.cpu_history_length.clamp(1, 3600);

        let t = &mut self.thresholds;
        for (name, limits) in [
            ("cpu", &t.cpu),
            ("memory", &t.memory),
            ("swap", &t.swap),
            ("disk", &t.disk),
            ("gpu_utilization", &t.gpu_utilization),
            ("gpu_temperature", &t.gpu_temperature),
            ("process_cpu", &t.process_cpu),
            ("process_memory", &t.process_memory),
        ] {
            limits.check(name)?;
        }

        for percent in [
            &mut t.cpu,
            &mut t.memory,
            &mut t.swap,
            &mut t.disk,
            &mut t.gpu_utilization,
            &mut t.process_memory,
        ] {
            percent.clamp(100.0);
        }
        // 进程 CPU 可以超过 100%（多核）
        t.process_cpu.clamp(f32::MAX);
        t.gpu_temperature.clamp(150.0);

        self.logging.max_file_size = self.logging.max_file_size.max(1_000_000); // At least 1MB
        self.logging.max_files = self.logging.max_files.clamp(1, 20);
        Ok(())
    }
}
