//! sysview_core - metric collection behind the sysview dashboard
//!
//! Collects CPU, memory, GPU, network, process and disk readings into a
//! [`Snapshot`], and carries the configuration, formatting and logging
//! shared by the sysview binaries.

pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod gpu;
pub mod logging;
pub mod metrics;
pub mod snapshot;
pub mod system_monitor;
pub mod thresholds;

// Re-exports for convenience
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use snapshot::Snapshot;
pub use system_monitor::SystemMonitor;
pub use thresholds::{Level, Thresholds};
