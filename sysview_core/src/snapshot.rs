//! Point-in-time readings for every dashboard panel

/// Everything the dashboard shows for one refresh
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub system: SystemInfo,
    pub cpu_memory: CpuMemory,
    pub gpu: GpuStatus,
    pub network: NetworkStats,
    pub processes: Vec<ProcessEntry>,
    pub disks: Vec<DiskEntry>,
}

#[derive(Debug, Clone)]
pub struct SystemInfo {
    pub os: String,
    pub arch: String,
    pub kernel: String,
    pub host: String,
    /// Seconds since the monitor started
    pub session_uptime: u64,
    /// Seconds since the host booted
    pub host_uptime: u64,
    pub user: String,
    pub clock: String,
    pub battery: Option<BatteryStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryStatus {
    pub percent: f32,
    pub charging: bool,
}

#[derive(Debug, Clone)]
pub struct CpuMemory {
    pub cpu_percent: f32,
    pub cpu_count: usize,
    pub cpu_freq_mhz: Option<u64>,
    /// Rolling average of `cpu_percent`
    pub cpu_average: f64,
    pub load_average: LoadAverage,
    pub memory: Usage,
    /// `None` when the host has no swap configured
    pub swap: Option<Usage>,
}

/// System load averages
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoadAverage {
    pub one_minute: f64,
    pub five_minutes: f64,
    pub fifteen_minutes: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Usage {
    pub percent: f32,
    pub used: u64,
    pub total: u64,
}

impl Usage {
    pub fn new(used: u64, total: u64) -> Self {
        let percent = if total > 0 {
            (used as f64 / total as f64 * 100.0) as f32
        } else {
            0.0
        };
        Self {
            percent,
            used,
            total,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GpuStatus {
    Unavailable,
    Devices(Vec<GpuDevice>),
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GpuDevice {
    pub name: String,
    pub utilization: u32,
    pub memory_used_mb: u64,
    pub memory_total_mb: u64,
    pub temperature_c: u32,
    pub power_draw_w: Option<u32>,
    pub power_limit_w: Option<u32>,
}

impl GpuDevice {
    pub fn memory_percent(&self) -> f32 {
        Usage::new(self.memory_used_mb, self.memory_total_mb).percent
    }

    /// `"120W/350W"`, or `"N/A"` when the driver does not report power
    pub fn power_label(&self) -> String {
        match (self.power_draw_w, self.power_limit_w) {
            (Some(draw), Some(limit)) => format!("{}W/{}W", draw, limit),
            _ => "N/A".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkStats {
    /// Bytes per second
    pub upload_rate: f64,
    /// Bytes per second
    pub download_rate: f64,
    pub total_sent: u64,
    pub total_received: u64,
    pub packets_sent: u64,
    pub packets_received: u64,
    pub active_interfaces: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessEntry {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f32,
    pub memory_percent: f32,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiskEntry {
    pub device: String,
    pub mount_point: String,
    pub percent: f32,
    pub free: u64,
    pub total: u64,
}

impl DiskEntry {
    pub fn new(device: String, mount_point: String, available: u64, total: u64) -> Self {
        let usage = Usage::new(total.saturating_sub(available), total);
        Self {
            device,
            mount_point,
            percent: usage.percent,
            free: available,
            total,
        }
    }
}
