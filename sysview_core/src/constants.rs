//! Application constants and default values

/// Update intervals in milliseconds
pub mod intervals {
    pub const REFRESH: u64 = 1000;
    pub const MIN_REFRESH: u64 = 250;
    pub const MAX_REFRESH: u64 = 60_000;
}

/// Row and column limits for the dashboard panels
pub mod limits {
    pub const TOP_PROCESSES: usize = 10;
    pub const MAX_DISKS: usize = 5;
    pub const MAX_INTERFACES: usize = 3;
    pub const CPU_HISTORY_LENGTH: usize = 60;

    /// Number of cells in a usage bar, each cell is 5%
    pub const BAR_CELLS: usize = 20;

    pub const PROCESS_NAME_WIDTH: usize = 20;
    pub const PROCESS_STATUS_WIDTH: usize = 10;
    pub const GPU_NAME_WIDTH: usize = 12;
    pub const GPU_ERROR_WIDTH: usize = 50;
}

/// Default warning/critical thresholds in percent (or °C for temperature)
pub mod thresholds {
    pub const CPU: (f32, f32) = (60.0, 80.0);
    pub const MEMORY: (f32, f32) = (60.0, 80.0);
    pub const SWAP: (f32, f32) = (20.0, 50.0);
    pub const DISK: (f32, f32) = (75.0, 90.0);
    pub const GPU_UTILIZATION: (f32, f32) = (70.0, 90.0);
    pub const GPU_TEMPERATURE: (f32, f32) = (65.0, 80.0);
    pub const PROCESS_CPU: (f32, f32) = (20.0, 50.0);
    pub const PROCESS_MEMORY: (f32, f32) = (10.0, 20.0);
}

/// Row labels
pub mod icons {
    pub const SYSTEM: &str = "🖥️  System";
    pub const KERNEL: &str = "🐧 Kernel";
    pub const HOST: &str = "🏷️  Host";
    pub const UPTIME: &str = "⏱️  Uptime";
    pub const BOOT: &str = "🔌 Booted";
    pub const USER: &str = "👤 User";
    pub const TIME: &str = "🕐 Time";
    pub const BATTERY: &str = "🔋 Battery";

    pub const CPU_FREQ: &str = "⚡ CPU Freq";
    pub const CPU_AVERAGE: &str = "📈 CPU Avg";
    pub const LOAD: &str = "⚖️  Load";
    pub const MEMORY: &str = "💾 Memory";
    pub const SWAP: &str = "💿 Swap";

    pub const GPU: &str = "🎮";
    pub const NO_GPU: &str = "🚫 No NVIDIA GPUs detected";
    pub const ERROR: &str = "❌ Error";

    pub const UPLOAD: &str = "📡 Upload Speed";
    pub const DOWNLOAD: &str = "📥 Download Speed";
    pub const TOTAL_SENT: &str = "📤 Total Sent";
    pub const TOTAL_RECEIVED: &str = "📨 Total Received";
    pub const PACKETS_SENT: &str = "📊 Packets Sent";
    pub const PACKETS_RECEIVED: &str = "📊 Packets Received";
    pub const INTERFACES: &str = "🌐 Active Interfaces";

    pub const DISK: &str = "💽";
}

/// Application metadata
pub mod app {
    pub const NAME: &str = "sysview";
    pub const CONFIG_FILE: &str = "config.toml";
    pub const DEFAULT_LOG_LEVEL: &str = "info";
    pub const LOG_FILE_MAX_SIZE: u64 = 10_000_000; // 10MB
    pub const LOG_FILE_MAX_COUNT: usize = 5;
    pub const FOOTER: &str = "🚀 System Overview - Press Ctrl+C to exit 🚀";
}

/// Banner shown in the header panel
pub const HEADER_BANNER: &str = "\
███████╗██╗   ██╗███████╗████████╗███████╗███╗   ███╗     ██████╗ ██╗   ██╗███████╗██████╗ ██╗   ██╗██╗███████╗██╗    ██╗
██╔════╝╚██╗ ██╔╝██╔════╝╚══██╔══╝██╔════╝████╗ ████║    ██╔═══██╗██║   ██║██╔════╝██╔══██╗██║   ██║██║██╔════╝██║    ██║
███████╗ ╚████╔╝ ███████╗   ██║   █████╗  ██╔████╔██║    ██║   ██║██║   ██║█████╗  ██████╔╝██║   ██║██║█████╗  ██║ █╗ ██║
╚════██║  ╚██╔╝  ╚════██║   ██║   ██╔══╝  ██║╚██╔╝██║    ██║   ██║╚██╗ ██╔╝██╔══╝  ██╔══██╗╚██╗ ██╔╝██║██╔══╝  ██║███╗██║
███████║   ██║   ███████║   ██║   ███████╗██║ ╚═╝ ██║    ╚██████╔╝ ╚████╔╝ ███████╗██║  ██║ ╚████╔╝ ██║███████╗╚███╔███╔╝
╚══════╝   ╚═╝   ╚══════╝   ╚═╝   ╚══════╝╚═╝     ╚═╝     ╚═════╝   ╚═══╝  ╚══════╝╚═╝  ╚═╝  ╚═══╝  ╚═╝╚══════╝ ╚══╝╚══╝";
