//! System monitoring: one `refresh` collects every dashboard panel

use crate::config::SystemConfig;
use crate::error::{AppError, Result};
use crate::gpu::NvidiaSmi;
use crate::metrics::{RateMeter, RollingAverage};
use crate::snapshot::{
    BatteryStatus, CpuMemory, DiskEntry, GpuStatus, LoadAverage, NetworkStats, ProcessEntry,
    Snapshot, SystemInfo, Usage,
};
use battery::Manager;
use chrono::Local;
use std::time::Instant;
use sysinfo::{Disks, Networks, ProcessesToUpdate, System};

/// System monitor holding the sysinfo handles between refreshes
pub struct SystemMonitor {
    system: System,
    networks: Networks,
    disks: Disks,
    started: Instant,
    network_rate: RateMeter,
    cpu_history: RollingAverage,
    gpu: Option<NvidiaSmi>,
    battery_manager: Option<Manager>,
    limits: SystemConfig,
}

impl SystemMonitor {
    /// Create a new system monitor. Blocks for
    /// `sysinfo::MINIMUM_CPU_UPDATE_INTERVAL` so the first snapshot already
    /// carries a real CPU reading.
    pub fn new(limits: SystemConfig) -> Self {
        let mut system = System::new_all();
        std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
        system.refresh_cpu_usage();
        system.refresh_processes(ProcessesToUpdate::All, true);

        let networks = Networks::new_with_refreshed_list();
        let now = Instant::now();
        let network_rate = RateMeter::new(transmitted_received(&networks), now);

        let gpu = NvidiaSmi::detect();
        if gpu.is_none() {
            log::info!("No NVIDIA GPU available, GPU panel disabled");
        }

        let battery_manager = match Manager::new() {
            Ok(manager) => Some(manager),
            Err(e) => {
                log::debug!("Battery manager unavailable: {}", e);
                None
            }
        };

        Self {
            system,
            networks,
            disks: Disks::new_with_refreshed_list(),
            started: now,
            network_rate,
            cpu_history: RollingAverage::new(limits.cpu_history_length),
            gpu,
            battery_manager,
            limits,
        }
    }

    pub fn gpu_count(&self) -> usize {
        self.gpu.as_ref().map_or(0, NvidiaSmi::gpu_count)
    }

    /// Refresh every source and build a snapshot
    pub fn refresh(&mut self) -> Result<Snapshot> {
        self.system.refresh_cpu_usage();
        self.system.refresh_memory();
        self.system.refresh_processes(ProcessesToUpdate::All, true);
        self.networks.refresh(true);
        self.disks.refresh(true);

        if self.system.total_memory() == 0 {
            return Err(AppError::system("memory information unavailable"));
        }

        let now = Instant::now();
        Ok(Snapshot {
            system: self.system_info(now),
            cpu_memory: self.cpu_memory(),
            gpu: self.gpu_status(),
            network: self.network_stats(now),
            processes: self.top_processes(),
            disks: self.disk_usage(),
        })
    }

    fn system_info(&self, now: Instant) -> SystemInfo {
        SystemInfo {
            os: System::name().unwrap_or_else(|| std::env::consts::OS.to_string()),
            arch: std::env::consts::ARCH.to_string(),
            kernel: System::kernel_version().unwrap_or_else(|| "Unknown".to_string()),
            host: System::host_name().unwrap_or_else(|| "Unknown".to_string()),
            session_uptime: now.saturating_duration_since(self.started).as_secs(),
            host_uptime: System::uptime(),
            user: current_user(),
            clock: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            battery: self.battery_status(),
        }
    }

    // 只取第一块电池
    fn battery_status(&self) -> Option<BatteryStatus> {
        let manager = self.battery_manager.as_ref()?;
        let battery = manager.batteries().ok()?.flatten().next()?;
        Some(BatteryStatus {
            percent: battery
                .state_of_charge()
                .get::<battery::units::ratio::percent>(),
            charging: matches!(battery.state(), battery::State::Charging),
        })
    }

    fn cpu_memory(&mut self) -> CpuMemory {
        let cpu_percent = self.system.global_cpu_usage();
        self.cpu_history.add(cpu_percent as f64);

        let cpu_freq_mhz = self
            .system
            .cpus()
            .first()
            .map(|cpu| cpu.frequency())
            .filter(|freq| *freq > 0);

        let load = System::load_average();

        let memory_total = self.system.total_memory();
        let memory_used = memory_total.saturating_sub(self.system.available_memory());

        let swap_total = self.system.total_swap();
        let swap = (swap_total > 0).then(|| Usage::new(self.system.used_swap(), swap_total));

        CpuMemory {
            cpu_percent,
            cpu_count: self.system.cpus().len(),
            cpu_freq_mhz,
            cpu_average: self.cpu_history.average(),
            load_average: LoadAverage {
                one_minute: load.one,
                five_minutes: load.five,
                fifteen_minutes: load.fifteen,
            },
            memory: Usage::new(memory_used, memory_total),
            swap,
        }
    }

    fn gpu_status(&self) -> GpuStatus {
        match &self.gpu {
            Some(smi) => smi.status(),
            None => GpuStatus::Unavailable,
        }
    }

    fn network_stats(&mut self, now: Instant) -> NetworkStats {
        let (total_sent, total_received) = transmitted_received(&self.networks);
        let (upload_rate, download_rate) =
            self.network_rate.sample((total_sent, total_received), now);

        let mut packets_sent = 0;
        let mut packets_received = 0;
        let mut interfaces = Vec::new();
        for (name, data) in self.networks.list() {
            packets_sent += data.total_packets_transmitted();
            packets_received += data.total_packets_received();
            let carried_traffic = data.total_received() + data.total_transmitted() > 0;
            interfaces.push((name.clone(), interface_is_up(name, carried_traffic)));
        }

        NetworkStats {
            upload_rate,
            download_rate,
            total_sent,
            total_received,
            packets_sent,
            packets_received,
            active_interfaces: active_interfaces(interfaces, self.limits.max_interfaces),
        }
    }

    fn top_processes(&self) -> Vec<ProcessEntry> {
        let total_memory = self.system.total_memory() as f64;
        let entries = self
            .system
            .processes()
            .iter()
            .map(|(pid, process)| ProcessEntry {
                pid: pid.as_u32(),
                name: process.name().to_string_lossy().into_owned(),
                cpu_percent: process.cpu_usage(),
                memory_percent: (process.memory() as f64 / total_memory * 100.0) as f32,
                status: process.status().to_string().to_lowercase(),
            })
            .collect();

        rank_processes(entries, self.limits.top_processes)
    }

    fn disk_usage(&self) -> Vec<DiskEntry> {
        self.disks
            .list()
            .iter()
            .filter(|disk| disk.total_space() > 0)
            .take(self.limits.max_disks)
            .map(|disk| {
                DiskEntry::new(
                    disk.name().to_string_lossy().into_owned(),
                    disk.mount_point().display().to_string(),
                    disk.available_space(),
                    disk.total_space(),
                )
            })
            .collect()
    }
}

/// Sort by CPU usage descending (pid ascending on ties) and keep `limit`
pub fn rank_processes(mut entries: Vec<ProcessEntry>, limit: usize) -> Vec<ProcessEntry> {
    entries.sort_by(|a, b| {
        b.cpu_percent
            .total_cmp(&a.cpu_percent)
            .then_with(|| a.pid.cmp(&b.pid))
    });
    entries.truncate(limit);
    entries
}

/// Names of interfaces that are up, sorted, at most `limit`
pub fn active_interfaces(interfaces: Vec<(String, bool)>, limit: usize) -> Vec<String> {
    let mut names: Vec<String> = interfaces
        .into_iter()
        .filter_map(|(name, up)| up.then_some(name))
        .collect();
    names.sort();
    names.truncate(limit);
    names
}

fn transmitted_received(networks: &Networks) -> (u64, u64) {
    networks.list().iter().fold((0, 0), |(sent, received), (_, data)| {
        (
            sent + data.total_transmitted(),
            received + data.total_received(),
        )
    })
}

#[cfg(target_os = "linux")]
fn interface_is_up(name: &str, carried_traffic: bool) -> bool {
    const IFF_UP: u32 = 0x1;

    // /sys/class/net/<if>/flags 形如 "0x1003"
    match std::fs::read_to_string(format!("/sys/class/net/{}/flags", name)) {
        Ok(flags) => u32::from_str_radix(flags.trim().trim_start_matches("0x"), 16)
            .map(|flags| flags & IFF_UP != 0)
            .unwrap_or(carried_traffic),
        Err(_) => carried_traffic,
    }
}

#[cfg(not(target_os = "linux"))]
fn interface_is_up(_name: &str, carried_traffic: bool) -> bool {
    carried_traffic
}

fn current_user() -> String {
    ["USER", "USERNAME", "LOGNAME"]
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|v| !v.is_empty()))
        .unwrap_or_else(|| "Unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(pid: u32, cpu: f32) -> ProcessEntry {
        ProcessEntry {
            pid,
            name: format!("proc{}", pid),
            cpu_percent: cpu,
            memory_percent: 0.0,
            status: "sleeping".to_string(),
        }
    }

    #[test]
    fn test_rank_processes() {
        let ranked = rank_processes(
            vec![entry(5, 1.0), entry(3, 90.0), entry(9, 12.5), entry(1, 12.5)],
            3,
        );
        let pids: Vec<u32> = ranked.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![3, 1, 9]);
    }

    #[test]
    fn test_active_interfaces() {
        let names = active_interfaces(
            vec![
                ("wlan0".to_string(), true),
                ("docker0".to_string(), false),
                ("lo".to_string(), true),
                ("eth0".to_string(), true),
                ("tun0".to_string(), true),
            ],
            3,
        );
        assert_eq!(names, vec!["eth0", "lo", "tun0"]);
    }
}
