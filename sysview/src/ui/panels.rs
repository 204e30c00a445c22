//! One table per dashboard panel

use super::theme;
use ratatui::layout::Constraint;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Cell, Row, Table};
use sysview_core::config::ThresholdConfig;
use sysview_core::constants::{icons, limits};
use sysview_core::format::{
    bytes_to_human, format_count, format_duration_hms, format_host_uptime, short_gpu_name,
    truncate, usage_bar,
};
use sysview_core::snapshot::{
    CpuMemory, DiskEntry, GpuStatus, NetworkStats, ProcessEntry, SystemInfo, Usage,
};
use sysview_core::Thresholds;

fn label(text: impl Into<String>) -> Cell<'static> {
    Cell::from(Span::styled(text.into(), Style::new().fg(theme::LABEL)))
}

fn value(text: impl Into<String>) -> Cell<'static> {
    Cell::from(Span::styled(text.into(), Style::new().fg(theme::VALUE)))
}

fn colored(text: impl Into<String>, color: ratatui::style::Color) -> Cell<'static> {
    Cell::from(Span::styled(text.into(), Style::new().fg(color)))
}

fn two_columns(rows: Vec<Row<'static>>, title: &str) -> Table<'static> {
    Table::new(rows, [Constraint::Length(22), Constraint::Fill(1)]).block(theme::panel(title))
}

/// `(percent, bar)` cells colored by level
fn gauge_cells(percent: f32, thresholds: &Thresholds) -> (Cell<'static>, Cell<'static>) {
    let color = theme::level_color(thresholds.level(percent));
    (
        value(format!("{:5.1}%", percent)),
        colored(usage_bar(percent), color),
    )
}

pub fn system_info(info: &SystemInfo) -> Table<'static> {
    let mut rows = vec![
        Row::new([label(icons::SYSTEM), value(format!("{} {}", info.os, info.arch))]),
        Row::new([label(icons::KERNEL), value(info.kernel.clone())]),
        Row::new([label(icons::HOST), value(info.host.clone())]),
        Row::new([label(icons::UPTIME), value(format_duration_hms(info.session_uptime))]),
        Row::new([label(icons::BOOT), value(format_host_uptime(info.host_uptime))]),
        Row::new([label(icons::USER), value(info.user.clone())]),
        Row::new([label(icons::TIME), value(info.clock.clone())]),
    ];

    if let Some(battery) = info.battery {
        let state = if battery.charging { " (charging)" } else { "" };
        rows.push(Row::new([
            label(icons::BATTERY),
            value(format!("{:.0}%{}", battery.percent, state)),
        ]));
    }

    two_columns(rows, "System Info")
}

pub fn cpu_memory(data: &CpuMemory, thresholds: &ThresholdConfig) -> Table<'static> {
    let mut rows = Vec::new();

    let (cpu_value, cpu_bar) = gauge_cells(data.cpu_percent, &thresholds.cpu);
    rows.push(Row::new([
        label(format!("🔥 CPU ({} cores)", data.cpu_count)),
        cpu_value,
        cpu_bar,
    ]));

    if let Some(freq) = data.cpu_freq_mhz {
        rows.push(Row::new([label(icons::CPU_FREQ), value(format!("{} MHz", freq)), value("")]));
    }

    rows.push(Row::new([
        label(icons::CPU_AVERAGE),
        value(format!("{:5.1}%", data.cpu_average)),
        value(""),
    ]));

    let load = data.load_average;
    rows.push(Row::new([
        label(icons::LOAD),
        value(format!(
            "{:.2} {:.2} {:.2}",
            load.one_minute, load.five_minutes, load.fifteen_minutes
        )),
        value(""),
    ]));

    rows.extend(usage_rows(icons::MEMORY, &data.memory, &thresholds.memory));

    if let Some(swap) = &data.swap {
        rows.extend(usage_rows(icons::SWAP, swap, &thresholds.swap));
    }

    Table::new(
        rows,
        [
            Constraint::Length(22),
            Constraint::Length(18),
            Constraint::Length(limits::BAR_CELLS as u16),
        ],
    )
    .block(theme::panel("CPU & Memory"))
}

fn usage_rows(name: &str, usage: &Usage, thresholds: &Thresholds) -> [Row<'static>; 2] {
    let (percent, bar) = gauge_cells(usage.percent, thresholds);
    [
        Row::new([label(name), percent, bar]),
        Row::new([
            label(""),
            value(format!(
                "{} / {}",
                bytes_to_human(usage.used as f64),
                bytes_to_human(usage.total as f64)
            )),
            value(""),
        ]),
    ]
}

pub fn gpu(status: &GpuStatus, thresholds: &ThresholdConfig) -> Table<'static> {
    let widths = [
        Constraint::Length(16),
        Constraint::Length(6),
        Constraint::Length(16),
        Constraint::Length(7),
        Constraint::Fill(1),
    ];

    let rows: Vec<Row<'static>> = match status {
        GpuStatus::Unavailable => {
            return Table::new(
                [Row::new([colored(icons::NO_GPU, theme::BAR)])],
                [Constraint::Fill(1)],
            )
            .block(theme::panel("GPU Status"));
        }
        GpuStatus::Error(message) => {
            return Table::new(
                [Row::new([
                    label(icons::ERROR),
                    colored(truncate(message, limits::GPU_ERROR_WIDTH), theme::ERROR),
                ])],
                [Constraint::Length(16), Constraint::Fill(1)],
            )
            .block(theme::panel("GPU Status"));
        }
        GpuStatus::Devices(devices) => devices
            .iter()
            .map(|device| {
                let util_color = theme::level_color(
                    thresholds.gpu_utilization.level(device.utilization as f32),
                );
                let temp_color = theme::level_color(
                    thresholds.gpu_temperature.level(device.temperature_c as f32),
                );
                Row::new([
                    label(format!("{} {}", icons::GPU, short_gpu_name(&device.name))),
                    colored(format!("{}%", device.utilization), util_color),
                    value(format!(
                        "{}MB/{}MB",
                        device.memory_used_mb, device.memory_total_mb
                    )),
                    colored(format!("{}°C", device.temperature_c), temp_color),
                    value(device.power_label()),
                ])
            })
            .collect(),
    };

    Table::new(rows, widths).block(theme::panel("GPU Status"))
}

pub fn network(stats: &NetworkStats) -> Table<'static> {
    let rows = vec![
        Row::new([
            label(icons::UPLOAD),
            value(format!("{}/s", bytes_to_human(stats.upload_rate))),
        ]),
        Row::new([
            label(icons::DOWNLOAD),
            value(format!("{}/s", bytes_to_human(stats.download_rate))),
        ]),
        Row::new([
            label(icons::TOTAL_SENT),
            value(bytes_to_human(stats.total_sent as f64)),
        ]),
        Row::new([
            label(icons::TOTAL_RECEIVED),
            value(bytes_to_human(stats.total_received as f64)),
        ]),
        Row::new([label(icons::PACKETS_SENT), value(format_count(stats.packets_sent))]),
        Row::new([
            label(icons::PACKETS_RECEIVED),
            value(format_count(stats.packets_received)),
        ]),
        Row::new([
            label(icons::INTERFACES),
            value(stats.active_interfaces.join(", ")),
        ]),
    ];

    two_columns(rows, "Network Traffic")
}

pub fn processes(entries: &[ProcessEntry], thresholds: &ThresholdConfig) -> Table<'static> {
    let header = Row::new(["PID", "Process", "CPU%", "MEM%", "Status"])
        .style(Style::new().add_modifier(Modifier::BOLD));

    let rows: Vec<Row<'static>> = entries
        .iter()
        .map(|proc| {
            let cpu_color =
                theme::process_level_color(thresholds.process_cpu.level(proc.cpu_percent));
            let mem_color =
                theme::process_level_color(thresholds.process_memory.level(proc.memory_percent));
            Row::new([
                label(proc.pid.to_string()),
                value(truncate(&proc.name, limits::PROCESS_NAME_WIDTH)),
                colored(format!("{:.1}", proc.cpu_percent), cpu_color),
                colored(format!("{:.1}", proc.memory_percent), mem_color),
                colored(
                    truncate(&proc.status, limits::PROCESS_STATUS_WIDTH),
                    ratatui::style::Color::Blue,
                ),
            ])
        })
        .collect();

    Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(limits::PROCESS_NAME_WIDTH as u16),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(limits::PROCESS_STATUS_WIDTH as u16),
        ],
    )
    .header(header)
    .block(theme::panel("Top Processes"))
}

pub fn disks(entries: &[DiskEntry], thresholds: &ThresholdConfig) -> Table<'static> {
    let rows: Vec<Row<'static>> = entries
        .iter()
        .map(|disk| {
            let color = theme::level_color(thresholds.disk.level(disk.percent));
            Row::new([
                label(format!("{} {}", icons::DISK, disk.device)),
                value(format!("{:.1}%", disk.percent)),
                value(format!(
                    "{} / {}",
                    bytes_to_human(disk.free as f64),
                    bytes_to_human(disk.total as f64)
                )),
                colored(usage_bar(disk.percent), color),
            ])
        })
        .collect();

    Table::new(
        rows,
        [
            Constraint::Length(18),
            Constraint::Length(7),
            Constraint::Length(18),
            Constraint::Length(limits::BAR_CELLS as u16),
        ],
    )
    .block(theme::panel("Disk Usage"))
}
