//! Rendering tests against ratatui's in-memory backend

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use sysview::app::{handle_event, Control};
use sysview::ui::{self, View};
use sysview_core::config::ThresholdConfig;
use sysview_core::snapshot::{
    CpuMemory, DiskEntry, GpuDevice, GpuStatus, LoadAverage, NetworkStats, ProcessEntry,
    SystemInfo, Usage,
};
use sysview_core::Snapshot;

fn fixture(gpu: GpuStatus) -> Snapshot {
    Snapshot {
        system: SystemInfo {
            os: "Linux".to_string(),
            arch: "x86_64".to_string(),
            kernel: "6.8.0".to_string(),
            host: "devbox".to_string(),
            session_uptime: 3723,
            host_uptime: 90_000,
            user: "alice".to_string(),
            clock: "2024-05-01 12:00:00".to_string(),
            battery: None,
        },
        cpu_memory: CpuMemory {
            cpu_percent: 85.0,
            cpu_count: 8,
            cpu_freq_mhz: Some(3200),
            cpu_average: 42.0,
            load_average: LoadAverage {
                one_minute: 1.5,
                five_minutes: 1.0,
                fifteen_minutes: 0.5,
            },
            memory: Usage::new(8 * 1024 * 1024 * 1024, 16 * 1024 * 1024 * 1024),
            swap: None,
        },
        gpu,
        network: NetworkStats {
            upload_rate: 2048.0,
            download_rate: 1536.0,
            total_sent: 10_000_000,
            total_received: 20_000_000,
            packets_sent: 12_345,
            packets_received: 67_890,
            active_interfaces: vec!["eth0".to_string(), "lo".to_string()],
        },
        processes: vec![
            ProcessEntry {
                pid: 4242,
                name: "cargo".to_string(),
                cpu_percent: 75.5,
                memory_percent: 3.2,
                status: "run".to_string(),
            },
            ProcessEntry {
                pid: 1,
                name: "systemd".to_string(),
                cpu_percent: 0.1,
                memory_percent: 0.1,
                status: "sleeping".to_string(),
            },
        ],
        disks: vec![DiskEntry::new(
            "/dev/nvme0n1p2".to_string(),
            "/".to_string(),
            100 * 1024 * 1024 * 1024,
            500 * 1024 * 1024 * 1024,
        )],
    }
}

fn render(view: &View, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| ui::draw(frame, view)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn test_all_panels_rendered() {
    let snapshot = fixture(GpuStatus::Unavailable);
    let thresholds = ThresholdConfig::default();
    let view = View {
        snapshot: Some(&snapshot),
        thresholds: &thresholds,
        show_header: true,
        status: None,
    };

    let screen = render(&view, 160, 50);

    for title in [
        "System Info",
        "CPU & Memory",
        "GPU Status",
        "Network Traffic",
        "Top Processes",
        "Disk Usage",
    ] {
        assert!(screen.contains(title), "missing panel {:?}", title);
    }
    assert!(screen.contains("cargo"));
    assert!(screen.contains("4242"));
    assert!(screen.contains("75.5"));
    assert!(screen.contains("01:02:03"));
    assert!(screen.contains("8.0GB / 16.0GB"));
    assert!(screen.contains("eth0, lo"));
    assert!(screen.contains("12,345"));
    assert!(screen.contains("No NVIDIA GPUs detected"));
    assert!(screen.contains("/dev/nvme0n1p2"));
    assert!(screen.contains("Press Ctrl+C to exit"));
}

#[test]
fn test_gpu_rows_and_errors() {
    let thresholds = ThresholdConfig::default();

    let snapshot = fixture(GpuStatus::Devices(vec![GpuDevice {
        name: "NVIDIA GeForce RTX 4090".to_string(),
        utilization: 93,
        memory_used_mb: 2048,
        memory_total_mb: 24564,
        temperature_c: 71,
        power_draw_w: Some(300),
        power_limit_w: Some(450),
    }]));
    let view = View {
        snapshot: Some(&snapshot),
        thresholds: &thresholds,
        show_header: false,
        status: None,
    };
    let screen = render(&view, 160, 40);
    assert!(screen.contains("RTX 4090"));
    assert!(!screen.contains("GeForce"));
    assert!(screen.contains("2048MB/24564MB"));
    assert!(screen.contains("300W/450W"));

    let snapshot = fixture(GpuStatus::Error("driver mismatch".to_string()));
    let view = View {
        snapshot: Some(&snapshot),
        ..view
    };
    let screen = render(&view, 160, 40);
    assert!(screen.contains("driver mismatch"));
}

#[test]
fn test_header_toggle_and_narrow_banner() {
    let snapshot = fixture(GpuStatus::Unavailable);
    let thresholds = ThresholdConfig::default();
    let view = View {
        snapshot: Some(&snapshot),
        thresholds: &thresholds,
        show_header: true,
        status: None,
    };

    let narrow = render(&view, 100, 50);
    assert!(narrow.contains("SYSTEM OVERVIEW"));

    let hidden = render(
        &View {
            show_header: false,
            ..view
        },
        100,
        50,
    );
    assert!(!hidden.contains("SYSTEM OVERVIEW"));
    assert!(hidden.contains("Top Processes"));
}

#[test]
fn test_placeholder_and_status_line() {
    let thresholds = ThresholdConfig::default();
    let view = View {
        snapshot: None,
        thresholds: &thresholds,
        show_header: false,
        status: Some("memory information unavailable"),
    };

    let screen = render(&view, 120, 30);
    assert!(screen.contains("Collecting system information"));
    assert!(screen.contains("Error: memory information unavailable"));
}

fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> Event {
    Event::Key(KeyEvent {
        code,
        modifiers,
        kind,
        state: KeyEventState::NONE,
    })
}

#[test]
fn test_quit_keys() {
    let press = KeyEventKind::Press;
    assert_eq!(
        handle_event(&key(KeyCode::Char('q'), KeyModifiers::NONE, press)),
        Control::Quit
    );
    assert_eq!(
        handle_event(&key(KeyCode::Esc, KeyModifiers::NONE, press)),
        Control::Quit
    );
    assert_eq!(
        handle_event(&key(KeyCode::Char('c'), KeyModifiers::CONTROL, press)),
        Control::Quit
    );
    assert_eq!(
        handle_event(&key(KeyCode::Char('c'), KeyModifiers::NONE, press)),
        Control::Continue
    );
    assert_eq!(
        handle_event(&key(KeyCode::Char('q'), KeyModifiers::NONE, KeyEventKind::Release)),
        Control::Continue
    );
    assert_eq!(handle_event(&Event::Resize(80, 24)), Control::Redraw);
}
