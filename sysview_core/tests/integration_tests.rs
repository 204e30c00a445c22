//! Integration tests for sysview_core

use sysview_core::{
    config::{AppConfig, SystemConfig},
    metrics::RollingAverage,
    snapshot::GpuStatus,
    AppError, SystemMonitor, Thresholds,
};

#[test]
fn test_system_monitor() {
    let mut monitor = SystemMonitor::new(SystemConfig::default());

    let snapshot = monitor.refresh().unwrap();

    assert!(snapshot.cpu_memory.memory.total > 0);
    assert!(snapshot.cpu_memory.cpu_count > 0);
    assert!(snapshot.cpu_memory.memory.percent >= 0.0);
    assert!(snapshot.processes.len() <= 10);
    assert!(snapshot.disks.len() <= 5);
    assert!(snapshot.network.active_interfaces.len() <= 3);
    assert!(snapshot.network.upload_rate >= 0.0);
    assert!(snapshot.network.download_rate >= 0.0);
    assert_eq!(snapshot.system.clock.len(), "2024-01-01 00:00:00".len());

    if monitor.gpu_count() == 0 {
        assert_eq!(snapshot.gpu, GpuStatus::Unavailable);
    }

    println!("System has {} CPU cores", snapshot.cpu_memory.cpu_count);
    println!(
        "Total memory: {:.2} GB",
        snapshot.cpu_memory.memory.total as f64 / 1e9
    );
}

#[test]
fn test_processes_sorted_by_cpu() {
    let mut monitor = SystemMonitor::new(SystemConfig {
        top_processes: 5,
        ..SystemConfig::default()
    });

    let snapshot = monitor.refresh().unwrap();
    let processes = &snapshot.processes;

    assert!(!processes.is_empty());
    assert!(processes.len() <= 5);
    for pair in processes.windows(2) {
        assert!(pair[0].cpu_percent >= pair[1].cpu_percent);
    }
}

#[test]
fn test_rolling_average() {
    let mut avg = RollingAverage::new(3);

    assert_eq!(avg.average(), 0.0);
    assert!(avg.is_empty());

    avg.add(1.0);
    assert_eq!(avg.average(), 1.0);
    assert_eq!(avg.len(), 1);

    avg.add(2.0);
    avg.add(3.0);
    assert_eq!(avg.average(), 2.0); // (1+2+3)/3
    assert_eq!(avg.len(), 3);

    // Test rolling behavior
    avg.add(4.0);
    assert_eq!(avg.average(), 3.0); // (2+3+4)/3, 1.0 was dropped
    assert_eq!(avg.len(), 3);
}

#[test]
fn test_config_save_load() {
    use tempfile::tempdir;

    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("sysview").join("config.toml");

    let mut original_config = AppConfig::default();
    original_config.ui.refresh_interval_ms = 2000;
    original_config.ui.show_header = false;
    original_config.thresholds.gpu_temperature = Thresholds::new(70.0, 85.0);

    assert!(original_config.save_to(&config_path).is_ok());

    let loaded_config = AppConfig::load_from(&config_path).unwrap();
    assert_eq!(loaded_config.ui.refresh_interval_ms, 2000);
    assert!(!loaded_config.ui.show_header);
    assert_eq!(
        loaded_config.thresholds.gpu_temperature,
        Thresholds::new(70.0, 85.0)
    );
}

#[test]
fn test_config_rejects_garbage() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "[ui\nrefresh_interval_ms = ").unwrap();

    let err = AppConfig::load_from(&config_path).unwrap_err();
    assert!(matches!(err, AppError::Serialization { .. }));

    let missing = AppConfig::load_from(&temp_dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(missing, AppError::Io { .. }));
}

// Benchmark tests (run with `cargo test --release -- --ignored bench`)
#[test]
#[ignore]
fn bench_system_monitor_refresh() {
    let mut monitor = SystemMonitor::new(SystemConfig::default());
    let start = std::time::Instant::now();

    for _ in 0..100 {
        let _ = monitor.refresh();
    }

    let elapsed = start.elapsed();
    println!("100 system refreshes took: {:?}", elapsed);
    println!("Average per refresh: {:?}", elapsed / 100);
}
