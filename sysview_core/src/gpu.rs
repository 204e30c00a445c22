//! NVIDIA GPU readings through `nvidia-smi`

use crate::error::{AppError, Result};
use crate::snapshot::{GpuDevice, GpuStatus};
use std::path::PathBuf;
use std::process::Command;

const QUERY_FIELDS: &str =
    "name,utilization.gpu,memory.used,memory.total,temperature.gpu,power.draw,power.limit";

/// Handle to a working `nvidia-smi`, probed once at startup
#[derive(Debug, Clone)]
pub struct NvidiaSmi {
    binary: PathBuf,
    gpu_count: usize,
}

impl NvidiaSmi {
    /// Locate `nvidia-smi` and count GPUs. `None` when the tool is missing,
    /// the driver is not loaded or no GPU is listed.
    pub fn detect() -> Option<Self> {
        let binary = which::which("nvidia-smi").ok()?;
        let output = Command::new(&binary).arg("-L").output().ok()?;
        if !output.status.success() {
            log::info!("nvidia-smi -L exited with {}", output.status);
            return None;
        }

        let gpu_count = String::from_utf8_lossy(&output.stdout)
            .lines()
            .filter(|line| line.starts_with("GPU "))
            .count();
        if gpu_count == 0 {
            return None;
        }

        log::info!("Detected {} NVIDIA GPU(s) via {:?}", gpu_count, binary);
        Some(Self { binary, gpu_count })
    }

    pub fn gpu_count(&self) -> usize {
        self.gpu_count
    }

    /// Query every GPU once
    pub fn query(&self) -> Result<Vec<GpuDevice>> {
        let output = Command::new(&self.binary)
            .arg(format!("--query-gpu={}", QUERY_FIELDS))
            .arg("--format=csv,noheader,nounits")
            .output()
            .map_err(|e| AppError::gpu(format!("failed to run nvidia-smi: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::gpu(format!(
                "nvidia-smi exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        parse_query_output(&String::from_utf8_lossy(&output.stdout))
    }

    /// Query and fold failures into the panel state
    pub fn status(&self) -> GpuStatus {
        match self.query() {
            Ok(devices) => GpuStatus::Devices(devices),
            Err(e) => {
                log::warn!("{}", e);
                GpuStatus::Error(e.to_string())
            }
        }
    }
}

/// Parse `--format=csv,noheader,nounits` output, one GPU per line
pub fn parse_query_output(stdout: &str) -> Result<Vec<GpuDevice>> {
    stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Result<GpuDevice> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < 7 {
        return Err(AppError::gpu(format!(
            "expected 7 fields, got {}: {:?}",
            fields.len(),
            line
        )));
    }

    let required = |idx: usize, what: &str| -> Result<f64> {
        parse_number(fields[idx])
            .ok_or_else(|| AppError::gpu(format!("unreadable {}: {:?}", what, fields[idx])))
    };

    Ok(GpuDevice {
        name: fields[0].to_string(),
        utilization: required(1, "utilization")? as u32,
        memory_used_mb: required(2, "memory.used")? as u64,
        memory_total_mb: required(3, "memory.total")? as u64,
        temperature_c: parse_number(fields[4]).map(|t| t as u32).unwrap_or(0),
        power_draw_w: parse_number(fields[5]).map(|w| w as u32),
        power_limit_w: parse_number(fields[6]).map(|w| w as u32),
    })
}

// "[N/A]" / "[Not Supported]" 之类的占位符返回 None
fn parse_number(field: &str) -> Option<f64> {
    field.parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_line() {
        let devices =
            parse_query_output("NVIDIA GeForce RTX 3080, 42, 1024, 10240, 61, 215.37, 320.00\n")
                .unwrap();
        assert_eq!(
            devices,
            vec![GpuDevice {
                name: "NVIDIA GeForce RTX 3080".to_string(),
                utilization: 42,
                memory_used_mb: 1024,
                memory_total_mb: 10240,
                temperature_c: 61,
                power_draw_w: Some(215),
                power_limit_w: Some(320),
            }]
        );
        assert_eq!(devices[0].power_label(), "215W/320W");
        assert!((devices[0].memory_percent() - 10.0).abs() < 0.01);
    }

    #[test]
    fn test_placeholders_fall_back() {
        let devices = parse_query_output(
            "Tesla T4, 0, 0, 15360, [N/A], [Not Supported], [Not Supported]\n\
             Tesla T4, 3, 200, 15360, 40, 27.5, 70.00\n",
        )
        .unwrap();
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].temperature_c, 0);
        assert_eq!(devices[0].power_label(), "N/A");
        assert_eq!(devices[1].power_label(), "27W/70W");
    }

    #[test]
    fn test_malformed_line_is_error() {
        assert!(parse_query_output("garbage\n").is_err());
        assert!(parse_query_output("A, x, 1, 2, 3, 4, 5").is_err());
        assert!(parse_query_output("").unwrap().is_empty());
    }
}
