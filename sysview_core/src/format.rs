//! Text formatting helpers shared by the collectors and the renderer

use crate::constants::limits;

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Convert a byte count into a human readable string with one decimal
pub fn bytes_to_human(bytes: f64) -> String {
    let mut value = bytes;
    for unit in UNITS {
        if value < 1024.0 {
            return format!("{:.1}{}", value, unit);
        }
        value /= 1024.0;
    }
    format!("{:.1}PB", value)
}

/// Fixed width usage bar, one filled cell per 5%
pub fn usage_bar(percent: f32) -> String {
    let filled = if percent.is_finite() {
        ((percent / 5.0).floor().max(0.0) as usize).min(limits::BAR_CELLS)
    } else {
        0
    };
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(limits::BAR_CELLS - filled));
    bar
}

/// `HH:MM:SS`, hours are not capped at 24
pub fn format_duration_hms(secs: u64) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}

/// Compact host uptime, e.g. `3d 4h 12m`
pub fn format_host_uptime(secs: u64) -> String {
    let days = secs / 86400;
    let hours = (secs % 86400) / 3600;
    let minutes = (secs % 3600) / 60;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Integer with `,` thousands separators
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Keep at most `max` characters
pub fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Drop vendor prefixes so the model fits the GPU column
pub fn short_gpu_name(name: &str) -> String {
    let name = name.replace("NVIDIA ", "").replace("GeForce ", "");
    truncate(&name, limits::GPU_NAME_WIDTH)
}
