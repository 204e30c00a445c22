//! Warning/critical thresholds and the severity levels derived from them

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};

/// Severity of a reading, drives the panel colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Normal,
    Warning,
    Critical,
}

/// A warning/critical pair. Both comparisons are strict: a reading equal
/// to the limit stays in the lower level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub warning: f32,
    pub critical: f32,
}

impl Thresholds {
    pub const fn new(warning: f32, critical: f32) -> Self {
        Self { warning, critical }
    }

    pub fn level(&self, value: f32) -> Level {
        if value > self.critical {
            Level::Critical
        } else if value > self.warning {
            Level::Warning
        } else {
            Level::Normal
        }
    }

    /// Reject limits that are not finite numbers (`nan`, `inf` are valid TOML)
    pub fn check(&self, name: &str) -> Result<()> {
        if self.warning.is_finite() && self.critical.is_finite() {
            Ok(())
        } else {
            Err(AppError::config(format!(
                "thresholds.{} must be finite numbers, got warning = {}, critical = {}",
                name, self.warning, self.critical
            )))
        }
    }

    /// Keep both limits in `0..=max` and the warning at or below the critical
    pub fn clamp(&mut self, max: f32) {
        // max/min 遇到 NaN 取另一边，不会 panic
        self.critical = self.critical.max(0.0).min(max);
        self.warning = self.warning.max(0.0).min(self.critical);
    }
}

impl From<(f32, f32)> for Thresholds {
    fn from((warning, critical): (f32, f32)) -> Self {
        Self::new(warning, critical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_strict() {
        let t = Thresholds::new(60.0, 80.0);
        assert_eq!(t.level(0.0), Level::Normal);
        assert_eq!(t.level(60.0), Level::Normal);
        assert_eq!(t.level(60.1), Level::Warning);
        assert_eq!(t.level(80.0), Level::Warning);
        assert_eq!(t.level(80.5), Level::Critical);
    }

    #[test]
    fn test_clamp_orders_limits() {
        let mut t = Thresholds::new(95.0, 150.0);
        t.clamp(100.0);
        assert_eq!(t.critical, 100.0);
        assert_eq!(t.warning, 95.0);

        let mut inverted = Thresholds::new(90.0, 50.0);
        inverted.clamp(100.0);
        assert_eq!(inverted.warning, 50.0);
        assert_eq!(inverted.critical, 50.0);
    }

    #[test]
    fn test_non_finite_limits_are_rejected() {
        assert!(Thresholds::new(60.0, 80.0).check("cpu").is_ok());

        let err = Thresholds::new(60.0, f32::NAN).check("cpu").unwrap_err();
        assert!(err.to_string().contains("thresholds.cpu"));
        assert!(Thresholds::new(f32::NAN, 80.0).check("disk").is_err());
        assert!(Thresholds::new(60.0, f32::INFINITY).check("swap").is_err());

        let mut t = Thresholds::new(f32::NAN, f32::NAN);
        t.clamp(100.0);
        assert_eq!(t, Thresholds::new(0.0, 0.0));
    }
}
