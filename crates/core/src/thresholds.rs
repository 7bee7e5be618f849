//! Risk threshold configuration.

use serde::{Deserialize, Serialize};

/// Default low-stock ceiling in units.
pub const DEFAULT_LOW_STOCK: u32 = 5;

/// Default expiry warning window in days.
pub const DEFAULT_EXPIRY_DAYS: i64 = 7;

/// Default slow-moving lookback window in days.
pub const DEFAULT_SLOW_MOVING_WINDOW: i64 = 30;

/// Default slow-moving velocity floor in units/day.
pub const DEFAULT_SLOW_MOVING_THRESHOLD: f64 = 0.5;

/// Per-request risk thresholds.
///
/// Every field is optional on the wire; unspecified fields fall back to the
/// documented defaults. Responses echo the effective struct back so callers
/// can audit exactly what was applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Quantities at or below this are low stock.
    pub low_stock: u32,
    /// Products expiring within this many days are near expiry.
    pub expiry_days: i64,
    /// Lookback window for the velocity computation, in days.
    pub slow_moving_window: i64,
    /// Velocities below this floor are slow moving.
    pub slow_moving_threshold: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            low_stock: DEFAULT_LOW_STOCK,
            expiry_days: DEFAULT_EXPIRY_DAYS,
            slow_moving_window: DEFAULT_SLOW_MOVING_WINDOW,
            slow_moving_threshold: DEFAULT_SLOW_MOVING_THRESHOLD,
        }
    }
}
