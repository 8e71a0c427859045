//! Shared formatting utilities for UI components.

use std::time::Duration;

/// Format axis label with smart precision.
pub fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-2..1e5).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.0}", val)
    } else if abs_val >= 1.0 {
        format!("{:.1}", val)
    } else {
        format!("{:.2}", val)
    }
}

/// Format a solve duration in seconds with millisecond precision.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.3} s", elapsed.as_secs_f64())
}
