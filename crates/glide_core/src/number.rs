//! Number serialization for display attributes

use std::fmt;

/// Formats an `f64` the way attribute strings expect.
///
/// Shortest round-trip digits, like `{}`, with three differences:
/// - negative zero prints as `0`
/// - magnitudes below `1e-6` or from `1e21` up use exponent form (`1.2e-13`, `1e+21`)
/// - infinities print as `Infinity` / `-Infinity`
///
/// ```rust
/// use glide_core::CssNumber;
///
/// assert_eq!(CssNumber(12.5).to_string(), "12.5");
/// assert_eq!(CssNumber(-0.0).to_string(), "0");
/// assert_eq!(CssNumber(1.2e-13).to_string(), "1.2e-13");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CssNumber(pub f64);

impl fmt::Display for CssNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value == 0.0 {
            return f.write_str("0");
        }
        if value.is_nan() {
            return f.write_str("NaN");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
        }
        if (1e-6..1e21).contains(&value.abs()) {
            return write!(f, "{value}");
        }

        let exponential = format!("{value:e}");
        match exponential.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(f, "{mantissa}e+{exponent}")
            }
            _ => f.write_str(&exponential),
        }
    }
}
