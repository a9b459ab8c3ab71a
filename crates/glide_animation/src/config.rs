//! Scheduler configuration

use crate::easing::Easing;
use glide_core::{GlideError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Scheduler settings, loadable from TOML:
///
/// ```toml
/// frame_interval_ms = 16
/// default_easing = "easeInOutQuad"
/// max_frame_delta_ms = 250.0
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Cadence of the fallback driver, in milliseconds (~60 fps by default)
    pub frame_interval_ms: u64,
    /// Easing for animations that do not choose one
    pub default_easing: Easing,
    /// Log a warning when consecutive ticks are further apart than this
    pub max_frame_delta_ms: Option<f64>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
            default_easing: Easing::Linear,
            max_frame_delta_ms: None,
        }
    }
}

impl SchedulerConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: SchedulerConfig =
            toml::from_str(source).map_err(|e| GlideError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.frame_interval_ms == 0 {
            return Err(GlideError::Config(
                "frame_interval_ms must be greater than zero".to_string(),
            ));
        }
        if let Some(delta) = self.max_frame_delta_ms {
            if !delta.is_finite() || delta <= 0.0 {
                return Err(GlideError::Config(format!(
                    "max_frame_delta_ms must be positive, got {delta}"
                )));
            }
        }
        if let Easing::Custom(_) = self.default_easing {
            return Err(GlideError::Config(
                "default_easing must be a named easing".to_string(),
            ));
        }
        Ok(())
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}
