//! Easing functions for animations

use glide_core::{GlideError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Easing function type
///
/// Named variants form a closed set that can be resolved from their camelCase names.
/// `Custom` wraps a caller-supplied function and has no name.
#[derive(Clone, Copy, Debug, Default)]
pub enum Easing {
    #[default]
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    EaseInQuint,
    EaseOutQuint,
    EaseInOutQuint,
    Custom(fn(f64) -> f64),
}

impl Easing {
    /// Every named easing, in library order
    pub const ALL: [Easing; 13] = [
        Easing::Linear,
        Easing::EaseInQuad,
        Easing::EaseOutQuad,
        Easing::EaseInOutQuad,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
        Easing::EaseInQuart,
        Easing::EaseOutQuart,
        Easing::EaseInOutQuart,
        Easing::EaseInQuint,
        Easing::EaseOutQuint,
        Easing::EaseInOutQuint,
    ];

    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => t * (2.0 - t),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::EaseInCubic => t * t * t,
            Easing::EaseOutCubic => (t - 1.0).powi(3) + 1.0,
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
                }
            }
            Easing::EaseInQuart => t.powi(4),
            Easing::EaseOutQuart => 1.0 - (t - 1.0).powi(4),
            Easing::EaseInOutQuart => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - 8.0 * (t - 1.0).powi(4)
                }
            }
            Easing::EaseInQuint => t.powi(5),
            Easing::EaseOutQuint => 1.0 + (t - 1.0).powi(5),
            Easing::EaseInOutQuint => {
                if t < 0.5 {
                    16.0 * t.powi(5)
                } else {
                    1.0 + 16.0 * (t - 1.0).powi(5)
                }
            }
            Easing::Custom(f) => f(t),
        }
    }

    /// Canonical name of this easing
    pub fn name(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseInQuad => "easeInQuad",
            Easing::EaseOutQuad => "easeOutQuad",
            Easing::EaseInOutQuad => "easeInOutQuad",
            Easing::EaseInCubic => "easeInCubic",
            Easing::EaseOutCubic => "easeOutCubic",
            Easing::EaseInOutCubic => "easeInOutCubic",
            Easing::EaseInQuart => "easeInQuart",
            Easing::EaseOutQuart => "easeOutQuart",
            Easing::EaseInOutQuart => "easeInOutQuart",
            Easing::EaseInQuint => "easeInQuint",
            Easing::EaseOutQuint => "easeOutQuint",
            Easing::EaseInOutQuint => "easeInOutQuint",
            Easing::Custom(_) => "custom",
        }
    }

    /// Look up a named easing
    pub fn from_name(name: &str) -> Result<Self> {
        Easing::ALL
            .iter()
            .copied()
            .find(|easing| easing.name() == name)
            .ok_or_else(|| GlideError::UnknownEasing(name.to_owned()))
    }
}

/// Named easings compare by variant. Custom easings compare by function address, which
/// is only a hint: one function may have several addresses across codegen units.
impl PartialEq for Easing {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Easing::Custom(a), Easing::Custom(b)) => *a as usize == *b as usize,
            (Easing::Custom(_), _) | (_, Easing::Custom(_)) => false,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

impl FromStr for Easing {
    type Err = GlideError;

    fn from_str(s: &str) -> Result<Self> {
        Easing::from_name(s)
    }
}

impl From<fn(f64) -> f64> for Easing {
    fn from(f: fn(f64) -> f64) -> Self {
        Easing::Custom(f)
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Easing {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Easing {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Easing::from_name(&name).map_err(serde::de::Error::custom)
    }
}
