//! Color model
//!
//! Two small value types, [`Hsla`] and [`Rgba`], used as composite animation targets.
//! Both serialize to the CSS functional notation that display attributes accept.

use crate::number::CssNumber;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hue / saturation / lightness / alpha color.
///
/// Hue is in degrees (0 to 360), saturation and lightness are percentages (0 to 100),
/// alpha is opacity (0 to 1). Values are not clamped, so hue may wind past a full turn
/// while it animates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Hsla {
    pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    /// Create an opaque color (alpha = 1.0).
    pub const fn opaque(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l, a: 1.0 }
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({},{}%,{}%,{})",
            CssNumber(self.h),
            CssNumber(self.s),
            CssNumber(self.l),
            CssNumber(self.a)
        )
    }
}

/// Red / green / blue / alpha color.
///
/// Channels are in the 0 to 255 range, alpha is opacity (0 to 1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color (alpha = 1.0).
    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({},{},{},{})",
            CssNumber(self.r),
            CssNumber(self.g),
            CssNumber(self.b),
            CssNumber(self.a)
        )
    }
}

/// Which color model a [`Color`] uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorKind {
    Hsla,
    Rgba,
}

impl fmt::Display for ColorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorKind::Hsla => f.write_str("HSLA"),
            ColorKind::Rgba => f.write_str("RGBA"),
        }
    }
}

/// A color in either model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "lowercase")]
pub enum Color {
    Hsla(Hsla),
    Rgba(Rgba),
}

impl Color {
    pub fn kind(&self) -> ColorKind {
        match self {
            Color::Hsla(_) => ColorKind::Hsla,
            Color::Rgba(_) => ColorKind::Rgba,
        }
    }
}

impl From<Hsla> for Color {
    fn from(color: Hsla) -> Self {
        Color::Hsla(color)
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::Rgba(color)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Hsla(c) => fmt::Display::fmt(c, f),
            Color::Rgba(c) => fmt::Display::fmt(c, f),
        }
    }
}
