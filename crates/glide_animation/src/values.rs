//! Animatable value types
//!
//! Provides the weighted blend used by every animation kind, for plain numbers and for
//! each color model.

use glide_core::{Hsla, Rgba};

/// Trait for values that can be blended between a start and an end
pub trait Interpolate: Copy {
    /// Weighted blend `self * start_weight + end * end_weight`
    ///
    /// The animation loop passes the eased progress and its complement, so the weights
    /// normally sum to one.
    fn interpolate(&self, end: &Self, start_weight: f64, end_weight: f64) -> Self;
}

/// Blend two numbers with independent weights
#[inline]
pub fn interpolate(start: f64, end: f64, start_weight: f64, end_weight: f64) -> f64 {
    start * start_weight + end * end_weight
}

// ============================================================================
// f64 Implementation
// ============================================================================

impl Interpolate for f64 {
    fn interpolate(&self, end: &Self, start_weight: f64, end_weight: f64) -> Self {
        interpolate(*self, *end, start_weight, end_weight)
    }
}

// ============================================================================
// Color Implementations
// ============================================================================

impl Interpolate for Hsla {
    fn interpolate(&self, end: &Self, start_weight: f64, end_weight: f64) -> Self {
        Hsla::new(
            interpolate(self.h, end.h, start_weight, end_weight),
            interpolate(self.s, end.s, start_weight, end_weight),
            interpolate(self.l, end.l, start_weight, end_weight),
            interpolate(self.a, end.a, start_weight, end_weight),
        )
    }
}

impl Interpolate for Rgba {
    fn interpolate(&self, end: &Self, start_weight: f64, end_weight: f64) -> Self {
        Rgba::new(
            interpolate(self.r, end.r, start_weight, end_weight),
            interpolate(self.g, end.g, start_weight, end_weight),
            interpolate(self.b, end.b, start_weight, end_weight),
            interpolate(self.a, end.a, start_weight, end_weight),
        )
    }
}
