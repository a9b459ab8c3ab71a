//! Time-bounded tweens
//!
//! An [`Animation`] blends a start value toward an end value over a fixed duration and
//! writes each intermediate value into its target. There are three kinds of target:
//!
//! - a plain property, written through a shared setter closure
//! - a numeric display attribute, written as `prefix + value + suffix`
//! - a color display attribute, written as a CSS `hsla(...)` or `rgba(...)` string
//!
//! Animations are normally created through the `start_*` methods on
//! [`AnimationScheduler`], which validate them and register them for ticking. They can
//! also be built standalone and submitted with [`AnimationScheduler::start`], which is
//! how completion callbacks chain follow-up animations.

use crate::easing::Easing;
use crate::scheduler::AnimationScheduler;
use crate::values::Interpolate;
use glide_core::{AttributeTarget, Color, CssNumber, ElementRef, GlideError, Hsla, Result, Rgba};
use std::fmt;
use std::rc::Rc;

/// Shared setter for a plain numeric property
pub type PropertySetter = Rc<dyn Fn(f64)>;

/// Callback invoked once when an animation finishes.
///
/// Receives the scheduler, so it can start follow-up animations, and the finished
/// animation by value. The animation has already left the registry.
pub type DoneCallback = Box<dyn FnOnce(&mut AnimationScheduler, Animation)>;

// ============================================================================
// Timing
// ============================================================================

/// When an animation runs and how it reports back.
///
/// ```rust
/// use glide_animation::{Easing, Timing};
///
/// let timing = Timing::new(0.0, 300.0)
///     .with_easing(Easing::EaseOutQuad)
///     .with_identifier(7);
/// assert_eq!(timing.duration(), 300.0);
/// ```
pub struct Timing {
    start_time: f64,
    duration: f64,
    easing: Option<Easing>,
    on_done: Option<DoneCallback>,
    identifier: Option<u64>,
}

impl Timing {
    /// Start at `start_time` (ms) and run for `duration` (ms)
    pub fn new(start_time: f64, duration: f64) -> Self {
        Self {
            start_time,
            duration,
            easing: None,
            on_done: None,
            identifier: None,
        }
    }

    /// Use the given easing
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    /// Use the named easing; unknown names are rejected here rather than on first tick
    pub fn with_easing_name(self, name: &str) -> Result<Self> {
        Ok(self.with_easing(Easing::from_name(name)?))
    }

    /// Use a caller-supplied easing function
    pub fn with_easing_fn(self, f: fn(f64) -> f64) -> Self {
        self.with_easing(Easing::Custom(f))
    }

    /// Call `callback` once the animation finishes (never on cancellation)
    pub fn on_done<F>(mut self, callback: F) -> Self
    where
        F: FnOnce(&mut AnimationScheduler, Animation) + 'static,
    {
        self.on_done = Some(Box::new(callback));
        self
    }

    /// Attach an opaque identifier, reported back on completion
    pub fn with_identifier(mut self, identifier: u64) -> Self {
        self.identifier = Some(identifier);
        self
    }

    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn easing(&self) -> Option<Easing> {
        self.easing
    }

    fn validate(&self) -> Result<()> {
        if !self.start_time.is_finite() {
            return Err(GlideError::InvalidStartTime(self.start_time));
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(GlideError::InvalidDuration(self.duration));
        }
        Ok(())
    }
}

impl fmt::Debug for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timing")
            .field("start_time", &self.start_time)
            .field("duration", &self.duration)
            .field("easing", &self.easing)
            .field("on_done", &self.on_done.is_some())
            .field("identifier", &self.identifier)
            .finish()
    }
}

// ============================================================================
// Values
// ============================================================================

/// Prefix and suffix wrapped around a number written to a textual attribute
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NumericFormat {
    pub prefix: String,
    pub suffix: String,
}

impl NumericFormat {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Only a suffix, e.g. a `px` unit
    pub fn suffix(suffix: impl Into<String>) -> Self {
        Self::new(String::new(), suffix)
    }

    pub fn format(&self, value: f64) -> String {
        format!("{}{}{}", self.prefix, CssNumber(value), self.suffix)
    }
}

/// Start, end, and most recently computed value of a tween
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween<T> {
    pub start: T,
    pub end: T,
    pub current: T,
}

impl<T: Interpolate> Tween<T> {
    pub fn new(start: T, end: T) -> Self {
        Self {
            start,
            end,
            current: start,
        }
    }

    /// Recompute `current` from eased progress, or snap to the end when finished
    pub fn step(&mut self, progress: Option<f64>) -> T {
        self.current = match progress {
            Some(progress) => self.start.interpolate(&self.end, 1.0 - progress, progress),
            None => self.end,
        };
        self.current
    }

    /// Rewind to the start, optionally swapping start and end first
    fn rewind(&mut self, reverse: bool) {
        if reverse {
            std::mem::swap(&mut self.start, &mut self.end);
        }
        self.current = self.start;
    }
}

/// A value an animation produces
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimatedValue {
    Number(f64),
    Color(Color),
}

impl AnimatedValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnimatedValue::Number(value) => Some(*value),
            AnimatedValue::Color(_) => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            AnimatedValue::Color(color) => Some(*color),
            AnimatedValue::Number(_) => None,
        }
    }
}

impl fmt::Display for AnimatedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimatedValue::Number(value) => fmt::Display::fmt(&CssNumber(*value), f),
            AnimatedValue::Color(color) => fmt::Display::fmt(color, f),
        }
    }
}

// ============================================================================
// Animation
// ============================================================================

/// What an animation writes into, and the tween that feeds it
pub enum AnimationKind {
    /// Plain numeric property
    Property {
        setter: PropertySetter,
        tween: Tween<f64>,
    },
    /// Numeric display attribute
    NumericAttribute {
        element: ElementRef,
        attribute: String,
        format: NumericFormat,
        tween: Tween<f64>,
    },
    /// HSLA color display attribute
    HslaAttribute {
        element: ElementRef,
        attribute: String,
        tween: Tween<Hsla>,
    },
    /// RGBA color display attribute
    RgbaAttribute {
        element: ElementRef,
        attribute: String,
        tween: Tween<Rgba>,
    },
}

impl AnimationKind {
    pub fn name(&self) -> &'static str {
        match self {
            AnimationKind::Property { .. } => "property",
            AnimationKind::NumericAttribute { .. } => "numeric-attribute",
            AnimationKind::HslaAttribute { .. } => "hsla-attribute",
            AnimationKind::RgbaAttribute { .. } => "rgba-attribute",
        }
    }
}

/// A single eased tween from a start value to an end value
pub struct Animation {
    kind: AnimationKind,
    start_time: f64,
    duration: f64,
    /// `None` until the scheduler fills in its default; reads as linear meanwhile
    easing: Option<Easing>,
    on_done: Option<DoneCallback>,
    identifier: Option<u64>,
}

impl Animation {
    fn from_parts(kind: AnimationKind, timing: Timing) -> Result<Self> {
        timing.validate()?;
        Ok(Self {
            kind,
            start_time: timing.start_time,
            duration: timing.duration,
            easing: timing.easing,
            on_done: timing.on_done,
            identifier: timing.identifier,
        })
    }

    /// Animate a plain property through `setter`
    pub fn property(setter: PropertySetter, start: f64, end: f64, timing: Timing) -> Result<Self> {
        Self::from_parts(
            AnimationKind::Property {
                setter,
                tween: Tween::new(start, end),
            },
            timing,
        )
    }

    /// Animate a numeric attribute, written as `prefix + value + suffix`
    pub fn numeric_attribute(
        element: ElementRef,
        attribute: impl Into<String>,
        start: f64,
        end: f64,
        timing: Timing,
        format: NumericFormat,
    ) -> Result<Self> {
        Self::from_parts(
            AnimationKind::NumericAttribute {
                element,
                attribute: attribute.into(),
                format,
                tween: Tween::new(start, end),
            },
            timing,
        )
    }

    /// Animate a color attribute. Both colors must use the same model.
    pub fn color_attribute(
        element: ElementRef,
        attribute: impl Into<String>,
        start: impl Into<Color>,
        end: impl Into<Color>,
        timing: Timing,
    ) -> Result<Self> {
        let attribute = attribute.into();
        let kind = match (start.into(), end.into()) {
            (Color::Hsla(start), Color::Hsla(end)) => AnimationKind::HslaAttribute {
                element,
                attribute,
                tween: Tween::new(start, end),
            },
            (Color::Rgba(start), Color::Rgba(end)) => AnimationKind::RgbaAttribute {
                element,
                attribute,
                tween: Tween::new(start, end),
            },
            (start, end) => {
                return Err(GlideError::ColorKindMismatch {
                    start: start.kind(),
                    end: end.kind(),
                })
            }
        };
        Self::from_parts(kind, timing)
    }

    /// Eased progress at `now`, or `None` once the animation has reached its end time.
    ///
    /// A zero duration is finished immediately. Times before `start_time` clamp to zero
    /// progress.
    pub fn eased_progress(&self, now: f64) -> Option<f64> {
        let elapsed = now - self.start_time;
        if self.duration > 0.0 && elapsed < self.duration {
            Some(self.easing().apply(elapsed.max(0.0) / self.duration))
        } else {
            None
        }
    }

    /// Advance to `now` and write the new value into the target.
    ///
    /// Returns true if the animation has finished.
    pub fn update(&mut self, now: f64) -> bool {
        let progress = self.eased_progress(now);
        match &mut self.kind {
            AnimationKind::Property { setter, tween } => update_property(setter, tween, progress),
            AnimationKind::NumericAttribute {
                element,
                attribute,
                format,
                tween,
            } => update_numeric_attribute(element.as_ref(), attribute, format, tween, progress),
            AnimationKind::HslaAttribute {
                element,
                attribute,
                tween,
            } => update_color_attribute(element.as_ref(), attribute, tween, progress),
            AnimationKind::RgbaAttribute {
                element,
                attribute,
                tween,
            } => update_color_attribute(element.as_ref(), attribute, tween, progress),
        }
        progress.is_none()
    }

    // ------------------------------------------------------------------------
    // Chaining
    // ------------------------------------------------------------------------

    /// The same tween again, starting where this one ends
    pub fn repeated(mut self) -> Self {
        self.start_time = self.end_time();
        self.rewind(false);
        self
    }

    /// The tween played backwards, starting where this one ends
    pub fn reversed(mut self) -> Self {
        self.start_time = self.end_time();
        self.rewind(true);
        self
    }

    /// Replace the easing
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    /// Fill in the easing if none was chosen
    pub(crate) fn or_easing(mut self, easing: Easing) -> Self {
        self.easing.get_or_insert(easing);
        self
    }

    /// Replace the completion callback
    pub fn on_done<F>(mut self, callback: F) -> Self
    where
        F: FnOnce(&mut AnimationScheduler, Animation) + 'static,
    {
        self.on_done = Some(Box::new(callback));
        self
    }

    /// Replace the identifier
    pub fn with_identifier(mut self, identifier: u64) -> Self {
        self.identifier = Some(identifier);
        self
    }

    fn rewind(&mut self, reverse: bool) {
        match &mut self.kind {
            AnimationKind::Property { tween, .. }
            | AnimationKind::NumericAttribute { tween, .. } => tween.rewind(reverse),
            AnimationKind::HslaAttribute { tween, .. } => tween.rewind(reverse),
            AnimationKind::RgbaAttribute { tween, .. } => tween.rewind(reverse),
        }
    }

    pub(crate) fn take_on_done(&mut self) -> Option<DoneCallback> {
        self.on_done.take()
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn kind(&self) -> &AnimationKind {
        &self.kind
    }

    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// `start_time + duration`
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }

    pub fn easing(&self) -> Easing {
        self.easing.unwrap_or_default()
    }

    /// Whether an easing was chosen explicitly
    pub fn has_easing(&self) -> bool {
        self.easing.is_some()
    }

    pub fn identifier(&self) -> Option<u64> {
        self.identifier
    }

    pub fn has_on_done(&self) -> bool {
        self.on_done.is_some()
    }

    /// The attribute this animation writes, if it targets an element
    pub fn attribute(&self) -> Option<&str> {
        match &self.kind {
            AnimationKind::Property { .. } => None,
            AnimationKind::NumericAttribute { attribute, .. }
            | AnimationKind::HslaAttribute { attribute, .. }
            | AnimationKind::RgbaAttribute { attribute, .. } => Some(attribute),
        }
    }

    pub fn start_value(&self) -> AnimatedValue {
        self.select(|t| t.start, |t| t.start, |t| t.start)
    }

    pub fn end_value(&self) -> AnimatedValue {
        self.select(|t| t.end, |t| t.end, |t| t.end)
    }

    /// The value most recently written to the target
    pub fn current_value(&self) -> AnimatedValue {
        self.select(|t| t.current, |t| t.current, |t| t.current)
    }

    fn select(
        &self,
        number: impl Fn(&Tween<f64>) -> f64,
        hsla: impl Fn(&Tween<Hsla>) -> Hsla,
        rgba: impl Fn(&Tween<Rgba>) -> Rgba,
    ) -> AnimatedValue {
        match &self.kind {
            AnimationKind::Property { tween, .. }
            | AnimationKind::NumericAttribute { tween, .. } => AnimatedValue::Number(number(tween)),
            AnimationKind::HslaAttribute { tween, .. } => {
                AnimatedValue::Color(Color::Hsla(hsla(tween)))
            }
            AnimationKind::RgbaAttribute { tween, .. } => {
                AnimatedValue::Color(Color::Rgba(rgba(tween)))
            }
        }
    }
}

impl fmt::Debug for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animation")
            .field("kind", &self.kind.name())
            .field("attribute", &self.attribute())
            .field("start", &self.start_value())
            .field("end", &self.end_value())
            .field("current", &self.current_value())
            .field("start_time", &self.start_time)
            .field("duration", &self.duration)
            .field("easing", &self.easing())
            .field("identifier", &self.identifier)
            .finish()
    }
}

// ============================================================================
// Per-kind writers
// ============================================================================

fn update_property(setter: &PropertySetter, tween: &mut Tween<f64>, progress: Option<f64>) {
    setter(tween.step(progress));
}

fn update_numeric_attribute(
    element: &dyn AttributeTarget,
    attribute: &str,
    format: &NumericFormat,
    tween: &mut Tween<f64>,
    progress: Option<f64>,
) {
    let value = tween.step(progress);
    element.set_attribute(attribute, &format.format(value));
}

fn update_color_attribute<T>(
    element: &dyn AttributeTarget,
    attribute: &str,
    tween: &mut Tween<T>,
    progress: Option<f64>,
) where
    T: Interpolate + fmt::Display,
{
    let color = tween.step(progress);
    element.set_attribute(attribute, &color.to_string());
}
