//! Attribute synchronization
//!
//! A [`Synchronization`] mirrors a derived value onto a display attribute on every tick,
//! independent of any single animation's lifetime. The typical use is a color whose
//! hue, saturation and lightness are driven by separate property animations while one
//! synchronization writes the composed color to the element's `fill`.

use crate::animation::NumericFormat;
use glide_core::{Color, ElementRef, Hsla, Rgba};
use std::fmt;

/// Where a synchronization reads from, and how the value is serialized
pub enum SyncSource {
    /// Number written as `prefix + value + suffix`
    Numeric {
        read: Box<dyn Fn() -> f64>,
        format: NumericFormat,
    },
    /// HSLA color written as `hsla(...)`
    Hsla(Box<dyn Fn() -> Hsla>),
    /// RGBA color written as `rgba(...)`
    Rgba(Box<dyn Fn() -> Rgba>),
    /// Color in either model
    Color(Box<dyn Fn() -> Color>),
}

impl SyncSource {
    pub fn numeric<F>(read: F) -> Self
    where
        F: Fn() -> f64 + 'static,
    {
        SyncSource::Numeric {
            read: Box::new(read),
            format: NumericFormat::default(),
        }
    }

    pub fn hsla<F>(read: F) -> Self
    where
        F: Fn() -> Hsla + 'static,
    {
        SyncSource::Hsla(Box::new(read))
    }

    pub fn rgba<F>(read: F) -> Self
    where
        F: Fn() -> Rgba + 'static,
    {
        SyncSource::Rgba(Box::new(read))
    }

    pub fn color<F>(read: F) -> Self
    where
        F: Fn() -> Color + 'static,
    {
        SyncSource::Color(Box::new(read))
    }

    /// Builder: set the numeric prefix (no effect on color sources)
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        if let SyncSource::Numeric { format, .. } = &mut self {
            format.prefix = prefix.into();
        }
        self
    }

    /// Builder: set the numeric suffix (no effect on color sources)
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        if let SyncSource::Numeric { format, .. } = &mut self {
            format.suffix = suffix.into();
        }
        self
    }

    /// Read the source and serialize it the way animation writers do
    pub fn serialize(&self) -> String {
        match self {
            SyncSource::Numeric { read, format } => format.format(read()),
            SyncSource::Hsla(read) => read().to_string(),
            SyncSource::Rgba(read) => read().to_string(),
            SyncSource::Color(read) => read().to_string(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            SyncSource::Numeric { .. } => "numeric",
            SyncSource::Hsla(_) => "hsla",
            SyncSource::Rgba(_) => "rgba",
            SyncSource::Color(_) => "color",
        }
    }
}

/// A standing binding from a source to an element attribute
pub struct Synchronization {
    source: SyncSource,
    element: ElementRef,
    attribute: String,
}

impl Synchronization {
    pub fn new(source: SyncSource, element: ElementRef, attribute: impl Into<String>) -> Self {
        Self {
            source,
            element,
            attribute: attribute.into(),
        }
    }

    /// Write the current source value to the target attribute
    pub fn refresh(&self) {
        self.element.set_attribute(&self.attribute, &self.source.serialize());
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn source(&self) -> &SyncSource {
        &self.source
    }
}

impl fmt::Debug for Synchronization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Synchronization")
            .field("source", &self.source.name())
            .field("attribute", &self.attribute)
            .finish()
    }
}
