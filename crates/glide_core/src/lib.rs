//! Glide Core
//!
//! Foundational primitives shared by the Glide animation system:
//!
//! - **Color Model**: HSLA and RGBA value types with CSS serialization
//! - **Attribute Targets**: the settable-attribute abstraction animations write into
//! - **Frame Sources**: the periodic-callback time source that drives the scheduler
//! - **Number Formatting**: the canonical number form written into attributes
//!
//! # Example
//!
//! ```rust
//! use glide_core::{AttributeTarget, Element, Hsla};
//!
//! let element = Element::new();
//! element.set_attribute("fill", &Hsla::new(120.0, 80.0, 30.0, 0.5).to_string());
//! assert_eq!(element.attribute("fill").as_deref(), Some("hsla(120,80%,30%,0.5)"));
//! ```

pub mod clock;
pub mod color;
pub mod element;
pub mod error;
pub mod number;

pub use clock::{FrameSource, ManualClock, SystemClock, WakeCallback};
pub use color::{Color, ColorKind, Hsla, Rgba};
pub use element::{AttributeTarget, Element, ElementRef};
pub use error::{GlideError, Result};
pub use number::CssNumber;
