//! Glide Animation System
//!
//! Time-based value scheduling for display attributes.
//!
//! # Features
//!
//! - **Eased Tweens**: numeric properties, numeric attributes, and HSLA/RGBA color attributes
//! - **Easing Functions**: linear plus quad, cubic, quart, and quint in/out/in-out curves
//! - **Synchronizations**: standing bindings that mirror a derived value onto an attribute
//! - **Frame Scheduler**: one shared tick, idle when nothing animates
//! - **Chaining**: completion callbacks receive the scheduler and can start follow-ups

pub mod animation;
pub mod config;
pub mod easing;
pub mod scheduler;
pub mod sync;
pub mod values;

pub use animation::{
    AnimatedValue, Animation, AnimationKind, DoneCallback, NumericFormat, PropertySetter, Timing,
    Tween,
};
pub use config::SchedulerConfig;
pub use easing::Easing;
pub use scheduler::{AnimationId, AnimationScheduler, Completion, SyncId};
pub use sync::{SyncSource, Synchronization};
pub use values::{interpolate, Interpolate};
