//! Progress Pulse Demo
//!
//! Drives a headless progress indicator in real time:
//! - Hue and lightness animate as separate properties, composed into one `fill` by a sync
//! - The ring's `stroke-dashoffset` eases toward completion
//! - A marker pulses back and forth by chaining reversed animations from callbacks
//!
//! Run with: RUST_LOG=glide_animation=debug cargo run -p glide_animation --example progress_pulse

use glide_animation::{
    Animation, AnimationScheduler, DoneCallback, NumericFormat, SchedulerConfig, SyncSource,
    Timing,
};
use glide_core::{AttributeTarget, Element, FrameSource, Hsla, SystemClock};
use std::cell::Cell;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"
frame_interval_ms = 16
default_easing = "easeInOutCubic"
max_frame_delta_ms = 250.0
"#;

const PULSES: u32 = 3;

fn pulse(remaining: u32) -> DoneCallback {
    Box::new(move |scheduler: &mut AnimationScheduler, animation: Animation| {
        tracing::info!(remaining, value = %animation.current_value(), "pulse leg finished");
        if remaining > 0 {
            scheduler.start(animation.reversed().on_done(pulse(remaining - 1)));
        }
    })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SchedulerConfig::from_toml_str(CONFIG)?;
    let clock = Rc::new(SystemClock::new());
    let mut scheduler = AnimationScheduler::with_config(clock.clone(), config)?;

    let ring = Element::shared();
    let marker = Element::shared();
    let color = Rc::new(Cell::new(Hsla::opaque(0.0, 70.0, 55.0)));
    let start = clock.now();

    let hue = color.clone();
    scheduler.start_property_animation(
        move |h| {
            let mut c = hue.get();
            c.h = h;
            hue.set(c);
        },
        0.0,
        120.0,
        Timing::new(start, 800.0),
    )?;

    let lightness = color.clone();
    scheduler.start_property_animation(
        move |l| {
            let mut c = lightness.get();
            c.l = l;
            lightness.set(c);
        },
        55.0,
        40.0,
        Timing::new(start, 800.0).with_easing_name("easeOutQuad")?,
    )?;

    scheduler.start_numeric_attribute_animation(
        ring.clone(),
        "stroke-dashoffset",
        283.0,
        0.0,
        Timing::new(start, 800.0).with_identifier(1),
        NumericFormat::default(),
    )?;

    let composed = color.clone();
    scheduler.start_syncing(SyncSource::hsla(move || composed.get()), ring.clone(), "fill");

    let marker_pulse = Animation::numeric_attribute(
        marker.clone(),
        "transform",
        1.0,
        1.25,
        Timing::new(start, 200.0).with_easing_name("easeInOutQuad")?,
        NumericFormat::new("scale(", ")"),
    )?
    .on_done(pulse(PULSES * 2 - 1));
    scheduler.start(marker_pulse);

    let ticks = scheduler.run_until_idle(std::thread::sleep);

    for completion in scheduler.take_completed() {
        tracing::debug!(?completion, "completed");
    }
    tracing::info!(
        ticks,
        elapsed_ms = clock.now() - start,
        fill = %ring.attribute("fill").unwrap_or_default(),
        dashoffset = %ring.attribute("stroke-dashoffset").unwrap_or_default(),
        marker = %marker.attribute("transform").unwrap_or_default(),
        "animations settled"
    );

    Ok(())
}
