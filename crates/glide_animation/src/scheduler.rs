//! Animation scheduler
//!
//! Owns every active animation and synchronization and advances them once per frame.
//! The scheduler never spins its own loop: it asks its [`FrameSource`] for a frame while
//! work remains and the host calls [`AnimationScheduler::tick`] when that frame arrives.
//!
//! Each tick:
//! 1. reads the time once, so every animation in the tick sees the same `now`
//! 2. updates animations in registration order, removing each one that finishes before
//!    its completion callback runs
//! 3. refreshes every synchronization
//! 4. requests another frame if any animation is still registered, else goes idle

use crate::animation::{Animation, NumericFormat, PropertySetter, Timing};
use crate::config::SchedulerConfig;
use crate::sync::{SyncSource, Synchronization};
use glide_core::{Color, ElementRef, FrameSource, Result};
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

new_key_type! {
    /// Handle to a registered animation
    pub struct AnimationId;
    /// Handle to a registered synchronization
    pub struct SyncId;
}

/// Marks a tick in progress; cleared on drop, including when a callback panics
struct TickGuard(Rc<Cell<bool>>);

impl TickGuard {
    fn enter(flag: &Rc<Cell<bool>>) -> Self {
        flag.set(true);
        Self(flag.clone())
    }
}

impl Drop for TickGuard {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Emitted once for every animation that runs to completion
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Completion {
    pub id: AnimationId,
    pub identifier: Option<u64>,
    /// Tick timestamp at which the animation was found finished
    pub finished_at: f64,
    /// `start_time + duration` of the finished animation
    pub end_time: f64,
}

/// The scheduler that ticks all active animations
///
/// ```rust
/// use glide_animation::{AnimationScheduler, Timing};
/// use glide_core::{AttributeTarget, Element, ManualClock};
///
/// let clock = ManualClock::new();
/// let mut scheduler = AnimationScheduler::new(clock.clone());
/// let element = Element::shared();
///
/// scheduler
///     .start_numeric_attribute_animation(
///         element.clone(), "opacity", 0.0, 1.0, Timing::new(0.0, 200.0), Default::default(),
///     )
///     .unwrap();
///
/// clock.set(100.0);
/// scheduler.tick();
/// assert_eq!(element.attribute("opacity").as_deref(), Some("0.5"));
/// ```
pub struct AnimationScheduler {
    animations: SlotMap<AnimationId, Animation>,
    /// Registration order of `animations`
    animation_order: Vec<AnimationId>,
    syncs: SlotMap<SyncId, Synchronization>,
    /// Registration order of `syncs`
    sync_order: Vec<SyncId>,
    completed: Vec<Completion>,
    frame_pending: bool,
    ticking: Rc<Cell<bool>>,
    last_tick: Option<f64>,
    source: Box<dyn FrameSource>,
    config: SchedulerConfig,
}

impl AnimationScheduler {
    /// Create a scheduler with the default configuration
    pub fn new(source: impl FrameSource + 'static) -> Self {
        Self::build(Box::new(source), SchedulerConfig::default())
    }

    /// Create a scheduler with a validated configuration
    pub fn with_config(
        source: impl FrameSource + 'static,
        config: SchedulerConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(Box::new(source), config))
    }

    fn build(source: Box<dyn FrameSource>, config: SchedulerConfig) -> Self {
        Self {
            animations: SlotMap::with_key(),
            animation_order: Vec::new(),
            syncs: SlotMap::with_key(),
            sync_order: Vec::new(),
            completed: Vec::new(),
            frame_pending: false,
            ticking: Rc::new(Cell::new(false)),
            last_tick: None,
            source,
            config,
        }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    // ========================================================================
    // Frame loop
    // ========================================================================

    /// Request a frame unless one is already pending
    pub fn ensure_running(&mut self) {
        if !self.frame_pending {
            self.frame_pending = true;
            self.source.request_frame();
        }
    }

    /// Whether a frame has been requested and not yet ticked
    pub fn is_frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Current time according to the frame source
    pub fn now(&self) -> f64 {
        self.source.now()
    }

    /// Tick at the frame source's current time
    ///
    /// Returns true if animations are still active (another frame has been requested).
    pub fn tick(&mut self) -> bool {
        let now = self.source.now();
        self.tick_at(now)
    }

    /// Tick at an explicit timestamp
    pub fn tick_at(&mut self, now: f64) -> bool {
        if self.ticking.get() {
            tracing::warn!("AnimationScheduler: tick called from inside a tick; ignored");
            return self.is_animating();
        }
        let _guard = TickGuard::enter(&self.ticking);
        self.frame_pending = false;
        self.check_frame_delta(now);

        // Snapshot: animations started by callbacks wait for the next tick
        let batch: SmallVec<[AnimationId; 16]> = self.animation_order.iter().copied().collect();
        let mut finished = 0usize;

        for id in batch {
            // Skips anything a callback earlier in this tick cancelled
            let Some(animation) = self.animations.get_mut(id) else {
                continue;
            };
            if !animation.update(now) {
                continue;
            }

            // The order list is pruned once after the loop
            let Some(mut animation) = self.animations.remove(id) else {
                continue;
            };
            finished += 1;
            self.completed.push(Completion {
                id,
                identifier: animation.identifier(),
                finished_at: now,
                end_time: animation.end_time(),
            });
            tracing::debug!(
                ?id,
                kind = animation.kind().name(),
                identifier = ?animation.identifier(),
                "animation finished"
            );

            if let Some(on_done) = animation.take_on_done() {
                // Re-arm first so a panicking callback cannot strand the rest
                if self.is_animating() {
                    self.ensure_running();
                }
                on_done(self, animation);
            }
        }
        self.prune_order();

        for id in &self.sync_order {
            if let Some(sync) = self.syncs.get(*id) {
                sync.refresh();
            }
        }

        let active = self.is_animating();
        tracing::trace!(
            now,
            finished,
            active = self.animations.len(),
            syncs = self.syncs.len(),
            "tick"
        );

        if active {
            self.ensure_running();
        } else {
            // Callbacks may have re-armed and then cancelled everything
            self.frame_pending = false;
            self.last_tick = None;
            tracing::debug!("AnimationScheduler: idle");
        }
        active
    }

    /// Keep ticking until no frame is pending, calling `wait` with the configured frame
    /// interval before every tick. Returns the number of ticks run.
    ///
    /// With a [`glide_core::SystemClock`], pass `std::thread::sleep`. Never returns while a
    /// completion callback keeps restarting its animation.
    pub fn run_until_idle<W>(&mut self, mut wait: W) -> usize
    where
        W: FnMut(Duration),
    {
        let interval = self.config.frame_interval();
        let mut ticks = 0;
        while self.frame_pending {
            wait(interval);
            self.tick();
            ticks += 1;
        }
        ticks
    }

    fn check_frame_delta(&mut self, now: f64) {
        if let (Some(max), Some(last)) = (self.config.max_frame_delta_ms, self.last_tick) {
            let delta = now - last;
            if delta > max {
                tracing::warn!(delta_ms = delta, max_ms = max, "AnimationScheduler: frame stall");
            }
        }
        self.last_tick = Some(now);
    }

    // ========================================================================
    // Animations
    // ========================================================================

    /// Register a pre-built animation, e.g. one chained from a completion callback
    ///
    /// An animation whose timing named no easing gets the configured default here.
    pub fn start(&mut self, animation: Animation) -> AnimationId {
        let animation = animation.or_easing(self.config.default_easing);
        let kind = animation.kind().name();
        let id = self.animations.insert(animation);
        self.animation_order.push(id);
        tracing::debug!(?id, kind, "animation started");
        self.ensure_running();
        id
    }

    /// Animate a plain numeric property through `setter`
    pub fn start_property_animation<F>(
        &mut self,
        setter: F,
        start: f64,
        end: f64,
        timing: Timing,
    ) -> Result<AnimationId>
    where
        F: Fn(f64) + 'static,
    {
        let setter: PropertySetter = Rc::new(setter);
        Ok(self.start(Animation::property(setter, start, end, timing)?))
    }

    /// Animate a numeric element attribute
    pub fn start_numeric_attribute_animation(
        &mut self,
        element: ElementRef,
        attribute: impl Into<String>,
        start: f64,
        end: f64,
        timing: Timing,
        format: NumericFormat,
    ) -> Result<AnimationId> {
        let animation =
            Animation::numeric_attribute(element, attribute, start, end, timing, format)?;
        Ok(self.start(animation))
    }

    /// Animate a color element attribute; both colors must use the same model
    pub fn start_color_attribute_animation(
        &mut self,
        element: ElementRef,
        attribute: impl Into<String>,
        start: impl Into<Color>,
        end: impl Into<Color>,
        timing: Timing,
    ) -> Result<AnimationId> {
        let animation = Animation::color_attribute(element, attribute, start, end, timing)?;
        Ok(self.start(animation))
    }

    /// Cancel an animation. Its completion callback does not run.
    ///
    /// Returns false if the animation already finished, was already stopped, or never
    /// existed.
    pub fn stop_animation(&mut self, id: AnimationId) -> bool {
        let stopped = self.remove_animation(id).is_some();
        if stopped {
            tracing::debug!(?id, "animation stopped");
        }
        stopped
    }

    /// Drop keys of animations that left the registry
    fn prune_order(&mut self) {
        if self.animation_order.len() != self.animations.len() {
            let animations = &self.animations;
            self.animation_order.retain(|&id| animations.contains_key(id));
        }
    }

    fn remove_animation(&mut self, id: AnimationId) -> Option<Animation> {
        let animation = self.animations.remove(id)?;
        self.animation_order.retain(|&other| other != id);
        Some(animation)
    }

    /// Whether any animation is registered
    pub fn is_animating(&self) -> bool {
        !self.animations.is_empty()
    }

    pub fn animation(&self, id: AnimationId) -> Option<&Animation> {
        self.animations.get(id)
    }

    pub fn animation_count(&self) -> usize {
        self.animations.len()
    }

    /// Iterate over registered animations in registration order
    pub fn animations_iter(&self) -> impl Iterator<Item = (AnimationId, &Animation)> + '_ {
        self.animation_order
            .iter()
            .filter_map(move |&id| self.animations.get(id).map(|animation| (id, animation)))
    }

    /// Drain completion events recorded since the last call
    pub fn take_completed(&mut self) -> Vec<Completion> {
        std::mem::take(&mut self.completed)
    }

    // ========================================================================
    // Synchronizations
    // ========================================================================

    /// Mirror `source` onto `element.attribute` on every tick until stopped.
    ///
    /// Does not request a frame by itself; refreshes ride along with animation ticks.
    pub fn start_syncing(
        &mut self,
        source: SyncSource,
        element: ElementRef,
        attribute: impl Into<String>,
    ) -> SyncId {
        let id = self.syncs.insert(Synchronization::new(source, element, attribute));
        self.sync_order.push(id);
        tracing::debug!(?id, "synchronization started");
        id
    }

    /// Stop a synchronization. Returns false if it was not registered.
    pub fn stop_syncing(&mut self, id: SyncId) -> bool {
        if self.syncs.remove(id).is_none() {
            return false;
        }
        self.sync_order.retain(|&other| other != id);
        tracing::debug!(?id, "synchronization stopped");
        true
    }

    pub fn synchronization(&self, id: SyncId) -> Option<&Synchronization> {
        self.syncs.get(id)
    }

    pub fn sync_count(&self) -> usize {
        self.syncs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;
    use glide_core::{AttributeTarget, Element, GlideError, Hsla, ManualClock, Rgba};
    use std::cell::{Cell, RefCell};

    fn scheduler() -> (AnimationScheduler, ManualClock) {
        let clock = ManualClock::new();
        (AnimationScheduler::new(clock.clone()), clock)
    }

    fn counter() -> (Rc<Cell<u32>>, impl Fn(f64) + 'static) {
        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        (count, move |_: f64| count_clone.set(count_clone.get() + 1))
    }

    #[test]
    fn test_ensure_running_is_idempotent() {
        let (mut scheduler, clock) = scheduler();

        for _ in 0..5 {
            scheduler
                .start_property_animation(|_| {}, 0.0, 1.0, Timing::new(0.0, 100.0))
                .unwrap();
            scheduler.ensure_running();
        }

        assert_eq!(clock.frame_requests(), 1);
        assert!(scheduler.is_frame_pending());
    }

    #[test]
    fn test_tick_requests_next_frame_while_active() {
        let (mut scheduler, clock) = scheduler();
        scheduler
            .start_property_animation(|_| {}, 0.0, 1.0, Timing::new(0.0, 100.0))
            .unwrap();

        assert!(scheduler.tick_at(50.0));
        assert_eq!(clock.frame_requests(), 2);

        assert!(!scheduler.tick_at(100.0));
        assert_eq!(clock.frame_requests(), 2);
        assert!(!scheduler.is_frame_pending());
    }

    #[test]
    fn test_registration_order() {
        let (mut scheduler, _clock) = scheduler();
        let log = Rc::new(RefCell::new(Vec::new()));

        for name in ["a", "b", "c"] {
            let log = log.clone();
            scheduler
                .start_property_animation(
                    move |_| log.borrow_mut().push(name),
                    0.0,
                    1.0,
                    Timing::new(0.0, 100.0),
                )
                .unwrap();
        }

        scheduler.tick_at(10.0);
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_finished_removed_before_callback() {
        let (mut scheduler, _clock) = scheduler();
        let seen = Rc::new(Cell::new(None));

        let seen_clone = seen.clone();
        let timing = Timing::new(0.0, 10.0).on_done(move |scheduler, _animation| {
            seen_clone.set(Some((scheduler.animation_count(), scheduler.is_animating())));
        });
        scheduler.start_property_animation(|_| {}, 0.0, 1.0, timing).unwrap();

        scheduler.tick_at(10.0);
        assert_eq!(seen.get(), Some((0, false)));
    }

    #[test]
    fn test_callback_started_animation_waits_for_next_tick() {
        let (mut scheduler, _clock) = scheduler();
        let (follow_up_updates, follow_up_setter) = counter();
        let follow_up_setter = Rc::new(follow_up_setter);

        let timing = Timing::new(0.0, 10.0).on_done(move |scheduler, animation| {
            let setter = follow_up_setter.clone();
            scheduler
                .start_property_animation(
                    move |v| setter(v),
                    0.0,
                    1.0,
                    Timing::new(animation.end_time(), 10.0),
                )
                .unwrap();
        });
        scheduler.start_property_animation(|_| {}, 0.0, 1.0, timing).unwrap();

        assert!(scheduler.tick_at(10.0));
        assert_eq!(follow_up_updates.get(), 0);
        assert_eq!(scheduler.animation_count(), 1);

        assert!(scheduler.tick_at(15.0));
        assert_eq!(follow_up_updates.get(), 1);
    }

    #[test]
    fn test_callback_cancelling_later_animation() {
        let (mut scheduler, _clock) = scheduler();
        let victim: Rc<Cell<Option<AnimationId>>> = Rc::new(Cell::new(None));
        let (victim_updates, victim_setter) = counter();
        let (survivor_updates, survivor_setter) = counter();

        let victim_clone = victim.clone();
        let timing = Timing::new(0.0, 10.0).on_done(move |scheduler, _| {
            let id = victim_clone.get().unwrap();
            assert!(scheduler.stop_animation(id));
        });
        scheduler.start_property_animation(|_| {}, 0.0, 1.0, timing).unwrap();
        victim.set(Some(
            scheduler
                .start_property_animation(victim_setter, 0.0, 1.0, Timing::new(0.0, 100.0))
                .unwrap(),
        ));
        scheduler
            .start_property_animation(survivor_setter, 0.0, 1.0, Timing::new(0.0, 100.0))
            .unwrap();

        scheduler.tick_at(10.0);
        assert_eq!(victim_updates.get(), 0);
        assert_eq!(survivor_updates.get(), 1);
        assert_eq!(scheduler.animation_count(), 1);
    }

    #[test]
    fn test_callback_and_event_fire_once_never_on_stop() {
        let (mut scheduler, _clock) = scheduler();
        let calls = Rc::new(Cell::new(0));

        let calls_clone = calls.clone();
        let finishing = scheduler
            .start_property_animation(
                |_| {},
                0.0,
                1.0,
                Timing::new(0.0, 10.0)
                    .with_identifier(1)
                    .on_done(move |_, _| calls_clone.set(calls_clone.get() + 1)),
            )
            .unwrap();

        let calls_clone = calls.clone();
        let cancelled = scheduler
            .start_property_animation(
                |_| {},
                0.0,
                1.0,
                Timing::new(0.0, 10.0)
                    .with_identifier(2)
                    .on_done(move |_, _| calls_clone.set(calls_clone.get() + 100)),
            )
            .unwrap();

        assert!(scheduler.stop_animation(cancelled));
        scheduler.tick_at(20.0);
        scheduler.tick_at(30.0);

        assert_eq!(calls.get(), 1);
        let completed = scheduler.take_completed();
        assert_eq!(
            completed,
            vec![Completion {
                id: finishing,
                identifier: Some(1),
                finished_at: 20.0,
                end_time: 10.0,
            }]
        );
        assert!(scheduler.take_completed().is_empty());
    }

    #[test]
    fn test_stop_unknown_or_finished() {
        let (mut scheduler, _clock) = scheduler();
        let id = scheduler
            .start_property_animation(|_| {}, 0.0, 1.0, Timing::new(0.0, 10.0))
            .unwrap();

        scheduler.tick_at(10.0);
        assert!(!scheduler.stop_animation(id));
        assert!(!scheduler.stop_animation(AnimationId::default()));
    }

    #[test]
    fn test_syncs_refresh_after_animations() {
        let (mut scheduler, _clock) = scheduler();
        let element = Element::shared();

        scheduler
            .start_color_attribute_animation(
                element.clone(),
                "fill",
                Rgba::opaque(0.0, 0.0, 0.0),
                Rgba::opaque(255.0, 255.0, 255.0),
                Timing::new(0.0, 100.0),
            )
            .unwrap();
        scheduler.start_syncing(
            SyncSource::hsla(|| Hsla::opaque(1.0, 2.0, 3.0)),
            element.clone(),
            "fill",
        );

        scheduler.tick_at(50.0);
        assert_eq!(element.attribute("fill").as_deref(), Some("hsla(1,2%,3%,1)"));
    }

    #[test]
    fn test_sync_alone_does_not_schedule_frames() {
        let (mut scheduler, clock) = scheduler();
        let id = scheduler.start_syncing(SyncSource::numeric(|| 1.0), Element::shared(), "x");

        assert_eq!(clock.frame_requests(), 0);
        assert_eq!(scheduler.sync_count(), 1);
        assert!(scheduler.stop_syncing(id));
        assert!(!scheduler.stop_syncing(id));
        assert_eq!(scheduler.sync_count(), 0);
    }

    #[test]
    fn test_default_easing_from_config() {
        let clock = ManualClock::new();
        let config = SchedulerConfig {
            default_easing: Easing::EaseInQuad,
            ..Default::default()
        };
        let mut scheduler = AnimationScheduler::with_config(clock, config).unwrap();

        let implicit = scheduler
            .start_property_animation(|_| {}, 0.0, 1.0, Timing::new(0.0, 10.0))
            .unwrap();
        let explicit = scheduler
            .start_property_animation(
                |_| {},
                0.0,
                1.0,
                Timing::new(0.0, 10.0).with_easing(Easing::EaseOutQuart),
            )
            .unwrap();

        assert_eq!(scheduler.animation(implicit).unwrap().easing(), Easing::EaseInQuad);
        assert_eq!(scheduler.animation(explicit).unwrap().easing(), Easing::EaseOutQuart);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SchedulerConfig {
            frame_interval_ms: 0,
            ..Default::default()
        };
        let result = AnimationScheduler::with_config(ManualClock::new(), config);
        assert!(matches!(result, Err(GlideError::Config(_))));
    }

    #[test]
    fn test_rejected_animation_is_not_registered() {
        let (mut scheduler, clock) = scheduler();
        let result = scheduler.start_color_attribute_animation(
            Element::shared(),
            "fill",
            Hsla::opaque(0.0, 0.0, 0.0),
            Rgba::opaque(0.0, 0.0, 0.0),
            Timing::new(0.0, 10.0),
        );

        assert!(result.is_err());
        assert!(!scheduler.is_animating());
        assert_eq!(clock.frame_requests(), 0);
    }

    #[test]
    fn test_reentrant_tick_ignored() {
        let (mut scheduler, _clock) = scheduler();
        let (updates, setter) = counter();
        scheduler
            .start_property_animation(setter, 0.0, 1.0, Timing::new(0.0, 100.0))
            .unwrap();
        scheduler
            .start_property_animation(
                |_| {},
                0.0,
                1.0,
                Timing::new(0.0, 10.0).on_done(|scheduler, _| {
                    scheduler.tick_at(20.0);
                }),
            )
            .unwrap();

        scheduler.tick_at(20.0);
        assert_eq!(updates.get(), 1);
    }

    #[test]
    fn test_frames_continue_after_callback_panic() {
        let (mut scheduler, clock) = scheduler();
        let (updates, setter) = counter();
        scheduler
            .start_property_animation(
                |_| {},
                0.0,
                1.0,
                Timing::new(0.0, 10.0).on_done(|_, _| panic!("callback failed")),
            )
            .unwrap();
        scheduler
            .start_property_animation(setter, 0.0, 1.0, Timing::new(0.0, 100.0))
            .unwrap();

        clock.set(10.0);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            scheduler.tick();
        }));
        assert!(result.is_err());
        assert_eq!(scheduler.animation_count(), 1);
        assert!(scheduler.is_frame_pending());

        let ticks = scheduler.run_until_idle(|interval| clock.advance(interval.as_millis() as f64));

        // 26, 42, ..., 106
        assert_eq!(ticks, 6);
        assert_eq!(updates.get(), 6);
        assert!(!scheduler.is_animating());
    }

    #[test]
    fn test_callback_cancelling_everything_goes_idle() {
        let (mut scheduler, clock) = scheduler();
        let victim: Rc<Cell<Option<AnimationId>>> = Rc::new(Cell::new(None));

        let victim_clone = victim.clone();
        let timing = Timing::new(0.0, 10.0).on_done(move |scheduler, _| {
            if let Some(id) = victim_clone.get() {
                scheduler.stop_animation(id);
            }
        });
        scheduler.start_property_animation(|_| {}, 0.0, 1.0, timing).unwrap();
        victim.set(Some(
            scheduler
                .start_property_animation(|_| {}, 0.0, 1.0, Timing::new(0.0, 100.0))
                .unwrap(),
        ));

        assert!(!scheduler.tick_at(10.0));
        assert!(!scheduler.is_frame_pending());
        let ticks = scheduler.run_until_idle(|interval| clock.advance(interval.as_millis() as f64));
        assert_eq!(ticks, 0);
    }

    #[test]
    fn test_prebuilt_animation_gets_default_easing() {
        let clock = ManualClock::new();
        let config = SchedulerConfig {
            default_easing: Easing::EaseInQuad,
            ..Default::default()
        };
        let mut scheduler = AnimationScheduler::with_config(clock, config).unwrap();
        let element = Element::shared();

        let implicit = Animation::numeric_attribute(
            element.clone(),
            "x",
            0.0,
            100.0,
            Timing::new(0.0, 100.0),
            NumericFormat::default(),
        )
        .unwrap();
        let explicit = Animation::numeric_attribute(
            element.clone(),
            "y",
            0.0,
            100.0,
            Timing::new(0.0, 100.0).with_easing(Easing::Linear),
            NumericFormat::default(),
        )
        .unwrap();
        let implicit = scheduler.start(implicit);
        let explicit = scheduler.start(explicit);

        assert_eq!(scheduler.animation(implicit).unwrap().easing(), Easing::EaseInQuad);
        assert_eq!(scheduler.animation(explicit).unwrap().easing(), Easing::Linear);

        scheduler.tick_at(50.0);
        assert_eq!(element.attribute("x").as_deref(), Some("25"));
        assert_eq!(element.attribute("y").as_deref(), Some("50"));
    }

    #[test]
    fn test_order_survives_batch_completion() {
        let (mut scheduler, _clock) = scheduler();
        let ids: Vec<_> = [10.0, 100.0, 10.0, 100.0, 10.0]
            .into_iter()
            .map(|duration| {
                scheduler
                    .start_property_animation(|_| {}, 0.0, 1.0, Timing::new(0.0, duration))
                    .unwrap()
            })
            .collect();

        scheduler.tick_at(10.0);
        let late = scheduler
            .start_property_animation(|_| {}, 0.0, 1.0, Timing::new(0.0, 100.0))
            .unwrap();

        let order: Vec<_> = scheduler.animations_iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec![ids[1], ids[3], late]);
        assert_eq!(scheduler.animation_order.len(), 3);
    }

    #[test]
    fn test_run_until_idle() {
        let (mut scheduler, clock) = scheduler();
        let element = Element::shared();
        scheduler
            .start_numeric_attribute_animation(
                element.clone(),
                "width",
                0.0,
                100.0,
                Timing::new(0.0, 100.0),
                NumericFormat::suffix("px"),
            )
            .unwrap();

        let ticks = scheduler.run_until_idle(|interval| clock.advance(interval.as_millis() as f64));

        // 16, 32, ..., 112
        assert_eq!(ticks, 7);
        assert_eq!(element.attribute("width").as_deref(), Some("100px"));
        assert!(!scheduler.is_animating());
    }

    #[test]
    fn test_animations_iter_in_order() {
        let (mut scheduler, _clock) = scheduler();
        let first = scheduler
            .start_property_animation(|_| {}, 0.0, 1.0, Timing::new(0.0, 10.0))
            .unwrap();
        let second = scheduler
            .start_property_animation(|_| {}, 0.0, 1.0, Timing::new(0.0, 20.0))
            .unwrap();
        let third = scheduler
            .start_property_animation(|_| {}, 0.0, 1.0, Timing::new(0.0, 30.0))
            .unwrap();

        scheduler.stop_animation(second);
        let ids: Vec<_> = scheduler.animations_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![first, third]);
    }
}
