//! Frame sources
//!
//! The scheduler does not own a thread or an event loop. It asks a [`FrameSource`] for the
//! current time and asks it to call back "soon" while work remains; the host is
//! responsible for turning that request into an actual tick.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

/// Best-effort periodic callback provider.
pub trait FrameSource {
    /// Current time in milliseconds
    fn now(&self) -> f64;

    /// Ask the host to tick the scheduler again soon
    fn request_frame(&self);
}

impl<T: FrameSource + ?Sized> FrameSource for Rc<T> {
    fn now(&self) -> f64 {
        (**self).now()
    }

    fn request_frame(&self) {
        (**self).request_frame()
    }
}

// ============================================================================
// Manual clock
// ============================================================================

#[derive(Debug, Default)]
struct ManualClockState {
    now: Cell<f64>,
    pending: Cell<bool>,
    requests: Cell<u64>,
}

/// Deterministic clock advanced by the host.
///
/// Clones share state, so a test can hand one clone to the scheduler and keep another
/// to move time forward.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    state: Rc<ManualClockState>,
}

impl ManualClock {
    /// Create a clock reading 0 ms
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock reading the given time
    pub fn starting_at(now_ms: f64) -> Self {
        let clock = Self::new();
        clock.set(now_ms);
        clock
    }

    /// Move time forward
    pub fn advance(&self, delta_ms: f64) {
        self.state.now.set(self.state.now.get() + delta_ms);
    }

    /// Jump to an absolute time
    pub fn set(&self, now_ms: f64) {
        self.state.now.set(now_ms);
    }

    /// Check and clear the pending frame request
    pub fn take_frame_request(&self) -> bool {
        self.state.pending.replace(false)
    }

    /// Whether a frame has been requested and not yet taken
    pub fn is_frame_requested(&self) -> bool {
        self.state.pending.get()
    }

    /// Total number of frame requests received
    pub fn frame_requests(&self) -> u64 {
        self.state.requests.get()
    }
}

impl FrameSource for ManualClock {
    fn now(&self) -> f64 {
        self.state.now.get()
    }

    fn request_frame(&self) {
        self.state.pending.set(true);
        self.state.requests.set(self.state.requests.get() + 1);
    }
}

// ============================================================================
// System clock
// ============================================================================

/// Callback for waking up the host's event loop when a frame is requested
pub type WakeCallback = Arc<dyn Fn() + Send + Sync>;

/// Monotonic wall clock.
///
/// Time is measured in milliseconds since the clock was created. A frame request sets a
/// flag the host polls with [`SystemClock::take_frame_request`] and, if one is set,
/// invokes the wake callback so an idle event loop can be woken.
pub struct SystemClock {
    origin: Instant,
    frame_requested: Cell<bool>,
    wake_callback: Option<WakeCallback>,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            frame_requested: Cell::new(false),
            wake_callback: None,
        }
    }

    /// Set a callback invoked on every frame request
    ///
    /// # Example
    ///
    /// ```ignore
    /// let proxy = event_loop.create_proxy();
    /// clock.set_wake_callback(move || { let _ = proxy.send_event(()); });
    /// ```
    pub fn set_wake_callback<F>(&mut self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.wake_callback = Some(Arc::new(callback));
    }

    /// Check and clear the frame request flag
    pub fn take_frame_request(&self) -> bool {
        self.frame_requested.replace(false)
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSource for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }

    fn request_frame(&self) {
        self.frame_requested.set(true);
        if let Some(ref callback) = self.wake_callback {
            tracing::trace!("SystemClock: waking host event loop");
            callback();
        }
    }
}
