use std::cell::Cell;
use std::rc::Rc;

use crate::platform::Scheduler;

/// Coalesces bursts of events into at most one update per frame.
///
/// Holds the newest value and a `ticking` flag; each handler owns its own.
#[derive(Debug, Default)]
pub struct FrameThrottle {
    ticking: Cell<bool>,
    latest: Cell<f64>,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value`; true when no frame is pending and the caller must
    /// schedule one
    pub fn record(&self, value: f64) -> bool {
        self.latest.set(value);
        !self.ticking.replace(true)
    }

    /// Called from the frame: clear the flag and hand back the newest value
    pub fn release(&self) -> f64 {
        self.ticking.set(false);
        self.latest.get()
    }

    pub fn is_ticking(&self) -> bool {
        self.ticking.get()
    }
}

/// Wrap `update` so calls are batched onto animation frames
pub fn throttled(scheduler: Rc<dyn Scheduler>, update: impl Fn(f64) + 'static) -> impl Fn(f64) {
    let throttle = Rc::new(FrameThrottle::new());
    let update = Rc::new(update);

    move |value| {
        if throttle.record(value) {
            let throttle = Rc::clone(&throttle);
            let update = Rc::clone(&update);
            scheduler.next_frame(Box::new(move || update(throttle.release())));
        }
    }
}
