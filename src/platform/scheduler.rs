//! Single-threaded task queue over the browser's timers and frames

use std::cell::RefCell;
use std::rc::Rc;

use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::{Interval, Timeout};

/// Deferred work on the main thread.
///
/// Nothing scheduled here is ever cancelled; page teardown is the only
/// way tasks stop.
pub trait Scheduler {
    /// Run `task` once after `delay_ms`
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
    /// Run `task` every `period_ms`, first run one period from now
    fn every(&self, period_ms: u32, task: Box<dyn FnMut()>);
    /// Run `task` before the next repaint
    fn next_frame(&self, task: Box<dyn FnOnce()>);
}

/// `setTimeout` / `setInterval` / `requestAnimationFrame`
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }

    fn every(&self, period_ms: u32, task: Box<dyn FnMut()>) {
        Interval::new(period_ms, task).forget();
    }

    fn next_frame(&self, task: Box<dyn FnOnce()>) {
        // The handle must outlive the request; the callback releases it.
        let slot: Rc<RefCell<Option<AnimationFrame>>> = Rc::default();
        let pending = Rc::clone(&slot);
        let handle = request_animation_frame(move |_timestamp| {
            pending.borrow_mut().take();
            task();
        });
        *slot.borrow_mut() = Some(handle);
    }
}
