//! Deterministic stand-in for the browser event loop, driven by tests

use std::cell::RefCell;
use std::rc::Rc;

use super::scheduler::Scheduler;

/// Simulated frame interval (~60 Hz)
pub const FRAME_MS: u64 = 16;

enum Task {
    Once(Box<dyn FnOnce()>),
    Repeat { period: u64, task: Box<dyn FnMut()> },
}

struct Timer {
    due: u64,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct ClockState {
    now: u64,
    seq: u64,
    timers: Vec<Timer>,
    frames: Vec<Box<dyn FnOnce()>>,
}

#[derive(Default)]
pub struct VirtualClock {
    state: RefCell<ClockState>,
}

impl VirtualClock {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn now(&self) -> u64 {
        self.state.borrow().now
    }

    pub fn pending_frames(&self) -> usize {
        self.state.borrow().frames.len()
    }

    /// Run every frame callback queued so far; callbacks queued while
    /// running wait for the next frame.
    pub fn run_frame(&self) {
        let frames = std::mem::take(&mut self.state.borrow_mut().frames);
        for frame in frames {
            frame();
        }
    }

    /// Move time forward, firing timers in due order and flushing frame
    /// callbacks on every frame boundary crossed.
    pub fn advance(&self, ms: u64) {
        let target = self.now() + ms;
        loop {
            let next_frame = (self.now() / FRAME_MS + 1) * FRAME_MS;
            if next_frame > target {
                break;
            }
            self.run_timers_until(next_frame);
            self.state.borrow_mut().now = next_frame;
            self.run_frame();
        }
        self.run_timers_until(target);
        self.state.borrow_mut().now = target;
    }

    fn push(&self, due: u64, task: Task) {
        let mut state = self.state.borrow_mut();
        let seq = state.seq;
        state.seq += 1;
        state.timers.push(Timer { due, seq, task });
    }

    fn pop_due(&self, until: u64) -> Option<Timer> {
        let mut state = self.state.borrow_mut();
        let index = state
            .timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due <= until)
            .min_by_key(|(_, timer)| (timer.due, timer.seq))
            .map(|(index, _)| index)?;
        Some(state.timers.swap_remove(index))
    }

    fn run_timers_until(&self, until: u64) {
        while let Some(timer) = self.pop_due(until) {
            self.state.borrow_mut().now = timer.due;
            match timer.task {
                Task::Once(task) => task(),
                Task::Repeat { period, mut task } => {
                    task();
                    self.push(timer.due + period, Task::Repeat { period, task });
                }
            }
        }
    }
}

impl Scheduler for VirtualClock {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let due = self.now() + delay_ms as u64;
        self.push(due, Task::Once(task));
    }

    fn every(&self, period_ms: u32, task: Box<dyn FnMut()>) {
        let period = (period_ms as u64).max(1);
        let due = self.now() + period;
        self.push(due, Task::Repeat { period, task });
    }

    fn next_frame(&self, task: Box<dyn FnOnce()>) {
        self.state.borrow_mut().frames.push(task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_timers_fire_in_due_order() {
        let clock = VirtualClock::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for (delay, tag) in [(300u32, "c"), (100, "a"), (200, "b")] {
            let log = Rc::clone(&log);
            clock.after(delay, Box::new(move || log.borrow_mut().push(tag)));
        }

        clock.advance(250);
        assert_eq!(*log.borrow(), vec!["a", "b"]);
        clock.advance(100);
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_interval_repeats() {
        let clock = VirtualClock::new();
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        clock.every(1000, Box::new(move || counter.set(counter.get() + 1)));

        clock.advance(999);
        assert_eq!(count.get(), 0);
        clock.advance(4001);
        assert_eq!(count.get(), 5);
    }

    #[test]
    fn test_frames_flush_on_boundary() {
        let clock = VirtualClock::new();
        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);
        clock.next_frame(Box::new(move || flag.set(true)));

        assert_eq!(clock.pending_frames(), 1);
        clock.advance(FRAME_MS);
        assert!(ran.get());
        assert_eq!(clock.pending_frames(), 0);
    }

    #[test]
    fn test_timer_sees_its_own_due_time() {
        let clock = VirtualClock::new();
        let seen = Rc::new(Cell::new(0));
        let stamp = Rc::clone(&seen);
        let inner = Rc::clone(&clock);
        clock.after(1234, Box::new(move || stamp.set(inner.now())));

        clock.advance(5000);
        assert_eq!(seen.get(), 1234);
    }
}
