//! Browser plumbing shared by every effect
//!
//! Timing, randomness, logging and DOM lookups live here so the effects
//! themselves stay small and testable off the browser.

pub mod console;
pub mod dom;
pub mod motion;
pub mod random;
pub mod scheduler;

#[cfg(test)]
pub(crate) mod virtual_clock;

pub use console::LogLevel;
pub use motion::MotionPreference;
pub use random::{BrowserRandom, RandomSource, SeededRandom};
pub use scheduler::{BrowserScheduler, Scheduler};
