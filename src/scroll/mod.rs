//! Scroll-driven effects: nav styling, parallax and anchor scrolling

pub mod anchors;
pub mod navigation;
pub mod parallax;
mod throttle;

pub use throttle::{throttled, FrameThrottle};
