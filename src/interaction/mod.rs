//! Small pointer and form interactions

pub mod cursor_trail;
pub mod menu;
pub mod newsletter;
pub mod tilt;
pub mod typewriter;

pub use newsletter::SubmitDecision;
pub use tilt::Tilt;
pub use typewriter::Typewriter;
