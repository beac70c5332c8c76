//! One-shot viewport reveals with staggered grids

mod controller;
mod state;

pub use controller::{apply_entry, init, RevealController};
pub use state::{stagger_delays, transition_delay, RevealState, REVEAL_CLASS, VISIBLE_CLASS};
