/// Class marking an element as reveal-eligible
pub const REVEAL_CLASS: &str = "reveal";
/// Class that plays the reveal transition
pub const VISIBLE_CLASS: &str = "visible";

/// Lifecycle of a reveal target. `Visible` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Pending,
    Visible,
}

impl RevealState {
    pub fn from_visible_flag(visible: bool) -> Self {
        if visible {
            Self::Visible
        } else {
            Self::Pending
        }
    }

    /// Feed one intersection observation. Returns the next state and
    /// whether this observation is the one that revealed the target.
    pub fn observe(self, intersecting: bool) -> (Self, bool) {
        match (self, intersecting) {
            (Self::Pending, true) => (Self::Visible, true),
            (state, _) => (state, false),
        }
    }

    /// Whether the target no longer needs observing
    pub fn is_settled(self) -> bool {
        self == Self::Visible
    }
}

/// Transition delays for the members of a staggered group, in order
pub fn stagger_delays(count: usize, step_ms: u32) -> impl Iterator<Item = u32> {
    (0..count as u32).map(move |i| i.saturating_mul(step_ms))
}

/// CSS value for a transition delay
pub fn transition_delay(delay_ms: u32) -> String {
    format!("{}ms", delay_ms)
}
