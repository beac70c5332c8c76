use web_sys::Window;

/// Media query the platform exposes for the reduced-motion accessibility setting
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// User's motion preference, read once per page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

impl MotionPreference {
    pub fn from_reduce_flag(reduce: bool) -> Self {
        if reduce {
            Self::Reduced
        } else {
            Self::Full
        }
    }

    /// Query the window; an unsupported media query counts as no preference.
    pub fn detect(window: &Window) -> Self {
        match window.match_media(REDUCED_MOTION_QUERY) {
            Ok(Some(list)) => Self::from_reduce_flag(list.matches()),
            _ => Self::Full,
        }
    }

    pub fn allows_animation(self) -> bool {
        self == Self::Full
    }
}
