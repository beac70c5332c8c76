//! Page contract and tuning knobs, overridable from YAML

mod settings;

pub use settings::{
    CursorTrailSettings, EffectsConfig, LeafSettings, MenuSettings, NavigationSettings,
    NewsletterSettings, ParallaxSettings, ParticleSettings, RevealSettings, SmoothScrollSettings,
    StaggerGroup, TiltSettings,
};
