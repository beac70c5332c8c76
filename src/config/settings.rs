use serde::Deserialize;

use crate::decor::{default_palette, SpawnPlan};
use crate::platform::LogLevel;

/// Everything the effects need to know about the page.
///
/// Defaults describe the site's own markup; a YAML document only has to
/// name the values it changes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub leaves: LeafSettings,
    pub particles: ParticleSettings,
    pub reveal: RevealSettings,
    pub navigation: NavigationSettings,
    pub mobile_menu: MenuSettings,
    pub newsletter: NewsletterSettings,
    pub smooth_scroll: SmoothScrollSettings,
    pub tilt: TiltSettings,
    pub parallax: ParallaxSettings,
    pub cursor_trail: CursorTrailSettings,
    pub log_level: LogLevel,
}

impl EffectsConfig {
    /// Parse overrides from YAML; blank input yields the defaults
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| format!("config parse error: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.leaves.spawn_probability) {
            return Err(format!(
                "leaves.spawn_probability must be within [0, 1], got {}",
                self.leaves.spawn_probability
            ));
        }
        if self.leaves.interval_ms == 0 {
            return Err("leaves.interval_ms must be positive".to_string());
        }
        if self.particles.palette.is_empty() {
            return Err("particles.palette must name at least one color".to_string());
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(format!(
                "reveal.threshold must be within [0, 1], got {}",
                self.reveal.threshold
            ));
        }
        if let Some(group) = self.reveal.stagger.iter().find(|g| g.step_ms == 0) {
            return Err(format!("reveal.stagger step for '{}' must be positive", group.selector));
        }
        if !(self.cursor_trail.follow > 0.0 && self.cursor_trail.follow <= 1.0) {
            return Err(format!(
                "cursor_trail.follow must be within (0, 1], got {}",
                self.cursor_trail.follow
            ));
        }
        Ok(())
    }
}

/// Falling leaves in `#floatingLeaves`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LeafSettings {
    pub container_id: String,
    /// Leaves released right after load
    pub initial_count: u32,
    /// Gap between the initial leaves
    pub initial_stagger_ms: u32,
    /// Period of the spawn roll
    pub interval_ms: u32,
    /// Odds that a spawn roll releases a leaf
    pub spawn_probability: f64,
    /// Grace added to the fall duration before the node is removed
    pub removal_buffer_ms: u32,
}

impl Default for LeafSettings {
    fn default() -> Self {
        Self {
            container_id: "floatingLeaves".to_string(),
            initial_count: 3,
            initial_stagger_ms: 1500,
            interval_ms: 6000,
            spawn_probability: 0.7,
            removal_buffer_ms: 100,
        }
    }
}

impl LeafSettings {
    pub fn plan(&self) -> SpawnPlan {
        SpawnPlan {
            initial_count: self.initial_count,
            initial_stagger_ms: self.initial_stagger_ms,
            interval_ms: Some(self.interval_ms),
            probability: self.spawn_probability,
        }
    }
}

/// Ambient glowing motes in `#particles`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleSettings {
    pub container_id: String,
    pub count: u32,
    pub palette: Vec<String>,
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self {
            container_id: "particles".to_string(),
            count: 7,
            palette: default_palette(),
        }
    }
}

impl ParticleSettings {
    pub fn plan(&self) -> SpawnPlan {
        SpawnPlan::burst(self.count)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    /// Groups tagged for reveal, in document traversal order per group
    pub selectors: Vec<String>,
    /// Visible fraction that triggers a reveal
    pub threshold: f64,
    pub root_margin: String,
    pub stagger: Vec<StaggerGroup>,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            selectors: [
                ".about-image",
                ".about-content",
                ".book-card",
                ".world-card",
                ".newsletter-card",
                ".section-title",
                ".section-intro",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            threshold: 0.1,
            root_margin: "0px".to_string(),
            stagger: vec![
                StaggerGroup::new(".book-card", 150),
                StaggerGroup::new(".world-card", 100),
            ],
        }
    }
}

/// Grid whose members reveal one after another
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StaggerGroup {
    pub selector: String,
    pub step_ms: u32,
}

impl StaggerGroup {
    pub fn new(selector: &str, step_ms: u32) -> Self {
        Self {
            selector: selector.to_string(),
            step_ms,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavigationSettings {
    pub selector: String,
    /// Scroll offset past which the bar gets `scrolled`
    pub scrolled_threshold: f64,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            selector: ".nav".to_string(),
            scrolled_threshold: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MenuSettings {
    pub toggle_id: String,
    pub menu_id: String,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            toggle_id: "navToggle".to_string(),
            menu_id: "mobileMenu".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NewsletterSettings {
    pub form_id: String,
    pub email_selector: String,
    pub button_selector: String,
    /// Button label shown while the mailing service loads
    pub pending_label: String,
}

impl Default for NewsletterSettings {
    fn default() -> Self {
        Self {
            form_id: "newsletterForm".to_string(),
            email_selector: r#"input[name="EMAIL"]"#.to_string(),
            button_selector: "button".to_string(),
            pending_label: "Joining...".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SmoothScrollSettings {
    pub enabled: bool,
    pub anchor_selector: String,
    /// Fixed header whose height is kept clear of the scroll target
    pub nav_selector: String,
}

impl Default for SmoothScrollSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            anchor_selector: r##"a[href^="#"]"##.to_string(),
            nav_selector: ".nav".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TiltSettings {
    pub enabled: bool,
    pub selector: String,
    pub art_selector: String,
    /// Resting Y rotation of the cover art, degrees
    pub base_rotate_y: f64,
    pub max_rotate_y: f64,
    pub max_rotate_x: f64,
}

impl Default for TiltSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            selector: ".book-cover".to_string(),
            art_selector: ".cover-art".to_string(),
            base_rotate_y: -15.0,
            max_rotate_y: 10.0,
            max_rotate_x: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParallaxSettings {
    pub enabled: bool,
    pub selector: String,
    /// Speed used when `data-parallax` is missing, unparsable or zero
    pub default_speed: f64,
}

impl Default for ParallaxSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            selector: "[data-parallax]".to_string(),
            default_speed: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CursorTrailSettings {
    pub enabled: bool,
    /// Fraction of the remaining distance covered each frame
    pub follow: f64,
}

impl Default for CursorTrailSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            follow: 0.1,
        }
    }
}
