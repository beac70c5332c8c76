//! Randomized motion parameters for leaves and particles
//!
//! Sampling and rendering are kept apart: `sample` draws a typed record,
//! `css_text` turns it into an inline style.

use crate::platform::RandomSource;

/// Leaf width range, px
pub const LEAF_SIZE: (f64, f64) = (20.0, 45.0);
/// Leaf height relative to width
pub const LEAF_ASPECT: f64 = 1.25;
/// Fall duration range, seconds
pub const LEAF_FALL: (f64, f64) = (12.0, 30.0);
/// Horizontal sway period range, seconds
pub const LEAF_SWAY_PERIOD: (f64, f64) = (2.0, 5.0);
/// Sway amplitude range, px (sign chosen separately)
pub const LEAF_SWAY: (f64, f64) = (20.0, 80.0);
/// Extra rotation over the fall, degrees (sign chosen separately)
pub const LEAF_SPIN: (f64, f64) = (360.0, 1080.0);
pub const LEAF_OPACITY: (f64, f64) = (0.4, 0.8);

/// Particle diameter range, px
pub const PARTICLE_SIZE: (f64, f64) = (2.0, 6.0);
/// Loop period range, seconds
pub const PARTICLE_LOOP: (f64, f64) = (10.0, 25.0);
/// Start delay range, seconds
pub const PARTICLE_DELAY: (f64, f64) = (0.0, 15.0);

const FALLBACK_COLOR: &str = "rgba(201, 162, 39, 0.6)";

/// Birch leaf drawn in `currentColor`
pub const LEAF_SVG: &str = r#"<svg viewBox="0 0 28 50" fill="currentColor"><path d="M14 2 C8 8 4 16 4 24 C4 32 8 40 14 46 C20 40 24 32 24 24 C24 16 20 8 14 2Z"/><path d="M14 8 L14 50" stroke="currentColor" stroke-width="1.2" fill="none" opacity="0.5"/><path d="M8 18 Q14 22 14 22" stroke="currentColor" stroke-width="0.8" fill="none" opacity="0.4"/><path d="M20 18 Q14 22 14 22" stroke="currentColor" stroke-width="0.8" fill="none" opacity="0.4"/><path d="M6 28 Q14 34 14 34" stroke="currentColor" stroke-width="0.8" fill="none" opacity="0.4"/><path d="M22 28 Q14 34 14 34" stroke="currentColor" stroke-width="0.8" fill="none" opacity="0.4"/></svg>"#;

/// Amber, pale amber, lichen, mist
pub fn default_palette() -> Vec<String> {
    [
        "rgba(201, 162, 39, 0.6)",
        "rgba(201, 162, 39, 0.4)",
        "rgba(143, 168, 136, 0.3)",
        "rgba(197, 212, 192, 0.2)",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorKind {
    Leaf,
    Particle,
}

impl DecorKind {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Leaf => "leaf",
            Self::Particle => "particle",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeafParams {
    /// Width in px
    pub size: f64,
    /// Horizontal start, percent of container width
    pub start_x: f64,
    /// Seconds from top to bottom
    pub fall_duration: f64,
    pub sway_duration: f64,
    /// Signed sway amplitude in px
    pub sway_amount: f64,
    pub start_rotation: f64,
    pub end_rotation: f64,
    pub opacity: f64,
}

impl LeafParams {
    pub fn sample(rng: &mut dyn RandomSource) -> Self {
        let size = rng.range(LEAF_SIZE.0, LEAF_SIZE.1);
        let start_x = rng.range(0.0, 100.0);
        let fall_duration = rng.range(LEAF_FALL.0, LEAF_FALL.1);
        let sway_duration = rng.range(LEAF_SWAY_PERIOD.0, LEAF_SWAY_PERIOD.1);
        let sway_amount = rng.range(LEAF_SWAY.0, LEAF_SWAY.1);
        let start_rotation = rng.range(0.0, 360.0);
        let spin_sign = if rng.coin() { 1.0 } else { -1.0 };
        let spin = spin_sign * rng.range(LEAF_SPIN.0, LEAF_SPIN.1);
        let opacity = rng.range(LEAF_OPACITY.0, LEAF_OPACITY.1);
        let sway_sign = if rng.coin() { 1.0 } else { -1.0 };

        Self {
            size,
            start_x,
            fall_duration,
            sway_duration,
            sway_amount: sway_sign * sway_amount,
            start_rotation,
            end_rotation: start_rotation + spin,
            opacity,
        }
    }

    pub fn height(&self) -> f64 {
        self.size * LEAF_ASPECT
    }

    /// Delay after insertion at which the node is removed
    pub fn removal_delay_ms(&self, buffer_ms: u32) -> u32 {
        ((self.fall_duration * 1000.0).round() as u32).saturating_add(buffer_ms)
    }

    pub fn css_text(&self) -> String {
        format!(
            "left: {:.3}%; width: {:.3}px; height: {:.3}px; \
             --fall-duration: {:.3}s; --sway-duration: {:.3}s; --sway-amount: {:.3}px; \
             --start-rotation: {:.3}deg; --end-rotation: {:.3}deg; --leaf-opacity: {:.3};",
            self.start_x,
            self.size,
            self.height(),
            self.fall_duration,
            self.sway_duration,
            self.sway_amount,
            self.start_rotation,
            self.end_rotation,
            self.opacity,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleParams {
    /// Diameter in px
    pub size: f64,
    pub start_x: f64,
    /// Seconds per animation loop
    pub duration: f64,
    pub delay: f64,
    pub color: String,
}

impl ParticleParams {
    pub fn sample(rng: &mut dyn RandomSource, palette: &[String]) -> Self {
        let size = rng.range(PARTICLE_SIZE.0, PARTICLE_SIZE.1);
        let start_x = rng.range(0.0, 100.0);
        let duration = rng.range(PARTICLE_LOOP.0, PARTICLE_LOOP.1);
        let delay = rng.range(PARTICLE_DELAY.0, PARTICLE_DELAY.1);
        let color = if palette.is_empty() {
            FALLBACK_COLOR.to_string()
        } else {
            palette[rng.index(palette.len())].clone()
        };

        Self {
            size,
            start_x,
            duration,
            delay,
            color,
        }
    }

    pub fn glow_radius(&self) -> f64 {
        self.size * 2.0
    }

    pub fn css_text(&self) -> String {
        format!(
            "width: {size:.3}px; height: {size:.3}px; left: {x:.3}%; background: {color}; \
             box-shadow: 0 0 {glow:.3}px {color}; animation-duration: {dur:.3}s; animation-delay: {delay:.3}s;",
            size = self.size,
            x = self.start_x,
            color = self.color,
            glow = self.glow_radius(),
            dur = self.duration,
            delay = self.delay,
        )
    }
}

/// Parameters of one decorative node, fixed at creation
#[derive(Debug, Clone, PartialEq)]
pub enum DecorParams {
    Leaf(LeafParams),
    Particle(ParticleParams),
}

impl DecorParams {
    pub fn kind(&self) -> DecorKind {
        match self {
            Self::Leaf(_) => DecorKind::Leaf,
            Self::Particle(_) => DecorKind::Particle,
        }
    }

    pub fn css_text(&self) -> String {
        match self {
            Self::Leaf(leaf) => leaf.css_text(),
            Self::Particle(particle) => particle.css_text(),
        }
    }

    /// Inner markup for the node, if any
    pub fn markup(&self) -> Option<&'static str> {
        match self {
            Self::Leaf(_) => Some(LEAF_SVG),
            Self::Particle(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::SeededRandom;

    fn within(value: f64, range: (f64, f64)) -> bool {
        value >= range.0 && value <= range.1
    }

    #[test]
    fn test_leaf_ranges() {
        let mut rng = SeededRandom::new(1);
        for _ in 0..2000 {
            let leaf = LeafParams::sample(&mut rng);
            assert!(within(leaf.size, LEAF_SIZE));
            assert!(within(leaf.fall_duration, LEAF_FALL));
            assert!(within(leaf.opacity, LEAF_OPACITY));
            assert!(within(leaf.sway_duration, LEAF_SWAY_PERIOD));
            assert!(within(leaf.sway_amount.abs(), LEAF_SWAY));
            assert!(within(leaf.start_x, (0.0, 100.0)));
            assert!(within((leaf.end_rotation - leaf.start_rotation).abs(), LEAF_SPIN));
            assert!((leaf.height() - leaf.size * 1.25).abs() < 1e-9);
        }
    }

    #[test]
    fn test_leaf_signs_vary() {
        let mut rng = SeededRandom::new(2);
        let leaves: Vec<_> = (0..200).map(|_| LeafParams::sample(&mut rng)).collect();
        assert!(leaves.iter().any(|l| l.sway_amount < 0.0));
        assert!(leaves.iter().any(|l| l.sway_amount > 0.0));
        assert!(leaves.iter().any(|l| l.end_rotation < l.start_rotation));
        assert!(leaves.iter().any(|l| l.end_rotation > l.start_rotation));
    }

    #[test]
    fn test_leaf_removal_delay() {
        let mut rng = SeededRandom::new(3);
        let mut leaf = LeafParams::sample(&mut rng);
        leaf.fall_duration = 12.5;
        assert_eq!(leaf.removal_delay_ms(100), 12_600);
        assert_eq!(leaf.removal_delay_ms(0), 12_500);
        assert_eq!(leaf.removal_delay_ms(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_leaf_css_carries_custom_properties() {
        let mut rng = SeededRandom::new(4);
        let css = LeafParams::sample(&mut rng).css_text();
        for property in [
            "left:",
            "width:",
            "height:",
            "--fall-duration:",
            "--sway-duration:",
            "--sway-amount:",
            "--start-rotation:",
            "--end-rotation:",
            "--leaf-opacity:",
        ] {
            assert!(css.contains(property), "missing {} in {}", property, css);
        }
    }

    #[test]
    fn test_particle_ranges() {
        let palette = default_palette();
        let mut rng = SeededRandom::new(5);
        for _ in 0..2000 {
            let particle = ParticleParams::sample(&mut rng, &palette);
            assert!(within(particle.size, PARTICLE_SIZE));
            assert!(within(particle.duration, PARTICLE_LOOP));
            assert!(within(particle.delay, PARTICLE_DELAY));
            assert!(palette.contains(&particle.color));
            assert_eq!(particle.glow_radius(), particle.size * 2.0);
        }
    }

    #[test]
    fn test_particle_css() {
        let particle = ParticleParams {
            size: 4.0,
            start_x: 50.0,
            duration: 12.0,
            delay: 3.0,
            color: "rgba(143, 168, 136, 0.3)".to_string(),
        };
        let css = particle.css_text();
        assert!(css.contains("width: 4.000px"));
        assert!(css.contains("box-shadow: 0 0 8.000px rgba(143, 168, 136, 0.3)"));
        assert!(css.contains("animation-delay: 3.000s"));
    }

    #[test]
    fn test_only_leaves_carry_markup() {
        let mut rng = SeededRandom::new(6);
        let leaf = DecorParams::Leaf(LeafParams::sample(&mut rng));
        let particle = DecorParams::Particle(ParticleParams::sample(&mut rng, &default_palette()));
        assert_eq!(leaf.kind(), DecorKind::Leaf);
        assert!(leaf.markup().is_some());
        assert_eq!(particle.kind().class_name(), "particle");
        assert!(particle.markup().is_none());
    }
}
