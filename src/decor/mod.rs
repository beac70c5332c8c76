//! Decorative leaves and particles
//!
//! A factory builds one randomized node at a time and schedules its
//! removal; a spawner feeds the factory on a plan, gated by the user's
//! motion preference.

mod factory;
mod params;
mod spawner;

#[cfg(test)]
pub(crate) mod recording;

pub use factory::{DecorFactory, DecorLayer, DecorNode, DomLayer, FALLING_CLASS, REMOVAL_BUFFER_MS};
pub use params::{
    default_palette, DecorKind, DecorParams, LeafParams, ParticleParams, LEAF_SVG,
};
pub use spawner::{init_leaves, init_particles, SpawnPlan, Spawner};
