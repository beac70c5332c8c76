use std::rc::Rc;

use web_sys::Document;

use super::factory::{DecorFactory, DecorLayer, DomLayer};
use super::params::DecorKind;
use crate::config::{LeafSettings, ParticleSettings};
use crate::platform::{console, BrowserRandom, MotionPreference, Scheduler};

/// When and how often a spawner emits
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnPlan {
    /// Elements emitted at startup
    pub initial_count: u32,
    /// Gap between startup elements; zero emits them all at once
    pub initial_stagger_ms: u32,
    /// Period of the spawn roll, `None` for a one-off burst
    pub interval_ms: Option<u32>,
    /// Odds that a roll emits an element
    pub probability: f64,
}

impl SpawnPlan {
    /// A single burst of `count` elements and nothing after
    pub fn burst(count: u32) -> Self {
        Self {
            initial_count: count,
            initial_stagger_ms: 0,
            interval_ms: None,
            probability: 0.0,
        }
    }

    /// Offsets of the startup elements from `start`
    pub fn initial_delays(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.initial_count).map(move |i| i.saturating_mul(self.initial_stagger_ms))
    }
}

/// Drives a factory on a plan for the lifetime of the page
pub struct Spawner<L: DecorLayer + 'static> {
    factory: Rc<DecorFactory<L>>,
    kind: DecorKind,
    plan: SpawnPlan,
}

impl<L: DecorLayer + 'static> Spawner<L> {
    pub fn new(factory: Rc<DecorFactory<L>>, kind: DecorKind, plan: SpawnPlan) -> Self {
        Self { factory, kind, plan }
    }

    /// Begin emitting. Returns false, having touched nothing, when the
    /// user asked for reduced motion.
    pub fn start(self, motion: MotionPreference) -> bool {
        if !motion.allows_animation() {
            return false;
        }

        let scheduler = self.factory.scheduler();
        let kind = self.kind;

        // Even zero-delay startup elements go through the queue, after
        // every initializer has run
        for delay in self.plan.initial_delays() {
            let factory = Rc::clone(&self.factory);
            scheduler.after(delay, Box::new(move || emit(&factory, kind)));
        }

        if let Some(period) = self.plan.interval_ms {
            let factory = Rc::clone(&self.factory);
            let probability = self.plan.probability;
            scheduler.every(
                period,
                Box::new(move || {
                    if factory.chance(probability) {
                        emit(&factory, kind);
                    }
                }),
            );
        }

        true
    }
}

fn emit<L: DecorLayer>(factory: &DecorFactory<L>, kind: DecorKind) {
    if let Err(err) = factory.create(kind) {
        console::warn(&format!("failed to spawn {}: {}", kind.class_name(), err));
    }
}

/// Start the falling leaves if their container is on the page
pub fn init_leaves(
    document: &Document,
    settings: &LeafSettings,
    motion: MotionPreference,
    scheduler: Rc<dyn Scheduler>,
) -> Result<(), String> {
    let Some(layer) = DomLayer::find(document, &settings.container_id) else {
        console::debug(&format!("leaves disabled: #{} not found", settings.container_id));
        return Ok(());
    };

    let factory = DecorFactory::new(layer, scheduler, Box::new(BrowserRandom))
        .with_removal_buffer(settings.removal_buffer_ms);
    let started = Spawner::new(Rc::new(factory), DecorKind::Leaf, settings.plan()).start(motion);
    console::debug(&format!("leaves started: {}", started));
    Ok(())
}

/// Scatter the ambient particle field if its container is on the page
pub fn init_particles(
    document: &Document,
    settings: &ParticleSettings,
    motion: MotionPreference,
    scheduler: Rc<dyn Scheduler>,
) -> Result<(), String> {
    let Some(layer) = DomLayer::find(document, &settings.container_id) else {
        console::debug(&format!("particles disabled: #{} not found", settings.container_id));
        return Ok(());
    };

    let factory = DecorFactory::new(layer, scheduler, Box::new(BrowserRandom))
        .with_palette(settings.palette.clone());
    let started =
        Spawner::new(Rc::new(factory), DecorKind::Particle, settings.plan()).start(motion);
    console::debug(&format!("particles started: {}", started));
    Ok(())
}
