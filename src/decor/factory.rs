use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element};

use super::params::{default_palette, DecorKind, DecorParams, LeafParams, ParticleParams};
use crate::platform::dom::js_error;
use crate::platform::{RandomSource, Scheduler};

/// Class that starts a leaf's CSS fall transition
pub const FALLING_CLASS: &str = "falling";

/// Default grace between the end of a fall and node removal
pub const REMOVAL_BUFFER_MS: u32 = 100;

/// Handle to an inserted decorative node
pub trait DecorNode: Clone + 'static {
    /// Switch on the transition from the initial style
    fn mark_falling(&self);
    /// Take the node out of the page
    fn detach(&self);
}

/// Container decorative nodes are inserted into
pub trait DecorLayer {
    type Node: DecorNode;

    fn insert(&self, params: &DecorParams) -> Result<Self::Node, String>;
}

/// A container element in the live page
pub struct DomLayer {
    document: Document,
    container: Element,
}

impl DomLayer {
    pub fn new(document: Document, container: Element) -> Self {
        Self { document, container }
    }

    /// Look up the container by id; `None` disables the effect
    pub fn find(document: &Document, container_id: &str) -> Option<Self> {
        document
            .get_element_by_id(container_id)
            .map(|container| Self::new(document.clone(), container))
    }
}

impl DecorLayer for DomLayer {
    type Node = Element;

    fn insert(&self, params: &DecorParams) -> Result<Element, String> {
        let node = self.document.create_element("div").map_err(js_error)?;
        node.set_class_name(params.kind().class_name());
        if let Some(markup) = params.markup() {
            node.set_inner_html(markup);
        }
        node.set_attribute("style", &params.css_text()).map_err(js_error)?;
        self.container.append_child(&node).map_err(js_error)?;
        Ok(node)
    }
}

impl DecorNode for Element {
    fn mark_falling(&self) {
        // A detached node has nothing left to animate
        let _ = self.class_list().add_1(FALLING_CLASS);
    }

    fn detach(&self) {
        self.remove();
    }
}

/// Builds one decorative node at a time and owns it until it expires.
///
/// Leaves are removed `fall_duration + removal buffer` after insertion;
/// particles loop forever and stay until the page goes away.
pub struct DecorFactory<L: DecorLayer> {
    layer: L,
    scheduler: Rc<dyn Scheduler>,
    rng: RefCell<Box<dyn RandomSource>>,
    palette: Vec<String>,
    removal_buffer_ms: u32,
}

impl<L: DecorLayer> DecorFactory<L> {
    pub fn new(layer: L, scheduler: Rc<dyn Scheduler>, rng: Box<dyn RandomSource>) -> Self {
        Self {
            layer,
            scheduler,
            rng: RefCell::new(rng),
            palette: default_palette(),
            removal_buffer_ms: REMOVAL_BUFFER_MS,
        }
    }

    pub fn with_palette(mut self, palette: Vec<String>) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_removal_buffer(mut self, buffer_ms: u32) -> Self {
        self.removal_buffer_ms = buffer_ms;
        self
    }

    pub fn layer(&self) -> &L {
        &self.layer
    }

    pub fn scheduler(&self) -> Rc<dyn Scheduler> {
        Rc::clone(&self.scheduler)
    }

    /// Draw fresh parameters for `kind`
    pub fn sample(&self, kind: DecorKind) -> DecorParams {
        let mut rng = self.rng.borrow_mut();
        match kind {
            DecorKind::Leaf => DecorParams::Leaf(LeafParams::sample(&mut **rng)),
            DecorKind::Particle => {
                DecorParams::Particle(ParticleParams::sample(&mut **rng, &self.palette))
            }
        }
    }

    /// Roll the factory's dice
    pub fn chance(&self, probability: f64) -> bool {
        self.rng.borrow_mut().chance(probability)
    }

    /// Insert one node of `kind` and schedule its lifecycle
    pub fn create(&self, kind: DecorKind) -> Result<L::Node, String> {
        let params = self.sample(kind);
        let node = self.layer.insert(&params)?;

        if let DecorParams::Leaf(leaf) = &params {
            // The initial style must be painted once or the transition never runs
            let falling = node.clone();
            self.scheduler
                .next_frame(Box::new(move || falling.mark_falling()));

            let expiring = node.clone();
            self.scheduler.after(
                leaf.removal_delay_ms(self.removal_buffer_ms),
                Box::new(move || expiring.detach()),
            );
        }

        Ok(node)
    }
}
