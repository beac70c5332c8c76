//! In-memory decor layer that records node lifecycles against a virtual clock

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::factory::{DecorLayer, DecorNode};
use super::params::DecorParams;
use crate::platform::virtual_clock::VirtualClock;

struct RecordedNode {
    params: DecorParams,
    created_at: u64,
    falling_at: Cell<Option<u64>>,
    removed_at: Cell<Option<u64>>,
}

#[derive(Clone)]
pub struct RecordedHandle {
    node: Rc<RecordedNode>,
    clock: Rc<VirtualClock>,
}

impl RecordedHandle {
    pub fn params(&self) -> &DecorParams {
        &self.node.params
    }

    pub fn created_at(&self) -> u64 {
        self.node.created_at
    }

    pub fn falling_at(&self) -> Option<u64> {
        self.node.falling_at.get()
    }

    pub fn removed_at(&self) -> Option<u64> {
        self.node.removed_at.get()
    }
}

impl DecorNode for RecordedHandle {
    fn mark_falling(&self) {
        self.node.falling_at.set(Some(self.clock.now()));
    }

    fn detach(&self) {
        self.node.removed_at.set(Some(self.clock.now()));
    }
}

pub struct RecordingLayer {
    clock: Rc<VirtualClock>,
    nodes: RefCell<Vec<RecordedHandle>>,
}

impl RecordingLayer {
    pub fn new(clock: Rc<VirtualClock>) -> Self {
        Self {
            clock,
            nodes: RefCell::new(Vec::new()),
        }
    }

    pub fn nodes(&self) -> Vec<RecordedHandle> {
        self.nodes.borrow().clone()
    }

    pub fn live_count(&self) -> usize {
        self.nodes
            .borrow()
            .iter()
            .filter(|n| n.removed_at().is_none())
            .count()
    }
}

impl DecorLayer for RecordingLayer {
    type Node = RecordedHandle;

    fn insert(&self, params: &DecorParams) -> Result<RecordedHandle, String> {
        let handle = RecordedHandle {
            node: Rc::new(RecordedNode {
                params: params.clone(),
                created_at: self.clock.now(),
                falling_at: Cell::new(None),
                removed_at: Cell::new(None),
            }),
            clock: Rc::clone(&self.clock),
        };
        self.nodes.borrow_mut().push(handle.clone());
        Ok(handle)
    }
}
