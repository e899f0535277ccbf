use std::rc::Rc;

use ahash::{HashMap, HashMapExt};

use super::sequence_core::{Node, Sequence};

/// Identity table threaded through a deep clone.
///
/// Maps each original sequence node to its clone, so that a child reachable
/// along several paths is cloned once and the clones share it, just like
/// the originals did.
#[derive(Debug, Default)]
pub struct CloneMemo {
    // the original is kept alive so its address can't be reused
    clones: HashMap<*const Node, (Rc<Node>, Sequence)>,
}

impl CloneMemo {
    pub fn new() -> Self {
        Self {
            clones: HashMap::new(),
        }
    }

    /// The number of distinct nodes cloned so far.
    pub fn len(&self) -> usize {
        self.clones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clones.is_empty()
    }

    pub(crate) fn get(&self, node: &Rc<Node>) -> Option<&Sequence> {
        self.clones
            .get(&Rc::as_ptr(node))
            .map(|(_, clone)| clone)
    }

    pub(crate) fn insert(&mut self, node: &Rc<Node>, clone: Sequence) {
        self.clones
            .insert(Rc::as_ptr(node), (node.clone(), clone));
    }
}
