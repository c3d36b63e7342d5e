//! Identity and step vocabulary shared by every engine.
//!
//! Nodes live in `Vec`-backed arenas and link to each other through
//! `Option<u32>` slot indices. Slots are recycled after deletes, so a
//! renderer must never key its state on a slot index; it keys on the
//! [`NodeId`] carried by each node instead.

use std::fmt;

use serde::Serialize;

/// Opaque, never-reused identity of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    /// Raw token value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Mints [`NodeId`]s from a monotonic counter.
///
/// Each engine owns one factory, so identities are deterministic for a given
/// sequence of operations.
#[derive(Clone, Debug, Default)]
pub struct NodeFactory {
    next: u64,
}

impl NodeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mint(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next += 1;
        id
    }
}

/// What happened to the node named by a [`Step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// The algorithm is looking at this node.
    Visit,
    /// The operation reached its target.
    Found,
}

/// One suspension point of an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Step {
    pub node: NodeId,
    pub phase: Phase,
}

impl Step {
    pub fn visit(node: NodeId) -> Self {
        Self {
            node,
            phase: Phase::Visit,
        }
    }

    pub fn found(node: NodeId) -> Self {
        Self {
            node,
            phase: Phase::Found,
        }
    }
}
