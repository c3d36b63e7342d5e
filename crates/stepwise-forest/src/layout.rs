//! Coordinate assignment for renderers.
//!
//! Two strategies:
//!
//! - [`layout_binary`] halves the horizontal offset at every level, so each
//!   node sits exactly between the slots of its two children.
//! - [`layout_trie`] gives every layout leaf (a node with no children) its
//!   own sector of the width, left to right in a→z order, and centers each
//!   inner node between its first and last child.
//!
//! Both use `y = top + depth * level_gap`.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::trie::Trie;
use crate::types::NodeId;

/// Read-only view of an arena-backed binary tree.
pub trait BinaryShape {
    type Value;

    fn root(&self) -> Option<u32>;
    fn left(&self, idx: u32) -> Option<u32>;
    fn right(&self, idx: u32) -> Option<u32>;
    fn id(&self, idx: u32) -> NodeId;
    fn value(&self, idx: u32) -> &Self::Value;
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal extent shared out between the nodes.
    pub width: f64,
    /// `y` of the root.
    pub top: f64,
    /// Vertical distance between consecutive depths.
    pub level_gap: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            top: 40.0,
            level_gap: 80.0,
        }
    }
}

impl LayoutConfig {
    fn y(&self, depth: usize) -> f64 {
        self.top + depth as f64 * self.level_gap
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Placement {
    pub id: NodeId,
    pub label: String,
    pub depth: usize,
    pub x: f64,
    pub y: f64,
    pub parent: Option<NodeId>,
}

/// Placements in pre-order (parents before their children).
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Layout {
    placements: Vec<Placement>,
}

impl Layout {
    pub fn get(&self, id: NodeId) -> Option<&Placement> {
        self.placements.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Placement> {
        self.placements.iter()
    }

    pub fn as_slice(&self) -> &[Placement] {
        &self.placements
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Parent/child id pairs, for drawing edges.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.placements
            .iter()
            .filter_map(|p| p.parent.map(|parent| (parent, p.id)))
    }
}

pub fn layout_binary<S: BinaryShape>(shape: &S, cfg: &LayoutConfig) -> Layout
where
    S::Value: Display,
{
    let mut placements = Vec::new();
    if let Some(root) = shape.root() {
        place_binary(shape, cfg, root, cfg.width / 2.0, cfg.width / 4.0, 0, None, &mut placements);
    }
    Layout { placements }
}

#[allow(clippy::too_many_arguments)]
fn place_binary<S: BinaryShape>(
    shape: &S,
    cfg: &LayoutConfig,
    idx: u32,
    x: f64,
    offset: f64,
    depth: usize,
    parent: Option<NodeId>,
    out: &mut Vec<Placement>,
) where
    S::Value: Display,
{
    let id = shape.id(idx);
    out.push(Placement {
        id,
        label: shape.value(idx).to_string(),
        depth,
        x,
        y: cfg.y(depth),
        parent,
    });
    if let Some(l) = shape.left(idx) {
        place_binary(shape, cfg, l, x - offset, offset / 2.0, depth + 1, Some(id), out);
    }
    if let Some(r) = shape.right(idx) {
        place_binary(shape, cfg, r, x + offset, offset / 2.0, depth + 1, Some(id), out);
    }
}

pub fn layout_trie<H>(trie: &Trie<H>, cfg: &LayoutConfig) -> Layout {
    let root = trie.root();
    let sector = cfg.width / trie.subtree_leaves(root) as f64;
    let mut placements = Vec::new();
    let mut next_leaf = 0;
    place_trie(trie, cfg, root, 0, None, sector, &mut next_leaf, &mut placements);
    Layout { placements }
}

#[allow(clippy::too_many_arguments)]
fn place_trie<H>(
    trie: &Trie<H>,
    cfg: &LayoutConfig,
    idx: u32,
    depth: usize,
    parent: Option<NodeId>,
    sector: f64,
    next_leaf: &mut usize,
    out: &mut Vec<Placement>,
) -> f64 {
    let node = trie.node(idx);
    let at = out.len();
    out.push(Placement {
        id: node.id,
        label: node.ch.to_string(),
        depth,
        x: 0.0,
        y: cfg.y(depth),
        parent,
    });

    let mut first = None;
    let mut last = 0.0;
    for child in trie.children(idx) {
        let cx = place_trie(trie, cfg, child, depth + 1, Some(node.id), sector, next_leaf, out);
        first.get_or_insert(cx);
        last = cx;
    }
    let x = match first {
        Some(first) => (first + last) / 2.0,
        None => {
            let x = (*next_leaf as f64 + 0.5) * sector;
            *next_leaf += 1;
            x
        }
    };
    out[at].x = x;
    x
}
