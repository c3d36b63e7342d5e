use crate::layout::BinaryShape;
use crate::node::BinaryNode;
use crate::types::NodeId;

/// Linked-tree projection of a heap array.
#[derive(Clone, Debug)]
pub struct HeapView<T> {
    nodes: Vec<BinaryNode<T>>,
    root: Option<u32>,
}

impl<T> HeapView<T> {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, idx: u32) -> &BinaryNode<T> {
        &self.nodes[idx as usize]
    }
}

/// Copies `items` and links slot `i` to `2i + 1` / `2i + 2`.
pub fn build_tree_from_array<T: Clone>(items: &[BinaryNode<T>]) -> HeapView<T> {
    let mut nodes = Vec::with_capacity(items.len());
    let root = link(items, 0, &mut nodes);
    HeapView { nodes, root }
}

fn link<T: Clone>(items: &[BinaryNode<T>], i: usize, out: &mut Vec<BinaryNode<T>>) -> Option<u32> {
    let src = items.get(i)?;
    let at = out.len() as u32;
    out.push(BinaryNode::new(src.value.clone(), src.id));
    let left = link(items, 2 * i + 1, out);
    let right = link(items, 2 * i + 2, out);
    let node = &mut out[at as usize];
    node.left = left;
    node.right = right;
    Some(at)
}

impl<T> BinaryShape for HeapView<T> {
    type Value = T;

    fn root(&self) -> Option<u32> {
        self.root
    }

    fn left(&self, idx: u32) -> Option<u32> {
        self.nodes[idx as usize].left
    }

    fn right(&self, idx: u32) -> Option<u32> {
        self.nodes[idx as usize].right
    }

    fn id(&self, idx: u32) -> NodeId {
        self.nodes[idx as usize].id
    }

    fn value(&self, idx: u32) -> &T {
        &self.nodes[idx as usize].value
    }
}
