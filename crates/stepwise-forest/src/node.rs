//! Arena storage and the binary node shared by the AVL, heap and splay
//! engines.

use std::ops::{Index, IndexMut};

use crate::types::NodeId;

/// Binary tree node.
///
/// `height` is only maintained by the AVL engine; the other engines leave it
/// at `1`.
#[derive(Clone, Debug)]
pub struct BinaryNode<T> {
    pub value: T,
    pub left: Option<u32>,
    pub right: Option<u32>,
    pub height: u32,
    pub id: NodeId,
}

impl<T> BinaryNode<T> {
    pub fn new(value: T, id: NodeId) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 1,
            id,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// `Vec`-backed slot storage with a free list.
///
/// Released slots keep their stale contents until reused; they are simply
/// unreachable from any root.
#[derive(Clone, Debug)]
pub struct Arena<N> {
    slots: Vec<N>,
    free: Vec<u32>,
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }
}

impl<N> Arena<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, node: N) -> u32 {
        if let Some(idx) = self.free.pop() {
            self.slots[idx as usize] = node;
            idx
        } else {
            self.slots.push(node);
            (self.slots.len() - 1) as u32
        }
    }

    pub fn release(&mut self, idx: u32) {
        debug_assert!(!self.free.contains(&idx), "slot {idx} released twice");
        self.free.push(idx);
    }

    /// Number of live slots.
    pub fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

impl<N> Index<u32> for Arena<N> {
    type Output = N;

    #[inline]
    fn index(&self, idx: u32) -> &N {
        &self.slots[idx as usize]
    }
}

impl<N> IndexMut<u32> for Arena<N> {
    #[inline]
    fn index_mut(&mut self, idx: u32) -> &mut N {
        &mut self.slots[idx as usize]
    }
}

/// In-order values under `root`.
pub(crate) fn in_order<T: Clone>(arena: &Arena<BinaryNode<T>>, root: Option<u32>) -> Vec<T> {
    let mut out = Vec::new();
    let mut stack = Vec::new();
    let mut curr = root;
    loop {
        while let Some(i) = curr {
            stack.push(i);
            curr = arena[i].left;
        }
        let Some(i) = stack.pop() else {
            break;
        };
        out.push(arena[i].value.clone());
        curr = arena[i].right;
    }
    out
}

/// Checks strict ascending order of an in-order walk.
pub(crate) fn check_order<T: Ord + Clone + std::fmt::Debug>(
    arena: &Arena<BinaryNode<T>>,
    root: Option<u32>,
) -> Result<(), String> {
    let values = in_order(arena, root);
    for pair in values.windows(2) {
        if pair[0] >= pair[1] {
            return Err(format!("out of order: {:?} before {:?}", pair[0], pair[1]));
        }
    }
    Ok(())
}
