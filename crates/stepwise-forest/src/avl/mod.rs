//! AVL tree with stored subtree heights.

pub(crate) mod util;

use std::fmt::Debug;

use crate::hook::{emit, NoopHook, StepHook};
use crate::layout::BinaryShape;
use crate::node::{check_order, in_order, Arena, BinaryNode};
use crate::types::{NodeFactory, NodeId, Phase};

use util::{check_heights, min_node, rebalance_after_delete, rebalance_after_insert};

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

pub struct AvlTree<T, H = NoopHook> {
    arena: Arena<BinaryNode<T>>,
    root: Option<u32>,
    size: usize,
    ids: NodeFactory,
    hook: H,
}

impl<T: Ord + Clone> AvlTree<T, NoopHook> {
    pub fn new() -> Self {
        Self::with_hook(NoopHook)
    }
}

impl<T: Ord + Clone> Default for AvlTree<T, NoopHook> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone, H: StepHook> AvlTree<T, H> {
    pub fn with_hook(hook: H) -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            size: 0,
            ids: NodeFactory::new(),
            hook,
        }
    }

    /// Inserts `value`, rebalancing on the way back up. Returns `false` for
    /// a duplicate, leaving the tree untouched.
    pub async fn insert(&mut self, value: T) -> bool {
        let mut path = Vec::new();
        let mut curr = self.root;
        while let Some(i) = curr {
            self.visit(i).await;
            let node = &self.arena[i];
            match value.cmp(&node.value) {
                std::cmp::Ordering::Less => {
                    path.push((i, Side::Left));
                    curr = node.left;
                }
                std::cmp::Ordering::Greater => {
                    path.push((i, Side::Right));
                    curr = node.right;
                }
                std::cmp::Ordering::Equal => {
                    tracing::debug!("avl insert: duplicate");
                    return false;
                }
            }
        }

        let created = self.arena.alloc(BinaryNode::new(value.clone(), self.ids.mint()));
        self.size += 1;

        let mut sub = created;
        while let Some((p, side)) = path.pop() {
            self.link(p, side, Some(sub));
            sub = rebalance_after_insert(&mut self.arena, p, &value);
        }
        self.root = Some(sub);
        self.visit(created).await;
        true
    }

    /// Removes `value`. A node with two children takes its in-order
    /// successor's value, and the successor is removed from the right
    /// subtree instead.
    ///
    /// Nothing is relinked until the last step has been awaited, so an
    /// abandoned delete leaves the tree as it was.
    pub async fn delete(&mut self, value: &T) -> bool {
        let mut target = value.clone();
        // Node that receives the successor's value once it is reached.
        let mut heir = None;
        let mut path = Vec::new();
        let mut curr = self.root;
        let (removed, replacement) = loop {
            let Some(i) = curr else {
                tracing::debug!("avl delete: not found");
                return false;
            };
            self.visit(i).await;
            let node = &self.arena[i];
            match target.cmp(&node.value) {
                std::cmp::Ordering::Less => {
                    path.push((i, Side::Left));
                    curr = node.left;
                }
                std::cmp::Ordering::Greater => {
                    path.push((i, Side::Right));
                    curr = node.right;
                }
                std::cmp::Ordering::Equal => match (node.left, node.right) {
                    (Some(_), Some(r)) if heir.is_none() => {
                        let succ = min_node(&self.arena, r);
                        target = self.arena[succ].value.clone();
                        heir = Some(i);
                        path.push((i, Side::Right));
                        curr = Some(r);
                    }
                    (l, r) => break (i, l.or(r)),
                },
            }
        };
        if let Some(h) = heir {
            self.arena[h].value = target;
        }
        self.arena.release(removed);
        self.size -= 1;

        let mut sub = replacement;
        while let Some((p, side)) = path.pop() {
            self.link(p, side, sub);
            sub = Some(rebalance_after_delete(&mut self.arena, p));
        }
        self.root = sub;
        true
    }

    pub async fn lookup(&mut self, value: &T) -> bool {
        let mut curr = self.root;
        while let Some(i) = curr {
            self.visit(i).await;
            let node = &self.arena[i];
            match value.cmp(&node.value) {
                std::cmp::Ordering::Less => curr = node.left,
                std::cmp::Ordering::Greater => curr = node.right,
                std::cmp::Ordering::Equal => {
                    emit(&mut self.hook, node.id, Phase::Found).await;
                    return true;
                }
            }
        }
        tracing::debug!("avl lookup: not found");
        false
    }

    async fn visit(&mut self, idx: u32) {
        emit(&mut self.hook, self.arena[idx].id, Phase::Visit).await;
    }
}

impl<T, H> AvlTree<T, H> {
    fn link(&mut self, parent: u32, side: Side, child: Option<u32>) {
        match side {
            Side::Left => self.arena[parent].left = child,
            Side::Right => self.arena[parent].right = child,
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn root(&self) -> Option<u32> {
        self.root
    }

    pub fn node(&self, idx: u32) -> &BinaryNode<T> {
        &self.arena[idx]
    }

    /// Height of the whole tree; `0` when empty.
    pub fn height(&self) -> u32 {
        util::height(&self.arena, self.root)
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.size = 0;
    }

    pub fn hook(&self) -> &H {
        &self.hook
    }

    pub fn hook_mut(&mut self) -> &mut H {
        &mut self.hook
    }

    pub fn into_hook(self) -> H {
        self.hook
    }
}

impl<T: Clone, H> AvlTree<T, H> {
    /// Values in ascending order.
    pub fn values(&self) -> Vec<T> {
        in_order(&self.arena, self.root)
    }
}

impl<T: Ord + Clone + Debug, H> AvlTree<T, H> {
    pub fn assert_valid(&self) -> Result<(), String> {
        check_order(&self.arena, self.root)?;
        check_heights(&self.arena, self.root)?;
        let n = in_order(&self.arena, self.root).len();
        if n != self.size {
            return Err(format!("size is {} but {} nodes are reachable", self.size, n));
        }
        Ok(())
    }
}

impl<T, H> BinaryShape for AvlTree<T, H> {
    type Value = T;

    fn root(&self) -> Option<u32> {
        self.root
    }

    fn left(&self, idx: u32) -> Option<u32> {
        self.arena[idx].left
    }

    fn right(&self, idx: u32) -> Option<u32> {
        self.arena[idx].right
    }

    fn id(&self, idx: u32) -> NodeId {
        self.arena[idx].id
    }

    fn value(&self, idx: u32) -> &T {
        &self.arena[idx].value
    }
}
