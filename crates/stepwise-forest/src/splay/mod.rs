//! Recursive splay tree.
//!
//! `splay(node, key)` looks two levels ahead: it recurses into the
//! grandchild on the key's path, then performs a zig-zig or zig-zag on the
//! way back, finishing with a single rotation at `node`. Every access
//! (insert, lookup, delete) splays first, so the accessed key, or the last
//! node on its search path, ends up at the root.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;

use crate::hook::{emit, NoopHook, StepHook};
use crate::layout::BinaryShape;
use crate::node::{check_order, in_order, Arena, BinaryNode};
use crate::types::{NodeFactory, NodeId, Phase};

/// Promotes the left child of `n`.
///
/// ```text
///     n          l
///    /            \
///   l      →       n
///    \            /
///     b          b
/// ```
fn r_splay<T>(arena: &mut Arena<BinaryNode<T>>, n: u32) -> u32 {
    let Some(l) = arena[n].left else {
        return n;
    };
    arena[n].left = arena[l].right;
    arena[l].right = Some(n);
    l
}

/// Promotes the right child of `n`.
fn l_splay<T>(arena: &mut Arena<BinaryNode<T>>, n: u32) -> u32 {
    let Some(r) = arena[n].right else {
        return n;
    };
    arena[n].right = arena[r].left;
    arena[r].left = Some(n);
    r
}

type SplayFuture<'a> = Pin<Box<dyn Future<Output = Option<u32>> + 'a>>;

pub struct SplayTree<T, H = NoopHook> {
    arena: Arena<BinaryNode<T>>,
    root: Option<u32>,
    size: usize,
    ids: NodeFactory,
    hook: H,
}

impl<T: Ord + Clone> SplayTree<T, NoopHook> {
    pub fn new() -> Self {
        Self::with_hook(NoopHook)
    }
}

impl<T: Ord + Clone> Default for SplayTree<T, NoopHook> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone, H: StepHook> SplayTree<T, H> {
    pub fn with_hook(hook: H) -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            size: 0,
            ids: NodeFactory::new(),
            hook,
        }
    }

    /// Splays toward `value`, then makes a new node the root, handing it the
    /// old root's subtree on the far side. Returns `false` for a duplicate.
    pub async fn insert(&mut self, value: T) -> bool {
        let Some(root) = self.root else {
            let n = self.arena.alloc(BinaryNode::new(value, self.ids.mint()));
            self.root = Some(n);
            self.size = 1;
            self.visit(n).await;
            return true;
        };

        let r = self.splay(Some(root), &value).await.unwrap_or(root);
        self.root = Some(r);
        let n = match value.cmp(&self.arena[r].value) {
            Ordering::Equal => {
                tracing::debug!("splay insert: duplicate");
                return false;
            }
            Ordering::Less => {
                let mut node = BinaryNode::new(value, self.ids.mint());
                node.right = Some(r);
                node.left = self.arena[r].left.take();
                node
            }
            Ordering::Greater => {
                let mut node = BinaryNode::new(value, self.ids.mint());
                node.left = Some(r);
                node.right = self.arena[r].right.take();
                node
            }
        };
        let n = self.arena.alloc(n);
        self.root = Some(n);
        self.size += 1;
        self.visit(n).await;
        true
    }

    /// Splays toward `value`; found iff it ended up at the root.
    pub async fn lookup(&mut self, value: &T) -> bool {
        let Some(root) = self.root else {
            return false;
        };
        let r = self.splay(Some(root), value).await.unwrap_or(root);
        self.root = Some(r);
        if self.arena[r].value != *value {
            tracing::debug!("splay lookup: not found");
            return false;
        }
        emit(&mut self.hook, self.arena[r].id, Phase::Found).await;
        true
    }

    /// Splays `value` to the root and removes it. The left subtree is splayed
    /// toward `value` as well, which lifts its maximum to the top with a free
    /// right slot for the old right subtree.
    pub async fn delete(&mut self, value: &T) -> bool {
        let Some(root) = self.root else {
            return false;
        };
        let r = self.splay(Some(root), value).await.unwrap_or(root);
        self.root = Some(r);
        if self.arena[r].value != *value {
            tracing::debug!("splay delete: not found");
            return false;
        }
        emit(&mut self.hook, self.arena[r].id, Phase::Found).await;

        let right = self.arena[r].right;
        self.root = match self.arena[r].left {
            None => right,
            Some(l) => {
                let top = self.splay(Some(l), value).await.unwrap_or(l);
                self.arena[top].right = right;
                Some(top)
            }
        };
        self.arena.release(r);
        self.size -= 1;
        true
    }

    fn splay<'a>(&'a mut self, node: Option<u32>, key: &'a T) -> SplayFuture<'a>
    where
        T: 'a,
        H: 'a,
    {
        Box::pin(async move {
            let mut n = node?;
            self.visit(n).await;
            match key.cmp(&self.arena[n].value) {
                Ordering::Equal => Some(n),
                Ordering::Less => {
                    let Some(l) = self.arena[n].left else {
                        return Some(n);
                    };
                    match key.cmp(&self.arena[l].value) {
                        Ordering::Less => {
                            let ll = self.arena[l].left;
                            let ll = self.splay(ll, key).await;
                            self.arena[l].left = ll;
                            n = r_splay(&mut self.arena, n);
                        }
                        Ordering::Greater => {
                            let lr = self.arena[l].right;
                            let lr = self.splay(lr, key).await;
                            self.arena[l].right = lr;
                            if lr.is_some() {
                                let nl = l_splay(&mut self.arena, l);
                                self.arena[n].left = Some(nl);
                            }
                        }
                        Ordering::Equal => {}
                    }
                    if self.arena[n].left.is_none() {
                        Some(n)
                    } else {
                        Some(r_splay(&mut self.arena, n))
                    }
                }
                Ordering::Greater => {
                    let Some(r) = self.arena[n].right else {
                        return Some(n);
                    };
                    match key.cmp(&self.arena[r].value) {
                        Ordering::Greater => {
                            let rr = self.arena[r].right;
                            let rr = self.splay(rr, key).await;
                            self.arena[r].right = rr;
                            n = l_splay(&mut self.arena, n);
                        }
                        Ordering::Less => {
                            let rl = self.arena[r].left;
                            let rl = self.splay(rl, key).await;
                            self.arena[r].left = rl;
                            if rl.is_some() {
                                let nr = r_splay(&mut self.arena, r);
                                self.arena[n].right = Some(nr);
                            }
                        }
                        Ordering::Equal => {}
                    }
                    if self.arena[n].right.is_none() {
                        Some(n)
                    } else {
                        Some(l_splay(&mut self.arena, n))
                    }
                }
            }
        })
    }

    async fn visit(&mut self, idx: u32) {
        emit(&mut self.hook, self.arena[idx].id, Phase::Visit).await;
    }
}

impl<T, H> SplayTree<T, H> {
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

impl<T: Clone, H> SplayTree<T, H> {
    /// Values in ascending order.
    pub fn values(&self) -> Vec<T> {
        in_order(&self.arena, self.root)
    }

    /// Value at the root, i.e. the most recently accessed key.
    pub fn root_value(&self) -> Option<T> {
        self.root.map(|r| self.arena[r].value.clone())
    }
}

impl<T: Ord + Clone + Debug, H> SplayTree<T, H> {
    pub fn assert_valid(&self) -> Result<(), String> {
        check_order(&self.arena, self.root)?;
        let n = in_order(&self.arena, self.root).len();
        if n != self.size {
            return Err(format!("size is {} but {} nodes are reachable", self.size, n));
        }
        Ok(())
    }
}

impl<T, H> BinaryShape for SplayTree<T, H> {
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
