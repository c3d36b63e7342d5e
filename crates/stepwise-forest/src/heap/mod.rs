//! Array-backed binary max-heap.
//!
//! The array is the only source of truth. [`MaxHeap::view`] projects it onto
//! an explicit linked tree (children of `i` at `2i + 1` and `2i + 2`) for
//! layout and printing; that projection is rebuilt on demand and never
//! written back.

pub mod view;

pub use view::{build_tree_from_array, HeapView};

use std::fmt::Debug;

use crate::hook::{emit, NoopHook, StepHook};
use crate::node::BinaryNode;
use crate::types::{NodeFactory, Phase};

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}

pub struct MaxHeap<T, H = NoopHook> {
    items: Vec<BinaryNode<T>>,
    ids: NodeFactory,
    hook: H,
}

impl<T: Ord + Clone> MaxHeap<T, NoopHook> {
    pub fn new() -> Self {
        Self::with_hook(NoopHook)
    }
}

impl<T: Ord + Clone> Default for MaxHeap<T, NoopHook> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone, H: StepHook> MaxHeap<T, H> {
    pub fn with_hook(hook: H) -> Self {
        Self {
            items: Vec::new(),
            ids: NodeFactory::new(),
            hook,
        }
    }

    /// Appends `value` and sifts it up. Duplicates are kept.
    pub async fn insert(&mut self, value: T) {
        self.items.push(BinaryNode::new(value, self.ids.mint()));
        let last = self.items.len() - 1;
        self.visit(last).await;
        self.heapify_up(last).await;
    }

    /// Removes the first occurrence of `value` in storage order.
    pub async fn delete(&mut self, value: &T) -> bool {
        let Some(i) = self.items.iter().position(|n| n.value == *value) else {
            tracing::debug!("heap delete: not found");
            return false;
        };
        self.visit(i).await;
        let last = self.items.len() - 1;
        if i == last {
            self.items.pop();
            return true;
        }
        self.items.swap_remove(i);
        if i > 0 && self.items[i].value > self.items[parent(i)].value {
            self.heapify_up(i).await;
        } else {
            self.heapify_down(i).await;
        }
        true
    }

    /// Linear scan in storage order.
    pub async fn lookup(&mut self, value: &T) -> bool {
        for i in 0..self.items.len() {
            self.visit(i).await;
            if self.items[i].value == *value {
                emit(&mut self.hook, self.items[i].id, Phase::Found).await;
                return true;
            }
        }
        tracing::debug!("heap lookup: not found");
        false
    }

    async fn heapify_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = parent(i);
            self.visit(p).await;
            if self.items[i].value <= self.items[p].value {
                break;
            }
            self.items.swap(i, p);
            i = p;
        }
    }

    async fn heapify_down(&mut self, mut i: usize) {
        let n = self.items.len();
        loop {
            let mut largest = i;
            for c in [2 * i + 1, 2 * i + 2] {
                if c < n {
                    self.visit(c).await;
                    if self.items[c].value > self.items[largest].value {
                        largest = c;
                    }
                }
            }
            if largest == i {
                break;
            }
            self.items.swap(i, largest);
            i = largest;
        }
    }

    async fn visit(&mut self, i: usize) {
        emit(&mut self.hook, self.items[i].id, Phase::Visit).await;
    }
}

impl<T, H> MaxHeap<T, H> {
    pub fn peek(&self) -> Option<&T> {
        self.items.first().map(|n| &n.value)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Storage order.
    pub fn as_slice(&self) -> &[BinaryNode<T>] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
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

impl<T: Clone, H> MaxHeap<T, H> {
    pub fn view(&self) -> HeapView<T> {
        build_tree_from_array(&self.items)
    }
}

impl<T: Ord + Debug, H> MaxHeap<T, H> {
    pub fn assert_valid(&self) -> Result<(), String> {
        for i in 1..self.items.len() {
            let p = parent(i);
            if self.items[p].value < self.items[i].value {
                return Err(format!(
                    "heap order broken at {i}: {:?} under {:?}",
                    self.items[i].value, self.items[p].value
                ));
            }
        }
        Ok(())
    }
}
