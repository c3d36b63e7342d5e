//! Trie, AVL tree, max-heap and splay tree for step-by-step visualization.
//!
//! Each engine exposes `async` operations that suspend at every algorithmic
//! step (a node visit, or reaching the target) by awaiting an injected
//! [`StepHook`]. A renderer implements the hook to highlight the node and
//! decide how long to pause; the engine resumes when the hook's future
//! resolves. Between operations the structure can be handed to
//! [`layout_binary`] or [`layout_trie`] to obtain node coordinates.
//!
//! Nodes live in `Vec`-backed arenas and link to each other through
//! `Option<u32>` slot indices; every node also carries a [`NodeId`] that a
//! renderer can use as a stable key.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`trie`] | 26-way [`Trie`] with prefix search |
//! | [`avl`] | [`AvlTree`] with height-based rebalancing |
//! | [`heap`] | array-backed [`MaxHeap`] and its [`HeapView`] projection |
//! | [`splay`] | recursive [`SplayTree`] |
//! | [`layout`] | coordinate assignment and [`LayoutConfig`] |
//! | [`hook`] | [`StepHook`], [`NoopHook`], [`StepLog`] |
//! | [`session`] | [`Session`] reentrancy guard |
//! | [`print`] | text dumps |

pub mod avl;
pub mod error;
pub mod heap;
pub mod hook;
pub mod input;
pub mod layout;
pub mod node;
pub mod print;
pub mod session;
pub mod splay;
pub mod trie;
pub mod types;

pub use avl::AvlTree;
pub use error::{Error, Result};
pub use heap::{build_tree_from_array, HeapView, MaxHeap};
pub use hook::{NoopHook, StepHook, StepLog};
pub use input::{normalize_key, parse_value};
pub use layout::{layout_binary, layout_trie, BinaryShape, Layout, LayoutConfig, Placement};
pub use node::{Arena, BinaryNode};
pub use print::{print_binary, print_tree, PrintChild};
pub use session::Session;
pub use splay::SplayTree;
pub use trie::{Trie, TrieNode};
pub use types::{NodeFactory, NodeId, Phase, Step};
