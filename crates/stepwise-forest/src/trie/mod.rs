//! 26-way character trie keyed by lowercase words.

pub mod trie_node;

pub use trie_node::{TrieNode, ROOT_CHAR};

use crate::error::Result;
use crate::hook::{emit, NoopHook, StepHook};
use crate::input::{normalize_key, slot};
use crate::node::Arena;
use crate::print::{print_tree, PrintChild};
use crate::types::{NodeFactory, Phase};

pub struct Trie<H = NoopHook> {
    nodes: Arena<TrieNode>,
    root: u32,
    words: usize,
    ids: NodeFactory,
    hook: H,
}

impl Trie<NoopHook> {
    pub fn new() -> Self {
        Self::with_hook(NoopHook)
    }
}

impl Default for Trie<NoopHook> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: StepHook> Trie<H> {
    pub fn with_hook(hook: H) -> Self {
        let mut ids = NodeFactory::new();
        let mut nodes = Arena::new();
        let root = nodes.alloc(TrieNode::new(ROOT_CHAR, ids.mint()));
        Self {
            nodes,
            root,
            words: 0,
            ids,
            hook,
        }
    }

    /// Adds `key`. Returns `Ok(false)` if it was already a word.
    pub async fn insert(&mut self, key: &str) -> Result<bool> {
        let key = normalize_key(key)?;
        let mut curr = self.root;
        self.visit(curr).await;
        for b in key.bytes() {
            let s = slot(b);
            let next = match self.nodes[curr].children[s] {
                Some(child) => child,
                None => {
                    let child = self.nodes.alloc(TrieNode::new(b as char, self.ids.mint()));
                    self.nodes[curr].children[s] = Some(child);
                    self.visit(child).await;
                    child
                }
            };
            curr = next;
            self.visit(curr).await;
        }
        if self.nodes[curr].is_leaf {
            tracing::debug!(key = %key, "trie insert: duplicate");
            return Ok(false);
        }
        self.nodes[curr].is_leaf = true;
        self.words += 1;
        emit(&mut self.hook, self.nodes[curr].id, Phase::Found).await;
        Ok(true)
    }

    /// `true` only when the whole path exists and ends on a word.
    pub async fn lookup(&mut self, key: &str) -> Result<bool> {
        let key = normalize_key(key)?;
        let mut curr = self.root;
        self.visit(curr).await;
        for b in key.bytes() {
            let Some(child) = self.nodes[curr].children[slot(b)] else {
                tracing::debug!(key = %key, "trie lookup: path ends early");
                return Ok(false);
            };
            curr = child;
            self.visit(curr).await;
        }
        if !self.nodes[curr].is_leaf {
            tracing::debug!(key = %key, "trie lookup: prefix only");
            return Ok(false);
        }
        emit(&mut self.hook, self.nodes[curr].id, Phase::Found).await;
        Ok(true)
    }

    /// Removes `key`, pruning nodes that no longer lead to any word. The
    /// root is never pruned.
    pub async fn delete(&mut self, key: &str) -> Result<bool> {
        let key = normalize_key(key)?;
        // (parent, slot) pairs from the root down to the terminal node.
        let mut path: Vec<(u32, usize)> = Vec::with_capacity(key.len());
        let mut curr = self.root;
        self.visit(curr).await;
        for b in key.bytes() {
            let s = slot(b);
            let Some(child) = self.nodes[curr].children[s] else {
                tracing::debug!(key = %key, "trie delete: not found");
                return Ok(false);
            };
            path.push((curr, s));
            curr = child;
            self.visit(curr).await;
        }
        if !self.nodes[curr].is_leaf {
            tracing::debug!(key = %key, "trie delete: not a word");
            return Ok(false);
        }
        self.nodes[curr].is_leaf = false;
        self.words -= 1;

        let mut prune = !self.nodes[curr].has_children();
        let mut child = curr;
        while let Some((parent, s)) = path.pop() {
            if !prune {
                break;
            }
            self.nodes[parent].children[s] = None;
            self.nodes.release(child);
            let p = &self.nodes[parent];
            prune = parent != self.root && !p.is_leaf && !p.has_children();
            child = parent;
        }
        Ok(true)
    }

    async fn visit(&mut self, idx: u32) {
        emit(&mut self.hook, self.nodes[idx].id, Phase::Visit).await;
    }
}

impl<H> Trie<H> {
    /// Every word starting with `prefix`, depth-first in a→z slot order.
    pub fn find_words(&self, prefix: &str) -> Vec<String> {
        self.find_words_limited(prefix, usize::MAX)
    }

    /// Like [`Trie::find_words`], stopping after `limit` words.
    pub fn find_words_limited(&self, prefix: &str, limit: usize) -> Vec<String> {
        let prefix = prefix.to_lowercase();
        let mut out = Vec::new();
        let mut curr = self.root;
        for b in prefix.bytes() {
            if !b.is_ascii_lowercase() {
                return out;
            }
            match self.nodes[curr].children[slot(b)] {
                Some(child) => curr = child,
                None => return out,
            }
        }
        let mut buf = prefix;
        self.collect(curr, &mut buf, &mut out, limit);
        out
    }

    fn collect(&self, idx: u32, buf: &mut String, out: &mut Vec<String>, limit: usize) {
        if out.len() >= limit {
            return;
        }
        let node = &self.nodes[idx];
        if node.is_leaf {
            out.push(buf.clone());
        }
        for child in node.child_slots() {
            buf.push(self.nodes[child].ch);
            self.collect(child, buf, out, limit);
            buf.pop();
        }
    }

    /// All stored words in lexicographic order.
    pub fn words(&self) -> Vec<String> {
        self.find_words("")
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    pub fn root(&self) -> u32 {
        self.root
    }

    pub fn node(&self, idx: u32) -> &TrieNode {
        &self.nodes[idx]
    }

    pub fn children(&self, idx: u32) -> impl Iterator<Item = u32> + '_ {
        self.nodes[idx].child_slots()
    }

    /// Number of nodes reachable from the root, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.live()
    }

    /// Layout leaves (nodes without children) under `idx`, counting `idx`
    /// itself when it has none.
    pub fn subtree_leaves(&self, idx: u32) -> usize {
        let node = &self.nodes[idx];
        if !node.has_children() {
            return 1;
        }
        node.child_slots().map(|c| self.subtree_leaves(c)).sum()
    }

    /// Drops every word, keeping the root sentinel and its identity.
    pub fn clear(&mut self) {
        let root = self.nodes[self.root].clone();
        self.nodes.clear();
        self.root = self.nodes.alloc(TrieNode::new(root.ch, root.id));
        self.words = 0;
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

    /// Text dump, one node per line; end-of-word nodes are marked with `$`.
    pub fn print(&self) -> String {
        self.print_node(self.root, "")
    }

    fn print_node(&self, idx: u32, tab: &str) -> String {
        let node = &self.nodes[idx];
        let mut out = node.ch.to_string();
        if node.is_leaf {
            out.push('$');
        }
        let children: Vec<Box<PrintChild<'_>>> = node
            .child_slots()
            .map(|c| Box::new(move |tab: &str| self.print_node(c, tab)) as Box<PrintChild<'_>>)
            .collect();
        let refs: Vec<Option<&PrintChild<'_>>> = children.iter().map(|f| Some(f.as_ref())).collect();
        out.push_str(&print_tree(tab, &refs));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn delete_keeps_shared_prefix() {
        let mut trie = Trie::new();
        block_on(async {
            trie.insert("car").await.unwrap();
            trie.insert("cart").await.unwrap();
            assert!(trie.delete("cart").await.unwrap());
        });
        // root, c, a, r
        assert_eq!(trie.node_count(), 4);
        assert_eq!(trie.words(), vec!["car"]);
    }

    #[test]
    fn subtree_leaves_counts_childless_nodes() {
        let mut trie = Trie::new();
        block_on(async {
            for w in ["ab", "ac", "b"] {
                trie.insert(w).await.unwrap();
            }
        });
        assert_eq!(trie.subtree_leaves(trie.root()), 3);
        let a = trie.children(trie.root()).next().unwrap();
        assert_eq!(trie.subtree_leaves(a), 2);
    }
}
