use crate::types::NodeId;

/// Character stored in the root sentinel.
pub const ROOT_CHAR: char = '*';

/// One node of the 26-way trie. Slot `i` holds the child for letter
/// `'a' + i`.
#[derive(Clone, Debug)]
pub struct TrieNode {
    pub children: [Option<u32>; 26],
    /// End-of-word marker.
    pub is_leaf: bool,
    pub ch: char,
    pub id: NodeId,
}

impl TrieNode {
    pub fn new(ch: char, id: NodeId) -> Self {
        Self {
            children: [None; 26],
            is_leaf: false,
            ch,
            id,
        }
    }

    pub fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    /// Occupied slots in a→z order.
    pub fn child_slots(&self) -> impl Iterator<Item = u32> + '_ {
        self.children.iter().filter_map(|c| *c)
    }
}
