//! Character trie over normalized location names.
//!
//! Keys are normalized with [`normalize_name`] (ASCII letters and spaces,
//! lower-cased).  Each terminal node keeps the set of *original* display
//! names that normalize to its key, so `"Top Dog"` and `"top-dog"` both come
//! back from a query for `"top"`.
//!
//! Nodes live in a `Vec` arena and refer to their children by index.  Both
//! insertion and collection are iterative.

use std::collections::{BTreeMap, BTreeSet};

/// Keep ASCII letters and spaces, lower-cased.  Everything else is dropped.
///
/// ```
/// assert_eq!(map_search::normalize_name("Café Strada #2"), "caf strada ");
/// ```
pub fn normalize_name(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[derive(Clone, Debug, Default)]
struct TrieNode {
    children: BTreeMap<char, u32>,
    /// Original names whose key ends here.  Non-empty means terminal.
    names: BTreeSet<String>,
}

/// Prefix index from normalized keys to original names.
#[derive(Clone, Debug)]
pub struct PrefixIndex {
    /// `nodes[0]` is the root (empty key).
    nodes: Vec<TrieNode>,
    entries: usize,
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixIndex {
    const ROOT: u32 = 0;

    pub fn new() -> Self {
        Self { nodes: vec![TrieNode::default()], entries: 0 }
    }

    /// Number of stored `(key, name)` entries.
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Store `original` under an already-normalized `key`.
    ///
    /// Adding the same pair twice is a no-op.
    pub fn add(&mut self, key: &str, original: &str) {
        let mut cur = Self::ROOT;
        for ch in key.chars() {
            let next = self.nodes.len() as u32;
            cur = match self.nodes[cur as usize].children.get(&ch) {
                Some(&child) => child,
                None => {
                    self.nodes.push(TrieNode::default());
                    self.nodes[cur as usize].children.insert(ch, next);
                    next
                }
            };
        }
        if self.nodes[cur as usize].names.insert(original.to_string()) {
            self.entries += 1;
        }
    }

    /// Normalize `original` and store it under the result.
    pub fn insert(&mut self, original: &str) {
        self.add(&normalize_name(original), original);
    }

    fn find(&self, key: &str) -> Option<u32> {
        let mut cur = Self::ROOT;
        for ch in key.chars() {
            cur = *self.nodes[cur as usize].children.get(&ch)?;
        }
        Some(cur)
    }

    /// Every original name whose key starts with `normalize_name(prefix)`,
    /// sorted and without duplicates.  The empty prefix returns everything.
    pub fn query(&self, prefix: &str) -> Vec<String> {
        let Some(start) = self.find(&normalize_name(prefix)) else {
            return Vec::new();
        };

        let mut found: BTreeSet<&str> = BTreeSet::new();
        let mut stack = vec![start];
        while let Some(idx) = stack.pop() {
            let node = &self.nodes[idx as usize];
            found.extend(node.names.iter().map(String::as_str));
            stack.extend(node.children.values().copied());
        }
        found.into_iter().map(str::to_string).collect()
    }
}
