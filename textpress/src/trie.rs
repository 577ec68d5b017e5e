//! Prefix dictionary: a ternary search trie over byte sequences.
//!
//! The compress pass needs one query the expand side never does: "what is
//! the longest registered sequence starting at this input position". A
//! ternary trie answers it in a single walk over the input, with no
//! per-step allocation and predictable worst-case behavior on adversarial
//! data (unlike hashing every candidate prefix).
//!
//! Nodes live in a flat arena and link by index, so the structure is a
//! single `Vec` regardless of shape.

/// Sentinel for an absent child link.
const NIL: u32 = u32::MAX;

#[derive(Debug)]
struct Node {
    sym: u8,
    lo: u32,
    eq: u32,
    hi: u32,
    code: Option<u16>,
}

/// Ternary search trie mapping byte sequences to codes.
#[derive(Debug)]
pub struct PrefixTrie {
    nodes: Vec<Node>,
    root: u32,
}

impl PrefixTrie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: NIL,
        }
    }

    /// Create a trie seeded with the single-symbol entries `0..radix`, each
    /// mapped to its own ordinal value.
    ///
    /// Symbols are inserted midpoint-first so the root's sibling chain forms
    /// a balanced BST rather than a 256-deep spine.
    pub fn with_alphabet(radix: u16) -> Self {
        debug_assert!((1..=256).contains(&radix));
        let mut trie = Self {
            nodes: Vec::with_capacity(radix as usize),
            root: NIL,
        };
        trie.seed(0, radix - 1);
        trie
    }

    fn seed(&mut self, lo: u16, hi: u16) {
        let mid = lo + (hi - lo) / 2;
        self.insert(&[mid as u8], mid);
        if mid > lo {
            self.seed(lo, mid - 1);
        }
        if mid < hi {
            self.seed(mid + 1, hi);
        }
    }

    fn alloc(&mut self, sym: u8) -> u32 {
        self.nodes.push(Node {
            sym,
            lo: NIL,
            eq: NIL,
            hi: NIL,
            code: None,
        });
        (self.nodes.len() - 1) as u32
    }

    /// Register `key` with the given code.
    ///
    /// The caller guarantees `key` is non-empty and not already present;
    /// the single pass never re-inserts a sequence.
    pub fn insert(&mut self, key: &[u8], code: u16) {
        debug_assert!(!key.is_empty());

        if self.root == NIL {
            self.root = self.alloc(key[0]);
        }

        let mut node = self.root as usize;
        let mut i = 0;
        loop {
            let sym = key[i];
            if sym < self.nodes[node].sym {
                if self.nodes[node].lo == NIL {
                    let child = self.alloc(sym);
                    self.nodes[node].lo = child;
                }
                node = self.nodes[node].lo as usize;
            } else if sym > self.nodes[node].sym {
                if self.nodes[node].hi == NIL {
                    let child = self.alloc(sym);
                    self.nodes[node].hi = child;
                }
                node = self.nodes[node].hi as usize;
            } else {
                i += 1;
                if i == key.len() {
                    debug_assert!(self.nodes[node].code.is_none());
                    self.nodes[node].code = Some(code);
                    return;
                }
                if self.nodes[node].eq == NIL {
                    let child = self.alloc(key[i]);
                    self.nodes[node].eq = child;
                }
                node = self.nodes[node].eq as usize;
            }
        }
    }

    /// Length of the longest registered sequence matching `text` at
    /// `start`. Returns 0 when not even a single symbol matches.
    pub fn longest_prefix(&self, text: &[u8], start: usize) -> usize {
        let mut best = 0;
        let mut node = self.root;
        let mut i = start;

        while node != NIL && i < text.len() {
            let n = &self.nodes[node as usize];
            let sym = text[i];
            if sym < n.sym {
                node = n.lo;
            } else if sym > n.sym {
                node = n.hi;
            } else {
                i += 1;
                if n.code.is_some() {
                    best = i - start;
                }
                node = n.eq;
            }
        }
        best
    }

    /// Exact-key lookup.
    pub fn lookup(&self, key: &[u8]) -> Option<u16> {
        let mut node = self.root;
        let mut i = 0;

        while node != NIL {
            let n = &self.nodes[node as usize];
            let sym = *key.get(i)?;
            if sym < n.sym {
                node = n.lo;
            } else if sym > n.sym {
                node = n.hi;
            } else {
                i += 1;
                if i == key.len() {
                    return n.code;
                }
                node = n.eq;
            }
        }
        None
    }

    /// Number of allocated trie nodes (not registered keys).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for PrefixTrie {
    fn default() -> Self {
        Self::new()
    }
}
