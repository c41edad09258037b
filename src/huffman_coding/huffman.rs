//! Build an optimal prefix-code tree from a frequency table and derive the
//! per-symbol bit codes from it.
//!
//! The tree is the classic Huffman construction: every symbol with a nonzero
//! count starts as a leaf in a min-priority queue; the two lightest nodes are
//! merged under a new internal node until a single root remains. Codes fall
//! out of the tree shape (left edge = 0, right edge = 1), so no code is a
//! prefix of another.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::debug;
use rustc_hash::FxHashMap;

/// The end-of-stream marker symbol. It sits just past the 256 literal byte
/// values, never occurs in real data, and always carries a count of 1 so it
/// always earns a code.
pub const PSEUDO_EOF: u16 = 256;

/// 256 literal byte values plus the end-of-stream marker.
pub const SYMBOL_COUNT: usize = 257;

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    /// An internal node owning exactly two children.
    Kids(Box<Node>, Box<Node>),
    /// A terminal node carrying a symbol (0-255 literal, 256 end-of-stream).
    Leaf(u16),
}

/// One node of the prefix-code tree. The root exclusively owns its children,
/// so the whole tree drops with it.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    /// Aggregate frequency of every leaf below (and including) this node.
    pub weight: u32,
    /// Creation sequence number, used only to break ties between equal
    /// weights. Leaves take their symbol value; merged nodes count up from
    /// [`SYMBOL_COUNT`].
    pub seq: u16,
    pub data: NodeData,
}

impl Node {
    /// Create a new node
    pub fn new(weight: u32, seq: u16, data: NodeData) -> Node {
        Node { weight, seq, data }
    }

    /// Count the leaves at or below this node.
    pub fn leaves(&self) -> usize {
        match &self.data {
            NodeData::Leaf(_) => 1,
            NodeData::Kids(left, right) => left.leaves() + right.leaves(),
        }
    }
}

impl Ord for Node {
    /// BinaryHeap is a max-heap, so the ordering is reversed: the lightest
    /// node pops first, and equal weights pop in creation order. This fixed
    /// tie-break makes the compressed output byte-reproducible.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One symbol's bit code: the root-to-leaf path packed into the low `len`
/// bits of `bits`, first edge in the most significant position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code {
    pub bits: u64,
    pub len: u8,
}

/// Build the prefix-code tree for a frequency table. The end-of-stream
/// symbol is pre-seeded in the table, so there is always at least one leaf.
/// When that is the *only* leaf (empty input) the root is that bare leaf.
pub fn build_tree(freqs: &[u32; SYMBOL_COUNT]) -> Node {
    let mut queue: BinaryHeap<Node> = BinaryHeap::with_capacity(SYMBOL_COUNT);
    for (sym, &count) in freqs.iter().enumerate() {
        if count > 0 {
            queue.push(Node::new(count, sym as u16, NodeData::Leaf(sym as u16)));
        }
    }
    debug!("priority queue seeded with {} leaves", queue.len());

    // Merge the two lightest nodes until one root remains. The first node
    // popped becomes the left child.
    let mut seq = SYMBOL_COUNT as u16;
    while queue.len() > 1 {
        let left = queue.pop().unwrap();
        let right = queue.pop().unwrap();
        queue.push(Node::new(
            left.weight + right.weight,
            seq,
            NodeData::Kids(Box::new(left), Box::new(right)),
        ));
        seq += 1;
    }
    queue
        .pop()
        .expect("frequency table must seed at least the end-of-stream symbol")
}

/// Derive the code table from a tree: one entry per leaf, keyed by symbol.
pub fn code_table(root: &Node) -> FxHashMap<u16, Code> {
    let mut codes = FxHashMap::default();
    walk(root, 0, 0, &mut codes);
    codes
}

/// Depth-first walk collecting the path to each leaf. Left = 0, right = 1.
/// Depth is bounded by the leaf count (at most 256 levels), so recursion is
/// safe here.
fn walk(node: &Node, bits: u64, len: u8, codes: &mut FxHashMap<u16, Code>) {
    match &node.data {
        NodeData::Leaf(sym) => {
            codes.insert(*sym, Code { bits, len });
        }
        NodeData::Kids(left, right) => {
            walk(left, bits << 1, len + 1, codes);
            walk(right, (bits << 1) | 1, len + 1, codes);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tools::freq_count::freqs;

    #[test]
    fn single_symbol_makes_two_leaf_tree() {
        let table = freqs(&[0x41; 1000]);
        let root = build_tree(&table);
        assert_eq!(root.leaves(), 2);
        assert_eq!(root.weight, 1001);

        // Both codes are a single bit. The end-of-stream leaf is lighter so
        // it pops first and lands on the left (code 0).
        let codes = code_table(&root);
        assert_eq!(codes[&PSEUDO_EOF], Code { bits: 0, len: 1 });
        assert_eq!(codes[&0x41], Code { bits: 1, len: 1 });
    }

    #[test]
    fn eof_only_tree_is_bare_leaf() {
        let table = freqs(&[]);
        let root = build_tree(&table);
        assert_eq!(root.data, NodeData::Leaf(PSEUDO_EOF));

        // A bare leaf is reached by the empty path
        let codes = code_table(&root);
        assert_eq!(codes[&PSEUDO_EOF], Code { bits: 0, len: 0 });
    }

    #[test]
    fn frequent_symbols_get_shorter_codes() {
        let mut data = vec![b'a'; 1000];
        data.extend_from_slice(&[b'b'; 100]);
        data.extend_from_slice(&[b'c'; 10]);
        data.push(b'd');
        let root = build_tree(&freqs(&data));
        let codes = code_table(&root);
        assert!(codes[&(b'a' as u16)].len < codes[&(b'c' as u16)].len);
        assert!(codes[&(b'b' as u16)].len <= codes[&(b'c' as u16)].len);
        assert!(codes[&(b'c' as u16)].len <= codes[&(b'd' as u16)].len);
    }

    #[test]
    fn every_nonzero_symbol_gets_exactly_one_code() {
        let data = b"abracadabra".as_slice();
        let table = freqs(data);
        let codes = code_table(&build_tree(&table));
        let nonzero = table.iter().filter(|&&c| c > 0).count();
        assert_eq!(codes.len(), nonzero); // a, b, r, c, d + end-of-stream
        assert_eq!(codes.len(), 6);
    }

    #[test]
    fn codes_are_prefix_free() {
        let data = b"the quick brown fox jumps over the lazy dog".as_slice();
        let codes = code_table(&build_tree(&freqs(data)));
        let paths: Vec<(u64, u8)> = codes.values().map(|c| (c.bits, c.len)).collect();
        for (i, &(a_bits, a_len)) in paths.iter().enumerate() {
            for &(b_bits, b_len) in &paths[i + 1..] {
                let short = a_len.min(b_len);
                assert_ne!(
                    a_bits >> (a_len - short),
                    b_bits >> (b_len - short),
                    "one code is a prefix of another"
                );
            }
        }
    }

    #[test]
    fn tie_break_is_deterministic() {
        // Four symbols with identical counts. Two builds must agree exactly.
        let data = b"aabbccdd".as_slice();
        let first = build_tree(&freqs(data));
        let second = build_tree(&freqs(data));
        assert_eq!(first, second);
        assert_eq!(code_table(&first), code_table(&second));
    }

    #[test]
    fn weighted_path_length_is_optimal() {
        // freqs: a=5 b=2 c=1 eof=1. An optimal tree costs
        // 5*1 + 2*2 + 1*3 + 1*3 = 15 bits.
        let data = b"aaaaabbc".as_slice();
        let codes = code_table(&build_tree(&freqs(data)));
        let table = freqs(data);
        let cost: u32 = codes
            .iter()
            .map(|(sym, code)| table[*sym as usize] * code.len as u32)
            .sum();
        assert_eq!(cost, 15);
    }
}
