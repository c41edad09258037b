//! Serialize and reconstruct the prefix-code tree that heads every huff
//! stream.
//!
//! The encoding is a pre-order walk: a leaf is a `1` marker bit followed by
//! the symbol in 9 bits (9 rather than 8 because the end-of-stream value 256
//! needs the extra bit); an internal node is a `0` marker bit followed by its
//! left then right subtree. The shape is self-delimiting, so no length field
//! is needed.

use std::io::{Read, Write};

use crate::bitstream::{bitreader::BitReader, bitwriter::BitWriter};
use crate::error::HuffError;
use crate::huffman_coding::huffman::{Node, NodeData, SYMBOL_COUNT};

/// Width of a serialized leaf value.
const LEAF_BITS: u8 = 9;

/// A valid tree over 257 leaves never nests deeper than 256 internal nodes.
/// Anything past this is a malformed header, not a tree.
const MAX_DEPTH: u32 = 256;

/// Write the tree in pre-order: leaf = `1` + 9-bit value, internal = `0` +
/// left + right.
pub fn write_tree<W: Write>(node: &Node, bw: &mut BitWriter<W>) {
    match &node.data {
        NodeData::Leaf(sym) => {
            bw.out_bits(1, 1);
            bw.out_bits(*sym as u64, LEAF_BITS);
        }
        NodeData::Kids(left, right) => {
            bw.out_bits(0, 1);
            write_tree(left, bw);
            write_tree(right, bw);
        }
    }
}

/// Mirror of [`write_tree`]: rebuild the tree from the header bits. Weights
/// are irrelevant on the decode side and come back as zero.
pub fn read_tree<R: Read>(br: &mut BitReader<R>) -> Result<Node, HuffError> {
    read_node(br, 0)
}

fn read_node<R: Read>(br: &mut BitReader<R>, depth: u32) -> Result<Node, HuffError> {
    if depth > MAX_DEPTH {
        return Err(HuffError::InvalidHeader("tree nests deeper than 256 levels"));
    }
    match br.bool_bit() {
        None => Err(HuffError::TruncatedHeader),
        Some(true) => {
            let value = br.bits(LEAF_BITS).ok_or(HuffError::TruncatedHeader)? as u16;
            if value as usize >= SYMBOL_COUNT {
                return Err(HuffError::InvalidHeader("leaf value out of range"));
            }
            Ok(Node::new(0, 0, NodeData::Leaf(value)))
        }
        Some(false) => {
            let left = read_node(br, depth + 1)?;
            let right = read_node(br, depth + 1)?;
            Ok(Node::new(
                0,
                0,
                NodeData::Kids(Box::new(left), Box::new(right)),
            ))
        }
    }
}
