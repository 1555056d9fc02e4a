//! Huffman table construction and decoding.
//!
//! The camera reuses a single pair of Huffman tables — the luminance DC
//! and AC tables from ISO/IEC 10918-1 Annex K (Table K.3 and K.5) — for
//! every component, including chroma. That is a deliberate deviation
//! from the standard (see spec Section 3 and Section 9's "Open
//! questions"); we don't "fix" it.
//!
//! Per spec Section 9's design note, the tree is an arena of nodes
//! addressed by index rather than a graph of boxed/Rc nodes: depth is
//! bounded at 16 so the arena never grows past a few hundred entries per
//! table, and freeing it is just dropping the `Vec`.
use crate::bitstream::{BitSource, ByteSource};
use crate::errors::DecodeError;

#[derive(Default, Clone, Copy)]
struct HuffNode
{
    zero:  Option<u32>,
    one:   Option<u32>,
    value: Option<u8>,
}

/// A canonical Huffman code tree built from a 16-length-count + symbol
/// table (spec Section 3 "HuffmanTable (input form)").
pub(crate) struct HuffmanTree
{
    nodes: Vec<HuffNode>,
}

impl HuffmanTree
{
    /// Builds a tree from `counts[l-1]` codes of length `l`, with symbols
    /// taken off the front of `values` in canonical order.
    ///
    /// # Errors
    /// Returns [`DecodeError::HuffmanTable`] if no slot is available for
    /// a symbol (a malformed table) — this can't happen for the built-in
    /// Annex K tables, but is retained for any future-supplied table per
    /// spec Section 4.2.
    pub(crate) fn build(counts: &[u8; 16], values: &[u8]) -> Result<Self, DecodeError>
    {
        let mut nodes = vec![HuffNode::default()];
        let mut consumed = 0usize;

        for length in 1..=16u8
        {
            let count = counts[usize::from(length) - 1];
            for _ in 0..count
            {
                let value = *values.get(consumed).ok_or_else(|| {
                    DecodeError::HuffmanTable(format!(
                        "table declares {} codes but only {} symbols were supplied",
                        counts.iter().map(|&c| usize::from(c)).sum::<usize>(),
                        values.len()
                    ))
                })?;
                consumed += 1;

                if !Self::allocate(&mut nodes, 0, length, value)
                {
                    return Err(DecodeError::HuffmanTable(format!(
                        "no slot available for symbol {value:#04x} at depth {length}"
                    )));
                }
            }
        }

        Ok(HuffmanTree { nodes })
    }

    /// Depth-first, left-preferring search for the shallowest unassigned
    /// slot exactly `depth` edges from `idx`, lazily allocating children
    /// as it descends. Mirrors `huffman_allocate` from the camera's
    /// original `huffman.c`.
    fn allocate(nodes: &mut Vec<HuffNode>, idx: usize, depth: u8, value: u8) -> bool
    {
        let (zero_idx, one_idx) = Self::ensure_children(nodes, idx);

        if depth > 0
        {
            if nodes[idx].value.is_some()
            {
                return false;
            }
            if Self::allocate(nodes, zero_idx, depth - 1, value)
            {
                return true;
            }
            Self::allocate(nodes, one_idx, depth - 1, value)
        }
        else if nodes[idx].value.is_none()
        {
            nodes[idx].value = Some(value);
            true
        }
        else
        {
            false
        }
    }

    fn ensure_children(nodes: &mut Vec<HuffNode>, idx: usize) -> (usize, usize)
    {
        if nodes[idx].zero.is_none()
        {
            nodes.push(HuffNode::default());
            nodes[idx].zero = Some(u32::try_from(nodes.len() - 1).unwrap());
        }
        if nodes[idx].one.is_none()
        {
            nodes.push(HuffNode::default());
            nodes[idx].one = Some(u32::try_from(nodes.len() - 1).unwrap());
        }
        (
            nodes[idx].zero.unwrap() as usize,
            nodes[idx].one.unwrap() as usize,
        )
    }

    /// Walks the tree one bit at a time until a leaf is reached.
    ///
    /// Returns `Ok(None)` if the bitstream ended before a leaf was
    /// found — the caller decides whether that's a normal end-of-image
    /// or a fatal mid-block error (spec Section 4.3). Returns
    /// `Err(DecodeError::Internal)` if a bit would descend into a child
    /// that was never allocated during construction, which only happens
    /// against a corrupt or non-Huffman-aligned bitstream.
    pub(crate) fn decode<S: ByteSource>(
        &self, bits: &mut BitSource<S>,
    ) -> Result<Option<u8>, DecodeError>
    {
        let mut idx = 0usize;
        loop
        {
            let Some(bit) = bits.next_bit()
            else
            {
                return Ok(None);
            };

            let node = &self.nodes[idx];
            let child = if bit == 0 { node.zero } else { node.one };
            let child_idx = child
                .ok_or(DecodeError::Internal(
                    "Huffman decode descended into an unallocated child",
                ))?
                as usize;

            if let Some(value) = self.nodes[child_idx].value
            {
                return Ok(Some(value));
            }
            idx = child_idx;
        }
    }
}

/// The embedded ISO/IEC 10918-1 Annex K luminance DC table (Table K.3).
///
/// Reused for every component's DC decoding — see the module doc.
pub(crate) const ANNEX_K_DC_COUNTS: [u8; 16] =
    [0x00, 0x01, 0x05, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];

pub(crate) const ANNEX_K_DC_VALUES: [u8; 12] =
    [0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b];

/// The embedded ISO/IEC 10918-1 Annex K luminance AC table (Table K.5).
///
/// Reused for every component's AC decoding — see the module doc.
pub(crate) const ANNEX_K_AC_COUNTS: [u8; 16] =
    [0x00, 0x02, 0x01, 0x03, 0x03, 0x02, 0x04, 0x03, 0x05, 0x05, 0x04, 0x04, 0x00, 0x00, 0x01, 0x7d];

#[rustfmt::skip]
pub(crate) const ANNEX_K_AC_VALUES: [u8; 162] = [
    0x01, 0x02, 0x03, 0x00, 0x04, 0x11, 0x05, 0x12, 0x21, 0x31, 0x41, 0x06, 0x13, 0x51, 0x61, 0x07,
    0x22, 0x71, 0x14, 0x32, 0x81, 0x91, 0xa1, 0x08, 0x23, 0x42, 0xb1, 0xc1, 0x15, 0x52, 0xd1, 0xf0,
    0x24, 0x33, 0x62, 0x72, 0x82, 0x09, 0x0a, 0x16, 0x17, 0x18, 0x19, 0x1a, 0x25, 0x26, 0x27, 0x28,
    0x29, 0x2a, 0x34, 0x35, 0x36, 0x37, 0x38, 0x39, 0x3a, 0x43, 0x44, 0x45, 0x46, 0x47, 0x48, 0x49,
    0x4a, 0x53, 0x54, 0x55, 0x56, 0x57, 0x58, 0x59, 0x5a, 0x63, 0x64, 0x65, 0x66, 0x67, 0x68, 0x69,
    0x6a, 0x73, 0x74, 0x75, 0x76, 0x77, 0x78, 0x79, 0x7a, 0x83, 0x84, 0x85, 0x86, 0x87, 0x88, 0x89,
    0x8a, 0x92, 0x93, 0x94, 0x95, 0x96, 0x97, 0x98, 0x99, 0x9a, 0xa2, 0xa3, 0xa4, 0xa5, 0xa6, 0xa7,
    0xa8, 0xa9, 0xaa, 0xb2, 0xb3, 0xb4, 0xb5, 0xb6, 0xb7, 0xb8, 0xb9, 0xba, 0xc2, 0xc3, 0xc4, 0xc5,
    0xc6, 0xc7, 0xc8, 0xc9, 0xca, 0xd2, 0xd3, 0xd4, 0xd5, 0xd6, 0xd7, 0xd8, 0xd9, 0xda, 0xe1, 0xe2,
    0xe3, 0xe4, 0xe5, 0xe6, 0xe7, 0xe8, 0xe9, 0xea, 0xf1, 0xf2, 0xf3, 0xf4, 0xf5, 0xf6, 0xf7, 0xf8,
    0xf9, 0xfa,
];
