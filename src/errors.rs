//! Error types returned by the decoder.
//!
//! Mirrors the shape of the teacher's error enum: a mix of owned-string
//! variants for messages built at the error site and a static-string
//! variant for the hot paths that can't afford an allocation.
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

/// All the ways decoding a picture can fail.
///
/// See spec Section 7 for the error kinds and their propagation policy.
/// Every variant here is fatal to the current decode; none are
/// recoverable mid-image. Normal end-of-image is *not* an error — it is
/// represented by the entropy decoder simply stopping, see
/// [`crate::entropy::EntropyDecoder`].
pub enum DecodeError
{
    /// No slot was available for a symbol while building a
    /// [`crate::huffman::HuffmanTree`] (malformed table).
    HuffmanTable(String),
    /// The bitstream ended before a Huffman symbol could be resolved
    /// mid-block, or before a magnitude could be fully read.
    UnexpectedEof(&'static str),
    /// An AC run (`zeroes` advance, possibly repeated via ZRL) pushed the
    /// coefficient index past 63.
    AcOverflow,
    /// Descended into a Huffman child that was never allocated, or looked
    /// up against a tree with no root. Indicates a bug in tree
    /// construction, not a malformed stream.
    Internal(&'static str),
    /// Generic formatted error for cases that don't fit the above.
    Format(String),
    /// Wraps an I/O error from a `Read`-backed byte source or sink.
    Io(std::io::Error),
}

impl Display for DecodeError
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result
    {
        match self
        {
            DecodeError::HuffmanTable(s) => write!(f, "bad Huffman table: {s}"),
            DecodeError::UnexpectedEof(s) => write!(f, "unexpected end of stream: {s}"),
            DecodeError::AcOverflow => write!(f, "AC coefficient run overflowed block"),
            DecodeError::Internal(s) => write!(f, "internal decoder error: {s}"),
            DecodeError::Format(s) => write!(f, "{s}"),
            DecodeError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl Debug for DecodeError
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result
    {
        Display::fmt(self, f)
    }
}

impl std::error::Error for DecodeError {}

impl From<std::io::Error> for DecodeError
{
    fn from(e: std::io::Error) -> Self
    {
        DecodeError::Io(e)
    }
}
