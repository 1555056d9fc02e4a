//! A decoder for the Polaroid-320 toy camera's JPEG-like picture
//! format.
//!
//! This is not a general-purpose JPEG library. The camera's entropy
//! stream deliberately deviates from ISO/IEC 10918-1: there are no
//! SOI/DHT/DQT/SOS/EOI markers, both Huffman tables are always the
//! embedded Annex K luminance tables (reused for chroma too), and each
//! macroblock carries two independently DC-predicted luma blocks in a
//! fixed `Y1, Cb, Cr, Y2` order. Decoding anything else is out of
//! scope.
//!
//! # Usage
//!
//! ```no_run
//! use polaroid_jpeg::{decode, DecoderOptions, PpmWriter};
//!
//! let entropy_stream: Vec<u8> = std::fs::read("picture.bin").unwrap();
//! let mut ppm = PpmWriter::new(std::fs::File::create("picture.ppm").unwrap());
//! decode(entropy_stream.as_slice(), DecoderOptions::color(), &mut ppm).unwrap();
//! ```
//!
//! Greyscale and raw single-component capture modes use the same entry
//! point with a different [`DecoderOptions`] preset and a
//! [`PgmWriter`] sink instead.
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::missing_errors_doc
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc
)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate log;

pub use crate::bitstream::{ByteSource, SliceSource};
pub use crate::components::{Component, QuantSelector};
pub use crate::decoder::{decode, decode_picture_buffer, Decoder, SKIP_PREAMBLE};
pub use crate::errors::DecodeError;
pub use crate::idct::{QuantTable, SampleBlock};
pub use crate::options::DecoderOptions;
pub use crate::pnm::{BlockSink, PgmWriter, PpmWriter};

mod bitstream;
mod color_convert;
mod components;
mod decoder;
mod entropy;
pub mod errors;
mod huffman;
mod idct;
mod misc;
mod options;
mod pnm;
