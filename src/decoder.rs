//! Top-level decode entry point (spec Section 6 "Decoder entry point").
//!
//! Wires [`crate::entropy::EntropyDecoder`] to
//! [`crate::idct::process_block`] to a [`BlockSink`], the same
//! three-stage pipeline `jpeg_decode` ran in the camera firmware, minus
//! the firmware's own output-format coupling (there, the block receiver
//! was hardwired to one of two file-writing functions; here it's any
//! [`BlockSink`]).
use crate::bitstream::ByteSource;
use crate::entropy::EntropyDecoder;
use crate::errors::DecodeError;
use crate::options::DecoderOptions;
use crate::pnm::BlockSink;

/// Decodes one picture's worth of entropy-coded blocks from `source`,
/// pushing each processed block to `sink` in increasing block-index
/// order.
///
/// Returns the number of blocks decoded. A truncated stream (EOF mid-DC
/// magnitude, mid-AC-run, or past the last complete block) is a fatal
/// [`DecodeError`]; a clean end-of-image is not — it simply stops
/// producing blocks.
pub fn decode<S, K>(source: S, options: DecoderOptions, sink: &mut K) -> Result<u64, DecodeError>
where
    S: ByteSource,
    K: BlockSink,
{
    let mut entropy = EntropyDecoder::new(source)?;
    let quant = options.quant();
    let mut count = 0u64;

    while let Some((block_index, coefficients)) = entropy.next_block()?
    {
        let block = crate::idct::process_block(&coefficients, quant, block_index);
        sink.accept(&block, block_index)?;
        count += 1;
    }

    debug!("decoded {count} blocks");
    Ok(count)
}

/// Number of preamble bytes the camera's serial protocol places before
/// the entropy-coded picture data begins (spec Section 6 mentions only
/// the byte source contract; this constant documents the transport
/// detail one layer up, grounded in the firmware's capture loop, which
/// discards six bytes of response header before the first JPEG byte).
pub const SKIP_PREAMBLE: usize = 6;

/// Convenience entry point over an in-memory picture buffer that still
/// has its 6-byte transport preamble attached, skipping it before
/// decoding (spec Section 6 / SPEC supplement).
pub fn decode_picture_buffer<K>(
    buffer: &[u8], options: DecoderOptions, sink: &mut K,
) -> Result<u64, DecodeError>
where
    K: BlockSink,
{
    let payload = buffer.get(SKIP_PREAMBLE..).unwrap_or(&[]);
    decode(crate::bitstream::SliceSource::new(payload), options, sink)
}

/// A reusable decode configuration, for callers who prefer a struct
/// handle over passing [`DecoderOptions`] at every call site — the
/// same convenience the teacher's `Decoder` struct provides over its
/// free-standing parsing functions.
#[derive(Debug, Clone, Copy)]
pub struct Decoder
{
    options: DecoderOptions,
}

impl Decoder
{
    /// Number of preamble bytes a raw camera picture buffer carries
    /// before the entropy-coded data starts. Re-exported at the type
    /// for discoverability; identical to the free [`SKIP_PREAMBLE`].
    pub const SKIP_PREAMBLE: usize = SKIP_PREAMBLE;

    #[must_use]
    pub fn new(options: DecoderOptions) -> Self
    {
        Decoder { options }
    }

    /// Decodes `source` into `sink` using this decoder's options.
    ///
    /// # Errors
    /// See [`DecodeError`].
    pub fn decode<S, K>(&self, source: S, sink: &mut K) -> Result<u64, DecodeError>
    where
        S: ByteSource,
        K: BlockSink,
    {
        decode(source, self.options, sink)
    }

    /// Decodes an in-memory picture buffer that still has its
    /// [`Self::SKIP_PREAMBLE`]-byte transport preamble attached.
    ///
    /// # Errors
    /// See [`DecodeError`].
    pub fn decode_picture_buffer<K>(&self, buffer: &[u8], sink: &mut K) -> Result<u64, DecodeError>
    where
        K: BlockSink,
    {
        decode_picture_buffer(buffer, self.options, sink)
    }
}
