//! Entropy decoding of DC/AC coefficients (spec Section 4.3).
//!
//! Produces one 64-entry, zig-zag-ordered [`CoefficientVector`] per
//! block, applying the camera's 4-slot DC predictor as it goes. This is
//! deliberately not a standards-compliant JPEG scan decoder: there is
//! one scan, no restart markers, and both Huffman trees are always the
//! embedded Annex K luminance tables (see [`crate::huffman`]).
use crate::bitstream::{BitSource, ByteSource};
use crate::components::DcPredictorState;
use crate::errors::DecodeError;
use crate::huffman::{
    HuffmanTree, ANNEX_K_AC_COUNTS, ANNEX_K_AC_VALUES, ANNEX_K_DC_COUNTS, ANNEX_K_DC_VALUES,
};

/// 64 coefficients in zig-zag scan order, position 0 being the DC value
/// after prediction (spec Section 3 "CoefficientVector").
pub(crate) type CoefficientVector = [i32; 64];

pub(crate) struct EntropyDecoder<S>
{
    bits:         BitSource<S>,
    dc_tree:      HuffmanTree,
    ac_tree:      HuffmanTree,
    predictor:    DcPredictorState,
    next_index:   u64,
}

impl<S> EntropyDecoder<S>
where
    S: ByteSource,
{
    pub(crate) fn new(source: S) -> Result<Self, DecodeError>
    {
        Ok(EntropyDecoder {
            bits: BitSource::new(source),
            dc_tree: HuffmanTree::build(&ANNEX_K_DC_COUNTS, &ANNEX_K_DC_VALUES)?,
            ac_tree: HuffmanTree::build(&ANNEX_K_AC_COUNTS, &ANNEX_K_AC_VALUES)?,
            predictor: DcPredictorState::new(),
            next_index: 0,
        })
    }

    /// Decodes the next block.
    ///
    /// Returns `Ok(None)` on normal end-of-image: the bitstream ended
    /// (true EOF or a terminating marker) exactly where a new block's DC
    /// symbol was expected. Anything that ends the stream *after* that
    /// point — mid-magnitude, mid-AC-run — is a fatal
    /// [`DecodeError::UnexpectedEof`].
    pub(crate) fn next_block(&mut self) -> Result<Option<(u64, CoefficientVector)>, DecodeError>
    {
        let Some(category) = self.dc_tree.decode(&mut self.bits)?
        else
        {
            return Ok(None);
        };

        let block_index = self.next_index;
        self.next_index += 1;

        let raw = self.bits.receive(category)?;
        let diff = extend(raw, category);
        let dc = self.predictor.predict(block_index, diff);

        let mut block: CoefficientVector = [0; 64];
        block[0] = dc;

        let mut n = 1usize;
        while n < 64
        {
            let rs = self
                .ac_tree
                .decode(&mut self.bits)?
                .ok_or(DecodeError::UnexpectedEof("AC coefficient"))?;

            let zeroes = rs >> 4;
            let category = rs & 0x0F;

            if category == 0
            {
                if zeroes == 15
                {
                    // ZRL: sixteen zero coefficients.
                    n += 16;
                }
                else
                {
                    // EOB: remaining coefficients stay zero.
                    break;
                }
            }
            else
            {
                n += usize::from(zeroes);
                if n >= 64
                {
                    return Err(DecodeError::AcOverflow);
                }
                let raw = self.bits.receive(category)?;
                block[n] = extend(raw, category);
                n += 1;
            }
        }

        Ok(Some((block_index, block)))
    }
}

/// JPEG's `EXTEND`: converts an unsigned magnitude plus its bit-length
/// category into a signed coefficient (spec Section 4.3 step 3).
///
/// For `category` in `0..=15` and `value` in `0..2^category`, maps onto
/// `[-2^category+1, -2^(category-1)] ∪ [2^(category-1), 2^category-1]`,
/// with 0 when `category == 0`.
fn extend(value: u16, category: u8) -> i32
{
    if category == 0
    {
        return 0;
    }
    let value = i32::from(value);
    let half = 1_i32 << (category - 1);
    if value < half
    {
        value + 1 - (1_i32 << category)
    }
    else
    {
        value
    }
}
