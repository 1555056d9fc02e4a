//! Per-macroblock component identity and state.
//!
//! The camera's macroblock is four blocks wide: two independently
//! predicted luma blocks plus one chroma block each, in the fixed order
//! `Y1, Cb, Cr, Y2` (spec Section 3 "DCPredictorState", Section 4.4).
//! `block_index % 4` is the wire-level contract everywhere in this
//! crate; `Component` exists only to give that number a name at call
//! sites, the way zune-jpeg's `ComponentID` names indices into its
//! `components` vector.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Component
{
    /// First luma block of the macroblock (even output rows).
    Y1,
    /// Blue-difference chroma block, shared by both luma blocks.
    Cb,
    /// Red-difference chroma block, shared by both luma blocks.
    Cr,
    /// Second luma block of the macroblock (odd output rows).
    Y2,
}

impl Component
{
    /// Maps a block index to its component, per spec Section 3/4.4:
    /// `{Y1, Cb, Cr, Y2}[block_index % 4]`.
    #[must_use]
    pub const fn of_block(block_index: u64) -> Component
    {
        match block_index % 4
        {
            0 => Component::Y1,
            1 => Component::Cb,
            2 => Component::Cr,
            _ => Component::Y2,
        }
    }

    /// Maps a block index to the dequantization scalar selector, per
    /// spec Section 4.4: `{Y,Cb,Cr,Y}[block_index % 4]`. Y1 and Y2 both
    /// use the luma scalar.
    #[must_use]
    pub const fn quant_selector(block_index: u64) -> QuantSelector
    {
        match Self::of_block(block_index)
        {
            Component::Y1 | Component::Y2 => QuantSelector::Luma,
            Component::Cb => QuantSelector::ChromaBlue,
            Component::Cr => QuantSelector::ChromaRed,
        }
    }
}

/// Which of the three dequantization scalars (`yq`, `cbq`, `crq`)
/// applies to a block.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum QuantSelector
{
    Luma,
    ChromaBlue,
    ChromaRed,
}

/// The four independent DC predictors, one per component slot, indexed
/// by `block_index % 4` (spec Section 3 "DCPredictorState").
///
/// The index-mod-4 cycle is never resynchronized mid-image (spec
/// Section 4.3 "Ordering") — there is no restart-marker mechanism in
/// this protocol.
#[derive(Default)]
pub(crate) struct DcPredictorState
{
    slots: [i32; 4],
}

impl DcPredictorState
{
    pub(crate) fn new() -> Self
    {
        DcPredictorState::default()
    }

    /// Applies `diff` to the predictor for `block_index`'s slot and
    /// returns the resulting DC coefficient.
    pub(crate) fn predict(&mut self, block_index: u64, diff: i32) -> i32
    {
        let slot = &mut self.slots[(block_index % 4) as usize];
        *slot = slot.wrapping_add(diff);
        *slot
    }
}
