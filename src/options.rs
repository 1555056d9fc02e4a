//! Decoder configuration (spec Section 4.4's `yq`/`cbq`/`crq` scalars,
//! plus the PGM component selector).
//!
//! A small consuming builder, the same shape as the teacher's
//! `ZuneJpegOptions`: every setter takes and returns `self` by value so
//! calls chain, and the whole thing is `Copy` since it is only ever a
//! handful of small integers.
use crate::idct::QuantTable;

/// Dequantization scalars and output selection for one decode.
///
/// The three presets ([`DecoderOptions::color`], [`DecoderOptions::greyscale`],
/// [`DecoderOptions::raw`]) are the combinations actually exercised by the
/// camera firmware's capture modes; [`DecoderOptions::new`] exists for
/// anyone who has measured different scalars for their own unit.
#[derive(Debug, Clone, Copy)]
pub struct DecoderOptions
{
    quant:               QuantTable,
    pgm_component:       u64,
}

impl Default for DecoderOptions
{
    fn default() -> Self
    {
        DecoderOptions::color()
    }
}

impl DecoderOptions
{
    /// Builds options from explicit per-component dequantization
    /// scalars. `pgm_component` only matters if the caller later
    /// assembles PGM output; it selects which `block_index mod 4` is
    /// kept (spec Section 4.6).
    #[must_use]
    pub fn new(yq: i32, cbq: i32, crq: i32, pgm_component: u64) -> Self
    {
        DecoderOptions {
            quant: QuantTable { luma: yq, chroma_blue: cbq, chroma_red: crq },
            pgm_component: pgm_component % 4,
        }
    }

    /// Full-color preset (`{4, 2, 2}`), for [`crate::pnm::PpmWriter`] output.
    #[must_use]
    pub fn color() -> Self
    {
        DecoderOptions::new(4, 2, 2, 0)
    }

    /// Greyscale preset (`{4, 0, 0}`): chroma is decoded (it must be, to
    /// keep the DC predictor and block index in sync) but discarded by
    /// the caller, which selects luma (component 0) for
    /// [`crate::pnm::PgmWriter`].
    #[must_use]
    pub fn greyscale() -> Self
    {
        DecoderOptions::new(4, 0, 0, 0)
    }

    /// Raw per-component preset (`{1, 1, 1}`): no dequantization scaling,
    /// intended for inspecting one component at a time via
    /// [`crate::pnm::PgmWriter`] with `component` set to the block index
    /// modulus of interest.
    #[must_use]
    pub fn raw(component: u64) -> Self
    {
        DecoderOptions::new(1, 1, 1, component)
    }

    /// Sets the PGM component selector, consuming and returning `self`.
    #[must_use]
    pub fn with_pgm_component(mut self, component: u64) -> Self
    {
        self.pgm_component = component % 4;
        self
    }

    #[must_use]
    pub(crate) fn quant(self) -> QuantTable
    {
        self.quant
    }

    #[must_use]
    pub fn pgm_component(self) -> u64
    {
        self.pgm_component
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn color_preset_matches_the_observed_firmware_scalars()
    {
        let quant = DecoderOptions::color().quant();
        assert_eq!((quant.luma, quant.chroma_blue, quant.chroma_red), (4, 2, 2));
    }

    #[test]
    fn greyscale_preset_zeroes_both_chroma_scalars()
    {
        let quant = DecoderOptions::greyscale().quant();
        assert_eq!((quant.luma, quant.chroma_blue, quant.chroma_red), (4, 0, 0));
    }

    #[test]
    fn raw_preset_selects_the_requested_component()
    {
        let options = DecoderOptions::raw(2);
        assert_eq!(options.pgm_component(), 2);
        let quant = options.quant();
        assert_eq!((quant.luma, quant.chroma_blue, quant.chroma_red), (1, 1, 1));
    }

    #[test]
    fn component_selector_wraps_modulo_four()
    {
        let options = DecoderOptions::new(1, 1, 1, 7);
        assert_eq!(options.pgm_component(), 3);
        let options = options.with_pgm_component(9);
        assert_eq!(options.pgm_component(), 1);
    }
}
