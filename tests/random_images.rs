//! End-to-end tests driving the whole pipeline: entropy stream in,
//! assembled PPM/PGM bytes out.
use polaroid_jpeg::{decode, DecoderOptions, PgmWriter, PpmWriter, SliceSource};

fn pack_bits(bits: &[u8]) -> Vec<u8>
{
    let mut out = Vec::new();
    for chunk in bits.chunks(8)
    {
        let mut byte = 0u8;
        for (i, &b) in chunk.iter().enumerate()
        {
            byte |= b << (7 - i);
        }
        out.push(byte);
    }
    out
}

/// One macroblock's worth of entropy-coded bits: DC category 0, AC EOB,
/// repeated four times (one per component slot). 24 bits, packing to
/// exactly 3 bytes, so macroblocks land on byte boundaries and can be
/// freely interleaved with stuffed literal bytes in these tests.
fn flat_macroblock_bytes() -> [u8; 3]
{
    let mut bits = Vec::new();
    for _ in 0..4
    {
        bits.extend([0, 0]); // DC category 0
        bits.extend([1, 0, 1, 0]); // AC EOB
    }
    let packed = pack_bits(&bits);
    [packed[0], packed[1], packed[2]]
}

const TERMINATOR: [u8; 2] = [0xFF, 0xD9];

#[test]
fn a_full_flat_image_decodes_to_a_complete_ppm_of_mid_grey_pixels()
{
    let mut data = Vec::new();
    for _ in 0..(20 * 15)
    {
        // 20 columns x 15 bands of macroblocks (16 rows/band) = full 320x240 frame
        data.extend(flat_macroblock_bytes());
    }
    data.extend(TERMINATOR);

    let mut out = Vec::new();
    let mut ppm = PpmWriter::new(&mut out);
    let blocks = decode(SliceSource::new(&data), DecoderOptions::color(), &mut ppm).unwrap();
    assert_eq!(blocks, 20 * 15 * 4);

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("P3\n320 240\n255\n"));

    let body: Vec<&str> = text.lines().skip(3).collect();
    assert_eq!(body.len(), 240);
    for line in &body
    {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        assert_eq!(tokens.len(), 320 * 3);
        assert!(tokens.iter().all(|&t| t == "128"));
    }
}

#[test]
fn a_full_flat_image_decodes_to_a_complete_pgm_of_mid_grey_samples()
{
    let mut data = Vec::new();
    for _ in 0..(20 * 15)
    {
        data.extend(flat_macroblock_bytes());
    }
    data.extend(TERMINATOR);

    let mut out = Vec::new();
    let mut pgm = PgmWriter::new(&mut out, 0);
    decode(SliceSource::new(&data), DecoderOptions::greyscale(), &mut pgm).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("P2\n160 120\n255\n"));

    let body: Vec<&str> = text.lines().skip(3).collect();
    assert_eq!(body.len(), 120);
    for line in &body
    {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        assert_eq!(tokens.len(), 160);
        assert!(tokens.iter().all(|&t| t == "128"));
    }
}

#[test]
fn a_literal_stuffed_0xff_byte_between_macroblocks_does_not_disrupt_decoding()
{
    let mut data = Vec::new();
    data.extend(flat_macroblock_bytes());
    data.extend([0xFF, 0x00]); // stuffed literal 0xFF, transparent to the decoder
    for _ in 0..3
    {
        data.extend(flat_macroblock_bytes());
    }
    data.extend(TERMINATOR);

    let mut out = Vec::new();
    let mut ppm = PpmWriter::new(&mut out);
    let blocks = decode(SliceSource::new(&data), DecoderOptions::color(), &mut ppm).unwrap();
    assert_eq!(blocks, 4 * 4);
}

#[test]
fn truncated_image_is_rejected_as_a_fatal_error()
{
    let data = pack_bits(&[0, 0]); // DC decoded, then nothing: truncated mid-AC
    let mut out = Vec::new();
    let mut ppm = PpmWriter::new(&mut out);
    assert!(decode(SliceSource::new(&data), DecoderOptions::color(), &mut ppm).is_err());
}
