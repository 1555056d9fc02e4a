//! A bit-by-bit reader over the camera's raw entropy stream.
//!
//! Unlike a standards-compliant JPEG bitstream, this camera never emits
//! SOI/DHT/DQT/SOS/EOI markers inside THE CORE's input — the only marker
//! that can appear is whatever terminates the picture (the camera's
//! firmware writes something resembling an EOI, but we don't special
//! case its value: any `0xFF` not followed by `0x00` ends the stream).
//!
//! This is deliberately the simple bit-by-bit reader from spec Section
//! 4.1, not a 32/64-bit refill buffer — the camera's bitstream is small
//! (one picture, a few thousand blocks) and clarity matters more than
//! throughput here.
use crate::errors::DecodeError;

/// A source of raw bytes, one at a time.
///
/// This is the "byte source" external interface from spec Section 6:
/// the serial transport and picture-buffer framing live outside THE
/// CORE and are represented here only by this trait.
pub trait ByteSource
{
    /// Returns the next byte, or `None` on end of stream.
    fn next_byte(&mut self) -> Option<u8>;
}

impl<F> ByteSource for F
where
    F: FnMut() -> Option<u8>,
{
    fn next_byte(&mut self) -> Option<u8>
    {
        self()
    }
}

/// A [`ByteSource`] over an in-memory buffer, for tests and for callers
/// who already have the whole picture in RAM.
pub struct SliceSource<'a>
{
    data: &'a [u8],
    pos:  usize,
}

impl<'a> SliceSource<'a>
{
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self
    {
        SliceSource { data, pos: 0 }
    }
}

impl ByteSource for SliceSource<'_>
{
    fn next_byte(&mut self) -> Option<u8>
    {
        let b = *self.data.get(self.pos)?;
        self.pos += 1;
        Some(b)
    }
}

/// Bit-by-bit reader with transparent 0xFF00 byte-stuffing removal.
///
/// See spec Section 4.1. Once a terminating marker (or true EOF) is
/// seen, the stream stays ended for every subsequent call — there is no
/// resynchronization, matching the camera's single-scan, no-restart
/// protocol.
pub(crate) struct BitSource<S>
{
    source:       S,
    current_byte: u8,
    /// Bits left unread in `current_byte`. Zero means a fresh byte must
    /// be pulled before the next bit can be produced.
    bits_left:    u8,
    ended:        bool,
}

impl<S> BitSource<S>
where
    S: ByteSource,
{
    pub(crate) fn new(source: S) -> Self
    {
        BitSource {
            source,
            current_byte: 0,
            bits_left: 0,
            ended: false,
        }
    }

    /// Returns the next bit (0 or 1), or `None` on end of stream.
    pub(crate) fn next_bit(&mut self) -> Option<u8>
    {
        if self.bits_left == 0
        {
            self.current_byte = self.read_data_byte()?;
            self.bits_left = 8;
        }
        self.bits_left -= 1;
        Some((self.current_byte >> self.bits_left) & 1)
    }

    /// Reads one logical data byte, absorbing 0xFF00 stuffing and
    /// latching `ended` on any marker or true EOF.
    fn read_data_byte(&mut self) -> Option<u8>
    {
        if self.ended
        {
            return None;
        }

        let b = match self.source.next_byte()
        {
            Some(b) => b,
            None =>
            {
                self.ended = true;
                return None;
            }
        };

        if b != 0xFF
        {
            return Some(b);
        }

        match self.source.next_byte()
        {
            Some(0x00) => Some(0xFF),
            _ =>
            {
                // Either a real marker (0xFF followed by a non-zero byte)
                // or the stream ran out right after a lone 0xFF. Both end
                // the stream; the decoder decides whether that's fatal
                // based on where in the block it happened.
                self.ended = true;
                None
            }
        }
    }

    /// Reads `n` bits MSB-first as an unsigned integer.
    ///
    /// `n` is at most 16 in this protocol (a DC/AC category never
    /// exceeds 15). Returns `Err` only if the stream ends before `n`
    /// bits could be collected — this is always a mid-block failure
    /// since category 0 never calls this.
    pub(crate) fn receive(&mut self, n: u8) -> Result<u16, DecodeError>
    {
        let mut value: u16 = 0;
        for _ in 0..n
        {
            let bit = self
                .next_bit()
                .ok_or(DecodeError::UnexpectedEof("truncated magnitude bits"))?;
            value = (value << 1) | u16::from(bit);
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn bits_of(mut source: BitSource<SliceSource>) -> Vec<u8>
    {
        let mut out = Vec::new();
        while let Some(bit) = source.next_bit()
        {
            out.push(bit);
        }
        out
    }

    #[test]
    fn reads_msb_first()
    {
        // 0b1011_0010
        let data = [0b1011_0010];
        let bits = bits_of(BitSource::new(SliceSource::new(&data)));
        assert_eq!(bits, vec![1, 0, 1, 1, 0, 0, 1, 0]);
    }

    #[test]
    fn empty_stream_ends_immediately()
    {
        let data: [u8; 0] = [];
        let mut source = BitSource::new(SliceSource::new(&data));
        assert_eq!(source.next_bit(), None);
    }

    #[test]
    fn byte_stuffing_yields_the_literal_0xff_byte()
    {
        // A literal 0xFF in the payload, escaped with a following 0x00,
        // then one more data byte to prove reading continues past it.
        let data = [0xFF, 0x00, 0xAA];
        let mut source = BitSource::new(SliceSource::new(&data));

        let first_byte_bits: Vec<u8> = (0..8).map(|_| source.next_bit().unwrap()).collect();
        assert_eq!(first_byte_bits, vec![1, 1, 1, 1, 1, 1, 1, 1]);

        let second_byte_bits: Vec<u8> = (0..8).map(|_| source.next_bit().unwrap()).collect();
        assert_eq!(second_byte_bits, vec![1, 0, 1, 0, 1, 0, 1, 0]);
    }

    #[test]
    fn marker_terminates_the_stream()
    {
        // 0xFF followed by a non-zero byte is a marker: end of stream,
        // and nothing after it is ever read.
        let data = [0x00, 0xFF, 0xD9, 0xAA];
        let mut source = BitSource::new(SliceSource::new(&data));

        for _ in 0..8
        {
            assert!(source.next_bit().is_some());
        }
        assert_eq!(source.next_bit(), None);
        // Sticky: stays ended.
        assert_eq!(source.next_bit(), None);
    }

    #[test]
    fn receive_reads_msb_first_unsigned_value()
    {
        let data = [0b1010_0000];
        let mut source = BitSource::new(SliceSource::new(&data));
        assert_eq!(source.receive(3).unwrap(), 0b101);
    }

    #[test]
    fn receive_zero_bits_is_zero()
    {
        let data = [0xFF, 0x00];
        let mut source = BitSource::new(SliceSource::new(&data));
        assert_eq!(source.receive(0).unwrap(), 0);
    }
}
