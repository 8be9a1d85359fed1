//! Reads a packed bitstream most-significant-bit first, tracking position at
//! bit granularity. The whole container is held in memory, so the reader
//! works over a borrowed slice; end of data is `None`, never a panic.

/// Cursor over a byte slice with bit-level addressing.
#[derive(Debug)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    bit_index: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            cursor: 0,
            bit_index: 0,
        }
    }

    /// Return the next bit (0 or 1), or None if the data is exhausted.
    pub fn bit(&mut self) -> Option<u8> {
        if self.cursor >= self.buffer.len() {
            return None;
        }
        let bit = (self.buffer[self.cursor] >> (7 - self.bit_index)) & 1;
        self.bit_index += 1;
        if self.bit_index == 8 {
            self.bit_index = 0;
            self.cursor += 1;
        }
        Some(bit)
    }

    /// Return the next n bits as an unsigned integer, or None if the data
    /// runs out first. Used for the fixed-size header fields; n must not
    /// exceed the usize width.
    pub fn bint(&mut self, n: usize) -> Option<usize> {
        debug_assert!(n <= usize::BITS as usize);
        let mut result = 0_usize;
        for _ in 0..n {
            result = result << 1 | self.bit()? as usize;
        }
        Some(result)
    }

    /// Returns the next byte, or None if the data runs out. This is a
    /// convenience function, and calls bint(8).
    pub fn byte(&mut self) -> Option<u8> {
        self.bint(8).map(|byte| byte as u8)
    }

    /// Returns the next n bytes, or None if the data runs out.
    pub fn bytes(&mut self, n: usize) -> Option<Vec<u8>> {
        let mut result: Vec<u8> = Vec::with_capacity(n);
        for _ in 0..n {
            result.push(self.byte()?);
        }
        Some(result)
    }

    /// Bits left between the cursor and the end of the buffer.
    pub fn remaining_bits(&self) -> u64 {
        ((self.buffer.len() - self.cursor) as u64 * 8) - self.bit_index as u64
    }
}
