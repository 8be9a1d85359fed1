use log::error;

/// Group size of the packed payload. The container stores whole big-endian
/// 32-bit groups; the pad count in the header says how many low bits of the
/// final group are filler.
pub const GROUP_BITS: u64 = 32;

/// Packs an ordered bit sequence into a byte buffer, most significant bit
/// first. Call flush() to pad out the final 32-bit group before reading the
/// output.
pub struct BitPacker {
    pub output: Vec<u8>,
    queue: u128,
    q_bits: u8,
    total_bits: u64,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of the size specified.
    /// Suggest the size be set to the expected payload length.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            queue: 0,
            q_bits: 0,
            total_bits: 0,
        }
    }

    /// Internal bitstream write function: drain every full byte in the queue
    /// to the output buffer.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Append the low `len` bits of `bits`, most significant of those first.
    /// `len` may be 0 through 64.
    pub fn push_bits(&mut self, bits: u64, len: u8) {
        debug_assert!(len <= 64);
        if len == 0 {
            return;
        }
        let mask = if len == 64 {
            u64::MAX
        } else {
            (1_u64 << len) - 1
        };
        self.queue <<= len; //shift queue by bit length
        self.queue |= (bits & mask) as u128; //add data portion to queue
        self.q_bits += len; //update depth of queue bits
        self.total_bits += len as u64;
        self.write_stream();
    }

    /// Total bits pushed so far (padding excluded).
    pub fn bit_len(&self) -> u64 {
        self.total_bits
    }

    /// Pad the stream with zeros in the least significant bits up to a whole
    /// number of 32-bit groups and drain it. Returns the pad bit count
    /// (0..=31); an already aligned stream gets no pad group at all.
    pub fn flush(&mut self) -> u8 {
        let pad = ((GROUP_BITS - self.total_bits % GROUP_BITS) % GROUP_BITS) as u8;
        self.queue <<= pad;
        self.q_bits += pad;
        self.write_stream();
        if self.q_bits > 0 {
            error!("Stuff left in the BitPacker queue.");
        }
        pad
    }
}
