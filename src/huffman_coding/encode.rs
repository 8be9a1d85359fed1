use crate::bitstream::bitpacker::BitPacker;
use crate::error::HuffError;

use super::code::CodeTable;

/// The packed form of one input: whole 32-bit groups plus the trailing-bit
/// accounting the decoder needs to strip the filler again.
#[derive(Debug, PartialEq, Eq)]
pub struct Encoded {
    /// Packed payload, length always a multiple of 4 bytes.
    pub payload: Vec<u8>,
    /// Zero bits of filler in the final group (0..=31).
    pub pad_bits: u8,
    /// Exact codeword bits before padding.
    pub bit_len: u64,
}

/// Concatenate the codeword of every input byte, in input order, into a
/// packed payload. A byte missing from the table means the table was built
/// over different data and is fatal.
pub fn encode(data: &[u8], table: &CodeTable) -> Result<Encoded, HuffError> {
    let mut packer = BitPacker::new(data.len() / 2 + 4);
    for &byte in data {
        let codeword = table.get(&byte).ok_or(HuffError::UnknownSymbol(byte))?;
        packer.push_bits(codeword.bits, codeword.len);
    }
    let bit_len = packer.bit_len();
    let pad_bits = packer.flush();
    Ok(Encoded {
        payload: packer.output,
        pad_bits,
        bit_len,
    })
}
