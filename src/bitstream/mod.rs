//! The bitstream module is the bit-level I/O subsystem for huffzip.
//!
//! Codewords have arbitrary bit lengths, so the payload is built and read
//! at bit granularity: the BitPacker packs an ordered bit sequence into
//! whole big-endian 32-bit groups (recording how many trailing bits are
//! filler), and the BitReader walks a packed buffer back out one bit, or a
//! fixed-width unsigned field, at a time.
//!
//! This subsystem is designed to interface with the other modules within
//! huffzip. It has not been generalized for wider use.

pub mod bitpacker;
pub mod bitreader;
