//! The compression module manages both directions of the huffzip pipeline.
//!
//! Compression runs the stages in order: frequency count, tree
//! construction, code table derivation, encoding, then the container write
//! (header with pad count and frequency table, payload in 32-bit groups).
//!
//! Decompression is the inverse: parse the header, rebuild the identical
//! tree from the persisted frequencies, and walk the payload bits back
//! into the original bytes.
//!
//! The in-memory entry points are pack() and unpack(); compress() and
//! decompress() wrap them with the file I/O.

pub mod compress;
pub mod decompress;
