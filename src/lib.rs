//! huffzip: a Huffman coding file compressor.
//!
//! Builds a prefix-free variable-length code over the byte frequencies of
//! one input and uses it to compress and losslessly decompress that input.
//! The compressed container carries the frequency table, so decompression
//! works in any later run without the original file.
//!
//! Basic usage to compress a file:
//!
//! `$> huffzip -z test.txt`
//!
//! This creates test.txt.huf and deletes the original (pass -k to keep it).
//! `huffzip -d test.txt.huf` restores the file.

pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;
