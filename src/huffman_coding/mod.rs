//! The huffman_coding module is the coding engine for huffzip.
//!
//! A single Huffman code is built per input: the frequency table seeds a
//! min-priority queue, the queue is merged down to one tree, and the tree
//! yields a prefix-free codeword per symbol. Encoding concatenates
//! codewords into the packed payload; decoding walks the tree bit by bit.
//!
//! Tie-breaking during tree construction is deterministic (insertion
//! sequence as the secondary key), so the decoder can rebuild the exact
//! tree from the persisted frequency table alone.

pub mod code;
pub mod decode;
pub mod encode;
pub mod tree;
