use crate::bitstream::bitreader::BitReader;
use crate::error::HuffError;

use super::tree::Node;

/// Walk the tree from the root one bit at a time: 0 goes left, 1 goes
/// right; a leaf emits its symbol and resets the walk. Exactly `total_bits`
/// bits are consumed from the reader.
///
/// `expected` is the symbol count recorded in the container header. A walk
/// that ends between nodes, a stream shorter than its header claims, or a
/// count that comes out wrong is an error, never a silent truncation.
pub fn decode(
    reader: &mut BitReader<'_>,
    root: &Node,
    total_bits: u64,
    expected: u64,
) -> Result<Vec<u8>, HuffError> {
    // Every codeword costs at least one bit, so a header count beyond the
    // bit budget is bogus. Checked before sizing the output buffer: the
    // count is untrusted input and must not drive the allocation.
    if expected > total_bits {
        return Err(HuffError::MalformedPayload(
            "symbol count exceeds the payload bits",
        ));
    }
    let mut output = Vec::with_capacity(expected as usize);

    // Degenerate tree: a lone leaf was written as one `0` bit per symbol.
    if let Node::Leaf { symbol, .. } = root {
        for _ in 0..total_bits {
            match reader.bit() {
                Some(0) => output.push(*symbol),
                Some(_) => {
                    return Err(HuffError::MalformedPayload(
                        "nonzero bit under a single-leaf tree",
                    ))
                }
                None => {
                    return Err(HuffError::MalformedPayload(
                        "bit stream shorter than the header claims",
                    ))
                }
            }
        }
        return finish(output, expected);
    }

    let mut node = root;
    let mut consumed = 0_u64;
    while consumed < total_bits {
        // The walk resets to the (internal) root after every leaf, so the
        // current node is always internal here.
        if let Node::Internal { left, right, .. } = node {
            let bit = reader.bit().ok_or(HuffError::MalformedPayload(
                "bit stream shorter than the header claims",
            ))?;
            consumed += 1;
            node = if bit == 0 { left } else { right };
            if let Node::Leaf { symbol, .. } = node {
                output.push(*symbol);
                node = root;
            }
        }
    }

    if !std::ptr::eq(node, root) {
        return Err(HuffError::MalformedPayload(
            "bit stream ends in the middle of a codeword",
        ));
    }
    finish(output, expected)
}

fn finish(output: Vec<u8>, expected: u64) -> Result<Vec<u8>, HuffError> {
    if output.len() as u64 != expected {
        return Err(HuffError::TreeMismatch {
            expected,
            decoded: output.len() as u64,
        });
    }
    Ok(output)
}
