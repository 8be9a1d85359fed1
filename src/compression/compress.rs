use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use log::{debug, info, trace};

use crate::error::HuffError;
use crate::huffman_coding::code::build_code_table;
use crate::huffman_coding::encode::encode;
use crate::huffman_coding::tree::build_tree;
use crate::tools::cli::HuffOpts;
use crate::tools::freq_count::FreqTable;

/// Container signature.
pub const MAGIC: [u8; 4] = *b"HUF1";

/// Fixed header bytes before the symbol table: magic, pad count, entry count.
pub const HEADER_BASE: usize = 4 + 4 + 2;
/// Bytes per symbol table entry: the symbol and its big-endian count.
pub const ENTRY_BYTES: usize = 1 + 4;

/// Compress `data` into a standalone huffzip container.
///
/// Layout: magic, u32 pad-bit count, u16 distinct symbol count, then one
/// (symbol, u32 count) entry per distinct symbol in ascending order, then
/// the packed payload as whole big-endian 32-bit groups. All fixed-size
/// fields go through unsigned byte conversions end to end.
pub fn pack(data: &[u8]) -> Result<Vec<u8>, HuffError> {
    let freqs = FreqTable::new(data);
    debug!(
        "Input is {} bytes over {} distinct symbols.",
        data.len(),
        freqs.distinct()
    );

    let mut out = Vec::with_capacity(data.len() / 2 + HEADER_BASE);
    out.extend_from_slice(&MAGIC);

    // Empty input: a header-only container with no table and no payload.
    let Some(tree) = build_tree(&freqs) else {
        out.extend_from_slice(&0_u32.to_be_bytes());
        out.extend_from_slice(&0_u16.to_be_bytes());
        return Ok(out);
    };

    let table = build_code_table(&tree);
    for (symbol, count) in freqs.entries() {
        trace!("{:#04x} x{} -> {}", symbol, count, table[&symbol]);
    }

    let encoded = encode(data, &table)?;
    debug_assert_eq!(
        encoded.payload.len() as u64 * 8,
        encoded.bit_len + encoded.pad_bits as u64
    );

    out.extend_from_slice(&(encoded.pad_bits as u32).to_be_bytes());
    out.extend_from_slice(&(freqs.distinct() as u16).to_be_bytes());
    for (symbol, count) in freqs.entries() {
        out.push(symbol);
        let count = u32::try_from(count).map_err(|_| HuffError::InputTooLarge(count))?;
        out.extend_from_slice(&count.to_be_bytes());
    }
    out.extend_from_slice(&encoded.payload);

    info!(
        "Packed {} bytes into {} ({} codeword bits, {} pad bits).",
        data.len(),
        out.len(),
        encoded.bit_len,
        encoded.pad_bits
    );
    Ok(out)
}

/// Compress the input file named in opts.
pub fn compress(opts: &HuffOpts) -> Result<(), HuffError> {
    let data = fs::read(&opts.file)?;
    info!("Compressing {} ({} bytes).", &opts.file, data.len());

    let packed = pack(&data)?;

    let out_name = opts.output_name();
    if !opts.force && Path::new(&out_name).exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} exists (use --force to overwrite)", out_name),
        )
        .into());
    }
    let mut f_out = File::create(&out_name)?;
    f_out.write_all(&packed)?;
    info!(
        "Wrote {} ({} bytes, {:.1}% of input).",
        out_name,
        packed.len(),
        packed.len() as f64 * 100.0 / data.len().max(1) as f64
    );

    if !opts.keep {
        fs::remove_file(&opts.file)?;
    }
    Ok(())
}
