use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use log::{debug, info};

use crate::bitstream::bitreader::BitReader;
use crate::error::HuffError;
use crate::huffman_coding::decode::decode;
use crate::huffman_coding::tree::build_tree;
use crate::tools::cli::HuffOpts;
use crate::tools::freq_count::FreqTable;

use super::compress::MAGIC;

/// Decompress a huffzip container back to the original bytes.
///
/// The header's frequency table rebuilds the exact tree the encoder used
/// (construction is deterministic), and the sum of its counts is the
/// expected output length, which guards against truncated payloads and
/// mismatched tables.
pub fn unpack(data: &[u8]) -> Result<Vec<u8>, HuffError> {
    let mut reader = BitReader::new(data);

    let magic = reader
        .bytes(4)
        .ok_or(HuffError::MalformedHeader("truncated magic"))?;
    if magic != MAGIC {
        return Err(HuffError::BadMagic);
    }

    let pad_bits = reader
        .bint(32)
        .ok_or(HuffError::MalformedHeader("truncated pad count"))? as u64;
    if pad_bits > 31 {
        return Err(HuffError::MalformedHeader("pad count out of range"));
    }

    let sym_count = reader
        .bint(16)
        .ok_or(HuffError::MalformedHeader("truncated symbol count"))?;
    if sym_count > 256 {
        return Err(HuffError::MalformedHeader("more than 256 symbol entries"));
    }

    let mut entries: Vec<(u8, u32)> = Vec::with_capacity(sym_count);
    for _ in 0..sym_count {
        let symbol = reader
            .byte()
            .ok_or(HuffError::MalformedHeader("truncated symbol table"))?;
        let count = reader
            .bint(32)
            .ok_or(HuffError::MalformedHeader("truncated symbol table"))? as u32;
        if count == 0 {
            return Err(HuffError::MalformedHeader("zero-count symbol entry"));
        }
        if entries.last().map_or(false, |&(prev, _)| prev >= symbol) {
            return Err(HuffError::MalformedHeader(
                "symbol table not in ascending order",
            ));
        }
        entries.push((symbol, count));
    }

    // Empty input round-trips to empty output; nothing may follow the header.
    if sym_count == 0 {
        if pad_bits != 0 {
            return Err(HuffError::MalformedHeader("pad bits without a payload"));
        }
        if reader.remaining_bits() != 0 {
            return Err(HuffError::MalformedPayload(
                "payload present for an empty symbol table",
            ));
        }
        return Ok(Vec::new());
    }

    let payload_bits = reader.remaining_bits();
    if payload_bits % 32 != 0 {
        return Err(HuffError::MalformedPayload(
            "payload is not whole 32-bit groups",
        ));
    }
    if payload_bits < pad_bits {
        return Err(HuffError::MalformedPayload("padding exceeds the payload"));
    }
    let total_bits = payload_bits - pad_bits;

    let freqs = FreqTable::from_entries(&entries);
    let expected = freqs.total();
    debug!(
        "Container holds {} symbols over {} distinct values, {} payload bits.",
        expected, sym_count, total_bits
    );

    let tree = build_tree(&freqs).ok_or(HuffError::MalformedHeader("empty symbol table"))?;
    let output = decode(&mut reader, &tree, total_bits, expected)?;

    // The encoder fills the final group with zeros; anything else in the
    // pad region means the container was altered after packing.
    if pad_bits > 0 {
        let filler = reader
            .bint(pad_bits as usize)
            .ok_or(HuffError::MalformedPayload("pad bits missing"))?;
        if filler != 0 {
            return Err(HuffError::MalformedPayload("trailing non-padding bits"));
        }
    }

    info!("Unpacked {} bytes from {}.", output.len(), data.len());
    Ok(output)
}

/// Decompress the file named in opts.
pub fn decompress(opts: &HuffOpts) -> Result<(), HuffError> {
    let data = fs::read(&opts.file)?;
    info!("Decompressing {} ({} bytes).", &opts.file, data.len());

    let output = unpack(&data)?;

    let out_name = opts.output_name();
    if !opts.force && Path::new(&out_name).exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} exists (use --force to overwrite)", out_name),
        )
        .into());
    }
    let mut f_out = File::create(&out_name)?;
    f_out.write_all(&output)?;
    info!("Wrote {} ({} bytes).", out_name, output.len());

    if !opts.keep {
        fs::remove_file(&opts.file)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::unpack;
    use crate::compression::compress::pack;
    use crate::error::HuffError;

    #[test]
    fn round_trip_test() {
        for data in [
            &b"abracadabra"[..],
            b"the quick brown fox jumps over the lazy dog",
            b"mississippi",
            b"\x00\x01\x02\xfd\xfe\xff binary is fine too \x00",
        ] {
            let packed = pack(data).unwrap();
            assert_eq!(unpack(&packed).unwrap(), data);
        }
    }

    #[test]
    fn round_trip_full_alphabet_test() {
        let data: Vec<u8> = (0..=255_u8).cycle().take(4096).collect();
        let packed = pack(&data).unwrap();
        assert_eq!(unpack(&packed).unwrap(), data);
    }

    #[test]
    fn round_trip_large_input_test() {
        // Crosses the parallel frequency-count threshold.
        let data: Vec<u8> = (0..80_000_u32)
            .map(|i| (i.wrapping_mul(31) % 253) as u8)
            .collect();
        let packed = pack(&data).unwrap();
        assert_eq!(unpack(&packed).unwrap(), data);
    }

    #[test]
    fn round_trip_single_symbol_test() {
        let packed = pack(b"aaaa").unwrap();
        assert_eq!(unpack(&packed).unwrap(), b"aaaa");
    }

    #[test]
    fn round_trip_empty_test() {
        let packed = pack(&[]).unwrap();
        assert_eq!(unpack(&packed).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn bad_magic_test() {
        let mut packed = pack(b"abracadabra").unwrap();
        packed[0] = b'X';
        assert!(matches!(unpack(&packed).unwrap_err(), HuffError::BadMagic));
    }

    #[test]
    fn truncated_header_test() {
        let packed = pack(b"abracadabra").unwrap();
        let err = unpack(&packed[..6]).unwrap_err();
        assert!(matches!(err, HuffError::MalformedHeader(_)));
    }

    #[test]
    fn pad_out_of_range_test() {
        let mut packed = pack(b"abracadabra").unwrap();
        // Overwrite the pad count with 32.
        packed[4..8].copy_from_slice(&32_u32.to_be_bytes());
        let err = unpack(&packed).unwrap_err();
        assert!(matches!(err, HuffError::MalformedHeader(_)));
    }

    #[test]
    fn misaligned_payload_test() {
        let mut packed = pack(b"abracadabra").unwrap();
        packed.push(0x00); // payload no longer whole 32-bit groups
        let err = unpack(&packed).unwrap_err();
        assert!(matches!(err, HuffError::MalformedPayload(_)));
    }

    #[test]
    fn truncated_payload_test() {
        let mut packed = pack(b"abracadabra").unwrap();
        packed.truncate(packed.len() - 4); // drop the only payload group
        let err = unpack(&packed).unwrap_err();
        assert!(err_is_payload_or_mismatch(&err));
    }

    fn err_is_payload_or_mismatch(err: &HuffError) -> bool {
        matches!(
            err,
            HuffError::MalformedPayload(_) | HuffError::TreeMismatch { .. }
        )
    }

    #[test]
    fn nonzero_padding_test() {
        // abracadabra leaves 9 pad bits in the final group; the decoder
        // must notice when any of them were flipped after packing.
        let mut packed = pack(b"abracadabra").unwrap();
        let last = packed.len() - 1;
        packed[last] |= 0x01;
        let err = unpack(&packed).unwrap_err();
        assert!(matches!(
            err,
            HuffError::MalformedPayload("trailing non-padding bits")
        ));
    }

    #[test]
    fn oversized_count_test() {
        // A header count far beyond the payload's bit budget is rejected up
        // front; the untrusted sum must never size an allocation.
        let mut packed = pack(b"abracadabra").unwrap();
        packed[11..15].copy_from_slice(&u32::MAX.to_be_bytes());
        let err = unpack(&packed).unwrap_err();
        assert!(matches!(err, HuffError::MalformedPayload(_)));
    }

    #[test]
    fn tampered_counts_test() {
        // Double one count: the tree changes and the recorded totals no
        // longer line up with the payload.
        let mut packed = pack(b"abracadabra").unwrap();
        // First entry is 'a' at offset 10; its count field is 11..15.
        packed[11..15].copy_from_slice(&50_u32.to_be_bytes());
        assert!(unpack(&packed).is_err());
    }

    #[test]
    fn zero_count_entry_test() {
        let mut packed = pack(b"abracadabra").unwrap();
        packed[11..15].copy_from_slice(&0_u32.to_be_bytes());
        let err = unpack(&packed).unwrap_err();
        assert!(matches!(err, HuffError::MalformedHeader(_)));
    }

    #[test]
    fn trailing_garbage_after_empty_container_test() {
        let mut packed = pack(&[]).unwrap();
        packed.extend_from_slice(&[0, 0, 0, 0]);
        let err = unpack(&packed).unwrap_err();
        assert!(matches!(err, HuffError::MalformedPayload(_)));
    }
}
