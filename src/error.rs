//! Error types for the huffzip container and coding pipeline.

/// Errors produced while packing or unpacking a huffzip container.
///
/// Every failure here is deterministic for a given input; there is nothing
/// to retry.
#[derive(Debug, thiserror::Error)]
pub enum HuffError {
    /// The encoder met a byte with no entry in the code table. The table
    /// must be derived from the same input that is being encoded.
    #[error("no codeword for byte {0:#04x}")]
    UnknownSymbol(u8),

    /// The input holds more occurrences of one byte than the container's
    /// u32 count field can record.
    #[error("input too large for the container format ({0} occurrences of one byte)")]
    InputTooLarge(u64),

    /// The input does not start with the huffzip magic bytes.
    #[error("not a huffzip container (bad magic)")]
    BadMagic,

    /// The container header is truncated or internally inconsistent.
    #[error("malformed header: {0}")]
    MalformedHeader(&'static str),

    /// The packed payload cannot be decoded against its own header.
    #[error("malformed payload: {0}")]
    MalformedPayload(&'static str),

    /// The decoded symbol count disagrees with the count recorded in the
    /// header. The payload was encoded with a different tree than the one
    /// the header describes.
    #[error("tree mismatch: header records {expected} symbols, decoded {decoded}")]
    TreeMismatch { expected: u64, decoded: u64 },

    /// Failure in the surrounding file layer.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod test {
    use super::HuffError;

    #[test]
    fn display_test() {
        assert_eq!(
            format!("{}", HuffError::UnknownSymbol(0x61)),
            "no codeword for byte 0x61"
        );
        assert_eq!(
            format!("{}", HuffError::BadMagic),
            "not a huffzip container (bad magic)"
        );
        assert_eq!(
            format!("{}", HuffError::InputTooLarge(5_000_000_000)),
            "input too large for the container format (5000000000 occurrences of one byte)"
        );
        assert_eq!(
            format!(
                "{}",
                HuffError::TreeMismatch {
                    expected: 11,
                    decoded: 7
                }
            ),
            "tree mismatch: header records 11 symbols, decoded 7"
        );
    }

    #[test]
    fn io_conversion_test() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: HuffError = io.into();
        assert!(matches!(err, HuffError::Io(_)));
    }
}
