use std::fmt::{Display, Formatter};

use clap::Parser;
use log::LevelFilter;

/// Extension appended to compressed output names (and stripped again when
/// decompressing without an explicit output path).
pub const SUFFIX: &str = ".huf";

/// Zip, Unzip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    name = "huffzip",
    version,
    about = "A Huffman coding file compressor.",
    long_about = "
    Compresses a file with a single Huffman code built over its byte
    frequencies. The compressed container carries the frequency table, so
    any later run can decompress it on its own."
)]
pub struct HuffOpts {
    /// Filename of file to process
    #[clap()]
    pub file: String,

    /// Perform compression on the input file (the default)
    #[clap(short = 'z', long = "zip")]
    pub compress: bool,

    /// Perform decompression on the input file
    #[clap(short = 'd', long = "decompress")]
    pub decompress: bool,

    /// Write output here instead of deriving the name from the input
    #[clap(short = 'o', long = "output")]
    pub output: Option<String>,

    /// Keep (don't delete) the input file
    #[clap(short = 'k', long = "keep")]
    pub keep: bool,

    /// Overwrite an existing output file
    #[clap(short = 'f', long = "force")]
    pub force: bool,

    /// Sets verbosity. -v0 is silent, -v5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    pub v: u8,
}

impl HuffOpts {
    /// Compress unless decompression was asked for.
    pub fn op_mode(&self) -> Mode {
        if self.decompress {
            Mode::Unzip
        } else {
            Mode::Zip
        }
    }

    /// The output path: the explicit -o value when given, otherwise derived
    /// from the input name (append .huf when zipping, strip it when
    /// unzipping, or fall back to .out if the suffix is absent).
    pub fn output_name(&self) -> String {
        if let Some(name) = &self.output {
            return name.clone();
        }
        match self.op_mode() {
            Mode::Zip => format!("{}{}", self.file, SUFFIX),
            Mode::Unzip => self
                .file
                .strip_suffix(SUFFIX)
                .map(str::to_string)
                .unwrap_or_else(|| format!("{}.out", self.file)),
        }
    }

    /// Map the -v count onto a log level.
    pub fn log_level(&self) -> LevelFilter {
        match self.v {
            0 => LevelFilter::Off,
            1 => LevelFilter::Error,
            2 => LevelFilter::Warn,
            3 => LevelFilter::Info,
            4 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{HuffOpts, Mode};
    use clap::Parser;
    use log::LevelFilter;

    #[test]
    fn default_mode_test() {
        let opts = HuffOpts::try_parse_from(["huffzip", "test.txt"]).unwrap();
        assert_eq!(opts.op_mode(), Mode::Zip);
        assert_eq!(opts.output_name(), "test.txt.huf");
        assert_eq!(opts.log_level(), LevelFilter::Info);
    }

    #[test]
    fn decompress_mode_test() {
        let opts = HuffOpts::try_parse_from(["huffzip", "-d", "test.txt.huf"]).unwrap();
        assert_eq!(opts.op_mode(), Mode::Unzip);
        assert_eq!(opts.output_name(), "test.txt");
    }

    #[test]
    fn decompress_without_suffix_test() {
        let opts = HuffOpts::try_parse_from(["huffzip", "-d", "archive.bin"]).unwrap();
        assert_eq!(opts.output_name(), "archive.bin.out");
    }

    #[test]
    fn explicit_output_test() {
        let opts =
            HuffOpts::try_parse_from(["huffzip", "-z", "-o", "custom.huf", "test.txt"]).unwrap();
        assert_eq!(opts.output_name(), "custom.huf");
    }

    #[test]
    fn verbosity_test() {
        let opts = HuffOpts::try_parse_from(["huffzip", "-v", "5", "test.txt"]).unwrap();
        assert_eq!(opts.log_level(), LevelFilter::Trace);
        let opts = HuffOpts::try_parse_from(["huffzip", "-v", "0", "test.txt"]).unwrap();
        assert_eq!(opts.log_level(), LevelFilter::Off);
    }
}
