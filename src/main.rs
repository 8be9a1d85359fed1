//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use clap::Parser;
use log::info;
use simplelog::{Config, TermLogger, TerminalMode};

use huffzip::compression::compress::compress;
use huffzip::compression::decompress::decompress;
use huffzip::error::HuffError;
use huffzip::tools::cli::{HuffOpts, Mode};

fn main() -> Result<(), HuffError> {
    let options = HuffOpts::parse();

    TermLogger::init(
        options.log_level(),
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::AlwaysAnsi,
    )
    .unwrap();

    //----- Figure out what we need to do and go do it
    let result = match options.op_mode() {
        Mode::Zip => compress(&options),
        Mode::Unzip => decompress(&options),
    };

    info!("Done.\n");
    result
}
