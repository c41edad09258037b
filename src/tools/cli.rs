//! Command Line Interpretation - uses the external CLAP crate.

use std::fmt::{Display, Formatter};
use std::process::exit;

use clap::Parser;
use log::LevelFilter;

/// Zip, Unzip, Test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
    Test,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Define the two output channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    File,
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Parser, Debug)]
#[clap(
    version,
    about = "huff, a whole-file Huffman compressor.",
    long_about = None)]
struct Args {
    /// Filename of file to process
    #[clap()]
    filename: Option<String>,

    /// Perform compression on the input file
    #[clap(short = 'z', long = "zip")]
    compress: bool,

    /// Perform decompression on the input file
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// Test compressed file integrity without writing output
    #[clap(short = 't', long = "test")]
    test: bool,

    /// Force overwriting the output file
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Keep the input file
    #[clap(short = 'k', long = "keep")]
    keep: bool,

    /// Send output to the terminal
    #[clap(short = 'c', long = "stdout")]
    stdout: bool,

    /// Sets verbosity. -v 1 shows very little, -v 5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,
}

/// Options that drive one compression/decompression run.
#[derive(Debug)]
pub struct HuffOpts {
    /// Name of the file to read for input
    pub file: String,
    /// Compress/Decompress/Test
    pub op_mode: Mode,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Don't remove input files after processing
    pub keep_input_files: bool,
    /// Location where output is sent
    pub output: Output,
    /// Verbosity of user information
    pub log_level: LevelFilter,
}

/// Parse the command line into a HuffOpts. Exits with a message when no
/// input file was named.
pub fn huffopts_init() -> HuffOpts {
    let args = Args::parse();

    let file = match args.filename {
        Some(f) => f,
        None => {
            eprintln!("huff: no input file given. Try --help.");
            exit(1);
        }
    };

    // Compression is the default; -z merely states it. -t wins over both.
    let op_mode = if args.test {
        Mode::Test
    } else if args.decompress && !args.compress {
        Mode::Unzip
    } else {
        Mode::Zip
    };

    let log_level = match args.v {
        0 | 1 => LevelFilter::Error,
        2 => LevelFilter::Warn,
        3 => LevelFilter::Info,
        4 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    HuffOpts {
        file,
        op_mode,
        force_overwrite: args.force,
        // Writing to stdout never consumes the input file
        keep_input_files: args.keep || args.stdout,
        output: if args.stdout {
            Output::Stdout
        } else {
            Output::File
        },
        log_level,
    }
}
