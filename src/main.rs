//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use huff::compression::compress::compress;
use huff::compression::decompress::{decompress, test_integrity};
use huff::tools::cli::{huffopts_init, Mode};

use log::{error, info};
use simplelog::{Config, TermLogger, TerminalMode};

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    let options = huffopts_init();

    // Available log levels are Error, Warn, Info, Debug, Trace
    TermLogger::init(
        options.log_level,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::AlwaysAnsi,
    )
    .unwrap();

    //----- Figure out what we need to do and go do it
    let result = match options.op_mode {
        Mode::Zip => compress(&options),
        Mode::Unzip => decompress(&options),
        Mode::Test => test_integrity(&options),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
    info!("Done.\n");
}
