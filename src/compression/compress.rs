use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

use log::{debug, info, trace};

use crate::bitstream::bitwriter::BitWriter;
use crate::error::HuffError;
use crate::huffman_coding::header::write_tree;
use crate::huffman_coding::huffman::{build_tree, code_table, PSEUDO_EOF};
use crate::tools::cli::{HuffOpts, Output};
use crate::tools::freq_count::freqs;

use super::{EXTENSION, MAGIC};

/// Compress `data` into a huff stream written through `sink`. Returns the
/// sink after the final partial byte has been padded and flushed.
pub fn compress_data<W: Write>(data: &[u8], sink: W) -> Result<W, HuffError> {
    // Pass one: count, then shape the code book
    let table = freqs(data);
    let root = build_tree(&table);
    let codes = code_table(&root);
    debug!("code table holds {} symbols", codes.len());

    let mut bw = BitWriter::new(sink);
    bw.out32(MAGIC);
    write_tree(&root, &mut bw);
    trace!("tree header written, payload starts at {}", bw.loc());

    // Pass two: emit one code per input byte. Every byte seen in pass one
    // has an entry, so the lookups cannot miss.
    for &byte in data {
        let code = codes[&(byte as u16)];
        bw.out_bits(code.bits, code.len);
    }

    // The end-of-stream code lets the decoder stop ahead of the pad bits
    let eof = codes[&PSEUDO_EOF];
    bw.out_bits(eof.bits, eof.len);
    trace!("payload ends at {}", bw.loc());

    Ok(bw.finish()?)
}

/// Compress the file named in opts (HuffOpts) to `<file>.hf`, or to stdout
/// with -c. Honors --force and --keep.
pub fn compress(opts: &HuffOpts) -> Result<(), HuffError> {
    let mut fin = File::open(&opts.file)?;
    let mut data = Vec::with_capacity(fs::metadata(&opts.file)?.len() as usize);
    fin.read_to_end(&mut data)?;
    info!("Read {} bytes from {}", data.len(), &opts.file);

    let out = compress_data(&data, Vec::new())?;
    info!(
        "Compressed {} bytes to {} bytes ({:.1}%).",
        data.len(),
        out.len(),
        out.len() as f64 * 100.0 / data.len().max(1) as f64
    );

    match opts.output {
        Output::Stdout => io::stdout().write_all(&out)?,
        Output::File => {
            let mut fname = opts.file.clone();
            fname.push_str(EXTENSION);
            if !opts.force_overwrite && Path::new(&fname).exists() {
                return Err(HuffError::Io(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("{} exists; use --force to overwrite", fname),
                )));
            }
            fs::write(&fname, &out)?;
            info!("Wrote {}.", fname);
            if !opts.keep_input_files {
                fs::remove_file(&opts.file)?;
            }
        }
    }
    Ok(())
}
