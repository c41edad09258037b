use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

use log::{debug, info};

use crate::bitstream::bitreader::BitReader;
use crate::error::HuffError;
use crate::huffman_coding::header::read_tree;
use crate::huffman_coding::huffman::{NodeData, PSEUDO_EOF};
use crate::tools::cli::{HuffOpts, Output};

use super::{EXTENSION, MAGIC};

/// Decompress a huff stream read from `source`. Verifies the magic, rebuilds
/// the tree from the header, then walks the tree bit by bit until the
/// end-of-stream code is found. Returns the recovered bytes.
pub fn decompress_data<R: Read>(source: R) -> Result<Vec<u8>, HuffError> {
    let mut br = BitReader::new(source);

    // Reject foreign input before producing a single byte
    let magic = br.bits(32).ok_or(HuffError::TruncatedHeader)? as u32;
    if magic != MAGIC {
        return Err(HuffError::BadMagic { found: magic });
    }
    debug!("Found a valid huff signature.");

    let root = read_tree(&mut br)?;
    debug!("rebuilt a tree with {} leaves", root.leaves());

    // An empty payload serializes as a bare end-of-stream leaf with a
    // zero-length code, so there is nothing further to read. A bare leaf
    // holding anything else would decode forever; our encoder never writes
    // one.
    if let NodeData::Leaf(sym) = root.data {
        return if sym == PSEUDO_EOF {
            Ok(Vec::new())
        } else {
            Err(HuffError::InvalidHeader(
                "single-leaf tree without the end-of-stream symbol",
            ))
        };
    }

    let mut out = Vec::new();
    let mut current = &root;
    loop {
        let bit = br.bit().ok_or(HuffError::TruncatedPayload)?;
        current = match &current.data {
            NodeData::Kids(left, right) => {
                if bit == 0 {
                    left.as_ref()
                } else {
                    right.as_ref()
                }
            }
            // The walk resets to the (internal) root after every emit
            NodeData::Leaf(_) => unreachable!("walk restarted on a leaf"),
        };
        if let NodeData::Leaf(sym) = current.data {
            if sym == PSEUDO_EOF {
                break;
            }
            out.push(sym as u8);
            current = &root;
        }
    }
    Ok(out)
}

/// Decompress the `.hf` file named in opts (HuffOpts), restoring the original
/// name, or writing to stdout with -c. Honors --force and --keep.
pub fn decompress(opts: &HuffOpts) -> Result<(), HuffError> {
    let out = decompress_data(File::open(&opts.file)?)?;
    info!("Recovered {} bytes from {}.", out.len(), &opts.file);

    match opts.output {
        Output::Stdout => io::stdout().write_all(&out)?,
        Output::File => {
            let fname = match opts.file.strip_suffix(EXTENSION) {
                Some(base) => base.to_string(),
                None => {
                    return Err(HuffError::Io(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("{} does not end in {}", opts.file, EXTENSION),
                    )))
                }
            };
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

/// Decompress to memory and discard the result, reporting integrity only.
pub fn test_integrity(opts: &HuffOpts) -> Result<(), HuffError> {
    let out = decompress_data(File::open(&opts.file)?)?;
    info!("{} is a valid huff file ({} bytes).", &opts.file, out.len());
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::compression::compress::compress_data;

    fn round_trip(data: &[u8]) -> Vec<u8> {
        let packed = compress_data(data, Vec::new()).unwrap();
        decompress_data(packed.as_slice()).unwrap()
    }

    #[test]
    fn empty_round_trip() {
        assert_eq!(round_trip(&[]), Vec::<u8>::new());
    }

    #[test]
    fn single_symbol_round_trip() {
        assert_eq!(round_trip(&[0x41; 1000]), vec![0x41; 1000]);
    }

    #[test]
    fn text_round_trip() {
        let data = b"If Peter Piper picked a peck of pickled peppers...".as_slice();
        assert_eq!(round_trip(data), data);
    }

    #[test]
    fn all_byte_values_round_trip() {
        let data: Vec<u8> = (0_u8..=255).cycle().take(4096).collect();
        assert_eq!(round_trip(&data), data);
    }

    #[test]
    fn binary_blob_round_trip() {
        // Deterministic pseudo-random bytes, no external crates needed
        let mut state = 0x2545_F491_4F6C_DD1D_u64;
        let data: Vec<u8> = (0..10_000)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                state as u8
            })
            .collect();
        assert_eq!(round_trip(&data), data);
    }

    #[test]
    fn bad_magic_is_rejected_with_no_output() {
        let err = decompress_data(b"this is plain text".as_slice()).unwrap_err();
        match err {
            HuffError::BadMagic { found } => assert_eq!(found, u32::from_be_bytes(*b"this")),
            other => panic!("expected BadMagic, got {:?}", other),
        }
    }

    #[test]
    fn stream_shorter_than_magic_is_truncated() {
        let err = decompress_data([0xFA, 0xCE].as_slice()).unwrap_err();
        assert!(matches!(err, HuffError::TruncatedHeader));
    }

    #[test]
    fn truncated_payload_is_detected() {
        let mut packed = compress_data(b"hello world, hello huff", Vec::new()).unwrap();
        // The last data bit on the stream belongs to the end-of-stream code,
        // so dropping the final byte always cuts it off.
        packed.truncate(packed.len() - 1);
        let err = decompress_data(packed.as_slice()).unwrap_err();
        assert!(matches!(err, HuffError::TruncatedPayload));
    }

    #[test]
    fn truncated_tree_is_detected() {
        let packed = compress_data(b"abracadabra", Vec::new()).unwrap();
        // Keep the magic and one header byte only
        let err = decompress_data(&packed[..5]).unwrap_err();
        assert!(matches!(err, HuffError::TruncatedHeader));
    }
}
