//! BitReader: the input side of the huff bitstream.
//!
//! Reads a packed bitstream for the bit-granular deconstruction of huff
//! compressed files. Every read returns an Option: `None` means the
//! underlying source is exhausted, which the decoder turns into the
//! appropriate truncation error.
//!
//! NOTE: This module can read from any I/O source that supports the read() call.

use super::bitwriter::MAX_WIDTH;

const BUFFER_SIZE: usize = 64 * 1024;

/// Reads bit values of any width up to [`MAX_WIDTH`] from a byte source.
#[derive(Debug)]
pub struct BitReader<R> {
    /// Source bytes not yet moved into the queue.
    buffer: Vec<u8>,
    /// Next unread position in the buffer.
    cursor: usize,
    /// Bits read from the buffer but not yet handed to the caller.
    queue: u64,
    /// Count of valid bits in the queue.
    q_bits: u8,
    source: R,
}

impl<R: std::io::Read> BitReader<R> {
    /// Creates a new BitReader (with a 64k buffer).
    pub fn new(source: R) -> Self {
        Self {
            buffer: Vec::new(),
            cursor: 0,
            queue: 0,
            q_bits: 0,
            source,
        }
    }

    /// Next byte from the buffer, refilling it from the source as needed.
    /// Returns None when the source is exhausted.
    fn next_byte(&mut self) -> Option<u8> {
        if self.cursor == self.buffer.len() {
            self.buffer.resize(BUFFER_SIZE, 0);
            let size = self
                .source
                .read(&mut self.buffer)
                .expect("Unable to read source data");
            // If nothing came back from our read attempt, we have no more data.
            if size == 0 {
                self.buffer.clear();
                self.cursor = 0;
                return None;
            }
            // Adjust the buffer if we read less than the buffer size
            self.buffer.truncate(size);
            self.cursor = 0;
        }
        let byte = self.buffer[self.cursor];
        self.cursor += 1;
        Some(byte)
    }

    /// Top the queue up to at least `need` bits. False means the stream holds
    /// fewer than `need` bits in total.
    fn fill(&mut self, need: u8) -> bool {
        while self.q_bits < need {
            match self.next_byte() {
                Some(byte) => {
                    self.queue = (self.queue << 8) | byte as u64;
                    self.q_bits += 8;
                }
                None => return false,
            }
        }
        true
    }

    /// Return Option<u64> of the next `n` bits (MSB first), or None if fewer
    /// than `n` bits remain.
    pub fn bits(&mut self, n: u8) -> Option<u64> {
        debug_assert!(n <= MAX_WIDTH, "bit width {} exceeds {}", n, MAX_WIDTH);
        if n == 0 {
            return Some(0);
        }
        if !self.fill(n) {
            return None;
        }
        self.q_bits -= n;
        Some((self.queue >> self.q_bits) & (u64::MAX >> (64 - n)))
    }

    /// Return the next bit as Option<u8> (1 or 0), or None if there is no
    /// more data to read.
    pub fn bit(&mut self) -> Option<u8> {
        self.bits(1).map(|bit| bit as u8)
    }

    /// Return Option<bool>, *true* if the next bit is 1, *false* if 0,
    /// consuming the bit, or None if there is no more data to read.
    pub fn bool_bit(&mut self) -> Option<bool> {
        self.bits(1).map(|bit| bit == 1)
    }
}
