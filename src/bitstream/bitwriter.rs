//! BitWriter: the output side of the huff bitstream.
//!
//! Huffman codes are variable-length bit strings, so the writer accepts values
//! of any width up to [`MAX_WIDTH`] bits and packs them MSB-first into bytes.
//! The final partial byte is zero-padded when the writer is finished.
//!
//! NOTE: This module can write to any I/O sink that supports the write() call.

/// Widest single value the writer accepts. The queue is a u64 and holds up to
/// 7 leftover bits between calls, so 56 is the safe ceiling.
pub const MAX_WIDTH: u8 = 56;

/// Packs variable-width bit values into a byte stream.
pub struct BitWriter<W> {
    /// Completed bytes waiting to be written to the sink.
    output: Vec<u8>,
    /// Private queue to hold bits that do not yet fill a whole byte.
    queue: u64,
    /// Count of valid bits in the queue.
    q_bits: u8,
    /// Count of all bits pushed so far. Used for position reporting.
    written: u64,
    /// Handle to the output sink.
    sink: W,
}

impl<W: std::io::Write> BitWriter<W> {
    /// Create a new BitWriter over the given sink.
    pub fn new(sink: W) -> Self {
        Self {
            output: Vec::new(),
            queue: 0,
            q_bits: 0,
            written: 0,
            sink,
        }
    }

    /// Put the low `n` bits of `value` on the stream, most significant bit
    /// first. `n` may be 0 (writes nothing) up to [`MAX_WIDTH`].
    pub fn out_bits(&mut self, value: u64, n: u8) {
        debug_assert!(n <= MAX_WIDTH, "bit width {} exceeds {}", n, MAX_WIDTH);
        if n == 0 {
            return;
        }
        // Empty the queue down to a partial byte so the shift cannot overflow
        self.push_queue();
        self.queue = (self.queue << n) | (value & (u64::MAX >> (64 - n)));
        self.q_bits += n;
        self.written += n as u64;
    }

    /// Put a byte on the stream.
    pub fn out8(&mut self, data: u8) {
        self.out_bits(data as u64, 8);
    }

    /// Put a 32 bit word on the stream.
    pub fn out32(&mut self, data: u32) {
        self.out_bits(data as u64, 32);
    }

    /// Move all full bytes from the queue into the output buffer.
    fn push_queue(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte);
            self.q_bits -= 8;
        }
    }

    /// Report the current position as [byte.bit]. Used in trace logging.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.written / 8, self.written % 8)
    }

    /// Pad the final partial byte with zeros in the least significant bits,
    /// write everything to the sink and flush it. Returns the sink.
    /// MUST be called before the output is used or bits may be left in the
    /// internal queue.
    pub fn finish(mut self) -> std::io::Result<W> {
        self.push_queue();
        if self.q_bits > 0 {
            let byte = ((self.queue << (8 - self.q_bits)) & 0xff) as u8;
            self.output.push(byte);
            self.q_bits = 0;
        }
        self.sink.write_all(&self.output)?;
        self.sink.flush()?;
        Ok(self.sink)
    }
}

#[cfg(test)]
mod test {
    use super::BitWriter;

    #[test]
    fn out8_test() {
        let mut bw = BitWriter::new(Vec::new());
        bw.out8(b'x');
        let out = bw.finish().unwrap();
        assert_eq!(out, "x".as_bytes());
    }

    #[test]
    fn pad_test() {
        let mut bw = BitWriter::new(Vec::new());
        bw.out8(255);
        bw.out_bits(0b111, 3);
        let out = bw.finish().unwrap();
        assert_eq!(out, vec![255, 0b1110_0000]);
    }

    #[test]
    fn out32_test() {
        let mut bw = BitWriter::new(Vec::new());
        bw.out32(0xFACE_8201);
        let out = bw.finish().unwrap();
        assert_eq!(out, vec![0xFA, 0xCE, 0x82, 0x01]);
    }

    #[test]
    fn mixed_width_test() {
        let mut bw = BitWriter::new(Vec::new());
        bw.out_bits(1, 1);
        bw.out_bits(256, 9);
        bw.out_bits(0, 0); // no-op
        bw.out_bits(0b11, 2);
        let out = bw.finish().unwrap();
        // 1 100000000 11 + 4 pad bits
        assert_eq!(out, vec![0b1100_0000, 0b0011_0000]);
    }

    #[test]
    fn masks_high_bits_test() {
        let mut bw = BitWriter::new(Vec::new());
        // Only the low 2 bits of the value may appear on the stream
        bw.out_bits(0xffff_fffd, 2);
        bw.out_bits(0, 6);
        let out = bw.finish().unwrap();
        assert_eq!(out, vec![0b0100_0000]);
    }

    #[test]
    fn loc_test() {
        let mut bw = BitWriter::new(Vec::new());
        bw.out32(0);
        bw.out_bits(0b101, 3);
        assert_eq!(bw.loc(), "[4.3]");
    }
}
