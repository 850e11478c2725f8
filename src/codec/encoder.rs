// src/codec/encoder.rs

use super::{CodecParams, ReverseMap};
use crate::bits::BitWriter;
use crate::tree::{build_tree, write_tree, CodeTree, FrequencyTable, Symbol};
use crate::utils::error::{HuffError, Result};
use crate::utils::progress::{NoProgress, ProgressObserver, ProgressTicker};
use std::io::{BufReader, Read, Seek, SeekFrom, Write};

/// Sizes gathered while encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeStats {
    pub input_bytes: u64,
    /// Bytes written, including the final padded byte.
    pub output_bytes: u64,
    pub tree_bits: u64,
    /// Codeword bits, end-of-stream codeword included.
    pub payload_bits: u64,
}

/// Compresses byte streams into the tree-plus-codewords format.
///
/// Each call builds a fresh tree from the data it is given; nothing carries
/// over between calls.
pub struct Encoder<P: ProgressObserver = NoProgress> {
    params: CodecParams,
    progress: P,
}

impl Encoder<NoProgress> {
    pub fn new() -> Self {
        Self {
            params: CodecParams::default(),
            progress: NoProgress,
        }
    }
}

impl Default for Encoder<NoProgress> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ProgressObserver> Encoder<P> {
    pub fn with_params(mut self, params: CodecParams) -> Self {
        self.params = params;
        self
    }

    /// Replaces the progress observer. Progress is counted in input bytes.
    pub fn with_progress<Q: ProgressObserver>(self, progress: Q) -> Encoder<Q> {
        Encoder {
            params: self.params,
            progress,
        }
    }

    /// Encodes an in-memory buffer.
    pub fn encode<W: Write>(&mut self, input: &[u8], output: W) -> Result<EncodeStats> {
        let table = FrequencyTable::from_bytes(input);
        let mut session = Session::start(&table, output)?;
        let mut ticker = ProgressTicker::new(self.params.progress_interval);
        session.emit(input, &mut ticker, &mut self.progress)?;
        let stats = session.finish()?;
        self.progress.on_finish(stats.input_bytes);
        Ok(stats)
    }

    /// Encodes a rewindable stream in two passes.
    ///
    /// The first pass counts byte frequencies, the stream is then rewound to
    /// its starting position and read again to emit codewords.
    pub fn encode_reader<R: Read + Seek, W: Write>(
        &mut self,
        mut input: R,
        output: W,
    ) -> Result<EncodeStats> {
        let start = input.stream_position()?;
        let table = FrequencyTable::from_reader(BufReader::with_capacity(
            self.params.buffer_size,
            &mut input,
        ))?;
        input.seek(SeekFrom::Start(start))?;
        log::debug!("counted {} input bytes, rewinding", table.total());

        let mut session = Session::start(&table, output)?;
        let mut ticker = ProgressTicker::new(self.params.progress_interval);
        let mut buf = vec![0u8; self.params.buffer_size];
        loop {
            let n = match input.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            session.emit(&buf[..n], &mut ticker, &mut self.progress)?;
        }
        if session.stats.input_bytes != table.total() {
            return Err(HuffError::InvalidArg(format!(
                "input changed between passes: counted {} bytes, read {}",
                table.total(),
                session.stats.input_bytes
            )));
        }
        let stats = session.finish()?;
        self.progress.on_finish(stats.input_bytes);
        Ok(stats)
    }
}

/// One encode run: the tree has been written and codewords are flowing.
struct Session<W: Write> {
    writer: BitWriter<W>,
    codes: ReverseMap,
    expected: u64,
    stats: EncodeStats,
}

impl<W: Write> Session<W> {
    fn start(table: &FrequencyTable, output: W) -> Result<Self> {
        let tree: CodeTree = build_tree(table).tree;
        let mut writer = BitWriter::new(output);
        write_tree(&tree, &mut writer)?;
        let tree_bits = writer.bits_written();
        let codes = ReverseMap::from_tree(&tree);
        log::debug!(
            "wrote code tree: {} bits, {} symbols",
            tree_bits,
            codes.len()
        );
        Ok(Self {
            writer,
            codes,
            expected: table.total(),
            stats: EncodeStats {
                tree_bits,
                ..EncodeStats::default()
            },
        })
    }

    fn emit<P: ProgressObserver>(
        &mut self,
        chunk: &[u8],
        ticker: &mut ProgressTicker,
        progress: &mut P,
    ) -> Result<()> {
        for &byte in chunk {
            if ticker.tick() {
                progress.on_progress(self.stats.input_bytes, self.expected);
            }
            let code = self.codes.get(Symbol::Byte(byte)).ok_or_else(|| {
                HuffError::InvalidArg(format!("byte 0x{:02X} has no codeword", byte))
            })?;
            self.writer.write_codeword(code)?;
            self.stats.input_bytes += 1;
        }
        Ok(())
    }

    fn finish(mut self) -> Result<EncodeStats> {
        let end = self
            .codes
            .get(Symbol::End)
            .ok_or_else(|| HuffError::InvalidTree("tree has no end marker".to_string()))?;
        self.writer.write_codeword(end)?;

        let total_bits = self.writer.bits_written();
        self.stats.payload_bits = total_bits - self.stats.tree_bits;
        self.stats.output_bytes = total_bits.div_ceil(8);
        self.writer.finish()?;
        log::debug!(
            "encoded {} bytes into {} bytes",
            self.stats.input_bytes,
            self.stats.output_bytes
        );
        Ok(self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io::Cursor;

    #[test]
    fn test_empty_input_is_bare_end_marker() {
        let mut out = Vec::new();
        let stats = Encoder::new().encode(&[], &mut out).unwrap();
        assert_eq!(stats.tree_bits, 10);
        assert_eq!(stats.payload_bits, 0);
        assert_eq!(out, vec![0x00, 0b0100_0000]);
    }

    #[test]
    fn test_single_value_layout() {
        // tree: 1 | 0 00000000 1 | 0 01100001   (end marker left, 'a' right)
        // data: 1 1 1 1, end: 0
        let mut out = Vec::new();
        let stats = Encoder::new().encode(b"aaaa", &mut out).unwrap();
        assert_eq!(stats.tree_bits, 20);
        assert_eq!(stats.payload_bits, 5);
        assert_eq!(stats.output_bytes, 4);
        assert_eq!(out, vec![0b1000_0000, 0b0010_0110, 0b0001_1111, 0b0000_0000]);
    }

    #[test]
    fn test_reader_matches_slice() {
        let data = b"abracadabra, abracadabra".repeat(50);
        let mut from_slice = Vec::new();
        Encoder::new().encode(&data, &mut from_slice).unwrap();

        let mut from_reader = Vec::new();
        let params = CodecParams::default().with_buffer_size(7);
        Encoder::new()
            .with_params(params)
            .encode_reader(Cursor::new(&data), &mut from_reader)
            .unwrap();
        assert_eq!(from_slice, from_reader);
    }

    #[test]
    fn test_reader_starts_at_current_position() {
        let data = b"xxxxhello";
        let mut cursor = Cursor::new(&data[..]);
        cursor.set_position(4);
        let mut a = Vec::new();
        let stats = Encoder::new().encode_reader(cursor, &mut a).unwrap();
        assert_eq!(stats.input_bytes, 5);
        let mut b = Vec::new();
        Encoder::new().encode(b"hello", &mut b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_progress_is_reported() {
        let calls = RefCell::new(Vec::new());
        let finished = RefCell::new(0u64);

        struct Recorder<'a> {
            calls: &'a RefCell<Vec<(u64, u64)>>,
            finished: &'a RefCell<u64>,
        }
        impl ProgressObserver for Recorder<'_> {
            fn on_progress(&mut self, done: u64, total: u64) {
                self.calls.borrow_mut().push((done, total));
            }
            fn on_finish(&mut self, total: u64) {
                *self.finished.borrow_mut() = total;
            }
        }

        let data = vec![7u8; 25];
        let mut encoder = Encoder::new()
            .with_params(CodecParams::default().with_progress_interval(10))
            .with_progress(Recorder {
                calls: &calls,
                finished: &finished,
            });
        encoder.encode(&data, Vec::new()).unwrap();
        assert_eq!(*calls.borrow(), vec![(0, 25), (10, 25), (20, 25)]);
        assert_eq!(*finished.borrow(), 25);
    }

    #[test]
    fn test_output_is_byte_aligned_with_zero_padding() {
        let data = b"padding check!";
        let mut out = Vec::new();
        let stats = Encoder::new().encode(data, &mut out).unwrap();
        let total = stats.tree_bits + stats.payload_bits;
        assert_eq!(out.len() as u64, total.div_ceil(8));
        let used = (total % 8) as u32;
        if used != 0 {
            let last = *out.last().unwrap();
            assert_eq!(last & (0xFFu8 >> used), 0);
        }
    }
}
