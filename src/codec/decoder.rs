// src/codec/decoder.rs

use super::CodecParams;
use crate::bits::BitReader;
use crate::tree::{read_tree, CodeTree};
use crate::utils::error::{DecodeStage, HuffError, Result};
use crate::utils::progress::{NoProgress, ProgressObserver, ProgressTicker};
use std::io::{Read, Write};

/// Sizes gathered while decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeStats {
    /// Whole bytes pulled from the compressed input.
    pub input_bytes: u64,
    pub output_bytes: u64,
    pub tree_bits: u64,
    pub payload_bits: u64,
}

/// Expands streams produced by [`Encoder`](super::Encoder).
pub struct Decoder<P: ProgressObserver = NoProgress> {
    params: CodecParams,
    progress: P,
}

impl Decoder<NoProgress> {
    pub fn new() -> Self {
        Self {
            params: CodecParams::default(),
            progress: NoProgress,
        }
    }
}

impl Default for Decoder<NoProgress> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ProgressObserver> Decoder<P> {
    pub fn with_params(mut self, params: CodecParams) -> Self {
        self.params = params;
        self
    }

    /// Replaces the progress observer. Progress is counted in compressed bytes
    /// consumed, against the compressed input size when one is known.
    pub fn with_progress<Q: ProgressObserver>(self, progress: Q) -> Decoder<Q> {
        Decoder {
            params: self.params,
            progress,
        }
    }

    /// Reads the tree and then the payload from `input`.
    pub fn decode<R: Read, W: Write>(&mut self, input: R, output: W) -> Result<DecodeStats> {
        self.decode_sized(input, 0, output)
    }

    /// Like [`decode`](Self::decode), with the compressed size passed on to
    /// progress observers.
    pub fn decode_sized<R: Read, W: Write>(
        &mut self,
        input: R,
        input_len: u64,
        output: W,
    ) -> Result<DecodeStats> {
        let mut reader = BitReader::new(input);
        let tree = read_tree(&mut reader)?;
        let tree_bits = reader.bits_read();
        let mut stats = self.decode_payload(&tree, &mut reader, input_len, output)?;
        stats.tree_bits = tree_bits;
        stats.payload_bits -= tree_bits;
        Ok(stats)
    }

    /// Decodes the payload from a reader positioned right after `tree`.
    ///
    /// A tree that is a single byte leaf is rejected as
    /// [`HuffError::InvalidTree`], since it can never reach an end marker.
    pub fn decode_with_tree<R: Read, W: Write>(
        &mut self,
        tree: &CodeTree,
        reader: &mut BitReader<R>,
        output: W,
    ) -> Result<DecodeStats> {
        if let CodeTree::Leaf(value) = tree {
            return Err(HuffError::InvalidTree(format!(
                "root is a lone leaf 0x{:02X}",
                value
            )));
        }
        let start = reader.bits_read();
        let mut stats = self.decode_payload(tree, reader, 0, output)?;
        stats.payload_bits -= start;
        Ok(stats)
    }

    /// Walks the tree bit by bit, emitting a byte at every leaf, until the
    /// end marker is reached. Whatever was produced before a failure stays
    /// written to `output`.
    fn decode_payload<R: Read, W: Write>(
        &mut self,
        tree: &CodeTree,
        reader: &mut BitReader<R>,
        input_len: u64,
        mut output: W,
    ) -> Result<DecodeStats> {
        let mut ticker = ProgressTicker::new(self.params.progress_interval);
        let mut written = 0u64;
        let mut node = tree;

        let result = loop {
            match node {
                CodeTree::Internal(left, right) => match reader.read_bit() {
                    Ok(false) => node = &**left,
                    Ok(true) => node = &**right,
                    Err(e) => break Err(HuffError::at_stage(e, DecodeStage::Payload)),
                },
                CodeTree::Leaf(value) => {
                    if ticker.tick() {
                        self.progress.on_progress(reader.bytes_consumed(), input_len);
                    }
                    if let Err(e) = output.write_all(&[*value]) {
                        break Err(HuffError::Io(e));
                    }
                    written += 1;
                    node = tree;
                }
                CodeTree::EndMarker => break Ok(()),
            }
        };

        let flushed = output.flush();
        if let Err(err) = result {
            log::debug!("decode stopped after {} bytes: {}", written, err);
            return Err(err);
        }
        flushed?;

        let stats = DecodeStats {
            input_bytes: reader.bytes_consumed(),
            output_bytes: written,
            tree_bits: 0,
            payload_bits: reader.bits_read(),
        };
        self.progress.on_finish(written);
        log::debug!(
            "decoded {} bytes from {} bytes",
            stats.output_bytes,
            stats.input_bytes
        );
        Ok(stats)
    }
}
