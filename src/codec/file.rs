// src/codec/file.rs

//! Path-based entry points used by the command-line tool.

use super::{CodecParams, DecodeStats, Decoder, EncodeStats, Encoder};
use crate::bits::BitReader;
use crate::tree::{dump_tree, read_tree, CodeTree, FrequencyTable};
use crate::utils::error::Result;
use crate::utils::progress::ProgressObserver;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Compresses the file at `input` into a new file at `output`.
pub fn encode_file<P: ProgressObserver>(
    input: &Path,
    output: &Path,
    params: CodecParams,
    progress: P,
) -> Result<EncodeStats> {
    let reader = File::open(input)?;
    let writer = BufWriter::with_capacity(params.buffer_size, File::create(output)?);
    log::info!("compressing {} -> {}", input.display(), output.display());
    Encoder::new()
        .with_params(params)
        .with_progress(progress)
        .encode_reader(reader, writer)
}

/// Expands the compressed file at `input` into a new file at `output`.
///
/// On failure the bytes decoded before the error remain in `output`.
pub fn decode_file<P: ProgressObserver>(
    input: &Path,
    output: &Path,
    params: CodecParams,
    progress: P,
) -> Result<DecodeStats> {
    let file = File::open(input)?;
    let input_len = file.metadata()?.len();
    let reader = BufReader::with_capacity(params.buffer_size, file);
    let writer = BufWriter::with_capacity(params.buffer_size, File::create(output)?);
    log::info!("decompressing {} -> {}", input.display(), output.display());
    Decoder::new()
        .with_params(params)
        .with_progress(progress)
        .decode_sized(reader, input_len, writer)
}

/// Builds the tree an input file would be compressed with and renders it.
pub fn make_tree(input: &Path) -> Result<String> {
    let table = FrequencyTable::from_reader(BufReader::new(File::open(input)?))?;
    Ok(dump_tree(&CodeTree::from_frequencies(&table)))
}

/// Reads the tree stored at the start of a compressed file and renders it.
pub fn read_tree_dump(input: &Path) -> Result<String> {
    let mut reader = BitReader::new(BufReader::new(File::open(input)?));
    Ok(dump_tree(&read_tree(&mut reader)?))
}
