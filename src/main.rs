//! Huffman file compressor.
//!
//! ## Usage
//!
//! ```bash
//! # Compress
//! huffman compress input.txt input.huf
//!
//! # Decompress
//! huffman decompress input.huf output.txt
//!
//! # Inspect the tree a file would get, or the tree stored in a compressed file
//! huffman make-tree input.txt tree.txt
//! huffman read-tree input.huf tree.txt
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{error, info};

use huffman_codec::utils::log::{init_subscriber, Level};
use huffman_codec::{
    decode_file, encode_file, make_tree, read_tree_dump, CodecParams, ProgressObserver,
};

#[derive(Parser, Debug)]
#[command(name = "huffman")]
#[command(version)]
#[command(about = "Compress and decompress files with a static Huffman code", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Do not draw the progress spinner
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Log codec internals to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Bytes between progress updates
    #[arg(long, default_value = "100000", global = true)]
    progress_interval: u64,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compress <INPUT> into <OUTPUT>
    #[command(visible_alias = "c")]
    Compress { input: PathBuf, output: PathBuf },

    /// Decompress <INPUT> into <OUTPUT>
    #[command(visible_alias = "u")]
    Decompress { input: PathBuf, output: PathBuf },

    /// Write the code tree <INPUT> would be compressed with
    MakeTree { input: PathBuf, output: PathBuf },

    /// Write the code tree stored in compressed file <INPUT>
    ReadTree { input: PathBuf, output: PathBuf },
}

const SPINNER: [char; 4] = ['|', '\\', '-', '/'];

/// Draws a rotating spinner and a percentage on stderr.
struct Spinner {
    pos: usize,
    enabled: bool,
}

impl Spinner {
    fn new(enabled: bool) -> Self {
        Self { pos: 0, enabled }
    }
}

impl ProgressObserver for Spinner {
    fn on_progress(&mut self, done: u64, total: u64) {
        if !self.enabled {
            return;
        }
        let percent = if total == 0 { 0 } else { done * 100 / total };
        let mut stderr = std::io::stderr().lock();
        let _ = write!(stderr, "\r{} {}%", SPINNER[self.pos], percent.min(100));
        let _ = stderr.flush();
        self.pos = (self.pos + 1) % SPINNER.len();
    }

    fn on_finish(&mut self, _total: u64) {
        if self.enabled {
            eprintln!("\r  100%");
        }
    }
}

fn run(args: Args) -> huffman_codec::Result<()> {
    let params = CodecParams::new().with_progress_interval(args.progress_interval);
    let spinner = Spinner::new(!args.quiet);

    match args.command {
        Command::Compress { input, output } => {
            let stats = encode_file(&input, &output, params, spinner)?;
            info!(
                "{} -> {} bytes ({} tree bits, {} payload bits)",
                stats.input_bytes, stats.output_bytes, stats.tree_bits, stats.payload_bits
            );
        }
        Command::Decompress { input, output } => {
            let stats = decode_file(&input, &output, params, spinner)?;
            info!("{} -> {} bytes", stats.input_bytes, stats.output_bytes);
        }
        Command::MakeTree { input, output } => {
            std::fs::write(&output, make_tree(&input)?)?;
        }
        Command::ReadTree { input, output } => {
            std::fs::write(&output, read_tree_dump(&input)?)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    init_subscriber(level);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
