//! CLI argument definitions for the Sonus command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic. Multi-word flags are spelled
//! with underscores (`--outfile_format`, `--tmp_dir`, `--chunk_size`).

use clap::{ArgAction, Parser, Subcommand};

/// Sonus - audio conversion, inspection, splitting and WER scoring
#[derive(Parser, Debug)]
#[command(name = "sonus")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of plain lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert an audio file to another format and channel count
    Convert {
        /// Path to the input audio file
        #[arg(long)]
        infile: String,

        /// Path of the converted file
        #[arg(long)]
        outfile: String,

        /// Format of the converted file (wav, raw; mp3, flac, ogg, ... via ffmpeg)
        #[arg(long = "outfile_format")]
        outfile_format: String,

        /// Number of channels in the converted file
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
        channels: Option<u16>,
    },

    /// Print path, size and stream metadata of an audio file
    Details {
        /// Path to the input audio file
        #[arg(long)]
        infile: String,
    },

    /// Split an audio file into chunks of roughly `chunk_size` KB
    Split {
        /// Path to the input audio file
        #[arg(long)]
        infile: String,

        /// Directory prefix for the chunk files
        #[arg(long = "tmp_dir")]
        tmp_dir: String,

        /// Target chunk size in KB
        #[arg(long = "chunk_size", allow_negative_numbers = true)]
        chunk_size: i64,
    },

    /// Compute the word error rate of a hypothesis against a reference
    Wer {
        /// Reference transcript
        #[arg(long)]
        reference: String,

        /// Hypothesis transcript
        #[arg(long)]
        hypothesis: String,

        /// Also print hit, substitution, deletion and insertion counts
        #[arg(long)]
        measures: bool,
    },
}
