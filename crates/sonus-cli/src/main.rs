//! Sonus CLI - audio conversion, inspection, splitting and WER scoring
//!
//! Every subcommand prints its result on stdout and exits 0, or prints the
//! error message on stdout and exits 1.

use clap::error::ErrorKind;
use clap::Parser;
use sonus_audio::DefaultCodec;
use std::process::ExitCode;

use sonus_cli::cli_args::{Cli, Commands};
use sonus_cli::{commands, logging, output};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print().ok();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let json = std::env::args_os().any(|arg| arg == "--json");
            println!("{}", output::render_error(e.to_string().trim_end(), json));
            return ExitCode::from(1);
        }
    };

    logging::init(cli.verbose);

    let codec = DefaultCodec;
    let result = match cli.command {
        Commands::Convert {
            infile,
            outfile,
            outfile_format,
            channels,
        } => commands::convert::run(&codec, &infile, &outfile, &outfile_format, channels),
        Commands::Details { infile } => commands::details::run(&codec, &infile),
        Commands::Split {
            infile,
            tmp_dir,
            chunk_size,
        } => commands::split::run(&codec, &infile, &tmp_dir, chunk_size),
        Commands::Wer {
            reference,
            hypothesis,
            measures,
        } => commands::wer::run(&reference, &hypothesis, measures),
    };

    output::finish(result, cli.json)
}
