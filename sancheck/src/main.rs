use anyhow::{Context, Result};
use chusst_san::game::{parse_with_feedback, LogFeedback};
use clap::Parser;
use env_logger::Env;
use sancheck::reader::{read_input, Movetext};
use sancheck::report::{write_report, Format, ReportOptions, TurnListing};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Checks that every move of a chess game is written in valid SAN
struct Cli {
    /// Game transcript or PGN file (standard input if omitted or "-")
    file: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Write the report to this file instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the turns even if the game is invalid
    #[arg(short, long)]
    turns: bool,

    /// Only print the verdict
    #[arg(short, long, conflicts_with = "turns")]
    quiet: bool,

    /// Treat gaps in the move numbering as errors
    #[arg(long)]
    strict: bool,

    /// Log parse events to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(if cli.verbose {
        "debug"
    } else {
        "error"
    }))
    .init();

    let input = read_input(cli.file.as_deref())?;
    let movetext = Movetext::from_pgn(&input).context("Unable to read movetext")?;
    let result = parse_with_feedback(&movetext.text, &mut LogFeedback);

    let options = ReportOptions {
        format: cli.format,
        listing: if cli.quiet {
            TurnListing::Never
        } else if cli.turns {
            TurnListing::Always
        } else {
            TurnListing::WhenValid
        },
        strict: cli.strict,
    };

    let valid = match &cli.output {
        Some(path) => {
            colored::control::set_override(false);
            let file = File::create(path).context(format!(
                "Could not open file {} for writing",
                path.to_string_lossy()
            ))?;
            let mut output = BufWriter::new(file);
            let valid = write_report(&mut output, &result, &movetext, &options)?;
            output.flush()?;
            valid
        }
        None => {
            if !atty::is(atty::Stream::Stdout) {
                colored::control::set_override(false);
            }
            write_report(
                std::io::stdout().lock(),
                &result,
                &movetext,
                &options,
            )?
        }
    };

    Ok(if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}
