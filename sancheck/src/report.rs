mod interpreter;
mod serializer;
mod text;

pub use self::interpreter::{detailed_game, DetailedGame};
use self::serializer::{write_json, write_yaml};
use self::text::write_text;
use crate::reader::Movetext;
use anyhow::Result;
use chusst_san::GameParseResult;
use clap::ValueEnum;
use std::io::Write;

#[derive(Copy, Clone, Debug, PartialEq, ValueEnum)]
pub enum Format {
    Text,
    Yaml,
    Json,
}

/// When the text report re-renders the turns.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TurnListing {
    Always,
    WhenValid,
    /// Verdict only.
    Never,
}

pub struct ReportOptions {
    pub format: Format,
    pub listing: TurnListing,
    pub strict: bool,
}

/// Writes the report and returns whether the game is valid.
pub fn write_report(
    output: impl Write,
    result: &GameParseResult,
    movetext: &Movetext,
    options: &ReportOptions,
) -> Result<bool> {
    let game = detailed_game(result, movetext, options.strict);

    match options.format {
        Format::Text => write_text(output, result, &game, options.listing)?,
        Format::Yaml => write_yaml(output, &game)?,
        Format::Json => write_json(output, &game)?,
    }

    Ok(game.valid)
}
