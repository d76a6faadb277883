use crate::report::interpreter::DetailedGame;
use crate::report::TurnListing;
use anyhow::Result;
use chusst_san::GameParseResult;
use colored::Colorize;
use std::io::Write;

pub fn write_text(
    mut output: impl Write,
    result: &GameParseResult,
    game: &DetailedGame,
    listing: TurnListing,
) -> Result<()> {
    if listing != TurnListing::Never {
        for failure in result.failures() {
            writeln!(output, "{}", failure.to_string().red())?;
        }
        for gap in result.numbering_gaps() {
            writeln!(output, "{}", gap.to_string().yellow())?;
        }
        if result.turns().is_empty() {
            writeln!(output, "{}", "No turns found".yellow())?;
        }
    }

    if game.valid {
        writeln!(output, "{}", "Valid game".green().bold())?;
    } else {
        writeln!(output, "{}", "Invalid game".red().bold())?;
    }

    let print_turns = match listing {
        TurnListing::Always => true,
        TurnListing::WhenValid => game.valid,
        TurnListing::Never => false,
    };
    if print_turns {
        write!(output, "{}", result)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::Movetext;
    use crate::report::interpreter::detailed_game;
    use chusst_san::parse;

    fn render(transcript: &str, listing: TurnListing) -> String {
        colored::control::set_override(false);

        let result = parse(transcript);
        let game = detailed_game(&result, &Movetext::default(), false);
        let mut output = Vec::new();
        write_text(&mut output, &result, &game, listing).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn valid_game_lists_turns() {
        assert_eq!(
            render("1. e4 e5 2. Nf3", TurnListing::WhenValid),
            "Valid game\n1. e4 e5\n2. Nf3\n"
        );
    }

    #[test]
    fn invalid_game() {
        assert_eq!(
            render("1. e9 e5 2. Nf3 Kx", TurnListing::WhenValid),
            "Turn 1: invalid white move 'e9'\n\
             Turn 2: invalid black move 'Kx'\n\
             Invalid game\n"
        );
        assert_eq!(
            render("1. e9 e5", TurnListing::Always),
            "Turn 1: invalid white move 'e9'\nInvalid game\n1. e9 e5\n"
        );
    }

    #[test]
    fn quiet() {
        assert_eq!(render("1. e9 e5", TurnListing::Never), "Invalid game\n");
        assert_eq!(render("1. e4 e5", TurnListing::Never), "Valid game\n");
    }

    #[test]
    fn numbering_warning() {
        assert_eq!(
            render("1. e4 e5 3. d4", TurnListing::WhenValid),
            "Turn 3: expected move number 2\nValid game\n1. e4 e5\n3. d4\n"
        );
    }

    #[test]
    fn nothing_to_check() {
        assert_eq!(
            render("no moves", TurnListing::WhenValid),
            "No turns found\nValid game\n"
        );
    }
}
