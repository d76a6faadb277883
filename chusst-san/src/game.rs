mod feedback;

pub use self::feedback::{LogFeedback, ParseFeedback};
use crate::board::Player;
use crate::movetext::{turns, Turn};

use log::debug;
use serde::Serialize;
use std::fmt;

/// A move token that does not match the SAN grammar.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct InvalidMove<'a> {
    pub turn: &'a str,
    pub player: Player,
    pub token: &'a str,
}

impl<'a> fmt::Display for InvalidMove<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Turn {}: invalid {} move '{}'",
            self.turn, self.player, self.token
        )
    }
}

/// A turn whose number does not follow the previous one.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct NumberingGap<'a> {
    pub turn: &'a str,
    pub expected: u64,
}

impl<'a> fmt::Display for NumberingGap<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Turn {}: expected move number {}",
            self.turn, self.expected
        )
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameParseResult<'a> {
    turns: Vec<Turn<'a>>,
    failures: Vec<InvalidMove<'a>>,
    valid: bool,
}

impl<'a> Default for GameParseResult<'a> {
    fn default() -> Self {
        GameParseResult {
            turns: Vec::new(),
            failures: Vec::new(),
            valid: true,
        }
    }
}

impl<'a> GameParseResult<'a> {
    fn push_turn(mut self, turn: Turn<'a>, feedback: &mut impl ParseFeedback) -> Self {
        feedback.turn(&turn);

        for token in turn.moves() {
            if token.is_valid() {
                continue;
            }

            let failure = InvalidMove {
                turn: turn.number,
                player: token.player,
                token: token.notation,
            };
            debug!("{}", failure);
            feedback.invalid_move(&failure);

            self.failures.push(failure);
            self.valid = false;
        }

        self.turns.push(turn);
        self
    }

    pub fn turns(&self) -> &[Turn<'a>] {
        &self.turns
    }

    /// Invalid moves, in the order they appear in the transcript.
    pub fn failures(&self) -> &[InvalidMove<'a>] {
        &self.failures
    }

    /// Whether every extracted move is well formed.
    ///
    /// A transcript without any turn is reported as valid: there was simply
    /// nothing to check.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn move_count(&self) -> usize {
        self.turns.iter().map(|turn| turn.moves().count()).sum()
    }

    /// Turns whose number is not the previous number plus one. The first
    /// turn is expected to be 1.
    ///
    /// Numbering never affects [`GameParseResult::is_valid`].
    pub fn numbering_gaps(&self) -> Vec<NumberingGap<'a>> {
        let mut gaps = Vec::new();
        let mut expected = 1u64;

        for turn in &self.turns {
            let number = turn.number.parse::<u64>().ok();
            if number != Some(expected) {
                gaps.push(NumberingGap {
                    turn: turn.number,
                    expected,
                });
            }
            expected = number.unwrap_or(expected).saturating_add(1);
        }

        gaps
    }
}

impl<'a> fmt::Display for GameParseResult<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for turn in &self.turns {
            writeln!(f, "{}", turn)?;
        }
        Ok(())
    }
}

pub fn parse(transcript: &str) -> GameParseResult<'_> {
    parse_with_feedback(transcript, &mut ())
}

pub fn parse_with_feedback<'a>(
    transcript: &'a str,
    feedback: &mut impl ParseFeedback,
) -> GameParseResult<'a> {
    let result = turns(transcript).fold(GameParseResult::default(), |result, turn| {
        result.push_turn(turn, &mut *feedback)
    });

    debug!(
        "{} turns, {} moves, {} invalid",
        result.turns.len(),
        result.move_count(),
        result.failures.len()
    );

    result
}
