//! Turn extraction from free-form movetext.
//!
//! A turn is a move number followed by a period, whitespace and the white
//! move, optionally followed by whitespace and the black move. Anything that
//! does not fit this shape is skipped without complaint.
//!
//! The black move is only taken if it does not itself look like a move
//! number (`digits.`), so `1. e4 2. d4` yields two turns without black moves.
//! A token such as `12.Qe2` in black's slot is therefore read as the start of
//! the next turn, not as a move.


use crate::board::Player;
use crate::san::{self, SanMove};

use log::trace;
use nom::bytes::complete::{take_till1, take_while1};
use nom::character::complete::{char, digit1};
use nom::combinator::{map, not, opt};
use nom::sequence::{preceded, terminated, tuple};
use nom::IResult;
use serde::Serialize;
use std::fmt;
use std::iter::FusedIterator;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct MoveToken<'a> {
    pub notation: &'a str,
    pub player: Player,
}

impl<'a> MoveToken<'a> {
    pub fn is_valid(&self) -> bool {
        san::validate(self.notation)
    }

    pub fn san(&self) -> Option<SanMove> {
        SanMove::parse(self.notation)
    }
}

impl<'a> fmt::Display for MoveToken<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.notation)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Turn<'a> {
    /// Move number as written, without the period.
    pub number: &'a str,
    pub white: MoveToken<'a>,
    pub black: Option<MoveToken<'a>>,
}

impl<'a> Turn<'a> {
    /// White's move, then black's if present.
    pub fn moves(&self) -> impl Iterator<Item = MoveToken<'a>> {
        std::iter::once(self.white).chain(self.black)
    }
}

impl<'a> fmt::Display for Turn<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}. {}", self.number, self.white)?;
        if let Some(black) = &self.black {
            write!(f, " {}", black)?;
        }
        Ok(())
    }
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

fn separator(input: &str) -> IResult<&str, &str> {
    take_while1(is_separator)(input)
}

fn word(input: &str) -> IResult<&str, &str> {
    take_till1(is_separator)(input)
}

fn move_number(input: &str) -> IResult<&str, &str> {
    terminated(digit1, char('.'))(input)
}

fn black_move(input: &str) -> IResult<&str, &str> {
    preceded(separator, preceded(not(move_number), word))(input)
}

fn turn(input: &str) -> IResult<&str, Turn> {
    map(
        tuple((move_number, separator, word, opt(black_move))),
        |(number, _, white, black)| Turn {
            number,
            white: MoveToken {
                notation: white,
                player: Player::White,
            },
            black: black.map(|notation| MoveToken {
                notation,
                player: Player::Black,
            }),
        },
    )(input)
}

/// Iterator over the turns of a transcript, in source order.
#[derive(Clone, Debug)]
pub struct Turns<'a> {
    remaining: &'a str,
}

impl<'a> Iterator for Turns<'a> {
    type Item = Turn<'a>;

    fn next(&mut self) -> Option<Turn<'a>> {
        while !self.remaining.is_empty() {
            match turn(self.remaining) {
                Ok((rest, turn)) => {
                    trace!("turn {}", turn);
                    self.remaining = rest;
                    return Some(turn);
                }
                Err(_) => {
                    // A turn can only start at a digit
                    let skip = self
                        .remaining
                        .char_indices()
                        .skip(1)
                        .find(|(_, c)| c.is_ascii_digit())
                        .map_or(self.remaining.len(), |(index, _)| index);
                    self.remaining = &self.remaining[skip..];
                }
            }
        }

        None
    }
}

impl<'a> FusedIterator for Turns<'a> {}

pub fn turns(transcript: &str) -> Turns<'_> {
    Turns {
        remaining: transcript,
    }
}
