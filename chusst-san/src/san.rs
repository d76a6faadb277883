//! Lexical grammar of Standard Algebraic Notation moves.
//!
//! Only the shape of a token is checked. Whether the move is playable in any
//! position is never considered, so tokens such as `Ke8=Q` or `a4=N#` are
//! accepted.


use crate::board::{file_name, rank_name, PieceType, Position};

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, one_of};
use nom::combinator::{eof, map, map_opt, opt, success, value};
use nom::sequence::{pair, preceded, terminated, tuple};
use nom::IResult;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum PromotionPieces {
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl PromotionPieces {
    pub fn try_from_char(value: char) -> Option<Self> {
        match value {
            'N' => Some(PromotionPieces::Knight),
            'B' => Some(PromotionPieces::Bishop),
            'R' => Some(PromotionPieces::Rook),
            'Q' => Some(PromotionPieces::Queen),
            _ => None,
        }
    }
}

impl From<PromotionPieces> for PieceType {
    fn from(value: PromotionPieces) -> Self {
        match value {
            PromotionPieces::Knight => PieceType::Knight,
            PromotionPieces::Bishop => PieceType::Bishop,
            PromotionPieces::Rook => PieceType::Rook,
            PromotionPieces::Queen => PieceType::Queen,
        }
    }
}

impl fmt::Display for PromotionPieces {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let letter = PieceType::from(*self).to_char().unwrap_or('?');
        write!(f, "{}", letter)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum CastlingSide {
    Kingside,
    Queenside,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Suffix {
    Check,
    Checkmate,
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Suffix::Check => write!(f, "+"),
            Suffix::Checkmate => write!(f, "#"),
        }
    }
}

/// Origin hint written between the piece letter and the target square.
///
/// Pawn captures store their origin file here as well.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Disambiguation {
    None,
    File(usize),
    Rank(usize),
    Position(Position),
}

impl fmt::Display for Disambiguation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Disambiguation::None => Ok(()),
            Disambiguation::File(file) => write!(f, "{}", file_name(*file)),
            Disambiguation::Rank(rank) => write!(f, "{}", rank_name(*rank)),
            Disambiguation::Position(position) => write!(f, "{}", position),
        }
    }
}

/// Structured reading of a SAN token that matched the grammar.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum SanMove {
    Castle(CastlingSide),
    Normal {
        piece: PieceType,
        from: Disambiguation,
        capture: bool,
        to: Position,
        promotion: Option<PromotionPieces>,
        suffix: Option<Suffix>,
    },
}

impl SanMove {
    pub fn parse(token: &str) -> Option<SanMove> {
        san_move(token).ok().map(|(_rest, mv)| mv)
    }

    pub fn is_capture(&self) -> bool {
        matches!(self, SanMove::Normal { capture: true, .. })
    }

    pub fn promotion(&self) -> Option<PromotionPieces> {
        match self {
            SanMove::Normal { promotion, .. } => *promotion,
            SanMove::Castle(_) => None,
        }
    }

    pub fn suffix(&self) -> Option<Suffix> {
        match self {
            SanMove::Normal { suffix, .. } => *suffix,
            SanMove::Castle(_) => None,
        }
    }
}

/// Returns whether `token` is a well-formed SAN move.
pub fn validate(token: &str) -> bool {
    SanMove::parse(token).is_some()
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSanError;

impl fmt::Display for ParseSanError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("invalid san")
    }
}

impl std::error::Error for ParseSanError {}

impl FromStr for SanMove {
    type Err = ParseSanError;

    fn from_str(token: &str) -> Result<SanMove, ParseSanError> {
        SanMove::parse(token).ok_or(ParseSanError)
    }
}

impl fmt::Display for SanMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SanMove::Castle(CastlingSide::Kingside) => write!(f, "O-O"),
            SanMove::Castle(CastlingSide::Queenside) => write!(f, "O-O-O"),
            SanMove::Normal {
                piece,
                from,
                capture,
                to,
                promotion,
                suffix,
            } => {
                if let Some(letter) = piece.to_char() {
                    write!(f, "{}", letter)?;
                }
                write!(f, "{}", from)?;
                if *capture {
                    write!(f, "x")?;
                }
                write!(f, "{}", to)?;
                if let Some(promotion) = promotion {
                    write!(f, "={}", promotion)?;
                }
                if let Some(suffix) = suffix {
                    write!(f, "{}", suffix)?;
                }
                Ok(())
            }
        }
    }
}

type Ending = (Option<PromotionPieces>, Option<Suffix>);

fn file(input: &str) -> IResult<&str, usize> {
    map(one_of("abcdefgh"), |c| c as usize - 'a' as usize)(input)
}

fn rank(input: &str) -> IResult<&str, usize> {
    map(one_of("12345678"), |c| c as usize - '1' as usize)(input)
}

fn square(input: &str) -> IResult<&str, Position> {
    map(pair(file, rank), |(file, rank)| Position { rank, file })(input)
}

fn piece(input: &str) -> IResult<&str, PieceType> {
    map_opt(one_of("KQRBN"), PieceType::try_from_char)(input)
}

fn promotion(input: &str) -> IResult<&str, PromotionPieces> {
    preceded(
        char('='),
        map_opt(one_of("QRBN"), PromotionPieces::try_from_char),
    )(input)
}

fn suffix(input: &str) -> IResult<&str, Suffix> {
    alt((
        value(Suffix::Check, char('+')),
        value(Suffix::Checkmate, char('#')),
    ))(input)
}

// Optional promotion and check marker, then nothing else.
fn ending(input: &str) -> IResult<&str, Ending> {
    terminated(pair(opt(promotion), opt(suffix)), eof)(input)
}

fn castle(input: &str) -> IResult<&str, SanMove> {
    map(
        terminated(preceded(tag("O-O"), opt(tag("-O"))), eof),
        |queenside| {
            SanMove::Castle(match queenside {
                Some(_) => CastlingSide::Queenside,
                None => CastlingSide::Kingside,
            })
        },
    )(input)
}

fn pawn_advance(input: &str) -> IResult<&str, SanMove> {
    map(pair(square, ending), |(to, (promotion, suffix))| {
        SanMove::Normal {
            piece: PieceType::Pawn,
            from: Disambiguation::None,
            capture: false,
            to,
            promotion,
            suffix,
        }
    })(input)
}

fn pawn_capture(input: &str) -> IResult<&str, SanMove> {
    map(
        tuple((file, char('x'), square, ending)),
        |(from, _, to, (promotion, suffix))| SanMove::Normal {
            piece: PieceType::Pawn,
            from: Disambiguation::File(from),
            capture: true,
            to,
            promotion,
            suffix,
        },
    )(input)
}

fn pawn_move(input: &str) -> IResult<&str, SanMove> {
    alt((pawn_advance, pawn_capture))(input)
}

// Everything after the disambiguation: capture marker, target and ending.
fn piece_target(input: &str) -> IResult<&str, (bool, Position, Ending)> {
    map(
        tuple((opt(char('x')), square, ending)),
        |(capture, to, ending)| (capture.is_some(), to, ending),
    )(input)
}

fn piece_move(input: &str) -> IResult<&str, SanMove> {
    // Each disambiguation is tried together with the rest of the token, so a
    // target square is never swallowed as a disambiguation (`Nd7`).
    map(
        pair(
            piece,
            alt((
                pair(map(square, Disambiguation::Position), piece_target),
                pair(map(file, Disambiguation::File), piece_target),
                pair(map(rank, Disambiguation::Rank), piece_target),
                pair(success(Disambiguation::None), piece_target),
            )),
        ),
        |(piece, (from, (capture, to, (promotion, suffix))))| SanMove::Normal {
            piece,
            from,
            capture,
            to,
            promotion,
            suffix,
        },
    )(input)
}

fn san_move(input: &str) -> IResult<&str, SanMove> {
    alt((castle, pawn_move, piece_move))(input)
}
