use serde::Serialize;
use std::fmt;
use std::ops::Not;

const FILE_NAMES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];
const RANK_NAMES: [char; 8] = ['1', '2', '3', '4', '5', '6', '7', '8'];

#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum PieceType {
    Pawn,   // (no letter)
    Knight, // N
    Bishop, // B
    Rook,   // R
    Queen,  // Q
    King,   // K
}

impl PieceType {
    /// Parses a SAN piece letter. Pawns are never written with a letter.
    pub fn try_from_char(value: char) -> Option<Self> {
        match value {
            'N' => Some(PieceType::Knight),
            'B' => Some(PieceType::Bishop),
            'R' => Some(PieceType::Rook),
            'Q' => Some(PieceType::Queen),
            'K' => Some(PieceType::King),
            _ => None,
        }
    }

    pub fn to_char(self) -> Option<char> {
        match self {
            PieceType::Pawn => None,
            PieceType::Knight => Some('N'),
            PieceType::Bishop => Some('B'),
            PieceType::Rook => Some('R'),
            PieceType::Queen => Some('Q'),
            PieceType::King => Some('K'),
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match &self {
                PieceType::Pawn => "pawn",
                PieceType::Knight => "knight",
                PieceType::Bishop => "bishop",
                PieceType::Rook => "rook",
                PieceType::Queen => "queen",
                PieceType::King => "king",
            }
        )
    }
}

#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    White,
    Black,
}

impl Not for Player {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match &self {
                Player::White => "white",
                Player::Black => "black",
            }
        )
    }
}

/// A board square. Both coordinates are zero-based: `a1` is rank 0, file 0.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct Position {
    pub rank: usize,
    pub file: usize,
}

impl Position {
    pub fn try_from_str(pos_str: &str) -> Option<Position> {
        let mut chars = pos_str.chars();
        let file = file_from_char(chars.next()?)?;
        let rank = rank_from_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }

        Some(Position { rank, file })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", file_name(self.file), rank_name(self.rank))
    }
}

pub(crate) fn file_from_char(value: char) -> Option<usize> {
    FILE_NAMES.iter().position(|&name| name == value)
}

pub(crate) fn rank_from_char(value: char) -> Option<usize> {
    RANK_NAMES.iter().position(|&name| name == value)
}

pub(crate) fn file_name(file: usize) -> char {
    FILE_NAMES[file]
}

pub(crate) fn rank_name(rank: usize) -> char {
    RANK_NAMES[rank]
}

#[macro_export]
macro_rules! pos {
    ($square:ident) => {
        $crate::board::Position::try_from_str(stringify!($square))
            .expect(concat!("invalid square ", stringify!($square)))
    };
}
