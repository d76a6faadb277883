use crate::reader::{Movetext, Tag};
use chusst_san::board::{PieceType, Player};
use chusst_san::game::{GameParseResult, NumberingGap};
use chusst_san::movetext::MoveToken;
use chusst_san::san::{CastlingSide, PromotionPieces, SanMove, Suffix};

#[derive(Debug, PartialEq)]
pub enum MoveType {
    Normal,
    Capture,
    Promotion(PromotionPieces),
    PromotionWithCapture(PromotionPieces),
    KingsideCastling,
    QueensideCastling,
    Invalid,
}

#[derive(Debug, PartialEq)]
pub enum CheckType {
    Check,
    Checkmate,
}

#[derive(Debug)]
pub struct DetailedMoveInfo {
    pub short: String,
    pub piece: Option<PieceType>,
    pub move_type: MoveType,
    pub check_type: Option<CheckType>,
}

#[derive(Debug)]
pub struct DetailedMove {
    pub turn: String,
    pub white: DetailedMoveInfo,
    pub black: Option<DetailedMoveInfo>,
}

#[derive(Debug)]
pub struct InvalidEntry {
    pub turn: String,
    pub player: Player,
    pub short: String,
}

#[derive(Debug)]
pub struct GapEntry {
    pub turn: String,
    pub expected: u64,
}

#[derive(Debug, Default)]
pub struct DetailedGame {
    pub tags: Vec<Tag>,
    pub termination: Option<String>,
    pub valid: bool,
    pub moves: Vec<DetailedMove>,
    pub invalid: Vec<InvalidEntry>,
    pub gaps: Vec<GapEntry>,
}

fn detail(token: &MoveToken) -> DetailedMoveInfo {
    let Some(san) = token.san() else {
        return DetailedMoveInfo {
            short: token.notation.to_string(),
            piece: None,
            move_type: MoveType::Invalid,
            check_type: None,
        };
    };

    let (piece, move_type) = match san {
        SanMove::Castle(CastlingSide::Kingside) => (PieceType::King, MoveType::KingsideCastling),
        SanMove::Castle(CastlingSide::Queenside) => {
            (PieceType::King, MoveType::QueensideCastling)
        }
        SanMove::Normal {
            piece,
            capture,
            promotion,
            ..
        } => (
            piece,
            match (promotion, capture) {
                (Some(promoted), true) => MoveType::PromotionWithCapture(promoted),
                (Some(promoted), false) => MoveType::Promotion(promoted),
                (None, true) => MoveType::Capture,
                (None, false) => MoveType::Normal,
            },
        ),
    };

    DetailedMoveInfo {
        short: token.notation.to_string(),
        piece: Some(piece),
        move_type,
        check_type: san.suffix().map(|suffix| match suffix {
            Suffix::Check => CheckType::Check,
            Suffix::Checkmate => CheckType::Checkmate,
        }),
    }
}

fn gap_entry(gap: &NumberingGap) -> GapEntry {
    GapEntry {
        turn: gap.turn.to_string(),
        expected: gap.expected,
    }
}

/// Builds the report of a parsed game. With `strict`, numbering gaps make the
/// game invalid.
pub fn detailed_game(
    result: &GameParseResult,
    movetext: &Movetext,
    strict: bool,
) -> DetailedGame {
    let gaps: Vec<GapEntry> = result.numbering_gaps().iter().map(gap_entry).collect();

    DetailedGame {
        tags: movetext.tags.clone(),
        termination: movetext.termination.clone(),
        valid: result.is_valid() && !(strict && !gaps.is_empty()),
        moves: result
            .turns()
            .iter()
            .map(|turn| DetailedMove {
                turn: turn.number.to_string(),
                white: detail(&turn.white),
                black: turn.black.as_ref().map(detail),
            })
            .collect(),
        invalid: result
            .failures()
            .iter()
            .map(|failure| InvalidEntry {
                turn: failure.turn.to_string(),
                player: failure.player,
                short: failure.token.to_string(),
            })
            .collect(),
        gaps,
    }
}
