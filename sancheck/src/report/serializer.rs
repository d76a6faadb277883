use crate::reader::Tag;
use crate::report::interpreter::{
    CheckType, DetailedGame, DetailedMove, DetailedMoveInfo, GapEntry, InvalidEntry, MoveType,
};
use anyhow::{Context, Result};
use chusst_san::san::PromotionPieces;
use serde::ser::SerializeMap;
use serde::Serialize;
use std::io::Write;

fn promotion_name(piece: &PromotionPieces) -> &'static str {
    match piece {
        PromotionPieces::Knight => "knight",
        PromotionPieces::Bishop => "bishop",
        PromotionPieces::Rook => "rook",
        PromotionPieces::Queen => "queen",
    }
}

impl Serialize for DetailedMoveInfo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut entries = 1;
        if self.piece.is_some() {
            entries += 1;
        }
        if self.move_type != MoveType::Normal {
            entries += 1;
        }
        if self.check_type.is_some() {
            entries += 1;
        }

        let mut map = serializer.serialize_map(Some(entries))?;

        map.serialize_entry("short", &self.short)?;
        if let Some(piece) = &self.piece {
            map.serialize_entry("piece", &piece.to_string())?;
        }
        if self.move_type != MoveType::Normal {
            let move_type = match &self.move_type {
                MoveType::Normal => unreachable!(),
                MoveType::Capture => "capture".to_string(),
                MoveType::Promotion(piece) => format!("promotion to {}", promotion_name(piece)),
                MoveType::PromotionWithCapture(piece) => {
                    format!("promotion to {} with capture", promotion_name(piece))
                }
                MoveType::KingsideCastling => "kingside castling".to_string(),
                MoveType::QueensideCastling => "queenside castling".to_string(),
                MoveType::Invalid => "invalid".to_string(),
            };
            map.serialize_entry("type", &move_type)?;
        }

        if let Some(check_type) = &self.check_type {
            map.serialize_entry(
                "check",
                match check_type {
                    CheckType::Check => "check",
                    CheckType::Checkmate => "checkmate",
                },
            )?;
        }

        map.end()
    }
}

impl Serialize for DetailedMove {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if let Some(black) = &self.black {
            let mut map = serializer.serialize_map(Some(3))?;

            map.serialize_entry("turn", &self.turn)?;
            map.serialize_entry("white", &self.white)?;
            map.serialize_entry("black", &black)?;

            map.end()
        } else {
            let mut map = serializer.serialize_map(Some(2))?;

            map.serialize_entry("turn", &self.turn)?;
            map.serialize_entry("white", &self.white)?;

            map.end()
        }
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.key, &self.value)?;
        map.end()
    }
}

impl Serialize for InvalidEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("turn", &self.turn)?;
        map.serialize_entry("player", &self.player)?;
        map.serialize_entry("move", &self.short)?;
        map.end()
    }
}

impl Serialize for GapEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("turn", &self.turn)?;
        map.serialize_entry("expected", &self.expected)?;
        map.end()
    }
}

impl Serialize for DetailedGame {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let entries = if self.termination.is_some() { 6 } else { 5 };
        let mut map = serializer.serialize_map(Some(entries))?;

        map.serialize_entry("tags", &self.tags)?;
        if let Some(termination) = &self.termination {
            map.serialize_entry("result", termination)?;
        }
        map.serialize_entry("valid", &self.valid)?;
        map.serialize_entry("moves", &self.moves)?;
        map.serialize_entry("invalid", &self.invalid)?;
        map.serialize_entry("gaps", &self.gaps)?;

        map.end()
    }
}

pub fn write_yaml(output: impl Write, game: &DetailedGame) -> Result<()> {
    serde_yaml::to_writer(output, game).context("Error writing YAML report")
}

pub fn write_json(mut output: impl Write, game: &DetailedGame) -> Result<()> {
    serde_json::to_writer_pretty(&mut output, game).context("Error writing JSON report")?;
    writeln!(output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::Movetext;
    use crate::report::interpreter::detailed_game;
    use chusst_san::parse;

    fn header() -> Movetext {
        Movetext {
            tags: vec![Tag {
                key: "White".to_string(),
                value: "Anderssen, Adolf".to_string(),
            }],
            termination: Some("1-0".to_string()),
            text: String::new(),
        }
    }

    #[test]
    fn json_report() {
        let result = parse("1. e4 e5 2. Nf3 Qh4# 3. exd8=Q+ e9");
        let game = detailed_game(&result, &header(), false);

        let mut output = Vec::new();
        write_json(&mut output, &game).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

        assert_eq!(value["tags"][0]["White"], "Anderssen, Adolf");
        assert_eq!(value["result"], "1-0");
        assert_eq!(value["valid"], false);

        let moves = value["moves"].as_array().unwrap();
        assert_eq!(moves.len(), 3);
        assert_eq!(moves[0]["turn"], "1");
        assert_eq!(moves[0]["white"]["short"], "e4");
        assert_eq!(moves[0]["white"]["piece"], "pawn");
        assert!(moves[0]["white"].get("type").is_none());
        assert!(moves[0]["white"].get("check").is_none());
        assert_eq!(moves[1]["black"]["piece"], "queen");
        assert_eq!(moves[1]["black"]["check"], "checkmate");
        assert_eq!(
            moves[2]["white"]["type"],
            "promotion to queen with capture"
        );
        assert_eq!(moves[2]["white"]["check"], "check");
        assert_eq!(moves[2]["black"]["type"], "invalid");
        assert!(moves[2]["black"].get("piece").is_none());

        let invalid = value["invalid"].as_array().unwrap();
        assert_eq!(invalid.len(), 1);
        assert_eq!(invalid[0]["turn"], "3");
        assert_eq!(invalid[0]["player"], "black");
        assert_eq!(invalid[0]["move"], "e9");
    }

    #[test]
    fn missing_black_move_is_omitted() {
        let result = parse("1. O-O");
        let game = detailed_game(&result, &Movetext::default(), false);

        let mut output = Vec::new();
        write_json(&mut output, &game).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

        assert!(value.get("result").is_none());
        let turn = &value["moves"][0];
        assert!(turn.get("black").is_none());
        assert_eq!(turn["white"]["type"], "kingside castling");
        assert_eq!(turn["white"]["piece"], "king");
        assert_eq!(value["valid"], true);
    }

    #[test]
    fn yaml_report() {
        let result = parse("1. e4 e5 3. Nf3");
        let game = detailed_game(&result, &header(), false);

        let mut output = Vec::new();
        write_yaml(&mut output, &game).unwrap();
        let yaml = String::from_utf8(output).unwrap();

        assert!(yaml.contains("Anderssen"), "{}", yaml);
        assert!(yaml.contains("valid: true"), "{}", yaml);
        assert!(yaml.contains("short: Nf3"), "{}", yaml);
        assert!(yaml.contains("expected: 2"), "{}", yaml);
        assert!(yaml.contains("invalid: []"), "{}", yaml);
    }
}
