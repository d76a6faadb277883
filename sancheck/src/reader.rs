use anyhow::{Context, Result};
use log::debug;
use regex::Regex;
use std::io::Read;
use std::path::Path;

#[derive(Clone, Debug, PartialEq)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

const TERMINATION_MARKERS: [&str; 4] = ["1-0", "0-1", "1/2-1/2", "*"];

/// Movetext of a game, with its PGN tags and result pulled out.
#[derive(Default, Debug)]
pub struct Movetext {
    pub tags: Vec<Tag>,
    /// Game termination marker, when the movetext ends with one.
    pub termination: Option<String>,
    pub text: String,
}

impl Movetext {
    /// Extracts the tag pairs and a trailing termination marker, and drops
    /// brace comments. Everything else is kept as is.
    pub fn from_pgn(input: &str) -> Result<Movetext> {
        let tag_re = Regex::new(r#"\[(\S+) +"([^"]*)"\]"#)?;
        let comment_re = Regex::new(r"\{[^}]*\}")?;

        let mut tags = Vec::new();
        for tag_match in tag_re.captures_iter(input) {
            let tag_key = tag_match.get(1).context("PGN tag has no key")?;
            let tag_value = tag_match.get(2).context("PGN tag has no value")?;
            tags.push(Tag {
                key: tag_key.as_str().to_string(),
                value: tag_value.as_str().to_string(),
            });
        }

        let without_tags = tag_re.replace_all(input, " ");
        let mut text = comment_re.replace_all(&without_tags, " ").into_owned();

        let termination = text
            .split_whitespace()
            .last()
            .filter(|last| TERMINATION_MARKERS.contains(last))
            .map(str::to_string);
        if let Some(marker) = &termination {
            let end = text.trim_end().len() - marker.len();
            text.truncate(end);
        }

        debug!("{} tags, {} bytes of movetext", tags.len(), text.len());

        Ok(Movetext {
            tags,
            termination,
            text,
        })
    }
}

/// Reads the whole input, from `path` or from stdin when `path` is absent
/// or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.to_string_lossy())),
        _ => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Could not read standard input")?;
            Ok(input)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PGN: &str = r#"[Event "Casual game"]
[Site "Berlin GER"]
[Date "1852.??.??"]
[Result "1-0"]

1. e4 e5 2. Nf3 Nc6 {the usual} 3. Bc4 Bc5 4. b4 {Evans gambit, 5. a4 is not played} Bxb4 1-0
"#;

    #[test]
    fn tags_are_extracted() {
        let movetext = Movetext::from_pgn(PGN).unwrap();

        assert_eq!(
            movetext.tags,
            vec![
                Tag {
                    key: "Event".to_string(),
                    value: "Casual game".to_string(),
                },
                Tag {
                    key: "Site".to_string(),
                    value: "Berlin GER".to_string(),
                },
                Tag {
                    key: "Date".to_string(),
                    value: "1852.??.??".to_string(),
                },
                Tag {
                    key: "Result".to_string(),
                    value: "1-0".to_string(),
                },
            ]
        );
        assert!(!movetext.text.contains("Event"));
    }

    #[test]
    fn comments_are_dropped() {
        let movetext = Movetext::from_pgn(PGN).unwrap();

        assert!(!movetext.text.contains("usual"));
        assert!(!movetext.text.contains("5. a4"));
        assert!(movetext.text.contains("4. b4"));
    }

    #[test]
    fn termination_marker() {
        let movetext = Movetext::from_pgn(PGN).unwrap();
        assert_eq!(movetext.termination.as_deref(), Some("1-0"));
        assert!(movetext.text.trim_end().ends_with("Bxb4"));

        let movetext = Movetext::from_pgn("1. d4 d5 1/2-1/2\n\n").unwrap();
        assert_eq!(movetext.termination.as_deref(), Some("1/2-1/2"));
        assert_eq!(movetext.text, "1. d4 d5 ");

        // Only the last token counts
        let movetext = Movetext::from_pgn("1. e4 1-0 2. d4").unwrap();
        assert_eq!(movetext.termination, None);
        assert_eq!(movetext.text, "1. e4 1-0 2. d4");
    }

    #[test]
    fn plain_transcript() {
        let transcript = "1. e4 e5 2. Nf3 Nc6";
        let movetext = Movetext::from_pgn(transcript).unwrap();

        assert!(movetext.tags.is_empty());
        assert_eq!(movetext.termination, None);
        assert_eq!(movetext.text, transcript);
    }

    #[test]
    fn empty_tag_value() {
        let movetext = Movetext::from_pgn("[Annotator \"\"] 1. d4").unwrap();

        assert_eq!(movetext.tags[0].value, "");
        assert_eq!(movetext.text.trim(), "1. d4");
    }

    #[test]
    fn missing_file() {
        let error = read_input(Some(Path::new("/nonexistent/game.pgn"))).unwrap_err();
        assert!(error.to_string().contains("/nonexistent/game.pgn"));
    }
}
