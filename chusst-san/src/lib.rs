//! Shape checking for chess games written in Standard Algebraic Notation.
//!
//! ```
//! let result = chusst_san::parse("1. e4 e5 2. Nf3 Nc6 3. Bb5 a9");
//!
//! assert_eq!(result.turns().len(), 3);
//! assert!(!result.is_valid());
//! assert_eq!(result.failures()[0].token, "a9");
//! ```
//!
//! No board is ever set up: a move is valid when it is written correctly,
//! whether or not it could be played.

pub mod board;
pub mod game;
pub mod movetext;
pub mod san;

pub use game::{parse, parse_with_feedback, GameParseResult, InvalidMove};
pub use san::validate;
