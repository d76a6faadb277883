use crate::game::InvalidMove;
use crate::movetext::Turn;

use log::{trace, warn};

/// Receives parse events in discovery order.
pub trait ParseFeedback {
    fn turn(&mut self, _turn: &Turn) {}
    fn invalid_move(&mut self, failure: &InvalidMove);
}

impl ParseFeedback for () {
    fn invalid_move(&mut self, _failure: &InvalidMove) {}
}

/// Forwards every event to the `log` facade.
#[derive(Default)]
pub struct LogFeedback;

impl ParseFeedback for LogFeedback {
    fn turn(&mut self, turn: &Turn) {
        trace!("{}", turn);
    }

    fn invalid_move(&mut self, failure: &InvalidMove) {
        warn!("{}", failure);
    }
}
