use thiserror::Error;

use crate::outcome::Outcome;
use crate::pieces::PieceKind;
use crate::square::Square;

/// Rejections from the game session. None of them change the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("illegal move: {from} -> {to}")]
    IllegalMove { from: Square, to: Square },

    #[error("game is already over: {0}")]
    GameAlreadyOver(Outcome),

    #[error("move {from} -> {to} promotes a pawn; a promotion piece is required")]
    PromotionRequired { from: Square, to: Square },

    #[error("cannot promote to {0}")]
    InvalidPromotionKind(PieceKind),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Failures while reading coordinate text or FEN placements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid square: {0:?}")]
    InvalidSquare(String),

    #[error("invalid move text: {0:?}")]
    InvalidMove(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::outcome::DecisionReason;

    #[test]
    fn test_error_messages() {
        let err = GameError::IllegalMove {
            from: Square::new(1, 4),
            to: Square::new(4, 4),
        };
        assert_eq!(err.to_string(), "illegal move: e2 -> e5");

        let err = GameError::InvalidPromotionKind(PieceKind::King);
        assert_eq!(err.to_string(), "cannot promote to king");

        let err = GameError::GameAlreadyOver(Outcome::decided(
            DecisionReason::Resignation,
            Some(Color::Black),
        ));
        assert_eq!(
            err.to_string(),
            "game is already over: resignation, Black wins"
        );
    }

    #[test]
    fn test_parse_error_converts() {
        let err: GameError = ParseError::InvalidSquare("z9".to_string()).into();
        assert_eq!(err.to_string(), "invalid square: \"z9\"");
    }
}
