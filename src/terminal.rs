use crate::board::Board;
use crate::check::is_in_check;
use crate::color::Color;
use crate::legality::is_legal;
use crate::movegen::candidate_moves;
use crate::outcome::{DecisionReason, Outcome};

/// Result of examining the side to move for the end of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terminal {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

impl Terminal {
    pub fn into_outcome(self) -> Outcome {
        match self {
            Terminal::Ongoing => Outcome::InProgress,
            Terminal::Checkmate { winner } => {
                Outcome::decided(DecisionReason::Checkmate, Some(winner))
            }
            Terminal::Stalemate => Outcome::decided(DecisionReason::Stalemate, None),
        }
    }
}

/// Stops at the first legal move found.
#[cfg_attr(feature = "hotpath", hotpath::measure)]
pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    board.pieces(color).iter().any(|(src, _)| {
        candidate_moves(board, *src)
            .iter()
            .any(|dst| is_legal(board, *src, *dst))
    })
}

pub fn classify_terminal(board: &Board, color: Color) -> Terminal {
    if has_any_legal_move(board, color) {
        return Terminal::Ongoing;
    }

    if is_in_check(board, color) {
        Terminal::Checkmate {
            winner: color.opposite(),
        }
    } else {
        Terminal::Stalemate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::Square;

    fn board(fen: &str) -> Board {
        Board::from_fen(fen).expect("valid FEN")
    }

    #[test]
    fn test_starting_position_is_ongoing() {
        let b = Board::standard();
        assert!(has_any_legal_move(&b, Color::White));
        assert_eq!(classify_terminal(&b, Color::White), Terminal::Ongoing);
        assert_eq!(classify_terminal(&b, Color::Black), Terminal::Ongoing);
    }

    #[test]
    fn test_back_rank_mate() {
        let b = board("3R2k1/5ppp/8/8/8/8/8/6K1");
        assert_eq!(
            classify_terminal(&b, Color::Black),
            Terminal::Checkmate {
                winner: Color::White
            }
        );
    }

    #[test]
    fn test_check_with_escape_is_ongoing() {
        let b = board("3R2k1/5pp1/8/8/8/8/8/6K1");
        assert!(is_in_check(&b, Color::Black));
        assert_eq!(classify_terminal(&b, Color::Black), Terminal::Ongoing);
    }

    #[test]
    fn test_stalemate_king_in_corner() {
        // Black king on h8 boxed in by the queen on g6 but not attacked
        let b = board("7k/8/6Q1/8/8/8/8/K7");
        assert!(!is_in_check(&b, Color::Black));
        assert_eq!(classify_terminal(&b, Color::Black), Terminal::Stalemate);
    }

    #[test]
    fn test_stalemate_with_blocked_pawn() {
        // Black's only other piece is a pawn blocked by a white pawn
        let b = board("7k/8/6Q1/8/p7/P7/8/K7");
        assert_eq!(classify_terminal(&b, Color::Black), Terminal::Stalemate);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let b = board("3R2k1/5ppp/8/8/8/8/8/6K1");
        let first = classify_terminal(&b, Color::Black);
        let second = classify_terminal(&b, Color::Black);
        assert_eq!(first, second);
        assert_eq!(b.get(Square::new(7, 3)).map(|p| p.to_char()), Some('R'));
    }

    #[test]
    fn test_into_outcome() {
        assert_eq!(Terminal::Ongoing.into_outcome(), Outcome::InProgress);
        assert_eq!(
            Terminal::Checkmate {
                winner: Color::Black
            }
            .into_outcome()
            .winner(),
            Some(Color::Black)
        );
        assert!(Terminal::Stalemate.into_outcome().is_draw());
    }
}
