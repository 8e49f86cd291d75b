use crate::board::Board;
use crate::color::Color;
use crate::movegen::candidate_moves;
use crate::square::Square;

/// Whether any piece of `by` has `square` among its candidate moves.
///
/// This is reachability, not attack: a pawn reaches the empty square ahead of
/// it, and reaches a diagonal only when something stands there. On an
/// occupied square such as a king's the two coincide, which is all check
/// detection relies on.
pub fn is_square_reachable(board: &Board, square: Square, by: Color) -> bool {
    board
        .pieces(by)
        .iter()
        .any(|(src, _)| candidate_moves(board, *src).contains(&square))
}

/// Every candidate destination of some piece of `by`, sorted and deduplicated.
pub fn reachable_squares(board: &Board, by: Color) -> Vec<Square> {
    let mut squares: Vec<Square> = board
        .pieces(by)
        .iter()
        .flat_map(|(src, _)| candidate_moves(board, *src))
        .collect();
    squares.sort();
    squares.dedup();
    squares
}

/// Whether `color`'s king is attacked. A board without that king is never in check.
#[cfg_attr(feature = "hotpath", hotpath::measure)]
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.find_king(color) {
        Some(king) => is_square_reachable(board, king, color.opposite()),
        None => false,
    }
}
