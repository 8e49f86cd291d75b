use crate::board::Board;
use crate::check::is_in_check;
use crate::color::Color;
use crate::movegen::{Destinations, candidate_moves};
use crate::pieces::PieceKind;
use crate::square::Square;

/// Whether moving the piece on `from` to `to` obeys the movement rules and
/// does not leave its own king attacked. The board itself is never modified.
#[cfg_attr(feature = "hotpath", hotpath::measure)]
pub fn is_legal(board: &Board, from: Square, to: Square) -> bool {
    let Some(piece) = board.get(from) else {
        return false;
    };

    if !candidate_moves(board, from).contains(&to) {
        return false;
    }

    !is_in_check(&board.with_move(from, to), piece.color)
}

/// The legal subset of [`candidate_moves`] for the piece on `src`.
pub fn legal_destinations(board: &Board, src: Square) -> Destinations {
    let Some(piece) = board.get(src) else {
        return Destinations::new();
    };

    candidate_moves(board, src)
        .into_iter()
        .filter(|dst| !is_in_check(&board.with_move(src, *dst), piece.color))
        .collect()
}

/// Every legal `(from, to)` pair available to `color`.
pub fn legal_moves(board: &Board, color: Color) -> Vec<(Square, Square)> {
    board
        .pieces(color)
        .iter()
        .flat_map(|(src, _)| {
            legal_destinations(board, *src)
                .into_iter()
                .map(move |dst| (*src, dst))
        })
        .collect()
}

/// Whether the piece on `from` is a pawn arriving on its promotion rank at `to`.
pub fn is_promotion_move(board: &Board, from: Square, to: Square) -> bool {
    board
        .get(from)
        .is_some_and(|piece| piece.kind == PieceKind::Pawn && to.rank == piece.color.promotion_rank())
}
