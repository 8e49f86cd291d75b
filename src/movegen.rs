//! Pseudo-legal move generation. Destinations obey movement and occupancy
//! rules only; whether the mover's king is left attacked is decided in
//! [`crate::legality`].

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::pieces::{Piece, PieceKind};
use crate::square::Square;

/// A queen in the centre of an empty board reaches 27 squares.
pub const MAX_PIECE_MOVES: usize = 27;

pub type Destinations = ArrayVec<Square, MAX_PIECE_MOVES>;

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ROOK_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Destination squares for the piece on `src`. An empty square yields none.
#[cfg_attr(feature = "hotpath", hotpath::measure)]
pub fn candidate_moves(board: &Board, src: Square) -> Destinations {
    let Some(piece) = board.get(src) else {
        return Destinations::new();
    };

    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, src, &piece),
        PieceKind::Knight => step_moves(board, src, &piece, &KNIGHT_OFFSETS),
        PieceKind::Bishop => sliding_moves(board, src, &piece, &BISHOP_DIRECTIONS),
        PieceKind::Rook => sliding_moves(board, src, &piece, &ROOK_DIRECTIONS),
        PieceKind::Queen => {
            let mut moves = sliding_moves(board, src, &piece, &BISHOP_DIRECTIONS);
            moves.extend(sliding_moves(board, src, &piece, &ROOK_DIRECTIONS));
            moves
        }
        PieceKind::King => step_moves(board, src, &piece, &KING_OFFSETS),
    }
}

fn pawn_moves(board: &Board, src: Square, piece: &Piece) -> Destinations {
    let mut moves = Destinations::new();
    let direction = piece.color.forward();

    // Single push, then double push from the starting rank
    if let Some(one) = src.offset(direction, 0).filter(|sq| board.is_empty(*sq)) {
        moves.push(one);

        if src.rank == piece.color.pawn_rank() {
            if let Some(two) = one.offset(direction, 0).filter(|sq| board.is_empty(*sq)) {
                moves.push(two);
            }
        }
    }

    // Diagonal captures only
    for file_offset in [-1, 1] {
        if let Some(dst) = src.offset(direction, file_offset) {
            if board.get(dst).is_some_and(|target| target.color != piece.color) {
                moves.push(dst);
            }
        }
    }

    moves
}

fn step_moves(board: &Board, src: Square, piece: &Piece, offsets: &[(i32, i32)]) -> Destinations {
    offsets
        .iter()
        .filter_map(|(d_rank, d_file)| src.offset(*d_rank, *d_file))
        .filter(|dst| board.get(*dst).is_none_or(|target| target.color != piece.color))
        .collect()
}

fn sliding_moves(
    board: &Board,
    src: Square,
    piece: &Piece,
    directions: &[(i32, i32)],
) -> Destinations {
    let mut moves = Destinations::new();

    for (d_rank, d_file) in directions {
        let mut cursor = src;

        while let Some(dst) = cursor.offset(*d_rank, *d_file) {
            match board.get(dst) {
                Some(target) => {
                    if target.color != piece.color {
                        moves.push(dst);
                    }
                    break;
                }
                None => moves.push(dst),
            }
            cursor = dst;
        }
    }

    moves
}
