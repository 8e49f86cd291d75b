use crate::color::Color;
use crate::error::ParseError;
use crate::pieces::{Piece, PieceKind};
use crate::square::{BOARD_SIZE, Square};
use std::fmt;

pub const STANDARD_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid indexed `[rank][file]`. Copying a board yields an independent position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn standard() -> Self {
        let mut board = Board::empty();

        for color in Color::ALL {
            for (file, kind) in BACK_RANK.iter().enumerate() {
                board.squares[color.back_rank()][file] = Some(Piece::new(*kind, color));
                board.squares[color.pawn_rank()][file] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }

        board
    }

    /// Parse the piece-placement field of a FEN string. The first row is rank 8.
    pub fn from_fen(fen: &str) -> Result<Self, ParseError> {
        let mut board = Board::empty();

        let rows: Vec<&str> = fen.split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(ParseError::InvalidFen(format!(
                "expected {} rows, got {}",
                BOARD_SIZE,
                rows.len()
            )));
        }

        for (row_idx, row_str) in rows.iter().enumerate() {
            let rank = BOARD_SIZE - 1 - row_idx;
            let mut file = 0;
            let mut after_digit = false;

            for c in row_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    // A run of empty squares is a single digit 1-8
                    if skip == 0 || after_digit {
                        return Err(ParseError::InvalidFen(format!(
                            "bad empty-square count in rank {}",
                            rank + 1
                        )));
                    }
                    file += skip as usize;
                    after_digit = true;
                    continue;
                }
                after_digit = false;

                if let Some(piece) = Piece::from_char(c) {
                    if file >= BOARD_SIZE {
                        return Err(ParseError::InvalidFen(format!(
                            "rank {} overflows the board",
                            rank + 1
                        )));
                    }
                    board.squares[rank][file] = Some(piece);
                    file += 1;
                } else {
                    return Err(ParseError::InvalidFen(format!("unexpected character {:?}", c)));
                }
            }

            if file != BOARD_SIZE {
                return Err(ParseError::InvalidFen(format!(
                    "rank {} has {} squares",
                    rank + 1,
                    file
                )));
            }
        }

        Ok(board)
    }

    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for rank in (0..BOARD_SIZE).rev() {
            let mut empty_count = 0;

            for file in 0..BOARD_SIZE {
                if let Some(piece) = self.squares[rank][file] {
                    if empty_count > 0 {
                        fen.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    fen.push(piece.to_char());
                } else {
                    empty_count += 1;
                }
            }

            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }

            if rank > 0 {
                fen.push('/');
            }
        }

        fen
    }

    pub fn get(&self, sq: Square) -> Option<Piece> {
        if sq.is_valid() {
            self.squares[sq.rank][sq.file]
        } else {
            None
        }
    }

    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        if sq.is_valid() {
            self.squares[sq.rank][sq.file] = piece;
        }
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Copy of this board with the piece on `from` moved to `to`.
    /// Whatever stood on `to` is discarded; no promotion is applied.
    pub fn with_move(&self, from: Square, to: Square) -> Board {
        let mut next = *self;
        let piece = next.get(from);
        next.set(from, None);
        next.set(to, piece);
        next
    }

    pub fn pieces(&self, color: Color) -> Vec<(Square, Piece)> {
        Square::all()
            .filter_map(|sq| self.get(sq).map(|piece| (sq, piece)))
            .filter(|(_, piece)| piece.color == color)
            .collect()
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|sq| self.get(*sq) == Some(Piece::new(PieceKind::King, color)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rank in (0..BOARD_SIZE).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..BOARD_SIZE {
                if let Some(piece) = self.squares[rank][file] {
                    write!(f, "{} ", piece.to_char())?;
                } else {
                    write!(f, ". ")?;
                }
            }
            writeln!(f)?;
        }

        write!(f, "  ")?;
        for file in 0..BOARD_SIZE {
            write!(f, "{} ", (b'a' + file as u8) as char)?;
        }
        Ok(())
    }
}
