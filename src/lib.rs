pub mod board;
pub mod check;
pub mod color;
pub mod error;
pub mod game;
pub mod legality;
pub mod r#move;
pub mod movegen;
pub mod outcome;
pub mod pieces;
pub mod shared;
pub mod square;
pub mod terminal;

#[cfg(feature = "serde")]
pub mod serde_support;

pub use board::Board;
pub use check::{is_in_check, is_square_reachable, reachable_squares};
pub use color::Color;
pub use error::{GameError, ParseError};
pub use game::{CheckFlags, Game, GameSnapshot};
pub use legality::{is_legal, is_promotion_move, legal_destinations, legal_moves};
pub use r#move::{Move, MoveFlags, MoveRecord};
pub use movegen::candidate_moves;
pub use outcome::{DecisionReason, Outcome};
pub use pieces::{Piece, PieceKind};
pub use shared::SharedGame;
pub use square::Square;
pub use terminal::{Terminal, classify_terminal, has_any_legal_move};

#[cfg(feature = "python")]
extern crate pyo3;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule(gil_used = false)]
fn chess_rules(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use python_bindings::*;
    m.add_class::<PyGame>()?;
    m.add_class::<PyPiece>()?;
    m.add("WHITE", Color::White as i8)?;
    m.add("BLACK", Color::Black as i8)?;
    Ok(())
}

#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use pyo3::exceptions::PyValueError;

    fn square(rank: usize, file: usize) -> PyResult<Square> {
        Square::try_new(rank, file).ok_or_else(|| {
            PyErr::new::<PyValueError, _>(format!(
                "Square out of range: rank={}, file={}",
                rank, file
            ))
        })
    }

    fn color(value: i8) -> PyResult<Color> {
        Color::from_int(value).ok_or_else(|| {
            PyErr::new::<PyValueError, _>(format!(
                "Invalid color: must be 1 (White) or -1 (Black), got {}",
                value
            ))
        })
    }

    fn value_error(err: GameError) -> PyErr {
        PyErr::new::<PyValueError, _>(err.to_string())
    }

    #[pyclass(name = "Piece")]
    #[derive(Clone, Copy, Debug)]
    pub struct PyPiece {
        piece: Piece,
    }

    #[pymethods]
    impl PyPiece {
        pub fn kind(&self) -> String {
            self.piece.kind.to_string()
        }

        pub fn color(&self) -> i8 {
            self.piece.color as i8
        }

        pub fn symbol(&self) -> String {
            self.piece.to_char().to_string()
        }

        pub fn __repr__(&self) -> String {
            format!("Piece({:?}, {:?})", self.piece.kind, self.piece.color)
        }
    }

    #[pyclass(name = "Game")]
    pub struct PyGame {
        game: Game,
    }

    #[pymethods]
    impl PyGame {
        #[new]
        pub fn new() -> Self {
            PyGame {
                game: Game::standard(),
            }
        }

        #[staticmethod]
        pub fn from_fen(fen: &str) -> PyResult<Self> {
            let game = Game::from_fen(fen).map_err(|e| value_error(e.into()))?;
            Ok(PyGame { game })
        }

        // ---------------------------------------------------------------------
        // Commands
        // ---------------------------------------------------------------------

        #[pyo3(signature = (from_rank, from_file, to_rank, to_file, promotion=None))]
        pub fn apply_move(
            &mut self,
            from_rank: usize,
            from_file: usize,
            to_rank: usize,
            to_file: usize,
            promotion: Option<&str>,
        ) -> PyResult<()> {
            let promotion = match promotion {
                None => None,
                Some(text) => {
                    let kind = text
                        .chars()
                        .next()
                        .and_then(PieceKind::from_char)
                        .ok_or_else(|| {
                            PyErr::new::<PyValueError, _>(format!(
                                "Unknown promotion piece: {:?}",
                                text
                            ))
                        })?;
                    Some(kind)
                }
            };

            self.game
                .apply_move(
                    square(from_rank, from_file)?,
                    square(to_rank, to_file)?,
                    promotion,
                )
                .map(|_| ())
                .map_err(value_error)
        }

        pub fn resign(&mut self, color_value: i8) -> PyResult<()> {
            self.game
                .resign(color(color_value)?)
                .map(|_| ())
                .map_err(value_error)
        }

        pub fn accept_draw(&mut self) -> PyResult<()> {
            self.game.accept_draw().map(|_| ()).map_err(value_error)
        }

        pub fn reset(&mut self) {
            self.game.reset();
        }

        // ---------------------------------------------------------------------
        // Queries
        // ---------------------------------------------------------------------

        pub fn turn(&self) -> i8 {
            self.game.turn() as i8
        }

        pub fn is_check(&self, color_value: i8) -> PyResult<bool> {
            Ok(self.game.is_in_check(color(color_value)?))
        }

        pub fn is_over(&self) -> bool {
            self.game.is_over()
        }

        pub fn outcome(&self) -> Option<String> {
            self.game.outcome().reason().map(|r| r.to_string())
        }

        pub fn winner(&self) -> Option<i8> {
            self.game.outcome().winner().map(|c| c as i8)
        }

        pub fn get_piece(&self, rank: usize, file: usize) -> PyResult<Option<PyPiece>> {
            let sq = square(rank, file)?;
            Ok(self.game.get_piece(sq).map(|piece| PyPiece { piece }))
        }

        pub fn legal_destinations(&self, rank: usize, file: usize) -> PyResult<Vec<(usize, usize)>> {
            let sq = square(rank, file)?;
            Ok(self
                .game
                .legal_destinations(sq)
                .into_iter()
                .map(|dst| (dst.rank, dst.file))
                .collect())
        }

        pub fn move_log(&self) -> Vec<String> {
            self.game.move_log().iter().map(|r| r.to_string()).collect()
        }

        pub fn to_fen(&self) -> String {
            self.game.to_fen()
        }

        // ---------------------------------------------------------------------
        // Dunder Methods
        // ---------------------------------------------------------------------

        pub fn __str__(&self) -> String {
            self.game.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!(
                "Game(turn={:?}, over={}, moves={})",
                self.game.turn(),
                self.game.is_over(),
                self.game.move_count()
            )
        }
    }
} // end python_bindings module
