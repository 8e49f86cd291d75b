use tracing::{debug, info};

use crate::board::Board;
use crate::check::is_in_check;
use crate::color::Color;
use crate::error::{GameError, ParseError};
use crate::legality::{is_legal, is_promotion_move, legal_destinations, legal_moves};
use crate::movegen::Destinations;
use crate::outcome::{DecisionReason, Outcome};
use crate::pieces::{Piece, PieceKind};
use crate::r#move::{Move, MoveFlags, MoveRecord};
use crate::square::Square;
use crate::terminal::classify_terminal;

/// Whether each king is currently attacked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckFlags {
    pub white: bool,
    pub black: bool,
}

impl CheckFlags {
    pub fn compute(board: &Board) -> Self {
        CheckFlags {
            white: is_in_check(board, Color::White),
            black: is_in_check(board, Color::Black),
        }
    }

    pub fn get(&self, color: Color) -> bool {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }
}

/// Detached copy of the session state handed back to callers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub board: Board,
    pub turn: Color,
    pub check: CheckFlags,
    pub outcome: Outcome,
    pub last_move: Option<MoveRecord>,
    pub move_count: usize,
}

/// One interactive match. All mutation goes through `apply_move`, `resign`,
/// `accept_draw` and `reset`, and a failed call leaves every field as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Color,
    move_log: Vec<MoveRecord>,
    check: CheckFlags,
    outcome: Outcome,
}

impl Game {
    pub fn standard() -> Self {
        Game {
            board: Board::standard(),
            turn: Color::White,
            move_log: Vec::new(),
            check: CheckFlags::default(),
            outcome: Outcome::InProgress,
        }
    }

    /// Start from an arbitrary position with `turn` to move. Check flags and
    /// the terminal state are computed immediately, so a mated or stalemated
    /// side yields an already decided game.
    pub fn from_board(board: Board, turn: Color) -> Self {
        Game {
            board,
            turn,
            move_log: Vec::new(),
            check: CheckFlags::compute(&board),
            outcome: classify_terminal(&board, turn).into_outcome(),
        }
    }

    /// Parse `"<placement> <w|b>"`, i.e. the first two FEN fields. The side
    /// to move is required; any further fields are ignored.
    pub fn from_fen(fen: &str) -> Result<Self, ParseError> {
        let mut parts = fen.split_whitespace();

        let placement = parts
            .next()
            .ok_or_else(|| ParseError::InvalidFen("empty string".to_string()))?;
        let board = Board::from_fen(placement)?;

        let turn = match parts.next() {
            Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => {
                return Err(ParseError::InvalidFen(format!(
                    "invalid side to move {:?}",
                    other
                )));
            }
            None => return Err(ParseError::InvalidFen("missing side to move".to_string())),
        };

        Ok(Game::from_board(board, turn))
    }

    pub fn to_fen(&self) -> String {
        let side = match self.turn {
            Color::White => 'w',
            Color::Black => 'b',
        };
        format!("{} {}", self.board.to_fen(), side)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn get_piece(&self, sq: Square) -> Option<Piece> {
        self.board.get(sq)
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn move_log(&self) -> &[MoveRecord] {
        &self.move_log
    }

    pub fn move_count(&self) -> usize {
        self.move_log.len()
    }

    pub fn check(&self) -> CheckFlags {
        self.check
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        self.check.get(color)
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_decided()
    }

    /// Legal destinations for the piece on `src`, empty when it does not
    /// belong to the side to move or the game is over.
    pub fn legal_destinations(&self, src: Square) -> Destinations {
        match self.board.get(src) {
            Some(piece) if piece.color == self.turn && !self.is_over() => {
                legal_destinations(&self.board, src)
            }
            _ => Destinations::new(),
        }
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }

        legal_moves(&self.board, self.turn)
            .into_iter()
            .flat_map(|(from, to)| {
                let promotions: &[PieceKind] = if is_promotion_move(&self.board, from, to) {
                    &PieceKind::PROMOTION_TARGETS
                } else {
                    &[]
                };

                let plain = promotions.is_empty().then(|| Move::new(from, to));
                plain.into_iter().chain(
                    promotions
                        .iter()
                        .map(move |kind| Move::with_promotion(from, to, *kind)),
                )
            })
            .collect()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            turn: self.turn,
            check: self.check,
            outcome: self.outcome,
            last_move: self.move_log.last().copied(),
            move_count: self.move_log.len(),
        }
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        match self.outcome {
            Outcome::InProgress => Ok(()),
            decided => Err(GameError::GameAlreadyOver(decided)),
        }
    }

    /// Validate a move for the side to move and return the promotion kind
    /// to apply, if any. Nothing is written.
    fn validate(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<(Piece, Option<PieceKind>), GameError> {
        self.ensure_in_progress()?;

        let illegal = GameError::IllegalMove { from, to };

        let piece = match self.board.get(from) {
            Some(piece) if piece.color == self.turn => piece,
            _ => return Err(illegal),
        };

        if !is_legal(&self.board, from, to) {
            return Err(illegal);
        }

        if !is_promotion_move(&self.board, from, to) {
            if let Some(kind) = promotion {
                debug!(%from, %to, %kind, "ignoring promotion on a non-promoting move");
            }
            return Ok((piece, None));
        }

        match promotion {
            None => Err(GameError::PromotionRequired { from, to }),
            Some(kind) if !kind.is_promotion_target() => {
                Err(GameError::InvalidPromotionKind(kind))
            }
            Some(kind) => Ok((piece, Some(kind))),
        }
    }

    /// Validate and commit a move, then hand back the resulting state.
    #[cfg_attr(feature = "hotpath", hotpath::measure)]
    pub fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<GameSnapshot, GameError> {
        let (piece, promotion) = match self.validate(from, to, promotion) {
            Ok(validated) => validated,
            Err(err) => {
                debug!(%from, %to, mover = %self.turn, error = %err, "move rejected");
                return Err(err);
            }
        };

        let captured = self.board.get(to).map(|p| p.kind);

        let mut board = self.board.with_move(from, to);
        if let Some(kind) = promotion {
            board.set(to, Some(Piece::new(kind, piece.color)));
        }

        let turn = self.turn.opposite();
        let check = CheckFlags::compute(&board);

        let mut flags = MoveFlags::empty();
        if captured.is_some() {
            flags |= MoveFlags::CAPTURE;
        }
        if piece.kind == PieceKind::Pawn && from.rank.abs_diff(to.rank) == 2 {
            flags |= MoveFlags::DOUBLE_PUSH;
        }
        if promotion.is_some() {
            flags |= MoveFlags::PROMOTION;
        }
        if check.get(turn) {
            flags |= MoveFlags::CHECK;
        }

        let record = MoveRecord {
            mover: piece.color,
            kind: piece.kind,
            from,
            to,
            captured,
            promotion,
            flags,
        };

        self.board = board;
        self.turn = turn;
        self.check = check;
        self.move_log.push(record);
        self.outcome = classify_terminal(&self.board, self.turn).into_outcome();

        debug!(mover = %record.mover, piece = %record.kind, %from, %to, "move applied");
        if let Outcome::Decided { reason, winner } = self.outcome {
            info!(%reason, winner = ?winner, moves = self.move_log.len(), "game decided");
        }

        Ok(self.snapshot())
    }

    /// Apply a move written as coordinate text, e.g. `e2e4` or `e7e8q`.
    pub fn apply_lan(&mut self, lan: &str) -> Result<GameSnapshot, GameError> {
        let mv = Move::from_lan(lan)?;
        self.apply_move(mv.from, mv.to, mv.promotion)
    }

    pub fn resign(&mut self, color: Color) -> Result<GameSnapshot, GameError> {
        self.ensure_in_progress()?;

        self.outcome = Outcome::decided(DecisionReason::Resignation, Some(color.opposite()));
        info!(resigning = %color, "game decided by resignation");

        Ok(self.snapshot())
    }

    pub fn accept_draw(&mut self) -> Result<GameSnapshot, GameError> {
        self.ensure_in_progress()?;

        self.outcome = Outcome::decided(DecisionReason::AgreedDraw, None);
        info!(moves = self.move_log.len(), "game drawn by agreement");

        Ok(self.snapshot())
    }

    /// Back to the starting position, whatever the current state.
    pub fn reset(&mut self) -> GameSnapshot {
        *self = Game::standard();
        debug!("game reset");
        self.snapshot()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Game(turn: {}, outcome: {}, check: {:?})\n{}",
            self.turn, self.outcome, self.check, self.board
        )
    }
}
