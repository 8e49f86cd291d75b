//! A game session shared between several callers, e.g. one connection per player.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::color::Color;
use crate::error::GameError;
use crate::game::{Game, GameSnapshot};
use crate::pieces::PieceKind;
use crate::square::Square;

/// Cloning yields another handle to the same session. Each call holds the lock
/// for its whole duration and returns a detached snapshot.
#[derive(Clone, Debug, Default)]
pub struct SharedGame {
    inner: Arc<Mutex<Game>>,
}

impl SharedGame {
    pub fn new(game: Game) -> Self {
        SharedGame {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    // Mutations are validated before any write, so a poisoned session is
    // still consistent and can be used.
    fn lock(&self) -> MutexGuard<'_, Game> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.lock().snapshot()
    }

    pub fn apply_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<GameSnapshot, GameError> {
        self.lock().apply_move(from, to, promotion)
    }

    pub fn resign(&self, color: Color) -> Result<GameSnapshot, GameError> {
        self.lock().resign(color)
    }

    pub fn accept_draw(&self) -> Result<GameSnapshot, GameError> {
        self.lock().accept_draw()
    }

    pub fn reset(&self) -> GameSnapshot {
        self.lock().reset()
    }

    /// Run `f` against the live session while holding the lock.
    pub fn with_game<R>(&self, f: impl FnOnce(&Game) -> R) -> R {
        f(&self.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{DecisionReason, Outcome};
    use std::thread;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).expect("valid square")
    }

    #[test]
    fn test_handles_share_one_session() {
        let white = SharedGame::default();
        let black = white.clone();

        white
            .apply_move(sq("e2"), sq("e4"), None)
            .expect("e2e4 should be legal");
        let snapshot = black
            .apply_move(sq("e7"), sq("e5"), None)
            .expect("e7e5 should be legal");

        assert_eq!(snapshot.move_count, 2);
        assert_eq!(white.snapshot(), snapshot);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let shared = SharedGame::default();
        let before = shared.snapshot();
        shared
            .apply_move(sq("g1"), sq("f3"), None)
            .expect("Nf3 should be legal");
        assert_eq!(before.move_count, 0);
        assert_eq!(shared.snapshot().move_count, 1);
    }

    #[test]
    fn test_concurrent_callers_serialize() {
        let shared = SharedGame::default();

        // Both threads race to make White's first move; exactly one succeeds
        let handles: Vec<_> = [("e2", "e4"), ("d2", "d4")]
            .into_iter()
            .map(|(from, to)| {
                let shared = shared.clone();
                thread::spawn(move || shared.apply_move(sq(from), sq(to), None).is_ok())
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().expect("thread panicked"))
            .filter(|ok| *ok)
            .count();

        assert_eq!(successes, 1);
        assert_eq!(shared.with_game(|game| game.turn()), Color::Black);
    }

    #[test]
    fn test_resign_and_reset() {
        let shared = SharedGame::new(Game::standard());
        let snapshot = shared.resign(Color::Black).expect("game in progress");
        assert_eq!(
            snapshot.outcome,
            Outcome::decided(DecisionReason::Resignation, Some(Color::White))
        );
        assert!(shared.accept_draw().is_err());

        let snapshot = shared.reset();
        assert_eq!(snapshot.outcome, Outcome::InProgress);
    }
}
