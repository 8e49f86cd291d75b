//! Plays seeded random games through the session API and reports how they ended.
//!
//! Built with the `playout` feature. Usage: `random_playout [games] [seed] [max_plies]`.
//! Set `RUST_LOG=chess_rules=debug` to see every move.

use std::collections::BTreeMap;

use chess_rules::{Game, Outcome};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
struct PlayoutConfig {
    games: u32,
    seed: u64,
    max_plies: usize,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: 42,
            max_plies: 400,
        }
    }
}

impl PlayoutConfig {
    fn from_args() -> Result<Self, String> {
        let mut config = PlayoutConfig::default();
        let args: Vec<String> = std::env::args().skip(1).collect();

        if let Some(games) = args.first() {
            config.games = games
                .parse()
                .map_err(|_| format!("Invalid game count: {}", games))?;
        }
        if let Some(seed) = args.get(1) {
            config.seed = seed.parse().map_err(|_| format!("Invalid seed: {}", seed))?;
        }
        if let Some(max_plies) = args.get(2) {
            config.max_plies = max_plies
                .parse()
                .map_err(|_| format!("Invalid ply limit: {}", max_plies))?;
        }

        Ok(config)
    }
}

/// Play one game; `None` when the ply limit is reached first.
fn play_one(rng: &mut StdRng, max_plies: usize) -> Option<Outcome> {
    let mut game = Game::standard();

    for _ in 0..max_plies {
        if game.is_over() {
            break;
        }

        let moves = game.legal_moves();
        let mv = moves.choose(rng)?;
        if let Err(err) = game.apply_move(mv.from, mv.to, mv.promotion) {
            warn!(%mv, error = %err, "generated move was rejected");
            return None;
        }
    }

    game.is_over().then(|| game.outcome())
}

#[cfg_attr(feature = "hotpath", hotpath::main)]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match PlayoutConfig::from_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Usage: random_playout [games] [seed] [max_plies]");
            std::process::exit(2);
        }
    };

    info!(?config, "starting playouts");

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut tally: BTreeMap<String, u32> = BTreeMap::new();

    for _ in 0..config.games {
        let key = match play_one(&mut rng, config.max_plies) {
            Some(outcome) => outcome.to_string(),
            None => "unfinished".to_string(),
        };
        *tally.entry(key).or_default() += 1;
    }

    for (result, count) in &tally {
        println!("{:>24}: {}", result, count);
    }
}
