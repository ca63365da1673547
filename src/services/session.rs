//! Session and scoreboard
//!
//! Holds both players and the turn engine for the lifetime of the process,
//! carrying win counts from one round to the next.

use tracing::info;

use crate::game_engine::{GameEngine, GameState, Outcome};
use crate::models::errors::GameResult;
use crate::models::player::{Player, PlayerId};

/// Who is ahead on the scoreboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leader {
    Player(PlayerId),
    Tie,
}

pub struct Session {
    players: [Player; 2],
    engine: GameEngine,
    rounds_played: u32,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        Session {
            players: [Player::new(PlayerId::One), Player::new(PlayerId::Two)],
            engine: GameEngine::new(seed),
            rounds_played: 0,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The player whose turn it is, once a round has started.
    pub fn current_player(&self) -> Option<&Player> {
        self.engine.current_player().map(|id| self.player(id))
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Set a display name. Blank input keeps the existing name.
    pub fn rename(&mut self, id: PlayerId, name: &str) -> bool {
        self.players[id.index()].rename(name)
    }

    pub fn start_round(&mut self) -> GameResult<PlayerId> {
        self.engine.start_round()
    }

    /// Forward a move to the engine, crediting the winner if it ends the round.
    pub fn submit_move(&mut self, position_id: i64) -> GameResult<GameState> {
        let state = self.engine.submit_move(position_id)?;
        if let GameState::Finished(outcome) = state {
            self.rounds_played += 1;
            if let Outcome::Win(winner) = outcome {
                self.record_win(winner);
            }
        }
        Ok(state)
    }

    pub fn record_win(&mut self, id: PlayerId) {
        let player = &mut self.players[id.index()];
        player.add_win();
        info!(player = %id, wins = player.wins(), "win recorded");
    }

    pub fn leader(&self) -> Leader {
        let [p1, p2] = &self.players;
        match p1.wins().cmp(&p2.wins()) {
            std::cmp::Ordering::Greater => Leader::Player(PlayerId::One),
            std::cmp::Ordering::Less => Leader::Player(PlayerId::Two),
            std::cmp::Ordering::Equal => Leader::Tie,
        }
    }
}
