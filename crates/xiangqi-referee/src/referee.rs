use log::{debug, info, warn};
use thiserror::Error;
use xiangqi_core::{GameError, Move, Outcome, SuggestionError, Xiangqi};

use crate::config::RefereeConfig;
use crate::oracle::MoveOracle;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RefereeError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("oracle has no move for {0}")]
    NoSuggestion(xiangqi_core::Color),
    #[error("oracle rejected {attempts} times, last: {last}")]
    TooManyRejections {
        attempts: u32,
        last: SuggestionError,
    },
    #[error("config: {0}")]
    Config(String),
}

/// Owns the game between the presentation layer and the oracle. Every move,
/// from either side, is validated before it touches the board.
#[derive(Debug, Clone)]
pub struct Referee {
    game: Xiangqi,
    config: RefereeConfig,
}

impl Referee {
    pub fn new(config: RefereeConfig) -> Result<Self, RefereeError> {
        Self::with_game(Xiangqi::new(), config)
    }

    pub fn with_game(game: Xiangqi, config: RefereeConfig) -> Result<Self, RefereeError> {
        config.validate()?;
        Ok(Self { game, config })
    }

    pub fn game(&self) -> &Xiangqi {
        &self.game
    }

    pub fn config(&self) -> &RefereeConfig {
        &self.config
    }

    pub fn outcome(&self) -> Outcome {
        self.game.outcome()
    }

    pub fn oracle_to_move(&self) -> bool {
        !self.game.is_game_over() && self.game.turn() == self.config.oracle_color
    }

    /// Plays a move chosen through the presentation layer.
    pub fn play(&mut self, mv: Move) -> Result<Outcome, RefereeError> {
        let side = self.game.turn();
        let outcome = self.game.play(mv)?;
        debug!("{side} played {mv}");
        self.log_outcome(outcome);
        Ok(outcome)
    }

    /// Asks `oracle` for a move for the side to move and applies the first
    /// reply that passes validation. Rejected replies are re-requested up to
    /// `max_attempts` times in total; an absent reply ends the turn at once.
    pub fn request_move<O: MoveOracle>(&mut self, oracle: &mut O) -> Result<Outcome, RefereeError> {
        if self.game.is_game_over() {
            return Err(GameError::GameOver(self.game.outcome()).into());
        }

        let side = self.game.turn();
        let snapshot = self.game.snapshot();
        let mut last = SuggestionError::NoMove;

        for attempt in 1..=self.config.max_attempts {
            let reply = oracle.suggest(&snapshot);
            match self.game.apply_suggestion(reply.as_ref()) {
                Ok(outcome) => {
                    info!("oracle ({side}) played on attempt {attempt}");
                    self.log_outcome(outcome);
                    return Ok(outcome);
                }
                Err(GameError::Suggestion(SuggestionError::NoMove)) => {
                    warn!("oracle returned no move for {side}");
                    return Err(RefereeError::NoSuggestion(side));
                }
                Err(GameError::Suggestion(err)) => {
                    warn!(
                        "rejected oracle move for {side} (attempt {attempt}/{}): {err}",
                        self.config.max_attempts
                    );
                    last = err;
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(RefereeError::TooManyRejections {
            attempts: self.config.max_attempts,
            last,
        })
    }

    pub fn undo(&mut self) -> Result<Move, RefereeError> {
        Ok(self.game.undo()?)
    }

    pub fn reset(&mut self) {
        info!("game reset");
        self.game.reset();
    }

    fn log_outcome(&self, outcome: Outcome) {
        if outcome.is_terminal() {
            info!("game over: {outcome}");
        }
    }
}
