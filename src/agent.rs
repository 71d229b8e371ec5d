//! Agent façade driving one search engine per turn
//!
//! An [`Agent`] owns a boxed [`SearchEngine`], hands it a clone of the live game
//! state each turn and returns the chosen move. The caller's state is never
//! touched.

use log::{debug, info};

use crate::{
    board::Board,
    config::{AgentConfig, EngineKind, RolloutKind},
    evaluator::{Evaluator, LineEvaluator},
    game_state::GameState,
    mcts::MCTS,
    minimax::Minimax,
    policy::rollout::HeuristicRollout,
    Result,
};

/// Trait for anything that can decide a move
pub trait SearchEngine<S: GameState> {
    /// Chooses a move for `player` in `state`, or `None` if no move is available
    fn choose_move(&mut self, state: &S, player: &S::Player) -> Option<S::Move>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

impl<S: GameState, E: Evaluator<S>> SearchEngine<S> for Minimax<S, E> {
    fn choose_move(&mut self, state: &S, player: &S::Player) -> Option<S::Move> {
        Minimax::choose_move(self, state, player)
    }

    fn name(&self) -> &'static str {
        "minimax"
    }
}

impl<S: GameState + 'static> SearchEngine<S> for MCTS<S> {
    fn choose_move(&mut self, state: &S, player: &S::Player) -> Option<S::Move> {
        MCTS::choose_move(self, state, player)
    }

    fn name(&self) -> &'static str {
        "mcts"
    }
}

/// A named player backed by a search engine
pub struct Agent<S: GameState> {
    name: String,
    player: S::Player,
    engine: Box<dyn SearchEngine<S>>,
}

impl<S: GameState + 'static> Agent<S> {
    /// Creates an agent playing as `player` with the given engine
    pub fn new<E>(name: impl Into<String>, player: S::Player, engine: E) -> Self
    where
        E: SearchEngine<S> + 'static,
    {
        Agent {
            name: name.into(),
            player,
            engine: Box::new(engine),
        }
    }

    /// Returns the agent's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player this agent moves for
    pub fn player(&self) -> &S::Player {
        &self.player
    }

    /// Returns the name of the engine in use
    pub fn engine_name(&self) -> &'static str {
        self.engine.name()
    }

    /// Chooses this turn's move
    ///
    /// The engine searches a clone of `live_state`; `None` means no move is
    /// available, which is not an error.
    pub fn act(&mut self, live_state: &S) -> Option<S::Move> {
        let snapshot = live_state.clone();
        let chosen = self.engine.choose_move(&snapshot, &self.player);
        debug!(
            "{} ({}) as {:?} chose {:?}",
            self.name,
            self.engine.name(),
            self.player,
            chosen
        );
        chosen
    }
}

impl<S: Board + 'static> Agent<S> {
    /// Builds an agent for a grid game from configuration
    ///
    /// Minimax agents score leaves with the default [`LineEvaluator`]; MCTS agents
    /// use the configured rollout policy.
    pub fn from_config(
        name: impl Into<String>,
        player: S::Player,
        config: &AgentConfig,
    ) -> Result<Self> {
        config.validate()?;
        let name = name.into();

        let agent = match config.engine {
            EngineKind::Minimax => {
                let engine = Minimax::new(config.minimax.clone(), LineEvaluator::default());
                Agent::new(name, player, engine)
            }
            EngineKind::Mcts => {
                let engine = MCTS::new(config.mcts.clone());
                let engine = match config.rollout {
                    RolloutKind::Random => engine,
                    RolloutKind::Heuristic => {
                        engine.with_rollout_policy(HeuristicRollout::new(config.win_length))
                    }
                };
                Agent::new(name, player, engine)
            }
        };

        info!(
            "Agent {} ready: engine={}, rollout={}",
            agent.name, config.engine, config.rollout
        );
        Ok(agent)
    }
}
