mod agent;
pub mod minimax;
mod random;

pub use agent::Agent;
pub use minimax::{
    best_value_for_maximizer, best_value_for_minimizer, search_move, Decision, DecisionKind,
    MinimaxAgent, RANDOM_MOVE_PROBABILITY, SEARCH_CUTOFF,
};
pub use random::RandomAgent;
