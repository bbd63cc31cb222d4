//! Data carried between pipeline stages
//!
//! MatchInput (parser) → MatchOutcome (resolver) → TeamTotal (aggregator) → RankedEntry (ranker)

pub mod match_input;
pub mod outcome;
pub mod ranked;
pub mod team_total;

pub use match_input::MatchInput;
pub use outcome::{MatchOutcome, Side, Tier};
pub use ranked::{Rank, RankedEntry};
pub use team_total::TeamTotal;
