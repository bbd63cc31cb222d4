//! # standings_core - Match Scoring and Standings Engine
//!
//! Turns per-match records into per-match outcomes and a ranked standings
//! table. Pure and deterministic: the same rows in the same order always
//! produce the same outcomes and the same ranking.
//!
//! ## Pipeline
//! - [`parser`]: raw record → [`MatchInput`] (strict or tolerant)
//! - [`resolver`]: [`MatchInput`] → [`MatchOutcome`] via the three-tier tie-break
//! - [`aggregator`]: outcomes → [`Standings`] (per-team totals)
//! - [`ranker`]: totals → [`RankedEntry`] list with shared ranks
//! - [`pipeline`]: [`StandingsRun`] wiring the four together

pub mod aggregator;
pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod ranker;
pub mod resolver;

pub use aggregator::Standings;
pub use config::{ColumnLayout, ParseMode, ScoringRules, StandingsConfig};
pub use error::{Result, RowDefect, StandingsError};
pub use models::{MatchInput, MatchOutcome, Rank, RankedEntry, Side, TeamTotal, Tier};
pub use parser::parse_row;
pub use pipeline::{RunReport, StandingsRun};
pub use ranker::{find_by_name, lookup_all, rank};
pub use resolver::{resolve, resolve_all};
