//! One standings run: Parser → Resolver → Aggregator → Ranker
//!
//! ```rust
//! use standings_core::{StandingsConfig, StandingsRun};
//!
//! let config = StandingsConfig::default();
//! let mut run = StandingsRun::new(&config);
//! run.push_row(2, &["Owls", "Hawks", "12", "9", "0", "0", "", "0", "0"]);
//! run.push_row(3, &["Hawks", "Crows", "5", "5", "2", "1", "", "0", "0"]);
//! run.push_row(4, &["Crows"]); // rejected, run continues
//!
//! let report = run.finish();
//! assert_eq!(report.outcomes.len(), 2);
//! assert_eq!(report.rejected.len(), 1);
//! assert_eq!(report.ranking[0].team, "Owls");
//! ```

use crate::aggregator::Standings;
use crate::config::StandingsConfig;
use crate::error::StandingsError;
use crate::models::{MatchOutcome, RankedEntry};
use crate::parser::parse_row;
use crate::ranker::rank;
use crate::resolver::resolve;

/// Per-run state. Rows are resolved and folded as they arrive; `finish`
/// freezes the standings and ranks them.
#[derive(Debug)]
pub struct StandingsRun<'c> {
    config: &'c StandingsConfig,
    outcomes: Vec<MatchOutcome>,
    standings: Standings,
    rejected: Vec<StandingsError>,
}

/// Everything a run produced, in input order where order matters.
#[derive(Debug)]
pub struct RunReport {
    pub outcomes: Vec<MatchOutcome>,
    pub ranking: Vec<RankedEntry>,
    pub rejected: Vec<StandingsError>,
}

impl<'c> StandingsRun<'c> {
    pub fn new(config: &'c StandingsConfig) -> Self {
        Self {
            config,
            outcomes: Vec::new(),
            standings: Standings::new(),
            rejected: Vec::new(),
        }
    }

    /// Parse, resolve and fold one raw record. A malformed record is logged
    /// and kept in the rejection list; it never aborts the run.
    ///
    /// Returns the outcome when the row was accepted.
    pub fn push_row<S: AsRef<str>>(&mut self, line: u64, fields: &[S]) -> Option<&MatchOutcome> {
        match parse_row(fields, &self.config.layout, self.config.mode, line) {
            Ok(input) => {
                let outcome = resolve(&input, &self.config.rules);
                self.standings.record(&outcome);
                self.outcomes.push(outcome);
                self.outcomes.last()
            }
            Err(err) => {
                self.reject(err);
                None
            }
        }
    }

    /// Keep a rejection raised before the row parser, such as an undecodable record.
    pub fn reject(&mut self, err: StandingsError) {
        log::warn!("Skipping row: {}", err);
        self.rejected.push(err);
    }

    pub fn finish(self) -> RunReport {
        log::info!(
            "Run finished: {} matches, {} teams, {} rejected rows",
            self.outcomes.len(),
            self.standings.len(),
            self.rejected.len()
        );
        RunReport {
            ranking: rank(self.standings),
            outcomes: self.outcomes,
            rejected: self.rejected,
        }
    }
}
