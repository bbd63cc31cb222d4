//! Team aggregator
//!
//! `Standings` is the only mutable state of a run. It is threaded through a
//! fold by value and consumed by the ranker. Teams keep the order in which
//! they were first seen so output is reproducible.

use crate::models::{MatchOutcome, TeamTotal};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default)]
pub struct Standings {
    index: FxHashMap<String, usize>,
    teams: Vec<TeamTotal>,
}

impl Standings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold every outcome of a sequence into a fresh state.
    pub fn from_outcomes<'a, I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = &'a MatchOutcome>,
    {
        outcomes.into_iter().fold(Self::new(), Self::fold)
    }

    /// Value-in, value-out form of [`Standings::record`].
    pub fn fold(mut self, outcome: &MatchOutcome) -> Self {
        self.record(outcome);
        self
    }

    /// Add both sides of one match. Each side plays exactly one game.
    pub fn record(&mut self, outcome: &MatchOutcome) {
        self.entry(&outcome.side_a)
            .add_game(outcome.score_a, outcome.net_a);
        self.entry(&outcome.side_b)
            .add_game(outcome.score_b, outcome.net_b);
    }

    /// Combine two partial states by addition. Teams new to `self` are
    /// appended in `other`'s order.
    pub fn merge(mut self, other: Standings) -> Self {
        for total in &other.teams {
            self.entry(&total.team).absorb(total);
        }
        self
    }

    pub fn get(&self, team: &str) -> Option<&TeamTotal> {
        self.index.get(team).map(|&i| &self.teams[i])
    }

    pub fn teams(&self) -> &[TeamTotal] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn into_totals(self) -> Vec<TeamTotal> {
        self.teams
    }

    fn entry(&mut self, team: &str) -> &mut TeamTotal {
        let i = match self.index.get(team) {
            Some(&i) => i,
            None => {
                self.teams.push(TeamTotal::new(team));
                let i = self.teams.len() - 1;
                self.index.insert(team.to_string(), i);
                i
            }
        };
        &mut self.teams[i]
    }
}

impl IntoIterator for Standings {
    type Item = TeamTotal;
    type IntoIter = std::vec::IntoIter<TeamTotal>;

    fn into_iter(self) -> Self::IntoIter {
        self.teams.into_iter()
    }
}
