use super::team_total::TeamTotal;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Competition rank. `position` stays numeric for sorting; `tied` is presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rank {
    pub position: u32,
    pub tied: bool,
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.tied {
            write!(f, "T-{}", self.position)
        } else {
            write!(f, "{}", self.position)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub rank: Rank,
    pub team: String,
    pub score: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub net: Decimal,
    pub games: u32,
}

impl RankedEntry {
    pub fn new(rank: Rank, total: TeamTotal) -> Self {
        Self {
            rank,
            team: total.team,
            score: total.score,
            net: total.net,
            games: total.games,
        }
    }

    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.score as f64 / self.games as f64 * 100.0
        }
    }
}
