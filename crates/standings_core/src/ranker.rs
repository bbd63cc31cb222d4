//! Ranker: competition ranking with shared places
//!
//! Totals are sorted by score, then net margin, both descending. Teams equal
//! on both keys form one group; every member takes the group's first 1-based
//! position and is marked tied. The next group starts at its own position,
//! so a tie for 2nd is followed by 4th.

use crate::error::{Result, StandingsError};
use crate::models::{Rank, RankedEntry, TeamTotal};
use std::cmp::Ordering;

/// Rank a set of team totals.
///
/// The sort is stable: tied teams keep their incoming order.
pub fn rank<I>(totals: I) -> Vec<RankedEntry>
where
    I: IntoIterator<Item = TeamTotal>,
{
    let mut sorted: Vec<TeamTotal> = totals.into_iter().collect();
    sorted.sort_by(standing_order);

    let mut entries = Vec::with_capacity(sorted.len());
    let mut start = 0;
    while start < sorted.len() {
        let end = group_end(&sorted, start);
        let tied = end - start > 1;
        let position = start as u32 + 1;
        for total in sorted[start..end].iter().cloned() {
            entries.push(RankedEntry::new(Rank { position, tied }, total));
        }
        start = end;
    }

    entries
}

/// Score descending, then net descending.
pub fn standing_order(a: &TeamTotal, b: &TeamTotal) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| b.net.cmp(&a.net))
}

fn same_standing(a: &TeamTotal, b: &TeamTotal) -> bool {
    a.score == b.score && a.net == b.net
}

/// Exclusive end index of the group beginning at `start`.
fn group_end(sorted: &[TeamTotal], start: usize) -> usize {
    let head = &sorted[start];
    sorted[start..]
        .iter()
        .position(|t| !same_standing(head, t))
        .map_or(sorted.len(), |offset| start + offset)
}

/// First ranked entry whose team name contains `query`, ignoring case.
pub fn find_by_name<'a>(entries: &'a [RankedEntry], query: &str) -> Result<Option<&'a RankedEntry>> {
    Ok(lookup_all(entries, query)?.into_iter().next())
}

/// Every ranked entry whose team name contains `query`, ignoring case, in rank order.
pub fn lookup_all<'a>(entries: &'a [RankedEntry], query: &str) -> Result<Vec<&'a RankedEntry>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Err(StandingsError::EmptyQuery);
    }
    Ok(entries
        .iter()
        .filter(|e| e.team.to_lowercase().contains(&needle))
        .collect())
}
