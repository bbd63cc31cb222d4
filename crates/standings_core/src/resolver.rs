//! Outcome resolver: three-tier cascading tie-break
//!
//! | Tier | Compared | Winner | Net margin |
//! |------|----------|--------|------------|
//! | Primary | `m` vs `n` | larger | `\|m - n\|` / `-\|m - n\|` |
//! | Secondary | `o` vs `p` (only if `m == n`) | larger | 0 |
//! | Tertiary | `r` vs `s` (only if `o == p`) | smaller when `q` is the sentinel, else larger | 0 |
//!
//! A lower tier is consulted only when every higher tier is exactly level.
//! If `r == s` as well, neither side scores.

use crate::config::ScoringRules;
use crate::models::{MatchInput, MatchOutcome, Side, Tier};
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// Resolve one match. Never fails.
pub fn resolve(input: &MatchInput, rules: &ScoringRules) -> MatchOutcome {
    let side_a = input.side_a.clone();
    let side_b = input.side_b.clone();

    if let Some(winner) = larger(input.m, input.n) {
        let margin = input.m.saturating_sub(input.n).abs();
        return MatchOutcome::won(side_a, side_b, winner, Tier::Primary, margin);
    }

    if let Some(winner) = larger(input.o, input.p) {
        return MatchOutcome::won(side_a, side_b, winner, Tier::Secondary, Decimal::ZERO);
    }

    let tertiary = if input.q == rules.sentinel_category {
        smaller(input.r, input.s)
    } else {
        larger(input.r, input.s)
    };

    match tertiary {
        Some(winner) => MatchOutcome::won(side_a, side_b, winner, Tier::Tertiary, Decimal::ZERO),
        None => MatchOutcome::level(side_a, side_b),
    }
}

/// Resolve a batch, keeping input order.
pub fn resolve_all(inputs: &[MatchInput], rules: &ScoringRules) -> Vec<MatchOutcome> {
    inputs.iter().map(|input| resolve(input, rules)).collect()
}

fn larger(a: Decimal, b: Decimal) -> Option<Side> {
    match a.cmp(&b) {
        Ordering::Greater => Some(Side::A),
        Ordering::Less => Some(Side::B),
        Ordering::Equal => None,
    }
}

fn smaller(a: Decimal, b: Decimal) -> Option<Side> {
    larger(b, a)
}
