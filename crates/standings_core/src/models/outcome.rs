use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 경기의 어느 쪽인지
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

/// 승부를 가른 판정 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Primary,
    Secondary,
    Tertiary,
}

/// 경기 1건의 판정 결과
///
/// 불변식: 최대 한쪽만 득점, `net_a == -net_b`, 득실차는 1차 판정일 때만 0이 아님.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub side_a: String,
    pub side_b: String,
    pub score_a: u8,
    pub score_b: u8,
    #[serde(with = "rust_decimal::serde::float")]
    pub net_a: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub net_b: Decimal,
    /// 모든 단계가 동점이면 `None`
    pub decided_by: Option<Tier>,
}

impl MatchOutcome {
    /// 무승부 (양쪽 모두 0점)
    pub fn level(side_a: String, side_b: String) -> Self {
        Self {
            side_a,
            side_b,
            score_a: 0,
            score_b: 0,
            net_a: Decimal::ZERO,
            net_b: Decimal::ZERO,
            decided_by: None,
        }
    }

    /// `winner`가 1점과 `margin`(>= 0)을 얻고, 상대는 `-margin`
    pub fn won(side_a: String, side_b: String, winner: Side, tier: Tier, margin: Decimal) -> Self {
        // 득실차 0이면 부호 없는 0 유지
        let loss = if margin.is_zero() { Decimal::ZERO } else { -margin };
        let (score_a, score_b, net_a, net_b) = match winner {
            Side::A => (1, 0, margin, loss),
            Side::B => (0, 1, loss, margin),
        };
        Self {
            side_a,
            side_b,
            score_a,
            score_b,
            net_a,
            net_b,
            decided_by: Some(tier),
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match (self.score_a, self.score_b) {
            (1, 0) => Some(Side::A),
            (0, 1) => Some(Side::B),
            _ => None,
        }
    }

    pub fn winner_id(&self) -> Option<&str> {
        self.winner().map(|side| match side {
            Side::A => self.side_a.as_str(),
            Side::B => self.side_b.as_str(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_won_mirrors_margin() {
        let outcome = MatchOutcome::won("Red".into(), "Blue".into(), Side::B, Tier::Primary, dec!(4));
        assert_eq!((outcome.score_a, outcome.score_b), (0, 1));
        assert_eq!(outcome.net_a, dec!(-4));
        assert_eq!(outcome.net_b, dec!(4));
        assert_eq!(outcome.winner_id(), Some("Blue"));
    }

    #[test]
    fn test_zero_margin_loss_is_zero() {
        let outcome =
            MatchOutcome::won("Red".into(), "Blue".into(), Side::A, Tier::Secondary, Decimal::ZERO);
        assert_eq!(outcome.net_b, Decimal::ZERO);
        assert!(!outcome.net_b.is_sign_negative());
        assert_eq!(outcome.winner(), Some(Side::A));
    }

    #[test]
    fn test_level_has_no_winner() {
        let outcome = MatchOutcome::level("Red".into(), "Blue".into());
        assert_eq!(outcome.winner(), None);
        assert_eq!(outcome.decided_by, None);
    }
}
