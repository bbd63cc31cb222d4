use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 팀별 누적 성적
///
/// `net`은 정확한 십진 연산이라 같은 경기들을 어떤 순서로 합산해도 결과가 같다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamTotal {
    pub team: String,
    pub score: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub net: Decimal,
    pub games: u32,
}

impl TeamTotal {
    pub fn new(team: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            score: 0,
            net: Decimal::ZERO,
            games: 0,
        }
    }

    /// 경기 1건의 한쪽 결과를 누적
    pub fn add_game(&mut self, score: u8, net: Decimal) {
        self.score += u32::from(score);
        self.net = self.net.saturating_add(net);
        self.games += 1;
    }

    /// 부분 집계 두 개의 같은 팀 성적 합치기
    pub fn absorb(&mut self, other: &TeamTotal) {
        self.score += other.score;
        self.net = self.net.saturating_add(other.net);
        self.games += other.games;
    }
}
