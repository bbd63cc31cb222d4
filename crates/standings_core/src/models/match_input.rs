use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 검증된 경기 기록 1건
///
/// `m, n` = 1차 비교값, `o, p` = 2차 비교값, `q` = 카테고리,
/// `r, s` = 3차 비교값. 각 쌍의 첫 번째 값이 `side_a` 쪽이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchInput {
    pub side_a: String,
    pub side_b: String,
    pub m: Decimal,
    pub n: Decimal,
    pub o: Decimal,
    pub p: Decimal,
    pub q: String,
    pub r: Decimal,
    pub s: Decimal,
}

impl MatchInput {
    /// 모든 비교값이 동일한(0) 입력
    pub fn level(side_a: impl Into<String>, side_b: impl Into<String>) -> Self {
        Self {
            side_a: side_a.into(),
            side_b: side_b.into(),
            m: Decimal::ZERO,
            n: Decimal::ZERO,
            o: Decimal::ZERO,
            p: Decimal::ZERO,
            q: String::new(),
            r: Decimal::ZERO,
            s: Decimal::ZERO,
        }
    }

    pub fn with_primary(mut self, m: Decimal, n: Decimal) -> Self {
        self.m = m;
        self.n = n;
        self
    }

    pub fn with_secondary(mut self, o: Decimal, p: Decimal) -> Self {
        self.o = o;
        self.p = p;
        self
    }

    pub fn with_tertiary(mut self, q: impl Into<String>, r: Decimal, s: Decimal) -> Self {
        self.q = q.into();
        self.r = r;
        self.s = s;
        self
    }
}
