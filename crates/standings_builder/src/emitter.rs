//! Report emitters
//!
//! Detail: one row per accepted match, in input order.
//! Ranking: one row per team, in rank order.
//!
//! CSV keeps the display rank (`T-2`); JSON keeps `rank` as
//! `{ "position": 2, "tied": true }`.

use rust_decimal::Decimal;
use serde::Serialize;
use standings_core::{MatchOutcome, RankedEntry, Result, StandingsError};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = StandingsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(StandingsError::InvalidConfig(format!(
                "unknown output format '{}' (expected csv or json)",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Serialize)]
struct DetailRow<'a> {
    side_a: &'a str,
    side_b: &'a str,
    score_a: u8,
    #[serde(with = "rust_decimal::serde::float")]
    net_a: Decimal,
    score_b: u8,
    #[serde(with = "rust_decimal::serde::float")]
    net_b: Decimal,
}

#[derive(Serialize)]
struct RankingRow<'a> {
    rank: String,
    team: &'a str,
    score: u32,
    #[serde(with = "rust_decimal::serde::float")]
    net: Decimal,
    games: u32,
}

// 빈 리포트에도 헤더가 남도록 직접 기록
const DETAIL_HEADER: [&str; 6] = ["side_a", "side_b", "score_a", "net_a", "score_b", "net_b"];
const RANKING_HEADER: [&str; 5] = ["rank", "team", "score", "net", "games"];

const BUFFER: &str = "<buffer>";

pub fn render_detail(outcomes: &[MatchOutcome], format: OutputFormat) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Csv => render_csv(&DETAIL_HEADER, outcomes.iter().map(|o| DetailRow {
            side_a: &o.side_a,
            side_b: &o.side_b,
            score_a: o.score_a,
            net_a: o.net_a,
            score_b: o.score_b,
            net_b: o.net_b,
        })),
        OutputFormat::Json => render_json(outcomes),
    }
}

pub fn render_ranking(entries: &[RankedEntry], format: OutputFormat) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Csv => render_csv(&RANKING_HEADER, entries.iter().map(|e| RankingRow {
            rank: e.rank.to_string(),
            team: &e.team,
            score: e.score,
            net: e.net,
            games: e.games,
        })),
        OutputFormat::Json => render_json(entries),
    }
}

/// 렌더링된 바이트 쓰기 (상위 디렉토리 자동 생성)
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    let failure = |e: std::io::Error| StandingsError::DestinationWriteFailure {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(failure)?;
    }
    fs::write(path, bytes).map_err(failure)?;

    log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

fn render_csv<T: Serialize>(header: &[&str], rows: impl Iterator<Item = T>) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(header).map_err(buffer_failure)?;
    for row in rows {
        writer.serialize(row).map_err(buffer_failure)?;
    }
    writer
        .into_inner()
        .map_err(|e| buffer_failure(e.to_string()))
}

fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(value).map_err(buffer_failure)?;
    bytes.push(b'\n');
    Ok(bytes)
}

fn buffer_failure(e: impl ToString) -> StandingsError {
    StandingsError::DestinationWriteFailure {
        path: BUFFER.to_string(),
        message: e.to_string(),
    }
}
