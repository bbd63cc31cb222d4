//! Standings Builder Library
//!
//! CSV (경기 기록) → standings engine → 경기별 상세 + 순위표 리포트
//! 리포트 무결성 검증용 SHA256 체크섬 생성

pub mod emitter;
pub mod reader;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use standings_core::{RankedEntry, StandingsConfig};
use std::fs;
use std::path::Path;

pub use emitter::{render_detail, render_ranking, write_output, OutputFormat};
pub use reader::{read_matches, read_matches_from, ParseStats};

/// 메타데이터에 기록되는 리포트 스키마 버전
pub const REPORT_SCHEMA_VERSION: &str = "v1";

/// 리포트 빌드 메타데이터
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub schema_version: String,
    /// 생성 시각 (RFC3339 형식)
    pub created_at: String,
    pub format: String,
    pub mode: String,
    pub rows: ParseStats,
    pub matches: usize,
    pub teams: usize,
    /// 상세 리포트 SHA256 체크섬 (hex 문자열)
    pub detail_checksum: String,
    /// 순위표 SHA256 체크섬 (hex 문자열)
    pub ranking_checksum: String,
}

/// 경기 CSV에서 상세 리포트와 순위표를 빌드
///
/// 원본 전체를 읽은 뒤에만 파일을 쓴다.
///
/// # Arguments
///
/// * `csv_path` - 입력 경기 CSV 파일 경로
/// * `detail_out` - 경기별 상세 리포트 경로
/// * `ranking_out` - 순위표 리포트 경로
/// * `format` - 두 리포트의 출력 형식
/// * `config` - 컬럼 배치, 파싱 모드, 판정 규칙
///
/// # Returns
///
/// 생성된 리포트의 메타데이터
pub fn build_standings(
    csv_path: &Path,
    detail_out: &Path,
    ranking_out: &Path,
    format: OutputFormat,
    config: &StandingsConfig,
) -> Result<ReportMetadata> {
    // 1. CSV 읽기 + 판정
    let (report, stats) = read_matches(csv_path, config)
        .with_context(|| format!("Failed to read matches: {}", csv_path.display()))?;

    log::info!(
        "Parsed {} matches (failed: {}, total rows: {})",
        stats.parsed,
        stats.failed,
        stats.total_rows
    );

    // 2. 렌더링
    let detail = render_detail(&report.outcomes, format).context("Failed to render detail report")?;
    let ranking =
        render_ranking(&report.ranking, format).context("Failed to render ranking report")?;

    // 3. 파일 쓰기
    write_output(detail_out, &detail)
        .with_context(|| format!("Failed to write detail report: {}", detail_out.display()))?;
    write_output(ranking_out, &ranking)
        .with_context(|| format!("Failed to write ranking report: {}", ranking_out.display()))?;

    Ok(ReportMetadata {
        schema_version: REPORT_SCHEMA_VERSION.to_string(),
        created_at: chrono::Utc::now().to_rfc3339(),
        format: format.to_string(),
        mode: config.mode.to_string(),
        rows: stats,
        matches: report.outcomes.len(),
        teams: report.ranking.len(),
        detail_checksum: checksum(&detail),
        ranking_checksum: checksum(&ranking),
    })
}

/// Rank a match CSV and return the first team whose name contains `name`.
pub fn lookup_team(
    csv_path: &Path,
    name: &str,
    config: &StandingsConfig,
) -> Result<Option<RankedEntry>> {
    let (report, _) = read_matches(csv_path, config)
        .with_context(|| format!("Failed to read matches: {}", csv_path.display()))?;

    let found = standings_core::find_by_name(&report.ranking, name)?;
    Ok(found.cloned())
}

/// 리포트 파일 무결성 검증 (SHA256 비교)
pub fn verify_report(report_file: &Path, expected_checksum: &str) -> Result<bool> {
    let bytes = fs::read(report_file)
        .with_context(|| format!("Failed to read report file: {}", report_file.display()))?;

    Ok(checksum(&bytes) == expected_checksum)
}

fn checksum(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
