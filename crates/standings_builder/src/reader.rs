//! Match CSV reader
//!
//! Streams a delimited match file into a [`StandingsRun`]. Column positions,
//! header handling and the delimiter come from [`StandingsConfig`]; rows the
//! parser rejects and records that cannot be decoded are counted and skipped.

use serde::{Deserialize, Serialize};
use standings_core::{Result, RowDefect, RunReport, StandingsConfig, StandingsError, StandingsRun};
use std::io::Read;
use std::path::Path;

/// CSV parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    pub total_rows: u32,
    pub parsed: u32,
    pub failed: u32,
    pub skipped_header: bool,
}

/// Read every match of a CSV file and run it through the engine.
///
/// # Errors
///
/// `SourceUnavailable` when the file cannot be opened or a read fails
/// part-way. Malformed rows are not errors; they are reported in
/// `RunReport::rejected` and `ParseStats::failed`.
pub fn read_matches(csv_path: &Path, config: &StandingsConfig) -> Result<(RunReport, ParseStats)> {
    let source = std::fs::File::open(csv_path).map_err(|e| StandingsError::SourceUnavailable {
        path: csv_path.display().to_string(),
        message: e.to_string(),
    })?;
    read_matches_from(source, &csv_path.display().to_string(), config)
}

/// Same as [`read_matches`] over any reader. `label` names the source in errors.
pub fn read_matches_from<R: Read>(
    source: R,
    label: &str,
    config: &StandingsConfig,
) -> Result<(RunReport, ParseStats)> {
    config.validate()?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(config.has_headers)
        .delimiter(config.delimiter_byte()?)
        .flexible(true)
        .from_reader(source);

    let mut run = StandingsRun::new(config);
    let mut stats = ParseStats {
        skipped_header: config.has_headers,
        ..ParseStats::default()
    };

    for result in reader.records() {
        stats.total_rows += 1;
        match result {
            Ok(record) => {
                let line = record
                    .position()
                    .map(|p| p.line())
                    .unwrap_or(u64::from(stats.total_rows));
                let fields: Vec<&str> = record.iter().collect();
                if run.push_row(line, &fields).is_some() {
                    stats.parsed += 1;
                } else {
                    stats.failed += 1;
                }
            }
            Err(e) if e.is_io_error() => {
                return Err(StandingsError::SourceUnavailable {
                    path: label.to_string(),
                    message: e.to_string(),
                });
            }
            Err(e) => {
                stats.failed += 1;
                let line = e
                    .position()
                    .map(|p| p.line())
                    .unwrap_or(u64::from(stats.total_rows));
                run.reject(StandingsError::MalformedRow {
                    line,
                    defect: RowDefect::Unreadable {
                        message: e.to_string(),
                    },
                });
            }
        }
    }

    if stats.parsed == 0 {
        log::warn!("No valid matches parsed from {}", label);
    }

    Ok((run.finish(), stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use standings_core::ParseMode;

    const MATCHES: &str = "\
team_a,team_b,m,n,o,p,q,r,s
Owls,Hawks,21,15,0,0,,0,0
Crows,Moles,10,10,3,1,,0,0
Hawks,Crows,7,7,2,2,四抓,1,4
Moles,Owls,,3,0,0,,0,0
Owls,Crows,4,9,0,0,,0,0
";

    #[test]
    fn test_read_with_header() {
        let config = StandingsConfig::default();
        let (report, stats) = read_matches_from(MATCHES.as_bytes(), "matches", &config).unwrap();

        assert_eq!(
            stats,
            ParseStats {
                total_rows: 5,
                parsed: 4,
                failed: 1,
                skipped_header: true,
            }
        );
        assert_eq!(report.outcomes.len(), 4);
        assert!(matches!(
            report.rejected[0],
            StandingsError::MalformedRow { line: 5, .. }
        ));
        assert_eq!(report.ranking[0].team, "Crows");
    }

    #[test]
    fn test_read_without_header_semicolon() {
        let config = StandingsConfig {
            has_headers: false,
            delimiter: ';',
            mode: ParseMode::Tolerant,
            ..StandingsConfig::default()
        };
        let data = "Owls;Hawks;3;1\nHawks;Owls;2;2;5\n";
        let (report, stats) = read_matches_from(data.as_bytes(), "matches", &config).unwrap();

        assert_eq!(stats.parsed, 2);
        assert!(!stats.skipped_header);
        let owls = report.ranking.iter().find(|e| e.team == "Owls").unwrap();
        assert_eq!((owls.score, owls.net, owls.games), (1, dec!(2), 2));
        let hawks = report.ranking.iter().find(|e| e.team == "Hawks").unwrap();
        assert_eq!((hawks.score, hawks.net, hawks.games), (1, dec!(-2), 2));
    }

    #[test]
    fn test_undecodable_record_is_rejected_with_line() {
        let mut data = b"team_a,team_b,m,n,o,p,q,r,s\nOwls,Hawks,3,1,0,0,,0,0\n".to_vec();
        data.extend_from_slice(b"\xff\xfeOwls,Crows,1,2,0,0,,0,0\n");
        data.extend_from_slice(b"Crows,Hawks,5,1,0,0,,0,0\n");

        let (report, stats) =
            read_matches_from(data.as_slice(), "matches", &StandingsConfig::default()).unwrap();

        assert_eq!((stats.total_rows, stats.parsed, stats.failed), (3, 2, 1));
        assert_eq!(report.rejected.len(), stats.failed as usize);
        assert!(matches!(
            report.rejected[0],
            StandingsError::MalformedRow {
                line: 3,
                defect: RowDefect::Unreadable { .. }
            }
        ));
    }

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let err = read_matches(Path::new("/nonexistent/matches.csv"), &StandingsConfig::default())
            .unwrap_err();
        assert!(matches!(err, StandingsError::SourceUnavailable { .. }));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_empty_input_gives_empty_report() {
        let (report, stats) =
            read_matches_from("team_a,team_b\n".as_bytes(), "matches", &StandingsConfig::default())
                .unwrap();
        assert_eq!(stats.total_rows, 0);
        assert!(report.ranking.is_empty());
    }
}
