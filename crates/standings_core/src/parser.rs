//! Row parser: raw record → `MatchInput`
//!
//! Strict mode rejects short records and non-numeric comparison fields.
//! Tolerant mode fills anything missing or unparsable with zero. Side
//! identifiers are required in both modes.
//!
//! Numbers are read as exact decimals (`12`, `-3.25`, `1e3`), never through
//! binary floating point.

use crate::config::{ColumnLayout, ParseMode};
use crate::error::{Result, RowDefect, StandingsError};
use crate::models::MatchInput;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse one record.
///
/// # Arguments
///
/// * `fields` - record fields in file order
/// * `layout` - column positions
/// * `mode` - strict or tolerant numeric handling
/// * `line` - 1-based line number used in diagnostics
pub fn parse_row<S: AsRef<str>>(
    fields: &[S],
    layout: &ColumnLayout,
    mode: ParseMode,
    line: u64,
) -> Result<MatchInput> {
    let required = layout.required_len();
    if mode == ParseMode::Strict && fields.len() < required {
        return Err(StandingsError::malformed(
            line,
            RowDefect::TooShort {
                found: fields.len(),
                required,
            },
        ));
    }

    let side_a = parse_team(fields, layout.side_a, line)?;
    let side_b = parse_team(fields, layout.side_b, line)?;

    let number = |column: usize, name: &'static str| parse_number(fields, column, name, mode, line);

    Ok(MatchInput {
        m: number(layout.primary[0], "m")?,
        n: number(layout.primary[1], "n")?,
        o: number(layout.secondary[0], "o")?,
        p: number(layout.secondary[1], "p")?,
        q: field(fields, layout.category).unwrap_or_default().to_string(),
        r: number(layout.tertiary[0], "r")?,
        s: number(layout.tertiary[1], "s")?,
        side_a,
        side_b,
    })
}

fn field<S: AsRef<str>>(fields: &[S], column: usize) -> Option<&str> {
    fields.get(column).map(|f| f.as_ref().trim())
}

fn parse_team<S: AsRef<str>>(fields: &[S], column: usize, line: u64) -> Result<String> {
    let team = field(fields, column)
        .map(|f| f.trim_start_matches('\u{feff}').trim())
        .unwrap_or_default();
    if team.is_empty() {
        return Err(StandingsError::malformed(line, RowDefect::EmptyTeam { column }));
    }
    Ok(team.to_string())
}

fn parse_number<S: AsRef<str>>(
    fields: &[S],
    column: usize,
    name: &'static str,
    mode: ParseMode,
    line: u64,
) -> Result<Decimal> {
    let raw = field(fields, column).unwrap_or_default();
    match (parse_decimal(raw), mode) {
        (Some(value), _) => Ok(value),
        (None, ParseMode::Tolerant) => {
            if !raw.is_empty() {
                log::debug!("Line {} - {} '{}' not numeric, using 0", line, name, raw);
            }
            Ok(Decimal::ZERO)
        }
        (None, ParseMode::Strict) => Err(StandingsError::malformed(
            line,
            RowDefect::NotNumeric {
                column,
                field: name,
                value: raw.to_string(),
            },
        )),
    }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let raw = raw.strip_prefix('+').unwrap_or(raw);
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn strict(fields: &[&str]) -> Result<MatchInput> {
        parse_row(fields, &ColumnLayout::default(), ParseMode::Strict, 2)
    }

    fn tolerant(fields: &[&str]) -> Result<MatchInput> {
        parse_row(fields, &ColumnLayout::default(), ParseMode::Tolerant, 2)
    }

    fn defect(result: Result<MatchInput>) -> RowDefect {
        match result {
            Err(StandingsError::MalformedRow { defect, .. }) => defect,
            other => panic!("expected malformed row, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_complete_row() {
        let input = strict(&[" Tigers ", "Lions", "12", "9.5", "3", "3", " 四抓 ", "1", "2"]).unwrap();

        assert_eq!(input.side_a, "Tigers");
        assert_eq!(input.side_b, "Lions");
        assert_eq!((input.m, input.n), (dec!(12), dec!(9.5)));
        assert_eq!((input.o, input.p), (dec!(3), dec!(3)));
        assert_eq!(input.q, "四抓");
        assert_eq!((input.r, input.s), (dec!(1), dec!(2)));
    }

    #[test]
    fn test_strict_rejects_short_row() {
        assert_eq!(
            defect(strict(&["Tigers", "Lions", "1", "2"])),
            RowDefect::TooShort {
                found: 4,
                required: 9
            }
        );
    }

    #[test]
    fn test_strict_rejects_non_numeric() {
        assert_eq!(
            defect(strict(&["Tigers", "Lions", "1", "2", "x", "3", "", "1", "2"])),
            RowDefect::NotNumeric {
                column: 4,
                field: "o",
                value: "x".to_string()
            }
        );
        assert!(matches!(
            defect(strict(&["Tigers", "Lions", "", "2", "1", "3", "", "1", "2"])),
            RowDefect::NotNumeric { column: 2, .. }
        ));
        assert!(matches!(
            defect(strict(&["Tigers", "Lions", "NaN", "2", "1", "3", "", "1", "2"])),
            RowDefect::NotNumeric { column: 2, .. }
        ));
        assert!(matches!(
            defect(strict(&["Tigers", "Lions", "inf", "2", "1", "3", "", "1", "2"])),
            RowDefect::NotNumeric { column: 2, .. }
        ));
    }

    #[test]
    fn test_numeric_forms() {
        let input = strict(&["Tigers", "Lions", "+4", "-0.25", "1e2", "2.5E-1", "", "0.1", "0.30"]).unwrap();

        assert_eq!((input.m, input.n), (dec!(4), dec!(-0.25)));
        assert_eq!((input.o, input.p), (dec!(100), dec!(0.25)));
        assert_eq!((input.r, input.s), (dec!(0.1), dec!(0.3)));
    }

    #[test]
    fn test_tolerant_zero_fills() {
        let input = tolerant(&["Tigers", "Lions", "7", "abc", ""]).unwrap();

        assert_eq!((input.m, input.n), (dec!(7), Decimal::ZERO));
        assert_eq!((input.o, input.p), (Decimal::ZERO, Decimal::ZERO));
        assert_eq!(input.q, "");
        assert_eq!((input.r, input.s), (Decimal::ZERO, Decimal::ZERO));
    }

    #[test]
    fn test_team_required_in_both_modes() {
        assert_eq!(
            defect(strict(&["Tigers", "  ", "1", "2", "1", "3", "", "1", "2"])),
            RowDefect::EmptyTeam { column: 1 }
        );
        assert_eq!(defect(tolerant(&["Tigers"])), RowDefect::EmptyTeam { column: 1 });
    }

    #[test]
    fn test_same_team_on_both_sides_accepted() {
        let input = strict(&["A", "A", "3", "1", "0", "0", "", "0", "0"]).unwrap();
        assert_eq!((input.side_a.as_str(), input.side_b.as_str()), ("A", "A"));
        assert_eq!((input.m, input.n), (dec!(3), dec!(1)));

        let input = tolerant(&["Tigers", "Tigers"]).unwrap();
        assert_eq!(input.side_a, input.side_b);
    }

    #[test]
    fn test_bom_stripped_from_first_team() {
        let input = strict(&["\u{feff}Tigers", "Lions", "1", "2", "1", "3", "", "1", "2"]).unwrap();
        assert_eq!(input.side_a, "Tigers");
    }

    #[test]
    fn test_custom_layout() {
        let layout = ColumnLayout {
            side_a: 8,
            side_b: 7,
            primary: [0, 1],
            secondary: [2, 3],
            category: 4,
            tertiary: [5, 6],
        };
        let fields = ["10", "4", "0", "0", "", "0", "0", "Away", "Home"];
        let input = parse_row(&fields, &layout, ParseMode::Strict, 5).unwrap();

        assert_eq!(input.side_a, "Home");
        assert_eq!(input.side_b, "Away");
        assert_eq!((input.m, input.n), (dec!(10), dec!(4)));
    }

    #[test]
    fn test_error_carries_line() {
        match strict(&["Tigers"]) {
            Err(StandingsError::MalformedRow { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected {:?}", other),
        }
    }
}
