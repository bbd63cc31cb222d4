//! Run configuration
//!
//! Column positions, parsing mode and scoring rules are passed explicitly
//! into the parser and resolver instead of living in module constants.
//!
//! ## Usage
//!
//! ```rust
//! use standings_core::config::{ParseMode, StandingsConfig};
//!
//! // Default layout: a, b, m, n, o, p, q, r, s in columns 0-8
//! let config = StandingsConfig::default();
//! assert_eq!(config.mode, ParseMode::Strict);
//!
//! let yaml = "mode: tolerant\nrules:\n  sentinel_category: FOUR\n";
//! let custom = StandingsConfig::from_yaml_str(yaml).unwrap();
//! assert_eq!(custom.mode, ParseMode::Tolerant);
//! assert_eq!(custom.layout, config.layout);
//! ```
//!
//! ## Environment Variables
//!
//! - `STANDINGS_CONFIG`: path to a YAML config file

use crate::error::{Result, StandingsError};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub const CONFIG_ENV_VAR: &str = "STANDINGS_CONFIG";

/// Category value that inverts the tertiary comparison ("four-grab").
pub const DEFAULT_SENTINEL_CATEGORY: &str = "四抓";

/// Zero-based column positions of a match record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnLayout {
    pub side_a: usize,
    pub side_b: usize,
    /// `m, n`: decides the winner and the net margin
    pub primary: [usize; 2],
    /// `o, p`
    pub secondary: [usize; 2],
    /// `q`
    pub category: usize,
    /// `r, s`
    pub tertiary: [usize; 2],
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            side_a: 0,
            side_b: 1,
            primary: [2, 3],
            secondary: [4, 5],
            category: 6,
            tertiary: [7, 8],
        }
    }
}

impl ColumnLayout {
    fn columns(&self) -> [usize; 9] {
        [
            self.side_a,
            self.side_b,
            self.primary[0],
            self.primary[1],
            self.secondary[0],
            self.secondary[1],
            self.category,
            self.tertiary[0],
            self.tertiary[1],
        ]
    }

    /// Minimum field count a strict record must have.
    pub fn required_len(&self) -> usize {
        self.columns().iter().copied().max().unwrap_or(0) + 1
    }

    pub fn validate(&self) -> Result<()> {
        let columns = self.columns();
        for (i, column) in columns.iter().enumerate() {
            if columns[..i].contains(column) {
                return Err(StandingsError::InvalidConfig(format!(
                    "column {} is mapped more than once",
                    column
                )));
            }
        }
        Ok(())
    }
}

/// How the parser treats missing or unparsable numeric fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Reject the row
    #[default]
    Strict,
    /// Substitute zero
    Tolerant,
}

impl FromStr for ParseMode {
    type Err = StandingsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(ParseMode::Strict),
            "tolerant" => Ok(ParseMode::Tolerant),
            other => Err(StandingsError::InvalidConfig(format!(
                "unknown parse mode '{}' (expected strict or tolerant)",
                other
            ))),
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseMode::Strict => write!(f, "strict"),
            ParseMode::Tolerant => write!(f, "tolerant"),
        }
    }
}

/// Rules consumed by the outcome resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    /// When the category column equals this value the smaller `r, s` wins
    pub sentinel_category: String,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            sentinel_category: DEFAULT_SENTINEL_CATEGORY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandingsConfig {
    pub layout: ColumnLayout,
    pub mode: ParseMode,
    pub has_headers: bool,
    pub delimiter: char,
    pub rules: ScoringRules,
}

impl Default for StandingsConfig {
    fn default() -> Self {
        Self {
            layout: ColumnLayout::default(),
            mode: ParseMode::Strict,
            has_headers: true,
            delimiter: ',',
            rules: ScoringRules::default(),
        }
    }
}

impl StandingsConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: StandingsConfig = serde_yaml::from_str(yaml)
            .map_err(|e| StandingsError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            StandingsError::InvalidConfig(format!("{}: {}", path.display(), e))
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Load from `STANDINGS_CONFIG` when set, otherwise use the defaults.
    pub fn from_env_or_default() -> Result<Self> {
        match env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.trim().is_empty() => {
                log::debug!("Loading standings config from {}", path);
                Self::from_file(Path::new(path.trim()))
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.layout.validate()?;
        let sentinel = &self.rules.sentinel_category;
        if sentinel.trim().is_empty() {
            return Err(StandingsError::InvalidConfig(
                "sentinel_category must not be empty".to_string(),
            ));
        }
        // categories are compared after trimming
        if sentinel.trim() != sentinel {
            return Err(StandingsError::InvalidConfig(format!(
                "sentinel_category '{}' has surrounding whitespace",
                sentinel
            )));
        }
        self.delimiter_byte()?;
        Ok(())
    }

    /// Delimiter as the single byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> Result<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(StandingsError::InvalidConfig(format!(
                "delimiter '{}' is not a single-byte character",
                self.delimiter
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_layout_requires_nine_fields() {
        let layout = ColumnLayout::default();
        assert_eq!(layout.required_len(), 9);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let layout = ColumnLayout {
            category: 2,
            ..ColumnLayout::default()
        };
        assert!(matches!(
            layout.validate(),
            Err(StandingsError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
layout:
  side_a: 1
  side_b: 0
delimiter: ";"
"#;
        let config = StandingsConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.layout.side_a, 1);
        assert_eq!(config.layout.side_b, 0);
        assert_eq!(config.layout.primary, [2, 3]);
        assert_eq!(config.delimiter_byte().unwrap(), b';');
        assert_eq!(config.mode, ParseMode::Strict);
        assert_eq!(config.rules.sentinel_category, DEFAULT_SENTINEL_CATEGORY);
        assert!(config.has_headers);
    }

    #[test]
    fn test_empty_sentinel_rejected() {
        let yaml = "rules:\n  sentinel_category: \"  \"\n";
        assert!(StandingsConfig::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn test_padded_sentinel_rejected() {
        let yaml = "rules:\n  sentinel_category: \" 四抓\"\n";
        assert!(matches!(
            StandingsConfig::from_yaml_str(yaml),
            Err(StandingsError::InvalidConfig(_))
        ));

        let config = StandingsConfig {
            rules: ScoringRules {
                sentinel_category: "FOUR ".to_string(),
            },
            ..StandingsConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let config = StandingsConfig {
            delimiter: '，',
            ..StandingsConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_mode_from_str() {
        assert_eq!("strict".parse::<ParseMode>().unwrap(), ParseMode::Strict);
        assert_eq!(" Tolerant ".parse::<ParseMode>().unwrap(), ParseMode::Tolerant);
        assert!("lenient".parse::<ParseMode>().is_err());
        assert_eq!(ParseMode::Tolerant.to_string(), "tolerant");
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "mode: tolerant").unwrap();
        writeln!(file, "has_headers: false").unwrap();

        let config = StandingsConfig::from_file(file.path()).unwrap();
        assert_eq!(config.mode, ParseMode::Tolerant);
        assert!(!config.has_headers);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = StandingsConfig::from_file(Path::new("/nonexistent/standings.yaml"))
            .unwrap_err();
        assert!(matches!(err, StandingsError::InvalidConfig(_)));
    }
}
