//! Standings Builder CLI
//!
//! Match CSV → detail + ranking reports
//! Team lookup by partial name

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "cli")]
use standings_builder::{OutputFormat, ReportMetadata};
#[cfg(feature = "cli")]
use standings_core::{ParseMode, StandingsConfig};
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "standings_builder")]
#[command(about = "Score matches and rank teams from a match CSV", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Build detail and ranking reports
    Build {
        /// Input match CSV path
        #[arg(long)]
        csv: PathBuf,

        /// Per-match detail report path
        #[arg(long)]
        detail_out: PathBuf,

        /// Ranking report path
        #[arg(long)]
        ranking_out: PathBuf,

        /// Output format (csv or json)
        #[arg(long, default_value = "csv")]
        format: OutputFormat,

        /// Verify reports after writing
        #[arg(long, default_value = "false")]
        verify: bool,

        /// Output metadata JSON file
        #[arg(long)]
        metadata: Option<PathBuf>,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Look up a team's standing by partial name
    Lookup {
        /// Input match CSV path
        #[arg(long)]
        csv: PathBuf,

        /// Case-insensitive part of the team name
        #[arg(long)]
        name: String,

        #[command(flatten)]
        input: InputArgs,
    },
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct InputArgs {
    /// YAML config file (defaults to $STANDINGS_CONFIG, then built-in layout)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Parse mode (strict or tolerant), overrides the config file
    #[arg(long)]
    mode: Option<ParseMode>,

    /// Input has no header row
    #[arg(long, default_value = "false")]
    no_headers: bool,

    /// Field delimiter, overrides the config file
    #[arg(long)]
    delimiter: Option<char>,

    /// Category that inverts the final comparison, overrides the config file
    #[arg(long)]
    sentinel: Option<String>,
}

#[cfg(feature = "cli")]
impl InputArgs {
    fn resolve(self) -> Result<StandingsConfig> {
        let mut config = match &self.config {
            Some(path) => StandingsConfig::from_file(path)?,
            None => StandingsConfig::from_env_or_default()?,
        };

        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if self.no_headers {
            config.has_headers = false;
        }
        if let Some(delimiter) = self.delimiter {
            config.delimiter = delimiter;
        }
        if let Some(sentinel) = self.sentinel {
            config.rules.sentinel_category = sentinel.trim().to_string();
        }

        config.validate().context("Invalid standings configuration")?;
        Ok(config)
    }
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            csv,
            detail_out,
            ranking_out,
            format,
            verify,
            metadata,
            input,
        } => {
            let config = input.resolve()?;

            println!("🔨 Building standings...");
            println!("   Input:   {}", csv.display());
            println!("   Detail:  {}", detail_out.display());
            println!("   Ranking: {}", ranking_out.display());
            println!("   Format:  {}  Mode: {}", format, config.mode);

            let meta =
                standings_builder::build_standings(&csv, &detail_out, &ranking_out, format, &config)?;

            print_metadata(&meta);

            if verify {
                verify_report_integrity(&detail_out, &meta.detail_checksum)?;
                verify_report_integrity(&ranking_out, &meta.ranking_checksum)?;
            }

            if let Some(metadata_path) = metadata {
                save_metadata(&metadata_path, &meta)?;
            }
        }

        Commands::Lookup { csv, name, input } => {
            let config = input.resolve()?;

            match standings_builder::lookup_team(&csv, &name, &config)? {
                Some(entry) => {
                    println!("{}", entry.team);
                    println!("   Rank:     {}", entry.rank);
                    println!("   Games:    {}", entry.games);
                    println!("   Score:    {}", entry.score);
                    println!("   Net:      {}", entry.net);
                    println!("   Win rate: {:.1}%", entry.win_rate());
                }
                None => println!("No team found matching \"{}\"", name.trim()),
            }
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("Logging initialised");
}

#[cfg(feature = "cli")]
fn print_metadata(meta: &ReportMetadata) {
    println!("\n✅ Standings built successfully!");
    println!(
        "   Rows:     {} read, {} accepted, {} rejected",
        meta.rows.total_rows, meta.rows.parsed, meta.rows.failed
    );
    println!("   Matches:  {}", meta.matches);
    println!("   Teams:    {}", meta.teams);
    println!("   Detail:   {}", meta.detail_checksum);
    println!("   Ranking:  {}", meta.ranking_checksum);
    println!("   Created:  {}", meta.created_at);
}

#[cfg(feature = "cli")]
fn verify_report_integrity(report_path: &Path, checksum: &str) -> Result<()> {
    println!("\n🔍 Verifying {}...", report_path.display());
    let is_valid = standings_builder::verify_report(report_path, checksum)?;

    if is_valid {
        println!("✅ Report verification passed");
        Ok(())
    } else {
        anyhow::bail!("❌ Report verification failed - checksum mismatch!")
    }
}

#[cfg(feature = "cli")]
fn save_metadata(path: &Path, meta: &ReportMetadata) -> Result<()> {
    let metadata_json = serde_json::to_string_pretty(meta)?;
    standings_builder::write_output(path, metadata_json.as_bytes())?;
    println!("\n📄 Metadata saved to: {}", path.display());
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("standings_builder CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
