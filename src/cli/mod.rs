//! Command-line surface and run orchestration.

mod progress;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::{DownloadConfig, FetchConfig};
use crate::download::{ConflictPolicy, Downloader};
use crate::error::{Error, Result};
use crate::format::human_size;
use crate::list::print_listing;
use crate::prompt::StdinPrompter;
use crate::record::RecordClient;

use progress::{ConsoleReporter, print_summary};

/// List and download the files attached to a Zenodo record.
#[derive(Parser, Debug)]
#[command(name = "zen", version, about)]
pub struct Cli {
    /// Target record to study.
    #[arg(short, long)]
    pub record_id: u64,

    /// Download the files in the record.
    #[arg(short, long)]
    pub download: bool,

    /// List files and their size.
    #[arg(short, long)]
    pub list_files: bool,

    /// Directory to store files in.
    #[arg(short, long, default_value = ".")]
    pub output_dir: String,

    /// Overwrite files if already present.
    #[arg(short, long, group = "conflict")]
    pub force: bool,

    /// Ask before overwriting.
    #[arg(short, long, group = "conflict")]
    pub ask: bool,

    /// Skip downloading files if they already exist.
    #[arg(short, long, group = "conflict")]
    pub skip: bool,
}

impl Cli {
    /// Whether the file listing should be printed.
    ///
    /// Listing is implied when neither `--list-files` nor `--download` is
    /// given.
    #[must_use]
    pub const fn wants_listing(&self) -> bool {
        self.list_files || !self.download
    }

    /// The conflict-resolution policy selected by the flags.
    ///
    /// Without a flag this is [`ConflictPolicy::Skip`], so existing files
    /// are never replaced silently.
    #[must_use]
    pub fn policy(&self) -> ConflictPolicy {
        if self.force {
            ConflictPolicy::Force
        } else if self.ask {
            ConflictPolicy::Ask
        } else {
            ConflictPolicy::Skip
        }
    }
}

/// Expands a leading `~` to the home directory, otherwise resolves the
/// path to an absolute one.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `~` is used but no home
/// directory can be determined.
pub fn expand_output_dir(raw: &str) -> Result<PathBuf> {
    if let Some(rest) = raw.strip_prefix('~') {
        let home = dirs::home_dir().ok_or_else(|| {
            Error::InvalidArgument("cannot expand '~': home directory not found".to_string())
        })?;
        let rest = rest.trim_start_matches(['/', '\\']);
        return Ok(if rest.is_empty() { home } else { home.join(rest) });
    }
    Ok(std::path::absolute(raw)?)
}

/// Builds the HTTP client shared by the metadata fetch and the downloads.
fn build_http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().timeout(timeout).build()
}

/// Runs the requested actions: fetch metadata, then list and/or download.
///
/// # Errors
///
/// Returns an error when the output directory cannot be prepared or the
/// metadata fetch fails. Per-file download failures are reported and do
/// not abort the run.
pub async fn run(cli: Cli) -> Result<()> {
    let output_dir = expand_output_dir(&cli.output_dir)?;
    println!("{}", output_dir.display());
    tokio::fs::create_dir_all(&output_dir).await?;

    let fetch_config = FetchConfig::default();
    let http = build_http_client(fetch_config.timeout)?;

    let record = RecordClient::new(http.clone(), &fetch_config)
        .fetch(cli.record_id)
        .await?;

    if cli.wants_listing() {
        print_listing(&record);
    } else {
        println!("Total size: {}", human_size(record.total_size()));
    }

    if cli.download {
        let downloader = Downloader::new(http, DownloadConfig::default());
        let reporter = ConsoleReporter::default();
        let mut prompter = StdinPrompter;

        let summary = downloader
            .download_all(
                &record.files,
                &output_dir,
                cli.policy(),
                &mut prompter,
                &reporter,
            )
            .await;
        print_summary(&summary);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("zen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn record_id_is_required() {
        assert!(Cli::try_parse_from(["zen"]).is_err());
        assert!(Cli::try_parse_from(["zen", "-r", "not-a-number"]).is_err());
        assert_eq!(parse(&["-r", "1234"]).record_id, 1234);
    }

    #[test]
    fn listing_is_implied_without_flags() {
        assert!(parse(&["-r", "1"]).wants_listing());
        assert!(parse(&["-r", "1", "-l"]).wants_listing());
        assert!(parse(&["-r", "1", "-d", "-l"]).wants_listing());
        assert!(!parse(&["-r", "1", "-d"]).wants_listing());
    }

    #[test]
    fn output_dir_defaults_to_current_directory() {
        assert_eq!(parse(&["-r", "1"]).output_dir, ".");
        assert_eq!(
            parse(&["-r", "1", "-o", "/tmp/data"]).output_dir,
            "/tmp/data"
        );
    }

    #[test]
    fn conflict_flags_are_mutually_exclusive() {
        assert!(Cli::try_parse_from(["zen", "-r", "1", "-f", "-s"]).is_err());
        assert!(Cli::try_parse_from(["zen", "-r", "1", "-a", "-f"]).is_err());
        assert!(Cli::try_parse_from(["zen", "-r", "1", "-s", "-a"]).is_err());
    }

    #[test]
    fn policy_selection() {
        assert_eq!(parse(&["-r", "1", "-f"]).policy(), ConflictPolicy::Force);
        assert_eq!(parse(&["-r", "1", "-a"]).policy(), ConflictPolicy::Ask);
        assert_eq!(parse(&["-r", "1", "-s"]).policy(), ConflictPolicy::Skip);
        // Default is skip when no flag is given.
        assert_eq!(parse(&["-r", "1"]).policy(), ConflictPolicy::Skip);
    }

    #[test]
    fn expand_output_dir_resolves_relative_paths() {
        let expanded = expand_output_dir("some/dir").unwrap();
        assert!(expanded.is_absolute());
        assert!(expanded.ends_with("some/dir"));
    }

    #[test]
    fn expand_output_dir_expands_home_shorthand() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_output_dir("~").unwrap(), home);
        assert_eq!(expand_output_dir("~/data").unwrap(), home.join("data"));
    }
}
