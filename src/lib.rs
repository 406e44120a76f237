//! zen-dl - list and download the files attached to Zenodo records.
//!
//! The library fetches a record's file listing from the Zenodo records API,
//! formats sizes for display, and downloads files sequentially with an
//! explicit conflict-resolution policy for paths that already exist.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use zen_dl::{
//!     ConflictPolicy, DownloadConfig, Downloader, FetchConfig, NoReporter, RecordClient,
//!     StdinPrompter,
//! };
//!
//! # async fn example() -> zen_dl::Result<()> {
//! let config = FetchConfig::default();
//! let http = reqwest::Client::builder().timeout(config.timeout).build()?;
//!
//! // Fetch the record's file listing
//! let record = RecordClient::new(http.clone(), &config).fetch(1234).await?;
//!
//! // Download everything, skipping files that already exist
//! let downloader = Downloader::new(http, DownloadConfig::default());
//! let summary = downloader
//!     .download_all(
//!         &record.files,
//!         Path::new("."),
//!         ConflictPolicy::Skip,
//!         &mut StdinPrompter,
//!         &NoReporter,
//!     )
//!     .await;
//! println!("Downloaded {} files", summary.downloaded);
//! # Ok(())
//! # }
//! ```

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod format;
pub mod list;
pub mod prompt;
pub mod record;

// Re-export main types for convenience
pub use config::{DownloadConfig, FetchConfig};
pub use download::{
    ConflictPolicy, DownloadReporter, Downloader, FileOutcome, NoReporter, SessionSummary,
    disambiguated_path,
};
pub use error::{Error, Result};
pub use format::human_size;
pub use prompt::{Prompter, StdinPrompter};
pub use record::{FileDescriptor, FileLinks, Record, RecordClient};
