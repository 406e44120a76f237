//! Core download loop and conflict resolution.

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use crate::config::DownloadConfig;
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use crate::record::FileDescriptor;

/// What to do when a download target already exists on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConflictPolicy {
    /// Remove the existing file and download in its place.
    Force,
    /// Leave the existing file alone and report it as skipped.
    ///
    /// Also the default when no policy flag is given, so existing data is
    /// never silently replaced.
    #[default]
    Skip,
    /// Prompt per file; "n" keeps both copies via a disambiguated path.
    Ask,
}

/// How a file ended up after its turn in the download loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Downloaded to the candidate path.
    Downloaded,
    /// Left untouched because it already existed.
    Skipped,
    /// Downloaded next to an existing copy under a disambiguated name.
    SavedCopy,
}

/// Trait for receiving download progress updates.
///
/// All methods have default no-op implementations for convenience.
pub trait DownloadReporter: Send + Sync {
    /// Called when a file download starts.
    fn on_file_start(&self, _key: &str, _size: u64) {}

    /// Called with the number of bytes written since the last call.
    fn on_progress(&self, _key: &str, _bytes_delta: u64) {}

    /// Called after each file, downloaded or skipped. `index` is 1-based.
    fn on_file_done(&self, _key: &str, _outcome: FileOutcome, _index: usize, _total: usize) {}

    /// Called when a file download fails. The loop continues afterwards.
    fn on_file_error(&self, _key: &str, _error: &Error) {}
}

/// A null reporter that ignores all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoReporter;

impl DownloadReporter for NoReporter {}

/// Counts for one download run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Files written to disk (including disambiguated copies).
    pub downloaded: usize,
    /// Files left untouched by the conflict policy.
    pub skipped: usize,
    /// Files whose download failed.
    pub failed: usize,
    /// Total bytes written.
    pub bytes_downloaded: u64,
}

/// Rewrites a filename by inserting `" (1)"` before the extension, so an
/// existing copy and a fresh download can both be kept.
#[must_use]
pub fn disambiguated_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let renamed = match path.extension() {
        Some(ext) => format!("{stem} (1).{}", ext.to_string_lossy()),
        None => format!("{stem} (1)"),
    };
    path.parent()
        .map_or_else(|| PathBuf::from(&renamed), |parent| parent.join(&renamed))
}

/// Where one file's download should go, if anywhere.
enum Target {
    Write(PathBuf, FileOutcome),
    Skip,
}

/// Sequential downloader for a record's file list.
pub struct Downloader {
    http: reqwest::Client,
    config: DownloadConfig,
}

impl Downloader {
    /// Creates a downloader sharing the given HTTP client.
    #[must_use]
    pub const fn new(http: reqwest::Client, config: DownloadConfig) -> Self {
        Self { http, config }
    }

    /// Returns a reference to the download configuration.
    #[must_use]
    pub const fn config(&self) -> &DownloadConfig {
        &self.config
    }

    /// Applies the conflict policy to one candidate path.
    ///
    /// Only consulted when the candidate already exists as a file; a fresh
    /// path always proceeds.
    async fn resolve_target(
        &self,
        candidate: PathBuf,
        policy: ConflictPolicy,
        prompter: &mut dyn Prompter,
    ) -> Result<Target> {
        let exists = tokio::fs::metadata(&candidate)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false);
        if !exists {
            return Ok(Target::Write(candidate, FileOutcome::Downloaded));
        }

        match policy {
            ConflictPolicy::Force => {
                log::info!("{} exists, replacing", candidate.display());
                tokio::fs::remove_file(&candidate).await?;
                Ok(Target::Write(candidate, FileOutcome::Downloaded))
            }
            ConflictPolicy::Skip => Ok(Target::Skip),
            ConflictPolicy::Ask => {
                if prompter.confirm_replace(&candidate)? {
                    tokio::fs::remove_file(&candidate).await?;
                    Ok(Target::Write(candidate, FileOutcome::Downloaded))
                } else {
                    Ok(Target::Write(
                        disambiguated_path(&candidate),
                        FileOutcome::SavedCopy,
                    ))
                }
            }
        }
    }

    /// Downloads one file to `target`, streaming the body to disk.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails, the server answers with a
    /// non-success status, or the file cannot be written.
    pub async fn download_file(
        &self,
        file: &FileDescriptor,
        target: &Path,
        reporter: &dyn DownloadReporter,
    ) -> Result<u64> {
        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        reporter.on_file_start(&file.key, file.size);

        let mut response = self
            .http
            .get(&file.links.download)
            .send()
            .await
            .map_err(Error::from)?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::RequestFailed { status });
        }

        let mut out = tokio::fs::File::create(target).await?;
        let mut written = 0u64;
        while let Some(chunk) = response.chunk().await.map_err(Error::from)? {
            out.write_all(&chunk).await?;
            written += chunk.len() as u64;
            reporter.on_progress(&file.key, chunk.len() as u64);
        }
        out.flush().await?;

        Ok(written)
    }

    /// Downloads all files, in list order, into `output_dir`.
    ///
    /// A per-file failure (conflict resolution or transfer) is logged with
    /// the file key, the partial output is removed (when configured), and
    /// the loop continues with the next file after the configured delay.
    pub async fn download_all(
        &self,
        files: &[FileDescriptor],
        output_dir: &Path,
        policy: ConflictPolicy,
        prompter: &mut dyn Prompter,
        reporter: &dyn DownloadReporter,
    ) -> SessionSummary {
        let total = files.len();
        let mut summary = SessionSummary::default();

        for (idx, file) in files.iter().enumerate() {
            let index = idx + 1;
            let candidate = output_dir.join(&file.key);

            let result = match self.resolve_target(candidate, policy, prompter).await {
                Ok(Target::Skip) => {
                    log::info!("skipping {}, already present", file.key);
                    summary.skipped += 1;
                    reporter.on_file_done(&file.key, FileOutcome::Skipped, index, total);
                    continue;
                }
                Ok(Target::Write(target, outcome)) => self
                    .download_file(file, &target, reporter)
                    .await
                    .map(|bytes| (bytes, outcome))
                    .map_err(|e| {
                        (e, if self.config.cleanup_on_error { Some(target) } else { None })
                    }),
                Err(e) => Err((e, None)),
            };

            match result {
                Ok((bytes, outcome)) => {
                    summary.downloaded += 1;
                    summary.bytes_downloaded += bytes;
                    reporter.on_file_done(&file.key, outcome, index, total);
                }
                Err((e, partial)) => {
                    if let Some(target) = partial {
                        let _ = tokio::fs::remove_file(&target).await;
                    }
                    log::error!("{}: download failed: {e}", file.key);
                    summary.failed += 1;
                    reporter.on_file_error(&file.key, &e);
                    if index < total {
                        tokio::time::sleep(self.config.failure_delay).await;
                    }
                }
            }
        }

        summary
    }
}
