//! Configuration types for fetch and download operations.

use std::time::Duration;

/// Base URL of the Zenodo records API.
pub const DEFAULT_BASE_URL: &str = "https://zenodo.org/api/records";

/// Timeout applied to every HTTP request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Pause after a failed per-file download before moving on.
pub const FAILURE_DELAY: Duration = Duration::from_secs(5);

/// Configuration for the metadata fetch.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Records API endpoint; the record id is appended as a path segment.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl FetchConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the records API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Configuration for download operations.
#[derive(Debug, Clone)]
pub struct DownloadConfig {
    /// Pause after a failed file before continuing with the next one.
    pub failure_delay: Duration,
    /// Whether to remove a partially written file after a failed download.
    pub cleanup_on_error: bool,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            failure_delay: FAILURE_DELAY,
            cleanup_on_error: true,
        }
    }
}

impl DownloadConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pause inserted after a failed download.
    #[must_use]
    pub const fn with_failure_delay(mut self, delay: Duration) -> Self {
        self.failure_delay = delay;
        self
    }

    /// Sets whether to remove partial output after a failed download.
    #[must_use]
    pub const fn with_cleanup_on_error(mut self, cleanup: bool) -> Self {
        self.cleanup_on_error = cleanup;
        self
    }
}
