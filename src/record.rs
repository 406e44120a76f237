//! Record metadata model and the Zenodo records API client.

use serde::Deserialize;

use crate::config::FetchConfig;
use crate::error::{Error, Result};

/// Metadata for one file attached to a record.
#[derive(Debug, Clone, Deserialize)]
pub struct FileDescriptor {
    /// Relative name of the file; may contain `/` separators.
    pub key: String,
    /// File size in bytes.
    pub size: u64,
    /// Links attached to the file entry.
    pub links: FileLinks,
}

/// Link object nested inside a file entry.
#[derive(Debug, Clone, Deserialize)]
pub struct FileLinks {
    /// Direct download URL.
    #[serde(rename = "self")]
    pub download: String,
}

/// A record's file listing as returned by the records API.
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    /// Files attached to the record, in API order.
    pub files: Vec<FileDescriptor>,
}

impl Record {
    /// Number of files attached to the record.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Sum of all file sizes in bytes.
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }
}

/// Client for the records metadata endpoint.
pub struct RecordClient {
    http: reqwest::Client,
    base_url: String,
}

impl RecordClient {
    /// Creates a client from a pre-built HTTP client and fetch configuration.
    ///
    /// The HTTP client is expected to carry the request timeout; sharing one
    /// client between metadata and download requests keeps the connection
    /// pool warm.
    #[must_use]
    pub fn new(http: reqwest::Client, config: &FetchConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
        }
    }

    /// Fetches the file listing for a record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Timeout`] when the request times out,
    /// [`Error::Request`] on other transport failures,
    /// [`Error::RequestFailed`] on a non-success status, and
    /// [`Error::Parse`] when the response body is not the expected shape.
    pub async fn fetch(&self, record_id: u64) -> Result<Record> {
        let url = format!("{}/{record_id}", self.base_url);
        log::debug!("fetching record metadata from {url}");

        let response = self.http.get(&url).send().await.map_err(Error::from)?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::RequestFailed { status });
        }

        let body = response.text().await.map_err(Error::from)?;
        let record: Record = serde_json::from_str(&body)?;
        Ok(record)
    }
}
