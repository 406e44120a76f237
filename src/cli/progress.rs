//! Progress bar and summary reporting for CLI downloads.

use std::sync::Mutex;

use indicatif::{ProgressBar, ProgressStyle};

use crate::download::{DownloadReporter, FileOutcome, SessionSummary};
use crate::error::Error;
use crate::format::human_size;

const SEPARATOR: &str = "────────────────────────────────────────────────────────────";

/// Creates a progress bar for a single file download.
pub fn make_progress_bar(size: u64, name: &str) -> ProgressBar {
    let bar = ProgressBar::new(size);
    bar.set_style(
        ProgressStyle::with_template(
            "{spinner:.cyan} [{bar:40.cyan/blue}] {bytes}/{total_bytes} @ {bytes_per_sec} - {msg}",
        )
        .expect("progress template is valid")
        .progress_chars("━━╌"),
    );
    bar.set_message(name.to_string());
    bar
}

/// True percentage of `index` out of `total`, for the per-file report.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn percentage(index: usize, total: usize) -> f64 {
    if total == 0 {
        100.0
    } else {
        100.0 * index as f64 / total as f64
    }
}

/// Reporter that draws a byte-progress bar per file and prints a
/// "file N of TOTAL" line after each one.
#[derive(Default)]
pub struct ConsoleReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl DownloadReporter for ConsoleReporter {
    fn on_file_start(&self, key: &str, size: u64) {
        let bar = make_progress_bar(size, key);
        *self.bar.lock().expect("reporter lock") = Some(bar);
    }

    fn on_progress(&self, _key: &str, bytes_delta: u64) {
        if let Some(bar) = self.bar.lock().expect("reporter lock").as_ref() {
            bar.inc(bytes_delta);
        }
    }

    fn on_file_done(&self, key: &str, outcome: FileOutcome, index: usize, total: usize) {
        if let Some(bar) = self.bar.lock().expect("reporter lock").take() {
            bar.finish_and_clear();
        }
        let pct = percentage(index, total);
        match outcome {
            FileOutcome::Downloaded => {
                println!("Downloaded file {index} of {total}. [{pct:.1}%]");
            }
            FileOutcome::SavedCopy => {
                println!("Downloaded copy of {key}: file {index} of {total}. [{pct:.1}%]");
            }
            FileOutcome::Skipped => {
                println!("Skipped file {index} of {total}. [{pct:.1}%]");
            }
        }
    }

    fn on_file_error(&self, key: &str, error: &Error) {
        if let Some(bar) = self.bar.lock().expect("reporter lock").take() {
            bar.abandon();
        }
        eprintln!("{key}: download error: {error}");
    }
}

/// Prints a summary of the download run.
pub fn print_summary(summary: &SessionSummary) {
    println!("{SEPARATOR}");
    println!("  Files downloaded:  {}", summary.downloaded);
    println!(
        "  Total size:        {}",
        human_size(summary.bytes_downloaded)
    );
    if summary.skipped > 0 {
        println!("  Files skipped:     {}", summary.skipped);
    }
    if summary.failed > 0 {
        println!("  Files failed:      {}", summary.failed);
    }
    println!("{SEPARATOR}");
}
