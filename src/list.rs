//! Two-column aligned file listing.

use crate::format::human_size;
use crate::record::{FileDescriptor, Record};

/// Column width for the file key, dot-filled to the right.
const KEY_WIDTH: usize = 80;

/// Column width for the humanized size, dot-filled to the left.
const SIZE_WIDTH: usize = 10;

/// Renders one listing line: key left-justified, size right-justified.
#[must_use]
pub fn render_line(file: &FileDescriptor) -> String {
    format!(
        "{:.<KEY_WIDTH$}{:.>SIZE_WIDTH$}",
        file.key,
        human_size(file.size)
    )
}

/// Renders the listing lines for all files, in record order.
#[must_use]
pub fn render_listing(files: &[FileDescriptor]) -> Vec<String> {
    files.iter().map(render_line).collect()
}

/// Prints the aggregate total followed by the per-file listing.
pub fn print_listing(record: &Record) {
    println!("Total size: {}", human_size(record.total_size()));
    for line in render_listing(&record.files) {
        println!("{line}");
    }
}
