//! Download state tracking.

use std::path::PathBuf;

/// An image that could not be downloaded.
#[derive(Debug, Clone)]
pub struct FailedDownload {
    pub url: String,
    pub error: String,
}

/// Per-run download statistics.
#[derive(Debug, Default)]
pub struct DownloadState {
    /// Files written during this run.
    pub downloaded: Vec<PathBuf>,

    /// Files that were already present and left alone.
    pub skipped: Vec<PathBuf>,

    /// Images whose timestamp matched an earlier image to the second.
    pub collision_count: u64,

    /// Total bytes written.
    pub bytes_written: u64,

    pub failures: Vec<FailedDownload>,
}

impl DownloadState {
    /// Record a freshly written file.
    pub fn mark_downloaded(&mut self, path: PathBuf, bytes: u64) {
        self.downloaded.push(path);
        self.bytes_written += bytes;
    }

    /// Record a file that already existed.
    pub fn mark_skipped(&mut self, path: PathBuf) {
        self.skipped.push(path);
    }

    /// Increment collision count.
    pub fn increment_collision(&mut self) {
        self.collision_count += 1;
    }

    /// Record a failed image.
    pub fn mark_failed(&mut self, url: &str, error: &crate::error::Error) {
        self.failures.push(FailedDownload {
            url: url.to_string(),
            error: error.to_string(),
        });
    }

    pub fn download_count(&self) -> usize {
        self.downloaded.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_counters() {
        let mut state = DownloadState::default();
        state.mark_downloaded(PathBuf::from("a.jpg"), 10);
        state.mark_downloaded(PathBuf::from("b.jpg"), 5);
        state.mark_skipped(PathBuf::from("c.jpg"));
        state.mark_failed("http://x/d", &Error::Extraction("http://x/d".into()));
        state.increment_collision();

        assert_eq!(state.download_count(), 2);
        assert_eq!(state.bytes_written, 15);
        assert_eq!(state.skipped_count(), 1);
        assert_eq!(state.failed_count(), 1);
        assert_eq!(state.collision_count, 1);
        assert!(state.failures[0].error.contains("http://x/d"));
    }
}
