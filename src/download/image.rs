//! Image file downloading.

use std::path::{Path, PathBuf};

use futures::StreamExt;
use indicatif::ProgressBar;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::ImageFetcher;
use crate::error::Result;
use crate::media::ImageDescriptor;
use crate::output::print_status;

/// Result of a single download attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The file was fetched and written.
    Downloaded { path: PathBuf, bytes: u64 },
    /// A file was already present at the target path; nothing was fetched.
    AlreadyExists(PathBuf),
}

/// Download an image into `target_dir` under its default timestamp name.
pub async fn download_image<F>(
    fetcher: &F,
    image: &ImageDescriptor,
    target_dir: &Path,
) -> Result<DownloadOutcome>
where
    F: ImageFetcher + ?Sized,
{
    let output_path = target_dir.join(image.generate_filename()?);
    download_image_to(fetcher, image, &output_path, None).await
}

/// Download an image to an explicit path unless a file is already there.
pub async fn download_image_to<F>(
    fetcher: &F,
    image: &ImageDescriptor,
    output_path: &Path,
    bar: Option<&ProgressBar>,
) -> Result<DownloadOutcome>
where
    F: ImageFetcher + ?Sized,
{
    if output_path.exists() {
        print_status(
            bar,
            &format!("    File already exists: {}", output_path.display()),
        );
        return Ok(DownloadOutcome::AlreadyExists(output_path.to_path_buf()));
    }

    print_status(bar, &format!("    Downloading: {}", output_path.display()));

    let body = fetcher.fetch_image(&image.url).await?;
    tracing::debug!(
        "Fetching {} ({} bytes reported)",
        image.url,
        body.content_length
            .map(|l| l.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    );

    // Stream to file
    let mut file = File::create(output_path).await?;
    let mut stream = body.stream;
    let mut written: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }

    file.flush().await?;

    Ok(DownloadOutcome::Downloaded {
        path: output_path.to_path_buf(),
        bytes: written,
    })
}
