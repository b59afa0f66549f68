//! End-to-end run: search, collect, download.

use std::path::{Path, PathBuf};

use crate::api::{ImageFetcher, SearchApi};
use crate::config::{CollisionPolicy, Config, DownloadConfig, FailurePolicy};
use crate::download::image::{download_image_to, DownloadOutcome};
use crate::download::search::query_for_images;
use crate::download::state::DownloadState;
use crate::error::Result;
use crate::fs::{ensure_dir, get_query_folder, FilenameAllocator};
use crate::media::ImageDescriptor;
use crate::output::{create_item_bar, print_status_warning};

/// Everything a finished run produced.
#[derive(Debug)]
pub struct RunReport {
    pub query: String,
    pub folder: PathBuf,
    /// Deduplicated images in download order.
    pub images: Vec<ImageDescriptor>,
    pub state: DownloadState,
}

/// Search for `query` and download every image found.
///
/// The output folder is created before the first request is made.
pub async fn run_query<A, F>(
    api: &A,
    fetcher: &F,
    config: &Config,
    query: &str,
) -> Result<RunReport>
where
    A: SearchApi + ?Sized,
    F: ImageFetcher + ?Sized,
{
    let folder = get_query_folder(config, query)?;
    ensure_dir(&folder)?;

    let images = query_for_images(api, query, &config.search).await?;
    tracing::info!("Found {} unique images", images.len());

    let state = download_all(fetcher, &images, &folder, &config.download).await?;

    Ok(RunReport {
        query: query.to_string(),
        folder,
        images,
        state,
    })
}

/// Download a sorted, deduplicated queue of images into `folder`.
///
/// Under [`FailurePolicy::FailFast`] the first error aborts the queue; files
/// written before it stay on disk. Under [`FailurePolicy::Continue`] failures
/// are recorded in the returned state and the queue carries on.
pub async fn download_all<F>(
    fetcher: &F,
    images: &[ImageDescriptor],
    folder: &Path,
    options: &DownloadConfig,
) -> Result<DownloadState>
where
    F: ImageFetcher + ?Sized,
{
    let mut state = DownloadState::default();
    let names = FilenameAllocator::new(options.collision_policy, images);

    let bar = if options.show_progress && images.len() > 1 {
        Some(create_item_bar(images.len() as u64, "Downloading"))
    } else {
        None
    };

    for image in images {
        let result = download_next(fetcher, &names, &mut state, image, folder, bar.as_ref()).await;

        if let Err(e) = result {
            match options.failure_policy {
                FailurePolicy::FailFast => {
                    if let Some(bar) = &bar {
                        bar.abandon();
                    }
                    return Err(e);
                }
                FailurePolicy::Continue => {
                    print_status_warning(
                        bar.as_ref(),
                        &format!("Failed to download {}: {}", image.url, e),
                    );
                    state.mark_failed(&image.url, &e);
                }
            }
        }

        if let Some(bar) = &bar {
            bar.inc(1);
        }
    }

    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    Ok(state)
}

async fn download_next<F>(
    fetcher: &F,
    names: &FilenameAllocator,
    state: &mut DownloadState,
    image: &ImageDescriptor,
    folder: &Path,
    bar: Option<&indicatif::ProgressBar>,
) -> Result<()>
where
    F: ImageFetcher + ?Sized,
{
    let name = names.allocate(image)?;
    let path = folder.join(&name.filename);

    if let Some(owner) = &name.collides_with {
        state.increment_collision();

        if names.policy() == CollisionPolicy::Skip {
            print_status_warning(
                bar,
                &format!(
                    "{} was posted in the same second as {}, skipping it",
                    image.url, owner
                ),
            );
            state.mark_skipped(path);
            return Ok(());
        }

        print_status_warning(
            bar,
            &format!(
                "{} was posted in the same second as {}, saving as {}",
                image.url, owner, name.filename
            ),
        );
    }

    match download_image_to(fetcher, image, &path, bar).await? {
        DownloadOutcome::Downloaded { path, bytes } => state.mark_downloaded(path, bytes),
        DownloadOutcome::AlreadyExists(path) => state.mark_skipped(path),
    }

    Ok(())
}
