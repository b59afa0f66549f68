//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{CollisionPolicy, Config, FailurePolicy};

/// Download photos from recent tweets matching a search query.
#[derive(Parser, Debug)]
#[command(
    name = "tweet-image-search",
    version,
    about = "Download photos from recent tweets matching a search query",
    long_about = "Searches recent tweets for the query, collects the large rendition of every \
                  attached photo and saves them into a folder named after the query.\n\n\
                  All remaining words are joined with spaces to form the query."
)]
pub struct Args {
    /// Path to configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Bearer token for the search API.
    #[arg(long = "bearer-token", env = "TWITTER_BEARER_TOKEN", hide_env_values = true)]
    pub bearer_token: Option<String>,

    /// Base directory the query folder is created in.
    #[arg(short = 'd', long = "directory")]
    pub download_directory: Option<PathBuf>,

    /// Maximum number of result pages to request.
    #[arg(long)]
    pub max_pages: Option<u32>,

    /// Stop paging once more than this many images were found.
    #[arg(long)]
    pub max_images: Option<usize>,

    /// Keep downloading the remaining images after a failure.
    #[arg(long)]
    pub keep_going: bool,

    /// How to name images posted in the same second.
    #[arg(long, value_enum)]
    pub collision: Option<CollisionArg>,

    /// Hide the download progress bar.
    #[arg(long)]
    pub no_progress: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,

    /// Search query words.
    #[arg(
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub query: Vec<String>,
}

/// CLI collision policy argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CollisionArg {
    /// Save later images as NAME_1, NAME_2, ...
    Suffix,
    /// Keep one file per second and skip the rest.
    Skip,
}

impl From<CollisionArg> for CollisionPolicy {
    fn from(arg: CollisionArg) -> Self {
        match arg {
            CollisionArg::Suffix => CollisionPolicy::Suffix,
            CollisionArg::Skip => CollisionPolicy::Skip,
        }
    }
}

impl Args {
    /// The search query: all positional words joined with single spaces.
    pub fn query_string(&self) -> String {
        self.query.join(" ")
    }

    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(token) = self.bearer_token {
            config.api.bearer_token = Some(token);
        }

        if let Some(dir) = self.download_directory {
            config.download.directory = Some(dir);
        }

        if let Some(max_pages) = self.max_pages {
            config.search.max_pages = max_pages;
        }

        if let Some(max_images) = self.max_images {
            config.search.max_images = max_images;
        }

        if let Some(collision) = self.collision {
            config.download.collision_policy = collision.into();
        }

        // Boolean flags (only override if set to non-default)
        if self.keep_going {
            config.download.failure_policy = FailurePolicy::Continue;
        }

        if self.no_progress {
            config.download.show_progress = false;
        }
    }
}
