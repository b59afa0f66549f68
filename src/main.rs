//! Tweet Image Search - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use tweet_image_search::{
    api::TwitterApi,
    cli::Args,
    config::{validate_config, Config},
    download::run_query,
    error::{Error, Result},
    fs::get_query_folder,
    output::{print_error, print_run_summary, print_success, print_summary},
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Load configuration and merge CLI arguments into it
    let mut config = Config::resolve(args.config.as_deref())?;
    let query = args.query_string();
    args.merge_into_config(&mut config);

    validate_config(&config)?;

    print_run_summary(
        &query,
        &get_query_folder(&config, &query)?.display().to_string(),
        config.search.max_pages,
        config.search.max_images,
        config.download.failure_policy,
        config.download.collision_policy,
    );

    let api = TwitterApi::new(&config.api)?;
    let report = run_query(&api, &api, &config, &query).await?;

    print_summary(&report);

    if report.state.failed_count() > 0 {
        return Err(Error::DownloadsFailed(report.state.failed_count()));
    }

    print_success(&format!("Images saved in {}", report.folder.display()));

    Ok(())
}
