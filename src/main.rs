use anyhow::Context;
use clap::Parser;
use delivery_filter::config::cli::create_output_directories;
use delivery_filter::core::{ConfigProvider, RunLog};
use delivery_filter::utils::logger;
use delivery_filter::{
    AppSettings, CliArgs, DeliveryEngine, DeliveryPipeline, FileRunLog, LocalStorage, Prompter,
};
use std::path::Path;
use std::sync::Arc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting delivery-filter");
    tracing::debug!("CLI args: {:?}", args);

    // Without a log and result path the run cannot do anything useful.
    let config = match AppSettings::from_file(&args.config)
        .and_then(|settings| settings.resolve(&args.orders))
    {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!(
                "Failed to load configuration from '{}': {}",
                args.config,
                e.user_friendly_message()
            );
            std::process::exit(1);
        }
    };

    create_output_directories(Path::new("."))
        .context("Failed to create the logs/ and results/ directories")?;

    let log: Arc<dyn RunLog> = Arc::new(FileRunLog::new(config.log_file_path()));
    let storage = LocalStorage::new(".");
    let pipeline = DeliveryPipeline::new(storage, config, log.clone());
    let engine = DeliveryEngine::new(pipeline, log);

    let stdin = std::io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());

    match engine.run(&mut prompter).await {
        Ok(summary) => {
            tracing::info!(
                "Loaded {} orders, {} matched, {} within the delivery window",
                summary.loaded,
                summary.matched,
                summary.windowed
            );
            match summary.output_path {
                Some(path) => println!("Result saved to: {}", path),
                None => println!("The result file could not be written, see the log for details."),
            }
        }
        Err(e) => {
            tracing::error!("Run stopped: {}", e);
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(1);
        }
    }

    Ok(())
}
