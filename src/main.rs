use clap::Parser;
use solid_kit::core::Post;
use solid_kit::utils::{logger, validation::Validate};
use solid_kit::{EndpointSource, FeedSync, FileSink, HttpTransport, JsonDecoder, SyncConfig};
use url::Url;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = SyncConfig::parse();

    let config = match &cli.config {
        Some(path) => SyncConfig::from_file(path)?,
        None => cli,
    };

    logger::init_cli_logger(config.verbose);

    tracing::info!("starting solid-kit feed sync");
    if config.verbose {
        tracing::debug!("config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    // validate() already established the URL parses
    let endpoint = Url::parse(&config.feed_url)?;

    let source = EndpointSource::new(HttpTransport::new(), endpoint);
    let parser: JsonDecoder<Post> = JsonDecoder::new();
    let sink: FileSink<Post> = FileSink::new(&config.output_path, &config.output_file);

    let sync = FeedSync::new(source, parser, sink);

    match sync.run().await {
        Ok(count) => {
            tracing::info!(count, "feed sync completed");
            println!(
                "Synced {} records to {}/{}",
                count, config.output_path, config.output_file
            );
        }
        Err(e) => {
            tracing::error!("feed sync failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
