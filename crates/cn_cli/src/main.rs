use anyhow::Context;
use clap::Parser;
use cn_console::Session;
use cn_fetchers::{init_logging, CricApiClient, NewsApiClient};
use tracing::info;

mod args;

use args::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; keys may come from the environment or flags.
    dotenv::dotenv().ok();
    let logger = init_logging();

    let config = Cli::parse()
        .into_config()
        .context("invalid configuration")?;
    info!("⚙️ Loaded configuration: {:?}", config);

    let matches = CricApiClient::new(config.cricket.clone())?;
    let news = NewsApiClient::new(config.news.clone())?;
    let session = Session::new(matches, news, config.limits.clone());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let outcome = session
        .run(&mut stdin.lock(), &mut stdout.lock())
        .await
        .context("terminal I/O failed")?;

    logger.info(&format!("✨ Session finished: {:?}", outcome));
    Ok(())
}
