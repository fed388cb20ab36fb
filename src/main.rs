use positrack::commands::Cli;
use positrack::libs::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();
    Cli::menu().await
}
