use std::path::Path;

use dotenv::dotenv;
use log::LevelFilter;
use wetascraper::{RequestClient, download_split_votes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .init();

    let client = RequestClient::new()?;
    download_split_votes(&client, Path::new("data")).await
}
