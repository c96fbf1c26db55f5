use std::path::Path;

use chrono::Local;
use dotenv::dotenv;
use log::{LevelFilter, info};
use wetascraper::{
    ElectorateScraper, RequestClient, config::ELECTORATE_COUNT, observations_csv_filename,
    write_observations_csv,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .init();

    let client = RequestClient::new()?;

    let mut observations = Vec::new();
    for id in 1..=ELECTORATE_COUNT {
        let scraper = ElectorateScraper::new(id);
        info!("scraping electorate {id}: {}", scraper.url);
        let rows = scraper.scrape(&client).await?;
        info!("electorate {id}: {} contesting rows", rows.len());
        observations.extend(rows);
    }

    let filename = observations_csv_filename(Local::now().date_naive());
    write_observations_csv(Path::new(&filename), &observations)?;
    info!("wrote {} observations to {filename}", observations.len());

    Ok(())
}
