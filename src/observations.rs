use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;

/// One row of the flattened results: a single candidate/party pairing
/// contesting a single electorate, combined with that electorate's summary
/// figures. Field order here is the column order of the output CSV.
///
/// The vote counts and summary figures are optional because the results site
/// leaves them blank while counts are still coming in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub electorate: String,
    pub party: String,
    pub party_vote: Option<i64>,
    pub candidate: String,
    pub candidate_vote: Option<i64>,
    pub votes_counted: Option<f64>,
    pub total_votes: Option<i64>,
}

/// Name of the output file for a run on the given date, e.g.
/// `observations_2020-11-15.csv`.
pub fn observations_csv_filename(date: NaiveDate) -> String {
    format!("observations_{}.csv", date.format("%Y-%m-%d"))
}

/// Writes every observation to one CSV file, header first, in the order
/// given. Overwrites any existing file at `path`.
pub fn write_observations_csv(path: &Path, observations: &[Observation]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for observation in observations {
        writer.serialize(observation)?;
    }
    writer.flush()?;
    Ok(())
}
