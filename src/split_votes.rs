use std::path::{Path, PathBuf};

use log::info;

use crate::{
    config::{ELECTORATE_COUNT, split_votes_csv_url},
    requests::RequestClient,
};

pub fn split_votes_output_path(output_dir: &Path, id: u32) -> PathBuf {
    output_dir.join(format!("data_{id}.csv"))
}

/// Downloads the split-vote statistics CSV for every electorate into
/// `output_dir`, one file per electorate, overwriting files from a previous
/// run. Bodies are written verbatim, whatever the server returned; files
/// already written persist if a later download fails.
pub async fn download_split_votes(
    client: &RequestClient,
    output_dir: &Path,
) -> anyhow::Result<()> {
    std::fs::create_dir_all(output_dir)?;
    for id in 1..=ELECTORATE_COUNT {
        let url = split_votes_csv_url(id);
        info!("downloading {url}");
        let body = client.fetch_url_body_utf8(&url).await?;
        std::fs::write(split_votes_output_path(output_dir, id), body)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_files_are_named_by_electorate_index() {
        assert_eq!(
            split_votes_output_path(Path::new("data"), 5),
            PathBuf::from("data/data_5.csv")
        );
        assert_eq!(
            split_votes_output_path(Path::new("data"), 72),
            PathBuf::from("data/data_72.csv")
        );
    }
}
