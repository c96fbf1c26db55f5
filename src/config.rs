//! Fixed parameters for the 2020 general election results site. Everything
//! here is a constant: the site publishes exactly 72 electorates and the URL
//! layout is stable for a given election.

pub const ELECTORATE_COUNT: u32 = 72;

pub const RESULTS_BASE_URL: &str = "https://www.electionresults.govt.nz/electionresults_2020";

/// URL of the official-result page for one electorate. The site zero-pads
/// electorate ids to two digits in these paths.
pub fn electorate_details_url(id: u32) -> String {
    format!("{RESULTS_BASE_URL}/electorate-details-{id:02}.html")
}

/// URL of the split-votes statistics CSV for one electorate. Unlike the
/// details pages, these paths use the unpadded id.
pub fn split_votes_csv_url(id: u32) -> String {
    format!("{RESULTS_BASE_URL}/statistics/csv/split-votes-electorate-{id}.csv")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_url_is_zero_padded() {
        assert_eq!(
            electorate_details_url(5),
            "https://www.electionresults.govt.nz/electionresults_2020/electorate-details-05.html"
        );
        assert!(electorate_details_url(72).ends_with("electorate-details-72.html"));
    }

    #[test]
    fn split_votes_url_is_not_padded() {
        assert!(split_votes_csv_url(5).ends_with("split-votes-electorate-5.csv"));
        assert!(split_votes_csv_url(1).ends_with("split-votes-electorate-1.csv"));
    }
}
