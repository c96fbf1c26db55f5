use scraper::{ElementRef, Html, Selector};

use crate::{
    config::electorate_details_url,
    observations::Observation,
    requests::RequestClient,
    scrape_error::ScrapeError,
    text_manipulators::{extract_text, parse_formatted_number},
};

/// Electorate pages title themselves "<name> - Official Result"; only the
/// name goes into the output.
const OFFICIAL_RESULT_SUFFIX: &str = " - Official Result";

#[derive(Debug)]
pub struct ElectorateScraper {
    pub electorate_id: u32,
    pub url: String,
}

impl ElectorateScraper {
    pub fn new(electorate_id: u32) -> Self {
        Self {
            electorate_id,
            url: electorate_details_url(electorate_id),
        }
    }

    /// Fetches this electorate's official-result page and flattens it into
    /// one observation per contesting candidate/party pair.
    pub async fn scrape(&self, client: &RequestClient) -> anyhow::Result<Vec<Observation>> {
        let html = client.fetch_url_body(&self.url).await?;
        parse_electorate_page(&html)
    }
}

/// Parses one official-result page. Separated from the fetch so page layouts
/// can be exercised against fixture HTML.
pub fn parse_electorate_page(html: &str) -> anyhow::Result<Vec<Observation>> {
    let title_selector = Selector::parse(".page-title h2").unwrap();
    let summary_row_selector = Selector::parse("#electorate_details_table tr").unwrap();
    let contesting_row_selector = Selector::parse("#partyCandidatesResultsTable tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();
    let name_selector = Selector::parse("span").unwrap();
    let vote_selector = Selector::parse("span.float-right").unwrap();

    let document = Html::parse_document(html);

    let electorate = document
        .select(&title_selector)
        .next()
        .map(extract_text)
        .ok_or_else(|| ScrapeError::new("page title heading not found"))?
        .replace(OFFICIAL_RESULT_SUFFIX, "");

    let summary_row = document
        .select(&summary_row_selector)
        .next()
        .ok_or_else(|| ScrapeError::new("electorate details table not found"))?;
    let summary_cells: Vec<_> = summary_row.select(&cell_selector).collect();
    let total_votes = parse_formatted_number::<i64>(
        summary_cells.get(1).map(|cell| extract_text(*cell)).as_deref(),
    )?;
    let votes_counted = parse_formatted_number::<f64>(
        summary_cells.get(2).map(|cell| extract_text(*cell)).as_deref(),
    )?;

    // The first row of the candidates table is its header and the last two
    // are total/informal footers; everything in between is a contesting pair.
    let contesting_rows: Vec<_> = document.select(&contesting_row_selector).collect();
    let end = contesting_rows.len().saturating_sub(2);
    let contesting = contesting_rows.get(1..end).unwrap_or(&[]);

    let mut observations = Vec::new();
    for row in contesting {
        let cells: Vec<_> = row.select(&cell_selector).collect();
        let candidate_cell = cells
            .first()
            .copied()
            .ok_or_else(|| ScrapeError::new("contesting row has no candidate cell"))?;
        let party_cell = cells
            .get(1)
            .copied()
            .ok_or_else(|| ScrapeError::new("contesting row has no party cell"))?;

        let (candidate, candidate_vote) =
            parse_contesting_cell(candidate_cell, &name_selector, &vote_selector)?;
        let (party, party_vote) = parse_contesting_cell(party_cell, &name_selector, &vote_selector)?;

        observations.push(Observation {
            electorate: electorate.clone(),
            party,
            party_vote,
            candidate,
            candidate_vote,
            votes_counted,
            total_votes,
        });
    }

    Ok(observations)
}

/// A contesting cell holds the candidate or party name in its first span and
/// the right-aligned vote count in a `span.float-right`. Names are required;
/// the count may be blank or missing while results are provisional.
fn parse_contesting_cell(
    cell: ElementRef,
    name_selector: &Selector,
    vote_selector: &Selector,
) -> anyhow::Result<(String, Option<i64>)> {
    let name = cell
        .select(name_selector)
        .next()
        .map(extract_text)
        .ok_or_else(|| ScrapeError::new("contesting cell has no name span"))?;
    let vote_text = cell.select(vote_selector).next().map(extract_text);
    let vote = parse_formatted_number::<i64>(vote_text.as_deref())?;
    Ok((name, vote))
}
