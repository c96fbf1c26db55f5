/// Raised when a results page does not have the structure we expect, e.g. a
/// summary table or name span that should always be present is missing.
#[derive(Debug)]
pub struct ScrapeError {
    details: String,
}

impl ScrapeError {
    pub fn new(details: impl Into<String>) -> Self {
        Self {
            details: details.into(),
        }
    }
}

impl std::fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "ScrapeError: {}", self.details)
    }
}

impl std::error::Error for ScrapeError {}
