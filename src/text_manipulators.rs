use std::str::FromStr;

use anyhow::Context;
use scraper::ElementRef;

pub fn extract_text(node: ElementRef) -> String {
    node.text().collect::<String>()
}

/// Parses a human-formatted number like "12,345" or "98.7%", stripping
/// thousands separators and percent signs first. A missing or empty value is
/// not an error and maps to `None`; only malformed non-empty text fails.
pub fn parse_formatted_number<T>(raw: Option<&str>) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let Some(raw) = raw else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let stripped = trimmed.replace(',', "").replace('%', "");
    let parsed = stripped
        .parse::<T>()
        .with_context(|| format!("could not parse a number out of {raw:?}"))?;
    Ok(Some(parsed))
}
