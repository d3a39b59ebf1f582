use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// Page order is derived from the last numeric token in the url, e.g.
// ".../amazing_012.jpg" is page 12. Catalogs rely on this convention.
static PAGE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[_-](\d+)\.(jpg|jpeg|png|webp)").unwrap());

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComicPage {
    pub file_name: String,
    pub url: String,
    pub page_number: u32,
}

impl ComicPage {
    /// Builds a page from a raw url and its 0-based position in the source
    /// list. The position is the fallback for both the file name and the
    /// page number when the url carries neither.
    pub fn from_url(url: &str, position: usize) -> ComicPage {
        let file_name = url
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(|| format!("page_{}", position));

        let page_number = parse_page_number(url).unwrap_or(position as u32 + 1);

        ComicPage {
            file_name,
            url: url.to_owned(),
            page_number,
        }
    }
}

/// Extracts the page number from the last separator-digits-extension token
/// of a url. A parsed zero counts as no token at all.
pub fn parse_page_number(url: &str) -> Option<u32> {
    PAGE_NUMBER
        .captures_iter(url)
        .last()
        .and_then(|captures| captures[1].parse().ok())
        .filter(|&number| number > 0)
}
