//! Cursor pagination for list endpoints
//!
//! Sentry paginates through the `Link` response header rather than the body:
//!
//! ```text
//! <https://sentry.io/api/0/organizations/?&cursor=100:-1:1>; rel="previous"; results="false"; cursor="100:-1:1",
//! <https://sentry.io/api/0/organizations/?&cursor=100:1:0>; rel="next"; results="true"; cursor="100:1:0"
//! ```
//!
//! A `next` entry is always present; `results="false"` marks the end.

use serde::Serialize;

/// Query parameter carrying the page cursor.
pub const CURSOR_PARAM: &str = "cursor";

/// One side (`previous` or `next`) of a `Link` header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Absolute URL of the page
    pub url: String,
    /// Whether the page holds any results
    pub results: bool,
    /// Opaque cursor to pass back as `?cursor=`
    pub cursor: String,
}

/// Pagination cursors parsed from a `Link` header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Link {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<Page>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<Page>,
}

impl Link {
    /// Parse a `Link` header value.
    ///
    /// Entries that are malformed or carry an unknown `rel` are skipped, so
    /// a garbled header degrades to "no further pages".
    pub fn parse(header: &str) -> Self {
        let mut link = Link::default();

        for entry in split_entries(header) {
            let Some((rel, page)) = parse_entry(entry) else {
                continue;
            };
            match rel.as_str() {
                "previous" => link.previous = Some(page),
                "next" => link.next = Some(page),
                _ => {}
            }
        }

        link
    }

    /// Check if the server reported another page with results.
    pub fn has_next_page(&self) -> bool {
        self.next.as_ref().is_some_and(|p| p.results)
    }

    /// Cursor for the next page, only when that page has results.
    pub fn next_cursor(&self) -> Option<&str> {
        self.next
            .as_ref()
            .filter(|p| p.results && !p.cursor.is_empty())
            .map(|p| p.cursor.as_str())
    }
}

/// One page of a list endpoint together with its cursors.
#[derive(Debug, Clone, Serialize)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub link: Link,
}

impl<T> Paged<T> {
    pub fn new(items: Vec<T>, link: Link) -> Self {
        Self { items, link }
    }

    /// Check if there are more pages to fetch.
    pub fn has_next_page(&self) -> bool {
        self.link.has_next_page()
    }
}

/// Split on the commas that separate `<url>; ...` entries.
///
/// A comma only counts as a separator when the next entry opens with `<`.
fn split_entries(header: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut start = 0;

    for (idx, _) in header.match_indices(',') {
        if header[idx + 1..].trim_start().starts_with('<') {
            entries.push(&header[start..idx]);
            start = idx + 1;
        }
    }
    entries.push(&header[start..]);

    entries
}

fn parse_entry(entry: &str) -> Option<(String, Page)> {
    let mut parts = entry.split(';');
    let url = parts
        .next()?
        .trim()
        .strip_prefix('<')?
        .strip_suffix('>')?
        .to_string();

    let mut rel = None;
    let mut page = Page {
        url,
        ..Page::default()
    };

    for param in parts {
        let Some((key, value)) = param.trim().split_once('=') else {
            continue;
        };
        let value = value.trim().trim_matches('"');
        match key.trim() {
            "rel" => rel = Some(value.to_string()),
            "results" => page.results = value.eq_ignore_ascii_case("true"),
            "cursor" => page.cursor = value.to_string(),
            _ => {}
        }
    }

    Some((rel?, page))
}
