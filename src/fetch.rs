use crate::api::{Departure, Page};
use crate::error::{Error, Result};
use reqwest::blocking::Client;
use serde_json::error::Category;
use tracing::{debug, warn};

/// Walks the `next` links of a departures listing, one batch per page.
///
/// Single pass: once the listing runs out, or a page fails, every further
/// call to `next` returns `None`.
pub struct Pages {
    client: Client,
    next_url: Option<String>,
    fetched: usize,
    max_pages: Option<usize>,
}

impl Pages {
    pub fn new(client: Client, start_url: impl Into<String>) -> Self {
        Self {
            client,
            next_url: Some(start_url.into()),
            fetched: 0,
            max_pages: None,
        }
    }

    pub fn with_max_pages(mut self, max_pages: Option<usize>) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn is_exhausted(&self) -> bool {
        self.next_url.is_none()
    }

    /// Pages fetched so far.
    pub fn fetched(&self) -> usize {
        self.fetched
    }

    fn get_page(&self, url: &str) -> Result<Page> {
        debug!(url, "fetching page");
        let body = self
            .client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|source| Error::Transport {
                url: url.to_string(),
                source,
            })?;

        serde_json::from_str(&body).map_err(|source| match source.classify() {
            Category::Data => Error::MalformedPage {
                url: url.to_string(),
                source,
            },
            _ => Error::NotJson {
                url: url.to_string(),
                source,
            },
        })
    }
}

impl Iterator for Pages {
    type Item = Result<Vec<Departure>>;

    fn next(&mut self) -> Option<Self::Item> {
        let url = self.next_url.take()?;

        if let Some(limit) = self.max_pages {
            if self.fetched >= limit {
                warn!(limit, url = %url, "page limit reached with pages left");
                return Some(Err(Error::PageLimit(limit)));
            }
        }

        match self.get_page(&url) {
            Ok(page) => {
                self.fetched += 1;
                self.next_url = page.next_url().map(str::to_string);
                debug!(
                    results = page.results.len(),
                    next = ?self.next_url,
                    "page received"
                );
                Some(Ok(page.results))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

impl std::iter::FusedIterator for Pages {}

/// Every departure behind `url`, in page order.
pub fn fetch_all(client: Client, url: &str) -> Result<Vec<Departure>> {
    let mut departures = Vec::new();
    for batch in Pages::new(client, url) {
        departures.extend(batch?);
    }
    Ok(departures)
}
