use serde::{Deserialize, Serialize};

/// One page of the departures listing.
#[derive(Debug, Deserialize)]
pub struct Page {
    /// Required, but may be `null`.
    #[serde(deserialize_with = "Option::deserialize")]
    pub next: Option<String>,
    pub results: Vec<Departure>,
}

impl Page {
    /// URL of the following page, if any. An empty string ends the listing too.
    pub fn next_url(&self) -> Option<&str> {
        self.next.as_deref().filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Departure {
    pub name: String,
    pub start_date: String,
    pub finish_date: String,
    pub category: String,
}
