use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::info;

pub mod api;
pub mod args;
pub mod config;
pub mod constants;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod writer;

pub use api::{Departure, Page};
pub use config::{Config, Endpoint};
pub use error::{Error, Result};
pub use fetch::{fetch_all, Pages};
pub use filter::filter_departures;
pub use writer::write_csv;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub pages: usize,
    pub fetched: usize,
    pub matched: usize,
}

/// Fetch every page, keep the matching departures and write them out.
///
/// The output file is only touched once all pages came back, so a failed
/// fetch leaves no partial CSV behind.
pub fn run(config: &Config) -> Result<Summary> {
    let url = config.endpoint.url();
    let spinner = spinner();
    spinner.set_message(format!("fetching {url}"));

    let mut pages = Pages::new(Client::new(), &url).with_max_pages(config.max_pages);
    let mut matched = Vec::new();
    let mut fetched = 0;

    for batch in pages.by_ref() {
        let batch = match batch {
            Ok(batch) => batch,
            Err(e) => {
                spinner.finish_and_clear();
                return Err(e);
            }
        };
        fetched += batch.len();
        matched.extend(filter_departures(
            batch,
            &config.category,
            &config.start_date,
        ));
        spinner.set_message(format!("{} departures, {} matching", fetched, matched.len()));
        spinner.tick();
    }
    spinner.finish_and_clear();

    write_csv(&matched, &config.filename)?;

    let summary = Summary {
        pages: pages.fetched(),
        fetched,
        matched: matched.len(),
    };
    info!(
        pages = summary.pages,
        fetched = summary.fetched,
        matched = summary.matched,
        file = %config.filename.display(),
        "wrote filtered departures"
    );
    Ok(summary)
}

fn spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}
