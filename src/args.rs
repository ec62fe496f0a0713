use crate::config::Config;
use crate::error::{Error, Result};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
/// Fetch departures from a paginated API, filter them and write them as CSV
pub struct Args {
    /// Settings as key=value: protocol, hostname, port, api, category,
    /// start_date, filename, max_pages
    #[arg(value_name = "SETTING", value_parser = parse_setting)]
    pub settings: Vec<(String, String)>,

    /// Log more (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn config(&self) -> Result<Config> {
        Config::from_settings(self.settings.iter().map(|(k, v)| (k, v.clone())))
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Splits a `key=value` token. Exactly one `=` is allowed.
pub fn parse_setting(token: &str) -> Result<(String, String)> {
    let mut parts = token.split('=');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(value), None) => Ok((key.to_string(), value.to_string())),
        _ => Err(Error::Usage(format!("expected key=value, got {token:?}"))),
    }
}
