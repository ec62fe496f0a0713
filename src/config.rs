use crate::constants::{
    DEFAULT_API, DEFAULT_CATEGORY, DEFAULT_FILENAME, DEFAULT_HOSTNAME, DEFAULT_PORT,
    DEFAULT_PROTOCOL, DEFAULT_START_DATE,
};
use crate::error::{Error, Result};
use std::path::PathBuf;

/// Where the departures API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub protocol: String,
    pub hostname: String,
    pub port: String,
    pub api: String,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            protocol: DEFAULT_PROTOCOL.to_string(),
            hostname: DEFAULT_HOSTNAME.to_string(),
            port: DEFAULT_PORT.to_string(),
            api: DEFAULT_API.to_string(),
        }
    }
}

impl Endpoint {
    pub fn url(&self) -> String {
        format!(
            "{}://{}:{}/{}",
            self.protocol, self.hostname, self.port, self.api
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub endpoint: Endpoint,
    pub category: String,
    /// Exclusive lower bound on `start_date`.
    pub start_date: String,
    pub filename: PathBuf,
    /// Safety cap on followed pages. `None` follows `next` until it runs out.
    pub max_pages: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: Endpoint::default(),
            category: DEFAULT_CATEGORY.to_string(),
            start_date: DEFAULT_START_DATE.to_string(),
            filename: PathBuf::from(DEFAULT_FILENAME),
            max_pages: None,
        }
    }
}

impl Config {
    /// Defaults overridden by `key=value` settings, later keys winning.
    pub fn from_settings<I, K, V>(settings: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut config = Self::default();
        for (key, value) in settings {
            config.set(key.as_ref(), value.into())?;
        }
        Ok(config)
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        match key {
            "protocol" => self.endpoint.protocol = value,
            "hostname" => self.endpoint.hostname = value,
            "port" => self.endpoint.port = value,
            "api" => self.endpoint.api = value,
            "category" => self.category = value,
            "start_date" => self.start_date = value,
            "filename" => self.filename = PathBuf::from(value),
            "max_pages" => {
                let pages = value
                    .parse::<usize>()
                    .ok()
                    .filter(|pages| *pages > 0)
                    .ok_or_else(|| {
                        Error::Usage(format!("max_pages must be a positive integer, got {value:?}"))
                    })?;
                self.max_pages = Some(pages);
            }
            other => return Err(Error::Usage(format!("unknown setting {other:?}"))),
        }
        Ok(())
    }
}
