use std::process::ExitCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Wrong argument: {0}")]
    Usage(String),
    #[error("Request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Response from {url} is not JSON")]
    NotJson {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Malformed page from {url}")]
    MalformedPage {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Stopped after {0} pages, the API kept returning a next link")]
    PageLimit(usize),
    #[error("Could not write CSV: {0}")]
    Write(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub const USAGE_STATUS: u8 = 1;
    pub const TRANSPORT_STATUS: u8 = 2;

    /// Anything that went wrong talking to the API, including bodies that aren't JSON.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport { .. } | Error::NotJson { .. })
    }

    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::Usage(_) => ExitCode::from(Self::USAGE_STATUS),
            e if e.is_transport() => ExitCode::from(Self::TRANSPORT_STATUS),
            _ => ExitCode::FAILURE,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    pub fn test_page_limit_is_not_transport() {
        assert!(!Error::PageLimit(3).is_transport());
        assert!(!Error::Usage("x".to_string()).is_transport());
    }

    #[test]
    pub fn test_not_json_is_transport() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = Error::NotJson {
            url: "http://127.0.0.1:8000/departures".to_string(),
            source,
        };
        assert!(err.is_transport());
    }

    #[test]
    pub fn test_report_prints_source_once() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let cause = source.to_string();
        let err = Error::NotJson {
            url: "http://127.0.0.1:8000/departures".to_string(),
            source,
        };

        assert!(!err.to_string().contains(&cause));
        let report = format!("{:#}", anyhow::Error::new(err).context("departures-csv failed"));
        assert_eq!(1, report.matches(&cause).count(), "{report}");
    }
}
