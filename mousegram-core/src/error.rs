use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to parse {file}: {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },
    #[error("{url} returned HTTP {status}")]
    Http { url: String, status: u16 },
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl LoadError {
    pub fn fetch(url: impl Into<String>, reason: impl Into<String>) -> Self {
        LoadError::Fetch { url: url.into(), reason: reason.into() }
    }

    /// True when the resource simply isn't there (as opposed to broken).
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::Http { status: 404, .. })
    }
}
