use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set in environment")]
    MissingVar(&'static str),
    #[error("Invalid value for {name}: {value}")]
    InvalidVar { name: &'static str, value: String },
}

/// A scraped label that cannot be turned into a player record.
#[derive(Debug, Error, PartialEq)]
pub enum LabelError {
    #[error("Invalid value {value:?} for {name}")]
    InvalidValue { name: String, value: String },
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Insert rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
