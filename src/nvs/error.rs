use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("either name or value must be set")]
    InvalidSearch,
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("invalid explorer url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("search field {segment:?} cannot be sent as a path segment")]
    DotSegment { segment: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid page size {0:?}, expected a number or \"all\"")]
pub struct InvalidPageSize(pub String);

/// The explorer page no longer has the shape the extractor expects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("result table not found (id \"{table_id}\")")]
    TableNotFound { table_id: String },
    #[error("row {row} has {cells} cells, expected at least {expected}")]
    RowTooShort {
        row: usize,
        cells: usize,
        expected: usize,
    },
}
