use crate::types::*;
use std::time::Duration;

mod client;
mod error;
mod extract;
mod query;

pub use client::{Client, ClientConfig, SearchOutcome};
pub use error::{Error, InvalidPageSize, ParseError};
pub use extract::{extract, Columns, COLUMNS};
pub use query::{PageSize, QueryPath, SearchQuery};

pub type Result<T = ()> = std::result::Result<T, Error>;
