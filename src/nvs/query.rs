use super::*;
use std::fmt;
use std::str::FromStr;

/// Page sizes the explorer understands. Any other number is treated as `All`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    TwentyFive,
    Fifty,
    Hundred,
    #[default]
    All,
}

impl PageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageSize::TwentyFive => "25",
            PageSize::Fifty => "50",
            PageSize::Hundred => "100",
            PageSize::All => "all",
        }
    }
}

impl From<u32> for PageSize {
    fn from(size: u32) -> Self {
        match size {
            25 => PageSize::TwentyFive,
            50 => PageSize::Fifty,
            100 => PageSize::Hundred,
            _ => PageSize::All,
        }
    }
}

impl FromStr for PageSize {
    type Err = InvalidPageSize;

    /// Accepts `all` or any integer; integers outside 25/50/100 become `All`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s == "all" {
            return Ok(PageSize::All);
        }
        match s.parse::<i64>() {
            Ok(size) => Ok(u32::try_from(size).map_or(PageSize::All, PageSize::from)),
            Err(_) => Err(InvalidPageSize(s.to_string())),
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search parameters for one explorer lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub kind: String,
    pub name: String,
    pub value: String,
    pub page_size: PageSize,
    pub ignore_empty_type: bool,
    pub valid_only: bool,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            kind: String::new(),
            name: String::new(),
            value: String::new(),
            page_size: PageSize::All,
            ignore_empty_type: true,
            valid_only: true,
        }
    }
}

impl SearchQuery {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn page_size(mut self, page_size: impl Into<PageSize>) -> Self {
        self.page_size = page_size.into();
        self
    }

    pub fn ignore_empty_type(mut self, ignore_empty_type: bool) -> Self {
        self.ignore_empty_type = ignore_empty_type;
        self
    }

    pub fn valid_only(mut self, valid_only: bool) -> Self {
        self.valid_only = valid_only;
        self
    }

    /// Validate the query and lay it out as the explorer's positional path.
    pub fn build(&self) -> Result<QueryPath> {
        if self.name.is_empty() && self.value.is_empty() {
            return Err(Error::InvalidSearch);
        }

        let path = QueryPath {
            segments: [
                self.kind.clone(),
                self.name.clone(),
                self.value.clone(),
                self.page_size.to_string(),
                flag(self.ignore_empty_type).to_string(),
                flag(self.valid_only).to_string(),
            ],
        };

        tracing::debug!("type: {}", self.kind);
        tracing::debug!("name: {}", self.name);
        tracing::debug!("value: {}", self.value);
        tracing::debug!("page size: {}", self.page_size);
        tracing::debug!("ignore empty type: {}", flag(self.ignore_empty_type));
        tracing::debug!("valid only: {}", flag(self.valid_only));
        tracing::debug!("query path: {}", path);
        Ok(path)
    }
}

fn flag(on: bool) -> u8 {
    u8::from(on)
}

/// `/{type}/{name}/{value}/{page size}/{ignore empty type}/{valid only}`.
/// Segment order is what the explorer routes on; empty fields stay as
/// empty segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPath {
    segments: [String; 6],
}

impl QueryPath {
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }
}

impl fmt::Display for QueryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}
