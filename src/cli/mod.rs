use crate::{nvs, types::*, Result};
use std::io::Write;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod display;

pub use display::{write_report, write_table, Format, NO_RESULTS_MSG};

pub const MISSING_SEARCH_MSG: &str =
    "Error! You must specify either a name and/or value to search for.";

#[derive(Debug, clap::Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
#[clap(about = "Search Emercoin NVS records through the public explorer")]
pub struct Cli {
    /// The type of NVS records to search.
    #[arg(long = "type", default_value = "", num_args = 0..=1, default_missing_value = "")]
    kind: String,
    /// The name to search for.
    #[arg(long, default_value = "", num_args = 0..=1, default_missing_value = "")]
    name: String,
    /// The value to search for.
    #[arg(long, default_value = "", num_args = 0..=1, default_missing_value = "")]
    value: String,
    /// The page size for results [25, 50, 100, all]
    #[arg(
        long = "page_size",
        default_value = "25",
        num_args = 0..=1,
        default_missing_value = "all"
    )]
    page_size: nvs::PageSize,
    /// Include empty result types
    #[arg(long = "include_empty")]
    include_empty: bool,
    /// Include invalid/expired results.
    #[arg(long = "include_invalid")]
    include_invalid: bool,
    /// Include verbose output
    #[arg(short, long)]
    verbose: bool,
    /// Explorer NVS endpoint the query path is appended to
    #[arg(long, default_value = EXPLORER_URL)]
    explorer_url: String,
    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT)]
    timeout: u64,
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

impl Cli {
    /// Log to stderr. `RUST_LOG` overrides the level picked by `--verbose`.
    pub fn init_tracing(&self) {
        let level = if self.verbose {
            "nvs_explorer=debug"
        } else {
            "nvs_explorer=warn"
        };
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
            )
            .init();
    }

    pub fn query(&self) -> nvs::SearchQuery {
        nvs::SearchQuery::new(self.name.as_str(), self.value.as_str())
            .kind(self.kind.as_str())
            .page_size(self.page_size)
            .ignore_empty_type(!self.include_empty)
            .valid_only(!self.include_invalid)
    }

    pub fn client_config(&self) -> nvs::ClientConfig {
        nvs::ClientConfig {
            base_url: self.explorer_url.clone(),
            timeout: Duration::from_secs(self.timeout),
            ..Default::default()
        }
    }

    pub async fn run<W: Write>(self, out: &mut W) -> Result {
        if self.name.is_empty() && self.value.is_empty() {
            writeln!(out, "{}", MISSING_SEARCH_MSG)?;
            return Ok(());
        }

        let client = nvs::Client::new(self.client_config())?;
        let outcome = client.search(&self.query()).await?;
        if let nvs::SearchOutcome::Unavailable { status } = &outcome {
            tracing::warn!("explorer answered {}, no records read", status);
        }
        write_report(out, self.format, outcome.records())
    }
}
