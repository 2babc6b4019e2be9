use serde::{Deserialize, Serialize};

pub const EXPLORER_URL: &str = "https://explorer.emercoin.com/nvs";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; rv:68.0) Gecko/20100101 Firefox/68.0";

/// The id of the `<table>` holding the search results on the explorer page
pub const RESULT_TABLE_ID: &str = "block_table";

/// The default timeout for explorer requests, in seconds
pub const DEFAULT_TIMEOUT: u64 = 30;

/// One row of the explorer's NVS result table. Fields are kept exactly as
/// the page displays them.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NvsRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub value: String,
    pub block: String,
    pub expires: String,
}
