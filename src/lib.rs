pub mod cli;
pub mod error;
pub mod nvs;
pub mod types;
pub mod utils;

pub use error::Error;
pub use types::*;
pub use utils::*;
pub type Result<T = ()> = std::result::Result<T, Error>;
