use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("nvs error: {0}")]
    Nvs(#[from] crate::nvs::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
