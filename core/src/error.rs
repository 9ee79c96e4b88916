pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("local storage is not available")]
    StorageUnavailable,
    #[error("storage error {0}")]
    Storage(String),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("http error {0}")]
    Http(String),
}
