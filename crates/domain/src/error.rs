/// Shared error type used across all literary works crates.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Literary Work {0} not found")]
    WorkNotFound(i64),
}

pub type Result<T> = std::result::Result<T, Error>;
