#![forbid(unsafe_code)]

use crate::codec::DecodeError;
use crate::kv::MapError;
use nb_core::{PageWindowError, SearchQueryError, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("notice not found: {id}")]
    NotFound { id: String },
    #[error("notice already exists: {id}")]
    AlreadyExists { id: String },
    #[error("no free notice id after {attempts} attempts")]
    IdGeneration { attempts: usize },
    #[error("stored notice {key:?} is corrupt: {source}")]
    Decode {
        key: String,
        #[source]
        source: DecodeError,
    },
    #[error(transparent)]
    Map(#[from] MapError),
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::InvalidInput(value.to_string())
    }
}

impl From<PageWindowError> for StoreError {
    fn from(value: PageWindowError) -> Self {
        Self::InvalidInput(value.to_string())
    }
}

impl From<SearchQueryError> for StoreError {
    fn from(value: SearchQueryError) -> Self {
        Self::InvalidInput(value.to_string())
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Map(MapError::Sql(value))
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Map(MapError::Io(value))
    }
}
