#![forbid(unsafe_code)]

/// A trimmed, lower-cased, non-empty search needle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery(String);

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SearchQueryError {
    #[error("search query must not be empty")]
    Empty,
}

impl SearchQuery {
    pub fn parse(raw: &str) -> Result<Self, SearchQueryError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SearchQueryError::Empty);
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    pub fn needle(&self) -> &str {
        &self.0
    }
}
