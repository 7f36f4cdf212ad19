#![forbid(unsafe_code)]

/// Validated `limit`/`offset` pair for paginated listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    limit: usize,
    offset: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PageWindowError {
    #[error("limit must be >= 0 (got {0})")]
    NegativeLimit(i64),
    #[error("offset must be >= 0 (got {0})")]
    NegativeOffset(i64),
}

impl PageWindow {
    pub fn new(limit: i64, offset: i64) -> Result<Self, PageWindowError> {
        let limit = usize::try_from(limit).map_err(|_| PageWindowError::NegativeLimit(limit))?;
        let offset =
            usize::try_from(offset).map_err(|_| PageWindowError::NegativeOffset(offset))?;
        Ok(Self { limit, offset })
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}
