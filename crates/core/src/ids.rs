#![forbid(unsafe_code)]

use crate::ValidationError;
use crate::validation::MAX_ID_CHARS;

/// Identifier of a notice. Doubles as the key in the backing map.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoticeId(String);

impl NoticeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Trims surrounding whitespace and validates what remains.
    pub fn try_new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = value.as_ref().trim();
        validate_notice_id(trimmed)?;
        Ok(Self(trimmed.to_string()))
    }
}

impl std::fmt::Display for NoticeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NoticeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub fn is_id_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-')
}

fn validate_notice_id(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyId);
    }
    let len = value.chars().count();
    if len > MAX_ID_CHARS {
        return Err(ValidationError::IdTooLong { len });
    }
    for (index, ch) in value.chars().enumerate() {
        if !is_id_char(ch) {
            return Err(ValidationError::IdInvalidChar { ch, index });
        }
    }
    Ok(())
}
