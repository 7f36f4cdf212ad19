#![forbid(unsafe_code)]

use crate::NoticeId;

pub const MAX_ID_CHARS: usize = 100;
pub const MAX_TITLE_CHARS: usize = 200;
pub const MAX_DESCRIPTION_CHARS: usize = 1000;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("id must not be empty")]
    EmptyId,
    #[error("id is too long ({len} chars, max 100)")]
    IdTooLong { len: usize },
    #[error(
        "id contains invalid character {ch:?} at index {index} (allowed: A-Z, a-z, 0-9, '_', '-')"
    )]
    IdInvalidChar { ch: char, index: usize },
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("title is too long ({len} chars, max 200)")]
    TitleTooLong { len: usize },
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("description is too long ({len} chars, max 1000)")]
    DescriptionTooLong { len: usize },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyId | Self::IdTooLong { .. } | Self::IdInvalidChar { .. } => "id",
            Self::EmptyTitle | Self::TitleTooLong { .. } => "title",
            Self::EmptyDescription | Self::DescriptionTooLong { .. } => "description",
        }
    }
}

/// Trimmed, validated input for a new notice.
///
/// Only [`validate`] produces this value, which keeps `Notice` unconstructable
/// from unchecked strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedFields {
    id: NoticeId,
    title: String,
    description: String,
}

impl ValidatedFields {
    pub fn id(&self) -> &NoticeId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub(crate) fn into_parts(self) -> (NoticeId, String, String) {
        (self.id, self.title, self.description)
    }
}

/// Checks id, title and description in that order; the first violation wins.
pub fn validate(
    id: &str,
    title: &str,
    description: &str,
) -> Result<ValidatedFields, ValidationError> {
    let id = NoticeId::try_new(id)?;
    let title = validate_title(title)?;
    let description = validate_description(description)?;
    Ok(ValidatedFields {
        id,
        title,
        description,
    })
}

pub fn validate_title(raw: &str) -> Result<String, ValidationError> {
    bounded_text(raw, MAX_TITLE_CHARS).map_err(|len| match len {
        None => ValidationError::EmptyTitle,
        Some(len) => ValidationError::TitleTooLong { len },
    })
}

pub fn validate_description(raw: &str) -> Result<String, ValidationError> {
    bounded_text(raw, MAX_DESCRIPTION_CHARS).map_err(|len| match len {
        None => ValidationError::EmptyDescription,
        Some(len) => ValidationError::DescriptionTooLong { len },
    })
}

// Err(None) = empty after trim, Err(Some(len)) = over the limit.
fn bounded_text(raw: &str, max_chars: usize) -> Result<String, Option<usize>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(None);
    }
    let len = trimmed.chars().count();
    if len > max_chars {
        return Err(Some(len));
    }
    Ok(trimmed.to_string())
}
