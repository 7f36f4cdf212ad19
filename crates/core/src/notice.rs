#![forbid(unsafe_code)]

use crate::{
    NoticeId, SearchQuery, ValidatedFields, ValidationError, validate, validate_description,
    validate_title,
};

/// A stored announcement.
///
/// Fields are private: a `Notice` is only ever built from [`ValidatedFields`]
/// or re-validated parts, and every transition returns a new value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    id: NoticeId,
    title: String,
    description: String,
    created_at: u64,
    updated_at: Option<u64>,
    is_active: bool,
}

/// Fields to change on update. `None` keeps the current value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl NoticePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.is_active.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NoticeRebuildError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("updatedAt ({updated_at}) precedes createdAt ({created_at})")]
    UpdatedBeforeCreated { created_at: u64, updated_at: u64 },
}

impl Notice {
    pub fn create(fields: ValidatedFields, is_active: bool, created_at: u64) -> Self {
        let (id, title, description) = fields.into_parts();
        Self {
            id,
            title,
            description,
            created_at,
            updated_at: None,
            is_active,
        }
    }

    /// Rebuilds a notice from persisted parts, re-checking every invariant.
    pub fn from_parts(
        id: &str,
        title: &str,
        description: &str,
        created_at: u64,
        updated_at: Option<u64>,
        is_active: bool,
    ) -> Result<Self, NoticeRebuildError> {
        let fields = validate(id, title, description)?;
        if let Some(updated_at) = updated_at
            && updated_at < created_at
        {
            return Err(NoticeRebuildError::UpdatedBeforeCreated {
                created_at,
                updated_at,
            });
        }
        let mut notice = Self::create(fields, is_active, created_at);
        notice.updated_at = updated_at;
        Ok(notice)
    }

    pub fn id(&self) -> &NoticeId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created_at(&self) -> u64 {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<u64> {
        self.updated_at
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Merges `patch` into a copy of this notice and stamps `updated_at`.
    ///
    /// Supplied text fields are trimmed and validated; `self` is left untouched
    /// when validation fails.
    pub fn apply(&self, patch: &NoticePatch, now: u64) -> Result<Self, ValidationError> {
        let title = match patch.title.as_deref() {
            Some(raw) => validate_title(raw)?,
            None => self.title.clone(),
        };
        let description = match patch.description.as_deref() {
            Some(raw) => validate_description(raw)?,
            None => self.description.clone(),
        };
        Ok(Self {
            id: self.id.clone(),
            title,
            description,
            created_at: self.created_at,
            updated_at: Some(self.next_updated_at(now)),
            is_active: patch.is_active.unwrap_or(self.is_active),
        })
    }

    /// Soft delete: the record stays, flagged inactive.
    pub fn deactivate(&self, now: u64) -> Self {
        Self {
            is_active: false,
            updated_at: Some(self.next_updated_at(now)),
            ..self.clone()
        }
    }

    pub fn matches(&self, query: &SearchQuery) -> bool {
        let needle = query.needle();
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }

    // created_at <= updated_at must hold even if the clock steps backwards.
    fn next_updated_at(&self, now: u64) -> u64 {
        now.max(self.created_at)
            .max(self.updated_at.unwrap_or(self.created_at))
    }
}
