#![forbid(unsafe_code)]

use nb_core::{Notice, NoticePatch};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateNoticeRequest {
    /// `None` lets the store generate an id.
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    /// Defaults to `true`.
    pub is_active: Option<bool>,
}

impl CreateNoticeRequest {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            title: title.into(),
            description: description.into(),
            is_active: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateNoticeRequest {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateNoticeRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
            is_active: None,
        }
    }

    /// The fields to merge; empty when the update only refreshes `updatedAt`.
    pub fn patch(&self) -> NoticePatch {
        NoticePatch {
            title: self.title.clone(),
            description: self.description.clone(),
            is_active: self.is_active,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticePage {
    pub items: Vec<Notice>,
    /// Count of all stored notices, independent of the window.
    pub total: u64,
}
