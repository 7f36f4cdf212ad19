#![forbid(unsafe_code)]

//! Byte encoding of a [`Notice`] for the map's value slot.
//!
//! The payload is a JSON object with camelCase keys. Timestamps are written as
//! decimal strings so they survive JSON tooling that parses numbers as doubles,
//! and an absent `updatedAt` is an explicit `null`.

use nb_core::{
    MAX_DESCRIPTION_CHARS, MAX_ID_CHARS, MAX_TITLE_CHARS, Notice, NoticeRebuildError,
};
use serde::Deserialize;
use serde_json::json;

/// Decimal digits of `u64::MAX`.
pub const MAX_TIMESTAMP_DIGITS: usize = 20;

// Worst case for one character inside a JSON string: `\u001f`.
const MAX_ESCAPED_CHAR_BYTES: usize = 6;

const EMPTY_ENVELOPE: &str =
    r#"{"createdAt":"","description":"","id":"","isActive":false,"title":"","updatedAt":""}"#;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("invalid record: {0}")]
    InvalidRecord(#[from] NoticeRebuildError),
    /// The payload names a different notice than the key it is stored under.
    #[error("payload id {id:?} does not match its key {key:?}")]
    IdMismatch { key: String, id: String },
}

/// Upper bound on `encode(n).len()` for any valid notice.
pub const fn max_encoded_len() -> usize {
    // Ids are restricted to ASCII that JSON never escapes.
    MAX_ID_CHARS
        + MAX_ESCAPED_CHAR_BYTES * (MAX_TITLE_CHARS + MAX_DESCRIPTION_CHARS)
        + 2 * MAX_TIMESTAMP_DIGITS
        + EMPTY_ENVELOPE.len()
}

pub fn encode(notice: &Notice) -> Vec<u8> {
    json!({
        "id": notice.id().as_str(),
        "title": notice.title(),
        "description": notice.description(),
        "createdAt": notice.created_at().to_string(),
        "updatedAt": notice.updated_at().map(|ts| ts.to_string()),
        "isActive": notice.is_active(),
    })
    .to_string()
    .into_bytes()
}

pub fn decode(bytes: &[u8]) -> Result<Notice, DecodeError> {
    let wire: WireNotice = serde_json::from_slice(bytes)
        .map_err(|err| DecodeError::MalformedPayload(err.to_string()))?;

    let id = wire.id.ok_or(DecodeError::MissingField("id"))?;
    let title = wire.title.ok_or(DecodeError::MissingField("title"))?;
    let description = wire
        .description
        .ok_or(DecodeError::MissingField("description"))?;
    let created_at = wire
        .created_at
        .ok_or(DecodeError::MissingField("createdAt"))?
        .into_u64("createdAt")?;
    let updated_at = wire
        .updated_at
        .map(|ts| ts.into_u64("updatedAt"))
        .transpose()?;

    Ok(Notice::from_parts(
        &id,
        &title,
        &description,
        created_at,
        updated_at,
        wire.is_active.unwrap_or(true),
    )?)
}

// Every field is optional here so that absence is reported as `MissingField`
// rather than a generic parse error. Unknown keys are ignored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireNotice {
    id: Option<String>,
    title: Option<String>,
    description: Option<String>,
    created_at: Option<WireTimestamp>,
    updated_at: Option<WireTimestamp>,
    is_active: Option<bool>,
}

// Older payloads stored timestamps as plain JSON integers.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireTimestamp {
    Text(String),
    Number(u64),
}

impl WireTimestamp {
    fn into_u64(self, field: &'static str) -> Result<u64, DecodeError> {
        match self {
            Self::Number(value) => Ok(value),
            Self::Text(text) => {
                if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(DecodeError::MalformedPayload(format!(
                        "{field} is not a decimal timestamp: {text:?}"
                    )));
                }
                text.parse::<u64>().map_err(|_| {
                    DecodeError::MalformedPayload(format!("{field} overflows u64: {text:?}"))
                })
            }
        }
    }
}
