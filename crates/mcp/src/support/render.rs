#![forbid(unsafe_code)]

use super::time::ts_ns_to_rfc3339;
use nb_core::Notice;
use nb_storage::NoticePage;
use serde_json::{Value, json};

/// Tool-facing view of a notice. Raw timestamps stay decimal strings, like the
/// stored form; the RFC 3339 fields are for readers.
pub(crate) fn notice_json(notice: &Notice) -> Value {
    json!({
        "id": notice.id().as_str(),
        "title": notice.title(),
        "description": notice.description(),
        "isActive": notice.is_active(),
        "createdAt": notice.created_at().to_string(),
        "createdAtRfc3339": ts_ns_to_rfc3339(notice.created_at()),
        "updatedAt": notice.updated_at().map(|ts| ts.to_string()),
        "updatedAtRfc3339": notice.updated_at().map(ts_ns_to_rfc3339),
    })
}

pub(crate) fn notices_json(notices: &[Notice]) -> Value {
    Value::Array(notices.iter().map(notice_json).collect())
}

pub(crate) fn page_json(page: &NoticePage, limit: i64, offset: i64) -> Value {
    let returned = page.items.len() as u64;
    let next_offset = u64::try_from(offset)
        .unwrap_or(0)
        .saturating_add(returned);
    let has_more = returned > 0 && next_offset < page.total;
    json!({
        "notices": notices_json(&page.items),
        "total": page.total,
        "limit": limit,
        "offset": offset,
        "hasMore": has_more,
        "nextOffset": has_more.then_some(next_offset),
    })
}
