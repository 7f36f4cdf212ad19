#![forbid(unsafe_code)]

use super::unknown_arg_warnings;
use crate::{
    McpServer, ai_ok_with_warnings, args_object, notice_json, optional_bool, optional_string,
    require_string, store_error,
};
use nb_storage::{CreateNoticeRequest, UpdateNoticeRequest};
use serde_json::{Value, json};

impl McpServer {
    pub(crate) fn tool_notices_create(&mut self, args: Value) -> Value {
        let args = match args_object(args) {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let id = match optional_string(&args, "id") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let title = match require_string(&args, "title") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let description = match require_string(&args, "description") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let is_active = match optional_bool(&args, "isActive") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let warnings = unknown_arg_warnings(&args, &["id", "title", "description", "isActive"]);

        let request = CreateNoticeRequest {
            id,
            title,
            description,
            is_active,
        };
        match self.store.create(request) {
            Ok(notice) => ai_ok_with_warnings(
                "notices_create",
                json!({ "notice": notice_json(&notice) }),
                warnings,
            ),
            Err(err) => store_error(err),
        }
    }

    pub(crate) fn tool_notices_update(&mut self, args: Value) -> Value {
        let args = match args_object(args) {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let id = match require_string(&args, "id") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let title = match optional_string(&args, "title") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let description = match optional_string(&args, "description") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let is_active = match optional_bool(&args, "isActive") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let request = UpdateNoticeRequest {
            id,
            title,
            description,
            is_active,
        };
        let mut warnings = unknown_arg_warnings(&args, &["id", "title", "description", "isActive"]);
        if request.patch().is_empty() {
            warnings.push(crate::warning(
                "NO_CHANGES",
                "no fields given; only updatedAt was refreshed",
            ));
        }
        match self.store.update(request) {
            Ok(notice) => ai_ok_with_warnings(
                "notices_update",
                json!({ "notice": notice_json(&notice) }),
                warnings,
            ),
            Err(err) => store_error(err),
        }
    }

    pub(crate) fn tool_notices_delete(&mut self, args: Value) -> Value {
        let args = match args_object(args) {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let id = match require_string(&args, "id") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let warnings = unknown_arg_warnings(&args, &["id"]);

        match self.store.delete(&id) {
            Ok(notice) => ai_ok_with_warnings(
                "notices_delete",
                json!({ "deleted": true, "notice": notice_json(&notice) }),
                warnings,
            ),
            Err(err) => store_error(err),
        }
    }

    pub(crate) fn tool_notices_purge(&mut self, args: Value) -> Value {
        let args = match args_object(args) {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let id = match require_string(&args, "id") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let warnings = unknown_arg_warnings(&args, &["id"]);

        match self.store.purge(&id) {
            Ok(()) => ai_ok_with_warnings(
                "notices_purge",
                json!({ "id": id.trim(), "purged": true }),
                warnings,
            ),
            Err(err) => store_error(err),
        }
    }
}
