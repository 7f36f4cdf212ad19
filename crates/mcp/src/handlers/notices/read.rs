#![forbid(unsafe_code)]

use super::unknown_arg_warnings;
use crate::handlers::definitions::DEFAULT_PAGE_LIMIT;
use crate::{
    McpServer, ai_ok_with_warnings, args_object, notice_json, notices_json, optional_i64,
    page_json, require_string, store_error,
};
use serde_json::{Value, json};

impl McpServer {
    pub(crate) fn tool_notices_get(&mut self, args: Value) -> Value {
        let args = match args_object(args) {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let id = match require_string(&args, "id") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let warnings = unknown_arg_warnings(&args, &["id"]);

        match self.store.get(&id) {
            Ok(notice) => ai_ok_with_warnings(
                "notices_get",
                json!({ "notice": notice_json(&notice) }),
                warnings,
            ),
            Err(err) => store_error(err),
        }
    }

    pub(crate) fn tool_notices_list_all(&mut self, args: Value) -> Value {
        let args = match args_object(args) {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let warnings = unknown_arg_warnings(&args, &[]);

        match self.store.list_all() {
            Ok(notices) => ai_ok_with_warnings(
                "notices_list_all",
                json!({ "notices": notices_json(&notices), "count": notices.len() }),
                warnings,
            ),
            Err(err) => store_error(err),
        }
    }

    pub(crate) fn tool_notices_list(&mut self, args: Value) -> Value {
        let args = match args_object(args) {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let limit = match optional_i64(&args, "limit") {
            Ok(v) => v.unwrap_or(DEFAULT_PAGE_LIMIT),
            Err(resp) => return resp,
        };
        let offset = match optional_i64(&args, "offset") {
            Ok(v) => v.unwrap_or(0),
            Err(resp) => return resp,
        };
        let warnings = unknown_arg_warnings(&args, &["limit", "offset"]);

        match self.store.list_page(limit, offset) {
            Ok(page) => ai_ok_with_warnings("notices_list", page_json(&page, limit, offset), warnings),
            Err(err) => store_error(err),
        }
    }

    pub(crate) fn tool_notices_search(&mut self, args: Value) -> Value {
        let args = match args_object(args) {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let query = match require_string(&args, "query") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        let warnings = unknown_arg_warnings(&args, &["query"]);

        match self.store.search(&query) {
            Ok(notices) => ai_ok_with_warnings(
                "notices_search",
                json!({
                    "query": query.trim(),
                    "notices": notices_json(&notices),
                    "count": notices.len()
                }),
                warnings,
            ),
            Err(err) => store_error(err),
        }
    }
}
