#![forbid(unsafe_code)]

use crate::McpServer;
use serde_json::Value;

macro_rules! define_notice_dispatch {
    ($($tool_name:literal => $method:ident),* $(,)?) => {
        pub(crate) fn dispatch_handler(
            server: &mut McpServer,
            name: &str,
            args: Value,
        ) -> Option<Value> {
            let resp = match name {
                $($tool_name => server.$method(args),)*
                _ => return None,
            };
            Some(resp)
        }

        #[cfg(test)]
        pub(crate) fn dispatch_tool_names() -> &'static [&'static str] {
            &[$($tool_name),*]
        }
    };
}

define_notice_dispatch! {
    "notices_create" => tool_notices_create,
    "notices_get" => tool_notices_get,
    "notices_update" => tool_notices_update,
    "notices_delete" => tool_notices_delete,
    "notices_purge" => tool_notices_purge,
    "notices_list_all" => tool_notices_list_all,
    "notices_list" => tool_notices_list,
    "notices_search" => tool_notices_search,
}
