//! Module for querying the MarkLogic management API, `<api_url>/manage/v2`.
//!
//! All requests are GET requests, and always ask for `format=json`:
//!
//! | function | route | parameters |
//! |---|---|---|
//! | [MarkLogicApi::get_status] | `[/<kind plural>[/<name>]]` | `view=status`, optional `group-id` |
//! | [MarkLogicApi::get_requests] | `/requests` | optional `<kind>-id`, `group-id` |
//! | [MarkLogicApi::get_storage] | `/forests` | `view=storage`, optional `<kind>-id`, `group-id` |
//! | [MarkLogicApi::get_health] | | `view=health` |
//! | [MarkLogicApi::list_resources] | | `view=query` |
//!
//! Any failure of the transport or a non-success HTTP status is returned as an error,
//! there is no retry.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
