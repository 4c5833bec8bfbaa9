//! Module for the resource inventory of the cluster, read from `/manage/v2?view=query`.
//!
//! The `view=query` response groups the resources per type in `relation-group` entries:
//! ([ClusterQueryResponse])
//! - typeref: the resource type, plural (`forests`, `databases`, ...).
//! - relation: the resources of that type, each with an id, a name and a uri.
//!   A relation can carry qualifiers, for example the group a server belongs to.
//!
//! The relations are flattened into a list of [Resource]:
//! - the type is made singular with [ResourceSingulars].
//! - the uri has the `/manage/v2` prefix removed.
//! - the group is set when a qualifier name appears as `group-id=<name>` in the uri.
//!
//! The list can be narrowed with [ResourceFilter] include and exclude filters.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
