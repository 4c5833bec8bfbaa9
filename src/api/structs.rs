//! The structs
//!
use crate::resources::ResourceSingulars;

/// The path of the management API, which is added to the api url.
/// Uris in the responses start with this path as well.
pub const MANAGE_PATH: &str = "/manage/v2";

/// The query parameters of a request, in insertion order.
///
/// A key is present only once: setting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pub(crate) params: Vec<(String, String)>,
}

/// The kinds of resources that can be addressed by status, requests and storage queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ResourceKind {
    Forest,
    Database,
    Host,
    Server,
    Group,
}

/// The `view` parameter, which selects the data facet the management API returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Status,
    Storage,
    Health,
    Query,
}

/// The client for the management API.
///
/// The transport is supplied by the caller, the plural to singular resource type mapping
/// defaults to [ResourceSingulars::default].
pub struct MarkLogicApi<T> {
    pub(crate) transport: T,
    pub(crate) base_url: String,
    pub(crate) singulars: ResourceSingulars,
}
