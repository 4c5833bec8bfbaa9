//! The structs
//!
use std::collections::HashMap;
use regex::Regex;

/// A single resource of the cluster.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub name: String,
    /// The uri relative to `/manage/v2`.
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// The mapping of plural resource type names, as found in `typeref`, to singular names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSingulars {
    pub(crate) singulars: HashMap<String, String>,
}

/// A filter on the resource list.
///
/// A filter matches a resource when:
/// - `resource_type` is not set or equal to the resource type, and
/// - `pattern` matches the resource name, and
/// - `group` is not set or equal to the resource group.
#[derive(Debug, Clone)]
pub struct ResourceFilter {
    pub resource_type: Option<String>,
    pub pattern: Regex,
    pub group: Option<String>,
    pub include: bool,
}

/// The root struct for deserializing `/manage/v2?view=query`.
///
/// Only the fields used are listed, everything else in the response is ignored:
/// ```json
/// {
///   "cluster-query": {
///     "relations": {
///       "relation-group": [
///         {
///           "typeref": "forests",
///           "relation-count": { "units": "quantity", "value": 1 },
///           "relation": [
///             {
///               "uriref": "/manage/v2/forests/Security",
///               "idref": "4259429487029269237",
///               "nameref": "Security"
///             }
///           ]
///         }
///       ]
///     }
///   }
/// }
/// ```
#[derive(Serialize, Deserialize, Debug)]
pub struct ClusterQueryResponse {
    #[serde(rename = "cluster-query")]
    pub cluster_query: ClusterQuery,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ClusterQuery {
    pub relations: Relations,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Relations {
    #[serde(rename = "relation-group")]
    pub relation_group: Vec<RelationGroup>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RelationGroup {
    pub typeref: String,
    pub relation: Vec<Relation>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Relation {
    pub idref: String,
    pub nameref: String,
    pub uriref: String,
    pub qualifiers: Option<Qualifiers>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct Qualifiers {
    #[serde(default)]
    pub qualifier: Vec<Qualifier>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Qualifier {
    pub nameref: String,
    pub idref: Option<String>,
    pub typeref: Option<String>,
    pub uriref: Option<String>,
}
