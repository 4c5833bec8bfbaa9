//! The impls and functions
//!
use std::collections::HashMap;
use log::*;
use anyhow::{Context, Result};
use regex::Regex;
use serde_json::Value;
use crate::api::{MarkLogicApi, MANAGE_PATH};
use crate::resources::{ClusterQueryResponse, Relation, Resource, ResourceFilter, ResourceSingulars};
use crate::transport::HttpTransport;
use crate::utility;
use crate::Opts;

impl Default for ResourceSingulars {
    fn default() -> Self {
        ResourceSingulars::from_pairs(&[
            ("forests", "forest"),
            ("databases", "database"),
            ("hosts", "host"),
            ("servers", "server"),
            ("groups", "group"),
        ])
    }
}

impl ResourceSingulars {
    /// An empty mapping: every type keeps its plural name.
    pub fn new() -> Self {
        ResourceSingulars { singulars: HashMap::new() }
    }
    pub fn from_pairs(
        pairs: &[(&str, &str)],
    ) -> Self
    {
        ResourceSingulars {
            singulars: pairs.iter().map(|(plural, singular)| (plural.to_string(), singular.to_string())).collect(),
        }
    }
    /// The singular for `plural`, or `plural` itself when it is not in the mapping.
    pub fn singular<'a>(
        &'a self,
        plural: &'a str,
    ) -> &'a str
    {
        self.singulars.get(plural).map(|s| s.as_str()).unwrap_or(plural)
    }
}

impl ClusterQueryResponse {
    pub fn from_value(
        data: Value,
    ) -> Result<Self>
    {
        serde_json::from_value(data)
            .with_context(|| "Error parsing cluster-query relations from view=query response")
    }
    /// Flatten the relation groups into resources, in response order.
    pub fn resources(
        &self,
        singulars: &ResourceSingulars,
    ) -> Vec<Resource>
    {
        let mut resources = Vec::new();
        for group in &self.cluster_query.relations.relation_group {
            let resource_type = singulars.singular(&group.typeref);
            for relation in &group.relation {
                resources.push(Resource {
                    id: relation.idref.clone(),
                    resource_type: resource_type.to_string(),
                    name: relation.nameref.clone(),
                    uri: relation.uriref.strip_prefix(MANAGE_PATH).unwrap_or(&relation.uriref).to_string(),
                    group: relation.group().map(|g| g.to_string()),
                });
            }
        }
        resources
    }
}

impl Relation {
    /// The first qualifier whose name is in the uri as `group-id=<name>`.
    pub fn group(&self) -> Option<&str> {
        self.qualifiers
            .as_ref()?
            .qualifier
            .iter()
            .find(|q| self.uriref.contains(&format!("group-id={}", q.nameref)))
            .map(|q| q.nameref.as_str())
    }
}

impl ResourceFilter {
    pub fn include(
        resource_type: Option<&str>,
        pattern: Regex,
        group: Option<&str>,
    ) -> Self
    {
        ResourceFilter {
            resource_type: resource_type.map(|t| t.to_string()),
            pattern,
            group: group.map(|g| g.to_string()),
            include: true,
        }
    }
    pub fn exclude(
        resource_type: Option<&str>,
        pattern: Regex,
        group: Option<&str>,
    ) -> Self
    {
        ResourceFilter {
            include: false,
            ..ResourceFilter::include(resource_type, pattern, group)
        }
    }
    pub fn is_match(
        &self,
        resource: &Resource,
    ) -> bool
    {
        self.resource_type.as_ref().map_or(true, |t| *t == resource.resource_type)
            && self.pattern.is_match(&resource.name)
            && self.group.as_ref().map_or(true, |g| Some(g) == resource.group.as_ref())
    }
}

/// Keep the resources that match an include filter (any resource when there are no include
/// filters), and that match none of the exclude filters.
pub fn apply_filters(
    resources: Vec<Resource>,
    filters: &[ResourceFilter],
) -> Vec<Resource>
{
    let has_include = filters.iter().any(|f| f.include);
    resources
        .into_iter()
        .filter(|r| !has_include || filters.iter().any(|f| f.include && f.is_match(r)))
        .filter(|r| !filters.iter().any(|f| !f.include && f.is_match(r)))
        .collect()
}

/// The resources of the cluster, narrowed by `--resource`, `--resource-match` and `--group`.
/// The resource kind is made singular with the mapping the api was built with.
pub fn selected_resources<T: HttpTransport>(
    api: &MarkLogicApi<T>,
    options: &Opts,
) -> Result<Vec<Resource>>
{
    let filter = ResourceFilter::include(
        options.resource.map(|r| api.singulars.singular(r.plural())),
        utility::set_regex(&options.resource_match)?,
        options.group.as_deref(),
    );
    let resources = apply_filters(api.list_resources()?, &[filter]);
    debug!("resources after filtering: {}", resources.len());
    Ok(resources)
}

pub fn print_resources<T: HttpTransport>(
    api: &MarkLogicApi<T>,
    options: &Opts,
) -> Result<()>
{
    let resources = selected_resources(api, options)?;

    println!("{:10} {:30} {:15} {:22} uri", "type", "name", "group", "id");
    for resource in &resources {
        println!("{:10} {:30} {:15} {:22} {}",
                 resource.resource_type,
                 resource.name,
                 resource.group.as_deref().unwrap_or("-"),
                 resource.id,
                 resource.uri,
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ResourceKind;
    use crate::transport::RecordingTransport;

    fn resources_from(json: &str) -> Vec<Resource> {
        let data: Value = serde_json::from_str(json).unwrap();
        ClusterQueryResponse::from_value(data).unwrap().resources(&ResourceSingulars::default())
    }

    fn resource(resource_type: &str, name: &str, group: Option<&str>) -> Resource {
        Resource {
            id: format!("{}-id", name),
            resource_type: resource_type.to_string(),
            name: name.to_string(),
            uri: format!("/{}s/{}", resource_type, name),
            group: group.map(|g| g.to_string()),
        }
    }

    #[test]
    fn unit_parse_single_forest() {
        let json = r#"
{
  "cluster-query": {
    "relations": {
      "relation-group": [
        {
          "typeref": "forests",
          "relation": [
            { "idref": "f1", "nameref": "Forest1", "uriref": "/manage/v2/forests/f1" }
          ]
        }
      ]
    }
  }
}
        "#;
        let result = resources_from(json);
        assert_eq!(result, vec![Resource {
            id: "f1".to_string(),
            resource_type: "forest".to_string(),
            name: "Forest1".to_string(),
            uri: "/forests/f1".to_string(),
            group: None,
        }]);
        let serialized = serde_json::to_value(&result[0]).unwrap();
        assert_eq!(serialized["type"], "forest");
        assert!(serialized.get("group").is_none());
    }

    #[test]
    fn unit_parse_server_with_group_qualifier() {
        let json = r#"
{
  "cluster-query": {
    "relations": {
      "relation-group": [
        {
          "typeref": "servers",
          "relation-count": { "units": "quantity", "value": 1 },
          "relation": [
            {
              "uriref": "/manage/v2/servers/Admin?group-id=Default",
              "idref": "17677048367279458211",
              "nameref": "Admin",
              "qualifiers": {
                "qualifier": [
                  {
                    "uriref": "/manage/v2/groups/Default",
                    "idref": "16441155424548391986",
                    "typeref": "groups",
                    "nameref": "Default"
                  }
                ]
              }
            }
          ]
        }
      ]
    }
  }
}
        "#;
        let result = resources_from(json);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].resource_type, "server");
        assert_eq!(result[0].uri, "/servers/Admin?group-id=Default");
        assert_eq!(result[0].group.as_deref(), Some("Default"));
    }

    #[test]
    fn unit_qualifier_not_in_uri_leaves_group_unset() {
        let json = r#"
{
  "cluster-query": { "relations": { "relation-group": [
    { "typeref": "servers", "relation": [
      { "idref": "1", "nameref": "App", "uriref": "/manage/v2/servers/App?group-id=Other",
        "qualifiers": { "qualifier": [ { "nameref": "Default" } ] } }
    ] }
  ] } }
}
        "#;
        let result = resources_from(json);
        assert_eq!(result[0].group, None);
    }

    #[test]
    fn unit_first_matching_qualifier_wins() {
        let json = r#"
{
  "cluster-query": { "relations": { "relation-group": [
    { "typeref": "servers", "relation": [
      { "idref": "1", "nameref": "App", "uriref": "/manage/v2/servers/App?group-id=Default",
        "qualifiers": { "qualifier": [
          { "nameref": "Other" },
          { "nameref": "Default" },
          { "nameref": "Def" }
        ] } }
    ] }
  ] } }
}
        "#;
        let result = resources_from(json);
        assert_eq!(result[0].group.as_deref(), Some("Default"));
    }

    #[test]
    fn unit_empty_qualifiers() {
        let json = r#"
{
  "cluster-query": { "relations": { "relation-group": [
    { "typeref": "hosts", "relation": [
      { "idref": "2871b05b4bdc", "nameref": "ml1.local", "uriref": "/manage/v2/hosts/ml1.local", "qualifiers": {} }
    ] }
  ] } }
}
        "#;
        let result = resources_from(json);
        assert_eq!(result[0].resource_type, "host");
        assert_eq!(result[0].group, None);
    }

    #[test]
    fn unit_unknown_type_keeps_plural() {
        let json = r#"
{
  "cluster-query": { "relations": { "relation-group": [
    { "typeref": "mimetypes", "relation": [
      { "idref": "m1", "nameref": "text/plain", "uriref": "/manage/v2/mimetypes/text%2Fplain" }
    ] },
    { "typeref": "databases", "relation": [
      { "idref": "d1", "nameref": "Security", "uriref": "/manage/v2/databases/Security" },
      { "idref": "d2", "nameref": "Documents", "uriref": "/manage/v2/databases/Documents" }
    ] }
  ] } }
}
        "#;
        let result = resources_from(json);
        assert_eq!(result.len(), 3);
        assert_eq!(result[0].resource_type, "mimetypes");
        assert_eq!(result[1].resource_type, "database");
        assert_eq!(result[2].name, "Documents");
    }

    #[test]
    fn unit_injected_singulars() {
        let json = r#"
{
  "cluster-query": { "relations": { "relation-group": [
    { "typeref": "forests", "relation": [
      { "idref": "f1", "nameref": "Forest1", "uriref": "/manage/v2/forests/f1" }
    ] }
  ] } }
}
        "#;
        let api = MarkLogicApi::new(RecordingTransport::ok(json), "http://localhost:8002")
            .with_singulars(ResourceSingulars::from_pairs(&[("forests", "Forest")]));
        let result = api.list_resources().unwrap();
        assert_eq!(result[0].resource_type, "Forest");

        let api = MarkLogicApi::new(RecordingTransport::ok(json), "http://localhost:8002")
            .with_singulars(ResourceSingulars::new());
        let result = api.list_resources().unwrap();
        assert_eq!(result[0].resource_type, "forests");
    }

    #[test]
    fn unit_selected_resources_uses_injected_singulars() {
        let json = r#"
{
  "cluster-query": { "relations": { "relation-group": [
    { "typeref": "forests", "relation": [
      { "idref": "f1", "nameref": "Forest1", "uriref": "/manage/v2/forests/f1" },
      { "idref": "f2", "nameref": "Security", "uriref": "/manage/v2/forests/Security" }
    ] },
    { "typeref": "databases", "relation": [
      { "idref": "d1", "nameref": "Security", "uriref": "/manage/v2/databases/Security" }
    ] }
  ] } }
}
        "#;
        let options = Opts {
            resource: Some(ResourceKind::Forest),
            ..Default::default()
        };
        let api = MarkLogicApi::new(RecordingTransport::ok(json), "http://localhost:8002")
            .with_singulars(ResourceSingulars::from_pairs(&[("forests", "Forest"), ("databases", "Database")]));
        let result = selected_resources(&api, &options).unwrap();
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|r| r.resource_type == "Forest"));

        let options = Opts {
            resource_match: Some("^Security$".to_string()),
            ..Default::default()
        };
        let api = MarkLogicApi::new(RecordingTransport::ok(json), "http://localhost:8002");
        let result = selected_resources(&api, &options).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].resource_type, "forest");
        assert_eq!(result[1].resource_type, "database");
    }

    #[test]
    fn unit_missing_keys_is_an_error() {
        let data: Value = serde_json::from_str(r#"{"cluster-query":{"relations":{}}}"#).unwrap();
        assert!(ClusterQueryResponse::from_value(data).is_err());
        let data: Value = serde_json::from_str(r#"
{ "cluster-query": { "relations": { "relation-group": [
  { "typeref": "forests", "relation": [ { "idref": "f1", "nameref": "Forest1" } ] }
] } } }
        "#).unwrap();
        assert!(ClusterQueryResponse::from_value(data).is_err());
    }

    #[test]
    fn unit_uri_without_prefix_is_kept() {
        let json = r#"
{
  "cluster-query": { "relations": { "relation-group": [
    { "typeref": "forests", "relation": [
      { "idref": "f1", "nameref": "Forest1", "uriref": "/forests/f1" }
    ] }
  ] } }
}
        "#;
        assert_eq!(resources_from(json)[0].uri, "/forests/f1");
    }

    #[test]
    fn unit_filters() {
        let resources = vec![
            resource("forest", "Security", None),
            resource("database", "Security", None),
            resource("server", "Admin", Some("Default")),
            resource("server", "App-Services", Some("Default")),
            resource("server", "Admin", Some("Other")),
        ];

        assert_eq!(apply_filters(resources.clone(), &[]).len(), 5);

        let include_servers = ResourceFilter::include(Some("server"), Regex::new(".*").unwrap(), Some("Default"));
        let result = apply_filters(resources.clone(), &[include_servers.clone()]);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|r| r.group.as_deref() == Some("Default")));

        let exclude_admin = ResourceFilter::exclude(None, Regex::new("^Admin$").unwrap(), None);
        let result = apply_filters(resources.clone(), &[include_servers, exclude_admin.clone()]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "App-Services");

        let result = apply_filters(resources, &[exclude_admin]);
        assert_eq!(result.len(), 3);
    }
}
