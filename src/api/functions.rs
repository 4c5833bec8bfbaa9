//! The impls and functions
//!
use std::{fmt, time::Instant};
use log::*;
use anyhow::Result;
use serde_json::Value;
use crate::api::{MarkLogicApi, QueryParams, ResourceKind, View, MANAGE_PATH};
use crate::health::HealthReport;
use crate::resources::{ClusterQueryResponse, Resource, ResourceSingulars};
use crate::transport::HttpTransport;
use crate::Opts;

impl QueryParams {
    pub fn new() -> Self {
        Default::default()
    }
    /// Set `key` to `value`, replacing the value if the key is already present.
    pub fn set(
        &mut self,
        key: &str,
        value: &str,
    )
    {
        match self.params.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.to_string(),
            None => self.params.push((key.to_string(), value.to_string())),
        }
    }
    pub fn with(
        mut self,
        key: &str,
        value: &str,
    ) -> Self
    {
        self.set(key, value);
        self
    }
    pub fn get(
        &self,
        key: &str,
    ) -> Option<&str>
    {
        self.params.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }
    pub fn len(&self) -> usize {
        self.params.len()
    }
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
    pub fn as_slice(&self) -> &[(String, String)] {
        &self.params
    }
    pub fn set_view(
        &mut self,
        view: View,
    )
    {
        self.set("view", view.as_str());
    }
    /// Add `<kind>-id=<name>`, but only when both are given. An empty name is not given.
    pub fn set_resource_id(
        &mut self,
        resource: Option<ResourceKind>,
        name: Option<&str>,
    )
    {
        if let (Some(resource), Some(name)) = (resource, name.filter(|n| !n.is_empty())) {
            self.set(resource.id_param(), name);
        }
    }
    pub fn set_group(
        &mut self,
        group: Option<&str>,
    )
    {
        if let Some(group) = group.filter(|g| !g.is_empty()) {
            self.set("group-id", group);
        }
    }
}

impl ResourceKind {
    pub fn singular(&self) -> &'static str {
        match self {
            ResourceKind::Forest => "forest",
            ResourceKind::Database => "database",
            ResourceKind::Host => "host",
            ResourceKind::Server => "server",
            ResourceKind::Group => "group",
        }
    }
    /// The route segment of the kind.
    pub fn plural(&self) -> &'static str {
        match self {
            ResourceKind::Forest => "forests",
            ResourceKind::Database => "databases",
            ResourceKind::Host => "hosts",
            ResourceKind::Server => "servers",
            ResourceKind::Group => "groups",
        }
    }
    /// The name of the parameter that selects a single resource of this kind.
    pub fn id_param(&self) -> &'static str {
        match self {
            ResourceKind::Forest => "forest-id",
            ResourceKind::Database => "database-id",
            ResourceKind::Host => "host-id",
            ResourceKind::Server => "server-id",
            ResourceKind::Group => "group-id",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.singular())
    }
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Status => "status",
            View::Storage => "storage",
            View::Health => "health",
            View::Query => "query",
        }
    }
}

impl<T: HttpTransport> MarkLogicApi<T> {
    pub fn new(
        transport: T,
        api_url: &str,
    ) -> Self
    {
        MarkLogicApi {
            transport,
            base_url: format!("{}{}", api_url.trim_end_matches('/'), MANAGE_PATH),
            singulars: ResourceSingulars::default(),
        }
    }
    pub fn with_singulars(
        mut self,
        singulars: ResourceSingulars,
    ) -> Self
    {
        self.singulars = singulars;
        self
    }
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
    pub fn transport(&self) -> &T {
        &self.transport
    }
    /// GET `<base_url><route>` and decode the json body.
    ///
    /// `format=json` is always set, whatever was passed in `params`.
    pub fn fetch_json(
        &self,
        route: &str,
        params: Option<QueryParams>,
    ) -> Result<Value>
    {
        let mut params = params.unwrap_or_default();
        params.set("format", "json");

        let url = format!("{}{}", self.base_url, route);
        debug!("http get: {} {:?}", url, params.as_slice());
        let timer = Instant::now();

        let response = self.transport.get(&url, &params)?.error_for_status()?;

        debug!("http get: {} done: {:?}", url, timer.elapsed());
        response.json()
    }
    /// Status of the cluster (no arguments), of all resources of a kind, or of a single resource.
    ///
    /// - `http://localhost:8002/manage/v2?view=status&format=json`
    /// - `http://localhost:8002/manage/v2/hosts?view=status&format=json`
    /// - `http://localhost:8002/manage/v2/forests/Security?view=status&format=json`
    pub fn get_status(
        &self,
        resource: Option<ResourceKind>,
        name: Option<&str>,
        group: Option<&str>,
    ) -> Result<Value>
    {
        let mut params = QueryParams::new();
        params.set_view(View::Status);
        let mut route = String::new();
        if let Some(resource) = resource {
            route.push('/');
            route.push_str(resource.plural());
        }
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            route.push('/');
            route.push_str(name);
        }
        params.set_group(group);

        self.fetch_json(&route, Some(params))
    }
    /// The requests currently running, for the cluster or filtered by resource and/or group.
    ///
    /// - `http://localhost:8002/manage/v2/requests?format=json`
    /// - `http://localhost:8002/manage/v2/requests?format=json&server-id=Admin&group-id=Default`
    /// - `http://localhost:8002/manage/v2/requests?format=json&host-id=2871b05b4bdc`
    pub fn get_requests(
        &self,
        resource: Option<ResourceKind>,
        name: Option<&str>,
        group: Option<&str>,
    ) -> Result<Value>
    {
        let mut params = QueryParams::new();
        params.set_resource_id(resource, name);
        params.set_group(group);

        self.fetch_json("/requests", Some(params))
    }
    /// Storage usage of the forests, optionally narrowed to the forests of a resource.
    ///
    /// - `http://localhost:8002/manage/v2/forests?format=json&view=storage`
    /// - `http://localhost:8002/manage/v2/forests?format=json&view=storage&database-id=Security`
    pub fn get_storage(
        &self,
        resource: Option<ResourceKind>,
        name: Option<&str>,
        group: Option<&str>,
    ) -> Result<Value>
    {
        let mut params = QueryParams::new();
        params.set_view(View::Storage);
        params.set_resource_id(resource, name);
        params.set_group(group);

        self.fetch_json("/forests", Some(params))
    }
    /// The cluster health: `http://localhost:8002/manage/v2?view=health&format=json`.
    pub fn get_health(&self) -> Result<Value> {
        let params = QueryParams::new().with("view", View::Health.as_str());
        self.fetch_json("", Some(params))
    }
    pub fn get_health_report(&self) -> Result<HealthReport> {
        HealthReport::from_value(self.get_health()?)
    }
    /// All resources in the cluster, flattened from the `view=query` relations.
    pub fn list_resources(&self) -> Result<Vec<Resource>> {
        let data = self.get_raw_resources()?;
        let cluster_query = ClusterQueryResponse::from_value(data)?;
        let resources = cluster_query.resources(&self.singulars);
        info!("resources found: {}", resources.len());
        Ok(resources)
    }
    /// The summary of all resources in the local cluster:
    /// `http://localhost:8002/manage/v2?view=query&format=json`.
    fn get_raw_resources(&self) -> Result<Value> {
        let params = QueryParams::new().with("view", View::Query.as_str());
        self.fetch_json("", Some(params))
    }
}

pub fn print_status<T: HttpTransport>(
    api: &MarkLogicApi<T>,
    options: &Opts,
) -> Result<()>
{
    let status = api.get_status(options.resource, options.name.as_deref(), options.group.as_deref())?;
    println!("{}", serde_json::to_string_pretty(&status)?);
    Ok(())
}

pub fn print_requests<T: HttpTransport>(
    api: &MarkLogicApi<T>,
    options: &Opts,
) -> Result<()>
{
    let requests = api.get_requests(options.resource, options.name.as_deref(), options.group.as_deref())?;
    println!("{}", serde_json::to_string_pretty(&requests)?);
    Ok(())
}

pub fn print_storage<T: HttpTransport>(
    api: &MarkLogicApi<T>,
    options: &Opts,
) -> Result<()>
{
    let storage = api.get_storage(options.resource, options.name.as_deref(), options.group.as_deref())?;
    println!("{}", serde_json::to_string_pretty(&storage)?);
    Ok(())
}
