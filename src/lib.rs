//! `ml_stats` reads resource, status, request, storage and health data from the
//! MarkLogic management API (`/manage/v2`).
//!
//! The client is [api::MarkLogicApi], which performs its requests through a
//! [transport::HttpTransport] supplied by the caller.
//!
#[macro_use]
extern crate serde_derive;

use clap::Parser;

pub mod api;
pub mod health;
pub mod resources;
pub mod transport;
pub mod utility;

use api::ResourceKind;

/// ml_stats: read the MarkLogic management API
#[derive(Debug, Parser, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Opts {
    /// management api url (default http://localhost:8002, env MLSTATS_API_URL)
    #[arg(short = 'u', long, value_name = "url")]
    pub api_url: Option<String>,
    /// user name for basic authentication (env MLSTATS_USERNAME)
    #[arg(long)]
    pub username: Option<String>,
    /// password for basic authentication (env MLSTATS_PASSWORD)
    #[arg(long)]
    pub password: Option<String>,
    /// request timeout in seconds (default 10, env MLSTATS_TIMEOUT)
    #[arg(long)]
    pub timeout: Option<String>,
    /// accept invalid (self-signed) certificates
    #[arg(long)]
    pub accept_invalid_certs: bool,
    /// print all resources of the cluster
    #[arg(long)]
    pub print_resources: bool,
    /// print the cluster health report
    #[arg(long)]
    pub print_health: bool,
    /// print status (default when nothing else is selected)
    #[arg(long)]
    pub print_status: bool,
    /// print the running requests
    #[arg(long)]
    pub print_requests: bool,
    /// print forest storage usage
    #[arg(long)]
    pub print_storage: bool,
    /// resource kind to narrow status, requests, storage or resources to
    #[arg(short, long, value_enum)]
    pub resource: Option<ResourceKind>,
    /// resource name, used together with --resource
    #[arg(short, long)]
    pub name: Option<String>,
    /// group name (group-id)
    #[arg(short, long)]
    pub group: Option<String>,
    /// regex to select resource names with --print-resources
    #[arg(long, value_name = "regex")]
    pub resource_match: Option<String>,
    /// write the api url, username and timeout settings to .env
    #[arg(long)]
    pub write_dotenv: bool,
}

/// The output selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    Resources,
    Health,
    Status,
    Requests,
    Storage,
}

impl Opts {
    /// The first selected of resources, health, status, requests, storage.
    /// Status when nothing is selected.
    pub fn report(&self) -> Report {
        if self.print_resources {
            Report::Resources
        } else if self.print_health {
            Report::Health
        } else if self.print_status {
            Report::Status
        } else if self.print_requests {
            Report::Requests
        } else if self.print_storage {
            Report::Storage
        } else {
            Report::Status
        }
    }
}
