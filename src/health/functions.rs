//! The impls and functions
//!
use std::fmt;
use colored::*;
use anyhow::{Context, Result};
use serde_json::Value;
use crate::api::MarkLogicApi;
use crate::health::{HealthReport, HealthState};
use crate::transport::HttpTransport;

impl HealthReport {
    pub fn from_value(
        data: Value,
    ) -> Result<Self>
    {
        serde_json::from_value(data)
            .with_context(|| "Error parsing cluster-health-report from view=health response")
    }
    /// The most severe state in the report, [HealthState::Info] for an empty report.
    pub fn worst_state(&self) -> HealthState {
        self.entries
            .iter()
            .map(|e| e.state)
            .max_by_key(|s| s.severity())
            .unwrap_or_default()
    }
    pub fn print(&self) {
        println!("{:12} {:10} {:30} {:40} message", "state", "type", "name", "code");
        for entry in &self.entries {
            println!("{:12} {:10} {:30} {:40} {}",
                     entry.state.colored(),
                     entry.resource_type.as_deref().unwrap_or("-"),
                     entry.resource_name.as_deref().unwrap_or("-"),
                     entry.code.as_deref().unwrap_or("-"),
                     entry.message.as_deref().unwrap_or(""),
            );
        }
        println!("cluster health: {}", self.worst_state().colored());
    }
}

impl HealthState {
    /// info < unknown < maintenance < at-risk < offline < critical
    pub fn severity(&self) -> u8 {
        match self {
            HealthState::Info => 0,
            HealthState::Unknown => 1,
            HealthState::Maintenance => 2,
            HealthState::AtRisk => 3,
            HealthState::Offline => 4,
            HealthState::Critical => 5,
        }
    }
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthState::Info => "info",
            HealthState::Unknown => "unknown",
            HealthState::Maintenance => "maintenance",
            HealthState::AtRisk => "at-risk",
            HealthState::Offline => "offline",
            HealthState::Critical => "critical",
        }
    }
    fn colored(&self) -> ColoredString {
        match self {
            HealthState::Info => self.as_str().green(),
            HealthState::Unknown => self.as_str().normal(),
            HealthState::Maintenance | HealthState::AtRisk | HealthState::Offline => self.as_str().yellow(),
            HealthState::Critical => self.as_str().red(),
        }
    }
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn print_health<T: HttpTransport>(
    api: &MarkLogicApi<T>,
) -> Result<()>
{
    api.get_health_report()?.print();
    Ok(())
}
