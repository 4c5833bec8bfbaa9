//! Module for reading the cluster health, `/manage/v2?view=health`.
//!
//! The health view returns a `cluster-health-report`: a list of findings, each with:
//! ([HealthEntry])
//! - resource-type and resource-name: the resource the finding is about.
//! - code and message: what was found.
//! - state: `info`, `at-risk`, `maintenance`, `offline` or `critical` ([HealthState]).
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
