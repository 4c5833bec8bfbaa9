//! The structs
//!

/// The root struct for deserializing `/manage/v2?view=health`.
///
/// ```json
/// {
///   "cluster-health-report": [
///     {
///       "resource-type": "database",
///       "resource-name": "Fab",
///       "code": "HEALTH-DATABASE-NO-FORESTS",
///       "message": "Database has no forests attached.",
///       "state": "info"
///     }
///   ]
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct HealthReport {
    #[serde(rename = "cluster-health-report", default)]
    pub entries: Vec<HealthEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthEntry {
    #[serde(rename = "resource-type")]
    pub resource_type: Option<String>,
    #[serde(rename = "resource-name")]
    pub resource_name: Option<String>,
    pub code: Option<String>,
    pub message: Option<String>,
    #[serde(default)]
    pub state: HealthState,
}

/// The state of a finding. Severity is given by `HealthState::severity`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum HealthState {
    #[default]
    Info,
    Maintenance,
    AtRisk,
    Offline,
    Critical,
    #[serde(other)]
    Unknown,
}
