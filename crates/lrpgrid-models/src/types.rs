//! Desired and actual LRP records.
//!
//! Field names serialize in snake_case and actual states as upper-case
//! strings, matching what schedulers and placement agents write.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Unique identifier shared by a desired LRP and all of its instances.
pub type ProcessGuid = String;

/// Identifier of one execution attempt at a given index.
pub type InstanceGuid = String;

// ── Desired ───────────────────────────────────────────────────────

/// Declared target state of a long-running process.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DesiredLrp {
    pub process_guid: ProcessGuid,
    /// Number of instances that should be running.
    pub instances: u32,
    /// Stack (platform image) the instances run on, e.g. "lucid64".
    pub stack: String,
    #[serde(default)]
    pub start_command: String,
    /// Hostnames routed to this process.
    #[serde(default)]
    pub routes: Vec<String>,
    #[serde(default)]
    pub environment: Vec<EnvironmentVariable>,
    #[serde(default)]
    pub memory_mb: u64,
    #[serde(default)]
    pub disk_mb: u64,
    /// Container ports each instance exposes.
    #[serde(default)]
    pub ports: Vec<u16>,
    #[serde(default)]
    pub log_guid: String,
    #[serde(default)]
    pub log_source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnvironmentVariable {
    pub key: String,
    pub value: String,
}

impl DesiredLrp {
    /// Parse and validate a stored payload.
    pub fn from_json(payload: &[u8]) -> ModelResult<Self> {
        let lrp: DesiredLrp = serde_json::from_slice(payload)?;
        lrp.validate()?;
        Ok(lrp)
    }

    pub fn to_json(&self) -> ModelResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn validate(&self) -> ModelResult<()> {
        if self.process_guid.is_empty() {
            return Err(ModelError::MissingField("process_guid"));
        }
        if self.stack.is_empty() {
            return Err(ModelError::MissingField("stack"));
        }
        Ok(())
    }
}

// ── Actual ────────────────────────────────────────────────────────

/// Observed run state of one LRP instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActualLrp {
    pub process_guid: ProcessGuid,
    pub instance_guid: InstanceGuid,
    /// Zero-based ordinal among the desired instances.
    pub index: u32,
    pub state: ActualLrpState,
    /// Executor the instance was placed on, empty until claimed.
    #[serde(default)]
    pub executor_id: String,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub ports: Vec<PortMapping>,
    /// Unix nanoseconds of the last state change.
    #[serde(default)]
    pub since: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PortMapping {
    pub container_port: u16,
    pub host_port: u16,
}

/// Lifecycle state of an actual LRP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActualLrpState {
    Unclaimed,
    Claimed,
    Running,
    Crashed,
}

impl ActualLrpState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActualLrpState::Unclaimed => "UNCLAIMED",
            ActualLrpState::Claimed => "CLAIMED",
            ActualLrpState::Running => "RUNNING",
            ActualLrpState::Crashed => "CRASHED",
        }
    }
}

impl fmt::Display for ActualLrpState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ActualLrp {
    /// Parse and validate a stored payload.
    pub fn from_json(payload: &[u8]) -> ModelResult<Self> {
        let lrp: ActualLrp = serde_json::from_slice(payload)?;
        lrp.validate()?;
        Ok(lrp)
    }

    pub fn to_json(&self) -> ModelResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn validate(&self) -> ModelResult<()> {
        if self.process_guid.is_empty() {
            return Err(ModelError::MissingField("process_guid"));
        }
        if self.instance_guid.is_empty() {
            return Err(ModelError::MissingField("instance_guid"));
        }
        Ok(())
    }
}
