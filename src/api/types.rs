//! Wire-format and output types for the Spaces API
//!
//! Two layers: `*Wire` structs mirror the remote JSON with every optional
//! field modeled as `Option` (or defaulted), so a partial or evolving
//! remote schema never fails deserialization. The output records
//! ([`SpaceSummary`], [`SpaceDetail`], [`RuntimeStatus`]) are the fixed
//! shapes printed by the CLI, produced by one normalization function per
//! record shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stage reported when the remote response omits one
pub const UNKNOWN_STAGE: &str = "UNKNOWN";

// ============================================================================
// Wire structs (deserialization boundary)
// ============================================================================

/// One space as returned by the catalog and single-fetch endpoints
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceWire {
    #[serde(default)]
    pub id: String,
    pub author: Option<String>,
    pub sha: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub likes: u64,
    pub sdk: Option<String>,
    pub sdk_version: Option<String>,
    pub runtime: Option<RuntimeWire>,
}

/// Runtime object embedded in space details and returned by the
/// runtime endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeWire {
    pub stage: Option<String>,
    pub hardware: Option<HardwareWire>,
    pub gc_timeout: Option<u64>,
}

/// Current vs. requested hardware tier
#[derive(Debug, Clone, Deserialize)]
pub struct HardwareWire {
    pub current: Option<String>,
    pub requested: Option<String>,
}

// ============================================================================
// Output records
// ============================================================================

/// Flat summary of one space, as printed by `list` and `user`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SpaceSummary {
    pub id: String,
    pub author: Option<String>,
    pub sha: Option<String>,
    pub last_modified: Option<String>,
    pub private: bool,
    pub likes: u64,
    pub sdk: Option<String>,
}

impl SpaceSummary {
    /// Normalize a wire space into a summary record
    pub fn from_wire(wire: &SpaceWire) -> Self {
        Self {
            id: wire.id.clone(),
            author: wire.author.clone(),
            sha: wire.sha.clone(),
            last_modified: wire.last_modified.map(|t| t.to_rfc3339()),
            private: wire.private,
            likes: wire.likes,
            sdk: wire.sdk.clone(),
        }
    }
}

/// Detailed view of one space, as printed by `info`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SpaceDetail {
    pub id: String,
    pub author: Option<String>,
    pub sha: Option<String>,
    pub last_modified: Option<String>,
    pub private: bool,
    pub likes: u64,
    pub sdk: Option<String>,
    pub sdk_version: Option<String>,
    /// Runtime stage, when the remote response carries a runtime object
    pub runtime: Option<String>,
    /// Currently assigned hardware tier
    pub hardware: Option<String>,
}

impl SpaceDetail {
    /// Normalize a wire space into a detail record
    pub fn from_wire(wire: &SpaceWire) -> Self {
        let summary = SpaceSummary::from_wire(wire);
        let runtime = wire.runtime.as_ref();
        Self {
            id: summary.id,
            author: summary.author,
            sha: summary.sha,
            last_modified: summary.last_modified,
            private: summary.private,
            likes: summary.likes,
            sdk: summary.sdk,
            sdk_version: wire.sdk_version.clone(),
            runtime: runtime.and_then(|r| r.stage.clone()),
            hardware: runtime
                .and_then(|r| r.hardware.as_ref())
                .and_then(|h| h.current.clone()),
        }
    }
}

/// Live runtime state of one space, as printed by `runtime`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RuntimeStatus {
    pub stage: String,
    pub hardware: Option<String>,
    pub requested_hardware: Option<String>,
    pub sleep_time: Option<u64>,
    /// Compact JSON of the full remote response, for fields not
    /// otherwise modeled
    pub raw_data: String,
}

impl RuntimeStatus {
    /// Normalize the raw runtime response into a status record
    pub fn from_value(value: &Value) -> crate::error::Result<Self> {
        let wire: RuntimeWire = serde_json::from_value(value.clone())?;
        let hardware = wire.hardware.as_ref();
        Ok(Self {
            stage: wire
                .stage
                .unwrap_or_else(|| UNKNOWN_STAGE.to_string()),
            hardware: hardware.and_then(|h| h.current.clone()),
            requested_hardware: hardware.and_then(|h| h.requested.clone()),
            sleep_time: wire.gc_timeout,
            raw_data: value.to_string(),
        })
    }
}
