//! On-disk shape of `state.json`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Schema version written to new state files.
pub const STATE_VERSION: &str = "1.0.0";

/// Number of commitments a fully active framework carries.
pub const TOTAL_COMMITMENTS: u32 = 5;

/// Default cap on the recursive analysis depth.
pub const DEFAULT_MAX_RECURSIVE_DEPTH: u32 = 5;

/// Dimensions tracked in every state file.
pub const DIMENSIONS: [&str; 5] = ["temporal", "spatial", "conceptual", "relational", "ethical"];

/// Root of `state.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateDocument {
    pub version: String,

    /// Recorded events, oldest first.
    #[serde(default)]
    pub state_history: Vec<StateEvent>,

    pub current_state: CurrentState,

    pub patterns: PatternState,

    /// Free-form key/value data per dimension.
    #[serde(default)]
    pub dimensions: BTreeMap<String, Map<String, Value>>,

    /// Keys this crate does not model, kept across saves.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateEvent {
    pub timestamp: DateTime<Utc>,
    /// State at the time of the event.
    pub state: String,
    pub event: String,
    pub ethical_compliance: bool,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentState {
    pub state: String,
    pub gena_mode: bool,
    pub active_commitments: u32,
    pub last_evaluation: DateTime<Utc>,
    pub ethical_status: String,
    pub evolutionary_stage: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternState {
    #[serde(default)]
    pub emergent: Vec<EmergentPattern>,
    pub recursive: RecursiveState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergentPattern {
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub pattern_type: String,
    pub description: String,
    pub confidence: f64,
    /// Recursive depth at the time the pattern was recorded.
    pub recursive_depth: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecursiveState {
    pub depth: u32,
    pub max_depth: u32,
    #[serde(default)]
    pub detected_patterns: Vec<Value>,
}

impl StateDocument {
    /// A fresh state: initialized, GENⱯ mode on, all commitments active.
    pub fn initial(now: DateTime<Utc>) -> Self {
        Self {
            version: STATE_VERSION.to_string(),
            state_history: Vec::new(),
            current_state: CurrentState {
                state: "initialized".to_string(),
                gena_mode: true,
                active_commitments: TOTAL_COMMITMENTS,
                last_evaluation: now,
                ethical_status: "compliant".to_string(),
                evolutionary_stage: "genesis".to_string(),
                extra: Map::new(),
            },
            patterns: PatternState {
                emergent: Vec::new(),
                recursive: RecursiveState {
                    depth: 0,
                    max_depth: DEFAULT_MAX_RECURSIVE_DEPTH,
                    detected_patterns: Vec::new(),
                },
            },
            dimensions: DIMENSIONS
                .iter()
                .map(|d| (d.to_string(), Map::new()))
                .collect(),
            extra: Map::new(),
        }
    }
}
