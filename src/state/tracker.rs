//! Loading, mutating and persisting `state.json`.

use chrono::Utc;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GenesisError, Result};

use super::document::{CurrentState, EmergentPattern, StateDocument, StateEvent, TOTAL_COMMITMENTS};

/// Tracks the evolution of a project's state file.
///
/// Every mutating method writes the file before returning.
#[derive(Debug, Clone)]
pub struct StateTracker {
    path: PathBuf,
    document: StateDocument,
}

impl StateTracker {
    /// Load the state at `path`.
    ///
    /// A missing file yields the initial state; nothing is written until
    /// the first mutation.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let document = match fs::read_to_string(&path) {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|e| GenesisError::DataFileParse {
                    path: path.clone(),
                    message: e.to_string(),
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No state at {}, starting fresh", path.display());
                StateDocument::initial(Utc::now())
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self { path, document })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &StateDocument {
        &self.document
    }

    pub fn current_state(&self) -> &CurrentState {
        &self.document.current_state
    }

    /// Write the state file as pretty-printed JSON.
    ///
    /// The document is written to a sibling temp file and renamed into
    /// place, so a crash mid-write never leaves a truncated state file.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&self.document)?;

        let temp_path = self.temp_path();
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    /// Append an event to the history and stamp the last evaluation.
    pub fn add_event(&mut self, event: &str, notes: &str, ethical_compliant: bool) -> Result<()> {
        let timestamp = Utc::now();
        self.document.state_history.push(StateEvent {
            timestamp,
            state: self.document.current_state.state.clone(),
            event: event.to_string(),
            ethical_compliance: ethical_compliant,
            notes: notes.to_string(),
        });
        self.document.current_state.last_evaluation = timestamp;
        self.save()
    }

    /// Move to `new_state`, recording the transition as an event.
    pub fn update_state(&mut self, new_state: &str, reason: Option<&str>) -> Result<()> {
        let old_state =
            std::mem::replace(&mut self.document.current_state.state, new_state.to_string());

        let mut event = format!("State transition: {} → {}", old_state, new_state);
        if let Some(reason) = reason.filter(|r| !r.is_empty()) {
            event.push_str(&format!(" ({})", reason));
        }

        tracing::info!("{}", event);
        self.add_event(&event, "", true)
    }

    /// Record an emergent pattern at the current recursive depth.
    pub fn detect_pattern(
        &mut self,
        pattern_type: &str,
        description: &str,
        confidence: f64,
    ) -> Result<()> {
        self.document.patterns.emergent.push(EmergentPattern {
            timestamp: Utc::now(),
            pattern_type: pattern_type.to_string(),
            description: description.to_string(),
            confidence,
            recursive_depth: self.document.patterns.recursive.depth,
        });
        self.save()
    }

    /// Increase the recursive depth by one.
    ///
    /// Returns `false` without writing when the depth is already at its cap.
    pub fn increase_recursive_depth(&mut self) -> Result<bool> {
        let recursive = &mut self.document.patterns.recursive;
        if recursive.depth >= recursive.max_depth {
            return Ok(false);
        }
        recursive.depth += 1;
        self.save()?;
        Ok(true)
    }

    /// Set `key` within `dimension`.
    ///
    /// Returns `false` without writing when the dimension is unknown.
    pub fn update_dimension(&mut self, dimension: &str, key: &str, value: Value) -> Result<bool> {
        match self.document.dimensions.get_mut(dimension) {
            Some(entries) => {
                entries.insert(key.to_string(), value);
                self.save()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Human-readable summary of the current state.
    pub fn summary(&self) -> String {
        let current = &self.document.current_state;
        let recursive = &self.document.patterns.recursive;
        let mode = if current.gena_mode {
            "Active"
        } else {
            "Inactive"
        };

        [
            "STATE SUMMARY".to_string(),
            "=============".to_string(),
            format!("Current State: {}", current.state),
            format!("GENⱯ Mode: {}", mode),
            format!(
                "Active Commitments: {}/{}",
                current.active_commitments, TOTAL_COMMITMENTS
            ),
            format!("Ethical Status: {}", current.ethical_status),
            format!("Evolutionary Stage: {}", current.evolutionary_stage),
            format!("Last Evaluation: {}", current.last_evaluation.to_rfc3339()),
            String::new(),
            "ANALYTICS".to_string(),
            "=========".to_string(),
            format!(
                "State History Events: {}",
                self.document.state_history.len()
            ),
            format!(
                "Emergent Patterns Detected: {}",
                self.document.patterns.emergent.len()
            ),
            format!(
                "Recursive Analysis Depth: {}/{}",
                recursive.depth, recursive.max_depth
            ),
        ]
        .join("\n")
    }
}
