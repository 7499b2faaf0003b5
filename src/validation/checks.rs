//! Checks run against a genesis document.

use chrono::Utc;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GenesisError, Result};
use crate::shell::GitRepo;

use super::report::{Level, ValidationReport, ValidationResult};

/// Top-level fields every genesis document must carry.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "genesisTime",
    "initiator",
    "rootIdentityKey",
    "commitments",
    "stateManagement",
];

/// Commitments every genesis document must configure.
pub const REQUIRED_COMMITMENTS: [&str; 5] = [
    "immutableCommitHistory",
    "ethicalEvolution",
    "multiDimensionalSynthesis",
    "recursiveContextualAnalysis",
    "ownershipProtocol",
];

/// Prefix expected on `rootIdentityKey`.
pub const ROOT_KEY_PREFIX: &str = "ROOT-";

/// Minimum count of ethical guidelines and synthesis dimensions.
pub const MIN_ENTRIES: usize = 3;

/// Read and parse a genesis document.
pub fn load_genesis_document(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| GenesisError::DataFileParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// JSON truthiness: null, false, zero and empty containers are false.
pub(crate) fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

/// Length of an array at `pointer`, zero if absent or not an array.
fn array_len(doc: &Value, pointer: &str) -> usize {
    doc.pointer(pointer)
        .and_then(Value::as_array)
        .map(Vec::len)
        .unwrap_or(0)
}

/// Validates a genesis document and the repository it lives in.
pub struct GenesisValidator {
    genesis_file: PathBuf,
    git: GitRepo,
    document: Option<Value>,
    results: Vec<ValidationResult>,
}

impl GenesisValidator {
    pub fn new(genesis_file: impl Into<PathBuf>, git: GitRepo) -> Self {
        Self {
            genesis_file: genesis_file.into(),
            git,
            document: None,
            results: Vec::new(),
        }
    }

    /// Validate an already-parsed document.
    pub fn with_document(
        genesis_file: impl Into<PathBuf>,
        git: GitRepo,
        document: Value,
    ) -> Self {
        Self {
            document: Some(document),
            ..Self::new(genesis_file, git)
        }
    }

    fn add(&mut self, level: Level, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!("[{}] {}", level, message);
        self.results.push(ValidationResult {
            level,
            message,
            timestamp: Utc::now(),
        });
    }

    fn doc(&self) -> &Value {
        static EMPTY: Value = Value::Null;
        self.document.as_ref().unwrap_or(&EMPTY)
    }

    /// Load the document from disk if it has not been supplied.
    pub fn load(&mut self) -> bool {
        if self.document.is_some() {
            return true;
        }
        match load_genesis_document(&self.genesis_file) {
            Ok(doc) => {
                self.document = Some(doc);
                true
            }
            Err(e) => {
                self.add(
                    Level::Error,
                    format!("Failed to load {}: {}", self.genesis_file.display(), e),
                );
                false
            }
        }
    }

    pub fn check_structure(&mut self) -> bool {
        let missing = REQUIRED_FIELDS
            .iter()
            .copied()
            .find(|field| self.doc().get(field).is_none());

        if let Some(field) = missing {
            self.add(Level::Error, format!("Missing required field: {}", field));
            return false;
        }

        self.add(Level::Success, "Genesis configuration structure is valid");
        true
    }

    pub fn check_identity(&mut self) -> bool {
        let doc = self.doc();
        let complete = ["genesisTime", "initiator", "rootIdentityKey"]
            .iter()
            .all(|field| truthy(doc.get(*field)));
        let well_formed = doc
            .get("rootIdentityKey")
            .and_then(Value::as_str)
            .map(|key| key.starts_with(ROOT_KEY_PREFIX))
            .unwrap_or(false);
        let initiator = match doc.get("initiator") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };

        if !complete {
            self.add(Level::Error, "Incomplete genesis identity parameters");
            return false;
        }

        if !well_formed {
            self.add(
                Level::Warning,
                "Root identity key doesn't follow expected format",
            );
        }

        self.add(
            Level::Success,
            format!("Genesis identity validated: {}", initiator),
        );
        true
    }

    pub fn check_commitments(&mut self) -> bool {
        let commitments = self.doc().get("commitments").cloned().unwrap_or(Value::Null);
        let mut all_present = true;

        for name in REQUIRED_COMMITMENTS {
            match commitments.get(name) {
                None => {
                    self.add(Level::Error, format!("Missing commitment: {}", name));
                    all_present = false;
                }
                Some(commitment) => {
                    if !truthy(commitment.get("enabled")) {
                        self.add(Level::Warning, format!("Commitment not enabled: {}", name));
                    }
                }
            }
        }

        if all_present {
            self.add(Level::Success, "All Genesis Commitments are configured");
        }
        all_present
    }

    pub fn check_immutable_history(&mut self) -> bool {
        if !self.git.is_repository() {
            self.add(
                Level::Error,
                format!(
                    "Failed to validate commit history: {} is not a git repository",
                    self.git.root().display()
                ),
            );
            return false;
        }

        match self.git.commit_count() {
            Ok(count) => {
                self.add(
                    Level::Success,
                    format!("Immutable history validated: {} commits", count),
                );
                true
            }
            Err(e) => {
                self.add(
                    Level::Error,
                    format!("Failed to validate commit history: {}", e),
                );
                false
            }
        }
    }

    pub fn check_ethical_guidelines(&mut self) -> bool {
        let count = array_len(self.doc(), "/commitments/ethicalEvolution/ethicalGuidelines");
        if count < MIN_ENTRIES {
            self.add(
                Level::Warning,
                format!("Less than {} ethical guidelines defined", MIN_ENTRIES),
            );
            return false;
        }
        self.add(
            Level::Success,
            format!("{} ethical guidelines defined", count),
        );
        true
    }

    pub fn check_dimensions(&mut self) -> bool {
        let count = array_len(self.doc(), "/commitments/multiDimensionalSynthesis/dimensions");
        if count < MIN_ENTRIES {
            self.add(
                Level::Warning,
                format!("Less than {} dimensions defined for synthesis", MIN_ENTRIES),
            );
            return false;
        }
        self.add(
            Level::Success,
            format!("{} dimensions configured for synthesis", count),
        );
        true
    }

    /// Run every check in order and produce the report.
    ///
    /// A document that cannot be loaded yields a report holding only the
    /// load error.
    pub fn run(mut self) -> ValidationReport {
        if self.load() {
            self.check_structure();
            self.check_identity();
            self.check_commitments();
            self.check_immutable_history();
            self.check_ethical_guidelines();
            self.check_dimensions();
        }

        ValidationReport {
            genesis_file: self.genesis_file,
            generated_at: Utc::now(),
            results: self.results,
        }
    }
}
