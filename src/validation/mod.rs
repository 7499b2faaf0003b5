//! Validation of the genesis document.
//!
//! [`GenesisValidator`] runs a fixed sequence of checks (structure,
//! identity, commitments, commit history, ethical guidelines, synthesis
//! dimensions) and collects the findings into a [`ValidationReport`].
//! Errors fail the report; warnings do not.

pub mod checks;
pub mod report;

pub use checks::{
    load_genesis_document, GenesisValidator, MIN_ENTRIES, REQUIRED_COMMITMENTS, REQUIRED_FIELDS,
    ROOT_KEY_PREFIX,
};
pub use report::{Level, ValidationReport, ValidationResult, RULE_WIDTH};
