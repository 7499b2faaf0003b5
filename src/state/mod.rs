//! State tracking for Genesis projects.
//!
//! `state.json` records the current framework state, an append-only event
//! history, emergent patterns and per-dimension data. [`StateTracker`]
//! owns loading, mutation and persistence.

pub mod document;
pub mod tracker;

pub use document::{
    CurrentState, EmergentPattern, PatternState, RecursiveState, StateDocument, StateEvent,
    DIMENSIONS, STATE_VERSION, TOTAL_COMMITMENTS,
};
pub use tracker::StateTracker;
