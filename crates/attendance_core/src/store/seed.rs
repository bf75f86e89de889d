//! Compiled-in attendance dataset.
//!
//! The seed is a JSON document embedded at build time; declaration order of
//! `teams` is the order exposed by the team selector.

use crate::model::attendance::AttendanceSummary;
use crate::store::attendance_store::InMemoryAttendanceStore;
use crate::store::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};

/// Raw JSON for the built-in dataset.
pub const BUILTIN_SEED_JSON: &str = include_str!("../../data/attendance_seed.json");

/// Top-level seed document shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedDocument {
    pub teams: Vec<AttendanceSummary>,
}

impl InMemoryAttendanceStore {
    /// Builds the store from the embedded dataset.
    pub fn builtin() -> StoreResult<Self> {
        Self::from_json_str(BUILTIN_SEED_JSON)
    }

    /// Builds a store from a seed JSON document.
    ///
    /// # Errors
    /// - `StoreError::InvalidSeed` when the document does not parse.
    /// - `StoreError::DuplicateTeam` when a team id repeats.
    pub fn from_json_str(raw: &str) -> StoreResult<Self> {
        let document: SeedDocument =
            serde_json::from_str(raw).map_err(|err| StoreError::InvalidSeed(err.to_string()))?;
        Self::new(document.teams)
    }
}
