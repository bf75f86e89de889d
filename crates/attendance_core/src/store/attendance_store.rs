//! Attendance store trait and in-memory implementation.
//!
//! # Responsibility
//! - Map team ids to their attendance summary.
//! - Expose team ids in declaration order for the team selector.
//!
//! # Invariants
//! - Team ids are unique.
//! - Reads never reorder or modify stored summaries.

use crate::model::attendance::{AttendanceSummary, SummaryValidationError, TeamId};
use crate::store::{StoreError, StoreResult};
use log::{info, warn};
use std::collections::HashMap;
use std::sync::Arc;

/// Read-only lookup contract used by the dashboard view.
pub trait AttendanceStore {
    /// Returns the summary for `team_id`.
    ///
    /// # Errors
    /// - `StoreError::UnknownTeam` when `team_id` is not configured.
    fn get(&self, team_id: &str) -> StoreResult<&AttendanceSummary>;

    /// Returns configured team ids in declaration order.
    fn list_team_ids(&self) -> Vec<TeamId>;

    fn contains(&self, team_id: &str) -> bool {
        self.get(team_id).is_ok()
    }
}

impl<S: AttendanceStore + ?Sized> AttendanceStore for Arc<S> {
    fn get(&self, team_id: &str) -> StoreResult<&AttendanceSummary> {
        (**self).get(team_id)
    }

    fn list_team_ids(&self) -> Vec<TeamId> {
        (**self).list_team_ids()
    }

    fn contains(&self, team_id: &str) -> bool {
        (**self).contains(team_id)
    }
}

/// Immutable in-memory store built once from a fixed configuration.
#[derive(Debug, Clone)]
pub struct InMemoryAttendanceStore {
    summaries: Vec<AttendanceSummary>,
    positions: HashMap<TeamId, usize>,
}

impl InMemoryAttendanceStore {
    /// Builds a store from summaries in declaration order.
    ///
    /// Summaries that fail [`AttendanceSummary::validate`] are kept as-is and
    /// reported through a warning log event.
    ///
    /// # Errors
    /// - `StoreError::DuplicateTeam` when a team id repeats.
    pub fn new(summaries: Vec<AttendanceSummary>) -> StoreResult<Self> {
        let mut positions = HashMap::with_capacity(summaries.len());
        for (position, summary) in summaries.iter().enumerate() {
            if positions.insert(summary.team_id.clone(), position).is_some() {
                return Err(StoreError::DuplicateTeam(summary.team_id.clone()));
            }
        }

        let store = Self {
            summaries,
            positions,
        };
        for issue in store.validation_issues() {
            warn!("event=store_validation module=store status=warn issue=\"{issue}\"");
        }
        info!(
            "event=store_init module=store status=ok teams={}",
            store.summaries.len()
        );
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    /// Iterates summaries in declaration order.
    pub fn summaries(&self) -> impl Iterator<Item = &AttendanceSummary> {
        self.summaries.iter()
    }

    /// Returns one data-quality finding per invalid team, in declaration order.
    pub fn validation_issues(&self) -> Vec<SummaryValidationError> {
        self.summaries
            .iter()
            .filter_map(|summary| summary.validate().err())
            .collect()
    }
}

impl AttendanceStore for InMemoryAttendanceStore {
    fn get(&self, team_id: &str) -> StoreResult<&AttendanceSummary> {
        self.positions
            .get(team_id)
            .map(|position| &self.summaries[*position])
            .ok_or_else(|| StoreError::UnknownTeam(team_id.to_string()))
    }

    fn list_team_ids(&self) -> Vec<TeamId> {
        self.summaries
            .iter()
            .map(|summary| summary.team_id.clone())
            .collect()
    }

    fn contains(&self, team_id: &str) -> bool {
        self.positions.contains_key(team_id)
    }
}
