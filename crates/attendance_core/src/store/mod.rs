//! Attendance store contracts and the compiled-in dataset.
//!
//! # Responsibility
//! - Provide team lookup and stable team listing for the dashboard view.
//! - Build the process-wide store from the embedded seed configuration.
//!
//! # Invariants
//! - A store is never mutated after construction.
//! - `list_team_ids()` follows declaration order.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod attendance_store;
pub mod seed;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store construction and lookup errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Lookup of a team id that is not configured.
    UnknownTeam(String),
    /// Two summaries declare the same team id.
    DuplicateTeam(String),
    /// Seed document could not be parsed.
    InvalidSeed(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownTeam(team_id) => write!(f, "unknown team: {team_id}"),
            Self::DuplicateTeam(team_id) => write!(f, "team declared more than once: {team_id}"),
            Self::InvalidSeed(message) => write!(f, "invalid attendance seed: {message}"),
        }
    }
}

impl Error for StoreError {}
