//! Dashboard view state, derivation and interaction handling.
//!
//! # Responsibility
//! - Hold the team/date/picker selection for one dashboard view.
//! - Derive chart series and roster rows from store + selection.
//! - Apply user gestures atomically.
//!
//! # Invariants
//! - The selected team is always a key of the store.
//! - Rejected gestures leave the selection unchanged.
//! - Derived outputs are recomputed on every read and never cached.

use crate::model::attendance::DiversityCategory;
use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod controller;
pub mod derive;
pub mod palette;
pub mod selection;

pub type ViewResult<T> = Result<T, ViewError>;

/// Errors from dashboard view operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// Attempt to select a team id outside the known set.
    InvalidSelection(String),
    /// Selected team's diversity mapping lacks an expected category.
    MissingDiversityCategory {
        team_id: String,
        category: DiversityCategory,
    },
    /// Reference date text is not a calendar date.
    InvalidDate(String),
    /// View was built over a store with no teams.
    NoTeamsConfigured,
    /// Store-level lookup failure.
    Store(StoreError),
}

impl Display for ViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSelection(team_id) => write!(f, "team is not selectable: {team_id}"),
            Self::MissingDiversityCategory { team_id, category } => write!(
                f,
                "{team_id}: diversity category `{}` is missing",
                category.key()
            ),
            Self::InvalidDate(raw) => write!(f, "reference date must be YYYY-MM-DD, got `{raw}`"),
            Self::NoTeamsConfigured => write!(f, "attendance store has no teams"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ViewError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for ViewError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
