//! Selection state owned by one dashboard view.

use crate::model::attendance::TeamId;
use chrono::NaiveDate;

/// Opaque positioning handle supplied by the presentation layer.
///
/// The core stores it while the picker is open and hands it back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PickerAnchor(pub String);

impl PickerAnchor {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Date-picker overlay state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DatePickerState {
    #[default]
    Closed,
    Open { anchor: PickerAnchor },
}

impl DatePickerState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn anchor(&self) -> Option<&PickerAnchor> {
        match self {
            Self::Open { anchor } => Some(anchor),
            Self::Closed => None,
        }
    }
}

/// Team, reference date and picker state for one view.
///
/// Mutated only by the view controller; readers always see a complete value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    selected_team_id: TeamId,
    reference_date: NaiveDate,
    date_picker: DatePickerState,
}

impl SelectionState {
    /// Creates a selection with the picker closed.
    ///
    /// Does not check `team_id` against a store; the controller does.
    pub fn new(team_id: impl Into<TeamId>, reference_date: NaiveDate) -> Self {
        Self {
            selected_team_id: team_id.into(),
            reference_date,
            date_picker: DatePickerState::Closed,
        }
    }

    pub fn selected_team_id(&self) -> &str {
        &self.selected_team_id
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn date_picker(&self) -> &DatePickerState {
        &self.date_picker
    }

    pub fn is_date_picker_open(&self) -> bool {
        self.date_picker.is_open()
    }

    pub(crate) fn set_selected_team_id(&mut self, team_id: TeamId) {
        self.selected_team_id = team_id;
    }

    pub(crate) fn set_reference_date(&mut self, date: NaiveDate) {
        self.reference_date = date;
    }

    pub(crate) fn set_date_picker(&mut self, state: DatePickerState) {
        self.date_picker = state;
    }
}
