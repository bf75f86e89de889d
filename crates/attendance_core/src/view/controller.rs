//! Dashboard view controller.
//!
//! # Responsibility
//! - Own the selection for one view over an injected attendance store.
//! - Apply team-switch and date-picker gestures.
//! - Expose derived outputs computed from the current selection.
//!
//! # Invariants
//! - `select_team` only accepts ids listed by the store.
//! - Every gesture either fully applies or leaves the selection unchanged.
//! - `close_date_picker` is idempotent.

use crate::model::attendance::{AttendanceRecord, TeamId};
use crate::store::attendance_store::AttendanceStore;
use crate::view::derive::{self, BreakdownEntry, ColoredSegment};
use crate::view::palette::ChartPalette;
use crate::view::selection::{DatePickerState, PickerAnchor, SelectionState};
use crate::view::{ViewError, ViewResult};
use chrono::{Local, NaiveDate};
use log::{debug, info, warn};
use serde::Serialize;

const REFERENCE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Presentation-layer configuration for one dashboard view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewConfig {
    /// Initially selected team; `None` selects the first declared team.
    pub default_team_id: Option<TeamId>,
    /// Segment colors for both charts.
    pub palette: ChartPalette,
}

/// Every renderer input, computed from one selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSnapshot {
    pub team_ids: Vec<TeamId>,
    pub selected_team_id: TeamId,
    pub reference_date: NaiveDate,
    pub formatted_reference_date: String,
    pub is_date_picker_open: bool,
    pub attendance: Vec<ColoredSegment>,
    pub diversity: Vec<ColoredSegment>,
    pub roster: Vec<AttendanceRecord>,
}

/// Attendance dashboard view over an injected store.
pub struct AttendanceView<S: AttendanceStore> {
    store: S,
    palette: ChartPalette,
    selection: SelectionState,
}

impl<S: AttendanceStore> AttendanceView<S> {
    /// Creates a view with today's local date as reference date.
    pub fn new(store: S, config: ViewConfig) -> ViewResult<Self> {
        let today = Local::now().date_naive();
        Self::with_reference_date(store, config, today)
    }

    /// Creates a view with an explicit initial reference date.
    ///
    /// # Errors
    /// - `ViewError::NoTeamsConfigured` when the store is empty.
    /// - `ViewError::InvalidSelection` when `default_team_id` is unknown.
    pub fn with_reference_date(
        store: S,
        config: ViewConfig,
        reference_date: NaiveDate,
    ) -> ViewResult<Self> {
        let initial_team = match config.default_team_id {
            Some(team_id) => {
                if !store.contains(&team_id) {
                    return Err(ViewError::InvalidSelection(team_id));
                }
                team_id
            }
            None => store
                .list_team_ids()
                .into_iter()
                .next()
                .ok_or(ViewError::NoTeamsConfigured)?,
        };

        info!(
            "event=view_init module=view status=ok team=\"{}\" reference_date={}",
            initial_team, reference_date
        );
        Ok(Self {
            store,
            palette: config.palette,
            selection: SelectionState::new(initial_team, reference_date),
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn palette(&self) -> &ChartPalette {
        &self.palette
    }

    /// Team ids for the team selector, in declaration order.
    pub fn team_ids(&self) -> Vec<TeamId> {
        self.store.list_team_ids()
    }

    /// Switches the selected team.
    ///
    /// # Errors
    /// - `ViewError::InvalidSelection` when `team_id` is not listed by the
    ///   store; the selection is left unchanged.
    pub fn select_team(&mut self, team_id: &str) -> ViewResult<()> {
        if !self.store.contains(team_id) {
            warn!(
                "event=team_select module=view status=rejected team=\"{}\" kept=\"{}\"",
                team_id,
                self.selection.selected_team_id()
            );
            return Err(ViewError::InvalidSelection(team_id.to_string()));
        }

        self.selection.set_selected_team_id(team_id.to_string());
        info!("event=team_select module=view status=ok team=\"{team_id}\"");
        Ok(())
    }

    /// Opens the date overlay at `anchor`; re-anchors if already open.
    pub fn open_date_picker(&mut self, anchor: PickerAnchor) {
        debug!(
            "event=date_picker_open module=view status=ok anchor=\"{}\"",
            anchor.as_str()
        );
        self.selection
            .set_date_picker(DatePickerState::Open { anchor });
    }

    /// Closes the date overlay and drops its anchor. No-op when closed.
    pub fn close_date_picker(&mut self) {
        if self.selection.is_date_picker_open() {
            debug!("event=date_picker_close module=view status=ok");
        }
        self.selection.set_date_picker(DatePickerState::Closed);
    }

    /// Sets the reference date and closes the date overlay.
    ///
    /// The date is display-only: breakdowns and roster do not change.
    pub fn set_reference_date(&mut self, date: NaiveDate) {
        self.selection.set_reference_date(date);
        self.selection.set_date_picker(DatePickerState::Closed);
        info!("event=reference_date_set module=view status=ok date={date}");
    }

    /// Parses `YYYY-MM-DD` text and applies it as the reference date.
    ///
    /// # Errors
    /// - `ViewError::InvalidDate` for malformed or impossible dates; the
    ///   selection is left unchanged.
    pub fn set_reference_date_str(&mut self, raw: &str) -> ViewResult<()> {
        let trimmed = raw.trim();
        let date = NaiveDate::parse_from_str(trimmed, REFERENCE_DATE_FORMAT).map_err(|_| {
            warn!("event=reference_date_set module=view status=rejected");
            ViewError::InvalidDate(trimmed.to_string())
        })?;
        self.set_reference_date(date);
        Ok(())
    }

    pub fn attendance_breakdown(&self) -> ViewResult<Vec<BreakdownEntry>> {
        derive::attendance_breakdown(&self.store, &self.selection)
    }

    pub fn diversity_breakdown(&self) -> ViewResult<Vec<BreakdownEntry>> {
        derive::diversity_breakdown(&self.store, &self.selection)
    }

    pub fn roster_rows(&self) -> ViewResult<Vec<AttendanceRecord>> {
        derive::roster_rows(&self.store, &self.selection)
    }

    pub fn formatted_reference_date(&self) -> String {
        derive::formatted_reference_date(&self.selection)
    }

    /// Computes all renderer inputs from the current selection.
    pub fn snapshot(&self) -> ViewResult<DashboardSnapshot> {
        let attendance = self.attendance_breakdown()?;
        let diversity = self.diversity_breakdown()?;
        Ok(DashboardSnapshot {
            team_ids: self.team_ids(),
            selected_team_id: self.selection.selected_team_id().to_string(),
            reference_date: self.selection.reference_date(),
            formatted_reference_date: self.formatted_reference_date(),
            is_date_picker_open: self.selection.is_date_picker_open(),
            attendance: derive::colorize(&attendance, &self.palette),
            diversity: derive::colorize(&diversity, &self.palette),
            roster: self.roster_rows()?,
        })
    }
}
