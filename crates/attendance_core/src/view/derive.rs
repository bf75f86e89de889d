//! Pure derivations from store + selection to renderer inputs.
//!
//! # Invariants
//! - Same inputs always produce the same output.
//! - Values are copied from the store unmodified; inconsistent data is not
//!   corrected here.

use crate::model::attendance::{AttendanceRecord, AttendanceStatus, DiversityCategory};
use crate::store::attendance_store::AttendanceStore;
use crate::view::palette::ChartPalette;
use crate::view::selection::SelectionState;
use crate::view::{ViewError, ViewResult};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// One labeled count in a chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreakdownEntry {
    pub label: &'static str,
    pub count: u32,
}

impl BreakdownEntry {
    pub fn new(label: &'static str, count: u32) -> Self {
        Self { label, count }
    }
}

/// Breakdown entry paired with its chart color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColoredSegment {
    pub label: &'static str,
    pub count: u32,
    pub color: String,
}

/// Attendance series in fixed `[Present, Absent, Late]` order.
///
/// # Errors
/// - `ViewError::Store(UnknownTeam)` when the selected team is not in `store`.
pub fn attendance_breakdown<S: AttendanceStore + ?Sized>(
    store: &S,
    selection: &SelectionState,
) -> ViewResult<Vec<BreakdownEntry>> {
    let summary = store.get(selection.selected_team_id())?;
    Ok(AttendanceStatus::all()
        .into_iter()
        .map(|status| BreakdownEntry::new(status.label(), summary.status_count(status)))
        .collect())
}

/// Diversity series in fixed `[Male, Female, Other]` order.
///
/// # Errors
/// - `ViewError::MissingDiversityCategory` when a category key is absent.
/// - `ViewError::Store(UnknownTeam)` when the selected team is not in `store`.
pub fn diversity_breakdown<S: AttendanceStore + ?Sized>(
    store: &S,
    selection: &SelectionState,
) -> ViewResult<Vec<BreakdownEntry>> {
    let summary = store.get(selection.selected_team_id())?;
    DiversityCategory::all()
        .into_iter()
        .map(|category| {
            summary
                .diversity_count(category)
                .map(|count| BreakdownEntry::new(category.label(), count))
                .ok_or_else(|| ViewError::MissingDiversityCategory {
                    team_id: summary.team_id.clone(),
                    category,
                })
        })
        .collect()
}

/// Selected team's roster in stored order, unfiltered.
///
/// # Errors
/// - `ViewError::Store(UnknownTeam)` when the selected team is not in `store`.
pub fn roster_rows<S: AttendanceStore + ?Sized>(
    store: &S,
    selection: &SelectionState,
) -> ViewResult<Vec<AttendanceRecord>> {
    Ok(store.get(selection.selected_team_id())?.roster.clone())
}

/// Long-form reference date, e.g. `October 19th, 2026`.
///
/// Cosmetic only; the reference date does not filter any derived data.
pub fn formatted_reference_date(selection: &SelectionState) -> String {
    format_long_date(selection.reference_date())
}

/// Formats `date` as `<Month> <day><ordinal>, <yyyy>`.
pub fn format_long_date(date: NaiveDate) -> String {
    let day = date.day();
    format!(
        "{} {day}{}, {:04}",
        date.format("%B"),
        ordinal_suffix(day),
        date.year()
    )
}

/// Pairs each entry with `palette[index % palette.len()]`.
pub fn colorize(entries: &[BreakdownEntry], palette: &ChartPalette) -> Vec<ColoredSegment> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| ColoredSegment {
            label: entry.label,
            count: entry.count,
            color: palette.color_at(index).to_string(),
        })
        .collect()
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
