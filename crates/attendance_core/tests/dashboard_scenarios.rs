use attendance_core::{
    AttendanceRecord, AttendanceStatus, AttendanceView, BreakdownEntry, DatePickerState,
    InMemoryAttendanceStore, PickerAnchor, ViewConfig, ViewError,
};
use chrono::NaiveDate;
use std::sync::Arc;

fn reference_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn builtin_view() -> AttendanceView<InMemoryAttendanceStore> {
    let store = InMemoryAttendanceStore::builtin().unwrap();
    AttendanceView::with_reference_date(store, ViewConfig::default(), reference_day()).unwrap()
}

#[test]
fn initial_state_shows_team_a_attendance() {
    let view = builtin_view();

    assert_eq!(view.selection().selected_team_id(), "Team A");
    assert!(!view.selection().is_date_picker_open());
    assert_eq!(
        view.attendance_breakdown().unwrap(),
        vec![
            BreakdownEntry::new("Present", 80),
            BreakdownEntry::new("Absent", 15),
            BreakdownEntry::new("Late", 5),
        ]
    );
}

#[test]
fn selecting_team_b_switches_roster() {
    let mut view = builtin_view();

    view.select_team("Team B").unwrap();
    let rows = view.roster_rows().unwrap();

    assert_eq!(rows.len(), 5);
    assert_eq!(
        rows[0],
        AttendanceRecord::new(1, "Eva White", AttendanceStatus::Present, "08:45 AM")
    );
    assert_eq!(
        view.attendance_breakdown().unwrap(),
        vec![
            BreakdownEntry::new("Present", 60),
            BreakdownEntry::new("Absent", 12),
            BreakdownEntry::new("Late", 8),
        ]
    );
}

#[test]
fn open_then_close_picker_keeps_reference_date() {
    let mut view = builtin_view();

    view.open_date_picker(PickerAnchor::new("date-button"));
    assert!(view.selection().is_date_picker_open());
    assert_eq!(
        view.selection().date_picker().anchor(),
        Some(&PickerAnchor::new("date-button"))
    );

    view.close_date_picker();
    assert!(!view.selection().is_date_picker_open());
    assert_eq!(view.selection().date_picker(), &DatePickerState::Closed);
    assert_eq!(view.selection().reference_date(), reference_day());
}

#[test]
fn unknown_team_is_rejected_and_previous_selection_kept() {
    let mut view = builtin_view();
    view.select_team("Team C").unwrap();
    let before = view.attendance_breakdown().unwrap();

    let err = view.select_team("Team Z").unwrap_err();

    assert_eq!(err, ViewError::InvalidSelection("Team Z".to_string()));
    assert_eq!(view.selection().selected_team_id(), "Team C");
    assert_eq!(view.attendance_breakdown().unwrap(), before);
}

#[test]
fn close_picker_twice_is_same_as_once() {
    let mut view = builtin_view();
    view.open_date_picker(PickerAnchor::new("date-button"));

    view.close_date_picker();
    let once = view.selection().clone();
    view.close_date_picker();

    assert_eq!(view.selection(), &once);
    assert!(!view.selection().is_date_picker_open());
}

#[test]
fn close_picker_when_never_opened_is_noop() {
    let mut view = builtin_view();
    let before = view.selection().clone();

    view.close_date_picker();

    assert_eq!(view.selection(), &before);
}

#[test]
fn reference_date_does_not_change_derived_data() {
    let mut view = builtin_view();
    let before = view.snapshot().unwrap();

    view.open_date_picker(PickerAnchor::new("date-button"));
    view.set_reference_date_str("2024-02-29").unwrap();
    let after = view.snapshot().unwrap();

    assert_eq!(
        after.reference_date,
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    );
    assert_eq!(after.formatted_reference_date, "February 29th, 2024");
    assert!(!after.is_date_picker_open);
    assert_eq!(after.attendance, before.attendance);
    assert_eq!(after.diversity, before.diversity);
    assert_eq!(after.roster, before.roster);
}

#[test]
fn snapshot_reflects_selected_team_consistently() {
    let mut view = builtin_view();
    view.select_team("Team B").unwrap();

    let snapshot = view.snapshot().unwrap();

    assert_eq!(snapshot.team_ids, vec!["Team A", "Team B", "Team C"]);
    assert_eq!(snapshot.selected_team_id, "Team B");
    assert_eq!(snapshot.formatted_reference_date, "October 19th, 2026");
    let counts: Vec<u32> = snapshot.attendance.iter().map(|s| s.count).collect();
    assert_eq!(counts, vec![60, 12, 8]);
    let colors: Vec<&str> = snapshot.diversity.iter().map(|s| s.color.as_str()).collect();
    assert_eq!(colors, vec!["#0088FE", "#00C49F", "#FFBB28"]);
    assert_eq!(snapshot.roster[0].person_name, "Eva White");
}

#[test]
fn views_can_share_one_store() {
    let store = Arc::new(InMemoryAttendanceStore::builtin().unwrap());
    let open_view = || {
        AttendanceView::with_reference_date(
            Arc::clone(&store),
            ViewConfig::default(),
            reference_day(),
        )
        .unwrap()
    };
    let mut first = open_view();
    let second = open_view();

    first.select_team("Team C").unwrap();

    assert_eq!(first.selection().selected_team_id(), "Team C");
    assert_eq!(second.selection().selected_team_id(), "Team A");
}

#[test]
fn configured_default_team_is_selected() {
    let store = InMemoryAttendanceStore::builtin().unwrap();
    let config = ViewConfig {
        default_team_id: Some("Team C".to_string()),
        ..ViewConfig::default()
    };

    let view = AttendanceView::with_reference_date(store, config, reference_day()).unwrap();

    assert_eq!(view.selection().selected_team_id(), "Team C");
}

#[test]
fn empty_store_cannot_back_a_view() {
    let store = InMemoryAttendanceStore::new(Vec::new()).unwrap();
    let err = AttendanceView::with_reference_date(store, ViewConfig::default(), reference_day())
        .err()
        .unwrap();
    assert_eq!(err, ViewError::NoTeamsConfigured);
}
