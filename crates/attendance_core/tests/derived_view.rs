use attendance_core::{
    attendance_breakdown, diversity_breakdown, roster_rows, AttendanceRecord, AttendanceStatus,
    AttendanceStore, AttendanceSummary, DiversityCategory, InMemoryAttendanceStore,
    SelectionState, StoreError, ViewError,
};
use chrono::NaiveDate;
use std::collections::BTreeMap;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn summary(
    team_id: &str,
    counts: (u32, u32, u32, u32),
    diversity: &[(&str, u32)],
) -> AttendanceSummary {
    let (total, present, absent, late) = counts;
    AttendanceSummary {
        team_id: team_id.to_string(),
        total,
        present,
        absent,
        late,
        diversity: diversity
            .iter()
            .map(|(key, value)| (key.to_string(), *value))
            .collect::<BTreeMap<_, _>>(),
        roster: vec![
            AttendanceRecord::new(7, "Zoe", AttendanceStatus::Late, "09:30 AM"),
            AttendanceRecord::absent(3, "Adam"),
            AttendanceRecord::new(5, "Mona", AttendanceStatus::Present, "08:10 AM"),
        ],
    }
}

#[test]
fn attendance_breakdown_sums_to_total_for_every_builtin_team() {
    let store = InMemoryAttendanceStore::builtin().unwrap();
    for team_id in store.list_team_ids() {
        let selection = SelectionState::new(team_id.clone(), day());
        let entries = attendance_breakdown(&store, &selection).unwrap();
        let labels: Vec<&str> = entries.iter().map(|entry| entry.label).collect();
        let sum: u32 = entries.iter().map(|entry| entry.count).sum();

        assert_eq!(labels, vec!["Present", "Absent", "Late"]);
        assert_eq!(sum, store.get(&team_id).unwrap().total, "team {team_id}");
    }
}

#[test]
fn inconsistent_summary_is_returned_unmodified() {
    let store = InMemoryAttendanceStore::new(vec![summary(
        "Broken",
        (10, 9, 9, 9),
        &[("male", 1), ("female", 1), ("other", 1)],
    )])
    .unwrap();
    assert_eq!(store.validation_issues().len(), 1);

    let selection = SelectionState::new("Broken", day());
    let counts: Vec<u32> = attendance_breakdown(&store, &selection)
        .unwrap()
        .iter()
        .map(|entry| entry.count)
        .collect();

    assert_eq!(counts, vec![9, 9, 9]);
}

#[test]
fn diversity_labels_are_fixed_for_every_builtin_team() {
    let store = InMemoryAttendanceStore::builtin().unwrap();
    for team_id in store.list_team_ids() {
        let selection = SelectionState::new(team_id.clone(), day());
        let entries = diversity_breakdown(&store, &selection).unwrap();
        let labels: Vec<&str> = entries.iter().map(|entry| entry.label).collect();
        let sum: u32 = entries.iter().map(|entry| entry.count).sum();

        assert_eq!(labels, vec!["Male", "Female", "Other"], "team {team_id}");
        assert_eq!(sum, store.get(&team_id).unwrap().total, "team {team_id}");
    }
}

#[test]
fn diversity_labels_follow_fixed_order_regardless_of_source_order() {
    let store = InMemoryAttendanceStore::from_json_str(
        r#"{"teams":[{"team_id":"T","total":6,"present":6,"absent":0,"late":0,
            "diversity":{"other":1,"female":2,"male":3},"roster":[]}]}"#,
    )
    .unwrap();
    let selection = SelectionState::new("T", day());

    let entries = diversity_breakdown(&store, &selection).unwrap();
    let pairs: Vec<(&str, u32)> = entries.iter().map(|entry| (entry.label, entry.count)).collect();

    assert_eq!(pairs, vec![("Male", 3), ("Female", 2), ("Other", 1)]);
}

#[test]
fn missing_diversity_category_is_an_error() {
    let store = InMemoryAttendanceStore::new(vec![summary(
        "NoOther",
        (3, 1, 1, 1),
        &[("male", 2), ("female", 1)],
    )])
    .unwrap();
    let selection = SelectionState::new("NoOther", day());

    let err = diversity_breakdown(&store, &selection).unwrap_err();

    assert_eq!(
        err,
        ViewError::MissingDiversityCategory {
            team_id: "NoOther".to_string(),
            category: DiversityCategory::Other,
        }
    );
}

#[test]
fn roster_keeps_stored_order_across_reads() {
    let store = InMemoryAttendanceStore::new(vec![summary(
        "Ordered",
        (3, 1, 1, 1),
        &[("male", 1), ("female", 1), ("other", 1)],
    )])
    .unwrap();
    let selection = SelectionState::new("Ordered", day());

    let first = roster_rows(&store, &selection).unwrap();
    let second = roster_rows(&store, &selection).unwrap();
    let ids: Vec<u32> = first.iter().map(|record| record.record_id).collect();

    assert_eq!(ids, vec![7, 3, 5]);
    assert_eq!(first, second);
    assert_eq!(store.get("Ordered").unwrap().roster, first);
}

#[test]
fn derivations_are_repeatable() {
    let store = InMemoryAttendanceStore::builtin().unwrap();
    let selection = SelectionState::new("Team C", day());

    assert_eq!(
        attendance_breakdown(&store, &selection).unwrap(),
        attendance_breakdown(&store, &selection).unwrap()
    );
    assert_eq!(
        diversity_breakdown(&store, &selection).unwrap(),
        diversity_breakdown(&store, &selection).unwrap()
    );
}

#[test]
fn unknown_selected_team_surfaces_store_error() {
    let store = InMemoryAttendanceStore::builtin().unwrap();
    let selection = SelectionState::new("Team Z", day());

    let err = roster_rows(&store, &selection).unwrap_err();

    assert_eq!(
        err,
        ViewError::Store(StoreError::UnknownTeam("Team Z".to_string()))
    );
}
