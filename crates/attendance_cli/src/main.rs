//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `attendance_core` linkage without the Flutter/FFI runtime.
//! - Print the built-in dashboard for every team as plain text.

use attendance_core::{AttendanceView, InMemoryAttendanceStore, ViewConfig, ViewError};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("attendance_core ping={}", attendance_core::ping());
    println!("attendance_core version={}", attendance_core::core_version());

    match print_dashboards() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dashboard failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn print_dashboards() -> Result<(), ViewError> {
    let store = InMemoryAttendanceStore::builtin()?;
    let mut view = AttendanceView::new(store, ViewConfig::default())?;

    for team_id in view.team_ids() {
        view.select_team(&team_id)?;
        let snapshot = view.snapshot()?;

        println!();
        println!("== {} ({})", snapshot.selected_team_id, snapshot.formatted_reference_date);
        for (title, series) in [
            ("attendance", &snapshot.attendance),
            ("diversity", &snapshot.diversity),
        ] {
            let parts: Vec<String> = series
                .iter()
                .map(|segment| format!("{}={} {}", segment.label, segment.count, segment.color))
                .collect();
            println!("{title}: {}", parts.join(", "));
        }
        for record in &snapshot.roster {
            println!(
                "  {:>3}  {:<16} {:<8} {}",
                record.record_id,
                record.person_name,
                record.status.label(),
                record.arrival_time
            );
        }
    }

    Ok(())
}
