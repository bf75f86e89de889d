//! FFI use-case API for the dashboard screen.
//!
//! # Responsibility
//! - Expose dashboard gestures and renderer inputs to Dart via FRB.
//! - Own the one process-wide dashboard view session.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Gestures run one at a time; readers never see a half-applied gesture.
//! - Failed gestures leave the session unchanged.

use attendance_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    AttendanceRecord, AttendanceView, ColoredSegment, DashboardSnapshot,
    InMemoryAttendanceStore, PickerAnchor, ViewConfig,
};
use log::warn;
use std::sync::{Mutex, OnceLock};

type DashboardView = AttendanceView<InMemoryAttendanceStore>;

static DASHBOARD: OnceLock<Mutex<Option<DashboardView>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One colored chart segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSegment {
    pub label: String,
    pub count: u32,
    /// Hex color, e.g. `#0088FE`.
    pub color: String,
}

/// One row of the detailed attendance table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardRosterRow {
    pub record_id: u32,
    pub person_name: String,
    /// `Present|Absent|Late`.
    pub status: String,
    /// Arrival time, or `-` when absent.
    pub arrival_time: String,
}

/// Full renderer input for the dashboard screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardResponse {
    /// Whether the snapshot could be computed.
    pub ok: bool,
    /// Human-readable diagnostics; empty on success.
    pub message: String,
    pub team_ids: Vec<String>,
    pub selected_team_id: String,
    /// ISO `YYYY-MM-DD`.
    pub reference_date: String,
    /// Long form, e.g. `October 19th, 2026`.
    pub formatted_reference_date: String,
    pub is_date_picker_open: bool,
    /// Optional anchor of the open date overlay.
    pub date_picker_anchor: Option<String>,
    pub attendance: Vec<DashboardSegment>,
    pub diversity: Vec<DashboardSegment>,
    pub roster: Vec<DashboardRosterRow>,
}

impl DashboardResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            ..Self::default()
        }
    }
}

/// Result envelope for one dashboard gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardActionResponse {
    /// Whether the gesture took effect.
    pub ok: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl DashboardActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Lists team ids for the team selector, in declaration order.
///
/// # FFI contract
/// - Sync call, in-memory.
/// - Returns an empty list when the session cannot be created.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_team_ids() -> Vec<String> {
    with_dashboard(|view| Ok(view.team_ids())).unwrap_or_default()
}

/// Returns every renderer input for the current selection.
///
/// # FFI contract
/// - Sync call, in-memory.
/// - Never panics; `ok=false` carries the failure message.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_snapshot() -> DashboardResponse {
    let result = with_dashboard(|view| {
        let anchor = view
            .selection()
            .date_picker()
            .anchor()
            .map(|anchor| anchor.as_str().to_string());
        view.snapshot()
            .map(|snapshot| to_dashboard_response(snapshot, anchor))
            .map_err(|err| err.to_string())
    });
    match result {
        Ok(response) => response,
        Err(err) => DashboardResponse::failure(format!("dashboard_snapshot failed: {err}")),
    }
}

/// Switches the selected team.
///
/// # FFI contract
/// - Unknown ids return `ok=false` and keep the previous team.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_select_team(team_id: String) -> DashboardActionResponse {
    match with_dashboard(|view| view.select_team(&team_id).map_err(|err| err.to_string())) {
        Ok(()) => DashboardActionResponse::success(format!("Selected {team_id}.")),
        Err(err) => DashboardActionResponse::failure(format!("dashboard_select_team failed: {err}")),
    }
}

/// Opens the date overlay at an opaque UI anchor.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_open_date_picker(anchor: String) -> DashboardActionResponse {
    match with_dashboard(|view| {
        view.open_date_picker(PickerAnchor::new(anchor));
        Ok(())
    }) {
        Ok(()) => DashboardActionResponse::success("Date picker opened."),
        Err(err) => {
            DashboardActionResponse::failure(format!("dashboard_open_date_picker failed: {err}"))
        }
    }
}

/// Closes the date overlay. Succeeds when already closed.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_close_date_picker() -> DashboardActionResponse {
    match with_dashboard(|view| {
        view.close_date_picker();
        Ok(())
    }) {
        Ok(()) => DashboardActionResponse::success("Date picker closed."),
        Err(err) => {
            DashboardActionResponse::failure(format!("dashboard_close_date_picker failed: {err}"))
        }
    }
}

/// Sets the reference date from ISO `YYYY-MM-DD` text and closes the overlay.
///
/// # FFI contract
/// - Malformed dates return `ok=false` and keep the previous date.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_set_reference_date(date: String) -> DashboardActionResponse {
    match with_dashboard(|view| {
        view.set_reference_date_str(&date)
            .map_err(|err| err.to_string())
    }) {
        Ok(()) => DashboardActionResponse::success("Reference date updated."),
        Err(err) => {
            DashboardActionResponse::failure(format!("dashboard_set_reference_date failed: {err}"))
        }
    }
}

fn with_dashboard<T>(
    f: impl FnOnce(&mut DashboardView) -> Result<T, String>,
) -> Result<T, String> {
    let session = DASHBOARD.get_or_init(|| Mutex::new(None));
    let mut guard = session
        .lock()
        .map_err(|_| "dashboard session lock poisoned".to_string())?;

    if guard.is_none() {
        let view = InMemoryAttendanceStore::builtin()
            .map_err(|err| err.to_string())
            .and_then(|store| {
                AttendanceView::new(store, ViewConfig::default()).map_err(|err| err.to_string())
            })
            .map_err(|err| {
                warn!("event=dashboard_session module=ffi status=error");
                format!("dashboard session init failed: {err}")
            })?;
        *guard = Some(view);
    }

    match guard.as_mut() {
        Some(view) => f(view),
        None => Err("dashboard session unavailable".to_string()),
    }
}

fn to_dashboard_response(snapshot: DashboardSnapshot, anchor: Option<String>) -> DashboardResponse {
    DashboardResponse {
        ok: true,
        message: String::new(),
        team_ids: snapshot.team_ids,
        selected_team_id: snapshot.selected_team_id,
        reference_date: snapshot.reference_date.format("%Y-%m-%d").to_string(),
        formatted_reference_date: snapshot.formatted_reference_date,
        is_date_picker_open: snapshot.is_date_picker_open,
        date_picker_anchor: anchor,
        attendance: snapshot.attendance.into_iter().map(to_segment).collect(),
        diversity: snapshot.diversity.into_iter().map(to_segment).collect(),
        roster: snapshot.roster.into_iter().map(to_roster_row).collect(),
    }
}

fn to_segment(segment: ColoredSegment) -> DashboardSegment {
    DashboardSegment {
        label: segment.label.to_string(),
        count: segment.count,
        color: segment.color,
    }
}

fn to_roster_row(record: AttendanceRecord) -> DashboardRosterRow {
    DashboardRosterRow {
        record_id: record.record_id,
        person_name: record.person_name,
        status: record.status.label().to_string(),
        arrival_time: record.arrival_time,
    }
}
