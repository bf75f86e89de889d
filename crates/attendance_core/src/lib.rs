//! Core state and derivation logic for the attendance dashboard.
//! This crate is the single source of truth for view invariants.

pub mod logging;
pub mod model;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::attendance::{
    AttendanceRecord, AttendanceStatus, AttendanceSummary, DiversityCategory, RecordId,
    SummaryValidationError, TeamId, ARRIVAL_PLACEHOLDER,
};
pub use store::attendance_store::{AttendanceStore, InMemoryAttendanceStore};
pub use store::seed::{SeedDocument, BUILTIN_SEED_JSON};
pub use store::{StoreError, StoreResult};
pub use view::controller::{AttendanceView, DashboardSnapshot, ViewConfig};
pub use view::derive::{
    attendance_breakdown, colorize, diversity_breakdown, format_long_date,
    formatted_reference_date, roster_rows, BreakdownEntry, ColoredSegment,
};
pub use view::palette::{ChartPalette, PaletteError, DEFAULT_PALETTE};
pub use view::selection::{DatePickerState, PickerAnchor, SelectionState};
pub use view::{ViewError, ViewResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
