//! Attendance domain model shared by store and view layers.
//!
//! # Responsibility
//! - Define the per-team summary and roster record shapes.
//! - Keep display labels for attendance/diversity categories in one place.
//!
//! # Invariants
//! - Summaries are immutable once loaded into a store.
//! - Roster order is insertion order and is meaningful for display.

pub mod attendance;
