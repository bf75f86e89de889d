//! Flutter-facing bindings for the attendance dashboard core.

pub mod api;
