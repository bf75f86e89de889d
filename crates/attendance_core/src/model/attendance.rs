//! Team attendance summary and roster record model.
//!
//! # Responsibility
//! - Define the canonical per-team summary consumed by the dashboard view.
//! - Provide data-quality validation for summary sum invariants.
//!
//! # Invariants
//! - `present + absent + late == total` is expected but not enforced on read.
//! - Diversity values are expected to sum to `total`.
//! - Absent records carry the `-` arrival placeholder.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable team identifier, e.g. `"Team A"`.
pub type TeamId = String;

/// Roster record identifier, unique within one team roster.
pub type RecordId = u32;

/// Arrival time shown when no arrival was recorded.
pub const ARRIVAL_PLACEHOLDER: &str = "-";

/// Per-person attendance state for the reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

impl AttendanceStatus {
    /// Fixed display label, independent of locale.
    pub fn label(self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
            Self::Late => "Late",
        }
    }

    /// Breakdown order used by the attendance chart.
    pub fn all() -> [AttendanceStatus; 3] {
        [Self::Present, Self::Absent, Self::Late]
    }
}

impl Display for AttendanceStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Workforce diversity category used by the diversity chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiversityCategory {
    Male,
    Female,
    Other,
}

impl DiversityCategory {
    /// Key used in the summary `diversity` mapping.
    pub fn key(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    /// Fixed display label, independent of locale.
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }

    /// Breakdown order used by the diversity chart.
    pub fn all() -> [DiversityCategory; 3] {
        [Self::Male, Self::Female, Self::Other]
    }
}

/// One roster row for the detailed attendance table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Serialized as `id` to match the seed schema.
    #[serde(rename = "id")]
    pub record_id: RecordId,
    /// Serialized as `name` to match the seed schema.
    #[serde(rename = "name")]
    pub person_name: String,
    pub status: AttendanceStatus,
    /// Formatted time such as `09:00 AM`, or `-` when absent.
    pub arrival_time: String,
}

impl AttendanceRecord {
    pub fn new(
        record_id: RecordId,
        person_name: impl Into<String>,
        status: AttendanceStatus,
        arrival_time: impl Into<String>,
    ) -> Self {
        Self {
            record_id,
            person_name: person_name.into(),
            status,
            arrival_time: arrival_time.into(),
        }
    }

    /// Builds an absent record with the arrival placeholder.
    pub fn absent(record_id: RecordId, person_name: impl Into<String>) -> Self {
        Self::new(
            record_id,
            person_name,
            AttendanceStatus::Absent,
            ARRIVAL_PLACEHOLDER,
        )
    }

    /// Returns whether an arrival time was recorded.
    pub fn has_arrival(&self) -> bool {
        self.arrival_time != ARRIVAL_PLACEHOLDER
    }
}

/// Attendance summary and roster for one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    pub team_id: TeamId,
    pub total: u32,
    pub present: u32,
    pub absent: u32,
    pub late: u32,
    /// Category key (`male|female|other`) to head count.
    pub diversity: BTreeMap<String, u32>,
    /// Stored display order.
    pub roster: Vec<AttendanceRecord>,
}

impl AttendanceSummary {
    /// Returns the head count for one diversity category, if recorded.
    pub fn diversity_count(&self, category: DiversityCategory) -> Option<u32> {
        self.diversity.get(category.key()).copied()
    }

    /// Returns the attendance count for one status.
    pub fn status_count(&self, status: AttendanceStatus) -> u32 {
        match status {
            AttendanceStatus::Present => self.present,
            AttendanceStatus::Absent => self.absent,
            AttendanceStatus::Late => self.late,
        }
    }

    /// Checks summary data-quality invariants.
    ///
    /// Readers never call this; it exists for seed loading diagnostics and
    /// data tests. Returns the first violation found.
    ///
    /// # Errors
    /// - `AttendanceSumMismatch` when `present + absent + late != total`.
    /// - `DiversitySumMismatch` when diversity counts do not sum to `total`.
    /// - `DuplicateRecordId` when two roster rows share an id.
    /// - `AbsentWithArrival` / `MissingArrival` when status and arrival time
    ///   disagree.
    pub fn validate(&self) -> Result<(), SummaryValidationError> {
        let attendance_sum =
            u64::from(self.present) + u64::from(self.absent) + u64::from(self.late);
        if attendance_sum != u64::from(self.total) {
            return Err(SummaryValidationError::AttendanceSumMismatch {
                team_id: self.team_id.clone(),
                total: self.total,
                sum: attendance_sum,
            });
        }

        let diversity_sum: u64 = self.diversity.values().map(|value| u64::from(*value)).sum();
        if diversity_sum != u64::from(self.total) {
            return Err(SummaryValidationError::DiversitySumMismatch {
                team_id: self.team_id.clone(),
                total: self.total,
                sum: diversity_sum,
            });
        }

        let mut seen = HashSet::with_capacity(self.roster.len());
        for record in &self.roster {
            if !seen.insert(record.record_id) {
                return Err(SummaryValidationError::DuplicateRecordId {
                    team_id: self.team_id.clone(),
                    record_id: record.record_id,
                });
            }
            match (record.status, record.has_arrival()) {
                (AttendanceStatus::Absent, true) => {
                    return Err(SummaryValidationError::AbsentWithArrival {
                        team_id: self.team_id.clone(),
                        record_id: record.record_id,
                    });
                }
                (AttendanceStatus::Present | AttendanceStatus::Late, false) => {
                    return Err(SummaryValidationError::MissingArrival {
                        team_id: self.team_id.clone(),
                        record_id: record.record_id,
                    });
                }
                _ => {}
            }
        }

        Ok(())
    }
}

/// Data-quality violations reported by [`AttendanceSummary::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryValidationError {
    AttendanceSumMismatch {
        team_id: TeamId,
        total: u32,
        sum: u64,
    },
    DiversitySumMismatch {
        team_id: TeamId,
        total: u32,
        sum: u64,
    },
    DuplicateRecordId {
        team_id: TeamId,
        record_id: RecordId,
    },
    AbsentWithArrival {
        team_id: TeamId,
        record_id: RecordId,
    },
    MissingArrival {
        team_id: TeamId,
        record_id: RecordId,
    },
}

impl Display for SummaryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AttendanceSumMismatch {
                team_id,
                total,
                sum,
            } => write!(
                f,
                "{team_id}: present+absent+late ({sum}) does not match total ({total})"
            ),
            Self::DiversitySumMismatch {
                team_id,
                total,
                sum,
            } => write!(
                f,
                "{team_id}: diversity counts ({sum}) do not match total ({total})"
            ),
            Self::DuplicateRecordId { team_id, record_id } => {
                write!(f, "{team_id}: duplicate roster record id {record_id}")
            }
            Self::AbsentWithArrival { team_id, record_id } => write!(
                f,
                "{team_id}: absent record {record_id} has an arrival time"
            ),
            Self::MissingArrival { team_id, record_id } => write!(
                f,
                "{team_id}: record {record_id} is not absent but has no arrival time"
            ),
        }
    }
}

impl Error for SummaryValidationError {}

#[cfg(test)]
mod tests {
    use super::{AttendanceRecord, AttendanceStatus, AttendanceSummary, SummaryValidationError};
    use std::collections::BTreeMap;

    fn summary(total: u32, present: u32, absent: u32, late: u32) -> AttendanceSummary {
        AttendanceSummary {
            team_id: "Team T".to_string(),
            total,
            present,
            absent,
            late,
            diversity: BTreeMap::from([
                ("male".to_string(), total / 2),
                ("female".to_string(), total - total / 2),
                ("other".to_string(), 0),
            ]),
            roster: vec![
                AttendanceRecord::new(1, "Ann", AttendanceStatus::Present, "08:30 AM"),
                AttendanceRecord::absent(2, "Ben"),
            ],
        }
    }

    #[test]
    fn consistent_summary_validates() {
        summary(10, 7, 2, 1).validate().expect("summary should be valid");
    }

    #[test]
    fn attendance_sum_mismatch_is_reported() {
        let err = summary(10, 7, 2, 2).validate().unwrap_err();
        assert_eq!(
            err,
            SummaryValidationError::AttendanceSumMismatch {
                team_id: "Team T".to_string(),
                total: 10,
                sum: 11,
            }
        );
    }

    #[test]
    fn absent_record_with_arrival_is_reported() {
        let mut value = summary(10, 7, 2, 1);
        value.roster[1].arrival_time = "09:10 AM".to_string();
        let err = value.validate().unwrap_err();
        assert!(matches!(
            err,
            SummaryValidationError::AbsentWithArrival { record_id: 2, .. }
        ));
    }

    #[test]
    fn status_labels_are_fixed() {
        let labels = AttendanceStatus::all().map(AttendanceStatus::label);
        assert_eq!(labels, ["Present", "Absent", "Late"]);
    }
}
