//! Student record and its six sub-aggregates.
//!
//! # Responsibility
//! - Define the record stored per username in the record store.
//! - Provide date-of-birth entry validation for profile updates.
//!
//! # Invariants
//! - Every sequence is append-only and preserves insertion order.
//! - `Profile` fields are write-once: an update only fills empty fields.
//! - `Budgets` and `GradeTracker` are whole-value overwrites.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static DOB_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{2})/(\d{2})$").expect("valid dob regex"));

/// Validation error for record field entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    /// Date of birth does not match `MM/DD` with an in-range month and day.
    InvalidDob(String),
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDob(value) => {
                write!(f, "invalid date of birth `{value}`; expected MM/DD")
            }
        }
    }
}

impl Error for RecordValidationError {}

/// Checks a date-of-birth entry against the `MM/DD` format.
///
/// Only basic range checks apply: month `01..=12`, day `01..=31`. There is
/// no per-month day count or leap-year handling.
pub fn validate_dob(dob: &str) -> Result<(), RecordValidationError> {
    let invalid = || RecordValidationError::InvalidDob(dob.to_string());
    let captures = DOB_RE.captures(dob).ok_or_else(invalid)?;
    let month: u8 = captures[1].parse().map_err(|_| invalid())?;
    let day: u8 = captures[2].parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(invalid());
    }
    Ok(())
}

/// Identity and preference data. Fields are write-once.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// `MM/DD` entry, validated by [`validate_dob`] before assignment.
    pub dob: String,
    pub preferences: String,
}

/// One academic calendar entry: a course with an assignment deadline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CourseDeadline {
    pub course: String,
    /// Free-form `MM-DD-YY` entry; not semantically validated.
    pub deadline: String,
}

/// GPA and goals. Overwritten as a whole on each update.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GradeTracker {
    /// No range is enforced; any parseable real number is accepted.
    pub gpa: f64,
    pub academic_goals: String,
}

/// A to-do item. New entries always start not completed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaskEntry {
    pub task: String,
    pub completed: bool,
}

/// An errand item, tracked separately from tasks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrandEntry {
    pub errand: String,
    pub completed: bool,
}

/// Parallel append-only task and errand lists.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaskManager {
    pub tasks: Vec<TaskEntry>,
    pub errands: Vec<ErrandEntry>,
}

/// Three independent append-only event categories.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventCalendar {
    pub gym_efforts: Vec<String>,
    pub meeting: Vec<String>,
    pub other: Vec<String>,
}

/// Weekly/monthly budget pair, overwritten as a whole on each update.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Budgets {
    pub weekly: f64,
    pub monthly: f64,
}

/// One recorded expense.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Expense {
    pub item: String,
    pub price: f64,
}

/// Budgets plus the append-only expense log.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FinancialManagement {
    pub budgets: Budgets,
    pub expenses: Vec<Expense>,
}

/// The full per-student record as persisted in the store.
///
/// The username is the store map key, not a record field, so the serialized
/// shape stays a plain `username -> record` object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Plaintext shared-secret gate, compared for equality only.
    pub password: String,
    pub profile: Profile,
    pub academic_calendar: Vec<CourseDeadline>,
    pub grade_tracker: GradeTracker,
    pub task_manager: TaskManager,
    pub event_calendar: EventCalendar,
    pub financial_management: FinancialManagement,
}

#[cfg(test)]
mod tests {
    use super::{validate_dob, RecordValidationError, StudentRecord};

    #[test]
    fn validate_dob_accepts_in_range_dates() {
        assert_eq!(validate_dob("01/15"), Ok(()));
        assert_eq!(validate_dob("12/31"), Ok(()));
        assert_eq!(validate_dob("01/01"), Ok(()));
    }

    #[test]
    fn validate_dob_rejects_bad_format() {
        for input in ["1/5", "01-15", "", "ab/cd", "01/153"] {
            assert_eq!(
                validate_dob(input),
                Err(RecordValidationError::InvalidDob(input.to_string()))
            );
        }
    }

    #[test]
    fn validate_dob_rejects_out_of_range_month_and_day() {
        for input in ["13/40", "00/10", "10/00", "10/32"] {
            assert!(validate_dob(input).is_err(), "{input} should be rejected");
        }
    }

    #[test]
    fn default_record_is_all_empty() {
        let record = StudentRecord::default();
        assert!(record.password.is_empty());
        assert!(record.profile.name.is_empty());
        assert!(record.academic_calendar.is_empty());
        assert_eq!(record.grade_tracker.gpa, 0.0);
        assert!(record.task_manager.tasks.is_empty());
        assert!(record.task_manager.errands.is_empty());
        assert!(record.event_calendar.gym_efforts.is_empty());
        assert_eq!(record.financial_management.budgets.weekly, 0.0);
        assert!(record.financial_management.expenses.is_empty());
    }

    #[test]
    fn record_serializes_with_snake_case_schema_keys() {
        let record = StudentRecord::default();
        let json = serde_json::to_value(&record).unwrap();
        for key in [
            "password",
            "profile",
            "academic_calendar",
            "grade_tracker",
            "task_manager",
            "event_calendar",
            "financial_management",
        ] {
            assert!(json.get(key).is_some(), "missing key `{key}`");
        }
        assert!(json["profile"].get("dob").is_some());
        assert!(json["financial_management"]["budgets"].get("weekly").is_some());
    }
}
