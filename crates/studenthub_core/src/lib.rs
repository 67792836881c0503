//! Core domain logic for StudentHub.
//! This crate is the single source of truth for business invariants.

pub mod auth;
pub mod logging;
pub mod menu;
pub mod model;
pub mod session;
pub mod store;

pub use auth::{authenticate, AuthError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use menu::{MenuChoice, MenuError};
pub use model::record::{
    Budgets, CourseDeadline, ErrandEntry, EventCalendar, Expense, FinancialManagement,
    GradeTracker, Profile, RecordValidationError, StudentRecord, TaskEntry, TaskManager,
};
pub use session::{CalendarUpdate, HomeView, Session, SessionError, SessionResult};
pub use store::{JsonStore, RecordMap, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
