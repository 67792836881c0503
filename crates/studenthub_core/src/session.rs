//! Session use-cases over one student's record.
//!
//! # Responsibility
//! - Hold the in-memory working copy of the acting student's record.
//! - Provide the login/update/view/backup operations driven by the menu.
//! - Enforce sub-aggregate mutation rules (write-once, overwrite, append).
//!
//! # Invariants
//! - A fresh session holds the all-empty record state.
//! - A failed login leaves every sub-aggregate untouched.
//! - Numeric-input operations apply nothing when any input fails to parse.

use crate::auth::{authenticate, AuthError};
use crate::model::record::{
    validate_dob, CourseDeadline, ErrandEntry, EventCalendar, Expense, FinancialManagement,
    GradeTracker, Profile, RecordValidationError, StudentRecord, TaskEntry, TaskManager,
};
use crate::store::{JsonStore, StoreError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SessionResult<T> = Result<T, SessionError>;

/// Umbrella error for session operations.
///
/// `Auth` and `Store` are fatal to the session; the remaining variants are
/// recoverable at the menu loop (the operation is aborted and reported, the
/// loop continues).
#[derive(Debug)]
pub enum SessionError {
    Auth(AuthError),
    Store(StoreError),
    Validation(RecordValidationError),
    /// Non-numeric input where a real number is required.
    Parse { field: &'static str, value: String },
    /// Sub-menu selection outside the valid set.
    InvalidChoice(String),
}

impl SessionError {
    /// Whether this error should terminate the session rather than return
    /// control to the menu loop.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Auth(_) | Self::Store(_))
    }
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auth(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Parse { field, value } => {
                write!(f, "invalid {field} `{value}`; expected a number")
            }
            Self::InvalidChoice(choice) => write!(f, "invalid choice `{choice}`"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Auth(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Validation(err) => Some(err),
            Self::Parse { .. } => None,
            Self::InvalidChoice(_) => None,
        }
    }
}

impl From<AuthError> for SessionError {
    fn from(value: AuthError) -> Self {
        Self::Auth(value)
    }
}

impl From<StoreError> for SessionError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<RecordValidationError> for SessionError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Outcome of an academic calendar update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarUpdate {
    /// The external-calendar link path was selected; no integration exists
    /// yet, so nothing was recorded.
    LinkStub,
    /// One manually entered course/deadline pair was appended.
    ManualEntry,
}

/// In-memory working copy of the acting student's record.
pub struct Session {
    username: String,
    password: String,
    profile: Profile,
    academic_calendar: Vec<CourseDeadline>,
    grade_tracker: GradeTracker,
    task_manager: TaskManager,
    event_calendar: EventCalendar,
    financial_management: FinancialManagement,
}

impl Session {
    /// Creates a session with the claimed identity and an all-empty record.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            profile: Profile::default(),
            academic_calendar: Vec::new(),
            grade_tracker: GradeTracker::default(),
            task_manager: TaskManager::default(),
            event_calendar: EventCalendar::default(),
            financial_management: FinancialManagement::default(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn academic_calendar(&self) -> &[CourseDeadline] {
        &self.academic_calendar
    }

    pub fn grade_tracker(&self) -> &GradeTracker {
        &self.grade_tracker
    }

    pub fn task_manager(&self) -> &TaskManager {
        &self.task_manager
    }

    pub fn event_calendar(&self) -> &EventCalendar {
        &self.event_calendar
    }

    pub fn financial_management(&self) -> &FinancialManagement {
        &self.financial_management
    }

    /// Loads the store, authenticates, and replaces every in-memory
    /// sub-aggregate with the persisted record's values.
    ///
    /// Returns the profile's display name for the welcome line.
    ///
    /// # Errors
    /// - `SessionError::Store` when the backing file is absent or malformed.
    /// - `SessionError::Auth` on a credential mismatch; the session state is
    ///   left untouched.
    pub fn login(&mut self, store: &JsonStore) -> SessionResult<String> {
        let records = store.load()?;
        let record = authenticate(&records, &self.username, &self.password)?;

        self.profile = record.profile.clone();
        self.academic_calendar = record.academic_calendar.clone();
        self.grade_tracker = record.grade_tracker.clone();
        self.task_manager = record.task_manager.clone();
        self.event_calendar = record.event_calendar.clone();
        self.financial_management = record.financial_management.clone();

        info!(
            "event=login module=session status=ok username={}",
            self.username
        );
        Ok(self.profile.name.clone())
    }

    /// Fills empty profile fields, in field order: name, dob, preferences.
    ///
    /// Already-set fields are never overwritten, so repeated calls are
    /// idempotent. An invalid `dob` aborts the call after `name` has been
    /// applied; `preferences` is not reached.
    pub fn update_profile(
        &mut self,
        name: &str,
        dob: &str,
        preferences: &str,
    ) -> SessionResult<()> {
        if self.profile.name.is_empty() {
            self.profile.name = name.to_string();
        }
        if self.profile.dob.is_empty() {
            validate_dob(dob)?;
            self.profile.dob = dob.to_string();
        }
        if self.profile.preferences.is_empty() {
            self.profile.preferences = preferences.to_string();
        }
        Ok(())
    }

    /// Applies one academic calendar update.
    ///
    /// Choice `"1"` selects the external-calendar link stub (accepted, no
    /// entry recorded). Choice `"2"` appends one `{course, deadline}` entry.
    /// Any other choice fails with `SessionError::InvalidChoice`.
    pub fn update_academic_calendar(
        &mut self,
        choice: &str,
        course: &str,
        deadline: &str,
    ) -> SessionResult<CalendarUpdate> {
        match choice.trim() {
            "1" => {
                info!(
                    "event=calendar_link module=session status=stub username={}",
                    self.username
                );
                Ok(CalendarUpdate::LinkStub)
            }
            "2" => {
                self.academic_calendar.push(CourseDeadline {
                    course: course.to_string(),
                    deadline: deadline.to_string(),
                });
                Ok(CalendarUpdate::ManualEntry)
            }
            other => Err(SessionError::InvalidChoice(other.to_string())),
        }
    }

    /// Overwrites the grade tracker. `gpa` must parse as a real number;
    /// no range is enforced.
    pub fn update_grade_tracker(&mut self, gpa: &str, academic_goals: &str) -> SessionResult<()> {
        let gpa = parse_number("GPA", gpa)?;
        self.grade_tracker = GradeTracker {
            gpa,
            academic_goals: academic_goals.to_string(),
        };
        Ok(())
    }

    /// Appends exactly one task and one errand, both not completed.
    pub fn update_task_manager(&mut self, task: &str, errand: &str) {
        self.task_manager.tasks.push(TaskEntry {
            task: task.to_string(),
            completed: false,
        });
        self.task_manager.errands.push(ErrandEntry {
            errand: errand.to_string(),
            completed: false,
        });
    }

    /// Appends exactly one entry to each of the three event categories.
    pub fn update_event_calendar(&mut self, gym_entry: &str, meeting_entry: &str, other_entry: &str) {
        self.event_calendar.gym_efforts.push(gym_entry.to_string());
        self.event_calendar.meeting.push(meeting_entry.to_string());
        self.event_calendar.other.push(other_entry.to_string());
    }

    /// Overwrites both budgets and appends exactly one expense.
    ///
    /// All three numeric inputs are parsed before anything is applied, so a
    /// parse failure leaves the financial state unchanged.
    pub fn update_financial_management(
        &mut self,
        weekly_budget: &str,
        monthly_budget: &str,
        expense_item: &str,
        expense_price: &str,
    ) -> SessionResult<()> {
        let weekly = parse_number("weekly budget", weekly_budget)?;
        let monthly = parse_number("monthly budget", monthly_budget)?;
        let price = parse_number("expense price", expense_price)?;

        self.financial_management.budgets.weekly = weekly;
        self.financial_management.budgets.monthly = monthly;
        self.financial_management.expenses.push(Expense {
            item: expense_item.to_string(),
            price,
        });
        Ok(())
    }

    /// Read-only snapshot of the identity and all six sub-aggregates.
    pub fn view(&self) -> HomeView<'_> {
        HomeView { session: self }
    }

    /// Serializes the session back into the store's collection.
    ///
    /// Load-merge-save: the existing collection is read (an absent file
    /// counts as empty), only this username's entry is replaced, and the
    /// whole collection is written back. Entries for other usernames are
    /// preserved.
    pub fn backup(&self, store: &JsonStore) -> SessionResult<()> {
        let mut records = store.load_or_default()?;
        records.insert(self.username.clone(), self.to_record());
        store.save(&records)?;
        info!(
            "event=backup module=session status=ok username={}",
            self.username
        );
        Ok(())
    }

    fn to_record(&self) -> StudentRecord {
        StudentRecord {
            password: self.password.clone(),
            profile: self.profile.clone(),
            academic_calendar: self.academic_calendar.clone(),
            grade_tracker: self.grade_tracker.clone(),
            task_manager: self.task_manager.clone(),
            event_calendar: self.event_calendar.clone(),
            financial_management: self.financial_management.clone(),
        }
    }
}

fn parse_number(field: &'static str, value: &str) -> SessionResult<f64> {
    value.trim().parse::<f64>().map_err(|_| SessionError::Parse {
        field,
        value: value.to_string(),
    })
}

/// Borrowed home-screen view of a session.
pub struct HomeView<'a> {
    session: &'a Session,
}

impl Display for HomeView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let session = self.session;
        writeln!(f, "===== Student Data =====")?;
        writeln!(f, "Username: {}", session.username)?;
        writeln!(f, "Profile: {:?}", session.profile)?;
        writeln!(f, "Academic Calendar: {:?}", session.academic_calendar)?;
        writeln!(f, "Grade Tracker: {:?}", session.grade_tracker)?;
        writeln!(f, "Task Manager: {:?}", session.task_manager)?;
        writeln!(f, "Event Calendar: {:?}", session.event_calendar)?;
        write!(f, "Financial Management: {:?}", session.financial_management)
    }
}
