//! Top-level menu selection parsing.
//!
//! # Responsibility
//! - Map console input to one of the ten numbered menu operations.
//! - Distinguish non-numeric input from out-of-range numbers, so the loop
//!   can report each accurately.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// The ten operations offered by the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    LogIn,
    UpdateProfile,
    UpdateAcademicCalendar,
    UpdateGradeTracker,
    UpdateTaskManager,
    UpdateEventCalendar,
    UpdateFinancialManagement,
    ViewHome,
    BackupData,
    Exit,
}

/// Recoverable menu-selection error; the loop reports it and re-prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    NotANumber(String),
    OutOfRange(i64),
}

impl Display for MenuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber(input) => {
                write!(f, "invalid input `{input}`; please enter a number")
            }
            Self::OutOfRange(number) => {
                write!(f, "invalid option {number}; expected 1-10")
            }
        }
    }
}

impl Error for MenuError {}

impl MenuChoice {
    /// Parses one line of console input into a menu choice.
    pub fn parse(input: &str) -> Result<Self, MenuError> {
        let trimmed = input.trim();
        let number: i64 = trimmed
            .parse()
            .map_err(|_| MenuError::NotANumber(trimmed.to_string()))?;
        match number {
            1 => Ok(Self::LogIn),
            2 => Ok(Self::UpdateProfile),
            3 => Ok(Self::UpdateAcademicCalendar),
            4 => Ok(Self::UpdateGradeTracker),
            5 => Ok(Self::UpdateTaskManager),
            6 => Ok(Self::UpdateEventCalendar),
            7 => Ok(Self::UpdateFinancialManagement),
            8 => Ok(Self::ViewHome),
            9 => Ok(Self::BackupData),
            10 => Ok(Self::Exit),
            other => Err(MenuError::OutOfRange(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MenuChoice, MenuError};

    #[test]
    fn parse_accepts_all_ten_options() {
        assert_eq!(MenuChoice::parse("1"), Ok(MenuChoice::LogIn));
        assert_eq!(MenuChoice::parse("5"), Ok(MenuChoice::UpdateTaskManager));
        assert_eq!(MenuChoice::parse(" 8 "), Ok(MenuChoice::ViewHome));
        assert_eq!(MenuChoice::parse("10"), Ok(MenuChoice::Exit));
    }

    #[test]
    fn parse_rejects_out_of_range_numbers() {
        assert_eq!(MenuChoice::parse("0"), Err(MenuError::OutOfRange(0)));
        assert_eq!(MenuChoice::parse("11"), Err(MenuError::OutOfRange(11)));
        assert_eq!(MenuChoice::parse("-3"), Err(MenuError::OutOfRange(-3)));
    }

    #[test]
    fn parse_rejects_non_numeric_input() {
        assert_eq!(
            MenuChoice::parse("abc"),
            Err(MenuError::NotANumber("abc".to_string()))
        );
        assert_eq!(
            MenuChoice::parse(""),
            Err(MenuError::NotANumber(String::new()))
        );
    }
}
