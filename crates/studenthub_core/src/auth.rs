//! Credential check against the loaded record collection.
//!
//! # Responsibility
//! - Match a claimed username/password pair against stored records.
//! - Report failure as a typed error; never terminate the process from
//!   inside the library. The caller decides how to react.
//!
//! # Invariants
//! - Both username and password require exact equality.
//! - A failed check performs no mutation anywhere.

use crate::model::record::StudentRecord;
use crate::store::RecordMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Authentication failure. Fatal to the session in the current design.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No record exists under the claimed username.
    UnknownUser(String),
    /// The record exists but the password does not match.
    PasswordMismatch(String),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownUser(username) => write!(f, "unknown username `{username}`"),
            Self::PasswordMismatch(username) => {
                write!(f, "password mismatch for `{username}`")
            }
        }
    }
}

impl Error for AuthError {}

/// Returns the matching record for an exact username/password match.
pub fn authenticate<'a>(
    records: &'a RecordMap,
    username: &str,
    password: &str,
) -> Result<&'a StudentRecord, AuthError> {
    let record = records
        .get(username)
        .ok_or_else(|| AuthError::UnknownUser(username.to_string()))?;
    if record.password != password {
        return Err(AuthError::PasswordMismatch(username.to_string()));
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::{authenticate, AuthError};
    use crate::model::record::StudentRecord;
    use crate::store::RecordMap;

    fn seeded_records() -> RecordMap {
        let mut records = RecordMap::new();
        records.insert(
            "amina".to_string(),
            StudentRecord {
                password: "terp123".to_string(),
                ..StudentRecord::default()
            },
        );
        records
    }

    #[test]
    fn exact_match_returns_record() {
        let records = seeded_records();
        let record = authenticate(&records, "amina", "terp123").unwrap();
        assert_eq!(record.password, "terp123");
    }

    #[test]
    fn unknown_username_is_rejected() {
        let records = seeded_records();
        assert_eq!(
            authenticate(&records, "nobody", "terp123"),
            Err(AuthError::UnknownUser("nobody".to_string()))
        );
    }

    #[test]
    fn wrong_password_is_rejected() {
        let records = seeded_records();
        assert_eq!(
            authenticate(&records, "amina", "TERP123"),
            Err(AuthError::PasswordMismatch("amina".to_string()))
        );
    }
}
