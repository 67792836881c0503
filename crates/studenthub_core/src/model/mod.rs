//! Typed domain model for the student resource record.
//!
//! # Responsibility
//! - Define the canonical persisted shape of one student's record.
//! - Keep each of the six sub-aggregates as an explicit typed struct.
//!
//! # Invariants
//! - Serialized field names match the on-disk JSON schema exactly.
//! - A `Default` record is the all-empty pre-login state.

pub mod record;
