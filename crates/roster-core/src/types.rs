//! Core domain types for the Roster employment graph.
//!
//! Persons and Companies are keyed by name in the store; there are no
//! synthetic identifiers. Optional update fields are real `Option`s,
//! never empty-string sentinels.

use serde::{Deserialize, Serialize};

// ── Creation ──────────────────────────────────────────────────────

/// Everything needed to create a Person together with its employment.
///
/// The referenced company is created on the fly (with `sector`) when no
/// Company of that name exists yet; an existing company keeps its sector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPerson {
    pub name: String,
    pub age: i64,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub role: String,
    pub sector: String,
}

// ── Read views ────────────────────────────────────────────────────

/// A Company record as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub sector: String,
}

/// The employment half of a Person lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employer {
    pub company: String,
    pub sector: String,
    pub role: String,
}

/// A Person record together with its employer, if any.
///
/// The employment edge is optional: a Person can exist without one
/// (for example after its Company was deleted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonView {
    pub name: String,
    pub age: i64,
    pub email: String,
    pub phone: String,
    pub employer: Option<Employer>,
}

// ── Updates ───────────────────────────────────────────────────────

/// Field-level update set for a Person.
///
/// Each present field is written independently against the node matched by
/// its current name; `role` targets the outgoing WORKS_AT edge instead of
/// the node. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonUpdate {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
}

impl PersonUpdate {
    /// True when no field is set; callers can skip the round trip.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.role.is_none()
    }
}

// ── Projection input ──────────────────────────────────────────────

/// One employment triple, as returned by the subgraph query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentRow {
    pub person: String,
    pub company: String,
    pub role: String,
}
