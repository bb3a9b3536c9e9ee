//! roster-core: Shared domain types for the Roster employment graph.
//!
//! The model is small by design: two node labels (Person, Company) and one
//! relationship type (WORKS_AT, carrying a role). These types are the
//! vocabulary shared between the graph facade, the visualization projection,
//! and the console.

pub mod types;

pub use types::{Company, Employer, EmploymentRow, NewPerson, PersonUpdate, PersonView};
