//! roster-graph: Neo4j facade for the Roster employment graph.
//!
//! This crate is the single mutation point for the store. All reads and
//! writes flow through [`GraphClient`], which translates CRUD intents into
//! parameterized Cypher and shapes result rows into the domain types from
//! `roster-core`.

pub mod client;
pub mod mutations;
pub mod queries;

pub use client::{GraphClient, GraphConfig, GraphError};
pub use mutations::CreateOutcome;
