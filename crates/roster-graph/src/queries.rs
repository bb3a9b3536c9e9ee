//! Read operations for the employment graph.
//!
//! Lookups return `Option`: a missing Person or Company is a normal
//! outcome, not an error. Result rows are shaped into the domain types
//! from `roster-core`.

use neo4rs::query;

use roster_core::{Company, Employer, EmploymentRow, PersonView};

use crate::client::{GraphClient, GraphError};

impl GraphClient {
    /// Look up a Person by name, together with its employer, if any.
    ///
    /// The employment edge is matched optionally; a Person without one
    /// comes back with `employer: None`.
    pub async fn find_person(&self, name: &str) -> Result<Option<PersonView>, GraphError> {
        let q = query(
            "MATCH (p:Person {name: $name})
             OPTIONAL MATCH (p)-[r:WORKS_AT]->(c:Company)
             RETURN p, c, r.role AS role",
        )
        .param("name", name.to_string());

        let Some(row) = self.query_one(q).await? else {
            return Ok(None);
        };

        let person: neo4rs::Node = row
            .get("p")
            .map_err(|e| GraphError::Row(format!("missing person column: {e}")))?;

        // c and role are null when the person has no employment edge.
        let employer = match row.get::<neo4rs::Node>("c") {
            Ok(company) => Some(Employer {
                company: company.get::<String>("name").unwrap_or_default(),
                sector: company.get::<String>("sector").unwrap_or_default(),
                role: row.get::<String>("role").unwrap_or_default(),
            }),
            Err(_) => None,
        };

        Ok(Some(PersonView {
            name: person.get::<String>("name").unwrap_or_default(),
            age: person.get::<i64>("age").unwrap_or_default(),
            email: person.get::<String>("email").unwrap_or_default(),
            phone: person.get::<String>("phone").unwrap_or_default(),
            employer,
        }))
    }

    /// Look up a Company by name.
    pub async fn find_company(&self, name: &str) -> Result<Option<Company>, GraphError> {
        let q = query("MATCH (c:Company {name: $name}) RETURN c")
            .param("name", name.to_string());

        match self.query_one(q).await? {
            Some(row) => {
                let company: neo4rs::Node = row
                    .get("c")
                    .map_err(|e| GraphError::Row(format!("missing company column: {e}")))?;
                Ok(Some(Company {
                    name: company.get::<String>("name").unwrap_or_default(),
                    sector: company.get::<String>("sector").unwrap_or_default(),
                }))
            }
            None => Ok(None),
        }
    }

    /// True when a Company with this name exists.
    pub async fn company_exists(&self, name: &str) -> Result<bool, GraphError> {
        let q = query("MATCH (c:Company {name: $name}) RETURN c.name AS name")
            .param("name", name.to_string());
        Ok(self.query_one(q).await?.is_some())
    }

    /// Fetch every employment triple for the visualization projection.
    ///
    /// Read-only; one row per WORKS_AT edge.
    pub async fn employment_rows(&self) -> Result<Vec<EmploymentRow>, GraphError> {
        let q = query(
            "MATCH (p:Person)-[r:WORKS_AT]->(c:Company)
             RETURN p.name AS person, c.name AS company, r.role AS role",
        );

        let rows = self.query_rows(q).await?;
        let mut results = Vec::with_capacity(rows.len());
        for row in rows {
            results.push(EmploymentRow {
                person: row
                    .get::<String>("person")
                    .map_err(|e| GraphError::Row(format!("missing person name: {e}")))?,
                company: row
                    .get::<String>("company")
                    .map_err(|e| GraphError::Row(format!("missing company name: {e}")))?,
                role: row.get::<String>("role").unwrap_or_default(),
            });
        }

        tracing::debug!(edges = results.len(), "Fetched employment subgraph");
        Ok(results)
    }
}
