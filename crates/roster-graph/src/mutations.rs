//! Write operations for the employment graph.
//!
//! Persons and Companies are matched by name. Deletes are DETACH DELETE,
//! so incident WORKS_AT edges never outlive an endpoint. Updates that match
//! nothing are silent successes.

use neo4rs::query;

use roster_core::{NewPerson, PersonUpdate};

use crate::client::{GraphClient, GraphError};

/// Result of a `create_person` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Person node and WORKS_AT edge written.
    Created {
        /// True when the referenced Company did not exist and was created
        /// with the given sector.
        company_created: bool,
    },
    /// A Person with this name already exists; nothing was written.
    DuplicateName,
}

impl GraphClient {
    /// Create a Person, its Company (when missing), and the employment edge.
    ///
    /// The duplicate-name guard runs first and blocks the write entirely.
    /// The three writes (node, optional node, edge) run in one transaction
    /// so a failed edge write cannot leave a half-created Person behind.
    pub async fn create_person(&self, new: &NewPerson) -> Result<CreateOutcome, GraphError> {
        let exists = self
            .query_one(
                query("MATCH (p:Person {name: $name}) RETURN p.name AS name")
                    .param("name", new.name.clone()),
            )
            .await?;
        if exists.is_some() {
            tracing::debug!(name = %new.name, "Rejected duplicate Person");
            return Ok(CreateOutcome::DuplicateName);
        }

        let company_created = !self.company_exists(&new.company).await?;

        let mut txn = self.start_txn().await?;

        txn.run(
            query(
                "CREATE (p:Person {name: $name, age: $age, email: $email, phone: $phone})",
            )
            .param("name", new.name.clone())
            .param("age", new.age)
            .param("email", new.email.clone())
            .param("phone", new.phone.clone()),
        )
        .await?;

        // Existing companies keep their sector; only a fresh node gets one.
        txn.run(
            query(
                "MERGE (c:Company {name: $company})
                 ON CREATE SET c.sector = $sector",
            )
            .param("company", new.company.clone())
            .param("sector", new.sector.clone()),
        )
        .await?;

        txn.run(
            query(
                "MATCH (p:Person {name: $name}), (c:Company {name: $company})
                 CREATE (p)-[:WORKS_AT {role: $role}]->(c)",
            )
            .param("name", new.name.clone())
            .param("company", new.company.clone())
            .param("role", new.role.clone()),
        )
        .await?;

        txn.commit().await?;

        tracing::info!(
            name = %new.name,
            company = %new.company,
            role = %new.role,
            company_created,
            "Created Person"
        );
        Ok(CreateOutcome::Created { company_created })
    }

    /// Apply a field-level update set to a Person.
    ///
    /// Each present field is an independent SET against the node matched by
    /// the current `name`; `role` targets the outgoing WORKS_AT edge. A name
    /// that matches nothing is a silent success (zero rows affected).
    pub async fn update_person(
        &self,
        name: &str,
        update: &PersonUpdate,
    ) -> Result<(), GraphError> {
        if update.is_empty() {
            return Ok(());
        }

        if let Some(new_name) = &update.name {
            self.run(
                query("MATCH (p:Person {name: $name}) SET p.name = $new_name")
                    .param("name", name.to_string())
                    .param("new_name", new_name.clone()),
            )
            .await?;
        }
        // The remaining fields match on the original name: the reference
        // behavior applies every SET against the name the caller passed in.
        if let Some(age) = update.age {
            self.run(
                query("MATCH (p:Person {name: $name}) SET p.age = $age")
                    .param("name", name.to_string())
                    .param("age", age),
            )
            .await?;
        }
        if let Some(email) = &update.email {
            self.run(
                query("MATCH (p:Person {name: $name}) SET p.email = $email")
                    .param("name", name.to_string())
                    .param("email", email.clone()),
            )
            .await?;
        }
        if let Some(phone) = &update.phone {
            self.run(
                query("MATCH (p:Person {name: $name}) SET p.phone = $phone")
                    .param("name", name.to_string())
                    .param("phone", phone.clone()),
            )
            .await?;
        }
        if let Some(role) = &update.role {
            self.run(
                query(
                    "MATCH (p:Person {name: $name})-[r:WORKS_AT]->(:Company)
                     SET r.role = $role",
                )
                .param("name", name.to_string())
                .param("role", role.clone()),
            )
            .await?;
        }

        tracing::debug!(name, "Updated Person");
        Ok(())
    }

    /// Remove a Person and every relationship incident to it.
    pub async fn delete_person(&self, name: &str) -> Result<(), GraphError> {
        self.run(
            query("MATCH (p:Person {name: $name}) DETACH DELETE p")
                .param("name", name.to_string()),
        )
        .await?;
        tracing::debug!(name, "Deleted Person");
        Ok(())
    }

    /// Create or update a Company: MERGE by name, then set the sector.
    ///
    /// Idempotent; running it twice with the same sector is the same as
    /// running it once.
    pub async fn upsert_company(&self, name: &str, sector: &str) -> Result<(), GraphError> {
        self.run(
            query("MERGE (c:Company {name: $name}) SET c.sector = $sector")
                .param("name", name.to_string())
                .param("sector", sector.to_string()),
        )
        .await?;
        tracing::debug!(name, sector, "Upserted Company");
        Ok(())
    }

    /// Set the sector on an existing Company; silent no-op when not found.
    pub async fn update_company(&self, name: &str, sector: &str) -> Result<(), GraphError> {
        self.run(
            query("MATCH (c:Company {name: $name}) SET c.sector = $sector")
                .param("name", name.to_string())
                .param("sector", sector.to_string()),
        )
        .await?;
        tracing::debug!(name, sector, "Updated Company");
        Ok(())
    }

    /// Remove a Company and every relationship incident to it.
    pub async fn delete_company(&self, name: &str) -> Result<(), GraphError> {
        self.run(
            query("MATCH (c:Company {name: $name}) DETACH DELETE c")
                .param("name", name.to_string()),
        )
        .await?;
        tracing::debug!(name, "Deleted Company");
        Ok(())
    }
}
