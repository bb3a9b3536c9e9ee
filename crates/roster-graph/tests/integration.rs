//! Integration tests for roster-graph against a live Neo4j instance.
//!
//! Run with: cargo test --package roster-graph --test integration -- --ignored
//!
//! Skipped automatically if Neo4j is not available. Entity names carry a
//! random suffix so parallel runs cannot collide; every test cleans up the
//! names it created.

use roster_core::{NewPerson, PersonUpdate};
use roster_graph::{CreateOutcome, GraphClient, GraphConfig};

async fn connect_or_skip() -> Option<GraphClient> {
    let config = GraphConfig::default();
    match GraphClient::connect(&config).await {
        Ok(client) => Some(client),
        Err(e) => {
            eprintln!("Skipping integration test (Neo4j not available): {e}");
            None
        }
    }
}

/// A unique per-test suffix so concurrent runs never share entities.
fn suffix() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

fn make_person(suffix: &str) -> NewPerson {
    NewPerson {
        name: format!("Ana-{suffix}"),
        age: 30,
        email: "a@x.com".to_string(),
        phone: "111".to_string(),
        company: format!("Acme-{suffix}"),
        role: "Engineer".to_string(),
        sector: "Tech".to_string(),
    }
}

async fn cleanup(client: &GraphClient, suffix: &str) {
    let q = neo4rs::query(
        "MATCH (n) WHERE n.name ENDS WITH $suffix DETACH DELETE n",
    )
    .param("suffix", format!("-{suffix}"));
    let _ = client.run(q).await;
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_create_and_find_person() {
    let Some(client) = connect_or_skip().await else {
        return;
    };
    let sfx = suffix();
    let new = make_person(&sfx);

    let outcome = client.create_person(&new).await.unwrap();
    assert_eq!(
        outcome,
        CreateOutcome::Created {
            company_created: true
        }
    );

    let view = client.find_person(&new.name).await.unwrap().unwrap();
    assert_eq!(view.name, new.name);
    assert_eq!(view.age, 30);
    assert_eq!(view.email, "a@x.com");
    assert_eq!(view.phone, "111");

    let employer = view.employer.unwrap();
    assert_eq!(employer.company, new.company);
    assert_eq!(employer.role, "Engineer");
    assert_eq!(employer.sector, "Tech");

    let company = client.find_company(&new.company).await.unwrap().unwrap();
    assert_eq!(company.sector, "Tech");

    cleanup(&client, &sfx).await;
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_duplicate_create_is_rejected() {
    let Some(client) = connect_or_skip().await else {
        return;
    };
    let sfx = suffix();
    let new = make_person(&sfx);

    client.create_person(&new).await.unwrap();

    // Second create with the same name but different everything else.
    let mut second = new.clone();
    second.age = 99;
    second.company = format!("Other-{sfx}");
    second.sector = "Finance".to_string();
    let outcome = client.create_person(&second).await.unwrap();
    assert_eq!(outcome, CreateOutcome::DuplicateName);

    // Store unchanged: original fields intact, no second company created.
    let view = client.find_person(&new.name).await.unwrap().unwrap();
    assert_eq!(view.age, 30);
    assert!(client
        .find_company(&second.company)
        .await
        .unwrap()
        .is_none());

    cleanup(&client, &sfx).await;
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_existing_company_is_reused() {
    let Some(client) = connect_or_skip().await else {
        return;
    };
    let sfx = suffix();
    let first = make_person(&sfx);
    client.create_person(&first).await.unwrap();

    // Second person at the same company, claiming a different sector.
    let mut second = make_person(&sfx);
    second.name = format!("Bruno-{sfx}");
    second.role = "Designer".to_string();
    second.sector = "Finance".to_string();
    let outcome = client.create_person(&second).await.unwrap();
    assert_eq!(
        outcome,
        CreateOutcome::Created {
            company_created: false
        }
    );

    // The existing sector wins.
    let company = client.find_company(&first.company).await.unwrap().unwrap();
    assert_eq!(company.sector, "Tech");

    cleanup(&client, &sfx).await;
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_field_level_person_update() {
    let Some(client) = connect_or_skip().await else {
        return;
    };
    let sfx = suffix();
    let new = make_person(&sfx);
    client.create_person(&new).await.unwrap();

    let update = PersonUpdate {
        age: Some(31),
        ..Default::default()
    };
    client.update_person(&new.name, &update).await.unwrap();

    // Only age changed.
    let view = client.find_person(&new.name).await.unwrap().unwrap();
    assert_eq!(view.age, 31);
    assert_eq!(view.email, "a@x.com");
    assert_eq!(view.phone, "111");
    assert_eq!(view.employer.unwrap().role, "Engineer");

    cleanup(&client, &sfx).await;
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_role_update_targets_the_edge() {
    let Some(client) = connect_or_skip().await else {
        return;
    };
    let sfx = suffix();
    let new = make_person(&sfx);
    client.create_person(&new).await.unwrap();

    let update = PersonUpdate {
        role: Some("Staff Engineer".to_string()),
        ..Default::default()
    };
    client.update_person(&new.name, &update).await.unwrap();

    let view = client.find_person(&new.name).await.unwrap().unwrap();
    assert_eq!(view.employer.unwrap().role, "Staff Engineer");

    cleanup(&client, &sfx).await;
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_update_missing_person_is_silent() {
    let Some(client) = connect_or_skip().await else {
        return;
    };
    let sfx = suffix();

    let update = PersonUpdate {
        age: Some(50),
        ..Default::default()
    };
    client
        .update_person(&format!("Nobody-{sfx}"), &update)
        .await
        .unwrap();
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_delete_person_keeps_company() {
    let Some(client) = connect_or_skip().await else {
        return;
    };
    let sfx = suffix();
    let new = make_person(&sfx);
    client.create_person(&new).await.unwrap();

    client.delete_person(&new.name).await.unwrap();

    assert!(client.find_person(&new.name).await.unwrap().is_none());
    // The Company survives, minus the edge.
    assert!(client.find_company(&new.company).await.unwrap().is_some());
    assert!(client.employment_rows().await.unwrap().iter().all(|row| {
        row.person != new.name
    }));

    cleanup(&client, &sfx).await;
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_delete_missing_person_is_silent() {
    let Some(client) = connect_or_skip().await else {
        return;
    };
    let sfx = suffix();
    client.delete_person(&format!("Nobody-{sfx}")).await.unwrap();
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_update_company_is_idempotent() {
    let Some(client) = connect_or_skip().await else {
        return;
    };
    let sfx = suffix();
    let name = format!("Acme-{sfx}");
    client.upsert_company(&name, "Tech").await.unwrap();

    client.update_company(&name, "Fintech").await.unwrap();
    client.update_company(&name, "Fintech").await.unwrap();

    let company = client.find_company(&name).await.unwrap().unwrap();
    assert_eq!(company.sector, "Fintech");
    assert!(client.company_exists(&name).await.unwrap());

    cleanup(&client, &sfx).await;
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_delete_company_detaches_employment() {
    let Some(client) = connect_or_skip().await else {
        return;
    };
    let sfx = suffix();
    let new = make_person(&sfx);
    client.create_person(&new).await.unwrap();

    client.delete_company(&new.company).await.unwrap();

    // The Person survives without an employer.
    let view = client.find_person(&new.name).await.unwrap().unwrap();
    assert!(view.employer.is_none());

    cleanup(&client, &sfx).await;
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_employment_rows_cover_all_edges() {
    let Some(client) = connect_or_skip().await else {
        return;
    };
    let sfx = suffix();
    let first = make_person(&sfx);
    let mut second = make_person(&sfx);
    second.name = format!("Bruno-{sfx}");
    second.role = "Designer".to_string();

    client.create_person(&first).await.unwrap();
    client.create_person(&second).await.unwrap();

    let rows = client.employment_rows().await.unwrap();
    let ours: Vec<_> = rows
        .iter()
        .filter(|r| r.company == first.company)
        .collect();
    assert_eq!(ours.len(), 2);
    assert!(ours.iter().any(|r| r.person == first.name && r.role == "Engineer"));
    assert!(ours.iter().any(|r| r.person == second.name && r.role == "Designer"));

    cleanup(&client, &sfx).await;
}
