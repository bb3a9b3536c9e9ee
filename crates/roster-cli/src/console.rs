//! The interactive text menu driving the graph facade.
//!
//! Strictly sequential: one prompt, one operation, one response. Duplicate
//! creates and missing entities print messages and return to the menu;
//! connection and query faults propagate out and end the process.

use std::io::{self, Write};
use std::path::Path;

use roster_core::{NewPerson, PersonUpdate};
use roster_graph::{CreateOutcome, GraphClient};
use roster_viz::{render_dot, render_summary, EmploymentGraph};

/// Run the menu loop until the user picks Exit or stdin closes.
pub async fn run(client: &GraphClient) -> anyhow::Result<()> {
    loop {
        println!();
        println!("Main menu");
        println!("1. Create a person or company");
        println!("2. Find a person or company");
        println!("3. Update a person or company");
        println!("4. Delete a person or company");
        println!("5. Visualize the employment graph");
        println!("0. Exit");

        let choice = match prompt("Choose an option: ") {
            Ok(choice) => choice,
            // Closed stdin: nothing can drive the menu anymore, so leave
            // the loop instead of spinning on empty reads.
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                println!("Bye.");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        match choice.as_str() {
            "0" => {
                println!("Bye.");
                return Ok(());
            }
            "1" => create_menu(client).await?,
            "2" => find_menu(client).await?,
            "3" => update_menu(client).await?,
            "4" => delete_menu(client).await?,
            "5" => visualize(client, Path::new("employment.dot")).await?,
            _ => println!("Invalid option."),
        }
    }
}

async fn create_menu(client: &GraphClient) -> anyhow::Result<()> {
    match entity_choice("Create")?.as_str() {
        "1" => {
            let name = prompt("Person name: ")?;
            let Some(age) = parse_age(&prompt("Age: ")?) else {
                println!("Invalid age, expected a whole number.");
                return Ok(());
            };
            let new = NewPerson {
                name,
                age,
                email: prompt("Email: ")?,
                phone: prompt("Phone: ")?,
                company: prompt("Company name: ")?,
                role: prompt("Role: ")?,
                sector: prompt("Company sector: ")?,
            };

            match client.create_person(&new).await? {
                CreateOutcome::Created { company_created } => {
                    if company_created {
                        println!("Created company {} in sector {}.", new.company, new.sector);
                    }
                    println!(
                        "Created person {} at {} as {}.",
                        new.name, new.company, new.role
                    );
                }
                CreateOutcome::DuplicateName => {
                    println!("Error: a person named {} already exists.", new.name);
                }
            }
        }
        "2" => {
            let name = prompt("Company name: ")?;
            let sector = prompt("Sector: ")?;
            client.upsert_company(&name, &sector).await?;
            println!("Company {name} set to sector {sector}.");
        }
        _ => println!("Invalid option."),
    }
    Ok(())
}

async fn find_menu(client: &GraphClient) -> anyhow::Result<()> {
    match entity_choice("Find")?.as_str() {
        "1" => {
            let name = prompt("Person name: ")?;
            match client.find_person(&name).await? {
                Some(person) => {
                    println!("Name: {}", person.name);
                    println!("Age: {}", person.age);
                    println!("Email: {}", person.email);
                    println!("Phone: {}", person.phone);
                    match person.employer {
                        Some(e) => println!(
                            "Works at {} (sector {}) as {}.",
                            e.company, e.sector, e.role
                        ),
                        None => println!("No company associated."),
                    }
                }
                None => println!("Person not found."),
            }
        }
        "2" => {
            let name = prompt("Company name: ")?;
            match client.find_company(&name).await? {
                Some(company) => {
                    println!("Company: {}", company.name);
                    println!("Sector: {}", company.sector);
                }
                None => println!("Company not found."),
            }
        }
        _ => println!("Invalid option."),
    }
    Ok(())
}

async fn update_menu(client: &GraphClient) -> anyhow::Result<()> {
    match entity_choice("Update")?.as_str() {
        "1" => {
            let name = prompt("Person to update: ")?;
            let age = match prompt_optional("New age (blank to keep): ")? {
                Some(raw) => match parse_age(&raw) {
                    Some(age) => Some(age),
                    None => {
                        println!("Invalid age, expected a whole number.");
                        return Ok(());
                    }
                },
                None => None,
            };
            let update = PersonUpdate {
                name: prompt_optional("New name (blank to keep): ")?,
                age,
                email: prompt_optional("New email (blank to keep): ")?,
                phone: prompt_optional("New phone (blank to keep): ")?,
                role: prompt_optional("New role (blank to keep): ")?,
            };

            client.update_person(&name, &update).await?;
            println!("Person {name} updated.");
        }
        "2" => {
            let name = prompt("Company name: ")?;
            let sector = prompt("New sector: ")?;
            client.update_company(&name, &sector).await?;
            println!("Company {name} updated to sector {sector}.");
        }
        _ => println!("Invalid option."),
    }
    Ok(())
}

async fn delete_menu(client: &GraphClient) -> anyhow::Result<()> {
    match entity_choice("Delete")?.as_str() {
        "1" => {
            let name = prompt("Person name: ")?;
            client.delete_person(&name).await?;
            println!("Person {name} deleted.");
        }
        "2" => {
            let name = prompt("Company name: ")?;
            client.delete_company(&name).await?;
            println!("Company {name} deleted.");
        }
        _ => println!("Invalid option."),
    }
    Ok(())
}

/// Fetch the employment subgraph, print the summary, and write the DOT file.
pub async fn visualize(client: &GraphClient, output: &Path) -> anyhow::Result<()> {
    let rows = client.employment_rows().await?;
    let graph = EmploymentGraph::from_rows(rows);

    println!("{}", render_summary(&graph));
    if graph.is_empty() {
        return Ok(());
    }

    std::fs::write(output, render_dot(&graph))?;
    tracing::info!(
        path = %output.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Wrote DOT file"
    );
    println!(
        "Wrote {}. Render it with: fdp -Tpng {} -o employment.png",
        output.display(),
        output.display()
    );
    Ok(())
}

fn entity_choice(verb: &str) -> io::Result<String> {
    println!();
    println!("{verb}:");
    println!("1. Person");
    println!("2. Company");
    prompt("Choose an option: ")
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    read_trimmed(&mut io::stdin().lock())
}

/// Read one line; a zero-byte read (stdin closed) is `UnexpectedEof` so
/// callers terminate instead of looping over endless empty input.
fn read_trimmed(reader: &mut impl io::BufRead) -> io::Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line.trim().to_string())
}

/// Prompt for an optional field: empty input means "leave unchanged".
fn prompt_optional(label: &str) -> io::Result<Option<String>> {
    Ok(optional(&prompt(label)?))
}

fn optional(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_age(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}
