use anyhow::Context;
use clap::Subcommand;
use tribu_desk::Controller;
use tribu_desk::models::ContactForm;

use super::{print_json, report};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List contacts by name
    List,
    /// Filter contacts by name, surname, phone, activity or participation
    Search { query: String },
    /// Show one contact
    Show { id: i64 },
    /// Add a contact from a JSON object of form fields
    Add { json: String },
    /// Replace a contact's fields from a JSON object
    Update { id: i64, json: String },
    /// Delete a contact
    Delete { id: i64 },
}

pub fn handle(controller: &Controller, cmd: &Command) -> anyhow::Result<bool> {
    let contacts = &controller.contact_service;

    match cmd {
        Command::List => {
            print_json(&contacts.list()?)?;
            Ok(true)
        }
        Command::Search { query } => {
            print_json(&contacts.search(query)?)?;
            Ok(true)
        }
        Command::Show { id } => match contacts.get(*id)? {
            Some(contact) => {
                print_json(&contact)?;
                Ok(true)
            }
            None => {
                eprintln!("Contact {} not found.", id);
                Ok(false)
            }
        },
        Command::Add { json } => {
            let form: ContactForm = serde_json::from_str(json).context("invalid contact JSON")?;
            Ok(report(contacts.create(&form)))
        }
        Command::Update { id, json } => {
            let form: ContactForm = serde_json::from_str(json).context("invalid contact JSON")?;
            Ok(report(contacts.update(*id, &form)))
        }
        Command::Delete { id } => Ok(report(contacts.delete(*id))),
    }
}
