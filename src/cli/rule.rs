use clap::Subcommand;
use tribu_desk::Controller;

use super::{print_json, report};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List rules in creation order
    List,
    /// Add a rule
    Add { content: String },
    /// Replace a rule's text
    Update { id: i64, content: String },
    /// Delete a rule
    Delete { id: i64 },
}

pub fn handle(controller: &Controller, cmd: &Command) -> anyhow::Result<bool> {
    let rules = &controller.rule_service;

    match cmd {
        Command::List => {
            print_json(&rules.list()?)?;
            Ok(true)
        }
        Command::Add { content } => Ok(report(rules.create(content))),
        Command::Update { id, content } => Ok(report(rules.update(*id, content))),
        Command::Delete { id } => Ok(report(rules.delete(*id))),
    }
}
