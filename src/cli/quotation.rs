use anyhow::Context;
use clap::Subcommand;
use serde::Serialize;
use tribu_desk::Controller;
use tribu_desk::models::{Quotation, QuotationForm};

use super::{print_json, report};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List quotations, newest first
    List,
    /// Filter quotations by number, activity, item or recipient
    Search { query: String },
    /// Show one quotation with its total
    Show { id: i64 },
    /// Print the number the next quotation will get
    NextNumber,
    /// Add a quotation from a JSON object of form fields
    Add { json: String },
    /// Replace a quotation's fields from a JSON object. The number is kept.
    Update { id: i64, json: String },
    /// Delete a quotation. Its number is not reused.
    Delete { id: i64 },
}

#[derive(Serialize)]
struct QuotationView<'a> {
    #[serde(flatten)]
    quotation: &'a Quotation,
    total: f64,
}

impl<'a> From<&'a Quotation> for QuotationView<'a> {
    fn from(quotation: &'a Quotation) -> Self {
        Self {
            quotation,
            total: quotation.total(),
        }
    }
}

pub fn handle(controller: &Controller, cmd: &Command) -> anyhow::Result<bool> {
    let quotations = &controller.quotation_service;

    match cmd {
        Command::List => {
            let list = quotations.list()?;
            print_json(&list.iter().map(QuotationView::from).collect::<Vec<_>>())?;
            Ok(true)
        }
        Command::Search { query } => {
            let found = quotations.search(query)?;
            print_json(&found.iter().map(QuotationView::from).collect::<Vec<_>>())?;
            Ok(true)
        }
        Command::Show { id } => match quotations.get(*id)? {
            Some(quotation) => {
                print_json(&QuotationView::from(&quotation))?;
                Ok(true)
            }
            None => {
                eprintln!("Quotation {} not found.", id);
                Ok(false)
            }
        },
        Command::NextNumber => {
            println!("{}", quotations.peek_next_number()?);
            Ok(true)
        }
        Command::Add { json } => {
            let form: QuotationForm =
                serde_json::from_str(json).context("invalid quotation JSON")?;
            Ok(report(quotations.create(&form)))
        }
        Command::Update { id, json } => {
            let form: QuotationForm =
                serde_json::from_str(json).context("invalid quotation JSON")?;
            Ok(report(quotations.update(*id, &form)))
        }
        Command::Delete { id } => Ok(report(quotations.delete(*id))),
    }
}
