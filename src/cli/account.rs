use clap::{Args, Subcommand};
use tribu_desk::Controller;
use tribu_desk::models::{RegistrationForm, SessionState};

use super::{print_json, report};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Register a new user
    Register(RegisterArgs),
    /// Log in, optionally remembering the login for later runs
    Login {
        identifier: String,
        password: String,
        #[arg(long)]
        remember: bool,
    },
    /// Forget the remembered login
    Logout,
    /// Show the user a remembered login resolves to
    Whoami,
}

#[derive(Args, Debug, Clone)]
pub struct RegisterArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    first_surname: String,
    #[arg(long, default_value = "")]
    second_surname: String,
    #[arg(long)]
    username: String,
    #[arg(long)]
    email: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long)]
    password: String,
    #[arg(long)]
    confirm_password: String,
}

impl From<&RegisterArgs> for RegistrationForm {
    fn from(args: &RegisterArgs) -> Self {
        RegistrationForm {
            name: args.name.clone(),
            first_surname: args.first_surname.clone(),
            second_surname: args.second_surname.clone(),
            username: args.username.clone(),
            email: args.email.clone(),
            phone: args.phone.clone(),
            password: args.password.clone(),
            confirm_password: args.confirm_password.clone(),
        }
    }
}

pub fn handle(controller: &Controller, cmd: &Command) -> anyhow::Result<bool> {
    let auth = &controller.auth_service;

    match cmd {
        Command::Register(args) => Ok(report(auth.register(&args.into()))),
        Command::Login {
            identifier,
            password,
            remember,
        } => {
            let mut session = SessionState::default();
            Ok(report(auth.login(&mut session, identifier, password, *remember)))
        }
        Command::Logout => {
            let mut session = auth.restore_session();
            Ok(report(auth.logout(&mut session)))
        }
        Command::Whoami => {
            let session = auth.restore_session();
            print_json(&session)?;
            Ok(session.is_authenticated())
        }
    }
}
