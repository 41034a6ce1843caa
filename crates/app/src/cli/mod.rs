//! Operator command-line interface.

use clap::{Parser, Subcommand};

mod token;
mod user;
mod workspace;

#[derive(Debug, Parser)]
#[command(name = "atrium-app", about = "Atrium CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Workspace(workspace::WorkspaceCommand),
    User(user::UserCommand),
    Token(token::TokenCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Workspace(command) => command.run().await,
            Commands::User(command) => command.run().await,
            Commands::Token(command) => command.run().await,
        }
    }
}
