use clap::{Args, Subcommand};

mod create;
mod deactivate;

#[derive(Debug, Args)]
pub(crate) struct WorkspaceCommand {
    #[command(subcommand)]
    command: WorkspaceSubcommand,
}

#[derive(Debug, Subcommand)]
enum WorkspaceSubcommand {
    Create(create::CreateWorkspaceArgs),
    Deactivate(deactivate::DeactivateWorkspaceArgs),
}

impl WorkspaceCommand {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            WorkspaceSubcommand::Create(args) => args.run().await,
            WorkspaceSubcommand::Deactivate(args) => args.run().await,
        }
    }
}
