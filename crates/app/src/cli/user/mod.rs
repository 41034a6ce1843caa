use clap::{Args, Subcommand};

mod create;

#[derive(Debug, Args)]
pub(crate) struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Debug, Subcommand)]
enum UserSubcommand {
    Create(create::CreateUserArgs),
}

impl UserCommand {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            UserSubcommand::Create(args) => args.run().await,
        }
    }
}
