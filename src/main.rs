use clap::Parser;
use tracing_subscriber::EnvFilter;

use langdev::{
    catalog::Os,
    cli::{
        commands::{list::ListCommand, show::ShowCommand, CommandHandler},
        Cli, Commands,
    },
    tui, Result,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => {
            tui::run(Os::default()).await?;
        }
        Some(Commands::Browse { os }) => {
            tui::run(os.parse()?).await?;
        }
        Some(Commands::List { format }) => {
            ListCommand::new(format).execute()?;
        }
        Some(Commands::Show { id, os, format }) => {
            ShowCommand::new(id, os, format).execute()?;
        }
    }

    Ok(())
}
