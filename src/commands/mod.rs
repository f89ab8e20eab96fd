pub mod init;
pub mod projects;
pub mod report;
pub mod users;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Prepare a worktime and vacation report")]
    Report(report::ReportArgs),
    #[command(about = "List configured users")]
    Users,
    #[command(about = "List configured projects")]
    Projects,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Report(args) => report::cmd(args).await,
            Commands::Users => users::cmd(),
            Commands::Projects => projects::cmd(),
        }
    }
}
