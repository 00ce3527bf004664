use clap::{Parser, Subcommand};

/// LangDev: install guides for languages and developer tools
#[derive(Parser)]
#[command(name = "langdev")]
#[command(version = "0.1.0")]
#[command(about = "Install guides for languages and developer tools, in your terminal")]
#[command(
    long_about = "LangDev ships a built-in catalog of languages and developer tools with per-OS install commands. Run with no arguments for the interactive browser, or use `list` and `show` for scripted access."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive catalog browser (the default)
    Browse {
        /// Operating system to start on (windows, mac or linux)
        #[arg(long, default_value = "mac")]
        os: String,
    },

    /// Print the catalog grouped by category
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Print one entry's install instructions
    Show {
        /// Entry id (e.g. rust, python, docker)
        id: String,

        /// Operating system to print the install command for
        #[arg(long, default_value = "mac")]
        os: String,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
