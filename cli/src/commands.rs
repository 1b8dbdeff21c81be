pub mod info;
pub mod list;

use clap::{Parser, Subcommand};
use roster_common::config::{Config, DEFAULT_BASE_URL, DEFAULT_ENDPOINT_PATH};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "A tiny employee directory.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Scheme and host serving the employee list
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Path of the employee endpoint below the base URL
    #[arg(long = "path", global = true, default_value = DEFAULT_ENDPOINT_PATH)]
    pub endpoint_path: String,

    /// Reduce output; repeat for rows only
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Fetch the directory and list every employee
    #[command(alias = "l")]
    List,
    /// Show the endpoint this build talks to
    #[command(alias = "i")]
    Info,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            base_url: self.base_url.clone(),
            endpoint_path: self.endpoint_path.clone(),
            no_banner: self.no_banner,
            quiet: self.quiet.min(2),
        }
    }

    /// `roster` with no subcommand lists.
    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::List)
    }
}
