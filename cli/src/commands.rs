pub mod check;
pub mod host;
pub mod show;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hwtree")]
#[command(about = "Hardware inventory printed as a tree.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Reduce output, repeat for less
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the sample network
    #[command(alias = "s")]
    Show,
    /// Print a single host of the sample network
    #[command(alias = "h")]
    Host { name: String },
    /// Build, copy and mutate the sample network and verify every tree
    #[command(alias = "c")]
    Check,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
