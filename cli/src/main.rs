mod commands;
mod terminal;

use commands::{CommandLine, Commands, check, host, show};
use hwtree_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
    };

    logging::init_logging(&cfg);
    print::banner(&cfg);

    match commands.command {
        Commands::Show => show::show(&cfg),
        Commands::Host { name } => host::host(&name, &cfg),
        Commands::Check => check::check(&cfg),
    }
}
