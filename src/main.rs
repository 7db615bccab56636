mod commands;

use anyhow::Result;
use clap::Parser;

use patterns::cli::{Cli, Commands, ConfigCommands};
use patterns::{logging, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Run {
        demos: Vec::new(),
        no_pause: false,
    });

    match command {
        Commands::Run { demos, no_pause } => {
            let config = Config::load(cli.config.as_deref())?;
            commands::run::handle(demos, no_pause, &config)
        }
        Commands::List => {
            commands::list::handle();
            Ok(())
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                let config = Config::load(cli.config.as_deref())?;
                commands::config::handle_show(&config)
            }
            ConfigCommands::Path => commands::config::handle_path(),
        },
    }
}
