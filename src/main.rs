use anyhow::Result;

use swiss_tournament::cli::{Cli, Command};
use swiss_tournament::config::settings::AppConfig;
use swiss_tournament::{
    handle_count, handle_delete_matches, handle_delete_players, handle_init, handle_pairings,
    handle_register, handle_report, handle_reset, handle_serve, handle_standings, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(cli)
}

fn execute_command(cli: Cli) -> Result<()> {
    let config = AppConfig::new().with_database_path(cli.database.as_deref());

    match cli.command {
        Command::Init => handle_init(&config),
        Command::Reset => handle_reset(&config),
        Command::Register { name } => handle_register(&config, &name),
        Command::Report { winner, loser } => handle_report(&config, winner, loser),
        Command::Count => handle_count(&config),
        Command::Standings => handle_standings(&config),
        Command::Pairings => handle_pairings(&config),
        Command::DeleteMatches => handle_delete_matches(&config),
        Command::DeletePlayers => handle_delete_players(&config),
        Command::Serve { port } => {
            let port = port.unwrap_or(config.server.port);
            handle_serve(config, port)
        }
    }
}
