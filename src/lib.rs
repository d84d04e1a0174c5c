pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod errors;
pub mod output;
pub mod services;
pub mod standings;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::config::settings::AppConfig;
use crate::services::server::ServerService;
use crate::services::TournamentService;

pub fn interpret() -> Cli {
    Cli::parse()
}

fn open_service(config: &AppConfig) -> Result<TournamentService> {
    TournamentService::open(&config.store)
}

pub fn handle_init(config: &AppConfig) -> Result<()> {
    open_service(config)?;
    println!("Database ready at {}", config.store.database_path);
    Ok(())
}

pub fn handle_reset(config: &AppConfig) -> Result<()> {
    open_service(config)?.reset()?;
    println!("All players and matches removed");
    Ok(())
}

pub fn handle_register(config: &AppConfig, name: &str) -> Result<()> {
    let player = open_service(config)?.register_player(name)?;
    println!("Registered {} with id {}", player.name, player.id);
    Ok(())
}

pub fn handle_report(config: &AppConfig, winner: i32, loser: i32) -> Result<()> {
    let recorded = open_service(config)?.report_match(winner, loser)?;
    println!("Recorded match {}: {} beat {}", recorded.id, recorded.winner_id, recorded.loser_id);
    Ok(())
}

pub fn handle_count(config: &AppConfig) -> Result<()> {
    let count = open_service(config)?.count_players()?;
    println!("{count}");
    Ok(())
}

pub fn handle_standings(config: &AppConfig) -> Result<()> {
    let rows = open_service(config)?.standings()?;
    print!("{}", output::format_standings(&rows));
    Ok(())
}

pub fn handle_pairings(config: &AppConfig) -> Result<()> {
    let pairings = open_service(config)?.pairings()?;
    print!("{}", output::format_pairings(&pairings));
    Ok(())
}

pub fn handle_delete_matches(config: &AppConfig) -> Result<()> {
    let deleted = open_service(config)?.delete_matches()?;
    println!("Deleted {deleted} matches");
    Ok(())
}

pub fn handle_delete_players(config: &AppConfig) -> Result<()> {
    let deleted = open_service(config)?.delete_players()?;
    println!("Deleted {deleted} players");
    Ok(())
}

pub fn handle_serve(config: AppConfig, port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, config);
        service.run().await
    })
}
