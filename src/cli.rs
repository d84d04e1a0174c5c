use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Swiss-system tournament manager")]
pub struct Cli {
    /// SQLite database file (defaults to $DATABASE_PATH, then swiss_tournament.db)
    #[arg(long, global = true)]
    pub database: Option<String>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Create the tables if they do not exist
    Init,
    /// Drop all data and recreate the tables
    Reset,
    /// Register a new player
    Register {
        /// Player's full name (need not be unique)
        name: String,
    },
    /// Record the outcome of a single match
    Report {
        /// Id of the player who won
        winner: i32,
        /// Id of the player who lost
        loser: i32,
    },
    /// Print the number of registered players
    Count,
    /// Print the current standings, most wins first
    Standings,
    /// Print the pairings for the next round
    Pairings,
    /// Remove all match records
    DeleteMatches,
    /// Remove all players and their matches
    DeletePlayers,
    /// Start the HTTP server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report() {
        let cli = Cli::try_parse_from(["swiss_tournament", "report", "3", "7"]).unwrap();
        assert_eq!(cli.command, Command::Report { winner: 3, loser: 7 });
        assert!(cli.database.is_none());
    }

    #[test]
    fn test_global_database_flag() {
        let cli = Cli::try_parse_from(["swiss_tournament", "standings", "--database", "cup.db"]).unwrap();
        assert_eq!(cli.command, Command::Standings);
        assert_eq!(cli.database.as_deref(), Some("cup.db"));
    }

    #[test]
    fn test_kebab_case_subcommands() {
        let cli = Cli::try_parse_from(["swiss_tournament", "delete-matches"]).unwrap();
        assert_eq!(cli.command, Command::DeleteMatches);
    }

    #[test]
    fn test_serve_port_is_optional() {
        let cli = Cli::try_parse_from(["swiss_tournament", "serve"]).unwrap();
        assert_eq!(cli.command, Command::Serve { port: None });

        let cli = Cli::try_parse_from(["swiss_tournament", "serve", "-p", "8080"]).unwrap();
        assert_eq!(cli.command, Command::Serve { port: Some(8080) });
    }
}
