use colored::Colorize;

use crate::standings::{Pairing, StandingRow};

pub fn format_standings(rows: &[StandingRow]) -> String {
    let mut out = format!(
        "{}\n",
        format!("{:>4}  {:>6}  {:<30} {:>5} {:>7}", "Rank", "Id", "Name", "Wins", "Played").bold()
    );
    for (i, row) in rows.iter().enumerate() {
        out.push_str(&format!(
            "{:>4}  {:>6}  {:<30} {:>5} {:>7}\n",
            i + 1,
            row.id,
            row.name,
            row.wins,
            row.matches_played
        ));
    }
    out
}

pub fn format_pairings(pairings: &[Pairing]) -> String {
    let mut out = format!(
        "{}\n",
        format!("{:>5}  {:<30} {:<30}", "Table", "Player 1", "Player 2").bold()
    );
    for (i, pairing) in pairings.iter().enumerate() {
        let first = format!("{} (#{})", pairing.name1, pairing.id1);
        let second = format!("{} (#{})", pairing.name2, pairing.id2);
        out.push_str(&format!("{:>5}  {:<30} {:<30}\n", i + 1, first, second));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standings_table_lists_every_row() {
        colored::control::set_override(false);
        let rows = vec![
            StandingRow { id: 1, name: "A".to_string(), wins: 2, matches_played: 2 },
            StandingRow { id: 3, name: "C".to_string(), wins: 1, matches_played: 2 },
        ];

        let table = format_standings(&rows);

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Wins"));
        assert!(lines[1].starts_with("   1       1  A"));
        assert!(lines[2].ends_with("1       2"));
    }

    #[test]
    fn test_pairings_table_names_both_players() {
        colored::control::set_override(false);
        let pairings = vec![Pairing {
            id1: 1,
            name1: "A".to_string(),
            id2: 3,
            name2: "C".to_string(),
        }];

        let table = format_pairings(&pairings);

        assert!(table.contains("A (#1)"));
        assert!(table.contains("C (#3)"));
    }
}
