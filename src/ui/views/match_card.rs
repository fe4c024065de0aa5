use crossterm::style::Stylize;

use crate::{
    model::summary::{MatchSummary, Outcome, RosterEntry},
    service::assets::game_mode_label,
};

/// Renders one match summary as console lines.
pub fn match_card_lines(summary: &MatchSummary) -> Vec<String> {
    let outcome = match summary.outcome {
        Outcome::Victory => format!("{}", "Victory".green().bold()),
        Outcome::Defeat => format!("{}", "Defeat".red().bold()),
    };

    let mut lines = Vec::new();
    lines.push(format!(
        "{} - {} - {}",
        game_mode_label(&summary.game_mode),
        summary.duration,
        outcome
    ));
    lines.push(format!(
        "Match {} - {}",
        summary.match_id,
        summary.played_at.format("%Y-%m-%d %H:%M UTC")
    ));
    lines.push(String::new());

    let viewer = &summary.viewer;
    lines.push(format!(
        "{} as {}",
        viewer.riot_id,
        viewer.champion_name.as_str().bold()
    ));
    lines.push(format!("  Icon:   {}", viewer.champion_icon));
    lines.push(format!(
        "  KDA: {}   CS: {}   Gold: {}   Damage: {}",
        viewer.kda, viewer.creep_score, viewer.gold_earned, viewer.damage_to_champions
    ));

    lines.push(String::new());
    lines.push("Items:".to_string());
    for icon in &viewer.item_icons {
        lines.push(format!("  {}", icon));
    }

    lines.push(String::new());
    lines.push("Blue Team:".to_string());
    lines.extend(roster_lines(&summary.blue_team));
    lines.push("Red Team:".to_string());
    lines.extend(roster_lines(&summary.red_team));

    lines
}

fn roster_lines(roster: &[RosterEntry]) -> Vec<String> {
    roster
        .iter()
        .map(|entry| format!("  - {}: {}", entry.champion_name, entry.kda))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::model::summary::{GameDuration, ViewerCard};

    fn summary(outcome: Outcome) -> MatchSummary {
        MatchSummary {
            match_id: "BR1_3108824461".to_string(),
            game_mode: "ARAM".to_string(),
            duration: GameDuration {
                minutes: 20,
                seconds: 15,
            },
            played_at: Utc.timestamp_millis_opt(1749883770849).unwrap(),
            outcome,
            viewer: ViewerCard {
                riot_id: "popcorn seller#coup".to_string(),
                champion_name: "Naafiri".to_string(),
                champion_icon: "https://example.invalid/Naafiri.png".to_string(),
                kda: "15/14/14".to_string(),
                creep_score: 22,
                gold_earned: 14827,
                damage_to_champions: 27929,
                item_icons: vec!["https://example.invalid/6692.png".to_string()],
            },
            blue_team: vec![RosterEntry {
                champion_name: "Darius".to_string(),
                kda: "10/12/16".to_string(),
            }],
            red_team: vec![RosterEntry {
                champion_name: "Zoe".to_string(),
                kda: "21/8/14".to_string(),
            }],
        }
    }

    #[test]
    fn test_card_shows_header_and_rosters() {
        let lines = match_card_lines(&summary(Outcome::Victory));

        assert!(lines[0].contains("ARAM"));
        assert!(lines[0].contains("20m 15s"));
        assert!(lines[0].contains("Victory"));
        assert!(lines.iter().any(|l| l.contains("popcorn seller#coup")));
        assert!(lines.iter().any(|l| l == "  - Darius: 10/12/16"));
        assert!(lines.iter().any(|l| l == "  - Zoe: 21/8/14"));
    }

    #[test]
    fn test_card_shows_defeat() {
        let lines = match_card_lines(&summary(Outcome::Defeat));
        assert!(lines[0].contains("Defeat"));
    }
}
