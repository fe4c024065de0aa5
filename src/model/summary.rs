use std::fmt::Display;

use chrono::{DateTime, Utc};

/// Display-ready summary of one match, seen from the viewer's side.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSummary {
    pub match_id: String,
    pub game_mode: String,
    pub duration: GameDuration,
    pub played_at: DateTime<Utc>,
    pub outcome: Outcome,
    pub viewer: ViewerCard,
    pub blue_team: Vec<RosterEntry>,
    pub red_team: Vec<RosterEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameDuration {
    pub minutes: i64,
    pub seconds: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Victory,
    Defeat,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerCard {
    pub riot_id: String,
    pub champion_name: String,
    pub champion_icon: String,
    pub kda: String,
    pub creep_score: u16,
    pub gold_earned: u32,
    pub damage_to_champions: u32,
    pub item_icons: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub champion_name: String,
    pub kda: String,
}

impl Outcome {
    pub fn from_win(win: bool) -> Self {
        match win {
            true => Outcome::Victory,
            false => Outcome::Defeat,
        }
    }
}

impl Display for GameDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}m {}s", self.minutes, self.seconds)
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Victory => write!(f, "Victory"),
            Outcome::Defeat => write!(f, "Defeat"),
        }
    }
}
