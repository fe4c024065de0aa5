use chrono::{DateTime, Utc};

use super::ids::{ItemId, Puuid, TeamId};

/// One completed game, as delivered by the match data provider.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    pub match_id: String,
    pub game_mode: String,
    pub duration_secs: i64,
    pub played_at: DateTime<Utc>,
    pub participants: Vec<ParticipantRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantRecord {
    pub puuid: Puuid,
    pub champion_name: String,
    pub kills: u16,
    pub deaths: u16,
    pub assists: u16,
    pub win: bool,
    pub team: TeamId,
    /// Extended stats, present for the viewing player.
    pub details: Option<ViewerDetails>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerDetails {
    pub champion_id: u32,
    pub items: Vec<ItemId>,
    pub summoner_spells: (u16, u16),
    pub game_name: String,
    pub tag_line: String,
    pub gold_earned: u32,
    pub damage_to_champions: u32,
    pub minions_killed: u16,
}
