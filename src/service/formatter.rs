use std::fmt::Display;

use crate::model::{
    ids::{ItemId, Puuid, TeamId},
    matches::{MatchRecord, ParticipantRecord},
    summary::{GameDuration, MatchSummary, Outcome, RosterEntry, ViewerCard},
};

use super::assets::IconSet;

pub type SummaryResult<T> = Result<T, SummaryError>;

/// Finds the viewing player among the participants.
pub fn locate_viewer<'a>(
    record: &'a MatchRecord,
    viewer: &Puuid,
) -> SummaryResult<&'a ParticipantRecord> {
    record
        .participants
        .iter()
        .find(|p| &p.puuid == viewer)
        .ok_or(SummaryError::ViewerNotFound(viewer.clone()))
}

/// Splits a duration in seconds into whole minutes and leftover seconds.
pub fn format_duration(duration_secs: i64) -> SummaryResult<GameDuration> {
    if duration_secs < 0 {
        return Err(RecordFault::NegativeDuration(duration_secs).into());
    }
    Ok(GameDuration {
        minutes: duration_secs / 60,
        seconds: duration_secs % 60,
    })
}

pub fn format_kda(kills: u16, deaths: u16, assists: u16) -> String {
    format!("{}/{}/{}", kills, deaths, assists)
}

/// Icon URLs for the non-empty item slots, in inventory order.
pub fn build_item_urls(items: &[ItemId], icons: &IconSet) -> Vec<String> {
    items
        .iter()
        .filter(|item| !item.is_empty_slot())
        .map(|item| icons.item_icon(*item))
        .collect()
}

/// Splits the participants into the blue and red side, preserving the
/// original relative order within each team.
pub fn partition_teams(
    participants: &[ParticipantRecord],
) -> SummaryResult<(Vec<&ParticipantRecord>, Vec<&ParticipantRecord>)> {
    let mut blue = Vec::new();
    let mut red = Vec::new();

    for participant in participants {
        match participant.team {
            TeamId::BLUE => blue.push(participant),
            TeamId::RED => red.push(participant),
            other => return Err(RecordFault::UnknownTeam(other).into()),
        }
    }

    Ok((blue, red))
}

/// Builds the display-ready summary for one match and one viewing player.
///
/// Pure and stateless: the same record and viewer always produce the same
/// summary, and a failure here never affects other matches in a batch.
pub fn summarize(
    record: &MatchRecord,
    viewer: &Puuid,
    icons: &IconSet,
) -> SummaryResult<MatchSummary> {
    if record.participants.len() % 2 != 0 {
        return Err(RecordFault::OddParticipantCount(record.participants.len()).into());
    }

    let (blue, red) = partition_teams(&record.participants)?;
    if blue.len() != red.len() {
        return Err(RecordFault::LopsidedTeams {
            blue: blue.len(),
            red: red.len(),
        }
        .into());
    }
    for (side, team) in [(&blue, TeamId::BLUE), (&red, TeamId::RED)] {
        if side.windows(2).any(|pair| pair[0].win != pair[1].win) {
            return Err(RecordFault::MixedTeamOutcome(team).into());
        }
    }

    let viewer_entry = locate_viewer(record, viewer)?;
    let details = viewer_entry
        .details
        .as_ref()
        .ok_or(RecordFault::MissingViewerDetails(viewer.clone()))?;

    Ok(MatchSummary {
        match_id: record.match_id.clone(),
        game_mode: record.game_mode.clone(),
        duration: format_duration(record.duration_secs)?,
        played_at: record.played_at,
        outcome: Outcome::from_win(viewer_entry.win),
        viewer: ViewerCard {
            riot_id: format!("{}#{}", details.game_name, details.tag_line),
            champion_name: viewer_entry.champion_name.clone(),
            champion_icon: icons.champion_icon(&viewer_entry.champion_name),
            kda: format_kda(viewer_entry.kills, viewer_entry.deaths, viewer_entry.assists),
            creep_score: details.minions_killed,
            gold_earned: details.gold_earned,
            damage_to_champions: details.damage_to_champions,
            item_icons: build_item_urls(&details.items, icons),
        },
        blue_team: roster(&blue),
        red_team: roster(&red),
    })
}

fn roster(team: &[&ParticipantRecord]) -> Vec<RosterEntry> {
    team.iter()
        .map(|p| RosterEntry {
            champion_name: p.champion_name.clone(),
            kda: format_kda(p.kills, p.deaths, p.assists),
        })
        .collect()
}

#[derive(Debug)]
pub enum SummaryError {
    ViewerNotFound(Puuid),
    InvalidRecord(RecordFault),
}

/// A structural violation in the match record itself.
#[derive(Debug)]
pub enum RecordFault {
    NegativeDuration(i64),
    OddParticipantCount(usize),
    UnknownTeam(TeamId),
    LopsidedTeams { blue: usize, red: usize },
    MixedTeamOutcome(TeamId),
    MissingViewerDetails(Puuid),
}

impl From<RecordFault> for SummaryError {
    fn from(fault: RecordFault) -> Self {
        Self::InvalidRecord(fault)
    }
}

impl Display for SummaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryError::ViewerNotFound(puuid) => {
                write!(f, "No participant matches viewer {}", puuid)
            }
            SummaryError::InvalidRecord(fault) => write!(f, "Invalid match record: {}", fault),
        }
    }
}

impl Display for RecordFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordFault::NegativeDuration(secs) => write!(f, "negative duration {}s", secs),
            RecordFault::OddParticipantCount(count) => {
                write!(f, "odd participant count {}", count)
            }
            RecordFault::UnknownTeam(team) => write!(f, "unknown team id {}", team),
            RecordFault::LopsidedTeams { blue, red } => {
                write!(f, "uneven teams ({} vs {})", blue, red)
            }
            RecordFault::MixedTeamOutcome(team) => {
                write!(f, "mixed win flags on team {}", team)
            }
            RecordFault::MissingViewerDetails(puuid) => {
                write!(f, "no extended stats for viewer {}", puuid)
            }
        }
    }
}
