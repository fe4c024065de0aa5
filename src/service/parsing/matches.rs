use chrono::{TimeZone, Utc};
use json::{object::Object, JsonValue};

use crate::model::matches::{MatchRecord, ParticipantRecord, ViewerDetails};

use super::ParsingError;

/// Parses a match-v5 shaped payload into a [`MatchRecord`].
///
/// Only the fields the summary needs are read. Participants without the
/// extended stat block (items, riot id, gold, ...) parse with `details: None`.
pub fn parse_match(json: &JsonValue) -> Result<MatchRecord, ParsingError> {
    let match_id = json["metadata"]["matchId"]
        .as_str()
        .ok_or(ParsingError::InvalidType("metadata/matchId".into()))?;

    let info = &json["info"];
    let game_mode = info["gameMode"]
        .as_str()
        .ok_or(ParsingError::InvalidType("info/gameMode".into()))?;
    let duration_secs = info["gameDuration"]
        .as_i64()
        .ok_or(ParsingError::InvalidType("info/gameDuration".into()))?;
    let creation_millis = info["gameCreation"]
        .as_i64()
        .ok_or(ParsingError::InvalidType("info/gameCreation".into()))?;
    let played_at = Utc
        .timestamp_millis_opt(creation_millis)
        .single()
        .ok_or(ParsingError::InvalidType("info/gameCreation".into()))?;

    let participants = match &info["participants"] {
        JsonValue::Array(array) => {
            let mut participants = Vec::with_capacity(array.len());
            for entry in array {
                if let JsonValue::Object(obj) = entry {
                    participants.push(parse_participant_obj(obj)?);
                } else {
                    return Err(ParsingError::InvalidType("participant entry".into()));
                }
            }
            participants
        }
        _ => return Err(ParsingError::InvalidType("info/participants".into())),
    };

    Ok(MatchRecord {
        match_id: match_id.to_string(),
        game_mode: game_mode.to_string(),
        duration_secs,
        played_at,
        participants,
    })
}

fn parse_participant_obj(obj: &Object) -> Result<ParticipantRecord, ParsingError> {
    let puuid = obj["puuid"]
        .as_str()
        .ok_or(ParsingError::InvalidType("puuid".into()))?;
    let champion_name = obj["championName"]
        .as_str()
        .ok_or(ParsingError::InvalidType("championName".into()))?;
    let kills = obj["kills"]
        .as_u16()
        .ok_or(ParsingError::InvalidType("kills".into()))?;
    let deaths = obj["deaths"]
        .as_u16()
        .ok_or(ParsingError::InvalidType("deaths".into()))?;
    let assists = obj["assists"]
        .as_u16()
        .ok_or(ParsingError::InvalidType("assists".into()))?;
    let win = obj["win"]
        .as_bool()
        .ok_or(ParsingError::InvalidType("win".into()))?;
    let team_id = obj["teamId"]
        .as_u16()
        .ok_or(ParsingError::InvalidType("teamId".into()))?;

    Ok(ParticipantRecord {
        puuid: puuid.into(),
        champion_name: champion_name.to_string(),
        kills,
        deaths,
        assists,
        win,
        team: team_id.into(),
        details: parse_details_obj(obj)?,
    })
}

fn parse_details_obj(obj: &Object) -> Result<Option<ViewerDetails>, ParsingError> {
    // The extended block is only delivered for the viewing player.
    if obj["championId"].is_null() {
        return Ok(None);
    }

    let champion_id = obj["championId"]
        .as_u32()
        .ok_or(ParsingError::InvalidType("championId".into()))?;

    let mut items = Vec::with_capacity(6);
    for slot in 0..6 {
        let field = format!("item{}", slot);
        let item = obj[field.as_str()]
            .as_u32()
            .ok_or(ParsingError::InvalidType(field.clone()))?;
        items.push(item.into());
    }

    let summoner1 = obj["summoner1Id"]
        .as_u16()
        .ok_or(ParsingError::InvalidType("summoner1Id".into()))?;
    let summoner2 = obj["summoner2Id"]
        .as_u16()
        .ok_or(ParsingError::InvalidType("summoner2Id".into()))?;
    let game_name = obj["riotIdGameName"]
        .as_str()
        .ok_or(ParsingError::InvalidType("riotIdGameName".into()))?;
    let tag_line = obj["riotIdTagline"]
        .as_str()
        .ok_or(ParsingError::InvalidType("riotIdTagline".into()))?;
    let gold_earned = obj["goldEarned"]
        .as_u32()
        .ok_or(ParsingError::InvalidType("goldEarned".into()))?;
    let damage_to_champions = obj["totalDamageDealtToChampions"]
        .as_u32()
        .ok_or(ParsingError::InvalidType("totalDamageDealtToChampions".into()))?;
    let minions_killed = obj["totalMinionsKilled"]
        .as_u16()
        .ok_or(ParsingError::InvalidType("totalMinionsKilled".into()))?;

    Ok(Some(ViewerDetails {
        champion_id,
        items,
        summoner_spells: (summoner1, summoner2),
        game_name: game_name.to_string(),
        tag_line: tag_line.to_string(),
        gold_earned,
        damage_to_champions,
        minions_killed,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ids::TeamId;

    static SAMPLE: &str = include_str!("../../../demos/sample_match.json");

    #[test]
    fn test_parse_sample_match() {
        let payload = json::parse(SAMPLE).unwrap();
        let record = parse_match(&payload).unwrap();

        assert_eq!(record.match_id, "BR1_3108824461");
        assert_eq!(record.game_mode, "ARAM");
        assert_eq!(record.duration_secs, 1215);
        assert_eq!(record.participants.len(), 10);

        let naafiri = &record.participants[3];
        assert_eq!(naafiri.champion_name, "Naafiri");
        assert_eq!(naafiri.kills, 15);
        assert_eq!(naafiri.deaths, 14);
        assert_eq!(naafiri.assists, 14);
        assert!(naafiri.win);
        assert_eq!(naafiri.team, TeamId::BLUE);

        let details = naafiri.details.as_ref().unwrap();
        assert_eq!(details.champion_id, 950);
        assert_eq!(details.items.len(), 6);
        assert_eq!(details.summoner_spells, (4, 32));
        assert_eq!(details.game_name, "popcorn seller");
        assert_eq!(details.tag_line, "coup");
        assert_eq!(details.gold_earned, 14827);
        assert_eq!(details.damage_to_champions, 27929);
        assert_eq!(details.minions_killed, 22);
    }

    #[test]
    fn test_teammates_parse_without_details() {
        let payload = json::parse(SAMPLE).unwrap();
        let record = parse_match(&payload).unwrap();

        assert!(record.participants[0].details.is_none());
        assert!(record.participants[9].details.is_none());
    }

    #[test]
    fn test_missing_duration_is_rejected() {
        let payload = json::parse(
            r#"{"metadata": {"matchId": "BR1_1"}, "info": {"gameMode": "ARAM"}}"#,
        )
        .unwrap();

        let error = parse_match(&payload).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Unexpected type or missing field: info/gameDuration"
        );
    }

    #[test]
    fn test_non_object_participant_is_rejected() {
        let payload = json::parse(
            r#"{
                "metadata": {"matchId": "BR1_1"},
                "info": {
                    "gameMode": "ARAM",
                    "gameDuration": 60,
                    "gameCreation": 1749883770849,
                    "participants": [42]
                }
            }"#,
        )
        .unwrap();

        assert!(parse_match(&payload).is_err());
    }
}
