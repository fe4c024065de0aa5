use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::model::ids::ItemId;

/// Champion names whose Data Dragon icon name does not follow the default
/// strip-non-letters rule. Sourced from the icon host's actual convention;
/// anything not listed here falls through to the default transform.
static ICON_NAME_OVERRIDES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("KaiSa", "Kaisa"),
        ("Kai'Sa", "Kaisa"),
        ("Cho'Gath", "Chogath"),
        ("Kha'Zix", "Khazix"),
        ("LeBlanc", "Leblanc"),
        ("Vel'Koz", "Velkoz"),
        ("Kog'Maw", "Kogmaw"),
        ("Rek'Sai", "Reksai"),
        ("Nunu & Willump", "Nunu"),
        ("Wukong", "MonkeyKing"),
        ("Renata Glasc", "Renata"),
        ("Dr. Mundo", "DrMundo"),
        ("Tahm Kench", "TahmKench"),
        ("Twisted Fate", "TwistedFate"),
        ("Master Yi", "MasterYi"),
        ("Miss Fortune", "MissFortune"),
        ("Jarvan IV", "JarvanIV"),
        ("Lee Sin", "LeeSin"),
        ("Xin Zhao", "XinZhao"),
        ("Aurelion Sol", "AurelionSol"),
    ])
});

static GAME_MODE_LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("RANKED_SOLO_5x5", "Solo/Duo"),
        ("RANKED_FLEX_SR", "Flex"),
        ("ARAM", "ARAM"),
        ("NORMAL", "Normal"),
        ("CLASSIC", "Classic"),
    ])
});

/// Maps a champion name as stored in match data to its icon asset name.
pub fn icon_champion_name(champion_name: &str) -> String {
    match ICON_NAME_OVERRIDES.get(champion_name) {
        Some(mapped) => (*mapped).to_string(),
        None => champion_name
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect(),
    }
}

/// Short label for a queue/game mode, unknown modes pass through unchanged.
pub fn game_mode_label(game_mode: &str) -> &str {
    match GAME_MODE_LABELS.get(game_mode) {
        Some(label) => label,
        None => game_mode,
    }
}

/// Data Dragon icon URL builder, bound to one patch version.
pub struct IconSet {
    patch: String,
}

impl IconSet {
    pub fn new(patch: impl Into<String>) -> Self {
        Self {
            patch: patch.into(),
        }
    }

    pub fn champion_icon(&self, champion_name: &str) -> String {
        format!(
            "https://ddragon.leagueoflegends.com/cdn/{}/img/champion/{}.png",
            self.patch,
            icon_champion_name(champion_name)
        )
    }

    pub fn item_icon(&self, item: ItemId) -> String {
        format!(
            "https://ddragon.leagueoflegends.com/cdn/{}/img/item/{}.png",
            self.patch, item
        )
    }
}
