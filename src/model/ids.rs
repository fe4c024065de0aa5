use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Puuid(String);

/// Data Dragon item id. Zero marks an empty inventory slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemId(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamId(u16);

impl TeamId {
    pub const BLUE: TeamId = TeamId(100);
    pub const RED: TeamId = TeamId(200);
}

impl ItemId {
    pub fn is_empty_slot(&self) -> bool {
        self.0 == 0
    }
}

impl Display for Puuid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Puuid {
    fn from(value: String) -> Self {
        Puuid(value)
    }
}

impl From<&str> for Puuid {
    fn from(value: &str) -> Self {
        Puuid(value.to_string())
    }
}

impl From<u32> for ItemId {
    fn from(value: u32) -> Self {
        ItemId(value)
    }
}

impl From<u16> for TeamId {
    fn from(value: u16) -> Self {
        TeamId(value)
    }
}
