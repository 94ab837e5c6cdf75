use std::fmt;

use crate::class::CharacterClass;
use crate::gem::Gem;
use crate::profile::Item;

/// Account and character a profile is fetched for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileId {
    pub account: String,
    pub character: String,
}

impl ProfileId {
    pub fn new(account: impl Into<String>, character: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            character: character.into(),
        }
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.account, self.character)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub character_name: String,
    pub league: String,
    pub class: CharacterClass,
    pub ascendancy_class_id: u32,
    pub ascendancy_name: String,
    pub level: u32,
    pub item_count: usize,
    pub tree_jewel_count: usize,
    pub node_count: usize,
}

/// Gems socketed into one equipped item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillSet {
    pub slot: String,
    pub gems: Vec<Gem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbyssSocket<'a> {
    pub slot: &'a str,
    pub socket_index: usize,
    pub jewel: &'a Item,
}
