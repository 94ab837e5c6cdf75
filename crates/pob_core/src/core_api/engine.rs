use indexmap::IndexMap;

use super::client::ProfileClient;
use super::error::CoreError;
use super::types::{AbyssSocket, ProfileId, SkillSet, Snapshot};
use crate::class::CharacterClass;
use crate::gem::Gem;
use crate::jewel;
use crate::profile::{self, Character, Item, ItemsResponse, JewelData, PassivesResponse};
use crate::slot;
use crate::tree_url;

#[derive(Debug, Default, Clone, Copy)]
pub struct Engine;

/// Immutable snapshot of one character's items and passive tree.
#[derive(Debug)]
pub struct Session {
    profile: Option<ProfileId>,
    snapshot: Snapshot,
    items: ItemsResponse,
    passives: PassivesResponse,
}

impl Engine {
    pub fn new() -> Self {
        Self
    }

    /// Fetches both endpoints before decoding either; any failure aborts.
    pub fn open_profile(
        &self,
        client: &ProfileClient,
        profile: &ProfileId,
    ) -> Result<Session, CoreError> {
        let items = client.fetch_items(profile)?;
        let passives = client.fetch_passives(profile)?;

        let mut session = self
            .open_json(&items, &passives)
            .map_err(|e| e.context(profile))?;
        session.profile = Some(profile.clone());
        Ok(session)
    }

    /// Opens already-fetched `get-items` and `get-passive-skills` bodies.
    pub fn open_json(&self, items_body: &str, passives_body: &str) -> Result<Session, CoreError> {
        let items = profile::decode_items(items_body)?;
        let passives = profile::decode_passives(passives_body)?;
        Session::from_responses(items, passives)
    }
}

impl Session {
    pub fn from_responses(
        items: ItemsResponse,
        passives: PassivesResponse,
    ) -> Result<Self, CoreError> {
        let character = &items.character;
        let class = CharacterClass::from_raw(character.class_id).ok_or_else(|| {
            CoreError::mapping(format!(
                "character {} has unknown class id {}",
                character.name, character.class_id
            ))
        })?;

        let snapshot = Snapshot {
            character_name: character.name.clone(),
            league: character.league.clone(),
            class,
            ascendancy_class_id: character.ascendancy_class,
            ascendancy_name: character.class_name.clone(),
            level: character.level,
            item_count: items.items.len(),
            tree_jewel_count: passives.items.len(),
            node_count: passives.hashes.len(),
        };
        tracing::debug!(
            character = %snapshot.character_name,
            items = snapshot.item_count,
            tree_jewels = snapshot.tree_jewel_count,
            nodes = snapshot.node_count,
            "opened profile"
        );

        Ok(Self {
            profile: None,
            snapshot,
            items,
            passives,
        })
    }

    pub fn profile(&self) -> Option<&ProfileId> {
        self.profile.as_ref()
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn character(&self) -> &Character {
        &self.items.character
    }

    pub fn class(&self) -> CharacterClass {
        self.snapshot.class
    }

    /// Equipped items, in API order.
    pub fn items(&self) -> &[Item] {
        &self.items.items
    }

    /// Jewels socketed directly into the passive tree.
    pub fn tree_jewels(&self) -> &[Item] {
        &self.passives.items
    }

    /// Equipped items followed by tree jewels; positions are item ids.
    pub fn all_items(&self) -> impl Iterator<Item = &Item> {
        self.items().iter().chain(self.tree_jewels())
    }

    pub fn all_item_count(&self) -> usize {
        self.items().len() + self.tree_jewels().len()
    }

    pub fn hashes(&self) -> &[u32] {
        &self.passives.hashes
    }

    pub fn jewel_data(&self) -> &IndexMap<String, JewelData> {
        &self.passives.jewel_data
    }

    pub fn skill_sets(&self) -> Vec<SkillSet> {
        self.items()
            .iter()
            .filter(|item| !item.socketed_items.is_empty())
            .map(|item| SkillSet {
                slot: slot::display_slot_name(&item.inventory_id),
                gems: item
                    .socketed_items
                    .iter()
                    .filter_map(Gem::from_socketed)
                    .collect(),
            })
            .collect()
    }

    pub fn abyss_sockets(&self) -> Vec<AbyssSocket<'_>> {
        self.all_items()
            .filter(|item| slot::supports_abyss_sockets(&item.inventory_id))
            .flat_map(|item| {
                item.socketed_items
                    .iter()
                    .enumerate()
                    .filter(|(_, socketed)| socketed.is_abyss_jewel())
                    .map(move |(socket_index, jewel)| AbyssSocket {
                        slot: &item.inventory_id,
                        socket_index,
                        jewel,
                    })
            })
            .collect()
    }

    pub fn tree_url(&self) -> Result<String, CoreError> {
        let character = self.character();
        tree_url::encode_tree_url(character.class_id, character.ascendancy_class, self.hashes())
    }

    pub fn jewel_socket_bindings(&self) -> Result<IndexMap<u32, usize>, CoreError> {
        jewel::locate_jewel_sockets(self.tree_jewels())
    }

    pub fn mastery_effects(&self) -> Result<String, CoreError> {
        jewel::mastery_effects(self.jewel_data())
            .map(|effects| jewel::format_mastery_effects(&effects))
    }
}
