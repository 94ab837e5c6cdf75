//! Assembles the Path of Building build document for an opened profile.

mod document;

pub use document::Element;

use pob_core::core_api::{CoreError, Session};
use pob_core::gem::Gem;
use pob_core::item_card::{self, LINE_END};
use pob_core::jewel::JEWEL_SOCKETS;
use pob_core::share_code;
use pob_core::slot::{self, PASSIVE_JEWELS_SLOT};
use serde_json::{Map as JsonMap, Value as JsonValue};

pub const DEFAULT_TARGET_VERSION: &str = "3.17";

const TREE_VIEW_ZOOM_X: &str = "-274.36201953303";
const TREE_VIEW_ZOOM_Y: &str = "-70.680703089277";
const TREE_VIEW_ZOOM_LEVEL: &str = "2";
const UNOCCUPIED_ITEM_ID: &str = "0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Game version the document targets, e.g. `3.17`.
    pub target_version: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            target_version: DEFAULT_TARGET_VERSION.to_string(),
        }
    }
}

impl RenderOptions {
    /// Version in the `3_17` form used by `targetVersion` and `treeVersion`.
    pub fn version_tag(&self) -> String {
        self.target_version.replace('.', "_")
    }
}

/// Builds the complete element tree. Nothing is emitted unless every
/// section maps cleanly.
pub fn render_document(session: &Session, options: &RenderOptions) -> Result<Element, CoreError> {
    let version = options.version_tag();

    let skills = skills_element(session);
    let items = items_element(session)?;
    let tree = tree_element(session, &version)?;

    let root = Element::new("PathOfBuilding")
        .with_child(build_element(session, &version))
        .with_child(Element::new("Import"))
        .with_child(Element::new("Calcs"))
        .with_child(skills)
        .with_child(items)
        .with_child(tree)
        .with_child(Element::new("Notes"))
        .with_child(tree_view_element())
        .with_child(Element::new("Config"));

    tracing::debug!(sections = root.children.len(), "assembled build document");
    Ok(root)
}

pub fn render_xml(session: &Session, options: &RenderOptions) -> Result<String, CoreError> {
    render_document(session, options)?.to_xml_string()
}

pub fn render_share_code(session: &Session, options: &RenderOptions) -> Result<String, CoreError> {
    share_code::encode_share_code(&render_xml(session, options)?)
}

/// Short description of what an export contains, with stable key order.
pub fn render_summary_json(
    session: &Session,
    options: &RenderOptions,
) -> Result<JsonValue, CoreError> {
    let snapshot = session.snapshot();
    let mut out = JsonMap::new();

    if let Some(profile) = session.profile() {
        out.insert(
            "account".to_string(),
            JsonValue::String(profile.account.clone()),
        );
    }
    out.insert(
        "character".to_string(),
        JsonValue::String(snapshot.character_name.clone()),
    );
    out.insert(
        "league".to_string(),
        JsonValue::String(snapshot.league.clone()),
    );
    out.insert(
        "class".to_string(),
        JsonValue::String(snapshot.class.to_string()),
    );
    out.insert(
        "ascendancy".to_string(),
        JsonValue::String(snapshot.ascendancy_name.clone()),
    );
    out.insert("level".to_string(), JsonValue::from(snapshot.level));
    out.insert(
        "target_version".to_string(),
        JsonValue::String(options.target_version.clone()),
    );
    out.insert("items".to_string(), JsonValue::from(snapshot.item_count));
    out.insert(
        "tree_jewels".to_string(),
        JsonValue::from(snapshot.tree_jewel_count),
    );
    out.insert(
        "abyss_jewels".to_string(),
        JsonValue::from(session.abyss_sockets().len()),
    );
    out.insert("skills".to_string(), skill_sets_to_json(session));
    out.insert("nodes".to_string(), JsonValue::from(snapshot.node_count));
    out.insert(
        "tree_url".to_string(),
        JsonValue::String(session.tree_url()?),
    );

    Ok(JsonValue::Object(out))
}

fn skill_sets_to_json(session: &Session) -> JsonValue {
    JsonValue::Array(
        session
            .skill_sets()
            .iter()
            .map(|set| {
                let mut m = JsonMap::new();
                m.insert("slot".to_string(), JsonValue::String(set.slot.clone()));
                m.insert(
                    "gems".to_string(),
                    JsonValue::Array(
                        set.gems
                            .iter()
                            .map(|g: &Gem| JsonValue::String(g.name.clone()))
                            .collect(),
                    ),
                );
                JsonValue::Object(m)
            })
            .collect(),
    )
}

fn build_element(session: &Session, version: &str) -> Element {
    let snapshot = session.snapshot();

    Element::new("Build")
        .attr("level", snapshot.level.to_string())
        .attr("targetVersion", version)
        .attr("bandit", "None")
        .attr("className", snapshot.class.as_str())
        .attr("ascendClassName", snapshot.ascendancy_name.as_str())
        .attr("mainSocketGroup", "1")
        .attr("viewMode", "CALCS")
}

fn skills_element(session: &Session) -> Element {
    let mut skills = Element::new("Skills")
        .attr("defaultGemQuality", "nil")
        .attr("defaultGemLevel", "nil")
        .attr("sortGemsByDPS", "true");

    for set in session.skill_sets() {
        let mut skill = Element::new("Skill")
            .attr("mainActiveSkillCalcs", "nil")
            .attr("mainActiveSkill", "nil")
            .attr("enabled", "true")
            .attr("slot", set.slot);

        for gem in &set.gems {
            skill.push(
                Element::new("Gem")
                    .attr("level", gem.level())
                    .attr("skillId", gem.skill_id.as_str())
                    .attr("quality", gem.quality())
                    .attr("enabled", "true")
                    .attr("nameSpec", gem.name_spec.as_str()),
            );
        }
        skills.push(skill);
    }

    skills
}

fn items_element(session: &Session) -> Result<Element, CoreError> {
    let mut items = Element::new("Items")
        .attr("activeItemSet", "1")
        .attr("useSecondWeaponSet", "nil");

    let mut slots = Vec::with_capacity(session.all_item_count());
    for item in session.all_items() {
        let card = item_card::render_item_card(item)?;
        items.push(Element::new("Item").with_text(format!("{LINE_END}{card}")));
        slots.push(slot::display_slot_name(&item.inventory_id));
    }

    for (item_id, slot_name) in slots.into_iter().enumerate() {
        if slot_name == PASSIVE_JEWELS_SLOT {
            continue;
        }
        items.push(
            Element::new("Slot")
                .attr("name", slot_name)
                .attr("itemId", item_id.to_string()),
        );
    }

    let mut item_id = session.all_item_count();
    for socket in session.abyss_sockets() {
        item_id += 1;
        let card = item_card::render_abyss_card(socket.jewel)?;
        items.push(Element::new("Item").with_text(format!("{LINE_END}{card}")));
        items.push(
            Element::new("Slot")
                .attr("name", slot::abyss_slot_name(socket.slot, socket.socket_index))
                .attr("itemId", item_id.to_string()),
        );
    }

    Ok(items)
}

fn tree_element(session: &Session, version: &str) -> Result<Element, CoreError> {
    let bindings = session.jewel_socket_bindings()?;

    let mut sockets = Element::new("Sockets");
    for socket in JEWEL_SOCKETS {
        let item_id = bindings
            .get(&socket.node_id)
            .map(|id| id.to_string())
            .unwrap_or_else(|| UNOCCUPIED_ITEM_ID.to_string());
        sockets.push(
            Element::new("Socket")
                .attr("nodeId", socket.node_id.to_string())
                .attr("itemId", item_id),
        );
    }

    let nodes = session
        .hashes()
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",");

    let spec = Element::new("Spec")
        .attr("treeVersion", version)
        .attr(
            "ascendClassId",
            session.character().ascendancy_class.to_string(),
        )
        .attr("masteryEffects", session.mastery_effects()?)
        .attr("nodes", nodes)
        .with_child(Element::new("URL").with_text(session.tree_url()?))
        .with_child(sockets);

    Ok(Element::new("Tree").attr("activeSpec", "1").with_child(spec))
}

fn tree_view_element() -> Element {
    Element::new("TreeView")
        .attr("searchStr", "")
        .attr("zoomY", TREE_VIEW_ZOOM_Y)
        .attr("zoomX", TREE_VIEW_ZOOM_X)
        .attr("showHeatMap", "false")
        .attr("zoomLevel", TREE_VIEW_ZOOM_LEVEL)
        .attr("showStatDifference", "true")
}
