//! Tree jewel sockets and cluster-jewel masteries.

use indexmap::IndexMap;

use crate::core_api::CoreError;
use crate::profile::{Item, JewelData};

pub struct JewelSocket {
    pub location: &'static str,
    pub node_id: u32,
}

// Indexed by the `x` field the API reports for jewels socketed in the tree.
#[rustfmt::skip]
pub const JEWEL_SOCKETS: &[JewelSocket] = &[
    JewelSocket { location: "Marauder",          node_id: 26725 },
    JewelSocket { location: "Templar_Witch",     node_id: 36634 },
    JewelSocket { location: "Shadow_Ranger",     node_id: 33989 },
    JewelSocket { location: "Witch_Shadow",      node_id: 41263 },
    JewelSocket { location: "Ranger",            node_id: 60735 },
    JewelSocket { location: "Shadow",            node_id: 61834 },
    JewelSocket { location: "Scion_Bottom",      node_id: 31683 },
    JewelSocket { location: "Duelist_Marauder",  node_id: 28475 },
    JewelSocket { location: "Scion_Left",        node_id:  6230 },
    JewelSocket { location: "Scion_Right",       node_id: 48768 },
    JewelSocket { location: "Ranger_Duelist",    node_id: 34483 },
    JewelSocket { location: "Templar_Witch2",    node_id:  7960 },
    JewelSocket { location: "Ranger_Duelist2",   node_id: 46882 },
    JewelSocket { location: "Marauder_Templar2", node_id: 55190 },
    JewelSocket { location: "Witch",             node_id: 61419 },
    JewelSocket { location: "Duelist_Marauder2", node_id:  2491 },
    JewelSocket { location: "Duelist",           node_id: 54127 },
    JewelSocket { location: "Shadow_Ranger2",    node_id: 32763 },
    JewelSocket { location: "Templar",           node_id: 26196 },
    JewelSocket { location: "Marauder_Templar",  node_id: 33631 },
    JewelSocket { location: "Witch_Shadow2",     node_id: 21984 },
];

/// Maps socket node id to the 1-based position of the jewel occupying it
/// within the passive-tree item list.
pub fn locate_jewel_sockets(passive_items: &[Item]) -> Result<IndexMap<u32, usize>, CoreError> {
    let mut bindings = IndexMap::new();

    for (index, item) in passive_items.iter().enumerate() {
        let x = item.x.ok_or_else(|| {
            CoreError::mapping(format!("tree jewel {} has no socket position", item.id))
        })?;
        let Some(socket) = JEWEL_SOCKETS.get(x as usize) else {
            tracing::debug!(item = %item.id, x, "tree jewel outside the well-known sockets");
            continue;
        };
        bindings.insert(socket.node_id, index + 1);
    }

    Ok(bindings)
}

/// Collects `(node, effect)` pairs for masteries allocated inside jewel
/// subgraphs, in document order.
pub fn mastery_effects(
    jewel_data: &IndexMap<String, JewelData>,
) -> Result<Vec<(String, String)>, CoreError> {
    let mut out = Vec::new();

    for (slot, data) in jewel_data {
        let Some(subgraph) = &data.subgraph else {
            continue;
        };
        for (node_id, node) in &subgraph.nodes {
            if !node.is_mastery {
                continue;
            }
            let effect = node.skill.as_ref().ok_or_else(|| {
                CoreError::mapping(format!(
                    "mastery node {node_id} in jewel slot {slot} has no selected effect"
                ))
            })?;
            out.push((node_id.clone(), effect.to_string()));
        }
    }

    Ok(out)
}

/// `{node,effect},{node,effect}` as stored in a tree spec.
pub fn format_mastery_effects(effects: &[(String, String)]) -> String {
    effects
        .iter()
        .map(|(node, effect)| format!("{{{node},{effect}}}"))
        .collect::<Vec<_>>()
        .join(",")
}
