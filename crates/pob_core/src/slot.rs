//! Inventory slot naming as Path of Building expects it.

/// `inventoryId` of jewels socketed directly into the passive tree.
pub const PASSIVE_JEWELS_SLOT: &str = "PassiveJewels";

/// Inventory slots whose items may carry abyssal sockets.
pub const ABYSS_SLOT_KINDS: [&str; 5] = ["BodyArmour", "Belt", "Helm", "Boots", "Gloves"];

/// Maps a raw `inventoryId` to the slot name used by Path of Building.
///
/// The swap-slot checks run before the generic `Weapon`/`Ring` rule, which
/// would otherwise turn `Weapon2` into `Weapon2 1`.
pub fn display_slot_name(inventory_id: &str) -> String {
    match inventory_id {
        "Weapon2" => return "Weapon 1 Swap".to_string(),
        "Ring2" => return "Ring 2".to_string(),
        _ => {}
    }

    if inventory_id.contains("Weapon") || inventory_id.contains("Ring") {
        return format!("{inventory_id} 1");
    }

    match inventory_id {
        "Offhand" => "Weapon 2",
        "Offhand2" => "Weapon 2 Swap",
        "Helm" => "Helmet",
        "BodyArmour" => "Body Armour",
        other => other,
    }
    .to_string()
}

pub fn supports_abyss_sockets(inventory_id: &str) -> bool {
    ABYSS_SLOT_KINDS.contains(&inventory_id)
}

pub fn abyss_slot_name(inventory_id: &str, socket_index: usize) -> String {
    format!(
        "{} Abyssal Socket {socket_index}",
        display_slot_name(inventory_id)
    )
}
