use pob_core::slot::{abyss_slot_name, display_slot_name, supports_abyss_sockets};

#[test]
fn maps_swap_and_ring_slots() {
    assert_eq!(display_slot_name("Weapon2"), "Weapon 1 Swap");
    assert_eq!(display_slot_name("Ring2"), "Ring 2");
    assert_eq!(display_slot_name("Offhand"), "Weapon 2");
    assert_eq!(display_slot_name("Offhand2"), "Weapon 2 Swap");
}

#[test]
fn generic_weapon_and_ring_rule_appends_one() {
    assert_eq!(display_slot_name("Weapon"), "Weapon 1");
    assert_eq!(display_slot_name("Weapon1"), "Weapon1 1");
    assert_eq!(display_slot_name("Ring"), "Ring 1");
}

#[test]
fn armour_slots_are_renamed_and_others_pass_through() {
    assert_eq!(display_slot_name("Helm"), "Helmet");
    assert_eq!(display_slot_name("BodyArmour"), "Body Armour");
    assert_eq!(display_slot_name("Gloves"), "Gloves");
    assert_eq!(display_slot_name("PassiveJewels"), "PassiveJewels");
}

#[test]
fn abyss_slots_use_display_names() {
    assert_eq!(abyss_slot_name("BodyArmour", 4), "Body Armour Abyssal Socket 4");
    assert!(supports_abyss_sockets("Belt"));
    assert!(!supports_abyss_sockets("Weapon"));
    assert!(!supports_abyss_sockets("Amulet"));
}
