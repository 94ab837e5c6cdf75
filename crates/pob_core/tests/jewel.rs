use pob_core::core_api::CoreErrorCode;
use pob_core::jewel::{JEWEL_SOCKETS, format_mastery_effects, locate_jewel_sockets};
use pob_core::profile::Item;

fn tree_jewel(id: &str, x: Option<u32>) -> Item {
    let mut item: Item = serde_json::from_value(serde_json::json!({
        "id": id,
        "frameType": 2,
        "typeLine": "Crimson Jewel",
        "inventoryId": "PassiveJewels",
    }))
    .expect("item json should decode");
    item.x = x;
    item
}

#[test]
fn socket_table_covers_twenty_one_locations() {
    assert_eq!(JEWEL_SOCKETS.len(), 21);
    assert_eq!(JEWEL_SOCKETS[0].node_id, 26725);
    assert_eq!(JEWEL_SOCKETS[8].location, "Scion_Left");
    assert_eq!(JEWEL_SOCKETS[20].node_id, 21984);
}

#[test]
fn binds_one_based_positions_and_ignores_cluster_sockets() {
    let jewels = [
        tree_jewel("a", Some(21)),
        tree_jewel("b", Some(0)),
        tree_jewel("c", Some(20)),
    ];
    let bindings = locate_jewel_sockets(&jewels).expect("all jewels have positions");

    let pairs: Vec<(u32, usize)> = bindings.into_iter().collect();
    assert_eq!(pairs, vec![(26725, 2), (21984, 3)]);
}

#[test]
fn missing_position_is_a_mapping_error() {
    let err = locate_jewel_sockets(&[tree_jewel("a", None)]).expect_err("x is required");
    assert_eq!(err.code, CoreErrorCode::Mapping);
}

#[test]
fn formats_brace_wrapped_pairs() {
    let effects = vec![
        ("1".to_string(), "2".to_string()),
        ("3".to_string(), "4".to_string()),
    ];
    assert_eq!(format_mastery_effects(&effects), "{1,2},{3,4}");
    assert_eq!(format_mastery_effects(&[]), "");
}
