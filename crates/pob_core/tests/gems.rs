use pob_core::gem::Gem;
use pob_core::profile::Item;

#[test]
fn support_gems_are_canonicalised() {
    let gem = Gem::from_type_line("Increased Duration Support");
    assert_eq!(gem.name, "Support Increased Duration");
    assert_eq!(gem.name_spec, "Increased Duration");
    assert_eq!(gem.skill_id, "SupportIncreasedDuration");
}

#[test]
fn active_gems_keep_their_type_line() {
    let gem = Gem::from_type_line("Flame Dash");
    assert_eq!(gem.name_spec, "Flame Dash");
    assert_eq!(gem.skill_id, "FlameDash");
    assert_eq!(gem.level(), "1");
    assert_eq!(gem.quality(), "0");
}

#[test]
fn only_gem_frame_type_yields_a_gem() {
    let jewel: Item = serde_json::from_value(serde_json::json!({
        "id": "j",
        "frameType": 2,
        "typeLine": "Murderous Eye Jewel",
    }))
    .expect("item json should decode");
    assert_eq!(Gem::from_socketed(&jewel), None);

    let gem: Item = serde_json::from_value(serde_json::json!({
        "id": "g",
        "frameType": 4,
        "typeLine": "Arc",
    }))
    .expect("item json should decode");
    assert_eq!(
        Gem::from_socketed(&gem).map(|g| g.skill_id),
        Some("Arc".to_string())
    );
}
