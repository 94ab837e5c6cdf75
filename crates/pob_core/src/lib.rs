pub mod class;
pub mod core_api;
pub mod gem;
pub mod item_card;
pub mod jewel;
pub mod profile;
pub mod share_code;
pub mod slot;
pub mod tree_url;
