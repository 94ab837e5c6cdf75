//! Plain-text item cards in the grammar Path of Building parses.

use std::fmt;

use crate::core_api::CoreError;
use crate::profile::{Item, Socket};

pub const LINE_END: &str = "\r\n";
pub const CRAFTED_TAG: &str = "{crafted}";

const SET_MARKER: &str = "<<set:MS>><<set:M>><<set:S>>";
const SOCKET_GROUPS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rarity {
    Normal,
    Magic,
    Rare,
    Unique,
}

impl Rarity {
    pub fn from_frame_type(frame_type: u32) -> Option<Self> {
        match frame_type {
            0 => Some(Self::Normal),
            1 => Some(Self::Magic),
            2 => Some(Self::Rare),
            3 => Some(Self::Unique),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Normal => "NORMAL",
            Self::Magic => "MAGIC",
            Self::Rare => "RARE",
            Self::Unique => "UNIQUE",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which lines of the card are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardStyle {
    #[default]
    Full,
    /// Abyss jewels pulled out of gear: no quality, sockets, implicits or
    /// crafted lines.
    Reduced,
}

/// Renders the full card for an equipped or tree-socketed item.
pub fn render_item_card(item: &Item) -> Result<String, CoreError> {
    render_card(item, CardStyle::Full)
}

pub fn render_abyss_card(item: &Item) -> Result<String, CoreError> {
    render_card(item, CardStyle::Reduced)
}

pub fn render_card(item: &Item, style: CardStyle) -> Result<String, CoreError> {
    let mut lines = Vec::new();

    let rarity = Rarity::from_frame_type(item.frame_type).ok_or_else(|| {
        CoreError::mapping(format!(
            "item {} has unknown rarity code {}",
            item.id, item.frame_type
        ))
    })?;
    lines.push(format!("Rarity: {rarity}"));

    if !item.name.is_empty() {
        lines.push(clean_name(&item.name));
    }
    if !item.type_line.is_empty() {
        lines.push(clean_name(&item.type_line));
    }

    lines.push(format!("ID: {}", item.id));

    if let Some(level) = item.requirement("Level") {
        let value = level.first_value().ok_or_else(|| {
            CoreError::mapping(format!("item {} has a Level requirement without a value", item.id))
        })?;
        lines.push(format!("Item Level: {value}"));
    }

    if style == CardStyle::Full {
        if let Some(quality) = item.property("Quality") {
            let value = quality.first_value().ok_or_else(|| {
                CoreError::mapping(format!("item {} has a Quality property without a value", item.id))
            })?;
            lines.push(format!("Quality: {}", value.replace(['%', '+'], "")));
        }

        if !item.sockets.is_empty() {
            let groups = socket_groups(&item.sockets).map_err(|e| e.context(&item.id))?;
            lines.push(format!("Sockets: {groups}"));
        }

        lines.push(format!("Implicits: {}", item.implicit_mods.len()));
        if let Some(implicit) = item.implicit_mods.first() {
            lines.push(implicit.clone());
        }
    }

    lines.extend(item.explicit_mods.iter().cloned());

    if style == CardStyle::Full {
        lines.extend(
            item.crafted_mods
                .iter()
                .map(|m| format!("{CRAFTED_TAG}{m}")),
        );
    }

    let mut out = String::new();
    for line in &lines {
        out.push_str(line);
        out.push_str(LINE_END);
    }
    Ok(out)
}

/// Joins socket colours into `R-G-B W` style link groups.
///
/// Colours keep their listed order within a group; groups are emitted by
/// ascending index and empty groups are skipped.
pub fn socket_groups(sockets: &[Socket]) -> Result<String, CoreError> {
    let mut groups: [Vec<&str>; SOCKET_GROUPS] = Default::default();

    for socket in sockets {
        let group = groups.get_mut(socket.group as usize).ok_or_else(|| {
            CoreError::mapping(format!(
                "socket group {} outside 0-{}",
                socket.group,
                SOCKET_GROUPS - 1
            ))
        })?;
        group.push(&socket.colour);
    }

    Ok(groups
        .iter()
        .filter(|group| !group.is_empty())
        .map(|group| group.join("-"))
        .collect::<Vec<_>>()
        .join(" "))
}

fn clean_name(raw: &str) -> String {
    raw.replace(SET_MARKER, "").trim_start().to_string()
}

#[cfg(test)]
mod tests {
    use super::clean_name;

    #[test]
    fn strips_set_marker_and_leading_space() {
        assert_eq!(
            clean_name("<<set:MS>><<set:M>><<set:S>> Rune Veil"),
            "Rune Veil"
        );
        assert_eq!(clean_name("  Hubris Circlet"), "Hubris Circlet");
    }
}
