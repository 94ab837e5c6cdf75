use crate::profile::Item;

pub const PLACEHOLDER_LEVEL: &str = "1";
pub const PLACEHOLDER_QUALITY: &str = "0";

/// A socketed skill or support gem, named the way Path of Building does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gem {
    /// `"Support Increased Duration"` for supports, the type line otherwise.
    pub name: String,
    pub skill_id: String,
    pub name_spec: String,
}

impl Gem {
    /// Returns `None` for socketed items that are not gems (abyss jewels).
    pub fn from_socketed(item: &Item) -> Option<Self> {
        if !item.is_gem() {
            return None;
        }
        Some(Self::from_type_line(&item.type_line))
    }

    pub fn from_type_line(type_line: &str) -> Self {
        let (name, name_spec) = if type_line.contains("Support") {
            let name = format!("Support {}", type_line.replace(" Support", ""));
            let name_spec = name.replace("Support ", "");
            (name, name_spec)
        } else {
            (type_line.to_string(), type_line.to_string())
        };

        Self {
            skill_id: name.replace(' ', ""),
            name,
            name_spec,
        }
    }

    // Level and quality are not read from the gem's properties yet.
    pub fn level(&self) -> &'static str {
        PLACEHOLDER_LEVEL
    }

    pub fn quality(&self) -> &'static str {
        PLACEHOLDER_QUALITY
    }
}
