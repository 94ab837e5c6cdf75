use std::fmt;

/// Base character class, indexed by the API's `classId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Scion,
    Marauder,
    Ranger,
    Witch,
    Duelist,
    Templar,
    Shadow,
}

impl CharacterClass {
    pub const ALL: [Self; 7] = [
        Self::Scion,
        Self::Marauder,
        Self::Ranger,
        Self::Witch,
        Self::Duelist,
        Self::Templar,
        Self::Shadow,
    ];

    pub fn from_raw(raw: u32) -> Option<Self> {
        Self::ALL.get(raw as usize).copied()
    }

    pub fn raw(&self) -> u32 {
        *self as u32
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Scion => "Scion",
            Self::Marauder => "Marauder",
            Self::Ranger => "Ranger",
            Self::Witch => "Witch",
            Self::Duelist => "Duelist",
            Self::Templar => "Templar",
            Self::Shadow => "Shadow",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
