use serde::{Deserialize, Serialize};

/// Properties a shift can be worked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Property {
    A,
    B,
    C,
    D,
    E,
}

impl Property {
    pub const ALL: [Property; 5] = [
        Property::A,
        Property::B,
        Property::C,
        Property::D,
        Property::E,
    ];

    /// Display name stored on every shift record.
    pub fn as_str(&self) -> &'static str {
        match self {
            Property::A => "Property A",
            Property::B => "Property B",
            Property::C => "Property C",
            Property::D => "Property D",
            Property::E => "Property E",
        }
    }

    /// Display name → enum
    pub fn from_name(s: &str) -> Option<Self> {
        Property::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
    }
}
