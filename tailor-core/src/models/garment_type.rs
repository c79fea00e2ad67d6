use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GarmentType {
    Blouse,
    Pants,
    Skirt,
    Dress,
    Jacket,
    Others,
}

impl GarmentType {
    /// All garment types, in price-table order.
    pub const ALL: [GarmentType; 6] = [
        Self::Blouse,
        Self::Pants,
        Self::Skirt,
        Self::Dress,
        Self::Jacket,
        Self::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blouse => "BLOUSE",
            Self::Pants => "PANTS",
            Self::Skirt => "SKIRT",
            Self::Dress => "DRESS",
            Self::Jacket => "JACKET",
            Self::Others => "OTHERS",
        }
    }

    /// Strict parse of a canonical garment-type name.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace;
    /// anything else returns `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BLOUSE" => Some(Self::Blouse),
            "PANTS" => Some(Self::Pants),
            "SKIRT" => Some(Self::Skirt),
            "DRESS" => Some(Self::Dress),
            "JACKET" => Some(Self::Jacket),
            "OTHERS" => Some(Self::Others),
            _ => None,
        }
    }

    /// Lenient parse for form input: unrecognized or empty values resolve
    /// to [`GarmentType::Others`] rather than failing.
    pub fn from_input(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            if !s.trim().is_empty() {
                warn!(input = %s, "unrecognized garment type; falling back to OTHERS");
            }
            Self::Others
        })
    }
}
