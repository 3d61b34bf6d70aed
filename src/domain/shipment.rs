use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Commodity class declared on the shipment form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoodsCategory {
    Electronics,
    Pharmaceuticals,
    Perishables,
    Machinery,
    Automotive,
    Textiles,
    Bulk,
}

impl GoodsCategory {
    pub const ALL: [GoodsCategory; 7] = [
        GoodsCategory::Electronics,
        GoodsCategory::Pharmaceuticals,
        GoodsCategory::Perishables,
        GoodsCategory::Machinery,
        GoodsCategory::Automotive,
        GoodsCategory::Textiles,
        GoodsCategory::Bulk,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            GoodsCategory::Electronics => "electronics",
            GoodsCategory::Pharmaceuticals => "pharmaceuticals",
            GoodsCategory::Perishables => "perishables",
            GoodsCategory::Machinery => "machinery",
            GoodsCategory::Automotive => "automotive",
            GoodsCategory::Textiles => "textiles",
            GoodsCategory::Bulk => "bulk",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GoodsCategory::Electronics => "Electronics",
            GoodsCategory::Pharmaceuticals => "Pharmaceuticals",
            GoodsCategory::Perishables => "Perishables",
            GoodsCategory::Machinery => "Machinery & parts",
            GoodsCategory::Automotive => "Automotive",
            GoodsCategory::Textiles => "Textiles",
            GoodsCategory::Bulk => "Bulk commodities",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Sea,
    Air,
    Road,
    Rail,
}

impl TransportMode {
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Sea,
        TransportMode::Air,
        TransportMode::Road,
        TransportMode::Rail,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            TransportMode::Sea => "sea",
            TransportMode::Air => "air",
            TransportMode::Road => "road",
            TransportMode::Rail => "rail",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Sea => "Sea freight",
            TransportMode::Air => "Air freight",
            TransportMode::Road => "Road",
            TransportMode::Rail => "Rail",
        }
    }
}

/// Shipper's appetite for risk versus premium cost.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskProfile {
    Conservative,
    #[default]
    Neutral,
    Aggressive,
}

impl RiskProfile {
    pub const ALL: [RiskProfile; 3] = [
        RiskProfile::Conservative,
        RiskProfile::Neutral,
        RiskProfile::Aggressive,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            RiskProfile::Conservative => "conservative",
            RiskProfile::Neutral => "neutral",
            RiskProfile::Aggressive => "aggressive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskProfile::Conservative => "Conservative (max cover)",
            RiskProfile::Neutral => "Balanced",
            RiskProfile::Aggressive => "Aggressive (lowest rate)",
        }
    }
}

/// Unknown slug passed to one of the `FromStr` impls above.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown value '{0}'")]
pub struct UnknownVariant(pub String);

/// `FromStr` (case-insensitive slug) and `Display` (slug) for an enum with
/// `ALL` and `slug()`.
macro_rules! slug_from_str {
    ($ty:ty) => {
        impl ::std::str::FromStr for $ty {
            type Err = $crate::domain::shipment::UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim();
                <$ty>::ALL
                    .iter()
                    .copied()
                    .find(|variant| variant.slug().eq_ignore_ascii_case(needle))
                    .ok_or_else(|| $crate::domain::shipment::UnknownVariant(needle.to_string()))
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.slug())
            }
        }
    };
}

pub(crate) use slug_from_str;

slug_from_str!(GoodsCategory);
slug_from_str!(TransportMode);
slug_from_str!(RiskProfile);

/// A resolved port: `slug` is matched against product appetite, `label` is
/// what the user saw. Both are empty when no port was given.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortSelection {
    pub slug: String,
    pub label: String,
}

impl PortSelection {
    pub fn new(slug: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            label: label.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slug.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub goods: GoodsCategory,
    pub declared_value: f64,
    pub origin_country: Option<String>,
    pub origin_port: PortSelection,
    pub destination_country: Option<String>,
    pub destination_port: PortSelection,
    pub transport_mode: TransportMode,
    pub risk_profile: RiskProfile,
    #[serde(default)]
    pub notes: Option<String>,
}
