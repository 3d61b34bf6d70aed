//! Static marine cargo insurance catalogue.
//!
//! The catalogue is built once on first access and never mutated afterwards.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::shipment::{GoodsCategory, PortSelection, TransportMode};

/// Coverage tag for the broadest Institute Cargo Clauses tier.
pub const ICC_A: &str = "ICC A";

/// Ports and modes an insurer is willing to write.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appetite {
    /// Port slugs as used by the port directory.
    pub ports: Vec<String>,
    pub modes: Vec<TransportMode>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InsuranceProduct {
    pub id: String,
    pub provider: String,
    pub product: String,
    pub url: String,
    pub coverage: Vec<String>,
    pub supported_goods: Vec<GoodsCategory>,
    pub min_value: f64,
    pub max_value: f64,
    pub appetite: Appetite,
    /// Percentage of declared value, e.g. `0.42` means 0.42 %.
    pub base_premium_rate: f64,
    /// 0.0 to 5.0.
    pub rating: f64,
    pub notes: String,
}

impl InsuranceProduct {
    pub fn supports_goods(&self, goods: GoodsCategory) -> bool {
        self.supported_goods.contains(&goods)
    }

    pub fn supports_mode(&self, mode: TransportMode) -> bool {
        self.appetite.modes.contains(&mode)
    }

    pub fn accepts_port(&self, port: &PortSelection) -> bool {
        !port.is_empty() && self.appetite.ports.iter().any(|slug| *slug == port.slug)
    }

    pub fn has_coverage(&self, tag: &str) -> bool {
        self.coverage.iter().any(|c| c == tag)
    }
}

static CATALOGUE: OnceLock<Vec<InsuranceProduct>> = OnceLock::new();

/// The shipped catalogue, in display/tie-break order.
pub fn insurance_catalogue() -> &'static [InsuranceProduct] {
    CATALOGUE.get_or_init(build_catalogue).as_slice()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn build_catalogue() -> Vec<InsuranceProduct> {
    use GoodsCategory::*;
    use TransportMode::*;

    vec![
        InsuranceProduct {
            id: "atlas-icc-a".into(),
            provider: "Atlas Marine Mutual".into(),
            product: "Blue Shield ICC (A)".into(),
            url: "https://www.agcs.allianz.com/solutions/marine-cargo-insurance.html".into(),
            coverage: strings(&[ICC_A, "War", "SRCC", "Temperature", "High-Value"]),
            supported_goods: vec![Electronics, Pharmaceuticals, Perishables, Machinery],
            min_value: 50_000.0,
            max_value: 5_000_000.0,
            appetite: Appetite {
                ports: strings(&[
                    "singapore",
                    "rotterdam",
                    "dubai",
                    "mumbai",
                    "los-angeles",
                    "new-york",
                ]),
                modes: vec![Sea, Air],
            },
            base_premium_rate: 0.42,
            rating: 4.7,
            notes: "Prefers high-value electronics and pharma with airtight packaging proof."
                .into(),
        },
        InsuranceProduct {
            id: "harborline-tier2".into(),
            provider: "HarborLine Syndicate".into(),
            product: "Tier 2 Global Cargo (ICC B)".into(),
            url: "https://www.lloyds.com/solutions/marine".into(),
            coverage: strings(&["ICC B", "General Average", "War"]),
            supported_goods: vec![Machinery, Automotive, Textiles, Bulk],
            min_value: 20_000.0,
            max_value: 2_500_000.0,
            appetite: Appetite {
                ports: strings(&["antwerp", "hamburg", "chennai", "tanjung-pelepas", "long-beach"]),
                modes: vec![Sea, Rail],
            },
            base_premium_rate: 0.28,
            rating: 4.3,
            notes: "Competitive for industrial cargo, requires survey for >USD 2M.".into(),
        },
        InsuranceProduct {
            id: "aerosecure-air".into(),
            provider: "AeroSecure Underwriting".into(),
            product: "Just-in-Time Air Hull".into(),
            url: "https://www.chubb.com/us-en/businesses/resources/aerospace-insurance.html".into(),
            coverage: strings(&["ICC Air", "High-Value", "Delay"]),
            supported_goods: vec![Electronics, Pharmaceuticals, Automotive],
            min_value: 10_000.0,
            max_value: 1_500_000.0,
            appetite: Appetite {
                ports: strings(&["dubai", "hamburg", "chicago", "shanghai"]),
                modes: vec![Air],
            },
            base_premium_rate: 0.65,
            rating: 4.8,
            notes: "Includes expedited claims on temp-controlled air freight.".into(),
        },
        InsuranceProduct {
            id: "evertrust-perishables".into(),
            provider: "Evertrust".into(),
            product: "ColdLink ICC (A) + TempGuard".into(),
            url: "https://www.msig.com.sg/business/solutions/marine/marine-cargo-insurance".into(),
            coverage: strings(&[ICC_A, "Temperature", "Contamination"]),
            supported_goods: vec![Perishables, Pharmaceuticals, Bulk],
            min_value: 15_000.0,
            max_value: 1_200_000.0,
            appetite: Appetite {
                ports: strings(&["valencia", "rotterdam", "miami", "jebel-ali", "melbourne"]),
                modes: vec![Sea, Air, Road],
            },
            base_premium_rate: 0.58,
            rating: 4.6,
            notes: "Requires IoT telemetry for temp excursions coverage to apply.".into(),
        },
        InsuranceProduct {
            id: "terra-icc-c".into(),
            provider: "Terra Assurance".into(),
            product: "Economy ICC (C)".into(),
            url: "https://axaxl.com/insurance/coverages/marine-cargo".into(),
            coverage: strings(&["ICC C", "General Average"]),
            supported_goods: vec![Bulk, Textiles, Machinery],
            min_value: 5_000.0,
            max_value: 800_000.0,
            appetite: Appetite {
                ports: strings(&["colombo", "salalah", "vizag", "durban", "santos"]),
                modes: vec![Sea, Road],
            },
            base_premium_rate: 0.14,
            rating: 3.9,
            notes: "Value option for shippers with higher deductible appetite.".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_entries_are_well_formed() {
        let catalogue = insurance_catalogue();
        assert_eq!(catalogue.len(), 5);
        for product in catalogue {
            assert!(product.min_value <= product.max_value, "{}", product.id);
            assert!(product.base_premium_rate > 0.0, "{}", product.id);
            assert!((0.0..=5.0).contains(&product.rating), "{}", product.id);
        }
    }

    #[test]
    fn catalogue_ids_are_unique() {
        let mut ids: Vec<_> = insurance_catalogue().iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), insurance_catalogue().len());
    }

    #[test]
    fn empty_port_is_never_accepted() {
        let product = &insurance_catalogue()[0];
        assert!(product.accepts_port(&PortSelection::new("singapore", "Singapore")));
        assert!(!product.accepts_port(&PortSelection::default()));
        assert!(!product.accepts_port(&PortSelection::new("", "Typed but unslugged")));
    }
}
