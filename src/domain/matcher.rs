//! Scores the insurance catalogue against a shipment and ranks the best fits.

use serde::Serialize;

use super::catalogue::{InsuranceProduct, ICC_A};
use super::shipment::{RiskProfile, Shipment};

pub const GOODS_POINTS: f64 = 25.0;
pub const VALUE_BAND_POINTS: f64 = 20.0;
pub const NEAR_MISS_POINTS: f64 = 8.0;
pub const BOTH_PORTS_POINTS: f64 = 20.0;
pub const ONE_PORT_POINTS: f64 = 15.0;
pub const MODE_POINTS: f64 = 15.0;
pub const POSTURE_POINTS: f64 = 10.0;
pub const RATING_MULTIPLIER: f64 = 3.0;
pub const RATING_CAP: f64 = 15.0;
pub const MAX_SCORE: f64 = 100.0;

/// Declared values up to `max_value * NEAR_MISS_FACTOR` (inclusive) still
/// earn partial credit.
pub const NEAR_MISS_FACTOR: f64 = 1.2;
/// Aggressive shippers get a bonus below this base rate.
pub const LEAN_RATE_THRESHOLD: f64 = 0.4;
/// Recommendations must score strictly above this to be shown.
pub const SCORE_THRESHOLD: f64 = 30.0;
pub const MAX_RECOMMENDATIONS: usize = 3;

pub const REASON_GOODS: &str = "Commodity appetite aligned.";
pub const REASON_VALUE_BAND: &str = "Declared value within underwriting band.";
pub const REASON_NEAR_MISS: &str = "Value slightly outside band; manual approval likely.";
pub const REASON_MODE: &str = "Supports selected transport mode.";
pub const REASON_CONSERVATIVE: &str = "High-coverage clause for conservative posture.";
pub const REASON_AGGRESSIVE: &str = "Lean rate aligns with cost-focused approach.";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Recommendation<'a> {
    pub product: &'a InsuranceProduct,
    pub score: f64,
    pub reasons: Vec<String>,
    pub estimated_premium: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    pub fn classify(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBand::High
        } else if score >= 60.0 {
            ScoreBand::Medium
        } else {
            ScoreBand::Low
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ScoreBand::High => "high",
            ScoreBand::Medium => "medium",
            ScoreBand::Low => "low",
        }
    }
}

pub fn rating_bonus(rating: f64) -> f64 {
    (rating * RATING_MULTIPLIER).min(RATING_CAP)
}

pub fn estimated_premium(declared_value: f64, base_premium_rate: f64) -> f64 {
    declared_value * base_premium_rate / 100.0
}

/// Score a single product. Total over any shipment; the result is in `[0, 100]`
/// as long as the product's rating is non-negative.
pub fn score_product<'a>(shipment: &Shipment, product: &'a InsuranceProduct) -> Recommendation<'a> {
    let mut score = 0.0;
    let mut reasons = Vec::new();

    if product.supports_goods(shipment.goods) {
        score += GOODS_POINTS;
        reasons.push(REASON_GOODS.to_string());
    }

    let value = shipment.declared_value;
    if value >= product.min_value && value <= product.max_value {
        score += VALUE_BAND_POINTS;
        reasons.push(REASON_VALUE_BAND.to_string());
    } else if value <= product.max_value * NEAR_MISS_FACTOR {
        score += NEAR_MISS_POINTS;
        reasons.push(REASON_NEAR_MISS.to_string());
    }

    let origin = &shipment.origin_port;
    let destination = &shipment.destination_port;
    let origin_hit = product.accepts_port(origin);
    let destination_hit = product.accepts_port(destination);
    let origin_label = label_or(&origin.label, "origin port");
    let destination_label = label_or(&destination.label, "destination port");
    match (origin_hit, destination_hit) {
        (true, true) => {
            score += BOTH_PORTS_POINTS;
            reasons.push(format!(
                "Known trade lane via {origin_label} & {destination_label}."
            ));
        }
        (true, false) => {
            score += ONE_PORT_POINTS;
            reasons.push(format!("Partial lane coverage via {origin_label}."));
        }
        (false, true) => {
            score += ONE_PORT_POINTS;
            reasons.push(format!("Partial lane coverage via {destination_label}."));
        }
        (false, false) => {}
    }

    if product.supports_mode(shipment.transport_mode) {
        score += MODE_POINTS;
        reasons.push(REASON_MODE.to_string());
    }

    match shipment.risk_profile {
        RiskProfile::Conservative if product.has_coverage(ICC_A) => {
            score += POSTURE_POINTS;
            reasons.push(REASON_CONSERVATIVE.to_string());
        }
        RiskProfile::Aggressive if product.base_premium_rate < LEAN_RATE_THRESHOLD => {
            score += POSTURE_POINTS;
            reasons.push(REASON_AGGRESSIVE.to_string());
        }
        _ => {}
    }

    score += rating_bonus(product.rating);

    Recommendation {
        product,
        score: score.min(MAX_SCORE),
        reasons,
        estimated_premium: estimated_premium(value, product.base_premium_rate),
    }
}

fn label_or<'s>(label: &'s str, fallback: &'s str) -> &'s str {
    if label.trim().is_empty() {
        fallback
    } else {
        label
    }
}

/// Keep scores above the threshold, best first, at most `limit` entries.
///
/// The sort is stable, so equal scores keep their input order.
pub fn rank_recommendations(
    mut scored: Vec<Recommendation<'_>>,
    limit: usize,
) -> Vec<Recommendation<'_>> {
    scored.retain(|rec| rec.score > SCORE_THRESHOLD);
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(limit);
    scored
}

/// Score every product and return the top matches for display.
pub fn match_products<'a>(
    shipment: &Shipment,
    catalogue: &'a [InsuranceProduct],
) -> Vec<Recommendation<'a>> {
    let scored = catalogue
        .iter()
        .map(|product| score_product(shipment, product))
        .collect::<Vec<_>>();
    let ranked = rank_recommendations(scored, MAX_RECOMMENDATIONS);
    tracing::debug!(
        goods = %shipment.goods,
        value = shipment.declared_value,
        matches = ranked.len(),
        "scored insurance catalogue"
    );
    ranked
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::domain::catalogue::{insurance_catalogue, Appetite};
    use crate::domain::shipment::{GoodsCategory, PortSelection, TransportMode};

    fn blue_shield() -> &'static InsuranceProduct {
        insurance_catalogue()
            .iter()
            .find(|p| p.product == "Blue Shield ICC (A)")
            .unwrap()
    }

    fn shipment(value: f64) -> Shipment {
        Shipment {
            goods: GoodsCategory::Electronics,
            declared_value: value,
            origin_country: Some("SG".into()),
            origin_port: PortSelection::new("singapore", "Singapore (SGSIN)"),
            destination_country: Some("NL".into()),
            destination_port: PortSelection::new("rotterdam", "Rotterdam (NLRTM)"),
            transport_mode: TransportMode::Sea,
            risk_profile: RiskProfile::Conservative,
            notes: None,
        }
    }

    /// A product that matches nothing a test shipment asks for.
    fn product(rating: f64, min: f64, max: f64) -> InsuranceProduct {
        InsuranceProduct {
            id: "test".into(),
            provider: "Test Underwriters".into(),
            product: "Test Cover".into(),
            url: String::new(),
            coverage: vec!["ICC C".into()],
            supported_goods: vec![GoodsCategory::Bulk],
            min_value: min,
            max_value: max,
            appetite: Appetite {
                ports: vec!["durban".into()],
                modes: vec![TransportMode::Rail],
            },
            base_premium_rate: 0.5,
            rating,
            notes: String::new(),
        }
    }

    fn fake(product: &InsuranceProduct, score: f64) -> Recommendation<'_> {
        Recommendation {
            product,
            score,
            reasons: Vec::new(),
            estimated_premium: 0.0,
        }
    }

    #[test]
    fn blue_shield_example_clamps_to_100() {
        let rec = score_product(&shipment(100_000.0), blue_shield());
        assert_eq!(rec.score, 100.0);
        assert_eq!(
            rec.reasons,
            vec![
                REASON_GOODS.to_string(),
                REASON_VALUE_BAND.to_string(),
                "Known trade lane via Singapore (SGSIN) & Rotterdam (NLRTM).".to_string(),
                REASON_MODE.to_string(),
                REASON_CONSERVATIVE.to_string(),
            ]
        );
        assert!((rec.estimated_premium - 420.0).abs() < 1e-9);
    }

    #[test]
    fn full_match_below_cap_sums_every_rule() {
        let mut product = blue_shield().clone();
        product.rating = 1.0;
        let rec = score_product(&shipment(100_000.0), &product);
        assert!((rec.score - (25.0 + 20.0 + 20.0 + 15.0 + 10.0 + 3.0)).abs() < 1e-9);
    }

    #[test]
    fn zero_rule_match_scores_rating_bonus_only() {
        let product = product(4.2, 0.0, 10.0);
        let rec = score_product(&shipment(1_000.0), &product);
        assert!((rec.score - 12.6).abs() < 1e-9);
        assert!(rec.reasons.is_empty());
    }

    #[test]
    fn rating_bonus_is_capped() {
        assert_eq!(rating_bonus(5.0), 15.0);
        assert!((rating_bonus(3.9) - 11.7).abs() < 1e-9);
    }

    #[test]
    fn band_edges_count_as_within_band() {
        let product = product(0.0, 50_000.0, 100_000.0);
        for value in [50_000.0, 100_000.0] {
            let rec = score_product(&shipment(value), &product);
            assert_eq!(rec.score, VALUE_BAND_POINTS, "value {value}");
            assert_eq!(rec.reasons, vec![REASON_VALUE_BAND.to_string()]);
        }
    }

    #[test]
    fn near_miss_boundary_is_inclusive() {
        let product = product(0.0, 50_000.0, 100_000.0);
        let at_edge = score_product(&shipment(100_000.0 * NEAR_MISS_FACTOR), &product);
        assert_eq!(at_edge.score, NEAR_MISS_POINTS);
        assert_eq!(at_edge.reasons, vec![REASON_NEAR_MISS.to_string()]);

        let beyond = score_product(&shipment(120_001.0), &product);
        assert_eq!(beyond.score, 0.0);
    }

    #[test]
    fn value_below_minimum_takes_near_miss_branch() {
        let product = product(0.0, 50_000.0, 100_000.0);
        let rec = score_product(&shipment(1_000.0), &product);
        assert_eq!(rec.score, NEAR_MISS_POINTS);
    }

    #[test]
    fn single_port_match_uses_partial_wording() {
        let mut ship = shipment(100_000.0);
        ship.destination_port = PortSelection::new("durban", "Durban (ZADUR)");
        let rec = score_product(&ship, blue_shield());
        assert!(rec
            .reasons
            .contains(&"Partial lane coverage via Singapore (SGSIN).".to_string()));

        let mut bare = blue_shield().clone();
        bare.rating = 0.0;
        bare.coverage.clear();
        bare.supported_goods.clear();
        bare.appetite.modes.clear();
        let rec = score_product(&ship, &bare);
        assert_eq!(rec.score, VALUE_BAND_POINTS + ONE_PORT_POINTS);
    }

    #[test]
    fn missing_port_label_falls_back_to_role() {
        let mut ship = shipment(100_000.0);
        ship.origin_port = PortSelection::new("singapore", "");
        ship.destination_port = PortSelection::default();
        let rec = score_product(&ship, blue_shield());
        assert!(rec
            .reasons
            .contains(&"Partial lane coverage via origin port.".to_string()));
    }

    #[test]
    fn aggressive_posture_rewards_lean_rates() {
        let mut ship = shipment(100_000.0);
        ship.goods = GoodsCategory::Machinery;
        ship.risk_profile = RiskProfile::Aggressive;
        let harborline = &insurance_catalogue()[1];
        let rec = score_product(&ship, harborline);
        assert!(rec.reasons.contains(&REASON_AGGRESSIVE.to_string()));

        let rec = score_product(&ship, blue_shield());
        assert!(!rec.reasons.contains(&REASON_AGGRESSIVE.to_string()));
    }

    #[test]
    fn neutral_posture_gets_no_posture_bonus() {
        let mut ship = shipment(100_000.0);
        ship.risk_profile = RiskProfile::Neutral;
        let rec = score_product(&ship, blue_shield());
        assert!(!rec.reasons.contains(&REASON_CONSERVATIVE.to_string()));
    }

    #[test]
    fn ranking_filters_threshold_and_keeps_top_three() {
        let products: Vec<_> = (0..5).map(|_| product(0.0, 0.0, 1.0)).collect();
        let scores = [10.0, 35.0, 60.0, 90.0, 31.0];
        let scored = products
            .iter()
            .zip(scores)
            .map(|(p, s)| fake(p, s))
            .collect::<Vec<_>>();
        let ranked = rank_recommendations(scored, MAX_RECOMMENDATIONS);
        let got: Vec<f64> = ranked.iter().map(|r| r.score).collect();
        assert_eq!(got, vec![90.0, 60.0, 35.0]);
    }

    #[test]
    fn threshold_is_exclusive() {
        let p = product(0.0, 0.0, 1.0);
        let ranked = rank_recommendations(vec![fake(&p, 30.0)], MAX_RECOMMENDATIONS);
        assert!(ranked.is_empty());
    }

    #[test]
    fn ties_keep_input_order() {
        let mut first = product(0.0, 0.0, 1.0);
        first.id = "first".into();
        let mut second = product(0.0, 0.0, 1.0);
        second.id = "second".into();
        let mut third = product(0.0, 0.0, 1.0);
        third.id = "third".into();
        let scored = vec![fake(&first, 50.0), fake(&second, 70.0), fake(&third, 50.0)];
        let ranked = rank_recommendations(scored, MAX_RECOMMENDATIONS);
        let ids: Vec<_> = ranked.iter().map(|r| r.product.id.as_str()).collect();
        assert_eq!(ids, vec!["second", "first", "third"]);
    }

    #[test]
    fn out_of_appetite_shipment_yields_no_matches() {
        let ship = Shipment {
            goods: GoodsCategory::Textiles,
            declared_value: 50_000_000.0,
            origin_country: None,
            origin_port: PortSelection::default(),
            destination_country: None,
            destination_port: PortSelection::default(),
            transport_mode: TransportMode::Air,
            risk_profile: RiskProfile::Neutral,
            notes: None,
        };
        let catalogue = vec![product(4.0, 0.0, 10.0), product(5.0, 1_000.0, 2_000.0)];
        assert!(match_products(&ship, &catalogue).is_empty());
    }

    #[test]
    fn catalogue_match_puts_blue_shield_first() {
        let ranked = match_products(&shipment(100_000.0), insurance_catalogue());
        assert!(!ranked.is_empty() && ranked.len() <= MAX_RECOMMENDATIONS);
        assert_eq!(ranked[0].product.id, "atlas-icc-a");
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn score_bands() {
        assert_eq!(ScoreBand::classify(80.0), ScoreBand::High);
        assert_eq!(ScoreBand::classify(79.9), ScoreBand::Medium);
        assert_eq!(ScoreBand::classify(60.0), ScoreBand::Medium);
        assert_eq!(ScoreBand::classify(59.0), ScoreBand::Low);
    }

    fn arb_shipment() -> impl Strategy<Value = Shipment> {
        let ports = prop::sample::select(vec![
            "", "singapore", "rotterdam", "dubai", "hamburg", "durban", "miami", "chicago",
        ]);
        (
            prop::sample::select(GoodsCategory::ALL.to_vec()),
            1.0f64..10_000_000.0,
            ports.clone(),
            ports,
            prop::sample::select(TransportMode::ALL.to_vec()),
            prop::sample::select(RiskProfile::ALL.to_vec()),
        )
            .prop_map(|(goods, value, origin, destination, mode, risk)| Shipment {
                goods,
                declared_value: value,
                origin_country: None,
                origin_port: PortSelection::new(origin, origin),
                destination_country: None,
                destination_port: PortSelection::new(destination, destination),
                transport_mode: mode,
                risk_profile: risk,
                notes: None,
            })
    }

    proptest! {
        #[test]
        fn every_score_is_within_bounds(ship in arb_shipment()) {
            for product in insurance_catalogue() {
                let rec = score_product(&ship, product);
                prop_assert!((0.0..=MAX_SCORE).contains(&rec.score));
            }
        }

        #[test]
        fn matches_are_sorted_above_threshold_and_bounded(ship in arb_shipment()) {
            let ranked = match_products(&ship, insurance_catalogue());
            prop_assert!(ranked.len() <= MAX_RECOMMENDATIONS);
            prop_assert!(ranked.iter().all(|r| r.score > SCORE_THRESHOLD));
            prop_assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
        }
    }
}
