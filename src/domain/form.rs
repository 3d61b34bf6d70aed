use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ports::resolve_port_selection;
use super::shipment::{GoodsCategory, RiskProfile, Shipment, TransportMode};

/// Raw field values of the shipment form, exactly as typed or selected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShipmentForm {
    pub goods_type: String,
    pub shipment_value: String,
    pub origin_country: String,
    pub origin_port: String,
    pub origin_port_manual: String,
    pub destination_country: String,
    pub destination_port: String,
    pub destination_port_manual: String,
    pub transport_mode: String,
    pub risk_profile: String,
    pub notes: String,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FormError {
    #[error("Pick a goods category first.")]
    MissingGoods,
    #[error("Unknown goods category '{0}'.")]
    UnknownGoods(String),
    #[error("Shipment value '{0}' is not a number.")]
    InvalidValue(String),
    #[error("Shipment value must be greater than zero.")]
    NonPositiveValue,
    #[error("Unknown transport mode '{0}'.")]
    UnknownMode(String),
    #[error("Unknown risk profile '{0}'.")]
    UnknownRisk(String),
}

impl ShipmentForm {
    pub fn parse(&self) -> Result<Shipment, FormError> {
        let goods_raw = self.goods_type.trim();
        if goods_raw.is_empty() {
            return Err(FormError::MissingGoods);
        }
        let goods: GoodsCategory = goods_raw
            .parse()
            .map_err(|_| FormError::UnknownGoods(goods_raw.to_string()))?;

        let declared_value = parse_amount(&self.shipment_value)?;

        let mode_raw = self.transport_mode.trim();
        let transport_mode: TransportMode = mode_raw
            .parse()
            .map_err(|_| FormError::UnknownMode(mode_raw.to_string()))?;

        let risk_raw = self.risk_profile.trim();
        let risk_profile: RiskProfile = risk_raw
            .parse()
            .map_err(|_| FormError::UnknownRisk(risk_raw.to_string()))?;

        Ok(Shipment {
            goods,
            declared_value,
            origin_country: non_empty(&self.origin_country),
            origin_port: resolve_port_selection(&self.origin_port, &self.origin_port_manual),
            destination_country: non_empty(&self.destination_country),
            destination_port: resolve_port_selection(
                &self.destination_port,
                &self.destination_port_manual,
            ),
            transport_mode,
            risk_profile,
            notes: non_empty(&self.notes),
        })
    }
}

/// Plain digits, or comma grouping in threes, with an optional fraction.
const AMOUNT_PATTERN: &str = r"^[+-]?(?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d+)?$";

fn amount_grammar() -> Option<&'static Regex> {
    static GRAMMAR: OnceLock<Option<Regex>> = OnceLock::new();
    GRAMMAR
        .get_or_init(|| {
            Regex::new(AMOUNT_PATTERN)
                .map_err(|err| tracing::error!("invalid amount pattern: {err}"))
                .ok()
        })
        .as_ref()
}

/// Accepts thousands separators ("1,250,000") and surrounding whitespace.
/// Misplaced separators ("1,5", "12,50") are rejected rather than dropped.
fn parse_amount(raw: &str) -> Result<f64, FormError> {
    let trimmed = raw.trim();
    let invalid = || FormError::InvalidValue(trimmed.to_string());

    if !amount_grammar().is_some_and(|grammar| grammar.is_match(trimmed)) {
        return Err(invalid());
    }
    let value: f64 = trimmed.replace(',', "").parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    if value <= 0.0 {
        return Err(FormError::NonPositiveValue);
    }
    Ok(value)
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MANUAL_PORT;
    use crate::domain::shipment::PortSelection;

    fn filled() -> ShipmentForm {
        ShipmentForm {
            goods_type: "electronics".into(),
            shipment_value: "100000".into(),
            origin_country: "SG".into(),
            origin_port: "singapore".into(),
            destination_country: "NL".into(),
            destination_port: "rotterdam".into(),
            transport_mode: "sea".into(),
            risk_profile: "conservative".into(),
            ..Default::default()
        }
    }

    #[test]
    fn parses_complete_form() {
        let shipment = filled().parse().unwrap();
        assert_eq!(shipment.goods, GoodsCategory::Electronics);
        assert_eq!(shipment.declared_value, 100_000.0);
        assert_eq!(shipment.origin_country.as_deref(), Some("SG"));
        assert_eq!(shipment.origin_port.slug, "singapore");
        assert_eq!(shipment.destination_port.label, "Rotterdam (NLRTM)");
        assert_eq!(shipment.transport_mode, TransportMode::Sea);
        assert_eq!(shipment.risk_profile, RiskProfile::Conservative);
        assert_eq!(shipment.notes, None);
    }

    #[test]
    fn manual_destination_is_resolved() {
        let mut form = filled();
        form.destination_port = MANUAL_PORT.into();
        form.destination_port_manual = "Port Louis".into();
        let shipment = form.parse().unwrap();
        assert_eq!(
            shipment.destination_port,
            PortSelection::new("port-louis", "Port Louis")
        );
    }

    #[test]
    fn value_accepts_thousands_separators() {
        let mut form = filled();
        form.shipment_value = " 1,250,000 ".into();
        assert_eq!(form.parse().unwrap().declared_value, 1_250_000.0);
    }

    #[test]
    fn rejects_bad_values() {
        let mut form = filled();
        form.shipment_value = "lots".into();
        assert_eq!(form.parse(), Err(FormError::InvalidValue("lots".into())));

        form.shipment_value = "0".into();
        assert_eq!(form.parse(), Err(FormError::NonPositiveValue));

        form.shipment_value = "-5".into();
        assert_eq!(form.parse(), Err(FormError::NonPositiveValue));

        form.shipment_value = "inf".into();
        assert_eq!(form.parse(), Err(FormError::InvalidValue("inf".into())));
    }

    #[test]
    fn misplaced_separators_are_rejected() {
        let mut form = filled();
        for raw in ["1,5", "12,50", ",,7", "1_0", "1,2345", "1,000,00", "12,345.6,7"] {
            form.shipment_value = raw.into();
            assert_eq!(
                form.parse(),
                Err(FormError::InvalidValue(raw.into())),
                "{raw} should not parse"
            );
        }
    }

    #[test]
    fn grouped_and_decimal_values_parse() {
        let mut form = filled();
        for (raw, expected) in [
            ("999", 999.0),
            ("1,000", 1_000.0),
            ("12,345.50", 12_345.5),
            ("250000.75", 250_000.75),
        ] {
            form.shipment_value = raw.into();
            assert_eq!(form.parse().unwrap().declared_value, expected, "{raw}");
        }
    }

    #[test]
    fn overflowing_value_is_not_a_number() {
        let mut form = filled();
        form.shipment_value = "1e400".into();
        assert_eq!(form.parse(), Err(FormError::InvalidValue("1e400".into())));

        form.shipment_value = "9".repeat(400);
        assert_eq!(
            form.parse(),
            Err(FormError::InvalidValue("9".repeat(400)))
        );
    }

    #[test]
    fn rejects_unknown_enums() {
        let mut form = filled();
        form.goods_type = String::new();
        assert_eq!(form.parse(), Err(FormError::MissingGoods));

        let mut form = filled();
        form.goods_type = "livestock".into();
        assert_eq!(form.parse(), Err(FormError::UnknownGoods("livestock".into())));

        let mut form = filled();
        form.transport_mode = "pipeline".into();
        assert_eq!(form.parse(), Err(FormError::UnknownMode("pipeline".into())));

        let mut form = filled();
        form.risk_profile = "reckless".into();
        assert_eq!(form.parse(), Err(FormError::UnknownRisk("reckless".into())));
    }

    #[test]
    fn form_round_trips_with_camel_case_keys() {
        let json = serde_json::to_value(filled()).unwrap();
        assert_eq!(json["goodsType"], "electronics");
        assert_eq!(json["shipmentValue"], "100000");
    }
}
