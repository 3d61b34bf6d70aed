use std::{
    collections::HashMap,
    time::{Duration, SystemTime},
};

use serde::{Deserialize, Serialize};

use super::entities::Country;
use super::form::ShipmentForm;
use super::matcher::Recommendation;

/// Everything the dashboard owns for the lifetime of the window. Created once
/// by the root component and handed to pages through context.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub countries: Vec<Country>,
    pub form: ShipmentForm,
    /// What the results panel currently shows. `None` until the first submit.
    pub results: Option<Vec<DisplayedRecommendation>>,
    pub cache: CacheTimestamps,
}

/// A recommendation detached from the catalogue borrow so it can live in
/// component state.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DisplayedRecommendation {
    pub product_id: String,
    pub product: String,
    pub provider: String,
    pub url: String,
    pub coverage: Vec<String>,
    pub rating: f64,
    pub notes: String,
    pub score: f64,
    pub reasons: Vec<String>,
    pub estimated_premium: f64,
}

impl From<&Recommendation<'_>> for DisplayedRecommendation {
    fn from(rec: &Recommendation<'_>) -> Self {
        Self {
            product_id: rec.product.id.clone(),
            product: rec.product.product.clone(),
            provider: rec.product.provider.clone(),
            url: rec.product.url.clone(),
            coverage: rec.product.coverage.clone(),
            rating: rec.product.rating,
            notes: rec.product.notes.clone(),
            score: rec.score,
            reasons: rec.reasons.clone(),
            estimated_premium: rec.estimated_premium,
        }
    }
}

impl AppState {
    pub fn show_results(&mut self, recommendations: &[Recommendation<'_>]) {
        self.results = Some(
            recommendations
                .iter()
                .map(DisplayedRecommendation::from)
                .collect(),
        );
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.form = persisted.form;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            form: self.form.clone(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct CacheTimestamps {
    entries: HashMap<CacheResource, SystemTime>,
}

impl CacheTimestamps {
    pub fn record_fetch(&mut self, resource: CacheResource, fetched_at: SystemTime) {
        self.entries.insert(resource, fetched_at);
    }

    pub fn fetched_at(&self, resource: &CacheResource) -> Option<SystemTime> {
        self.entries.get(resource).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CacheResource, &SystemTime)> {
        self.entries.iter()
    }

    pub fn is_stale(&self, resource: &CacheResource, ttl: Duration) -> bool {
        self.fetched_at(resource)
            .map(|time| time.elapsed().map(|elapsed| elapsed > ttl).unwrap_or(true))
            .unwrap_or(true)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CacheResource {
    Countries,
}

/// The slice of state that survives a restart. Results are deliberately
/// absent: they are recomputed on every submit.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub form: ShipmentForm,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalogue::insurance_catalogue;
    use crate::domain::matcher::score_product;
    use crate::domain::shipment::{
        GoodsCategory, PortSelection, RiskProfile, Shipment, TransportMode,
    };

    #[test]
    fn missing_timestamp_is_stale() {
        let cache = CacheTimestamps::default();
        assert!(cache.is_stale(&CacheResource::Countries, Duration::from_secs(60)));
    }

    #[test]
    fn fresh_timestamp_is_not_stale() {
        let mut cache = CacheTimestamps::default();
        cache.record_fetch(CacheResource::Countries, SystemTime::now());
        assert!(!cache.is_stale(&CacheResource::Countries, Duration::from_secs(60)));
        assert!(cache.fetched_at(&CacheResource::Countries).is_some());
    }

    #[test]
    fn show_results_replaces_previous_results() {
        let shipment = Shipment {
            goods: GoodsCategory::Electronics,
            declared_value: 100_000.0,
            origin_country: None,
            origin_port: PortSelection::default(),
            destination_country: None,
            destination_port: PortSelection::default(),
            transport_mode: TransportMode::Sea,
            risk_profile: RiskProfile::Neutral,
            notes: None,
        };
        let rec = score_product(&shipment, &insurance_catalogue()[0]);

        let mut state = AppState::default();
        assert!(state.results.is_none());
        state.show_results(std::slice::from_ref(&rec));
        let shown = state.results.as_deref().unwrap();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].product_id, "atlas-icc-a");

        state.show_results(&[]);
        assert_eq!(state.results.as_deref(), Some(&[][..]));
    }

    #[test]
    fn persisted_state_carries_only_the_form() {
        let mut state = AppState::default();
        state.form.goods_type = "bulk".into();
        state.results = Some(Vec::new());
        let mut restored = AppState::default();
        restored.apply_persisted(state.to_persisted());
        assert_eq!(restored.form.goods_type, "bulk");
        assert!(restored.results.is_none());
    }
}
