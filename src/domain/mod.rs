//! Domain logic for shipment insurance matching lives here.

pub mod app_state;
pub mod catalogue;
pub mod documents;
pub mod entities;
pub mod form;
pub mod matcher;
pub mod ports;
pub mod shipment;

pub use app_state::{AppState, CacheResource, DisplayedRecommendation, PersistedState};
pub use catalogue::insurance_catalogue;
pub use entities::{sort_countries, Country};
pub use form::ShipmentForm;
pub use matcher::{match_products, Recommendation, ScoreBand};
pub use ports::{fallback_countries, ports_for, MANUAL_PORT};
pub use shipment::{GoodsCategory, RiskProfile, TransportMode};
