use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::UserDirs;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;

use crate::ui::presenter::RecommendationCard;

pub const EXPORT_FILENAME: &str = "insurance-recommendations.json";

/// One exported card, shaped like what the user sees on screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub policy: String,
    pub provider: String,
    pub score: String,
    pub url: String,
    pub details: Vec<String>,
}

impl From<&RecommendationCard> for ExportRecord {
    fn from(card: &RecommendationCard) -> Self {
        Self {
            policy: card.title.clone(),
            provider: card.provider.clone(),
            score: card.score_label.clone(),
            url: card.url.clone(),
            details: card.reasons.clone(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("No results to export. Please generate recommendations first.")]
    NoResults,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

/// Pretty-printed JSON for the displayed cards.
pub fn render_export(cards: &[RecommendationCard]) -> Result<String, ExportError> {
    if cards.is_empty() {
        return Err(ExportError::NoResults);
    }
    let records: Vec<ExportRecord> = cards.iter().map(ExportRecord::from).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Write the export into `dir` and return the written path.
pub fn export_to_dir(cards: &[RecommendationCard], dir: &Path) -> Result<PathBuf, ExportError> {
    let json = render_export(cards)?;
    fs::create_dir_all(dir)?;
    let path = dir.join(EXPORT_FILENAME);
    fs::write(&path, json)?;
    tracing::info!(path = %path.display(), records = cards.len(), "exported recommendations");
    Ok(path)
}

/// The user's download folder, or the working directory when the platform
/// has none.
pub fn default_export_dir() -> PathBuf {
    UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shipment::{
        GoodsCategory, PortSelection, RiskProfile, Shipment, TransportMode,
    };
    use crate::domain::{insurance_catalogue, match_products};

    fn cards() -> Vec<RecommendationCard> {
        let shipment = Shipment {
            goods: GoodsCategory::Electronics,
            declared_value: 100_000.0,
            origin_country: Some("SG".into()),
            origin_port: PortSelection::new("singapore", "Singapore (SGSIN)"),
            destination_country: Some("NL".into()),
            destination_port: PortSelection::new("rotterdam", "Rotterdam (NLRTM)"),
            transport_mode: TransportMode::Sea,
            risk_profile: RiskProfile::Conservative,
            notes: None,
        };
        match_products(&shipment, insurance_catalogue())
            .iter()
            .map(RecommendationCard::from)
            .collect()
    }

    #[test]
    fn empty_export_is_refused() {
        assert!(matches!(render_export(&[]), Err(ExportError::NoResults)));
    }

    #[test]
    fn export_shape_mirrors_cards() {
        let cards = cards();
        let json = render_export(&cards).unwrap();
        let records: Vec<ExportRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(records.len(), cards.len());
        assert_eq!(records[0].policy, "Blue Shield ICC (A)");
        assert_eq!(records[0].score, "Score 100/100");
        assert_eq!(records[0].details, cards[0].reasons);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let keys: Vec<_> = value[0].as_object().unwrap().keys().cloned().collect();
        for key in ["policy", "provider", "score", "url", "details"] {
            assert!(keys.iter().any(|k| k == key), "missing {key}");
        }
    }

    #[test]
    fn export_writes_file() {
        let dir = std::env::temp_dir().join(format!("cargo-cover-export-{}", std::process::id()));
        let path = export_to_dir(&cards(), &dir).unwrap();
        assert_eq!(path.file_name().unwrap(), EXPORT_FILENAME);
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("Atlas Marine Mutual"));
        let _ = fs::remove_dir_all(&dir);
    }
}
