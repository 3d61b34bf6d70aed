//! View-models for the results panel. Everything the insurance page shows is
//! derived here so it can be checked without a renderer.

use crate::domain::{DisplayedRecommendation, Recommendation, ScoreBand};

pub const EMPTY_RESULTS_MESSAGE: &str =
    "No strong matches yet. Try adjusting commodity or shipment value.";

#[derive(Clone, Debug, PartialEq)]
pub struct RecommendationCard {
    pub product_id: String,
    pub title: String,
    pub provider: String,
    pub score_label: String,
    pub band: ScoreBand,
    pub tags: Vec<String>,
    pub premium_label: String,
    pub rating_label: String,
    pub url: String,
    pub reasons: Vec<String>,
    pub notes: String,
}

impl From<&DisplayedRecommendation> for RecommendationCard {
    fn from(rec: &DisplayedRecommendation) -> Self {
        Self {
            product_id: rec.product_id.clone(),
            title: rec.product.clone(),
            provider: rec.provider.clone(),
            score_label: format!("Score {}/100", rec.score.round()),
            band: ScoreBand::classify(rec.score),
            tags: rec.coverage.clone(),
            premium_label: format!("Premium ≈ ${:.2}", rec.estimated_premium),
            rating_label: format!("Rating: {}", rec.rating),
            url: rec.url.clone(),
            reasons: rec.reasons.clone(),
            notes: rec.notes.clone(),
        }
    }
}

impl From<&Recommendation<'_>> for RecommendationCard {
    fn from(rec: &Recommendation<'_>) -> Self {
        RecommendationCard::from(&DisplayedRecommendation::from(rec))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ResultsView {
    /// Nothing submitted yet.
    Idle,
    /// Submitted, but nothing cleared the threshold.
    Empty(&'static str),
    Cards(Vec<RecommendationCard>),
}

impl ResultsView {
    pub fn build(results: Option<&[DisplayedRecommendation]>) -> Self {
        match results {
            None => ResultsView::Idle,
            Some([]) => ResultsView::Empty(EMPTY_RESULTS_MESSAGE),
            Some(recs) => ResultsView::Cards(recs.iter().map(RecommendationCard::from).collect()),
        }
    }

    pub fn cards(&self) -> &[RecommendationCard] {
        match self {
            ResultsView::Cards(cards) => cards,
            _ => &[],
        }
    }
}
