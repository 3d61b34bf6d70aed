pub mod recommendation_card;
pub mod score_badge;
pub mod toast;
