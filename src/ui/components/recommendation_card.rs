use dioxus::prelude::*;

use crate::ui::{components::score_badge::ScoreBadge, presenter::RecommendationCard};

#[component]
pub fn RecommendationCardView(card: RecommendationCard) -> Element {
    rsx! {
        article {
            class: "result-card",
            header {
                div {
                    h3 { "{card.title}" }
                    p { class: "provider", "{card.provider}" }
                }
                ScoreBadge { label: card.score_label.clone(), band: card.band }
            }
            div {
                class: "tag-row",
                for tag in card.tags.iter() {
                    span { key: "{tag}", class: "tag", "{tag}" }
                }
                span { class: "tag", "{card.premium_label}" }
                span { class: "tag", "{card.rating_label}" }
            }
            a {
                class: "result-link",
                href: "{card.url}",
                target: "_blank",
                rel: "noopener",
                "View policy deck ↗"
            }
            ul {
                for reason in card.reasons.iter() {
                    li { key: "{reason}", "{reason}" }
                }
            }
            p { class: "notes", "{card.notes}" }
        }
    }
}
