use dioxus::prelude::*;

use crate::domain::ScoreBand;

#[component]
pub fn ScoreBadge(label: String, band: ScoreBand) -> Element {
    rsx! {
        span {
            class: "score-badge {band.css_class()}",
            "{label}"
        }
    }
}
