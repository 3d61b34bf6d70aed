use dioxus::prelude::*;

use crate::app::Route;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div {
            header {
                class: "app-header",
                div {
                    h1 { "🛳️ {APP_NAME}" }
                    p { class: "tagline", "Match your cargo to the right marine cover." }
                }
                nav { class: "tabs",
                    TabButton {
                        active: matches!(current_route, Route::Insurance {}),
                        onclick: move |_| { nav.push(Route::Insurance {}); },
                        label: "Insurance",
                    }
                    TabButton {
                        active: matches!(current_route, Route::Documents {}),
                        onclick: move |_| { nav.push(Route::Documents {}); },
                        label: "Documents",
                    }
                    TabButton {
                        active: matches!(current_route, Route::Settings {}),
                        onclick: move |_| { nav.push(Route::Settings {}); },
                        label: "⚙️ Settings",
                    }
                }
            }
            main {
                {children}
            }
            footer { class: "app-footer", "{APP_NAME} {version_label()}" }
        }
    }
}

#[component]
fn TabButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active { "tab active" } else { "tab" };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
