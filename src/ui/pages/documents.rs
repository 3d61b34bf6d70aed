use dioxus::prelude::*;

use crate::domain::documents::{
    default_document_country, mode_filter_label, parse_mode_filter, quick_checklist,
    requirements_for, DocumentMode, ALL_MODES, CHECKLIST_SOURCE_NOTE, DOCUMENT_MATRIX,
};

#[component]
pub fn DocumentsPage() -> Element {
    let mut country_id = use_signal(|| {
        default_document_country()
            .map(|country| country.id.to_string())
            .unwrap_or_default()
    });
    let mut mode_raw = use_signal(|| ALL_MODES.to_string());
    // The checklist is generated on demand and hidden again by any new selection.
    let mut checklist_open = use_signal(|| false);

    let selected = country_id();
    let mode = parse_mode_filter(&mode_raw());
    let requirements = requirements_for(&selected, mode);
    let checklist = checklist_open().then(|| quick_checklist(&selected, mode));

    rsx! {
        div {
            section {
                class: "panel",
                h2 { "Trade Documents" }
                div { class: "form-grid",
                    div { class: "field",
                        label { "Country" }
                        select {
                            value: "{selected}",
                            onchange: move |evt| {
                                country_id.set(evt.value());
                                checklist_open.set(false);
                            },
                            for country in DOCUMENT_MATRIX.iter() {
                                option {
                                    key: "{country.id}",
                                    value: country.id,
                                    selected: country.id == selected,
                                    "{country.name}"
                                }
                            }
                        }
                    }
                    div { class: "field",
                        label { "Mode" }
                        select {
                            value: "{mode_raw}",
                            onchange: move |evt| {
                                mode_raw.set(evt.value());
                                checklist_open.set(false);
                            },
                            option { value: ALL_MODES, selected: mode.is_none(), "{mode_filter_label(None)}" }
                            for option_mode in DocumentMode::ALL {
                                option {
                                    key: "{option_mode.slug()}",
                                    value: option_mode.slug(),
                                    selected: mode == Some(option_mode),
                                    "{option_mode.label()}"
                                }
                            }
                        }
                    }
                }
                div { class: "actions",
                    button {
                        class: "btn primary",
                        r#type: "button",
                        onclick: move |_| checklist_open.set(true),
                        "Generate quick checklist"
                    }
                }
                {checklist.map(|result| rsx! {
                    div { class: "doc-checklist",
                        {match result {
                            Ok(list) => rsx! {
                                h4 { "{list.title}" }
                                ul {
                                    for item in list.items.iter() {
                                        li { key: "{item}", "{item}" }
                                    }
                                }
                                p { class: "muted", "{CHECKLIST_SOURCE_NOTE}" }
                            },
                            Err(err) => rsx! { p { "{err}" } },
                        }}
                    }
                })}
            }

            {match requirements {
                Ok(found) => rsx! {
                    section { class: "panel",
                        header { class: "doc-table-head",
                            div {
                                h3 { "{found.country.name}" }
                                p { class: "muted", "{found.country.corridor}" }
                            }
                            span { class: "tag", "{found.mode_label}" }
                        }
                        table { class: "doc-table",
                            thead {
                                tr {
                                    th { "Document" }
                                    th { "Typical Use" }
                                    th { "Issuer" }
                                    th { "Official Link" }
                                }
                            }
                            tbody {
                                for req in found.country.requirements.iter() {
                                    tr { key: "{req.document}",
                                        td { "{req.document}" }
                                        td { "{req.typical_use}" }
                                        td { "{req.issuer}" }
                                        td {
                                            a {
                                                class: "result-link",
                                                href: req.link_url,
                                                target: "_blank",
                                                rel: "noopener",
                                                "{req.link_label}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                Err(err) => rsx! {
                    section { class: "results empty",
                        p { "{err}" }
                    }
                },
            }}
        }
    }
}
