use std::time::SystemTime;

use dioxus::prelude::*;

use crate::{
    app::CountryRefresh,
    domain::{AppState, CacheResource},
    infra::cache::{
        clear_country_cache, humanize_secs, load_country_cache, CountryCache, COUNTRY_CACHE_TTL,
    },
    ui::components::toast::{push_toast, ToastKind, ToastMessage},
    util::{
        export::{default_export_dir, EXPORT_FILENAME},
        version::{version_label, APP_NAME},
    },
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let CountryRefresh(mut refresh) = use_context::<CountryRefresh>();

    let country_count = state.with(|st| st.countries.len());
    let cache_entries = state.with(|st| {
        st.cache
            .iter()
            .map(|(resource, time)| {
                (
                    cache_label(resource),
                    humanize_age(*time),
                    st.cache.is_stale(resource, COUNTRY_CACHE_TTL),
                )
            })
            .collect::<Vec<_>>()
    });

    // Re-read the file only after a refresh or a completed country load.
    let disk_cache = use_memo(move || {
        let _generation = refresh();
        let _loaded_at = state.with(|st| st.cache.fetched_at(&CacheResource::Countries));
        load_country_cache().as_ref().map(disk_cache_summary)
    });

    let export_path = default_export_dir().join(EXPORT_FILENAME);

    let on_refresh = move |_| {
        if let Err(err) = clear_country_cache() {
            tracing::warn!("failed to remove country cache file: {err}");
        }
        refresh.with_mut(|generation| *generation += 1);
        push_toast(toasts, ToastKind::Info, "Refreshing the country list...");
    };

    rsx! {
        div {
            section {
                class: "panel",
                h2 { "Country Directory" }
                p { "{country_count} countries available for origin and destination." }
                p { class: "muted",
                    {disk_cache().unwrap_or_else(|| "No country list saved on disk yet.".to_string())}
                }
                div { class: "actions",
                    button { class: "btn primary", onclick: on_refresh, "Refresh Countries" }
                }
            }

            section {
                class: "panel",
                h2 { "Cache Status" }
                if cache_entries.is_empty() {
                    p { "No cached fetches yet." }
                } else {
                    ul { class: "status-list",
                        for (label, age, stale) in cache_entries {
                            li {
                                span { "{label}" }
                                span {
                                    "{age}"
                                    if stale { " (stale)" }
                                }
                            }
                        }
                    }
                }
            }

            section {
                class: "panel",
                h2 { "Export" }
                p { "Recommendations are exported to {export_path.display()}" }
            }

            section {
                class: "panel",
                h2 { "About" }
                p { "{APP_NAME} {version_label()}" }
                p { "Country names courtesy of the REST Countries project." }
            }
        }
    }
}

fn cache_label(resource: &CacheResource) -> &'static str {
    match resource {
        CacheResource::Countries => "Countries",
    }
}

fn disk_cache_summary(cache: &CountryCache) -> String {
    let stamp = cache
        .cached_at_rfc3339()
        .unwrap_or_else(|| "unknown time".to_string());
    format!(
        "{} countries saved {} ago ({stamp})",
        cache.countries.len(),
        cache.age_string()
    )
}

fn humanize_age(time: SystemTime) -> String {
    match SystemTime::now().duration_since(time) {
        Ok(elapsed) => format!("{} ago", humanize_secs(elapsed.as_secs())),
        Err(_) => "just now".to_string(),
    }
}
