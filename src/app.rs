use std::time::SystemTime;

use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::{AppState, CacheResource},
    infra::countries::{fallback_country_list, CacheStatus, CountryClient},
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage, ToastStack},
        pages::{DocumentsPage, InsurancePage, SettingsPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_state},
    },
};

/// Bumped to force the country list to be fetched again.
#[derive(Clone, Copy, PartialEq)]
pub struct CountryRefresh(pub Signal<u32>);

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Insurance {},
    #[route("/documents")]
    Documents {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_hook({
        let mut state = state;
        move || {
            if let Some(saved) = load_persisted_state() {
                state.with_mut(|st| st.apply_persisted(saved));
            }
        }
    });
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    let client = use_hook(|| match CountryClient::new() {
        Ok(client) => Some(client),
        Err(err) => {
            tracing::error!("failed to initialise country client: {err}");
            None
        }
    });
    use_context_provider(|| client.clone());

    let refresh = use_signal(|| 0_u32);
    use_context_provider(|| CountryRefresh(refresh));

    let _countries = use_resource(move || {
        let client = client.clone();
        async move { load_country_options(state, toasts, client, refresh).await }
    });

    rsx! {
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        ToastStack {}
    }
}

pub fn persist_user_state(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_persisted_state(&snapshot) {
        tracing::warn!("failed to persist user state: {err}");
    }
}

async fn load_country_options(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    client: Option<CountryClient>,
    refresh: Signal<u32>,
) -> Option<CacheStatus> {
    let generation = refresh();

    let Some(client) = client else {
        state.with_mut(|st| {
            st.countries = fallback_country_list();
            st.cache
                .record_fetch(CacheResource::Countries, SystemTime::now());
        });
        push_toast(
            toasts,
            ToastKind::Warning,
            "Country service unavailable; using the built-in list.",
        );
        return None;
    };

    if generation > 0 {
        client.clear_cache().await;
    }

    let payload = client.load_countries().await;
    tracing::info!(
        countries = payload.data.len(),
        status = ?payload.status,
        "country options loaded"
    );

    let status = payload.status;
    state.with_mut(|st| {
        st.countries = payload.data;
        st.cache
            .record_fetch(CacheResource::Countries, payload.fetched_at);
    });

    match status {
        CacheStatus::Fallback => push_toast(
            toasts,
            ToastKind::Warning,
            "Could not reach the country directory; using the built-in list.",
        ),
        CacheStatus::Stale => push_toast(
            toasts,
            ToastKind::Info,
            "Loaded cached countries; the list might be out of date.",
        ),
        CacheStatus::Fresh | CacheStatus::Cached => {}
    }

    Some(status)
}

#[component]
pub fn Insurance() -> Element {
    rsx! { Shell { InsurancePage {} } }
}

#[component]
pub fn Documents() -> Element {
    rsx! { Shell { DocumentsPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
