use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{
        insurance_catalogue, match_products, ports_for, AppState, Country, GoodsCategory,
        RiskProfile, ShipmentForm, TransportMode, MANUAL_PORT,
    },
    ui::{
        components::{
            recommendation_card::RecommendationCardView,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        presenter::ResultsView,
    },
    util::export::{default_export_dir, export_to_dir},
};

#[derive(Clone, Copy, PartialEq)]
enum LaneEnd {
    Origin,
    Destination,
}

#[component]
pub fn InsurancePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut form = use_signal(|| state.with(|st| st.form.clone()));

    let countries = state.with(|st| st.countries.clone());
    let view = state.with(|st| ResultsView::build(st.results.as_deref()));
    let has_cards = !view.cards().is_empty();

    let on_submit = {
        let mut state = state;
        move |evt: FormEvent| {
            evt.prevent_default();
            let draft = form();
            let shipment = match draft.parse() {
                Ok(shipment) => shipment,
                Err(err) => {
                    push_toast(toasts, ToastKind::Error, err.to_string());
                    return;
                }
            };

            let recommendations = match_products(&shipment, insurance_catalogue());
            tracing::info!(
                goods = %shipment.goods,
                mode = %shipment.transport_mode,
                risk = %shipment.risk_profile,
                matches = recommendations.len(),
                "insurance recommendations computed"
            );
            state.with_mut(|st| {
                st.form = draft;
                st.show_results(&recommendations);
            });
            persist_user_state(&state);
        }
    };

    let on_export = move |_| {
        let view = state.with(|st| ResultsView::build(st.results.as_deref()));
        match export_to_dir(view.cards(), &default_export_dir()) {
            Ok(path) => push_toast(
                toasts,
                ToastKind::Success,
                format!("Exported recommendations to {}", path.display()),
            ),
            Err(err) => push_toast(toasts, ToastKind::Error, err.to_string()),
        }
    };

    let on_reset = {
        let mut state = state;
        move |_| {
            form.set(ShipmentForm::default());
            state.with_mut(|st| {
                st.form = ShipmentForm::default();
                st.results = None;
            });
            persist_user_state(&state);
        }
    };

    let draft = form();

    rsx! {
        div {
            section {
                class: "panel",
                h2 { "Shipment" }
                form {
                    onsubmit: on_submit,
                    div { class: "form-grid",
                        div { class: "field",
                            label { "Goods category" }
                            select {
                                value: "{draft.goods_type}",
                                onchange: move |evt| form.with_mut(|f| f.goods_type = evt.value()),
                                option { value: "", "Select goods" }
                                for goods in GoodsCategory::ALL {
                                    option {
                                        key: "{goods.slug()}",
                                        value: goods.slug(),
                                        selected: draft.goods_type == goods.slug(),
                                        "{goods.label()}"
                                    }
                                }
                            }
                        }
                        div { class: "field",
                            label { "Declared value (USD)" }
                            input {
                                r#type: "text",
                                inputmode: "decimal",
                                placeholder: "e.g. 250000",
                                value: "{draft.shipment_value}",
                                oninput: move |evt| form.with_mut(|f| f.shipment_value = evt.value()),
                            }
                        }
                        LanePicker {
                            end: LaneEnd::Origin,
                            countries: countries.clone(),
                            form,
                        }
                        LanePicker {
                            end: LaneEnd::Destination,
                            countries: countries.clone(),
                            form,
                        }
                        div { class: "field",
                            label { "Transport mode" }
                            select {
                                value: "{draft.transport_mode}",
                                onchange: move |evt| form.with_mut(|f| f.transport_mode = evt.value()),
                                option { value: "", "Select mode" }
                                for mode in TransportMode::ALL {
                                    option {
                                        key: "{mode.slug()}",
                                        value: mode.slug(),
                                        selected: draft.transport_mode == mode.slug(),
                                        "{mode.label()}"
                                    }
                                }
                            }
                        }
                        div { class: "field",
                            label { "Risk profile" }
                            select {
                                value: "{draft.risk_profile}",
                                onchange: move |evt| form.with_mut(|f| f.risk_profile = evt.value()),
                                option { value: "", "Select profile" }
                                for risk in RiskProfile::ALL {
                                    option {
                                        key: "{risk.slug()}",
                                        value: risk.slug(),
                                        selected: draft.risk_profile == risk.slug(),
                                        "{risk.label()}"
                                    }
                                }
                            }
                        }
                        div { class: "field wide",
                            label { "Notes" }
                            textarea {
                                rows: "2",
                                value: "{draft.notes}",
                                oninput: move |evt| form.with_mut(|f| f.notes = evt.value()),
                            }
                        }
                    }
                    div { class: "actions",
                        button { class: "btn primary", r#type: "submit", "Find best-fit insurance" }
                        button { class: "btn", r#type: "button", onclick: on_reset, "Reset" }
                        button {
                            class: "btn",
                            r#type: "button",
                            disabled: !has_cards,
                            onclick: on_export,
                            "Export JSON"
                        }
                    }
                }
            }

            {match view {
                ResultsView::Idle => rsx! {
                    section { class: "results empty",
                        p { "Describe your shipment to see matching cover." }
                    }
                },
                ResultsView::Empty(message) => rsx! {
                    section { class: "results empty",
                        p { "{message}" }
                    }
                },
                ResultsView::Cards(cards) => rsx! {
                    section { class: "results",
                        for card in cards {
                            RecommendationCardView { key: "{card.product_id}", card }
                        }
                    }
                },
            }}
        }
    }
}

#[component]
fn LanePicker(end: LaneEnd, countries: Vec<Country>, form: Signal<ShipmentForm>) -> Element {
    let mut form = form;
    let draft = form();
    let (title, country, port, manual) = match end {
        LaneEnd::Origin => (
            "Origin",
            draft.origin_country.clone(),
            draft.origin_port.clone(),
            draft.origin_port_manual.clone(),
        ),
        LaneEnd::Destination => (
            "Destination",
            draft.destination_country.clone(),
            draft.destination_port.clone(),
            draft.destination_port_manual.clone(),
        ),
    };
    let ports = ports_for(&country);
    let manual_active = port == MANUAL_PORT;

    rsx! {
        div { class: "field",
            label { "{title} country" }
            select {
                value: "{country}",
                onchange: move |evt| {
                    let code = evt.value();
                    form.with_mut(|f| select_country(f, end, code));
                },
                option { value: "", "Select country" }
                for entry in countries.iter() {
                    option {
                        key: "{entry.code}",
                        value: "{entry.code}",
                        selected: entry.code == country,
                        "{entry.label}"
                    }
                }
            }
        }
        div { class: "field",
            label { "{title} port" }
            select {
                value: "{port}",
                disabled: country.is_empty(),
                onchange: move |evt| {
                    let slug = evt.value();
                    form.with_mut(|f| select_port(f, end, slug));
                },
                option { value: "", "Select port" }
                for entry in ports.iter() {
                    option {
                        key: "{entry.slug}",
                        value: entry.slug,
                        selected: entry.slug == port,
                        "{entry.label}"
                    }
                }
                option { value: MANUAL_PORT, selected: manual_active, "Other / not listed" }
            }
            if manual_active {
                input {
                    r#type: "text",
                    placeholder: "Port name",
                    value: "{manual}",
                    oninput: move |evt| {
                        let text = evt.value();
                        form.with_mut(|f| match end {
                            LaneEnd::Origin => f.origin_port_manual = text,
                            LaneEnd::Destination => f.destination_port_manual = text,
                        });
                    },
                }
            }
        }
    }
}

/// A new country invalidates whatever port was picked for that end.
fn select_country(form: &mut ShipmentForm, end: LaneEnd, code: String) {
    match end {
        LaneEnd::Origin => {
            form.origin_country = code;
            form.origin_port.clear();
            form.origin_port_manual.clear();
        }
        LaneEnd::Destination => {
            form.destination_country = code;
            form.destination_port.clear();
            form.destination_port_manual.clear();
        }
    }
}

/// Leaving the manual option discards the typed port name.
fn select_port(form: &mut ShipmentForm, end: LaneEnd, slug: String) {
    let manual = slug == MANUAL_PORT;
    match end {
        LaneEnd::Origin => {
            form.origin_port = slug;
            if !manual {
                form.origin_port_manual.clear();
            }
        }
        LaneEnd::Destination => {
            form.destination_port = slug;
            if !manual {
                form.destination_port_manual.clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changing_country_resets_that_end_only() {
        let mut form = ShipmentForm {
            origin_country: "SG".into(),
            origin_port: "singapore".into(),
            destination_country: "NL".into(),
            destination_port: MANUAL_PORT.into(),
            destination_port_manual: "Delfzijl".into(),
            ..Default::default()
        };
        select_country(&mut form, LaneEnd::Destination, "DE".into());
        assert_eq!(form.destination_country, "DE");
        assert!(form.destination_port.is_empty());
        assert!(form.destination_port_manual.is_empty());
        assert_eq!(form.origin_port, "singapore");
    }

    #[test]
    fn leaving_manual_port_clears_typed_name() {
        let mut form = ShipmentForm {
            origin_port: MANUAL_PORT.into(),
            origin_port_manual: "Port Louis".into(),
            ..Default::default()
        };
        select_port(&mut form, LaneEnd::Origin, MANUAL_PORT.into());
        assert_eq!(form.origin_port_manual, "Port Louis");
        select_port(&mut form, LaneEnd::Origin, "colombo".into());
        assert_eq!(form.origin_port, "colombo");
        assert!(form.origin_port_manual.is_empty());
    }
}
