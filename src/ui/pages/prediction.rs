use std::sync::Arc;

use dioxus::prelude::*;

use crate::{
    domain::{respond, Feature, MapViewState, PredictionService, PropertyForm, ResultSummary},
    ui::{
        components::{
            map_view::MapView,
            result_panel::ResultPanel,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

/// Form rows as laid out on screen; pairs share a row.
const FORM_ROWS: [&[Feature]; 5] = [
    &[Feature::MedInc],
    &[Feature::HouseAge, Feature::AveOccup],
    &[Feature::AveRooms, Feature::AveBedrms],
    &[Feature::Population],
    &[Feature::Latitude, Feature::Longitude],
];

#[component]
pub fn PredictionPage() -> Element {
    let service = use_context::<Arc<PredictionService>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let form = use_signal(PropertyForm::default);
    let mut clicks = use_signal(|| None::<u64>);
    let mut summary = use_signal(|| None::<ResultSummary>);
    let mut map_state = use_signal(MapViewState::statewide);

    let on_calculate = move |_| {
        let count = clicks().map_or(1, |n| n + 1);
        clicks.set(Some(count));

        // A rejected form leaves both outputs as they were.
        let input = match form.read().parse() {
            Ok(input) => input,
            Err(err) => {
                push_toast(toasts, ToastKind::Error, err.to_string());
                return;
            }
        };

        let response = respond(Some(count), &input, &service);
        if let Some(next) = response.summary.into_option() {
            summary.set(Some(next));
        }
        if let Some(next) = response.map.into_option() {
            map_state.set(next);
        }
    };

    rsx! {
        div { class: "{theme::CONTAINER} grid-prediction",
            section { class: "{theme::PANEL} form-panel",
                h4 { class: "panel-title", "PROPERTY INPUTS" }
                for row in FORM_ROWS {
                    div { class: "form-row",
                        for feature in row.iter().copied() {
                            FormField { form, feature }
                        }
                    }
                }
                button {
                    class: "{theme::BTN_PRIMARY} btn-block",
                    onclick: on_calculate,
                    "CALCULATE VALUE"
                }
            }
            section { class: "prediction-output",
                ResultPanel { summary: summary() }
                div { class: "{theme::PANEL} map-panel",
                    MapView { state: map_state }
                }
            }
        }
    }
}

#[component]
fn FormField(form: Signal<PropertyForm>, feature: Feature) -> Element {
    let mut form = form;
    let value = form.read().field(feature).to_string();

    rsx! {
        div { class: "form-field",
            label { class: "{theme::LABEL}", r#for: "p-{feature.name()}", "{feature.label()}" }
            input {
                id: "p-{feature.name()}",
                class: "{theme::INPUT}",
                r#type: "number",
                step: "any",
                value: "{value}",
                oninput: move |evt| *form.write().field_mut(feature) = evt.value(),
            }
        }
    }
}
