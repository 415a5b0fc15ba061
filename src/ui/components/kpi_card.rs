use dioxus::prelude::*;

use crate::ui::theme;

#[component]
pub fn KpiCard(title: String, value: String, description: Option<String>) -> Element {
    rsx! {
        div {
            class: "{theme::PANEL} kpi-card",
            h6 { class: "{theme::LABEL}", "{title}" }
            p { class: "kpi-value", "{value}" }
            if let Some(desc) = description {
                p { class: "{theme::TEXT_MUTED} small", "{desc}" }
            }
        }
    }
}
