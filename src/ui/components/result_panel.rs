use dioxus::prelude::*;

use crate::domain::ResultSummary;
use crate::ui::theme;

/// Renders the latest prediction outcome, or a prompt before the first submit.
#[component]
pub fn ResultPanel(summary: Option<ResultSummary>) -> Element {
    let Some(summary) = summary else {
        return rsx! {
            div { class: "{theme::PANEL} result-idle",
                h6 { class: "{theme::LABEL}", "AWAITING INPUT" }
                p { class: "{theme::TEXT_MUTED}",
                    "Fill in the property details and press Calculate Value."
                }
            }
        };
    };

    let headline_class = theme::summary_headline(&summary);
    let detail = summary.detail();
    let body = match &summary {
        ResultSummary::Estimate { .. } => rsx! {
            p { class: "result-price", "{detail}" }
        },
        ResultSummary::OutsideServiceArea { bounds } => rsx! {
            p { "{detail}" }
            small { class: "{theme::TEXT_MUTED}", "{bounds}" }
        },
        ResultSummary::Unavailable => rsx! {
            p { "{detail}" }
        },
    };

    rsx! {
        div { class: "{theme::PANEL}",
            h6 { class: "{headline_class}", "{summary.headline()}" }
            {body}
        }
    }
}
