use dioxus::prelude::*;
use log::error;

use crate::{
    infra::dataset::DatasetClient,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{AnalysisPage, HomePage, PredictionPage},
        shell::Shell,
    },
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/analysis")]
    Analysis {},
    #[route("/prediction")]
    Prediction {},
}

/// Root component. The prediction service is provided by the launcher.
#[component]
pub fn App() -> Element {
    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    // Shared so the in-memory dataset copy survives page switches.
    let dataset_client = use_hook(|| match DatasetClient::new() {
        Ok(client) => Some(client),
        Err(err) => {
            error!("Failed to initialise dataset client: {err}");
            None
        }
    });
    use_context_provider(|| dataset_client.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Script { "{assets::map_js()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { Shell { HomePage {} } }
}

#[component]
pub fn Analysis() -> Element {
    rsx! { Shell { AnalysisPage {} } }
}

#[component]
pub fn Prediction() -> Element {
    rsx! { Shell { PredictionPage {} } }
}
