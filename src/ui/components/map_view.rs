use dioxus::{document, prelude::*};
use log::{debug, error, warn};

use crate::domain::MapViewState;

pub const MAP_CONTAINER_ID: &str = "prediction-map";

/// Hosts the MapLibre canvas and pushes every new view state to the map script.
#[component]
pub fn MapView(state: Signal<MapViewState>) -> Element {
    use_effect(move || {
        let json = match serde_json::to_string(&*state.read()) {
            Ok(json) => json,
            Err(err) => {
                error!("Failed to serialize map state: {err}");
                return;
            }
        };
        debug!("Rendering map state {json}");
        let eval = document::eval(&format!(
            "window.housingMap && window.housingMap.render('{MAP_CONTAINER_ID}', {json});"
        ));
        spawn(async move {
            if let Err(err) = eval.await {
                warn!("Map render script failed: {err}");
            }
        });
    });

    rsx! {
        div { id: MAP_CONTAINER_ID, class: "map-canvas" }
    }
}
