use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::theme;
use crate::util::version::{version_label, APP_AUTHOR};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "app-shell",
            header { class: "navbar",
                div { class: "navbar-inner",
                    button { class: "brand", onclick: move |_| { nav.push(Route::Home {}); },
                        span { class: "brand-icon", "📍" }
                        span { class: "brand-title", "CALIFORNIA REAL ESTATE APP" }
                    }
                    div { class: "nav-links",
                        NavButton {
                            active: matches!(current_route, Route::Home {}),
                            onclick: move |_| { nav.push(Route::Home {}); },
                            label: "Home",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Analysis {}),
                            onclick: move |_| { nav.push(Route::Analysis {}); },
                            label: "Explore",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Prediction {}),
                            onclick: move |_| { nav.push(Route::Prediction {}); },
                            label: "Predictor",
                        }
                    }
                }
            }
            main { class: "page",
                {children}
            }
            footer { class: "modern-footer",
                span { "© " }
                span { class: "text-info", "{APP_AUTHOR}" }
                span { " — All rights reserved. " }
                span { class: "text-muted", "{version_label()}" }
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: "{theme::nav_link(active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
