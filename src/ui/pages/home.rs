use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::theme;

const INTRO_IMAGE: &str = "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?auto=format&fit=crop&w=1200&q=80";

/// Columns highlighted in the dataset table, with why they matter.
const FEATURE_NOTES: [(&str, &str); 3] = [
    ("MedInc", "Highest correlation with price. Measures purchasing power."),
    ("AveOccup", "Identifies family-heavy vs. single-dweller areas."),
    ("Coordinates", "Critical for proximity to coastline and urban hubs."),
];

#[component]
pub fn HomePage() -> Element {
    let nav = use_navigator();

    rsx! {
        div { class: "{theme::CONTAINER}",
            section { class: "hero",
                h1 { class: "hero-title", "THE CALIFORNIA HOUSING PORTAL" }
                p { class: "{theme::TEXT_ACCENT} hero-subtitle",
                    "Deciphering the complexity of West Coast real estate through Advanced Machine Learning."
                }
            }

            section { class: "grid-2",
                img { class: "intro-img", src: INTRO_IMAGE, alt: "California homes" }
                div { class: "intro-copy",
                    h3 { "The Real Estate Challenge" }
                    p { class: "{theme::TEXT_MUTED}",
                        "Predicting property value is more than just counting bedrooms. In California, "
                        b { class: "{theme::TEXT_ACCENT}", "location, neighborhood density, and economic shifts" }
                        " create a volatile market. Our model analyzes 20,000+ historical records to identify patterns human eyes might miss, "
                        b { class: "{theme::TEXT_ACCENT}", "explaining about 82% of the variation in housing prices" }
                        "."
                    }
                    div { class: "badge-row",
                        span { class: "{theme::BADGE}", "8-Feature Analysis" }
                        span { class: "{theme::BADGE}", "Live Map Sync" }
                        span { class: "{theme::BADGE}", "RandomForest Powered" }
                    }
                    button {
                        class: "{theme::BTN_CTA}",
                        onclick: move |_| { nav.push(Route::Prediction {}); },
                        "START PREDICTING"
                    }
                }
            }

            section { class: "{theme::PANEL} dataset-panel",
                h4 { "Understanding the Dataset" }
                p { class: "{theme::TEXT_MUTED}",
                    "Derived from the 1990 U.S. Census, this dataset captures the backbone of California's geography. Each 'block' provides a snapshot of socio-economic health."
                }
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Feature" }
                            th { "Significance" }
                        }
                    }
                    tbody {
                        for (feature, note) in FEATURE_NOTES {
                            tr {
                                td { class: "{theme::TEXT_ACCENT}", "{feature}" }
                                td { "{note}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
