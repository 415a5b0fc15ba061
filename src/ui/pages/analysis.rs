use dioxus::prelude::*;

use crate::{
    domain::{format_currency, prediction::PRICE_SCALE, sample, summarize, HousingRecord},
    infra::dataset::{CacheStatus, DatasetClient, DatasetPayload},
    ui::{
        charts::{GeoHeatmap, PlotPoint, ScatterChart},
        components::{
            kpi_card::KpiCard,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

const SCATTER_SAMPLE: usize = 1000;
const MAP_SAMPLE: usize = 2000;

#[component]
pub fn AnalysisPage() -> Element {
    let client = use_context::<Option<DatasetClient>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let dataset = use_resource(move || {
        let client = client.clone();
        async move { load_dataset(client, toasts).await }
    });

    let content = match dataset.read().clone() {
        None => rsx! {
            div { class: "{theme::PANEL} {theme::TEXT_MUTED}", "Loading housing dataset..." }
        },
        Some(Err(message)) => rsx! {
            div { class: "{theme::PANEL}",
                h6 { class: "headline text-danger", "DATASET UNAVAILABLE" }
                p { class: "{theme::TEXT_MUTED}", "{message}" }
            }
        },
        Some(Ok(payload)) => rsx! { DatasetView { payload } },
    };

    rsx! {
        div { class: "{theme::CONTAINER}",
            h2 { class: "page-title", "EXPLORATORY DATA ANALYSIS" }
            {content}
        }
    }
}

async fn load_dataset(
    client: Option<DatasetClient>,
    toasts: Signal<Vec<ToastMessage>>,
) -> Result<DatasetPayload, String> {
    let Some(client) = client else {
        return Err("The dataset client could not be initialised.".to_string());
    };

    match client.get_dataset().await {
        Ok(payload) => {
            match payload.status {
                CacheStatus::Stale => push_toast(
                    toasts,
                    ToastKind::Warning,
                    "Dataset source unreachable; showing cached data.",
                ),
                CacheStatus::Cached => push_toast(
                    toasts,
                    ToastKind::Info,
                    format!("Loaded {} block groups from cache.", payload.data.len()),
                ),
                CacheStatus::Fresh => push_toast(
                    toasts,
                    ToastKind::Info,
                    format!("Downloaded {} block groups.", payload.data.len()),
                ),
            }
            Ok(payload)
        }
        Err(err) => {
            push_toast(
                toasts,
                ToastKind::Error,
                format!("Failed to load housing dataset: {err}"),
            );
            Err(err.to_string())
        }
    }
}

#[component]
fn DatasetView(payload: DatasetPayload) -> Element {
    let records = payload.data.as_slice();
    let summary = summarize(records);
    let income_points = income_scatter(records);
    let geo_points = geo_scatter(records);
    let fetched = payload
        .fetched_at_label()
        .unwrap_or_else(|| "unknown".to_string());

    rsx! {
        if let Some(summary) = summary {
            div { class: "kpi-grid",
                KpiCard {
                    title: "BLOCK GROUPS".to_string(),
                    value: summary.records.to_string(),
                    description: Some(format!("Fetched {fetched}")),
                }
                KpiCard {
                    title: "MEAN VALUE".to_string(),
                    value: format_currency(summary.mean_price * PRICE_SCALE),
                }
                KpiCard {
                    title: "VALUE RANGE".to_string(),
                    value: format!(
                        "{} to {}",
                        format_currency(summary.min_price * PRICE_SCALE),
                        format_currency(summary.max_price * PRICE_SCALE)
                    ),
                }
                KpiCard {
                    title: "INCOME CORRELATION".to_string(),
                    value: summary
                        .income_correlation
                        .map(|r| format!("r = {r:.2}"))
                        .unwrap_or_else(|| "n/a".to_string()),
                    description: Some("Median income vs. median house value".to_string()),
                }
            }
        }
        div { class: "grid-2",
            div { class: "{theme::PANEL}",
                h5 { class: "{theme::TEXT_ACCENT}", "Price vs. Income Correlation" }
                ScatterChart {
                    points: income_points,
                    x_label: "MedInc".to_string(),
                    y_label: "Price".to_string(),
                    title: format!("{SCATTER_SAMPLE} sampled block groups"),
                }
            }
            div { class: "{theme::PANEL}",
                h5 { class: "{theme::TEXT_ACCENT}", "Geographical Heatmap" }
                GeoHeatmap {
                    points: geo_points,
                    title: format!("{MAP_SAMPLE} sampled block groups, coloured by price"),
                }
            }
        }
    }
}

fn income_scatter(records: &[HousingRecord]) -> Vec<PlotPoint> {
    sample(records, SCATTER_SAMPLE)
        .into_iter()
        .map(|record| PlotPoint {
            x: record.features.median_income,
            y: record.price,
            value: None,
        })
        .collect()
}

fn geo_scatter(records: &[HousingRecord]) -> Vec<PlotPoint> {
    sample(records, MAP_SAMPLE)
        .into_iter()
        .map(|record| PlotPoint {
            x: record.features.longitude,
            y: record.features.latitude,
            value: Some(record.price),
        })
        .collect()
}
