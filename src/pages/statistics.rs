//! Statistics page: accuracy bars and per-dimension distribution pies.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_echarts::EChart;

use crate::api;
use crate::charts::{accuracy_chart_groups, accuracy_option, distribution_entries, distribution_pie_option};
use crate::dimension::Dimension;
use crate::models::{AccuracyDistributions, DimensionDistributions};

const ACCURACY_CHART_STYLE: &str = "height: 230px;";
const PIE_CHART_STYLE: &str = "height: 220px;";

/// Progress of a one-shot fetch
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Failed(String),
    Ready(T),
}

#[component]
fn EmptyState(message: &'static str) -> impl IntoView {
    view! { <div class="empty-state">{message}</div> }
}

#[component]
fn ErrorAlert(title: &'static str, message: String) -> impl IntoView {
    view! {
        <div class="alert alert-error">
            <strong>{title}</strong>
            <p>{message}</p>
        </div>
    }
}

fn pie_title(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Category => "By Category",
        Dimension::Difficulty => "By Difficulty",
        Dimension::Type => "By Type",
    }
}

#[component]
pub fn StatisticsPage() -> impl IntoView {
    let (accuracy, set_accuracy) = signal(LoadState::<AccuracyDistributions>::Loading);
    let (distribution, set_distribution) = signal(LoadState::<DimensionDistributions>::Loading);

    // Both cards load independently, once per mount
    spawn_local(async move {
        let state = match api::fetch_dimension_accuracy().await {
            Ok(data) => LoadState::Ready(data),
            Err(e) => {
                log::error!("[Statistics] accuracy fetch failed: {}", e);
                LoadState::Failed(e.to_string())
            }
        };
        let _ = set_accuracy.try_set(state);
    });
    spawn_local(async move {
        let state = match api::fetch_dimension_distribution().await {
            Ok(data) => LoadState::Ready(data),
            Err(e) => {
                log::error!("[Statistics] distribution fetch failed: {}", e);
                LoadState::Failed(e.to_string())
            }
        };
        let _ = set_distribution.try_set(state);
    });

    let accuracy_body = move || match accuracy.get() {
        LoadState::Loading => view! { <div class="card-loading">"Loading..."</div> }.into_any(),
        LoadState::Failed(message) => {
            view! { <ErrorAlert title="Unable to load accuracy data" message=message /> }.into_any()
        }
        LoadState::Ready(data) => {
            let groups = accuracy_chart_groups(&data);
            if groups.is_empty() {
                view! { <EmptyState message="No accuracy data yet" /> }.into_any()
            } else {
                let option = Signal::stored(accuracy_option(&groups));
                view! { <EChart option=option style=ACCURACY_CHART_STYLE /> }.into_any()
            }
        }
    };

    let distribution_body = move || match distribution.get() {
        LoadState::Loading => view! { <div class="card-loading">"Loading..."</div> }.into_any(),
        LoadState::Failed(message) => {
            view! { <ErrorAlert title="Unable to load dimension distribution" message=message /> }.into_any()
        }
        LoadState::Ready(data) => view! {
            <div class="statistics-pie-grid">
                {Dimension::ALL.iter().map(|&dimension| {
                    let entries = distribution_entries(&data, dimension);
                    let chart = if entries.is_empty() {
                        view! { <EmptyState message="No data yet" /> }.into_any()
                    } else {
                        let option = Signal::stored(distribution_pie_option(dimension, entries));
                        view! { <EChart option=option style=PIE_CHART_STYLE /> }.into_any()
                    };
                    view! {
                        <div class="statistics-pie-item">
                            <h4>{pie_title(dimension)}</h4>
                            {chart}
                        </div>
                    }
                }).collect_view()}
            </div>
        }.into_any(),
    };

    view! {
        <div class="container">
            <div class="card">
                <div class="card-header"><h3>"Question Accuracy"</h3></div>
                <div class="card-body">{accuracy_body}</div>
            </div>
            <div class="card">
                <div class="card-header"><h3>"Question Distribution"</h3></div>
                <div class="card-body">{distribution_body}</div>
            </div>
        </div>
    }
}
