//! Generation Preview Component
//!
//! Summary card for the latest generated batch: totals, nested pie chart,
//! sample questions and the JSON download link.

use leptos::prelude::*;
use leptos_echarts::EChart;

use crate::charts::{generation_preview_option, legend_key, GenerationSummary};
use crate::models::Question;

pub const GENERATED_FILE_NAME: &str = "generated-questions.json";

/// (position, text) rows for the sample list. Generated questions have not
/// been stored yet and share a zero `_id`, so rows are keyed by position.
pub fn sample_rows(items: &[Question]) -> Vec<(usize, String)> {
    items
        .iter()
        .enumerate()
        .map(|(i, q)| (i, q.question_text.clone()))
        .collect()
}

#[component]
pub fn GenerationPreview(
    #[prop(into)] summary: Signal<GenerationSummary>,
    #[prop(into)] preview_items: Signal<Vec<Question>>,
    /// Locale-formatted generation time
    #[prop(into)]
    generated_at: Signal<Option<String>>,
    #[prop(into)] download_url: Signal<Option<String>>,
) -> impl IntoView {
    let option = Memo::new(move |_| summary.with(generation_preview_option));
    let has_chart = move || option.with(|o| o["series"].as_array().is_some_and(|s| !s.is_empty()));

    view! {
        <Show
            when=move || summary.with(|s| s.total > 0)
            fallback=|| view! {
                <div class="alert alert-info">
                    <strong>"Preview"</strong>
                    <p>"Submit the form to see the latest generation summary and download the results."</p>
                </div>
            }
        >
            <div class="card generation-preview">
                <div class="card-header">
                    <h3>"Generation Preview"</h3>
                    {move || match download_url.get() {
                        Some(url) => view! {
                            <a class="btn btn-link" href=url download=GENERATED_FILE_NAME>"Download JSON"</a>
                        }.into_any(),
                        None => view! {
                            <button class="btn btn-link" disabled=true>"Download JSON"</button>
                        }.into_any(),
                    }}
                </div>
                {move || generated_at.get().map(|at| view! {
                    <p class="text-secondary">{format!("Generated at: {}", at)}</p>
                })}
                <div>
                    <span class="text-secondary">"Total Questions: "</span>
                    <strong>{move || summary.with(|s| s.total)}</strong>
                </div>
                <Show
                    when=has_chart
                    fallback=|| view! { <p class="text-secondary">"Not enough data to draw the chart yet."</p> }
                >
                    <EChart option=option />
                    <ul class="legend-key">
                        {move || summary.with(legend_key).into_iter().map(|(short, label)| view! {
                            <li><strong>{short}</strong>" "{label}</li>
                        }).collect_view()}
                    </ul>
                </Show>
                <Show when=move || preview_items.with(|items| !items.is_empty())>
                    <hr />
                    <strong>"Sample Questions"</strong>
                    <ol class="sample-questions">
                        <For
                            each=move || preview_items.with(|items| sample_rows(items))
                            key=|row| row.clone()
                            children=|(_, text)| view! { <li>{text}</li> }
                        />
                    </ol>
                </Show>
            </div>
        </Show>
    }
}
