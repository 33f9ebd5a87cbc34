//! Question generation page: request form plus the preview of the last batch.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

use crate::api;
use crate::charts::GenerationSummary;
use crate::components::{FilterSelect, GenerationPreview};
use crate::dimension::Dimension;
use crate::download::{create_json_download_handle, JsonDownloadHandle};
use crate::models::{GenerateParams, Question};
use crate::toast::{use_toaster, ToastKind, DEFAULT_DURATION_MS, STICKY};

pub const DEFAULT_QUANTITY: u32 = 10;
pub const MAX_QUANTITY: u32 = 200;
pub const PREVIEW_COUNT: usize = 5;
const GENERATE_TOAST_KEY: &str = "generate-loading";

/// Parse the quantity field: a whole number in `1..=200`
pub fn validate_quantity(input: &str) -> Result<u32, &'static str> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Please provide a number of questions");
    }
    match input.parse::<u32>() {
        Ok(n) if (1..=MAX_QUANTITY).contains(&n) => Ok(n),
        _ => Err("Please enter a valid number between 1 and 200"),
    }
}

/// Request body; cleared selects become absent fields
pub fn generate_params(number: u32, category: &str, difficulty: &str, question_type: &str) -> GenerateParams {
    let optional = |v: &str| (!v.is_empty()).then(|| v.to_string());
    GenerateParams {
        number,
        category: optional(category),
        difficulty: optional(difficulty),
        question_type: optional(question_type),
    }
}

fn now_locale_string() -> String {
    String::from(js_sys::Date::new_0().to_locale_string("en-US", &JsValue::UNDEFINED))
}

#[component]
pub fn GenerationPage() -> impl IntoView {
    let toaster = use_toaster();

    let (quantity, set_quantity) = signal(DEFAULT_QUANTITY.to_string());
    let (quantity_error, set_quantity_error) = signal::<Option<&'static str>>(None);
    let (category, set_category) = signal(String::new());
    let (difficulty, set_difficulty) = signal(String::new());
    let (question_type, set_question_type) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let (generated, set_generated) = signal(Vec::<Question>::new());
    let (generated_at, set_generated_at) = signal::<Option<String>>(None);
    let (download_url, set_download_url) = signal::<Option<String>>(None);
    // Dropping the handle revokes its URL
    let download_handle = StoredValue::new(None::<JsonDownloadHandle>);

    on_cleanup(move || {
        let _ = download_handle.try_update_value(|h| h.take());
    });

    let replace_download = move |questions: &[Question]| {
        let next = if questions.is_empty() {
            None
        } else {
            match create_json_download_handle(questions) {
                Ok(handle) => Some(handle),
                Err(e) => {
                    log::error!("[Generation] could not prepare download: {}", e);
                    None
                }
            }
        };
        set_download_url.set(next.as_ref().map(|h| h.url().to_string()));
        download_handle.set_value(next);
    };

    let summary = Memo::new(move |_| generated.with(|g| GenerationSummary::from_questions(g)));
    let preview_items = Signal::derive(move || {
        generated.with(|g| g.iter().take(PREVIEW_COUNT).cloned().collect::<Vec<_>>())
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let number = match validate_quantity(&quantity.get_untracked()) {
            Ok(n) => n,
            Err(msg) => {
                set_quantity_error.set(Some(msg));
                return;
            }
        };
        set_quantity_error.set(None);
        let params = generate_params(
            number,
            &category.get_untracked(),
            &difficulty.get_untracked(),
            &question_type.get_untracked(),
        );

        set_submitting.set(true);
        toaster.open(Some(GENERATE_TOAST_KEY), ToastKind::Loading, "Generating questions...", STICKY);
        spawn_local(async move {
            match api::generate_questions(&params).await {
                Ok(questions) => {
                    log::info!("[Generation] received {} question(s)", questions.len());
                    replace_download(&questions);
                    set_generated.set(questions);
                    set_generated_at.set(Some(now_locale_string()));
                    toaster.open(
                        Some(GENERATE_TOAST_KEY),
                        ToastKind::Success,
                        "Generation request submitted",
                        DEFAULT_DURATION_MS,
                    );
                }
                Err(e) => {
                    log::error!("[Generation] failed: {}", e);
                    toaster.open(Some(GENERATE_TOAST_KEY), ToastKind::Error, &e.to_string(), DEFAULT_DURATION_MS);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="container generation-layout">
            <div class="generation-left-column">
                <div class="card generation-form-card">
                    <h3>"Generate Questions"</h3>
                    <p class="text-secondary">
                        "Fill out the fields below to generate new logic questions. Only the quantity is mandatory; "
                        "any filters you leave empty will be treated as \"any\" on the server side."
                    </p>
                    <form class=move || if submitting.get() { "generation-form busy" } else { "generation-form" } on:submit=on_submit novalidate=true>
                        <fieldset disabled=move || submitting.get()>
                            <label class="form-item">
                                <span class="form-label">"Number of Questions"</span>
                                <input
                                    type="number"
                                    min="1"
                                    max=MAX_QUANTITY.to_string()
                                    step="1"
                                    placeholder="e.g. 20"
                                    prop:value=move || quantity.get()
                                    on:input=move |ev| set_quantity.set(event_target_value(&ev))
                                />
                                {move || quantity_error.get().map(|msg| view! { <span class="form-error">{msg}</span> })}
                            </label>
                            <label class="form-item">
                                <span class="form-label">"Category"</span>
                                <FilterSelect
                                    dimension=Dimension::Category
                                    value=category
                                    on_change=move |v: String| set_category.set(v)
                                    placeholder="Select a category"
                                />
                            </label>
                            <label class="form-item">
                                <span class="form-label">"Difficulty"</span>
                                <FilterSelect
                                    dimension=Dimension::Difficulty
                                    value=difficulty
                                    on_change=move |v: String| set_difficulty.set(v)
                                    placeholder="Select difficulty"
                                />
                            </label>
                            <label class="form-item">
                                <span class="form-label">"Type"</span>
                                <FilterSelect
                                    dimension=Dimension::Type
                                    value=question_type
                                    on_change=move |v: String| set_question_type.set(v)
                                    placeholder="Select question type"
                                />
                            </label>
                            <button type="submit" class="btn btn-primary btn-large">
                                {move || if submitting.get() { "Generating..." } else { "Generate" }}
                            </button>
                        </fieldset>
                    </form>
                </div>
                <div class="card generation-tips">
                    <p class="text-secondary">
                        "Generation Tips: Combining filters helps you target a specific set of questions. "
                        "For example, pick Equivalence with Hard difficulty to challenge advanced students."
                    </p>
                </div>
            </div>
            <div class="generation-right-column">
                <GenerationPreview
                    summary=summary
                    preview_items=preview_items
                    generated_at=generated_at
                    download_url=download_url
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_quantity_bounds() {
        assert_eq!(validate_quantity("10"), Ok(10));
        assert_eq!(validate_quantity(" 1 "), Ok(1));
        assert_eq!(validate_quantity("200"), Ok(200));
        assert_eq!(validate_quantity("0"), Err("Please enter a valid number between 1 and 200"));
        assert_eq!(validate_quantity("201"), Err("Please enter a valid number between 1 and 200"));
        assert_eq!(validate_quantity("2.5"), Err("Please enter a valid number between 1 and 200"));
        assert_eq!(validate_quantity("-3"), Err("Please enter a valid number between 1 and 200"));
    }

    #[test]
    fn test_validate_quantity_required() {
        assert_eq!(validate_quantity(""), Err("Please provide a number of questions"));
        assert_eq!(validate_quantity("   "), Err("Please provide a number of questions"));
    }

    #[test]
    fn test_generate_params_omit_cleared_filters() {
        let params = generate_params(20, "equivalence", "", "trueFalse");
        assert_eq!(params.category.as_deref(), Some("equivalence"));
        assert_eq!(params.difficulty, None);
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body, serde_json::json!({"number": 20, "category": "equivalence", "type": "trueFalse"}));
    }
}
