//! Question Table Component
//!
//! Renders one page of questions with row selection and per-column filters.

use leptos::prelude::*;

use crate::dimension::Dimension;
use crate::models::Question;
use crate::table_state::TableFilter;

use super::FilterSelect;

fn option_letter(index: usize) -> String {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map(|i| char::from(b'A' + i).to_string())
        .unwrap_or_else(|| (index + 1).to_string())
}

/// Option lines; choice questions are prefixed `A: `, `B: `, ...
pub fn option_lines(question: &Question) -> Vec<String> {
    if question.is_true_false() {
        return question.options.clone();
    }
    question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| format!("{}: {}", option_letter(i), option))
        .collect()
}

/// Correct answers as `True`/`False` or option letters
pub fn answer_labels(question: &Question) -> Vec<String> {
    question
        .correct_answer_index
        .iter()
        .map(|&i| {
            if question.is_true_false() {
                match i {
                    0 => "True".to_string(),
                    1 => "False".to_string(),
                    _ => "?".to_string(),
                }
            } else {
                option_letter(i)
            }
        })
        .collect()
}

pub fn dimension_tag_label(dimension: Dimension, value: &str) -> &'static str {
    dimension.option_label(value).unwrap_or("Unknown")
}

pub fn difficulty_color(difficulty: &str) -> &'static str {
    match difficulty {
        "medium" => "orange",
        "hard" => "red",
        _ => "green",
    }
}

/// (text, colour) of the accuracy tag
pub fn accuracy_tag(question: &Question) -> (String, &'static str) {
    if question.total_answers == 0 {
        return ("--".to_string(), "default");
    }
    let rate = question.accuracy_rate;
    let text = format!("{:.1}%", rate * 100.0);
    let color = if rate >= 0.70 {
        "green"
    } else if rate >= 0.30 {
        "orange"
    } else {
        "red"
    };
    (text, color)
}

#[component]
fn Tag(#[prop(into)] color: String, children: Children) -> impl IntoView {
    view! { <span class=format!("tag tag-{}", color)>{children()}</span> }
}

#[component]
pub fn QuestionTable(
    #[prop(into)] rows: Signal<Vec<Question>>,
    #[prop(into)] selected: Signal<Vec<String>>,
    #[prop(into)] filters: Signal<TableFilter>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] on_toggle: Callback<String>,
    #[prop(into)] on_toggle_all: Callback<()>,
    /// (column, value); empty value clears the column filter
    #[prop(into)]
    on_filter: Callback<(Dimension, String)>,
) -> impl IntoView {
    let all_selected = move || {
        let rows = rows.get();
        let selected = selected.get();
        !rows.is_empty() && rows.iter().all(|q| selected.contains(&q.id))
    };

    let filter_header = move |dimension: Dimension| {
        view! {
            <th class="col-filterable">
                <span>{dimension.label()}</span>
                <FilterSelect
                    dimension=dimension
                    value=Signal::derive(move || filters.with(|f| f.get(dimension).to_string()))
                    on_change=move |value: String| on_filter.run((dimension, value))
                />
            </th>
        }
    };

    view! {
        <div class=move || if loading.get() { "table-wrap loading" } else { "table-wrap" }>
            <table class="question-table">
                <thead>
                    <tr>
                        <th class="col-select">
                            <input
                                type="checkbox"
                                prop:checked=all_selected
                                on:change=move |_| on_toggle_all.run(())
                            />
                        </th>
                        <th class="col-question">"Question"</th>
                        <th class="col-options">"Options"</th>
                        <th class="col-answer">"Answer"</th>
                        {filter_header(Dimension::Category)}
                        {filter_header(Dimension::Difficulty)}
                        {filter_header(Dimension::Type)}
                        <th class="col-accuracy">"Accuracy"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || rows.with(|r| r.is_empty())>
                        <tr class="empty-row">
                            <td colspan="8">"No data"</td>
                        </tr>
                    </Show>
                    <For
                        each=move || rows.get()
                        key=|q| q.id.clone()
                        children=move |q| {
                            let id = q.id.clone();
                            let id_for_check = id.clone();
                            let is_selected = Memo::new(move |_| selected.with(|s| s.contains(&id_for_check)));
                            let (accuracy_text, accuracy_color) = accuracy_tag(&q);
                            view! {
                                <tr class=move || if is_selected.get() { "selected" } else { "" }>
                                    <td class="col-select">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || is_selected.get()
                                            on:change=move |_| on_toggle.run(id.clone())
                                        />
                                    </td>
                                    <td class="col-question">{q.question_text.clone()}</td>
                                    <td class="col-options">
                                        {option_lines(&q).into_iter().map(|line| view! { <div>{line}</div> }).collect_view()}
                                    </td>
                                    <td class="col-answer">
                                        {answer_labels(&q).into_iter().map(|label| view! { <Tag color="green">{label}</Tag> }).collect_view()}
                                    </td>
                                    <td>
                                        <Tag color="geekblue">{dimension_tag_label(Dimension::Category, &q.category)}</Tag>
                                    </td>
                                    <td>
                                        <Tag color=difficulty_color(&q.difficulty)>
                                            {dimension_tag_label(Dimension::Difficulty, &q.difficulty)}
                                        </Tag>
                                    </td>
                                    <td>
                                        <Tag color="purple">{dimension_tag_label(Dimension::Type, &q.question_type)}</Tag>
                                    </td>
                                    <td class="col-accuracy">
                                        <Tag color=accuracy_color>{accuracy_text}</Tag>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_question;

    #[test]
    fn test_option_lines_prefix_letters() {
        let q = sample_question("1", "inference", "easy", "singleChoice");
        assert_eq!(option_lines(&q), vec!["A: p", "B: q", "C: p ∧ q", "D: p ∨ q"]);
    }

    #[test]
    fn test_true_false_rendering() {
        let mut q = sample_question("1", "inference", "easy", "trueFalse");
        q.options = vec!["True".into(), "False".into()];
        q.correct_answer_index = vec![1];
        assert_eq!(option_lines(&q), vec!["True", "False"]);
        assert_eq!(answer_labels(&q), vec!["False"]);
    }

    #[test]
    fn test_answer_letters() {
        let mut q = sample_question("1", "inference", "easy", "multipleChoice");
        q.correct_answer_index = vec![0, 2];
        assert_eq!(answer_labels(&q), vec!["A", "C"]);
    }

    #[test]
    fn test_dimension_tags() {
        assert_eq!(dimension_tag_label(Dimension::Category, "truthTable"), "Truth Table");
        assert_eq!(dimension_tag_label(Dimension::Type, "essay"), "Unknown");
        assert_eq!(difficulty_color("easy"), "green");
        assert_eq!(difficulty_color("medium"), "orange");
        assert_eq!(difficulty_color("hard"), "red");
    }

    #[test]
    fn test_accuracy_tag_thresholds() {
        let mut q = sample_question("1", "inference", "easy", "singleChoice");
        assert_eq!(accuracy_tag(&q), ("--".to_string(), "default"));

        q.total_answers = 10;
        q.accuracy_rate = 0.7;
        assert_eq!(accuracy_tag(&q), ("70.0%".to_string(), "green"));
        q.accuracy_rate = 0.3;
        assert_eq!(accuracy_tag(&q).1, "orange");
        q.accuracy_rate = 0.125;
        assert_eq!(accuracy_tag(&q), ("12.5%".to_string(), "red"));
    }
}
