//! Generation summary and nested preview chart

use serde_json::{json, Value};

use crate::dimension::Dimension;
use crate::models::Question;

pub const UNSPECIFIED_KEY: &str = "unspecified";
pub const UNSPECIFIED_LABEL: &str = "Unspecified";

#[derive(Debug, Clone, PartialEq)]
pub struct DistributionItem {
    pub value: String,
    pub label: String,
    pub count: usize,
}

/// Counts of a generated batch per dimension
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationSummary {
    pub total: usize,
    pub category: Vec<DistributionItem>,
    pub difficulty: Vec<DistributionItem>,
    pub question_type: Vec<DistributionItem>,
}

fn dimension_value(question: &Question, dimension: Dimension) -> &str {
    match dimension {
        Dimension::Category => &question.category,
        Dimension::Difficulty => &question.difficulty,
        Dimension::Type => &question.question_type,
    }
}

fn summary_label(dimension: Dimension, value: &str) -> String {
    if value == UNSPECIFIED_KEY {
        return UNSPECIFIED_LABEL.to_string();
    }
    dimension
        .option_label(value)
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string())
}

/// Count questions per value, most frequent first (ties keep first-seen order)
pub fn count_by(questions: &[Question], dimension: Dimension) -> Vec<DistributionItem> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for question in questions {
        let raw = dimension_value(question, dimension);
        let value = if raw.is_empty() { UNSPECIFIED_KEY } else { raw };
        match counts.iter_mut().find(|(v, _)| v.as_str() == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((value.to_string(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .map(|(value, count)| DistributionItem {
            label: summary_label(dimension, &value),
            value,
            count,
        })
        .collect()
}

impl GenerationSummary {
    pub fn from_questions(questions: &[Question]) -> Self {
        Self {
            total: questions.len(),
            category: count_by(questions, Dimension::Category),
            difficulty: count_by(questions, Dimension::Difficulty),
            question_type: count_by(questions, Dimension::Type),
        }
    }
}

/// First letter of each word, split on whitespace and `/`
pub fn abbreviate(label: &str) -> String {
    let abbreviation: String = label
        .split(|c: char| c.is_whitespace() || c == '/')
        .filter(|token| !token.is_empty())
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    if abbreviation.is_empty() {
        label.to_string()
    } else {
        abbreviation
    }
}

/// Slice of the nested pie, plus the full label for the legend key
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewSlice {
    pub name: String,
    pub original_label: String,
    pub count: usize,
}

pub fn preview_slices(items: &[DistributionItem]) -> Vec<PreviewSlice> {
    items
        .iter()
        .filter(|item| item.count > 0)
        .map(|item| PreviewSlice {
            name: abbreviate(&item.label),
            original_label: item.label.clone(),
            count: item.count,
        })
        .collect()
}

/// Distinct abbreviation -> label pairs, inner ring first. Different labels
/// sharing an abbreviation ("Easy", "Equivalence") are all listed.
pub fn legend_key(summary: &GenerationSummary) -> Vec<(String, String)> {
    let mut key: Vec<(String, String)> = Vec::new();
    for slice in [&summary.difficulty, &summary.question_type, &summary.category]
        .into_iter()
        .flat_map(|items| preview_slices(items))
    {
        let pair = (slice.name, slice.original_label);
        if !key.contains(&pair) {
            key.push(pair);
        }
    }
    key
}

fn ring(series_name: &str, radius: Value, slices: Vec<PreviewSlice>) -> Option<Value> {
    if slices.is_empty() {
        return None;
    }
    let data: Vec<Value> = slices
        .into_iter()
        .map(|slice| {
            json!({
                "name": slice.name,
                "value": slice.count,
                "originalLabel": slice.original_label,
                "tooltip": {
                    "formatter": format!("{}<br/>{}: {{c}} ({{d}}%)", series_name, slice.original_label),
                },
            })
        })
        .collect();
    Some(json!({
        "name": series_name,
        "type": "pie",
        "center": ["40%", "50%"],
        "radius": radius,
        "label": { "position": "inner", "formatter": "{b}\n{c}" },
        "data": data,
    }))
}

/// Difficulty (inner), type (middle) and category (outer) rings; empty
/// rings are left out.
pub fn generation_preview_option(summary: &GenerationSummary) -> Value {
    let series: Vec<Value> = [
        ring("Difficulty", json!([0, "30%"]), preview_slices(&summary.difficulty)),
        ring("Type", json!(["40%", "60%"]), preview_slices(&summary.question_type)),
        ring("Category", json!(["70%", "90%"]), preview_slices(&summary.category)),
    ]
    .into_iter()
    .flatten()
    .collect();

    json!({
        "tooltip": { "trigger": "item" },
        "legend": {
            "right": 0,
            "top": "center",
            "orient": "vertical",
            "itemWidth": 10,
            "padding": [20, 0, 0, 0],
            "type": "scroll",
        },
        "series": series,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_question;

    fn batch() -> Vec<Question> {
        vec![
            sample_question("1", "inference", "easy", "singleChoice"),
            sample_question("2", "truthTable", "hard", "trueFalse"),
            sample_question("3", "truthTable", "", "trueFalse"),
            sample_question("4", "truthTable", "hard", "mystery"),
            sample_question("5", "inference", "", "trueFalse"),
        ]
    }

    #[test]
    fn test_count_by_sorts_descending_with_stable_ties() {
        let difficulty = count_by(&batch(), Dimension::Difficulty);
        let values: Vec<_> = difficulty.iter().map(|i| (i.value.as_str(), i.count)).collect();
        // "hard" and "unspecified" tie at 2; "hard" was seen first
        assert_eq!(values, vec![("hard", 2), ("unspecified", 2), ("easy", 1)]);
        assert_eq!(difficulty[1].label, "Unspecified");
    }

    #[test]
    fn test_unknown_value_keeps_raw_label() {
        let types = count_by(&batch(), Dimension::Type);
        assert_eq!(types[0].label, "True / False");
        assert_eq!(types[0].count, 3);
        let mystery = types.iter().find(|i| i.value == "mystery").unwrap();
        assert_eq!(mystery.label, "mystery");
    }

    #[test]
    fn test_summary_totals() {
        let summary = GenerationSummary::from_questions(&batch());
        assert_eq!(summary.total, 5);
        assert_eq!(summary.category[0].label, "Truth Table");
        assert_eq!(summary.category[0].count, 3);
        assert_eq!(GenerationSummary::from_questions(&[]), GenerationSummary::default());
    }

    #[test]
    fn test_abbreviate() {
        assert_eq!(abbreviate("Truth Table"), "TT");
        assert_eq!(abbreviate("True / False"), "TF");
        assert_eq!(abbreviate("single/multi"), "SM");
        assert_eq!(abbreviate("mystery"), "M");
        assert_eq!(abbreviate(" / "), " / ");
    }

    #[test]
    fn test_preview_option_rings() {
        let summary = GenerationSummary::from_questions(&batch());
        let option = generation_preview_option(&summary);
        let series = option["series"].as_array().unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series[0]["name"], "Difficulty");
        assert_eq!(series[0]["data"][0]["name"], "H");
        assert_eq!(series[0]["data"][0]["value"], 2);
        assert_eq!(series[2]["name"], "Category");
        assert_eq!(series[2]["radius"], json!(["70%", "90%"]));
        assert_eq!(
            series[1]["data"][0]["tooltip"]["formatter"],
            "Type<br/>True / False: {c} ({d}%)"
        );
    }

    #[test]
    fn test_preview_option_empty_summary() {
        let option = generation_preview_option(&GenerationSummary::default());
        assert_eq!(option["series"], json!([]));
    }

    #[test]
    fn test_legend_key_keeps_colliding_abbreviations() {
        let mut questions = batch();
        questions.push(sample_question("6", "equivalence", "easy", "trueFalse"));
        let summary = GenerationSummary::from_questions(&questions);
        let key = legend_key(&summary);

        // "Easy" and "Equivalence" both abbreviate to "E"
        assert!(key.contains(&("E".to_string(), "Easy".to_string())));
        assert!(key.contains(&("E".to_string(), "Equivalence".to_string())));
        assert!(key.contains(&("TF".to_string(), "True / False".to_string())));
        assert!(key.contains(&("TT".to_string(), "Truth Table".to_string())));
        let unique: std::collections::HashSet<_> = key.iter().collect();
        assert_eq!(unique.len(), key.len());
    }
}
