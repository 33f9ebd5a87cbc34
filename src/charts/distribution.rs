//! Question distribution pie charts

use serde_json::{json, Value};

use super::dimension_palette;
use crate::dimension::Dimension;
use crate::models::{DimensionDistributions, DimensionPortion};

pub fn distribution_entries(data: &DimensionDistributions, dimension: Dimension) -> &[DimensionPortion] {
    match dimension {
        Dimension::Category => &data.category,
        Dimension::Difficulty => &data.difficulty,
        Dimension::Type => &data.question_type,
    }
}

/// Pie chart of one dimension's question counts
pub fn distribution_pie_option(dimension: Dimension, data: &[DimensionPortion]) -> Value {
    let series_data: Vec<Value> = data
        .iter()
        .map(|item| {
            let name = dimension.value_label(&item.value);
            let tooltip = format!("{}: {} ({}%)", name, item.count, (item.portion * 100.0).round());
            json!({
                "name": name,
                "value": item.count,
                "portion": item.portion,
                "tooltip": { "formatter": tooltip },
            })
        })
        .collect();

    json!({
        "color": dimension_palette(dimension, series_data.len()),
        "tooltip": { "trigger": "item" },
        "series": [{
            "name": "Distribution",
            "type": "pie",
            "radius": ["0", "80%"],
            "center": ["50%", "45%"],
            "label": { "formatter": "{b}\n{d}%" },
            "data": series_data,
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portion(value: &str, count: u64, portion: f64) -> DimensionPortion {
        DimensionPortion { value: value.to_string(), count, portion }
    }

    #[test]
    fn test_pie_slices_use_labels_and_counts() {
        let data = vec![portion("easy", 6, 0.6), portion("hard", 4, 0.4)];
        let option = distribution_pie_option(Dimension::Difficulty, &data);

        assert_eq!(option["color"], json!(["#FAC858", "#73C0DE"]));
        let slices = option["series"][0]["data"].as_array().unwrap();
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0]["name"], "Easy");
        assert_eq!(slices[0]["value"], 6);
        assert_eq!(slices[1]["tooltip"]["formatter"], "Hard: 4 (40%)");
    }

    #[test]
    fn test_pie_tooltip_rounds_portion() {
        let data = vec![portion("natural_deduction", 1, 0.333)];
        let option = distribution_pie_option(Dimension::Category, &data);
        assert_eq!(
            option["series"][0]["data"][0]["tooltip"]["formatter"],
            "Natural Deduction: 1 (33%)"
        );
    }

    #[test]
    fn test_entries_by_dimension() {
        let data = DimensionDistributions {
            category: vec![portion("inference", 2, 1.0)],
            ..Default::default()
        };
        assert_eq!(distribution_entries(&data, Dimension::Category).len(), 1);
        assert!(distribution_entries(&data, Dimension::Type).is_empty());
    }
}
