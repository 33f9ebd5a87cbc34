//! Accuracy bar chart

use serde_json::{json, Value};

use super::{dimension_color, percent_one_decimal};
use crate::dimension::Dimension;
use crate::models::{AccuracyByDimension, AccuracyDistributions};

pub const MAX_BARS_PER_GROUP: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct AccuracyChartItem {
    pub label: String,
    pub accuracy: f64,
}

/// Bars shown for one dimension on the x axis
#[derive(Debug, Clone, PartialEq)]
pub struct AccuracyChartGroup {
    pub dimension: Dimension,
    pub items: Vec<AccuracyChartItem>,
}

impl AccuracyChartGroup {
    /// Multi-line tooltip listing every bar of the group
    fn tooltip(&self) -> String {
        let lines: Vec<String> = self
            .items
            .iter()
            .map(|item| format!("{}: {:.1}%", item.label, item.accuracy * 100.0))
            .collect();
        format!("{}<br/>{}", self.dimension.label(), lines.join("<br/>"))
    }
}

fn accuracy_entries(data: &AccuracyDistributions, dimension: Dimension) -> &[AccuracyByDimension] {
    match dimension {
        Dimension::Category => &data.category,
        Dimension::Difficulty => &data.difficulty,
        Dimension::Type => &data.question_type,
    }
}

/// Group accuracy records by dimension, keeping at most
/// [`MAX_BARS_PER_GROUP`] entries each and dropping empty groups.
pub fn accuracy_chart_groups(data: &AccuracyDistributions) -> Vec<AccuracyChartGroup> {
    Dimension::ALL
        .iter()
        .map(|&dimension| AccuracyChartGroup {
            dimension,
            items: accuracy_entries(data, dimension)
                .iter()
                .take(MAX_BARS_PER_GROUP)
                .map(|entry| AccuracyChartItem {
                    label: dimension.value_label(&entry.value),
                    accuracy: entry.accuracy,
                })
                .collect(),
        })
        .filter(|group| !group.items.is_empty())
        .collect()
}

/// Grouped bar chart: one x-axis slot per dimension, series `i` holding the
/// i-th bar of every group.
pub fn accuracy_option(groups: &[AccuracyChartGroup]) -> Value {
    let categories: Vec<&str> = groups.iter().map(|g| g.dimension.label()).collect();
    let max_items = groups.iter().map(|g| g.items.len()).max().unwrap_or(0);

    let series: Vec<Value> = (0..max_items)
        .map(|series_index| {
            let data: Vec<Value> = groups
                .iter()
                .map(|group| match group.items.get(series_index) {
                    Some(item) => json!({
                        "value": percent_one_decimal(item.accuracy),
                        "accuracy": item.accuracy,
                        "dimensionLabel": group.dimension.label(),
                        "valueLabel": item.label,
                        "itemStyle": {
                            "color": dimension_color(group.dimension, series_index),
                            "borderRadius": [8, 8, 0, 0],
                        },
                        "tooltip": { "formatter": group.tooltip() },
                    }),
                    None => Value::Null,
                })
                .collect();
            json!({
                "name": format!("Item {}", series_index + 1),
                "type": "bar",
                "data": data,
                "barMaxWidth": 64,
                "itemStyle": { "borderRadius": [8, 8, 0, 0] },
                "emphasis": { "focus": "series" },
            })
        })
        .filter(|serie| {
            serie["data"]
                .as_array()
                .map_or(false, |points| points.iter().any(|p| !p.is_null()))
        })
        .collect();

    json!({
        "tooltip": { "trigger": "item" },
        "legend": { "show": false },
        "grid": { "left": 48, "right": 24, "top": 10, "bottom": 24 },
        "xAxis": {
            "type": "category",
            "data": categories,
            "axisLabel": { "interval": 0 },
        },
        "yAxis": {
            "type": "value",
            "min": 0,
            "max": 100,
            "axisLabel": { "formatter": "{value}%" },
        },
        "series": series,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acc(value: &str, accuracy: f64) -> AccuracyByDimension {
        AccuracyByDimension { value: value.to_string(), accuracy }
    }

    fn sample() -> AccuracyDistributions {
        AccuracyDistributions {
            category: vec![
                acc("truthTable", 0.8126),
                acc("equivalence", 0.5),
                acc("inference", 0.25),
                acc("extra", 0.9),
            ],
            difficulty: vec![],
            question_type: vec![acc("trueFalse", 0.6)],
        }
    }

    #[test]
    fn test_groups_cap_and_drop_empty() {
        let groups = accuracy_chart_groups(&sample());
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].dimension, Dimension::Category);
        assert_eq!(groups[0].items.len(), MAX_BARS_PER_GROUP);
        assert_eq!(groups[0].items[0].label, "Truth Table");
        assert_eq!(groups[1].dimension, Dimension::Type);
        assert_eq!(groups[1].items[0].label, "True / False");
    }

    #[test]
    fn test_groups_empty_input() {
        assert!(accuracy_chart_groups(&AccuracyDistributions::default()).is_empty());
        let option = accuracy_option(&[]);
        assert_eq!(option["series"], json!([]));
        assert_eq!(option["xAxis"]["data"], json!([]));
    }

    #[test]
    fn test_option_series_layout() {
        let option = accuracy_option(&accuracy_chart_groups(&sample()));
        assert_eq!(option["xAxis"]["data"], json!(["Category", "Type"]));

        let series = option["series"].as_array().unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series[0]["name"], "Item 1");

        // First bar of each group
        assert_eq!(series[0]["data"][0]["value"], json!(81.3));
        assert_eq!(series[0]["data"][0]["itemStyle"]["color"], "#5470C6");
        assert_eq!(series[0]["data"][1]["value"], json!(60.0));
        assert_eq!(series[0]["data"][1]["itemStyle"]["color"], "#FC8452");

        // Type group has a single bar, so later series hold null there
        assert!(series[1]["data"][1].is_null());
        assert_eq!(series[2]["data"][0]["valueLabel"], "Inference");
        assert_eq!(series[2]["data"][0]["itemStyle"]["color"], "#EE6666");
    }

    #[test]
    fn test_point_tooltip_lists_whole_group() {
        let option = accuracy_option(&accuracy_chart_groups(&sample()));
        assert_eq!(
            option["series"][0]["data"][0]["tooltip"]["formatter"],
            "Category<br/>Truth Table: 81.3%<br/>Equivalence: 50.0%<br/>Inference: 25.0%"
        );
    }
}
