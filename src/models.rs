//! Frontend Models
//!
//! Data structures matching backend payloads.

use serde::{Deserialize, Deserializer, Serialize};

/// Go encodes nil slices as `null`; read those as empty
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Question record as returned to administrators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "_id")]
    pub id: String,
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_answer_index: Vec<usize>,
    pub category: String,
    pub difficulty: String,
    #[serde(rename = "type")]
    pub question_type: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub total_answers: i64,
    #[serde(default)]
    pub correct_answers: i64,
    #[serde(default)]
    pub accuracy_rate: f64,
}

impl Question {
    pub fn is_true_false(&self) -> bool {
        self.question_type == "trueFalse"
    }
}

/// One page of the question list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionPage {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub list: Vec<Question>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub current_page: u32,
}

/// Body of `POST /question/generate`; unset filters are omitted
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenerateParams {
    pub number: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub question_type: Option<String>,
}

/// Share of the question bank held by one dimension value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionPortion {
    pub value: String,
    pub count: u64,
    pub portion: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionDistributions {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: Vec<DimensionPortion>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub difficulty: Vec<DimensionPortion>,
    #[serde(default, rename = "type", deserialize_with = "null_as_empty")]
    pub question_type: Vec<DimensionPortion>,
}

/// Answer accuracy for one dimension value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyByDimension {
    pub value: String,
    pub accuracy: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccuracyDistributions {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: Vec<AccuracyByDimension>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub difficulty: Vec<AccuracyByDimension>,
    #[serde(default, rename = "type", deserialize_with = "null_as_empty")]
    pub question_type: Vec<AccuracyByDimension>,
}

#[cfg(test)]
pub(crate) fn sample_question(id: &str, category: &str, difficulty: &str, question_type: &str) -> Question {
    Question {
        id: id.to_string(),
        question_text: format!("Question {}", id),
        options: vec!["p".into(), "q".into(), "p ∧ q".into(), "p ∨ q".into()],
        correct_answer_index: vec![0],
        category: category.to_string(),
        difficulty: difficulty.to_string(),
        question_type: question_type.to_string(),
        is_active: true,
        total_answers: 0,
        correct_answers: 0,
        accuracy_rate: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_page_from_backend_json() {
        let raw = r#"{
            "list": [{
                "_id": "65f0c0ffee",
                "question_text": "Which formula is equivalent to p → q?",
                "options": ["¬p ∨ q", "p ∧ q"],
                "correct_answer_index": [0],
                "type": "singleChoice",
                "category": "equivalence",
                "difficulty": "medium",
                "is_active": true,
                "total_answers": 12,
                "correct_answers": 9,
                "accuracy_rate": 0.75
            }],
            "total": 31,
            "current_page": 2
        }"#;
        let page: QuestionPage = serde_json::from_str(raw).unwrap();
        assert_eq!(page.total, 31);
        assert_eq!(page.current_page, 2);
        let q = &page.list[0];
        assert_eq!(q.id, "65f0c0ffee");
        assert_eq!(q.question_type, "singleChoice");
        assert_eq!(q.correct_answer_index, vec![0]);
        assert_eq!(q.accuracy_rate, 0.75);
    }

    #[test]
    fn test_question_counters_default_to_zero() {
        let raw = r#"{"_id":"a","question_text":"t","options":["True","False"],
            "correct_answer_index":[1],"type":"trueFalse","category":"inference","difficulty":"easy"}"#;
        let q: Question = serde_json::from_str(raw).unwrap();
        assert!(q.is_true_false());
        assert_eq!(q.total_answers, 0);
        assert!(!q.is_active);
    }

    #[test]
    fn test_generate_params_omit_unset_filters() {
        let params = GenerateParams {
            number: 10,
            difficulty: Some("hard".into()),
            ..Default::default()
        };
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body, serde_json::json!({ "number": 10, "difficulty": "hard" }));

        let params = GenerateParams {
            number: 3,
            question_type: Some("trueFalse".into()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&params).unwrap()["type"], "trueFalse");
    }

    #[test]
    fn test_distributions_missing_dimension_is_empty() {
        let raw = r#"{"difficulty":[{"value":"easy","count":4,"portion":0.5}],"category":[]}"#;
        let d: DimensionDistributions = serde_json::from_str(raw).unwrap();
        assert_eq!(d.difficulty.len(), 1);
        assert!(d.question_type.is_empty());
    }

    #[test]
    fn test_empty_bank_null_dimensions_decode_as_empty() {
        let raw = r#"{"difficulty":null,"type":null,"category":null}"#;
        let d: DimensionDistributions = serde_json::from_str(raw).unwrap();
        assert_eq!(d, DimensionDistributions::default());
        let a: AccuracyDistributions = serde_json::from_str(raw).unwrap();
        assert_eq!(a, AccuracyDistributions::default());
    }

    #[test]
    fn test_question_page_null_list() {
        let page: QuestionPage = serde_json::from_str(r#"{"list":null,"total":0,"current_page":1}"#).unwrap();
        assert!(page.list.is_empty());
        assert_eq!(page.current_page, 1);
    }
}
