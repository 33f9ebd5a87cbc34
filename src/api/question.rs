//! Question Endpoints

use serde::{Deserialize, Serialize};

use super::{get_json, post_json, post_unit};
use crate::error::ApiError;
use crate::models::{GenerateParams, Question, QuestionPage};
use crate::table_state::{list_query_params, Pagination, TableFilter};

#[derive(Serialize)]
struct DeleteArgs<'a> {
    ids: &'a [String],
}

/// Shapes the generate endpoint has been seen to return
#[derive(Deserialize)]
#[serde(untagged)]
enum GenerateResponse {
    List(Vec<Question>),
    Questions { questions: Vec<Question> },
    Paged { list: Vec<Question> },
    Other(serde_json::Value),
}

impl GenerateResponse {
    fn into_questions(self) -> Vec<Question> {
        match self {
            GenerateResponse::List(list)
            | GenerateResponse::Questions { questions: list }
            | GenerateResponse::Paged { list } => list,
            GenerateResponse::Other(value) => {
                log::warn!("[API] unrecognised generate response: {}", value);
                Vec::new()
            }
        }
    }
}

pub async fn fetch_questions(pagination: Pagination, filter: &TableFilter) -> Result<QuestionPage, ApiError> {
    get_json("/question/questions", &list_query_params(pagination, filter)).await
}

pub async fn delete_questions(ids: &[String]) -> Result<(), ApiError> {
    post_unit("/question/delete", &DeleteArgs { ids }).await
}

pub async fn generate_questions(params: &GenerateParams) -> Result<Vec<Question>, ApiError> {
    let response: GenerateResponse = post_json("/question/generate", params).await?;
    Ok(response.into_questions())
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUESTION: &str = r#"{
        "_id": "q1",
        "question_text": "If P then Q. P. Therefore?",
        "options": ["Q", "Not Q"],
        "correct_answer_index": [0],
        "category": "inference",
        "difficulty": "easy",
        "type": "singleChoice"
    }"#;

    fn parse(body: &str) -> Vec<Question> {
        serde_json::from_str::<GenerateResponse>(body).unwrap().into_questions()
    }

    #[test]
    fn test_generate_response_shapes() {
        assert_eq!(parse(&format!("[{}]", QUESTION))[0].id, "q1");
        assert_eq!(parse(&format!(r#"{{"questions":[{}]}}"#, QUESTION)).len(), 1);
        assert_eq!(parse(&format!(r#"{{"list":[{}],"total":1}}"#, QUESTION)).len(), 1);
    }

    #[test]
    fn test_unknown_generate_response_is_empty() {
        assert!(parse(r#"{"status":"queued"}"#).is_empty());
        assert!(parse("null").is_empty());
        assert!(parse("[]").is_empty());
    }

    #[test]
    fn test_delete_body() {
        let ids = vec!["a".to_string(), "b".to_string()];
        let body = serde_json::to_string(&DeleteArgs { ids: &ids }).unwrap();
        assert_eq!(body, r#"{"ids":["a","b"]}"#);
    }
}
