//! Question Statistics Endpoints

use super::get_json;
use crate::error::ApiError;
use crate::models::{AccuracyDistributions, DimensionDistributions};

pub async fn fetch_dimension_distribution() -> Result<DimensionDistributions, ApiError> {
    get_json("/question-stats/dimension-distribution", &[]).await
}

pub async fn fetch_dimension_accuracy() -> Result<AccuracyDistributions, ApiError> {
    get_json("/question-stats/dimension-accuracy", &[]).await
}
