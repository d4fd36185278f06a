use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::errors::WebError;
use crate::state::AppState;
use crate::views;

pub const DEFAULT_CATEGORY: &str = "진료부";

#[derive(Debug, Deserialize)]
pub struct DashboardParams {
    #[serde(default = "default_category")]
    category: String,
    #[serde(default)]
    query: String,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// Patient search. The category is only echoed back; it does not filter results.
pub async fn dashboard(
    State(state): State<AppState>,
    query: Result<Query<DashboardParams>, QueryRejection>,
) -> Result<Html<String>, WebError> {
    let Query(params) = query?;
    let patients = state.desk.search_patients(&params.query)?;
    Ok(Html(views::dashboard(&params.category, &params.query, &patients)))
}
