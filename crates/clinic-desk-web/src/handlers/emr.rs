use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Query, State,
    },
    response::{Html, IntoResponse, Response},
    Form,
};
use clinic_desk_core::{ClinicDeskError, NewVisit};
use serde::Deserialize;

use super::found;
use crate::errors::WebError;
use crate::state::AppState;
use crate::views;

pub const DATE_FORMAT_MESSAGE: &str = "Dates must be in YYYY-MM-DD format.";

pub async fn new_emr_form() -> Html<String> {
    Html(views::new_emr(&NewVisit::default(), None))
}

/// Store a visit, or show the form again with what was typed and an inline error.
pub async fn create_emr(
    State(state): State<AppState>,
    form: Result<Form<NewVisit>, FormRejection>,
) -> Result<Response, WebError> {
    let Form(form) = form?;
    match state.desk.create_visit(&form) {
        Ok(_) => Ok(found("/dashboard")),
        Err(ClinicDeskError::InvalidDateFormat(detail)) => {
            tracing::debug!(%detail, "visit form rejected");
            Ok(Html(views::new_emr(&form, Some(DATE_FORMAT_MESSAGE))).into_response())
        }
        Err(ClinicDeskError::InvalidInput(message)) => {
            Ok(Html(views::new_emr(&form, Some(&message))).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

#[derive(Debug, Deserialize)]
pub struct PatientParams {
    name: String,
    birth_date: String,
    #[serde(default)]
    index: i64,
}

pub async fn view_patient(
    State(state): State<AppState>,
    query: Result<Query<PatientParams>, QueryRejection>,
) -> Result<Html<String>, WebError> {
    let Query(params) = query?;
    let page = state
        .desk
        .get_patient_visits(&params.name, &params.birth_date, params.index)?;
    Ok(Html(views::view_emr(&page)))
}
