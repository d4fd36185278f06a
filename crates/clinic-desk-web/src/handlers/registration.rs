use axum::{
    extract::{rejection::FormRejection, State},
    response::{Html, Response},
    Form,
};
use serde::Deserialize;

use super::found;
use crate::errors::WebError;
use crate::state::AppState;
use crate::views;

#[derive(Debug, Deserialize)]
pub struct AddForm {
    patient_name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateForm {
    id: i64,
    patient_name: String,
    status: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    id: i64,
}

pub async fn registration_page(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let registrations = state.desk.list_registrations()?;
    Ok(Html(views::registration(&registrations)))
}

pub async fn add(
    State(state): State<AppState>,
    form: Result<Form<AddForm>, FormRejection>,
) -> Result<Response, WebError> {
    let Form(form) = form?;
    state.desk.add_registration(&form.patient_name)?;
    Ok(found("/registration"))
}

/// Unknown IDs redirect exactly like a successful update.
pub async fn update(
    State(state): State<AppState>,
    form: Result<Form<UpdateForm>, FormRejection>,
) -> Result<Response, WebError> {
    let Form(form) = form?;
    state
        .desk
        .update_registration(form.id, &form.patient_name, &form.status)?;
    Ok(found("/registration"))
}

pub async fn delete(
    State(state): State<AppState>,
    form: Result<Form<DeleteForm>, FormRejection>,
) -> Result<Response, WebError> {
    let Form(form) = form?;
    state.desk.delete_registration(form.id)?;
    Ok(found("/registration"))
}

pub async fn reset(State(state): State<AppState>) -> Result<Response, WebError> {
    state.desk.reset_registrations()?;
    Ok(found("/registration"))
}
