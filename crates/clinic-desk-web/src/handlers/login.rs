use axum::{
    extract::{rejection::FormRejection, State},
    response::{Html, IntoResponse, Response},
    Form,
};
use clinic_desk_core::Credentials;

use super::found;
use crate::errors::WebError;
use crate::state::AppState;
use crate::views;

pub async fn login_page() -> Html<String> {
    Html(views::login(None))
}

pub async fn login(
    State(state): State<AppState>,
    form: Result<Form<Credentials>, FormRejection>,
) -> Result<Response, WebError> {
    let Form(credentials) = form?;
    match state.authenticator.verify(&credentials) {
        Ok(principal) => {
            tracing::info!(username = %principal.username, "operator signed in");
            Ok(found("/dashboard"))
        }
        Err(e) => {
            tracing::warn!(username = %credentials.username, "sign-in rejected");
            Ok(Html(views::login(Some(&e.to_string()))).into_response())
        }
    }
}
