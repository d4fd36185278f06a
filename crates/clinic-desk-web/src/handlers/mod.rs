//! HTTP routes.
//!
//! No route other than `/login` checks who is calling.

mod dashboard;
mod emr;
mod login;
mod registration;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(login::login_page))
        .route("/login", post(login::login))
        .route("/dashboard", get(dashboard::dashboard))
        .route("/emr/new", get(emr::new_emr_form).post(emr::create_emr))
        .route("/patient", get(emr::view_patient))
        .route("/registration", get(registration::registration_page))
        .route("/registration/add", post(registration::add))
        .route("/registration/update", post(registration::update))
        .route("/registration/delete", post(registration::delete))
        .route("/registration/reset", post(registration::reset))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// `302 Found` redirect, as browsers expect after a form post.
pub(crate) fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
