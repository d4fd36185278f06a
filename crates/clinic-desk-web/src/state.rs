use std::sync::Arc;

use clinic_desk_core::{Authenticator, ClinicDesk};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub desk: ClinicDesk,
    pub authenticator: Arc<dyn Authenticator>,
}

impl AppState {
    pub fn new(desk: ClinicDesk, authenticator: impl Authenticator + 'static) -> Self {
        Self {
            desk,
            authenticator: Arc::new(authenticator),
        }
    }
}
