//! # Clinic Desk Web
//!
//! HTTP front end for the clinic front desk.
//!
//! Handles:
//! - routing and form/query extraction with axum
//! - HTML views
//! - environment configuration and tracing setup
//!
//! All record keeping lives in `clinic-desk-core`.

#![warn(rust_2018_idioms)]

pub mod config;
pub mod errors;
pub mod handlers;
pub mod logging;
pub mod state;
pub mod views;

pub use config::WebConfig;
pub use handlers::router;
pub use state::AppState;
