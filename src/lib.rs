//! Equiptrack Equipment Tracking System
//!
//! A Rust implementation of the Equiptrack equipment tracking server,
//! recording equipment inventory, availability and location history for an
//! organization. Chat updates arrive on a webhook endpoint; replies carry
//! the message text and inline keyboards for the transport to render.

use std::sync::Arc;

pub mod api;
pub mod bot;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
    pub gateway: Arc<bot::Gateway>,
}
