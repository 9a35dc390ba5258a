//! Library entrypoint for storefront.
//!
//! The binary only loads settings and serves `routes::app`; everything else
//! lives here so integration tests under `tests/` can drive the router
//! in-process.

use std::sync::Arc;

pub mod config;
pub mod envelope;
pub mod error;
pub mod models;

#[path = "middleware/security.rs"]
pub mod security;

pub mod services;

#[path = "views/render.rs"]
pub mod render;
#[path = "views/templates.rs"]
pub mod templates;

pub mod controllers;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub hbs: templates::Hbs,
    pub settings: config::Settings,
    pub store: Arc<services::Store>,
}

impl AppState {
    /// Fresh state with the seeded catalog and an empty ledger.
    pub fn new(settings: config::Settings) -> Result<Self, handlebars::TemplateError> {
        Ok(Self {
            hbs: templates::build_handlebars()?,
            settings,
            store: Arc::new(services::Store::seeded()),
        })
    }
}
