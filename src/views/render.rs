use serde_json::json;

use crate::AppState;

pub fn render_full(state: &AppState, title: &str, body_html: String) -> Result<String, String> {
    let ctx = json!({
        "title": title,
        "body": body_html,
        "api_base_url": state.settings.api_base_url,
    });

    state
        .hbs
        .render("layouts/base", &ctx)
        .map_err(|e| e.to_string())
}

/// The store client page: product grid plus order form.
pub fn render_store(state: &AppState) -> Result<String, String> {
    let body = state
        .hbs
        .render("pages/store", &json!({}))
        .map_err(|e| e.to_string())?;

    render_full(state, "E-Commerce Store", body)
}
