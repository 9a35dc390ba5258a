use axum::{Router, routing::get};
use crate::{AppState, controllers::product_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/products", get(product_controller::list_products))
        .route("/api/products/:id", get(product_controller::get_product))
}
