use axum::Router;
use tower_http::services::ServeDir;

use crate::{AppState, security};

pub mod home_routes;
pub mod order_routes;
pub mod product_routes;

pub fn app(state: AppState) -> Router {
    let router = Router::<AppState>::new();

    let router = home_routes::add_routes(router);
    let router = product_routes::add_routes(router);
    let router = order_routes::add_routes(router);

    let router = router.nest_service("/static", ServeDir::new("static"));

    security::apply(router).with_state(state)
}
