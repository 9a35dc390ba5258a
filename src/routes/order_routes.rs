use axum::{Router, routing::get};
use crate::{AppState, controllers::order_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router.route(
        "/api/orders",
        get(order_controller::list_orders).post(order_controller::create_order),
    )
}
