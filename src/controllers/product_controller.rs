use axum::{
    extract::{Path, State},
    Json,
};

use crate::{envelope::Envelope, error::StoreError, models::Product, AppState};

// GET /api/products
pub async fn list_products(State(state): State<AppState>) -> Json<Envelope<Vec<Product>>> {
    Json(Envelope::list(state.store.list_products()))
}

// GET /api/products/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Product>>, StoreError> {
    // A non-numeric id can never match, so it is a plain 404.
    let id: u32 = id.trim().parse().map_err(|_| StoreError::product_not_found())?;

    let product = state.store.find_product(id)?;
    Ok(Json(Envelope::data(product)))
}
