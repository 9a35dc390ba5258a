use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;

use crate::{
    error::StoreError,
    models::{Order, Product},
};

use super::{
    catalog::Catalog,
    ledger::Ledger,
    order_service::{self, OrderInput, OrderRequest},
};

struct Inventory {
    catalog: Catalog,
    ledger: Ledger,
}

/// Sole owner of the catalog and the ledger.
///
/// One mutex covers both, so an order's stock check, decrement and append
/// never interleave with another request.
pub struct Store {
    inner: Mutex<Inventory>,
}

impl Store {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Mutex::new(Inventory {
                catalog,
                ledger: Ledger::new(),
            }),
        }
    }

    pub fn seeded() -> Self {
        Self::new(Catalog::seeded())
    }

    // Mutations happen only after every check passes, so a poisoned guard
    // still holds consistent state.
    fn lock(&self) -> MutexGuard<'_, Inventory> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list_products(&self) -> Vec<Product> {
        self.lock().catalog.list_products().to_vec()
    }

    pub fn find_product(&self, id: u32) -> Result<Product, StoreError> {
        self.lock().catalog.find_product(id).cloned()
    }

    pub fn list_orders(&self) -> Vec<Order> {
        self.lock().ledger.list_orders().to_vec()
    }

    pub fn place_order(&self, req: &OrderRequest) -> Result<Order, StoreError> {
        let input = OrderInput::parse(req).inspect_err(|e| {
            tracing::debug!(error = %e, "order rejected");
        })?;

        let mut guard = self.lock();
        let Inventory { catalog, ledger } = &mut *guard;

        order_service::place_order(catalog, ledger, input, Utc::now()).inspect_err(|e| {
            tracing::debug!(error = %e, "order rejected");
        })
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::seeded()
    }
}
