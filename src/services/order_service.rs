use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::StoreError,
    models::{Order, OrderStatus},
};

use super::{catalog::Catalog, ledger::Ledger};

/// Raw POST /api/orders body. Fields stay untyped until [`OrderInput::parse`]
/// so a missing field and a mistyped one can be told apart.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderRequest {
    pub product_id: Option<Value>,
    pub quantity: Option<Value>,
    pub customer_name: Option<Value>,
    pub customer_email: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderInput {
    pub product_id: u32,
    pub quantity: u32,
    pub customer_name: String,
    pub customer_email: String,
}

fn is_missing(v: &Option<Value>) -> bool {
    match v {
        None | Some(Value::Null) | Some(Value::Bool(false)) => true,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

fn parse_positive(field: &str, v: &Value) -> Result<u32, StoreError> {
    let parsed = match v {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    };

    match parsed {
        Some(n) if n > 0 => Ok(n),
        _ => Err(StoreError::Validation(format!(
            "{field} must be a positive integer"
        ))),
    }
}

fn parse_text(field: &str, v: &Value) -> Result<String, StoreError> {
    let Value::String(s) = v else {
        return Err(StoreError::Validation(format!("{field} must be a string")));
    };

    let s = s.trim();
    if s.is_empty() {
        return Err(StoreError::Validation(format!("{field} must not be blank")));
    }
    Ok(s.to_string())
}

impl OrderInput {
    pub fn parse(req: &OrderRequest) -> Result<Self, StoreError> {
        let (Some(product_id), Some(quantity), Some(customer_name), Some(customer_email)) = (
            &req.product_id,
            &req.quantity,
            &req.customer_name,
            &req.customer_email,
        ) else {
            return Err(all_fields_required());
        };

        if [
            &req.product_id,
            &req.quantity,
            &req.customer_name,
            &req.customer_email,
        ]
        .into_iter()
        .any(is_missing)
        {
            return Err(all_fields_required());
        }

        Ok(Self {
            product_id: parse_positive("productId", product_id)?,
            quantity: parse_positive("quantity", quantity)?,
            customer_name: parse_text("customerName", customer_name)?,
            customer_email: parse_text("customerEmail", customer_email)?,
        })
    }
}

pub fn all_fields_required() -> StoreError {
    StoreError::Validation("All fields are required".to_string())
}

/// Checks stock, takes it, and records the order.
///
/// Callers must hold exclusive access to both `catalog` and `ledger` for the
/// whole call; nothing is mutated unless every check passes.
pub fn place_order(
    catalog: &mut Catalog,
    ledger: &mut Ledger,
    input: OrderInput,
    now: DateTime<Utc>,
) -> Result<Order, StoreError> {
    let product = catalog.decrement_stock(input.product_id, input.quantity)?;

    let order = Order {
        id: ledger.next_id(),
        product_id: product.id,
        product_name: product.name.clone(),
        quantity: input.quantity,
        total_price: product.price * f64::from(input.quantity),
        customer_name: input.customer_name,
        customer_email: input.customer_email,
        status: OrderStatus::Confirmed,
        created_at: now,
    };

    let order = ledger.append_order(order);

    tracing::info!(
        order_id = order.id,
        product_id = order.product_id,
        quantity = order.quantity,
        "order confirmed"
    );

    Ok(order)
}
