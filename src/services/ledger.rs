use crate::models::Order;

/// Append-only order history.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    orders: Vec<Order>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list_orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn next_id(&self) -> u64 {
        self.orders.len() as u64 + 1
    }

    /// Stores the record under the next sequential id, overwriting whatever id it carried.
    pub fn append_order(&mut self, mut order: Order) -> Order {
        order.id = self.next_id();
        self.orders.push(order.clone());
        order
    }
}
