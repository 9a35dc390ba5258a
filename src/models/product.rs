use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub stock: u32,
}

impl Product {
    pub fn new(id: u32, name: &str, price: f64, category: &str, stock: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            price,
            category: category.to_string(),
            stock,
        }
    }
}
