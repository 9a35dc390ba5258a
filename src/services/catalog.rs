use crate::{error::StoreError, models::Product};

/// Products in insertion order. Only stock ever changes after seeding.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The fixed startup catalog.
    pub fn seeded() -> Self {
        Self::new(vec![
            Product::new(1, "MacBook Pro", 1299.99, "Electronics", 15),
            Product::new(2, "iPhone 15", 799.99, "Electronics", 30),
            Product::new(3, "Samsung Galaxy", 699.99, "Electronics", 25),
            Product::new(4, "Nike Air Max", 120.99, "Fashion", 50),
        ])
    }

    pub fn list_products(&self) -> &[Product] {
        &self.products
    }

    pub fn find_product(&self, id: u32) -> Result<&Product, StoreError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(StoreError::product_not_found)
    }

    pub fn decrement_stock(&mut self, id: u32, quantity: u32) -> Result<&Product, StoreError> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(StoreError::product_not_found)?;

        if quantity > product.stock {
            return Err(StoreError::InsufficientStock {
                requested: quantity,
                available: product.stock,
            });
        }

        product.stock -= quantity;
        Ok(&*product)
    }
}
