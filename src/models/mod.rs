pub mod order;
pub mod product;

pub use order::{Order, OrderStatus};
pub use product::Product;
