//! Orders module - purchase order lines and wishlist orders for the orders grid.

mod orders_model;
mod orders_service;
mod orders_traits;


pub use orders_model::{
    DisplayTone, OrderRow, OrderStatus, OrderType, PurchaseOrderLine, WishlistOrder,
};
pub use orders_service::OrderService;
pub use orders_traits::{OrderRepositoryTrait, OrderServiceTrait};
