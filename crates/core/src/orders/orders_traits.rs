use crate::errors::Result;
use crate::orders::orders_model::{OrderRow, PurchaseOrderLine, WishlistOrder};
use crate::table::TableData;

/// Trait defining the contract for order repository operations.
pub trait OrderRepositoryTrait: Send + Sync {
    fn list_purchase_order_lines(&self) -> Result<Vec<PurchaseOrderLine>>;
    fn list_wishlist_orders(&self) -> Result<Vec<WishlistOrder>>;
}

/// Trait defining the contract for order service operations.
pub trait OrderServiceTrait: Send + Sync {
    fn get_orders_table(&self) -> Result<TableData<OrderRow>>;
}
