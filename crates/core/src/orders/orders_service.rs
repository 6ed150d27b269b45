use std::sync::Arc;

use log::{debug, error};

use crate::errors::{Error, Result};
use crate::orders::orders_model::OrderRow;
use crate::orders::orders_traits::{OrderRepositoryTrait, OrderServiceTrait};
use crate::table::TableData;

pub struct OrderService {
    repository: Arc<dyn OrderRepositoryTrait>,
}

impl OrderService {
    pub fn new(repository: Arc<dyn OrderRepositoryTrait>) -> Self {
        OrderService { repository }
    }
}

fn unavailable(what: &str, e: Error) -> Error {
    error!("Failed to load {}: {}", what, e);
    Error::DataUnavailable(e.to_string())
}

impl OrderServiceTrait for OrderService {
    /// Purchase order lines first, then wishlist orders.
    fn get_orders_table(&self) -> Result<TableData<OrderRow>> {
        let lines = self
            .repository
            .list_purchase_order_lines()
            .map_err(|e| unavailable("purchase order lines", e))?;
        let wishlist = self
            .repository
            .list_wishlist_orders()
            .map_err(|e| unavailable("wishlist orders", e))?;
        debug!(
            "Loaded {} order lines and {} wishlist orders",
            lines.len(),
            wishlist.len()
        );

        let rows = lines
            .into_iter()
            .map(OrderRow::from_purchase_order_line)
            .chain(wishlist.into_iter().map(OrderRow::from_wishlist_order))
            .collect();
        Ok(TableData::new(rows))
    }
}
