mod model;
mod repository;

pub use model::{PurchaseOrderLineDB, WishlistOrderDB};
pub use repository::OrderRepository;
