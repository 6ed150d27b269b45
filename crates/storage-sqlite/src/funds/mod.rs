mod model;
mod repository;

pub use model::FundBalanceDB;
pub use repository::FundRepository;
