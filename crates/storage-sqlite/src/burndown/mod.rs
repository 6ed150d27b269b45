mod model;
mod repository;


pub use model::DailyAggregateDB;
pub use repository::BurndownRepository;
