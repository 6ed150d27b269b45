mod repository;

pub use repository::RefreshRepository;
