//! Client module - typed access to the dashboard server's endpoints.

mod http_client;

pub use http_client::HttpDashboardClient;
