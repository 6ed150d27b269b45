use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::burndown::{DailyAggregate, Series};
use crate::dashboard::BurndownSource;
use crate::errors::{Error, Result};
use crate::funds::FundBalance;
use crate::orders::OrderRow;
use crate::refresh::RefreshTimestamp;
use crate::scope::{BurndownQuery, Scope};
use crate::table::TableData;

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Error payload returned by the server for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

/// Fetches grid and burndown data from a dashboard server.
#[derive(Debug, Clone)]
pub struct HttpDashboardClient {
    client: Client,
    base_url: String,
}

impl HttpDashboardClient {
    /// `base_url` is the server root, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self::with_client(client, base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        HttpDashboardClient { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = self.url(path);
        debug!("GET {} {:?}", url, query);
        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let body = response.json::<ErrorBody>().await.ok();
        let message = body
            .map(|b| format!("{}: {}", b.code, b.message))
            .unwrap_or_else(|| status.to_string());
        warn!("{} returned {}: {}", url, status, message);
        Err(match status {
            StatusCode::BAD_REQUEST => Error::InvalidScopeParameter(message),
            StatusCode::SERVICE_UNAVAILABLE => Error::DataUnavailable(message),
            _ => Error::Http(message),
        })
    }

    pub async fn fetch_orders(&self) -> Result<TableData<OrderRow>> {
        self.get_json("orders-data", &[]).await
    }

    pub async fn fetch_funds(&self) -> Result<TableData<FundBalance>> {
        self.get_json("funds-data", &[]).await
    }

    pub async fn fetch_timestamps(&self) -> Result<TableData<RefreshTimestamp>> {
        self.get_json("timestamp-data", &[]).await
    }

    pub async fn fetch_burndown(&self, scope: &Scope) -> Result<TableData<DailyAggregate>> {
        let params = burndown_params(scope);
        let query: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
        self.get_json("burndown-data", &query).await
    }
}

fn burndown_params(scope: &Scope) -> Vec<(&'static str, String)> {
    let query = BurndownQuery::from(scope);
    [
        ("type", query.scope_type),
        ("ledger", query.ledger),
        ("fundCode", query.fund_code),
    ]
    .into_iter()
    .filter_map(|(key, value)| value.map(|v| (key, v)))
    .collect()
}

#[async_trait]
impl BurndownSource for HttpDashboardClient {
    async fn fetch_series(&self, scope: &Scope) -> Result<Series> {
        let table = self.fetch_burndown(scope).await?;
        Ok(Series::new(scope.clone(), table.rows)?)
    }
}
