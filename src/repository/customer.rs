//! HTTP-backed customer source.

use crate::domain::customer::CustomerPage;
use crate::repository::errors::{FetchError, FetchResult};
use crate::repository::{CustomerPageQuery, CustomerReader};

/// Reads customer pages from `{base_url}/api/v1/customers`.
#[derive(Clone, Debug)]
pub struct ApiCustomerReader {
    client: reqwest::Client,
    base_url: String,
}

impl ApiCustomerReader {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full request URL for `query`.
    pub fn customers_url(&self, query: &CustomerPageQuery) -> String {
        format!(
            "{}/api/v1/customers?page={}&per_page={}",
            self.base_url, query.page, query.per_page
        )
    }
}

impl CustomerReader for ApiCustomerReader {
    async fn list_customers(&self, query: CustomerPageQuery) -> FetchResult<CustomerPage> {
        let url = self.customers_url(&query);
        log::debug!("Fetching customers from {url}");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let page = serde_json::from_slice::<CustomerPage>(&body)?;

        Ok(page)
    }
}
