use crate::domain::customer::CustomerPage;
use crate::repository::errors::FetchResult;

pub mod customer;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use customer::ApiCustomerReader;

/// Page size requested from the customers API.
pub const DEFAULT_PER_PAGE: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerPageQuery {
    pub page: u32,
    pub per_page: u32,
}

impl CustomerPageQuery {
    /// Query for `page` with the default page size. Page numbers start at 1.
    pub fn new(page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: DEFAULT_PER_PAGE,
        }
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.max(1);
        self
    }
}

impl Default for CustomerPageQuery {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Source of customer pages.
#[allow(async_fn_in_trait)]
pub trait CustomerReader {
    async fn list_customers(&self, query: CustomerPageQuery) -> FetchResult<CustomerPage>;
}
