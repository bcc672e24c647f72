//! Mock customer source for isolating services in tests.

use mockall::mock;

use crate::domain::customer::CustomerPage;
use crate::repository::errors::FetchResult;
use crate::repository::{CustomerPageQuery, CustomerReader};

mock! {
    pub CustomerReader {}

    impl CustomerReader for CustomerReader {
        async fn list_customers(&self, query: CustomerPageQuery) -> FetchResult<CustomerPage>;
    }
}
