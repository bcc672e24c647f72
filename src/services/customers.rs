//! Services behind the customer directory pages.

use tera::{Context, Tera};

use crate::dto::customers::IndexQuery;
use crate::repository::CustomerReader;
use crate::services::ServiceResult;
use crate::services::customer_list::CustomerList;

pub const INDEX_TEMPLATE: &str = "customers/index.html";

/// Builds a fresh list and loads the page requested by `query`.
pub async fn load_customer_list<R>(reader: &R, query: &IndexQuery, per_page: u32) -> CustomerList
where
    R: CustomerReader + ?Sized,
{
    let mut list = CustomerList::with_per_page(per_page);
    list.load(reader, query.page()).await;
    list
}

/// Renders the index page for the current state of `list`.
pub fn render_customer_list(tera: &Tera, list: &CustomerList) -> ServiceResult<String> {
    let mut context = Context::new();
    context.insert("view", &list.view());
    Ok(tera.render(INDEX_TEMPLATE, &context)?)
}
