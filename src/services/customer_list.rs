//! The customer list component: fetch state plus the view derived from it.

use crate::domain::customer::{Customer, CustomerPage};
use crate::domain::pagination::PaginationInfo;
use crate::dto::customers::{CustomerCard, CustomerListView, PaginationControls};
use crate::repository::errors::FetchResult;
use crate::repository::{CustomerPageQuery, CustomerReader, DEFAULT_PER_PAGE};

/// Handle for one issued fetch. Only the most recently issued ticket may
/// update the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    seq: u64,
    query: CustomerPageQuery,
}

impl LoadTicket {
    pub fn query(&self) -> CustomerPageQuery {
        self.query
    }
}

#[derive(Debug)]
pub struct CustomerList {
    customers: Vec<Customer>,
    pagination: Option<PaginationInfo>,
    loading: bool,
    issued: u64,
    per_page: u32,
}

impl Default for CustomerList {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerList {
    /// A list that has not fetched anything yet. It starts out loading.
    pub fn new() -> Self {
        Self::with_per_page(DEFAULT_PER_PAGE)
    }

    pub fn with_per_page(per_page: u32) -> Self {
        Self {
            customers: Vec::new(),
            pagination: None,
            loading: true,
            issued: 0,
            per_page,
        }
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn pagination(&self) -> Option<&PaginationInfo> {
        self.pagination.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Marks the list as loading and issues a ticket for `page`.
    ///
    /// Issuing a ticket supersedes every ticket issued before it.
    pub fn begin_load(&mut self, page: u32) -> LoadTicket {
        self.issued += 1;
        self.loading = true;
        LoadTicket {
            seq: self.issued,
            query: CustomerPageQuery::new(page).per_page(self.per_page),
        }
    }

    /// Applies the outcome of a fetch. Returns `false` when the ticket was
    /// superseded and the outcome was dropped.
    ///
    /// Any failure leaves the list empty with no pagination.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: FetchResult<CustomerPage>) -> bool {
        if ticket.seq != self.issued {
            log::debug!(
                "Dropping stale response for page {} (request #{}, latest #{})",
                ticket.query.page,
                ticket.seq,
                self.issued
            );
            return false;
        }

        match result {
            Ok(page) => {
                if !page.pagination.is_consistent() {
                    log::warn!(
                        "Inconsistent pagination for page {}: {:?}",
                        ticket.query.page,
                        page.pagination
                    );
                }
                self.customers = page.customers;
                self.pagination = Some(page.pagination);
            }
            Err(err) => {
                log::warn!("Failed to load customers page {}: {err}", ticket.query.page);
                self.customers = Vec::new();
                self.pagination = None;
            }
        }

        self.loading = false;
        true
    }

    /// Fetches `page` from `reader` and replaces the list with the result.
    pub async fn load<R>(&mut self, reader: &R, page: u32)
    where
        R: CustomerReader + ?Sized,
    {
        let ticket = self.begin_load(page);
        let result = reader.list_customers(ticket.query()).await;
        self.finish_load(ticket, result);
    }

    /// Loads the previous page. Does nothing before any pagination is known.
    pub async fn previous<R>(&mut self, reader: &R)
    where
        R: CustomerReader + ?Sized,
    {
        if let Some(target) = self.pagination.map(|p| p.previous_target()) {
            self.load(reader, target).await;
        }
    }

    /// Loads the next page. Does nothing before any pagination is known.
    pub async fn next<R>(&mut self, reader: &R)
    where
        R: CustomerReader + ?Sized,
    {
        if let Some(target) = self.pagination.map(|p| p.next_target()) {
            self.load(reader, target).await;
        }
    }

    pub fn view(&self) -> CustomerListView {
        if self.loading {
            return CustomerListView::Loading;
        }

        if self.customers.is_empty() {
            return CustomerListView::Empty;
        }

        CustomerListView::Cards {
            cards: self.customers.iter().map(CustomerCard::from).collect(),
            controls: self.pagination.as_ref().map(PaginationControls::from),
        }
    }
}
