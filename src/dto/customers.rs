//! View models handed to the customer list templates.

use serde::Serialize;

use crate::domain::customer::Customer;
use crate::domain::pagination::PaginationInfo;

/// Query parameters accepted by the index page.
#[derive(Debug, Default, Clone)]
pub struct IndexQuery {
    /// Raw page number; anything that is not a positive integer means page 1.
    pub page: Option<String>,
}

impl IndexQuery {
    /// Builds the query from raw query-string pairs. A repeated `page` keeps
    /// its first value.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            page: pairs
                .iter()
                .find(|(key, _)| key == "page")
                .map(|(_, value)| value.clone()),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
            .as_deref()
            .and_then(|page| page.trim().parse::<u32>().ok())
            .filter(|page| *page > 0)
            .unwrap_or(1)
    }
}

/// What the customer list draws in its current state.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CustomerListView {
    Loading,
    Empty,
    Cards {
        cards: Vec<CustomerCard>,
        controls: Option<PaginationControls>,
    },
}

/// Fields shown on a single customer card.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CustomerCard {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub title: Option<String>,
    pub company: Option<String>,
    pub city: Option<String>,
    pub gender: Option<String>,
    pub ip_address: Option<String>,
    /// Bare host; templates link it as `https://{website}`.
    pub website: Option<String>,
}

impl From<&Customer> for CustomerCard {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.display_name(),
            email: customer.email.clone(),
            title: customer.title.clone(),
            company: customer.company.clone(),
            city: customer.city.clone(),
            gender: customer.gender.clone(),
            ip_address: customer.ip_address.clone(),
            website: customer.website().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PageButton {
    /// Page requested when the button is pressed.
    pub page: u32,
    pub disabled: bool,
}

/// Previous/next buttons and the position label.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PaginationControls {
    pub label: String,
    pub previous: PageButton,
    pub next: PageButton,
}

impl From<&PaginationInfo> for PaginationControls {
    fn from(info: &PaginationInfo) -> Self {
        Self {
            label: info.label(),
            previous: PageButton {
                page: info.previous_target(),
                disabled: !info.has_previous(),
            },
            next: PageButton {
                page: info.next_target(),
                disabled: !info.has_next(),
            },
        }
    }
}
