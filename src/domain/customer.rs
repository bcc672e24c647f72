use serde::{Deserialize, Serialize};

use crate::domain::pagination::PaginationInfo;

/// One directory entry as returned by the customers API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl Customer {
    /// Full name, or the first name alone when no last name was supplied.
    pub fn display_name(&self) -> String {
        match self
            .last_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            Some(last_name) => format!("{} {}", self.first_name, last_name),
            None => self.first_name.clone(),
        }
    }

    /// Website host, if one was supplied. The API sends bare host names and
    /// pages link them over `https://`.
    pub fn website(&self) -> Option<&str> {
        self.website
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Response body of `GET /api/v1/customers`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerPage {
    pub customers: Vec<Customer>,
    pub pagination: PaginationInfo,
}
