//! Domain entities received from the customer directory API.

pub mod customer;
pub mod pagination;
