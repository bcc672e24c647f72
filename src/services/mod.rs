use thiserror::Error;

pub mod customer_list;
pub mod customers;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
