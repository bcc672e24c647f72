use actix_web::HttpResponse;
use actix_web::http::header::ContentType;

use crate::services::ServiceResult;

pub mod customers;

/// Turns a rendered page into a response, logging render failures as 500s.
pub fn html_response(rendered: ServiceResult<String>) -> HttpResponse {
    match rendered {
        Ok(body) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(body),
        Err(err) => {
            log::error!("Failed to render page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
