use actix_web::{Responder, get, web};
use tera::Tera;

use crate::dto::customers::IndexQuery;
use crate::models::config::ServerConfig;
use crate::repository::ApiCustomerReader;
use crate::routes::html_response;
use crate::services::customer_list::CustomerList;
use crate::services::customers::{load_customer_list, render_customer_list};

#[get("/")]
pub async fn show_index(
    params: web::Query<Vec<(String, String)>>,
    reader: web::Data<ApiCustomerReader>,
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let query = IndexQuery::from_pairs(&params);
    let list = load_customer_list(reader.get_ref(), &query, server_config.per_page).await;
    html_response(render_customer_list(&tera, &list))
}

/// The page as it looks before its first fetch resolves.
#[get("/loading")]
pub async fn show_loading(tera: web::Data<Tera>) -> impl Responder {
    html_response(render_customer_list(&tera, &CustomerList::new()))
}
