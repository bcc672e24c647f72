//! Fake customers API served from an ephemeral local port.

#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use actix_web::{App, HttpResponse, HttpServer, web};
use serde::Deserialize;
use serde_json::json;
use tera::Tera;

use customer_directory::models::config::ServerConfig;

/// How the fake API answers `GET /api/v1/customers`.
#[derive(Clone, Copy, Debug)]
pub enum Behavior {
    /// Two customers per page out of `total_pages`.
    Pages { total_pages: u32 },
    /// An empty customers array.
    Empty,
    /// A body that is not JSON.
    NotJson,
    /// A bare status code.
    Status(u16),
}

#[derive(Deserialize)]
struct PageParams {
    page: u32,
    per_page: u32,
}

struct UpstreamState {
    behavior: Behavior,
    requests: Mutex<Vec<String>>,
}

pub struct Upstream {
    pub base_url: String,
    state: Arc<UpstreamState>,
}

impl Upstream {
    /// Starts the fake API on the current actix runtime.
    pub fn start(behavior: Behavior) -> Self {
        let state = Arc::new(UpstreamState {
            behavior,
            requests: Mutex::new(Vec::new()),
        });
        let data = web::Data::from(state.clone());

        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .route("/api/v1/customers", web::get().to(list_customers))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("fake API binds");

        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    /// Query strings received so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().expect("requests lock").clone()
    }
}

async fn list_customers(
    req: actix_web::HttpRequest,
    params: web::Query<PageParams>,
    state: web::Data<UpstreamState>,
) -> HttpResponse {
    state
        .requests
        .lock()
        .expect("requests lock")
        .push(req.query_string().to_string());

    match state.behavior {
        Behavior::Pages { total_pages } => {
            let page = params.page.clamp(1, total_pages);
            let next_page = (page < total_pages).then_some(page + 1);
            let prev_page = (page > 1).then_some(page - 1);
            let total_count = u64::from(total_pages) * u64::from(params.per_page);
            HttpResponse::Ok().json(json!({
                "customers": [
                    {
                        "id": page * 100 + 1,
                        "first_name": "John",
                        "last_name": "Doe",
                        "email": "john@example.com",
                        "city": "New York",
                        "website": "johndoe.dev"
                    },
                    {
                        "id": page * 100 + 2,
                        "first_name": "Jane",
                        "email": "jane@example.com",
                        "company": "Acme"
                    }
                ],
                "pagination": {
                    "current_page": page,
                    "next_page": next_page,
                    "prev_page": prev_page,
                    "total_pages": total_pages,
                    "total_count": total_count
                }
            }))
        }
        Behavior::Empty => HttpResponse::Ok().json(json!({
            "customers": [],
            "pagination": {
                "current_page": 1,
                "next_page": null,
                "prev_page": null,
                "total_pages": 1,
                "total_count": 0
            }
        })),
        Behavior::NotJson => HttpResponse::Ok()
            .content_type("text/html")
            .body("<html>maintenance</html>"),
        Behavior::Status(code) => HttpResponse::build(
            actix_web::http::StatusCode::from_u16(code).expect("valid status"),
        )
        .finish(),
    }
}

/// Base URL of a local port nothing listens on.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("probe binds");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}")
}

pub fn templates() -> Tera {
    Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*.html"))
        .expect("templates parse")
}

pub fn server_config(api_base_url: &str) -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        templates_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*.html").to_string(),
        api_base_url: api_base_url.to_string(),
        per_page: 20,
    }
}
