use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use super::handlers;
use super::render;
use crate::config::ServerConfig;
use crate::store::client::KeyValueStore;

/// Everything a handler needs: the injected store client and the server
/// configuration. Shared immutably across requests.
pub struct AppContext {
    pub store: Arc<dyn KeyValueStore>,
    pub config: ServerConfig,
}

/// A request as the dispatcher sees it: path, raw query string, the
/// `Cookie` header if any, and the named captures of the matched
/// pattern (filled in by `dispatch`).
pub struct PageRequest {
    pub path: String,
    pub query: String,
    pub cookie_header: Option<String>,
    pub params: HashMap<String, String>,
}

/// Request builders for driving `dispatch` directly; production code
/// builds the struct from the incoming HTTP request instead.
#[cfg(test)]
impl PageRequest {
    pub fn get(path: &str) -> Self {
        Self {
            path: path.to_string(),
            query: String::new(),
            cookie_header: None,
            params: HashMap::new(),
        }
    }

    pub fn with_query(mut self, query: &str) -> Self {
        self.query = query.to_string();
        self
    }

    pub fn with_cookies(mut self, cookie_header: &str) -> Self {
        self.cookie_header = Some(cookie_header.to_string());
        self
    }
}

/// A rendered page: status, HTML body, and optionally a `Set-Cookie`
/// value. All handled routes produce `text/html`.
#[derive(Debug)]
pub struct PageResponse {
    pub status: StatusCode,
    pub body: String,
    pub set_cookie: Option<String>,
}

impl PageResponse {
    pub fn html(status: StatusCode, body: String) -> Self {
        Self {
            status,
            body,
            set_cookie: None,
        }
    }

    pub fn with_cookie(mut self, cookie: String) -> Self {
        self.set_cookie = Some(cookie);
        self
    }
}

impl IntoResponse for PageResponse {
    fn into_response(self) -> Response {
        let mut response = (
            self.status,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            self.body,
        )
            .into_response();

        if let Some(cookie) = self.set_cookie {
            match HeaderValue::from_str(&cookie) {
                Ok(value) => {
                    response.headers_mut().insert(header::SET_COOKIE, value);
                }
                Err(e) => {
                    tracing::error!("Dropping malformed session cookie: {}", e);
                }
            }
        }

        response
    }
}

pub type HandlerFuture = Pin<Box<dyn Future<Output = anyhow::Result<PageResponse>> + Send>>;

/// A page handler. Plain function pointers keep the table a simple
/// sequence that can be scanned in order.
pub type Handler = fn(Arc<AppContext>, PageRequest) -> HandlerFuture;

struct Route {
    pattern: Regex,
    handler: Handler,
}

impl Route {
    fn new(pattern: &str, handler: Handler) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            handler,
        }
    }
}

/// Ordered list of `(pattern, handler)` pairs. First match wins; there
/// is no other disambiguation rule.
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// The catalog's route order. Invariant: the anchored book-detail
    /// pattern comes first, the root page second, and the unanchored
    /// `/search` prefix last so it cannot shadow either.
    pub fn catalog_routes() -> Self {
        Self {
            routes: vec![
                Route::new(r"^/books/(?P<book_id>\d+)$", handlers::book_detail),
                Route::new(r"^/$", handlers::index_page),
                Route::new(r"^/search", handlers::search_books),
            ],
        }
    }

    /// Match `request.path` against the table in order and run the first
    /// matching handler. Handler failures become the 503 page; no match
    /// becomes the 404 page.
    pub async fn dispatch(&self, ctx: Arc<AppContext>, mut request: PageRequest) -> PageResponse {
        for route in &self.routes {
            if let Some(caps) = route.pattern.captures(&request.path) {
                request.params = named_params(&route.pattern, &caps);

                return match (route.handler)(ctx, request).await {
                    Ok(response) => response,
                    Err(e) => {
                        tracing::error!("Handler failed: {:#}", e);
                        PageResponse::html(
                            StatusCode::SERVICE_UNAVAILABLE,
                            render::unavailable_page(),
                        )
                    }
                };
            }
        }

        PageResponse::html(StatusCode::NOT_FOUND, render::not_found_page())
    }
}

fn named_params(pattern: &Regex, caps: &Captures<'_>) -> HashMap<String, String> {
    pattern
        .capture_names()
        .flatten()
        .filter_map(|name| {
            caps.name(name)
                .map(|m| (name.to_string(), m.as_str().to_string()))
        })
        .collect()
}
