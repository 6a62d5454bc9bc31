use axum::extract::Request;
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Router};
use std::collections::HashMap;
use std::sync::Arc;

use book_catalog::config::{ServerConfig, StoreBackend};
use book_catalog::router::render;
use book_catalog::router::table::{AppContext, PageRequest, PageResponse, RouteTable};
use book_catalog::store::client::KeyValueStore;
use book_catalog::store::memory::MemoryStore;
use book_catalog::store::redis::RedisStore;

// Requests are handled one at a time: a current-thread runtime plus
// handlers that await their store calls inline.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = match ServerConfig::from_args(&args[1..]) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!(
                "Usage: {} [--bind <addr:port>] [--redis <url> | --memory] [--index-page <path>]",
                args[0]
            );
            eprintln!("Example: {} --bind 0.0.0.0:8000 --redis redis://127.0.0.1:6379", args[0]);
            eprintln!("Example: {} --memory", args[0]);
            std::process::exit(1);
        }
    };

    // 1. Store backend:
    let store: Arc<dyn KeyValueStore> = match &config.backend {
        StoreBackend::Redis(url) => {
            tracing::info!("Connecting to redis at {}", url);
            Arc::new(RedisStore::connect(url).await?)
        }
        StoreBackend::Memory => {
            tracing::info!("Using in-memory store seeded with the demo catalog");
            let store = MemoryStore::new();
            store.seed_demo_catalog();
            Arc::new(store)
        }
    };

    // 2. Route table and shared context:
    let bind_addr = config.bind_addr;
    let ctx = Arc::new(AppContext { store, config });
    let table = Arc::new(RouteTable::catalog_routes());

    let app = Router::new()
        .fallback(dispatch_request)
        .layer(Extension(ctx))
        .layer(Extension(table));

    // 3. Start HTTP server:
    tracing::info!("Catalog server listening on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Every path flows through here and into the ordered route table; axum
/// itself does no path matching.
async fn dispatch_request(
    Extension(ctx): Extension<Arc<AppContext>>,
    Extension(table): Extension<Arc<RouteTable>>,
    request: Request,
) -> Response {
    // The catalog surface is GET-only.
    if request.method() != Method::GET {
        return PageResponse::html(StatusCode::NOT_FOUND, render::not_found_page())
            .into_response();
    }

    let page_request = PageRequest {
        path: request.uri().path().to_string(),
        query: request.uri().query().unwrap_or_default().to_string(),
        cookie_header: request
            .headers()
            .get(header::COOKIE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string()),
        params: HashMap::new(),
    };

    table.dispatch(ctx, page_request).await.into_response()
}
