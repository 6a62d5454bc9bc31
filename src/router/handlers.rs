use anyhow::Context;
use axum::http::StatusCode;
use serde::Deserialize;
use std::sync::Arc;

use super::render;
use super::table::{AppContext, HandlerFuture, PageRequest, PageResponse};
use crate::recommend::engine::recommend;
use crate::recommend::types::Recommendation;
use crate::search::engine::{extract_title, search};
use crate::session::manager::{resolve_session, session_cookie};
use crate::store::client::book_key;

#[derive(Debug, Default, Deserialize)]
struct SearchParams {
    q: Option<String>,
}

/// `GET /books/{id}`: the stored record (or its placeholder), the
/// session stamp and the "up next" recommendation, with the session
/// cookie refreshed on the way out.
pub fn book_detail(ctx: Arc<AppContext>, request: PageRequest) -> HandlerFuture {
    Box::pin(async move {
        // The id stays the captured digit string throughout: ids beyond
        // the catalog (or beyond u32) just miss the store and take the
        // placeholder path below.
        let book_id = request
            .params
            .get("book_id")
            .context("route pattern did not capture book_id")?;

        let session_id = resolve_session(request.cookie_header.as_deref());
        let recommendation = recommend(ctx.store.as_ref(), &session_id, book_id).await?;

        // A missing record keeps the success status; only the body
        // changes. Inherited behavior, see DESIGN.md.
        let record = ctx
            .store
            .get(&book_key(book_id))
            .await?
            .unwrap_or_else(render::missing_record_body);

        let up_next = match recommendation {
            Recommendation::Next(next_id) => {
                let title = match ctx.store.get(&book_key(next_id)).await? {
                    Some(next_record) => extract_title(&next_record),
                    None => None,
                };
                render::recommendation_item(next_id, title.as_deref())
            }
            Recommendation::AllVisited => render::catalog_complete_item(),
        };

        let body = render::book_detail_page(&record, &session_id, &up_next);
        Ok(PageResponse::html(StatusCode::OK, body).with_cookie(session_cookie(&session_id)))
    })
}

/// `GET /`: the static index page, read from disk on every request so
/// it can be edited without restarting the server.
pub fn index_page(ctx: Arc<AppContext>, _request: PageRequest) -> HandlerFuture {
    Box::pin(async move {
        let page = tokio::fs::read_to_string(&ctx.config.index_page)
            .await
            .with_context(|| {
                format!(
                    "Failed to read index page {}",
                    ctx.config.index_page.display()
                )
            })?;

        Ok(PageResponse::html(StatusCode::OK, page))
    })
}

/// `GET /search?q=term`: exact-term lookup. Matches render as a linked
/// list; no matches render as a 404 that echoes the term.
pub fn search_books(ctx: Arc<AppContext>, request: PageRequest) -> HandlerFuture {
    Box::pin(async move {
        let params: SearchParams =
            serde_urlencoded::from_str(&request.query).unwrap_or_default();
        let term = params.q.unwrap_or_default();

        let matches = search(ctx.store.as_ref(), &term).await?;
        if matches.is_empty() {
            return Ok(PageResponse::html(
                StatusCode::NOT_FOUND,
                render::no_matches_page(&term),
            ));
        }

        Ok(PageResponse::html(
            StatusCode::OK,
            render::search_results_page(&matches),
        ))
    })
}
