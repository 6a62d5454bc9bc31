//! HTML fragment construction.
//!
//! All user-visible output is assembled here, and every user-supplied
//! value (search terms, cookie-borne session ids) passes through
//! `escape_html` before interpolation. Stored book records and the
//! titles extracted from them are trusted store content and are
//! rendered as-is.

use crate::search::types::SearchMatch;

/// Minimal HTML escaping for interpolated values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn not_found_page() -> String {
    "<h1>Not found</h1>".to_string()
}

pub fn unavailable_page() -> String {
    "<h1>The catalog is temporarily unavailable, please try again</h1>".to_string()
}

/// Body substituted when a book id has no stored record. The response
/// status stays 200; only the body signals the miss.
pub fn missing_record_body() -> String {
    "<h1>The book you are trying to look up is not registered on this site</h1>".to_string()
}

/// The search form, pre-filled with the previously searched term.
pub fn search_form(term: &str) -> String {
    format!(
        concat!(
            "<form action=\"/search\" method=\"GET\">",
            "<label for=\"q\">Book to look up: </label>",
            "<input type=\"text\" name=\"q\" value=\"{}\"/>",
            "<input type=\"submit\" value=\"Search\"/>",
            "</form>"
        ),
        escape_html(term)
    )
}

pub fn search_results_page(matches: &[SearchMatch]) -> String {
    let mut page = search_form("");
    page.push_str("<h1>Search results:</h1><ul>");
    for m in matches {
        page.push_str(&format!(
            "<li><a href='/books/{}'>{}</a></li>",
            m.book_id, m.title
        ));
    }
    page.push_str("</ul>");
    page
}

/// 404 body for a term with no matches: the form again, with the term
/// echoed (escaped) so the visitor sees what was searched.
pub fn no_matches_page(term: &str) -> String {
    format!(
        "{}<h1>No book named '{}' is registered on this site</h1>",
        search_form(term),
        escape_html(term)
    )
}

/// List item linking to the recommended next book.
pub fn recommendation_item(book_id: u32, title: Option<&str>) -> String {
    let label = match title {
        Some(title) => title.to_string(),
        None => format!("Book {}", book_id),
    };
    format!(
        "<li><a href='/books/{}'>You might also enjoy: {}</a></li>",
        book_id, label
    )
}

/// List item shown once the session has visited the whole catalog.
pub fn catalog_complete_item() -> String {
    "<li><a href='/'>You have visited every book on the site, back to the start</a></li>"
        .to_string()
}

/// The composed book detail page: the record body, the session stamp
/// and the single "up next" item.
pub fn book_detail_page(record: &str, session_id: &str, up_next_item: &str) -> String {
    format!(
        concat!(
            "{}",
            "<p>Session: {}</p>",
            "<p>If you liked this book, you might want to look at this one too:</p>",
            "<ul>{}</ul>"
        ),
        record,
        escape_html(session_id),
        up_next_item
    )
}
