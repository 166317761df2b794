//! HTTP response handlers.

use crate::feed::{FeedDocument, FeedError};
use anyhow::Result;
use tiny_http::{Header, Method, Request, Response, StatusCode};

const PLAIN: &str = "text/plain; charset=utf-8";

/// Respond with the generated feed.
pub fn respond_feed(request: Request, document: FeedDocument) -> Result<()> {
    if is_head_request(&request) {
        return send_head(request, 200, document.content_type);
    }
    send_body(request, 200, document.content_type, document.body)
}

/// Respond with 500 and a plain-text description of the failure.
pub fn respond_feed_error(request: Request, error: &FeedError) -> Result<()> {
    if is_head_request(&request) {
        return send_head(request, 500, PLAIN);
    }
    let body = format!("500 Internal Server Error\n\n{error}\n");
    send_body(request, 500, PLAIN, body.into_bytes())
}

pub fn respond_not_found(request: Request) -> Result<()> {
    send_body(request, 404, PLAIN, b"404 Not Found".to_vec())
}

/// Respond with 405 for non-GET/HEAD requests on the feed route.
pub fn respond_method_not_allowed(request: Request) -> Result<()> {
    let response = Response::from_data(b"405 Method Not Allowed".to_vec())
        .with_status_code(StatusCode(405))
        .with_header(make_header("Content-Type", PLAIN))
        .with_header(make_header("Allow", "GET, HEAD"));
    request.respond(response)?;
    Ok(())
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    send_body(request, 503, PLAIN, b"503 Service Unavailable".to_vec())
}

pub fn is_head_request(request: &Request) -> bool {
    request.method() == &Method::Head
}

/// Whether the request may read the feed.
pub fn is_read_method(method: &Method) -> bool {
    matches!(method, Method::Get | Method::Head)
}

fn send_head(request: Request, status: u16, content_type: &'static str) -> Result<()> {
    let response =
        Response::empty(StatusCode(status)).with_header(make_header("Content-Type", content_type));
    request.respond(response)?;
    Ok(())
}

fn send_body(
    request: Request,
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
) -> Result<()> {
    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", content_type))
        .with_header(make_header("Cache-Control", "no-cache"));
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &'static str, value: &'static str) -> Header {
    // Static ASCII names and values always form a valid header
    Header::from_bytes(key, value).unwrap_or_else(|()| unreachable!("invalid header {key}"))
}
