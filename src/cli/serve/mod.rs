//! Feed server.
//!
//! Every `GET`/`HEAD` on the feed route regenerates the feed from the
//! content directory, so edits show up on the next request.

mod lifecycle;
mod response;

use super::common::{SiteFeedHandler, create_handler};
use crate::{config::SiteConfig, feed::RequestContext, log};
use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tiny_http::{Request, Server};

/// Number of threads answering requests.
const REQUEST_THREADS: usize = 4;

/// Everything a request needs, shared across the pool.
struct FeedRoute {
    route: String,
    handler: SiteFeedHandler,
    context: RequestContext,
}

/// Bound server ready to accept requests
pub struct BoundServer {
    server: Arc<Server>,
    addr: SocketAddr,
}

/// Bind the HTTP server without starting the request loop
pub fn bind_server(config: &SiteConfig) -> Result<BoundServer> {
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    lifecycle::register_server_for_shutdown(Arc::clone(&server));

    log!("serve"; "http://{}{}", addr, config.feed.route);
    Ok(BoundServer { server, addr })
}

impl BoundServer {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Start the request loop (blocking until the server is unblocked).
    pub fn run(self, config: &SiteConfig) -> Result<()> {
        let app = Arc::new(FeedRoute {
            route: config.feed.route.clone(),
            handler: create_handler(config)?,
            context: config.request_context(),
        });
        run_request_loop(&self.server, &app)
    }
}

/// Bind and serve until Ctrl+C.
pub fn serve_feed(config: &SiteConfig) -> Result<()> {
    bind_server(config)?.run(config)
}

fn run_request_loop(server: &Server, app: &Arc<FeedRoute>) -> Result<()> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(REQUEST_THREADS)
        .build()?;

    for request in server.incoming_requests() {
        let app = Arc::clone(app);
        pool.spawn(move || {
            if let Err(e) = handle_request(request, &app) {
                log!("serve"; "request error: {e}");
            }
        });
    }
    Ok(())
}

/// Handle a single HTTP request
fn handle_request(request: Request, app: &FeedRoute) -> Result<()> {
    if crate::core::is_shutdown() {
        return response::respond_unavailable(request);
    }

    if request_path(request.url()) != app.route {
        return response::respond_not_found(request);
    }
    if !response::is_read_method(request.method()) {
        return response::respond_method_not_allowed(request);
    }

    match app.handler.handle(&app.context) {
        Ok(document) => response::respond_feed(request, document),
        Err(e) => {
            log!("error"; "feed generation failed: {e}");
            response::respond_feed_error(request, &e)
        }
    }
}

/// Strip query string and fragment from a request target.
fn request_path(url: &str) -> &str {
    url.split(['?', '#']).next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::io::{Read, Write};
    use std::net::TcpStream;
    use std::thread;
    use tempfile::TempDir;

    fn feed_route(dir: &TempDir) -> FeedRoute {
        let mut config = test_parse_config("url = \"https://example.com\"");
        config.build.content = dir.path().join("content");
        FeedRoute {
            route: config.feed.route.clone(),
            handler: create_handler(&config).unwrap(),
            context: config.request_context(),
        }
    }

    /// Send one raw request through `handle_request` and return the raw response.
    fn exchange(app: &FeedRoute, raw: &str) -> String {
        let server = Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();

        let raw = raw.to_string();
        let client = thread::spawn(move || {
            let mut stream = TcpStream::connect(addr).unwrap();
            stream.write_all(raw.as_bytes()).unwrap();
            let mut response = String::new();
            stream.read_to_string(&mut response).unwrap();
            response
        });

        let request = server.recv().unwrap();
        handle_request(request, app).unwrap();
        client.join().unwrap()
    }

    fn write_post(dir: &TempDir) {
        let blog = dir.path().join("content/blog");
        std::fs::create_dir_all(&blog).unwrap();
        std::fs::write(
            blog.join("hello.md"),
            "---\ntitle: Hello\ndescription: World\ndate: 2024-03-01\n---\n",
        )
        .unwrap();
    }

    #[test]
    fn test_request_path() {
        assert_eq!(request_path("/rss.xml"), "/rss.xml");
        assert_eq!(request_path("/rss.xml?utm=1"), "/rss.xml");
        assert_eq!(request_path("/rss.xml#top"), "/rss.xml");
        assert_eq!(request_path(""), "");
    }

    #[test]
    fn test_serves_feed() {
        let dir = TempDir::new().unwrap();
        write_post(&dir);
        let app = feed_route(&dir);

        let response = exchange(
            &app,
            "GET /rss.xml?ref=x HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        );
        assert!(response.starts_with("HTTP/1.1 200"), "{response}");
        assert!(response.contains("application/rss+xml"));
        assert!(response.contains("https://example.com/blog/hello/"));
    }

    #[test]
    fn test_unknown_path_and_method() {
        let dir = TempDir::new().unwrap();
        write_post(&dir);
        let app = feed_route(&dir);

        let response = exchange(
            &app,
            "GET /atom.xml HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        );
        assert!(response.starts_with("HTTP/1.1 404"), "{response}");

        let response = exchange(
            &app,
            "POST /rss.xml HTTP/1.1\r\nHost: localhost\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        assert!(response.starts_with("HTTP/1.1 405"), "{response}");
        assert!(response.contains("GET, HEAD"));
    }

    #[test]
    fn test_generation_failure_is_500() {
        // No content directory: the collection is missing
        let dir = TempDir::new().unwrap();
        let app = feed_route(&dir);

        let response = exchange(
            &app,
            "GET /rss.xml HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        );
        assert!(response.starts_with("HTTP/1.1 500"), "{response}");
        assert!(response.contains("content collection `blog` not found"));
    }
}
