//! Development server with live reload support

use std::{
    convert::Infallible,
    path::{Component, Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use axum::{
    Router,
    extract::{Request, State},
    response::{
        Html, IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
    routing::get,
};
use percent_encoding::percent_decode_str;
use tokio::sync::broadcast;
use tokio_stream::{Stream, StreamExt, wrappers::BroadcastStream};
use tower::ServiceExt;
use tower_http::services::ServeDir;

/// Path of the live reload event stream.
pub const LIVERELOAD_PATH: &str = "/__livereload";

/// Server state: site root and the reload broadcaster.
#[derive(Clone)]
pub struct ServerState {
    pub root: PathBuf,
    pub reload_tx: broadcast::Sender<()>,
}

impl ServerState {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let (reload_tx, _) = broadcast::channel(16);
        Self {
            root: root.into(),
            reload_tx,
        }
    }

    /// Tell every connected page to reload.
    pub fn notify_reload(&self) {
        let _ = self.reload_tx.send(());
    }
}

/// Create the development server router.
pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route(LIVERELOAD_PATH, get(livereload_handler))
        .fallback(serve_site)
        .with_state(state)
}

/// Server-Sent Events handler for live reload.
async fn livereload_handler(
    State(state): State<Arc<ServerState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.reload_tx.subscribe();
    // Lagged receivers skip missed messages.
    let stream =
        BroadcastStream::new(rx).filter_map(|msg| msg.ok().map(|_| Ok(Event::default().data("reload"))));

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(30))
            .text("ping"),
    )
}

/// Serve HTML pages with the reload script injected, everything else as is.
async fn serve_site(State(state): State<Arc<ServerState>>, request: Request) -> Response {
    if let Some(file) = html_file(&state.root, request.uri().path()) {
        match tokio::fs::read_to_string(&file).await {
            Ok(content) => return Html(inject_livereload(&content)).into_response(),
            Err(e) => tracing::debug!(path = %file.display(), error = %e, "Falling back to static file"),
        }
    }

    match ServeDir::new(&state.root).oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

/// The HTML file a request path maps to under `root`.
///
/// Directory paths resolve to their `index.html`. Paths escaping `root` and
/// non-HTML paths yield `None`.
pub fn html_file(root: &Path, request_path: &str) -> Option<PathBuf> {
    let decoded = percent_decode_str(request_path).decode_utf8().ok()?;
    let mut relative = PathBuf::new();
    for part in Path::new(decoded.trim_start_matches('/')).components() {
        match part {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }

    if decoded.is_empty() || decoded.ends_with('/') {
        relative.push("index.html");
    }
    if relative.extension().is_none_or(|ext| ext != "html") {
        return None;
    }

    let file = root.join(relative);
    file.is_file().then_some(file)
}

/// Insert the reload script before the last `</body>`.
///
/// Fragments without a body and pages that already carry the script are
/// returned unchanged.
pub fn inject_livereload(html: &str) -> String {
    if html.contains(LIVERELOAD_PATH) {
        return html.to_string();
    }
    match html.rfind("</body>") {
        Some(at) => {
            let mut out = String::with_capacity(html.len() + LIVERELOAD_SCRIPT.len());
            out.push_str(&html[..at]);
            out.push_str(LIVERELOAD_SCRIPT);
            out.push_str(&html[at..]);
            out
        }
        None => html.to_string(),
    }
}

/// JavaScript snippet to inject for live reload.
pub const LIVERELOAD_SCRIPT: &str = r#"
<script>
(function() {
    const source = new EventSource('/__livereload');
    source.onmessage = function(event) {
        if (event.data === 'reload') {
            window.location.reload();
        }
    };
    source.onerror = function() {
        console.log('[livereload] Connection lost, retrying...');
    };
})();
</script>
"#;

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn site() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.html"), "<html><body></body></html>").unwrap();
        fs::write(dir.path().join("pricing.html"), "<html><body></body></html>").unwrap();
        fs::write(dir.path().join("app.js"), "console.log(1)").unwrap();
        fs::create_dir(dir.path().join("stocks")).unwrap();
        fs::write(dir.path().join("stocks/index.html"), "<body></body>").unwrap();
        dir
    }

    #[test]
    fn test_html_file_resolves_pages() {
        let dir = site();
        let root = dir.path();

        assert_eq!(html_file(root, "/"), Some(root.join("index.html")));
        assert_eq!(html_file(root, "/pricing.html"), Some(root.join("pricing.html")));
        assert_eq!(html_file(root, "/stocks/"), Some(root.join("stocks/index.html")));
    }

    #[test]
    fn test_html_file_skips_other_files() {
        let dir = site();
        assert_eq!(html_file(dir.path(), "/app.js"), None);
        assert_eq!(html_file(dir.path(), "/missing.html"), None);
    }

    #[test]
    fn test_html_file_rejects_traversal() {
        let dir = site();
        let inner = dir.path().join("stocks");

        assert_eq!(html_file(&inner, "/../index.html"), None);
        assert_eq!(html_file(&inner, "/%2e%2e/index.html"), None);
    }

    #[test]
    fn test_inject_before_body_close() {
        let html = inject_livereload("<html><body><p>hi</p></body></html>");
        assert!(html.contains("new EventSource('/__livereload')"));
        assert!(html.ends_with("</script>\n</body></html>"));
    }

    #[test]
    fn test_inject_leaves_fragments_untouched() {
        let fragment = "<header class=\"header\"></header>";
        assert_eq!(inject_livereload(fragment), fragment);
    }

    #[test]
    fn test_inject_is_idempotent() {
        let once = inject_livereload("<body></body>");
        assert_eq!(inject_livereload(&once), once);
    }

    #[test]
    fn test_notify_reload_reaches_subscribers() {
        let state = ServerState::new(".");
        let mut rx = state.reload_tx.subscribe();
        state.notify_reload();
        assert!(rx.try_recv().is_ok());
    }
}
