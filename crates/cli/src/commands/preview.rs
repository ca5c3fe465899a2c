use anyhow::{Context, Result};
use axum::{
    Router,
    extract::{Path as UrlPath, State},
    http::{StatusCode, header},
    response::{
        Html, IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
    routing::{get, post},
};
use foundlio_content::{PreviewStore, Vertical, VerticalResolver};
use foundlio_generator::{GeneratedSite, generate_site, pages::STYLESHEET};
use notify::{Event as NotifyEvent, EventKind, RecursiveMode, Watcher};
use std::{net::SocketAddr, path::PathBuf};
use tokio::sync::broadcast;
use tower_http::services::ServeDir;

#[derive(Clone)]
struct AppState {
    site_path: PathBuf,
    store: PreviewStore,
    reload_tx: broadcast::Sender<()>,
}

/// Start the preview server with hot reload and the design panel.
///
/// This command:
/// - Validates and loads business.json
/// - Renders the site in preview mode on every request
/// - Watches for file changes and triggers hot reload
/// - Exposes `/design/vertical/{slug}` so the in-page panel can switch
///   the preview vertical; the store change broadcasts a reload and
///   every section re-resolves at once
///
/// # Arguments
///
/// * `path` - Path to site directory containing business.json
/// * `port` - Port to serve on (default: 8080)
pub async fn run(path: PathBuf, port: u16) -> Result<()> {
    println!("🏠 Starting preview server...");
    println!("   Site: {}", path.display());

    if !path.exists() {
        anyhow::bail!(
            "Site directory does not exist: {}\nRun 'foundlio init {}' first",
            path.display(),
            path.display()
        );
    }

    let business_path = path.join("business.json");
    if !business_path.exists() {
        anyhow::bail!(
            "business.json not found in {}\nRun 'foundlio init {}' first",
            path.display(),
            path.display()
        );
    }

    let business =
        foundlio_core::load_business(&business_path).context("Failed to load business.json")?;

    println!("   ✓ Loaded: {}", business.name);
    println!("   ✓ Location: {}", business.location_label());
    println!("   ✓ Vertical: {}", business.vertical);

    let deployed = Vertical::from_slug_or_default(&business.vertical);
    let store = PreviewStore::new(deployed);

    // Create broadcast channel for reload events
    let (reload_tx, _) = broadcast::channel::<()>(100);

    // A vertical change is a reload trigger like any file edit; the
    // subscription must outlive the server
    let _design_subscription = store.subscribe({
        let tx = reload_tx.clone();
        move |vertical| {
            println!("   🎨 Preview vertical → {}", vertical);
            let _ = tx.send(());
        }
    });

    let state = AppState {
        site_path: path.clone(),
        store,
        reload_tx: reload_tx.clone(),
    };

    // Build router
    let app = Router::new()
        .route("/", get(index_handler))
        .route("/posts/{file}", get(post_handler))
        .route("/styles.css", get(stylesheet_handler))
        .route("/_reload", get(sse_handler))
        .route("/design/vertical/{slug}", post(select_vertical_handler))
        .route("/design/reset", post(reset_vertical_handler))
        .nest_service("/assets", ServeDir::new(path.join("assets")))
        .with_state(state);

    // Start file watcher
    let watcher_path = path.clone();
    let watcher_tx = reload_tx.clone();
    tokio::spawn(async move {
        if let Err(e) = watch_files(watcher_path, watcher_tx).await {
            eprintln!("File watcher error: {}", e);
        }
    });

    // Start server
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("\n🚀 Preview ready at: http://localhost:{}", port);
    println!("   Use the panel in the bottom-right to preview other verticals");
    println!("   Press Ctrl+C to stop\n");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to port")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Watch for file changes and trigger reload
async fn watch_files(path: PathBuf, reload_tx: broadcast::Sender<()>) -> Result<()> {
    let (tx, mut rx) = tokio::sync::mpsc::channel(100);

    let mut watcher =
        notify::recommended_watcher(move |res: Result<NotifyEvent, notify::Error>| {
            if let Ok(event) = res {
                let _ = tx.blocking_send(event);
            }
        })?;

    // Watch site directory recursively
    watcher.watch(&path, RecursiveMode::Recursive)?;

    while let Some(event) = rx.recv().await {
        match event.kind {
            EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_) => {
                // Filter out temporary files and hidden files
                if event.paths.iter().any(|p| {
                    let filename = p.file_name().unwrap_or_default().to_string_lossy();
                    !filename.starts_with('.') && !filename.ends_with('~')
                }) {
                    println!("   📝 File changed, reloading...");
                    let _ = reload_tx.send(());
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// SSE endpoint for hot reload
async fn sse_handler(
    State(state): State<AppState>,
) -> Sse<impl futures::Stream<Item = Result<Event, std::convert::Infallible>>> {
    let mut rx = state.reload_tx.subscribe();

    let stream = async_stream::stream! {
        loop {
            if rx.recv().await.is_ok() {
                yield Ok(Event::default().data("reload"));
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Design panel: switch the preview vertical
async fn select_vertical_handler(
    State(state): State<AppState>,
    UrlPath(slug): UrlPath<String>,
) -> StatusCode {
    let vertical = Vertical::from_slug_or_default(&slug);
    state.store.select(vertical);
    StatusCode::NO_CONTENT
}

/// Design panel: back to the deployed vertical
async fn reset_vertical_handler(State(state): State<AppState>) -> StatusCode {
    state.store.reset();
    StatusCode::NO_CONTENT
}

async fn stylesheet_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], STYLESHEET)
}

/// Main index page handler
async fn index_handler(State(state): State<AppState>) -> Response {
    match render_site(&state) {
        Ok(site) => match site.pages.iter().find(|(p, _)| p == "index.html") {
            Some((_, html)) => Html(html.clone()).into_response(),
            None => error_page("Generator produced no index page"),
        },
        Err(e) => error_page(&format!("{:#}", e)),
    }
}

/// Blog post pages
async fn post_handler(State(state): State<AppState>, UrlPath(file): UrlPath<String>) -> Response {
    let wanted = format!("posts/{}", file);
    match render_site(&state) {
        Ok(site) => match site.pages.iter().find(|(p, _)| *p == wanted) {
            Some((_, html)) => Html(html.clone()).into_response(),
            None => (StatusCode::NOT_FOUND, "post not found").into_response(),
        },
        Err(e) => error_page(&format!("{:#}", e)),
    }
}

/// Regenerate the whole site from disk so edits to business.json and
/// data/ show up on the next reload
fn render_site(state: &AppState) -> Result<GeneratedSite> {
    let business = foundlio_core::load_business(state.site_path.join("business.json"))
        .context("Failed to load business.json")?;
    let resolver = VerticalResolver::new(&business, state.store.clone());
    generate_site(&state.site_path, &business, &resolver, true)
}

fn error_page(message: &str) -> Response {
    Html(format!(
        r#"<!DOCTYPE html>
<html><head><title>Error</title></head><body>
<h1>Site Error</h1>
<pre>{}</pre>
</body></html>"#,
        message
    ))
    .into_response()
}
