mod handlers;
pub(crate) mod pages;
mod render;
mod sitemap;
mod state;

use std::net::SocketAddr;

use anyhow::Context;
use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request, Response},
    middleware::{self, Next},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{compression::CompressionLayer, services::ServeDir};

use crate::{config::Config, content::Catalog, leads::LeadTransport, logging};

pub(crate) use handlers::client_ip;
pub use state::AppState;

const GIT_HASH: &str = env!("GIT_HASH");

pub fn router(state: AppState) -> Router {
    let cache_enabled = state.config.cache_enabled;
    let assets = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(handlers::page_handler))
        .route("/about", get(handlers::page_handler))
        .route("/services", get(handlers::page_handler))
        .route("/portfolio", get(handlers::page_handler))
        .route("/privacy-policy", get(handlers::page_handler))
        .route("/terms-conditions", get(handlers::page_handler))
        .route(
            "/refer",
            get(handlers::page_handler).post(handlers::refer_post_handler),
        )
        .route(
            "/contact",
            get(handlers::page_handler).post(handlers::contact_post_handler),
        )
        .route("/blog", get(handlers::blog_list_handler))
        .route("/blog/{slug}", get(handlers::blog_handler))
        .route("/sitemap.xml", get(handlers::sitemap_handler))
        .route("/robots.txt", get(handlers::robots_handler))
        .nest_service("/assets", assets)
        .fallback(handlers::not_found_response)
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(handlers::security_middleware))
        .layer(middleware::from_fn_with_state(
            cache_enabled,
            cache_headers_middleware,
        ))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            logging::access_log_middleware,
        ))
        .with_state(state)
}

pub async fn run(config: Config, catalog: Catalog) -> anyhow::Result<()> {
    let leads = LeadTransport::from_path(config.leads_file.clone());
    tracing::info!(transport = ?leads, "lead transport ready");

    let addr = format!("{}:{}", config.bind_address, config.port);
    let app = router(state::build_prerendered_state(config, catalog, leads));

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!("Server running on http://{addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = sigterm.recv() => {},
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "SIGTERM handler unavailable");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

const ASSET_EXTENSIONS: &[&str] = &[
    "css", "js", "png", "jpg", "jpeg", "webp", "avif", "svg", "ico", "woff", "woff2",
];

async fn cache_headers_middleware(
    State(cache_enabled): State<bool>,
    req: Request<Body>,
    next: Next,
) -> Response<Body> {
    let path = req.uri().path().to_ascii_lowercase();
    let mut res = next.run(req).await;
    if !cache_enabled {
        return res;
    }

    let ext = path.rsplit_once('.').map(|(_, ext)| ext);
    let is_asset =
        path.starts_with("/assets/") || ext.is_some_and(|e| ASSET_EXTENSIONS.contains(&e));

    if is_asset {
        // ServeDir falls back to octet-stream for unknown types
        let need_ct = res
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v == "application/octet-stream")
            .unwrap_or(true);
        if need_ct {
            if let Some(mime) = ext.and_then(guess_mime) {
                res.headers_mut()
                    .insert(header::CONTENT_TYPE, HeaderValue::from_static(mime));
            }
        }
        res.headers_mut().insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=300, stale-while-revalidate=604800"),
        );
        if let Ok(val) = HeaderValue::from_str(&format!("W/\"{GIT_HASH}\"")) {
            res.headers_mut().insert(header::ETAG, val);
        }
        res.headers_mut()
            .insert(header::VARY, HeaderValue::from_static("Accept-Encoding"));
    } else {
        res.headers_mut().insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache, must-revalidate"),
        );
    }
    res
}

fn guess_mime(ext: &str) -> Option<&'static str> {
    match ext {
        "html" | "htm" => Some("text/html; charset=utf-8"),
        "css" => Some("text/css; charset=utf-8"),
        "js" => Some("application/javascript"),
        "json" => Some("application/json"),
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "avif" => Some("image/avif"),
        "svg" => Some("image/svg+xml"),
        "ico" => Some("image/x-icon"),
        "woff" => Some("font/woff"),
        "woff2" => Some("font/woff2"),
        "txt" => Some("text/plain; charset=utf-8"),
        "xml" => Some("application/xml; charset=utf-8"),
        _ => None,
    }
}
