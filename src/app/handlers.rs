use axum::{
    body::Body,
    extract::{Extension, Form, Path, Query, State},
    http::{header, HeaderMap, HeaderValue, Request, StatusCode, Uri},
    middleware::Next,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use std::net::SocketAddr;

use super::{
    render::{inject_runtime_tokens, render_blog_list, render_contact, render_refer},
    sitemap,
    state::AppState,
};
use crate::{
    components::FormStatus,
    content::site::CONTACT_EMAIL,
    leads::{ContactForm, Lead, LeadKind, ReferralForm},
};

const CSP_PREFIX: &str = "default-src 'self'; script-src 'self' 'nonce-";
const CSP_SUFFIX: &str = "' 'strict-dynamic'; style-src 'self' 'unsafe-inline'; img-src 'self' data: https:; font-src 'self'; connect-src 'self'; object-src 'none'; frame-ancestors 'self'; base-uri 'self'; form-action 'self'";
const MAX_PATH_LEN: usize = 200;

/// Any prerendered fixed page, looked up by request path.
pub async fn page_handler(
    State(state): State<AppState>,
    Extension(nonce): Extension<String>,
    uri: Uri,
) -> Response {
    match state.pages.get(uri.path()) {
        Some(page) => Html(inject_runtime_tokens(page, &nonce)).into_response(),
        None => not_found_response().await,
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BlogQuery {
    q: String,
    category: String,
}

pub async fn blog_list_handler(
    State(state): State<AppState>,
    Extension(nonce): Extension<String>,
    Query(params): Query<BlogQuery>,
) -> Response {
    let query = params.q.trim();
    let category = Some(params.category.trim()).filter(|c| !c.is_empty());
    let html = render_blog_list(&state.config, &state.catalog, query, category, &nonce);
    Html(html).into_response()
}

pub async fn blog_handler(
    State(state): State<AppState>,
    Extension(nonce): Extension<String>,
    Path(slug): Path<String>,
) -> Response {
    if let Some(clean) = slug.strip_suffix(".html") {
        if state.catalog.find(clean).is_some() {
            return Redirect::permanent(&format!("/blog/{clean}")).into_response();
        }
    }

    match state.blog_pages.get(&slug) {
        Some(page) => Html(inject_runtime_tokens(page, &nonce)).into_response(),
        None => not_found_response().await,
    }
}

async fn deliver(state: &AppState, kind: LeadKind) -> (StatusCode, FormStatus) {
    let lead = Lead::new(kind);
    match state.leads.deliver(&lead).await {
        Ok(()) => (StatusCode::OK, FormStatus::Submitted),
        Err(err) => {
            tracing::error!(kind = lead.kind_name(), error = %err, "lead delivery failed");
            let message = format!(
                "Something went wrong while sending your details. Please try again or email us at {CONTACT_EMAIL}."
            );
            (StatusCode::BAD_GATEWAY, FormStatus::Error(message))
        }
    }
}

pub async fn refer_post_handler(
    State(state): State<AppState>,
    Extension(nonce): Extension<String>,
    Form(form): Form<ReferralForm>,
) -> Response {
    let form = form.trimmed();
    if let Err(err) = form.validate() {
        let html = render_refer(&state.config, form, FormStatus::Error(err.to_string()), &nonce);
        return (StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response();
    }

    let (status, outcome) = deliver(&state, LeadKind::Referral(form.clone())).await;
    // a delivered form starts over empty
    let form = if outcome == FormStatus::Submitted { ReferralForm::default() } else { form };
    let html = render_refer(&state.config, form, outcome, &nonce);
    (status, Html(html)).into_response()
}

pub async fn contact_post_handler(
    State(state): State<AppState>,
    Extension(nonce): Extension<String>,
    Form(form): Form<ContactForm>,
) -> Response {
    let form = form.trimmed();
    if let Err(err) = form.validate() {
        let html = render_contact(&state.config, form, FormStatus::Error(err.to_string()), &nonce);
        return (StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response();
    }

    let (status, outcome) = deliver(&state, LeadKind::Contact(form.clone())).await;
    let form = if outcome == FormStatus::Submitted { ContactForm::default() } else { form };
    let html = render_contact(&state.config, form, outcome, &nonce);
    (status, Html(html)).into_response()
}

pub async fn sitemap_handler(State(state): State<AppState>) -> Response {
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        state.sitemap.as_ref().to_string(),
    )
        .into_response()
}

pub async fn robots_handler(State(state): State<AppState>) -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        sitemap::robots(&state.config),
    )
        .into_response()
}

/// Client address for logs. Proxy headers are only honoured with `trust_proxy`.
pub(crate) fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>, trust_proxy: bool) -> String {
    if trust_proxy {
        if let Some(ip) = header_ip(headers, "CF-Connecting-IP", |s| Some(s)) {
            return ip;
        }
        if let Some(ip) = header_ip(headers, "X-Forwarded-For", |s| s.split(',').next()) {
            return ip;
        }
    }
    peer.map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn header_ip(headers: &HeaderMap, name: &str, pick: impl Fn(&str) -> Option<&str>) -> Option<String> {
    let raw = headers.get(name)?.to_str().ok()?;
    let ip = pick(raw)?.trim();
    (!ip.is_empty()).then(|| ip.to_string())
}

pub async fn not_found_response() -> Response {
    let html = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <meta name="robots" content="noindex" />
  <title>404 Not Found | Kunamix</title>
  <style>
    body{margin:0;display:flex;align-items:center;justify-content:center;height:100vh;background:#0b1220;color:#e5e7eb;font-family:system-ui,-apple-system,BlinkMacSystemFont,"Segoe UI",sans-serif;}
    .card{padding:24px 28px;border:1px solid #1e3a8a;border-radius:14px;background:#111827;box-shadow:0 12px 30px rgba(0,0,0,0.35);text-align:center;max-width:360px;}
    h1{margin:0 0 12px;font-size:20px;}
    p{margin:0 0 8px;color:#cbd5e1;font-size:14px;}
    a{color:#60a5fa;text-decoration:none;} a:hover{text-decoration:underline;}
  </style>
</head>
<body>
  <div class="card">
    <h1>404 Not Found</h1>
    <p>The page you are looking for does not exist.</p>
    <p><a href="/">Back to Home</a> · <a href="/blog">Read the Blog</a></p>
  </div>
</body>
</html>"#;
    (StatusCode::NOT_FOUND, Html(html)).into_response()
}

pub async fn security_middleware(mut req: Request<Body>, next: Next) -> Response {
    let nonce = generate_nonce();
    req.extensions_mut().insert(nonce.clone());

    if req.uri().path().len() >= MAX_PATH_LEN {
        return StatusCode::URI_TOO_LONG.into_response();
    }
    let mut res = next.run(req).await;
    let res_headers = res.headers_mut();
    res_headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    res_headers.insert(
        header::STRICT_TRANSPORT_SECURITY,
        HeaderValue::from_static("max-age=31536000; includeSubDomains; preload"),
    );
    res_headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("SAMEORIGIN"));
    res_headers.insert(header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    let mut csp = String::with_capacity(CSP_PREFIX.len() + nonce.len() + CSP_SUFFIX.len());
    csp.push_str(CSP_PREFIX);
    csp.push_str(&nonce);
    csp.push_str(CSP_SUFFIX);
    if let Ok(val) = HeaderValue::from_str(&csp) {
        res_headers.insert(header::CONTENT_SECURITY_POLICY, val);
    }
    res_headers.insert(
        "X-Permitted-Cross-Domain-Policies",
        HeaderValue::from_static("none"),
    );
    res_headers.insert(
        "Permissions-Policy",
        HeaderValue::from_static("geolocation=(), microphone=(), camera=(), browsing-topics=(), interest-cohort=(), payment=()"),
    );
    res_headers.insert(
        "Cross-Origin-Opener-Policy",
        HeaderValue::from_static("same-origin"),
    );
    res
}

#[inline]
fn generate_nonce() -> String {
    use rand::Rng;
    let charset = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::rng();
    (0..16)
        .map(|_| {
            let idx = rng.random_range(0..charset.len());
            charset[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (k, v) in pairs {
            map.insert(*k, HeaderValue::from_static(*v));
        }
        map
    }

    #[test]
    fn client_ip_ignores_proxy_headers_unless_trusted() {
        let peer: SocketAddr = "10.0.0.7:5123".parse().unwrap();
        let h = headers(&[("x-forwarded-for", "203.0.113.9, 10.0.0.1")]);
        assert_eq!(client_ip(&h, Some(peer), false), "10.0.0.7");
        assert_eq!(client_ip(&h, Some(peer), true), "203.0.113.9");
    }

    #[test]
    fn client_ip_prefers_cloudflare_header() {
        let h = headers(&[
            ("cf-connecting-ip", "198.51.100.4"),
            ("x-forwarded-for", "203.0.113.9"),
        ]);
        assert_eq!(client_ip(&h, None, true), "198.51.100.4");
        assert_eq!(client_ip(&HeaderMap::new(), None, true), "-");
    }

    #[test]
    fn nonce_is_alphanumeric() {
        let nonce = generate_nonce();
        assert_eq!(nonce.len(), 16);
        assert!(nonce.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
