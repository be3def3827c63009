use std::{collections::HashMap, sync::Arc};

use crate::{config::Config, content::Catalog, leads::LeadTransport};

use super::{
    render::{prerender_blog_page, prerender_pages},
    sitemap,
};

#[derive(Clone)]
pub struct AppState {
    pub(crate) config: Arc<Config>,
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) pages: Arc<HashMap<&'static str, Arc<str>>>,
    pub(crate) blog_pages: Arc<HashMap<String, Arc<str>>>,
    pub(crate) sitemap: Arc<str>,
    pub(crate) leads: Arc<LeadTransport>,
}

/// Render every fixed page and blog post up front; requests only inject the nonce.
pub fn build_prerendered_state(config: Config, catalog: Catalog, leads: LeadTransport) -> AppState {
    let pages = prerender_pages(&config, &catalog)
        .into_iter()
        .map(|(path, html)| (path, Arc::<str>::from(html)))
        .collect::<HashMap<_, _>>();

    let blog_pages = catalog
        .posts()
        .iter()
        .map(|post| {
            let html = prerender_blog_page(&config, &catalog, post);
            (post.slug.clone(), Arc::<str>::from(html))
        })
        .collect::<HashMap<_, _>>();

    let sitemap = Arc::<str>::from(sitemap::render(&config, &catalog));

    tracing::info!(
        pages = pages.len(),
        posts = blog_pages.len(),
        "prerendered site"
    );

    AppState {
        config: Arc::new(config),
        catalog: Arc::new(catalog),
        pages: Arc::new(pages),
        blog_pages: Arc::new(blog_pages),
        sitemap,
        leads: Arc::new(leads),
    }
}
