#![recursion_limit = "512"]

mod app;
mod components;
mod config;
mod content;
mod leads;
mod logging;
mod seo;

use anyhow::Context;

use crate::{config::Config, content::Catalog};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    logging::init(&config).context("initializing logging")?;

    let catalog = Catalog::load(&config.content_path).await?;
    tracing::info!(
        posts = catalog.len(),
        path = %config.content_path.display(),
        "blog collection loaded"
    );

    app::run(config, catalog).await
}
