use crate::{config::Config, content::Catalog};

use super::{pages, render::escape};

struct SitemapEntry {
    loc: String,
    lastmod: Option<String>,
}

/// `sitemap.xml` for every fixed page and blog post.
pub(crate) fn render(config: &Config, catalog: &Catalog) -> String {
    let newest = catalog
        .posts()
        .iter()
        .map(|p| p.published_at)
        .max()
        .map(|d| d.format("%Y-%m-%d").to_string());

    let mut urls = Vec::with_capacity(pages::ALL.len() + catalog.len());
    for page in pages::ALL {
        // home and blog index change whenever a post lands
        let lastmod = match page.path {
            "/" | "/blog" => newest.clone(),
            _ => None,
        };
        urls.push(SitemapEntry {
            loc: config.absolute_url(page.path),
            lastmod,
        });
    }
    for post in catalog.posts() {
        urls.push(SitemapEntry {
            loc: config.absolute_url(&post.path()),
            lastmod: Some(post.published_at.format("%Y-%m-%d").to_string()),
        });
    }
    render_xml(&urls)
}

fn render_xml(urls: &[SitemapEntry]) -> String {
    let mut body = String::new();
    for entry in urls {
        body.push_str("  <url>\n");
        body.push_str(&format!("    <loc>{}</loc>\n", escape(&entry.loc)));
        if let Some(lastmod) = entry.lastmod.as_deref() {
            body.push_str(&format!("    <lastmod>{}</lastmod>\n", escape(lastmod)));
        }
        body.push_str("  </url>\n");
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{body}</urlset>
"#
    )
}

pub(crate) fn robots(config: &Config) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}\n",
        config.absolute_url("/sitemap.xml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::test_post;

    #[test]
    fn lists_pages_and_posts() {
        let config = Config::default();
        let catalog = Catalog::new(vec![
            test_post("first", "First", "Startups", &[]),
            test_post("second", "Second", "Design", &[]),
        ])
        .unwrap();
        let xml = render(&config, &catalog);
        assert!(xml.contains("<loc>https://kunamix.com/</loc>"));
        assert!(xml.contains("<loc>https://kunamix.com/privacy-policy</loc>"));
        assert!(xml.contains("<loc>https://kunamix.com/blog/first</loc>"));
        assert!(xml.contains("<loc>https://kunamix.com/blog/second</loc>"));
        assert_eq!(xml.matches("<url>").count(), pages::ALL.len() + 2);
    }

    #[test]
    fn locations_are_xml_escaped() {
        let catalog = Catalog::new(vec![test_post("q&a", "Q&A", "Startups", &[])]).unwrap();
        let xml = render(&Config::default(), &catalog);
        assert!(xml.contains("<loc>https://kunamix.com/blog/q&amp;a</loc>"));
        assert!(!xml.contains("q&a<"));
    }

    #[test]
    fn robots_points_at_sitemap() {
        let txt = robots(&Config::default());
        assert!(txt.ends_with("Sitemap: https://kunamix.com/sitemap.xml\n"));
    }
}
