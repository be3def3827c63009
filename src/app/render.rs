use std::borrow::Cow;

use leptos::prelude::*;
use serde_json::{json, Map, Value};

use super::pages::{self, PageInfo};
use crate::{
    components::{
        AboutPage, BlogDetailPage, BlogListPage, ContactPage, FormStatus, HomePage, LegalPage,
        PortfolioPage, ReferPage, ServicesPage,
    },
    config::Config,
    content::{
        legal,
        site::{COMPANY, CONTACT_EMAIL, CONTACT_PHONE, TWITTER_HANDLE},
        BlogPost, Catalog,
    },
    leads::{ContactForm, ReferralForm},
    seo::{HeadTagSet, MetaAttr, MetaSync, PageMetadata},
};

#[cfg(not(debug_assertions))]
use minify_html::{minify, Cfg as HtmlMinCfg};

pub(crate) const CSP_NONCE_TOKEN: &str = "__CSP_NONCE__";
const SHARE_IMAGE: &str = "/assets/images/og-default.png";
const THEME_COLOR: &str = "#1E3A8A";
const HOME_LATEST: usize = 3;

/// Tags every document starts from before its page metadata is applied.
pub(crate) fn site_head(config: &Config) -> HeadTagSet {
    let image = config.absolute_url(SHARE_IMAGE);
    let seeds = [
        ("og:site_name", COMPANY),
        ("og:locale", "en_US"),
        ("og:image", image.as_str()),
        ("twitter:site", TWITTER_HANDLE),
        ("twitter:image", image.as_str()),
        ("theme-color", THEME_COLOR),
    ];
    let mut head = HeadTagSet::new();
    head.set_title(COMPANY);
    for (key, content) in seeds {
        head.upsert(MetaAttr::for_key(key), key, content);
    }
    head
}

pub(crate) fn document_head(config: &Config, meta: &PageMetadata) -> HeadTagSet {
    let mut sync = MetaSync::new(site_head(config));
    sync.apply(meta);
    sync.into_head()
}

fn render_head(head: &HeadTagSet) -> String {
    let mut lines = Vec::with_capacity(head.tags().len() + 2);
    lines.push(format!(
        "<title>{}</title>",
        escape(head.title().unwrap_or(COMPANY))
    ));
    for tag in head.tags() {
        lines.push(format!(
            r#"<meta {}="{}" content="{}" />"#,
            tag.attr().as_str(),
            escape(tag.key()),
            escape(tag.content())
        ));
    }
    if let Some(href) = head.canonical() {
        lines.push(format!(r#"<link rel="canonical" href="{}" />"#, escape(href)));
    }
    lines.join("\n  ")
}

pub(super) fn escape(s: &str) -> Cow<'_, str> {
    const SPECIAL: [char; 5] = ['&', '<', '>', '"', '\''];
    if !s.contains(SPECIAL) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// `nonce` is either the live per-request value or [`CSP_NONCE_TOKEN`] for
/// templates that get it substituted later.
pub(crate) fn wrap_document(
    body: &str,
    head: &HeadTagSet,
    structured_data: &[String],
    nonce: &str,
) -> String {
    let head_tags = render_head(head);
    let structured_json = structured_data
        .iter()
        .map(|s| format!(r#"<script type="application/ld+json" nonce="{nonce}">{s}</script>"#))
        .collect::<Vec<_>>()
        .join("\n  ");
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  {head_tags}
  {structured_json}
  <meta name="format-detection" content="telephone=no" />
  <link rel="icon" href="/assets/images/favicon.svg" type="image/svg+xml" sizes="any" />
  <link rel="stylesheet" href="/assets/site.css" />
</head>
<body>
{body}
<script src="/assets/app.js" nonce="{nonce}" defer></script>
</body>
</html>"##
    )
}

pub(crate) fn inject_runtime_tokens(template: &str, nonce: &str) -> String {
    template.replace(CSP_NONCE_TOKEN, nonce)
}

fn document(
    config: &Config,
    meta: &PageMetadata,
    body: &str,
    structured: &[String],
    nonce: &str,
) -> String {
    let head = document_head(config, meta);
    maybe_minify(wrap_document(body, &head, structured, nonce))
}

fn fixed_page_structured(config: &Config, page: &PageInfo) -> Vec<String> {
    let mut structured = vec![site_structured_data(config)];
    if let Some(hero) = page.hero.as_ref() {
        structured.push(breadcrumb_structured_data(
            config,
            &[("Home", "/"), (hero.crumb, page.path)],
        ));
    }
    structured
}

/// Every fixed page keyed by path, rendered once at startup.
pub(crate) fn prerender_pages(config: &Config, catalog: &Catalog) -> Vec<(&'static str, String)> {
    let latest = catalog.latest(HOME_LATEST).to_vec();
    pages::ALL
        .iter()
        .filter(|page| page.path != pages::BLOG.path)
        .map(|page| {
            let body = Owner::new_root(None).with(|| match page.path {
                "/" => view! { <HomePage latest=latest.clone() /> }.to_html(),
                "/about" => view! { <AboutPage /> }.to_html(),
                "/services" => view! { <ServicesPage /> }.to_html(),
                "/portfolio" => view! { <PortfolioPage /> }.to_html(),
                "/refer" => view! { <ReferPage form=ReferralForm::default() status=FormStatus::Idle /> }.to_html(),
                "/contact" => view! { <ContactPage form=ContactForm::default() status=FormStatus::Idle /> }.to_html(),
                "/privacy-policy" => view! { <LegalPage page=&pages::PRIVACY clauses=legal::PRIVACY /> }.to_html(),
                _ => view! { <LegalPage page=&pages::TERMS clauses=legal::TERMS /> }.to_html(),
            });
            let structured = fixed_page_structured(config, page);
            (page.path, document(config, &page.metadata(config), &body, &structured, CSP_NONCE_TOKEN))
        })
        .collect()
}

pub(crate) fn prerender_blog_page(config: &Config, catalog: &Catalog, post: &BlogPost) -> String {
    let (previous, next) = catalog.neighbours(&post.slug);
    let path = post.path();
    let share_url = config.absolute_url(&path);
    let body = Owner::new_root(None).with(|| {
        view! {
            <BlogDetailPage
                post=post.clone()
                previous=previous.cloned()
                next=next.cloned()
                share_url=share_url.clone()
            />
        }
        .to_html()
    });
    let structured = vec![
        site_structured_data(config),
        article_structured_data(config, post),
        breadcrumb_structured_data(
            config,
            &[("Home", "/"), ("Blog", pages::BLOG.path), (post.title.as_str(), path.as_str())],
        ),
    ];
    document(
        config,
        &pages::post_metadata(config, post),
        &body,
        &structured,
        CSP_NONCE_TOKEN,
    )
}

/// Blog list for one filter state. Rendered per request with the live nonce,
/// so the query never passes through token substitution.
pub(crate) fn render_blog_list(
    config: &Config,
    catalog: &Catalog,
    query: &str,
    category: Option<&str>,
    nonce: &str,
) -> String {
    let posts = crate::content::filter(catalog.posts(), query, category)
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();
    let categories = catalog.categories().into_iter().map(String::from).collect::<Vec<_>>();
    let body = Owner::new_root(None).with(|| {
        view! {
            <BlogListPage
                posts=posts
                total=catalog.len()
                categories=categories
                query=query.to_string()
                selected=category.map(String::from)
            />
        }
        .to_html()
    });
    let structured = fixed_page_structured(config, &pages::BLOG);
    document(config, &pages::BLOG.metadata(config), &body, &structured, nonce)
}

pub(crate) fn render_refer(config: &Config, form: ReferralForm, status: FormStatus, nonce: &str) -> String {
    let body = Owner::new_root(None)
        .with(|| view! { <ReferPage form=form status=status /> }.to_html());
    let structured = fixed_page_structured(config, &pages::REFER);
    document(config, &pages::REFER.metadata(config), &body, &structured, nonce)
}

pub(crate) fn render_contact(config: &Config, form: ContactForm, status: FormStatus, nonce: &str) -> String {
    let body = Owner::new_root(None)
        .with(|| view! { <ContactPage form=form status=status /> }.to_html());
    let structured = fixed_page_structured(config, &pages::CONTACT);
    document(config, &pages::CONTACT.metadata(config), &body, &structured, nonce)
}

fn site_structured_data(config: &Config) -> String {
    let site_url = config.absolute_url("/");
    let org_id = config.absolute_url("/#organization");
    ld_json(json!({
        "@context": "https://schema.org",
        "@graph": [
            {
                "@type": "Organization",
                "@id": org_id,
                "name": COMPANY,
                "url": site_url,
                "logo": {
                    "@type": "ImageObject",
                    "url": config.absolute_url("/assets/images/logo.svg")
                },
                "contactPoint": {
                    "@type": "ContactPoint",
                    "email": CONTACT_EMAIL,
                    "telephone": CONTACT_PHONE,
                    "contactType": "sales"
                }
            },
            {
                "@type": "WebSite",
                "@id": config.absolute_url("/#website"),
                "url": site_url,
                "name": COMPANY,
                "inLanguage": "en",
                "publisher": { "@id": org_id },
                "potentialAction": {
                    "@type": "SearchAction",
                    "target": config.absolute_url("/blog?q={query}"),
                    "query-input": "required name=query"
                }
            }
        ]
    }))
}

fn breadcrumb_structured_data(config: &Config, trail: &[(&str, &str)]) -> String {
    let items = trail
        .iter()
        .enumerate()
        .map(|(idx, (name, path))| {
            json!({
                "@type": "ListItem",
                "position": idx + 1,
                "name": name,
                "item": config.absolute_url(path),
            })
        })
        .collect::<Vec<_>>();
    ld_json(json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": items
    }))
}

fn article_structured_data(config: &Config, post: &BlogPost) -> String {
    let url = config.absolute_url(&post.path());
    let image = config.absolute_url(post.cover_image.as_deref().unwrap_or(SHARE_IMAGE));
    let published = post.published_at.format("%Y-%m-%d").to_string();

    let mut author = Map::new();
    author.insert("@type".into(), json!("Person"));
    author.insert("name".into(), json!(post.author));
    if let Some(job) = post.author_title.as_ref() {
        author.insert("jobTitle".into(), json!(job));
    }

    let mut obj = Map::new();
    obj.insert("@context".into(), json!("https://schema.org"));
    obj.insert("@type".into(), json!("BlogPosting"));
    obj.insert("headline".into(), json!(post.title));
    obj.insert("description".into(), json!(post.meta_description));
    obj.insert(
        "mainEntityOfPage".into(),
        json!({ "@type": "WebPage", "@id": url }),
    );
    obj.insert("url".into(), json!(url));
    obj.insert("inLanguage".into(), json!("en"));
    obj.insert("image".into(), json!([image]));
    obj.insert("datePublished".into(), json!(published));
    obj.insert("dateModified".into(), json!(published));
    obj.insert("author".into(), Value::Object(author));
    obj.insert(
        "publisher".into(),
        json!({ "@id": config.absolute_url("/#organization") }),
    );
    obj.insert("articleSection".into(), json!(post.category));
    if !post.tags.is_empty() {
        obj.insert("keywords".into(), json!(post.tags));
    }
    ld_json(Value::Object(obj))
}

// keeps a `</script>` inside a string from closing the tag
fn ld_json(value: Value) -> String {
    value.to_string().replace("</", "<\\/")
}

#[cfg(not(debug_assertions))]
fn maybe_minify(html: String) -> String {
    let cfg = HtmlMinCfg {
        minify_js: true,
        minify_css: false,
        ..Default::default()
    };
    let min = minify(html.as_bytes(), &cfg);
    String::from_utf8(min).unwrap_or(html)
}

#[cfg(debug_assertions)]
fn maybe_minify(html: String) -> String {
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::test_post;

    #[test]
    fn head_escapes_content() {
        let mut head = HeadTagSet::new();
        head.set_title("Q&A <live>");
        head.upsert(MetaAttr::Name, "description", r#"Say "hi" & <b>"#);
        let html = render_head(&head);
        assert!(html.contains("<title>Q&amp;A &lt;live&gt;</title>"));
        assert!(html.contains(
            r#"<meta name="description" content="Say &quot;hi&quot; &amp; &lt;b&gt;" />"#
        ));
    }

    #[test]
    fn escape_borrows_clean_text() {
        assert!(matches!(escape("plain text"), Cow::Borrowed(_)));
    }

    #[test]
    fn page_head_layers_metadata_over_site_defaults() {
        let config = Config::default();
        let head = document_head(&config, &pages::ABOUT.metadata(&config));
        assert_eq!(head.title(), Some(pages::ABOUT.title));
        assert_eq!(head.canonical(), Some("https://kunamix.com/about"));
        assert_eq!(
            head.get(MetaAttr::Property, "og:site_name"),
            Some("Kunamix Digital Solutions")
        );
        assert_eq!(
            head.get(MetaAttr::Property, "og:image"),
            Some("https://kunamix.com/assets/images/og-default.png")
        );
        assert_eq!(head.get(MetaAttr::Property, "og:type"), Some("article"));
    }

    #[test]
    fn blog_page_uses_cover_as_share_image() {
        let config = Config::default();
        let mut post = test_post("cover-post", "Cover", "Design", &[]);
        post.cover_image = Some("/assets/images/blog/cover.webp".to_string());
        let catalog = Catalog::new(vec![post.clone()]).unwrap();
        let html = prerender_blog_page(&config, &catalog, &post);
        assert!(html.contains(
            r#"<meta property="og:image" content="https://kunamix.com/assets/images/blog/cover.webp" />"#
        ));
        assert!(html.contains(r#"<link rel="canonical" href="https://kunamix.com/blog/cover-post" />"#));
        assert!(html.contains("\"@type\":\"BlogPosting\""));
        assert!(html.contains(CSP_NONCE_TOKEN));
    }

    #[test]
    fn runtime_tokens_are_replaced() {
        let html = wrap_document("<p>x</p>", &HeadTagSet::new(), &[], CSP_NONCE_TOKEN);
        let out = inject_runtime_tokens(&html, "abc123");
        assert!(!out.contains(CSP_NONCE_TOKEN));
        assert!(out.contains(r#"nonce="abc123""#));
    }

    #[test]
    fn structured_data_cannot_close_script() {
        let out = ld_json(json!({ "name": "</script><script>" }));
        assert!(!out.contains("</script>"));
    }
}
