mod blog;
mod forms;
mod pages;

pub use blog::{BlogDetailPage, BlogListPage};
pub use forms::{ContactPage, FormStatus, ReferPage};
pub use pages::{AboutPage, HomePage, LegalPage, PortfolioPage, ServicesPage};

use leptos::prelude::*;

use crate::{
    app::pages::PageInfo,
    content::{
        site::{BRAND, COMPANY, CONTACT_EMAIL, CONTACT_PHONE, WHATSAPP_URL},
        BlogPost,
    },
};

/// One breadcrumb entry; the last one usually has no link.
#[derive(Clone, Debug)]
pub struct Crumb {
    pub label: String,
    pub href: Option<String>,
}

impl Crumb {
    pub fn link(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: Some(href.to_string()),
        }
    }

    pub fn here(label: &str) -> Self {
        Self {
            label: label.to_string(),
            href: None,
        }
    }
}

const NAV: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/about", "About"),
    ("/services", "Services"),
    ("/portfolio", "Portfolio"),
    ("/blog", "Blog"),
    ("/refer", "Refer & Earn"),
    ("/contact", "Contact"),
];

fn nav_active(current_path: &str, href: &str) -> bool {
    if href == "/" {
        current_path == "/"
    } else {
        current_path == href || current_path.starts_with(&format!("{href}/"))
    }
}

/// Header, page body and footer.
#[component]
pub fn Shell(current_path: String, children: Children) -> impl IntoView {
    view! {
        <div class="site-shell fade-in">
            <HeaderBar current_path=current_path />
            <main>{children()}</main>
            <SiteFooter />
            <a
                class="whatsapp-button"
                href=WHATSAPP_URL
                target="_blank"
                rel="noreferrer"
                aria-label="Chat on WhatsApp"
            >
                "WhatsApp"
            </a>
        </div>
    }
}

#[component]
fn HeaderBar(current_path: String) -> impl IntoView {
    let active_cls = "nav-link nav-link-active";
    let inactive_cls = "nav-link";
    let links = NAV
        .iter()
        .map(|(href, label)| {
            let cls = if nav_active(&current_path, href) { active_cls } else { inactive_cls };
            view! { <li><a class=cls href=*href>{*label}</a></li> }
        })
        .collect_view();
    view! {
        <header id="primary-header" class="site-header">
            <nav class="site-nav">
                <a class="brand" href="/" aria-label="home">
                    <img class="brand-logo" src="/assets/images/logo.svg" alt="" />
                    <span class="brand-name">{BRAND}</span>
                </a>
                <ul class="nav-links">{links}</ul>
                <a class="button button-primary nav-cta" href="/contact">"Get Started"</a>
            </nav>
        </header>
    }
}

#[component]
fn SiteFooter() -> impl IntoView {
    let year = chrono::Utc::now().format("%Y").to_string();
    view! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <div class="brand-name">{COMPANY}</div>
                    <p class="muted">"Web, mobile and MVP development for ambitious teams."</p>
                </div>
                <div>
                    <h4>"Company"</h4>
                    <ul>
                        <li><a href="/about">"About"</a></li>
                        <li><a href="/portfolio">"Portfolio"</a></li>
                        <li><a href="/blog">"Blog"</a></li>
                        <li><a href="/refer">"Refer & Earn"</a></li>
                    </ul>
                </div>
                <div>
                    <h4>"Contact"</h4>
                    <ul>
                        <li><a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a></li>
                        <li>{CONTACT_PHONE}</li>
                    </ul>
                </div>
            </div>
            <div class="footer-legal">
                <span>{format!("© {year} {COMPANY}. All rights reserved.")}</span>
                <a href="/privacy-policy">"Privacy Policy"</a>
                <a href="/terms-conditions">"Terms & Conditions"</a>
            </div>
        </footer>
    }
}

#[component]
pub fn PageHero(
    title: String,
    subtitle: String,
    badge: Option<String>,
    breadcrumb: Vec<Crumb>,
) -> impl IntoView {
    let crumbs = (!breadcrumb.is_empty()).then(|| {
        let last = breadcrumb.len() - 1;
        let items = breadcrumb
            .into_iter()
            .enumerate()
            .map(|(idx, crumb)| {
                let label = match crumb.href {
                    Some(href) => view! { <a href=href>{crumb.label}</a> }.into_any(),
                    None => view! { <span aria-current="page">{crumb.label}</span> }.into_any(),
                };
                let sep = (idx < last).then(|| view! { <span class="crumb-sep">"›"</span> });
                view! { <li>{label}{sep}</li> }
            })
            .collect_view();
        view! {
            <nav class="breadcrumb rise-in" aria-label="Breadcrumb">
                <ol>{items}</ol>
            </nav>
        }
    });
    let badge = badge.map(|b| view! { <div class="hero-badge rise-in delay-1"><p>{b}</p></div> });
    view! {
        <section class="page-hero">
            <div class="hero-grid" aria-hidden="true"></div>
            <div class="hero-inner">
                {crumbs}
                {badge}
                <h1 class="hero-title rise-in delay-2"><span>{title}</span></h1>
                <p class="hero-subtitle rise-in delay-3">{subtitle}</p>
                <div class="hero-divider rise-in delay-4"></div>
            </div>
        </section>
    }
}

/// [`PageHero`] filled from a fixed page's hero copy.
#[component]
fn HeroFor(page: &'static PageInfo) -> impl IntoView {
    let hero = page.hero();
    view! {
        <PageHero
            title=hero.title.to_string()
            subtitle=hero.subtitle.to_string()
            badge=(!hero.badge.is_empty()).then(|| hero.badge.to_string())
            breadcrumb=hero.breadcrumb()
        />
    }
}

#[component]
fn MetaRow(category: String, published: String, read_time: String) -> impl IntoView {
    view! {
        <div class="meta-row">
            <span class="category-chip">{category}</span>
            <span class="meta-item">{published}</span>
            <span class="meta-item">{read_time}</span>
        </div>
    }
}

#[component]
fn ShowTags(tags: Vec<String>) -> impl IntoView {
    let chips = tags
        .into_iter()
        .map(|t| view! { <span class="tag-chip">{format!("#{t}")}</span> })
        .collect::<Vec<_>>();
    view! { <div class="tag-row">{chips}</div> }
}

/// Card used on the home page and the blog list. `index` staggers the entry animation.
#[component]
pub fn BlogCard(post: BlogPost, index: usize) -> impl IntoView {
    let href = post.path();
    let cover = match post.cover_image.clone() {
        Some(src) => view! { <img src=src alt=post.title.clone() loading="lazy" /> }.into_any(),
        None => view! { <div class="cover-placeholder"><span>"No image"</span></div> }.into_any(),
    };
    let tags = post.tags.iter().take(2).cloned().collect::<Vec<_>>();
    view! {
        <a class="card-link" href=href>
            <article class="blog-card rise-in" style=format!("animation-delay: {}ms", index * 50)>
                <div class="card-cover">{cover}</div>
                <div class="card-body">
                    <div class="card-meta">
                        <span class="category-chip">{post.category.clone()}</span>
                        <span class="meta-item">{post.read_time.clone()}</span>
                    </div>
                    <h3 class="card-title">{post.title.clone()}</h3>
                    <div class="card-byline">
                        <span>{post.author.clone()}</span>
                        <span>{post.published_label()}</span>
                    </div>
                    <ShowTags tags=tags />
                    <span class="read-more">"Read More →"</span>
                </div>
            </article>
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_matches_sections() {
        assert!(nav_active("/", "/"));
        assert!(!nav_active("/blog", "/"));
        assert!(nav_active("/blog", "/blog"));
        assert!(nav_active("/blog/react-tips", "/blog"));
        assert!(!nav_active("/blogging", "/blog"));
    }

    #[test]
    fn hero_renders_breadcrumb_and_badge() {
        let html = Owner::new_root(None).with(|| {
            view! {
                <PageHero
                    title="About Us".to_string()
                    subtitle="Who we are".to_string()
                    badge=Some("Meet us".to_string())
                    breadcrumb=vec![Crumb::link("Home", "/"), Crumb::here("About")]
                />
            }
            .to_html()
        });
        assert!(html.contains(r#"<a href="/">Home</a>"#));
        assert!(html.contains("About Us"));
        assert!(html.contains("Meet us"));
        assert!(html.contains(r#"aria-current="page""#));
    }
}
