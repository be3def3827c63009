use leptos::prelude::*;

use super::{BlogCard, MetaRow, PageHero, Shell, ShowTags};
use crate::{
    app::pages,
    content::{emphasis_spans, BlogPost, Span},
};

#[component]
pub fn BlogListPage(
    posts: Vec<BlogPost>,
    total: usize,
    categories: Vec<String>,
    query: String,
    selected: Option<String>,
) -> impl IntoView {
    let hero = pages::BLOG.hero();
    let shown = posts.len();

    let all_cls = if selected.is_none() { "button button-primary" } else { "button button-outline" };
    let category_buttons = categories
        .into_iter()
        .map(|category| {
            let cls = if selected.as_deref() == Some(category.as_str()) {
                "button button-primary"
            } else {
                "button button-outline"
            };
            let label = category.clone();
            view! {
                <button class=cls type="submit" name="category" value=category>
                    {label}
                </button>
            }
        })
        .collect_view();
    let selected_input = selected
        .clone()
        .map(|c| view! { <input type="hidden" name="category" value=c /> });

    let results = if posts.is_empty() {
        view! {
            <div class="empty-state fade-in">
                <p>"No blogs found matching your search criteria"</p>
                <a class="button button-outline" href="/blog">"Clear Filters"</a>
            </div>
        }
        .into_any()
    } else {
        let cards = posts
            .into_iter()
            .enumerate()
            .map(|(idx, post)| view! { <BlogCard post=post index=idx /> })
            .collect_view();
        view! { <div class="card-grid">{cards}</div> }.into_any()
    };

    view! {
        <Shell current_path=pages::BLOG.path.to_string()>
            <PageHero
                title=hero.title.to_string()
                subtitle=hero.subtitle.to_string()
                badge=Some(hero.badge.to_string())
                breadcrumb=hero.breadcrumb()
            />
            <div class="section-inner">
                <div class="blog-filters rise-in delay-1">
                    <form class="search-form" action="/blog" method="get" role="search">
                        <input
                            type="search"
                            name="q"
                            placeholder="Search blogs by title, keyword, or tag..."
                            value=query.clone()
                        />
                        {selected_input}
                        <button class="button button-primary" type="submit">"Search"</button>
                    </form>
                    <form class="category-filter" action="/blog" method="get">
                        <p class="filter-label">"Filter by Category"</p>
                        <input type="hidden" name="q" value=query />
                        <div class="button-row">
                            <button class=all_cls type="submit" name="category" value="">
                                "All Categories"
                            </button>
                            {category_buttons}
                        </div>
                    </form>
                </div>
                {results}
                <p class="result-count">{format!("Showing {shown} of {total} blogs")}</p>
            </div>
        </Shell>
    }
}

fn section_body(body: &str) -> Vec<AnyView> {
    emphasis_spans(body)
        .into_iter()
        .map(|span| match span {
            Span::Plain(text) => text.to_string().into_any(),
            Span::Strong(text) => view! { <strong>{text.to_string()}</strong> }.into_any(),
        })
        .collect()
}

#[component]
fn PostLink(post: BlogPost, label: &'static str, variant: &'static str) -> impl IntoView {
    let href = post.path();
    view! {
        <a class=format!("post-nav {variant}") href=href>
            <p class="muted">{label}</p>
            <h4>{post.title}</h4>
        </a>
    }
}

#[component]
pub fn BlogDetailPage(
    post: BlogPost,
    previous: Option<BlogPost>,
    next: Option<BlogPost>,
    share_url: String,
) -> impl IntoView {
    let content = post.content.clone();
    let intro = content
        .intro
        .map(|text| view! { <p class="post-intro rise-in delay-2">{text}</p> });
    let cover = post.cover_image.clone().map(|src| {
        view! {
            <div class="post-cover rise-in delay-4">
                <img src=src alt=post.title.clone() />
            </div>
        }
    });
    let sections = (!content.sections.is_empty()).then(|| {
        let items = content
            .sections
            .iter()
            .enumerate()
            .map(|(idx, section)| {
                view! {
                    <section
                        id=section.id.clone()
                        class="post-section rise-in"
                        style=format!("animation-delay: {}ms", 300 + idx * 50)
                    >
                        <h2>{section.heading.clone()}</h2>
                        <div class="post-body">{section_body(&section.body)}</div>
                    </section>
                }
            })
            .collect_view();
        view! { <div class="post-sections">{items}</div> }
    });
    let conclusion = content.conclusion.map(|text| {
        view! {
            <blockquote class="post-conclusion rise-in">
                <p>{format!("\u{201c}{text}\u{201d}")}</p>
            </blockquote>
        }
    });
    let cta = content.cta.map(|cta| {
        view! {
            <div class="cta-block rise-in">
                <h3>{cta.heading}</h3>
                <a class="button button-secondary" href=cta.button_link>
                    {cta.button_text}
                    " →"
                </a>
            </div>
        }
    });
    let continue_reading = (previous.is_some() || next.is_some()).then(|| {
        let prev = previous.map(|p| view! { <PostLink post=p label="← Previous" variant="post-nav-prev" /> });
        let next = next.map(|p| view! { <PostLink post=p label="Next →" variant="post-nav-next" /> });
        view! {
            <div class="continue-reading rise-in">
                <h3>"Continue Reading"</h3>
                <div class="post-nav-row">{prev}{next}</div>
            </div>
        }
    });
    let author_initial = post.author.chars().next().map(String::from).unwrap_or_default();
    let path = post.path();

    view! {
        <Shell current_path=path>
            <article class="post">
                <nav class="breadcrumb rise-in" aria-label="Breadcrumb">
                    <ol>
                        <li><a href="/">"Home"</a><span class="crumb-sep">"›"</span></li>
                        <li><a href="/blog">"Blog"</a><span class="crumb-sep">"›"</span></li>
                        <li><span aria-current="page">{post.title.clone()}</span></li>
                    </ol>
                </nav>
                <MetaRow
                    category=post.category.clone()
                    published=post.published_label()
                    read_time=post.read_time.clone()
                />
                <h1 class="post-title rise-in delay-1">{post.title.clone()}</h1>
                {intro}
                <div class="author-card rise-in delay-3">
                    <div class="author">
                        <div class="avatar">{author_initial}</div>
                        <div>
                            <p class="author-name">{post.author.clone()}</p>
                            <p class="muted">{post.author_title.clone().unwrap_or_default()}</p>
                        </div>
                    </div>
                    <button
                        class="button button-outline share-button"
                        type="button"
                        data-share-url=share_url
                        data-share-title=post.title.clone()
                        data-share-text=post.meta_description.clone()
                    >
                        "Share Article"
                    </button>
                </div>
                {cover}
                <div class="post-content">
                    {sections}
                    {conclusion}
                </div>
                {cta}
                <div class="post-tags rise-in">
                    <p class="filter-label">"Tagged In"</p>
                    <ShowTags tags=post.tags.clone() />
                </div>
                {continue_reading}
            </article>
        </Shell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::test_post;

    #[test]
    fn section_body_renders_strong_runs() {
        let html = Owner::new_root(None).with(|| {
            view! { <div>{section_body("Ship **small** releases")}</div> }.to_html()
        });
        assert!(html.contains("<strong>small</strong>"));
        assert!(html.contains("Ship "));
        assert!(html.contains(" releases"));
    }

    #[test]
    fn empty_list_shows_clear_filters() {
        let html = Owner::new_root(None).with(|| {
            view! {
                <BlogListPage
                    posts=vec![]
                    total=4
                    categories=vec!["Startups".to_string()]
                    query="zzz".to_string()
                    selected=None
                />
            }
            .to_html()
        });
        assert!(html.contains("No blogs found matching your search criteria"));
        assert!(html.contains("Showing 0 of 4 blogs"));
    }

    #[test]
    fn detail_links_neighbours() {
        let post = test_post("middle", "Middle", "Startups", &["mvp"]);
        let prev = test_post("first", "First", "Startups", &[]);
        let html = Owner::new_root(None).with(|| {
            view! {
                <BlogDetailPage
                    post=post
                    previous=Some(prev)
                    next=None
                    share_url="https://kunamix.com/blog/middle".to_string()
                />
            }
            .to_html()
        });
        assert!(html.contains(r#"href="/blog/first""#));
        assert!(html.contains("Continue Reading"));
        assert!(!html.contains("Next →"));
        assert!(html.contains("#mvp"));
    }
}
