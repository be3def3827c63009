use leptos::prelude::*;

use super::{BlogCard, HeroFor, Shell};
use crate::{
    app::pages::{self, PageInfo},
    content::{
        legal::{Clause, LAST_UPDATED},
        site::{COMPANY, PROJECTS, SERVICES, TESTIMONIALS, VALUES},
        BlogPost,
    },
};

#[component]
fn ServiceGrid() -> impl IntoView {
    let cards = SERVICES
        .iter()
        .enumerate()
        .map(|(idx, service)| {
            let features = service
                .features
                .iter()
                .map(|f| view! { <li>{*f}</li> })
                .collect_view();
            view! {
                <article class="service-card rise-in" style=format!("animation-delay: {}ms", idx * 100)>
                    <h3>{service.title}</h3>
                    <p class="muted">{service.summary}</p>
                    <ul class="feature-list">{features}</ul>
                </article>
            }
        })
        .collect_view();
    view! { <div class="card-grid">{cards}</div> }
}

#[component]
pub fn HomePage(latest: Vec<BlogPost>) -> impl IntoView {
    let cards = latest
        .into_iter()
        .enumerate()
        .map(|(idx, post)| view! { <BlogCard post=post index=idx /> })
        .collect_view();
    let testimonials = TESTIMONIALS
        .iter()
        .map(|t| {
            view! {
                <figure class="testimonial rise-in">
                    <blockquote>{format!("\u{201c}{}\u{201d}", t.quote)}</blockquote>
                    <figcaption>
                        <strong>{t.name}</strong>
                        <span class="muted">{t.role}</span>
                    </figcaption>
                </figure>
            }
        })
        .collect_view();
    view! {
        <Shell current_path="/".to_string()>
            <section class="home-hero">
                <div class="hero-inner">
                    <p class="hero-badge rise-in">{COMPANY}</p>
                    <h1 class="hero-title rise-in delay-1">"We build digital products that grow your business"</h1>
                    <p class="hero-subtitle rise-in delay-2">
                        "Web apps, mobile apps and MVPs delivered fast, built to last."
                    </p>
                    <div class="hero-actions rise-in delay-3">
                        <a class="button button-primary" href="/contact">"Start Your Project"</a>
                        <a class="button button-outline" href="/portfolio">"View Our Work"</a>
                    </div>
                </div>
            </section>
            <section class="section">
                <div class="section-inner">
                    <h2 class="section-title">"What We Do"</h2>
                    <ServiceGrid />
                </div>
            </section>
            <section class="section section-muted">
                <div class="section-inner">
                    <h2 class="section-title">"Latest Blog Posts"</h2>
                    <p class="section-subtitle">
                        "Insights, guides, and tutorials on MVP development, startups, and technology"
                    </p>
                    <div class="card-grid">{cards}</div>
                    <div class="center">
                        <a class="button button-outline" href="/blog">"View All Posts"</a>
                    </div>
                </div>
            </section>
            <section class="section">
                <div class="section-inner">
                    <h2 class="section-title">"What Our Clients Say"</h2>
                    <div class="card-grid">{testimonials}</div>
                </div>
            </section>
        </Shell>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    let values = VALUES
        .iter()
        .map(|v| {
            view! {
                <article class="value-card rise-in">
                    <h3>{v.title}</h3>
                    <p class="muted">{v.description}</p>
                </article>
            }
        })
        .collect_view();
    view! {
        <Shell current_path=pages::ABOUT.path.to_string()>
            <HeroFor page=&pages::ABOUT />
            <section class="section">
                <div class="section-inner prose">
                    <h2>"Who We Are"</h2>
                    <p>
                        {COMPANY}
                        " is a results-driven digital agency. We help founders validate ideas with focused MVPs and help established companies modernise the software they rely on."
                    </p>
                    <p>
                        "Our team of engineers and designers works in short iterations, shares progress every week and hands over code your own team can maintain."
                    </p>
                </div>
                <div class="section-inner">
                    <h2 class="section-title">"Our Values"</h2>
                    <div class="card-grid">{values}</div>
                </div>
            </section>
        </Shell>
    }
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <Shell current_path=pages::SERVICES.path.to_string()>
            <HeroFor page=&pages::SERVICES />
            <section class="section">
                <div class="section-inner">
                    <ServiceGrid />
                    <div class="cta-block rise-in">
                        <h3>"Not sure what you need?"</h3>
                        <a class="button button-secondary" href="/contact">"Book a Free Consultation"</a>
                    </div>
                </div>
            </section>
        </Shell>
    }
}

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let projects = PROJECTS
        .iter()
        .enumerate()
        .map(|(idx, project)| {
            let stack = project
                .stack
                .iter()
                .map(|s| view! { <span class="tag-chip">{*s}</span> })
                .collect_view();
            view! {
                <article class="project-card rise-in" style=format!("animation-delay: {}ms", idx * 100)>
                    <span class="category-chip">{project.category}</span>
                    <h3>{project.name}</h3>
                    <p class="muted">{project.summary}</p>
                    <div class="tag-row">{stack}</div>
                </article>
            }
        })
        .collect_view();
    view! {
        <Shell current_path=pages::PORTFOLIO.path.to_string()>
            <HeroFor page=&pages::PORTFOLIO />
            <section class="section">
                <div class="section-inner">
                    <div class="card-grid">{projects}</div>
                </div>
            </section>
        </Shell>
    }
}

/// Privacy policy and terms share one layout.
#[component]
pub fn LegalPage(page: &'static PageInfo, clauses: &'static [Clause]) -> impl IntoView {
    let items = clauses
        .iter()
        .map(|c| {
            view! {
                <section class="legal-clause">
                    <h2>{c.heading}</h2>
                    <p>{c.body}</p>
                </section>
            }
        })
        .collect_view();
    view! {
        <Shell current_path=page.path.to_string()>
            <HeroFor page=page />
            <section class="section">
                <div class="section-inner prose">
                    <p class="muted">{format!("Last Updated: {LAST_UPDATED}")}</p>
                    {items}
                    <div class="cta-block">
                        <h3>"Questions?"</h3>
                        <p>"Our team is here to help. Contact us for any questions about this document."</p>
                        <a class="button button-secondary" href="/contact">"Contact Us"</a>
                    </div>
                </div>
            </section>
        </Shell>
    }
}
