use std::{collections::HashSet, path::Path, sync::LazyLock};

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tokio::fs;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub meta_title: String,
    pub meta_description: String,
    pub keyword: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub author: String,
    #[serde(default)]
    pub author_title: Option<String>,
    pub published_at: NaiveDate,
    pub read_time: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub content: PostContent,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PostContent {
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub conclusion: Option<String>,
    #[serde(default)]
    pub cta: Option<CallToAction>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub heading: String,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToAction {
    pub heading: String,
    pub button_text: String,
    pub button_link: String,
}

impl BlogPost {
    /// `query_lc` must already be lowercased.
    pub fn matches(&self, query_lc: &str, category: Option<&str>) -> bool {
        let category_ok = category.is_none_or(|c| c == self.category);
        if !category_ok {
            return false;
        }
        query_lc.is_empty()
            || self.title.to_lowercase().contains(query_lc)
            || self.meta_description.to_lowercase().contains(query_lc)
            || self.keyword.to_lowercase().contains(query_lc)
            || self
                .tags
                .iter()
                .any(|t| t.to_lowercase().contains(query_lc))
    }

    /// "January 15, 2025"
    pub fn published_label(&self) -> String {
        self.published_at.format("%B %-d, %Y").to_string()
    }

    pub fn path(&self) -> String {
        format!("/blog/{}", self.slug)
    }
}

/// Posts matching `query` (case-insensitive substring) and `category`, in input order.
pub fn filter<'a>(records: &'a [BlogPost], query: &str, category: Option<&str>) -> Vec<&'a BlogPost> {
    let query_lc = query.to_lowercase();
    records
        .iter()
        .filter(|post| post.matches(&query_lc, category))
        .collect()
}

#[derive(Deserialize)]
struct BlogFile {
    blogs: Vec<BlogPost>,
}

/// The static blog collection, in publication-list order.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    posts: Vec<BlogPost>,
}

impl Catalog {
    pub fn new(posts: Vec<BlogPost>) -> Result<Self> {
        let mut seen = HashSet::new();
        for post in &posts {
            if !seen.insert(post.slug.as_str()) {
                bail!("duplicate blog slug `{}`", post.slug);
            }
        }
        Ok(Self { posts })
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let file: BlogFile = serde_json::from_slice(bytes).context("malformed blog collection")?;
        Self::new(file.blogs)
    }

    pub async fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)
            .await
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_json(&bytes)
    }

    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn find(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// Previous and next post around `slug`.
    pub fn neighbours(&self, slug: &str) -> (Option<&BlogPost>, Option<&BlogPost>) {
        let Some(idx) = self.posts.iter().position(|p| p.slug == slug) else {
            return (None, None);
        };
        let prev = idx.checked_sub(1).and_then(|i| self.posts.get(i));
        (prev, self.posts.get(idx + 1))
    }

    pub fn latest(&self, n: usize) -> &[BlogPost] {
        &self.posts[..n.min(self.posts.len())]
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.posts
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Span<'a> {
    Plain(&'a str),
    Strong(&'a str),
}

static STRONG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*[^*]+\*\*").expect("valid regex"));

/// Split section body text on `**bold**` runs.
pub fn emphasis_spans(text: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut last = 0;
    for m in STRONG_RE.find_iter(text) {
        if m.start() > last {
            spans.push(Span::Plain(&text[last..m.start()]));
        }
        spans.push(Span::Strong(&text[m.start() + 2..m.end() - 2]));
        last = m.end();
    }
    if last < text.len() {
        spans.push(Span::Plain(&text[last..]));
    }
    spans
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn post(slug: &str, title: &str, category: &str, tags: &[&str]) -> BlogPost {
        BlogPost {
            id: 0,
            slug: slug.to_string(),
            title: title.to_string(),
            meta_title: format!("{title} | Kunamix"),
            meta_description: String::new(),
            keyword: String::new(),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            author: "Kunamix Team".to_string(),
            author_title: None,
            published_at: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            read_time: "5 min read".to_string(),
            cover_image: None,
            content: PostContent::default(),
        }
    }

    fn sample() -> Vec<BlogPost> {
        vec![
            post("intro-to-mvps", "Intro to MVPs", "Startups", &["mvp", "startup"]),
            post("react-tips", "React Tips", "Tutorials", &["react"]),
        ]
    }

    fn slugs(posts: &[&BlogPost]) -> Vec<String> {
        posts.iter().map(|p| p.slug.clone()).collect()
    }

    #[test]
    fn empty_query_without_category_returns_everything() {
        let records = sample();
        let all = filter(&records, "", None);
        assert_eq!(slugs(&all), vec!["intro-to-mvps", "react-tips"]);
    }

    #[test]
    fn query_is_case_insensitive() {
        let records = sample();
        assert_eq!(slugs(&filter(&records, "react", None)), vec!["react-tips"]);
        assert_eq!(slugs(&filter(&records, "REACT", None)), vec!["react-tips"]);
    }

    #[test]
    fn category_only() {
        let records = sample();
        assert_eq!(
            slugs(&filter(&records, "", Some("Startups"))),
            vec!["intro-to-mvps"]
        );
    }

    #[test]
    fn no_match_is_empty() {
        let records = sample();
        assert!(filter(&records, "zzz", None).is_empty());
    }

    #[test]
    fn category_and_query_intersect() {
        let mut records = sample();
        records.push(post("mvp-tutorial", "Shipping an MVP", "Tutorials", &["mvp"]));
        assert_eq!(
            slugs(&filter(&records, "mvp", Some("Tutorials"))),
            vec!["mvp-tutorial"]
        );
        assert!(filter(&records, "react", Some("Startups")).is_empty());
    }

    #[test]
    fn description_keyword_and_tags_are_searched() {
        let mut records = sample();
        records[0].meta_description = "How to validate ideas".to_string();
        records[1].keyword = "Frontend Performance".to_string();
        assert_eq!(slugs(&filter(&records, "VALIDATE", None)), vec!["intro-to-mvps"]);
        assert_eq!(slugs(&filter(&records, "performance", None)), vec!["react-tips"]);
        assert_eq!(slugs(&filter(&records, "star", None)), vec!["intro-to-mvps"]);
    }

    #[test]
    fn filter_leaves_input_untouched() {
        let records = sample();
        let before = records.clone();
        let _ = filter(&records, "react", Some("Tutorials"));
        assert_eq!(records, before);
    }

    #[test]
    fn duplicate_slugs_are_rejected() {
        let err = Catalog::new(vec![
            post("same", "A", "Startups", &[]),
            post("same", "B", "Startups", &[]),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("same"));
    }

    #[test]
    fn catalog_navigation() {
        let mut records = sample();
        records.push(post("third", "Third", "Startups", &[]));
        let catalog = Catalog::new(records).unwrap();

        assert_eq!(catalog.categories(), vec!["Startups", "Tutorials"]);
        assert_eq!(catalog.latest(2).len(), 2);
        assert_eq!(catalog.latest(10).len(), 3);

        let (prev, next) = catalog.neighbours("react-tips");
        assert_eq!(prev.map(|p| p.slug.as_str()), Some("intro-to-mvps"));
        assert_eq!(next.map(|p| p.slug.as_str()), Some("third"));
        let (prev, next) = catalog.neighbours("intro-to-mvps");
        assert!(prev.is_none());
        assert!(next.is_some());
        assert_eq!(catalog.neighbours("missing"), (None, None));
    }

    #[test]
    fn parses_collection_json() {
        let json = br#"{"blogs":[{
            "id": 1,
            "slug": "mvp",
            "title": "MVP",
            "metaTitle": "MVP | Kunamix",
            "metaDescription": "desc",
            "keyword": "mvp",
            "category": "Startups",
            "tags": ["mvp"],
            "author": "Kunamix Team",
            "publishedAt": "2025-03-02",
            "readTime": "4 min read",
            "content": {"sections": [{"id": "why", "heading": "Why", "body": "Because"}],
                        "cta": {"heading": "Build it", "buttonText": "Contact", "buttonLink": "/contact"}}
        }]}"#;
        let catalog = Catalog::from_json(json).unwrap();
        let post = catalog.find("mvp").unwrap();
        assert_eq!(post.published_label(), "March 2, 2025");
        assert_eq!(post.content.sections.len(), 1);
        assert_eq!(post.content.cta.as_ref().unwrap().button_link, "/contact");
    }

    #[test]
    fn emphasis_spans_split_bold_runs() {
        assert_eq!(
            emphasis_spans("Start **small** and **ship** fast"),
            vec![
                Span::Plain("Start "),
                Span::Strong("small"),
                Span::Plain(" and "),
                Span::Strong("ship"),
                Span::Plain(" fast"),
            ]
        );
        assert_eq!(emphasis_spans("plain"), vec![Span::Plain("plain")]);
        assert_eq!(emphasis_spans("**all**"), vec![Span::Strong("all")]);
    }

    #[tokio::test]
    async fn bundled_collection_loads() {
        let catalog = Catalog::load(Path::new("content/blog.json")).await.unwrap();
        assert!(catalog.len() >= 3);
        assert!(!catalog.categories().is_empty());
    }
}
