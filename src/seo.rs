//! Document head metadata.
//!
//! A [`HeadTagSet`] is the live set of `<meta>` tags, the canonical link and
//! the document title of one rendered document. Pages describe what they want
//! with a [`PageMetadata`] and the head is reconciled through
//! [`HeadTagSet::sync`]; nothing else in the crate mutates head tags directly.

pub const DEFAULT_TWITTER_CARD: &str = "summary_large_image";

/// SEO fields a page declares. Absent fields leave the head untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub canonical: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub og_url: Option<String>,
    pub twitter_card: String,
}

impl Default for PageMetadata {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            canonical: None,
            og_title: None,
            og_description: None,
            og_image: None,
            og_url: None,
            twitter_card: DEFAULT_TWITTER_CARD.to_string(),
        }
    }
}

/// Which attribute keys a `<meta>` tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetaAttr {
    Name,
    Property,
}

impl MetaAttr {
    pub fn as_str(self) -> &'static str {
        match self {
            MetaAttr::Name => "name",
            MetaAttr::Property => "property",
        }
    }

    /// Open Graph, Facebook and article keys use `property`, everything else `name`.
    pub fn for_key(key: &str) -> Self {
        if key.starts_with("og:") || key.starts_with("fb:") || key.starts_with("article:") {
            MetaAttr::Property
        } else {
            MetaAttr::Name
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadTag {
    attr: MetaAttr,
    key: String,
    content: String,
}

impl HeadTag {
    pub fn attr(&self) -> MetaAttr {
        self.attr
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Head state of one document. Holds at most one tag per `(attr, key)` and
/// at most one canonical link; tags keep the order they were first created in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeadTagSet {
    title: Option<String>,
    tags: Vec<HeadTag>,
    canonical: Option<String>,
}

impl HeadTagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    pub fn tags(&self) -> &[HeadTag] {
        &self.tags
    }

    pub fn get(&self, attr: MetaAttr, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|t| t.attr == attr && t.key == key)
            .map(|t| t.content.as_str())
    }

    pub fn canonical(&self) -> Option<&str> {
        self.canonical.as_deref()
    }

    /// Find-or-create the tag keyed by `(attr, key)` and set its content.
    pub fn upsert(&mut self, attr: MetaAttr, key: &str, content: &str) {
        match self.tags.iter_mut().find(|t| t.attr == attr && t.key == key) {
            Some(tag) => {
                if tag.content != content {
                    tag.content = content.to_string();
                }
            }
            None => self.tags.push(HeadTag {
                attr,
                key: key.to_string(),
                content: content.to_string(),
            }),
        }
    }

    pub fn set_canonical(&mut self, href: &str) {
        self.canonical = Some(href.to_string());
    }

    pub fn remove_canonical(&mut self) {
        self.canonical = None;
    }

    /// Reconcile the head with `meta`.
    ///
    /// Present fields are written, absent or empty ones are skipped without
    /// deleting earlier values. `og:type` and `twitter:card` are written on every call.
    /// The canonical link is the exception: it is removed when `meta` has none
    /// or an empty one.
    pub fn sync(&mut self, meta: &PageMetadata) {
        if let Some(title) = present(&meta.title) {
            self.set_title(title);
        }

        if let Some(desc) = present(&meta.description) {
            self.upsert(MetaAttr::Name, "description", desc);
        }

        let og = [
            ("og:title", present(&meta.og_title)),
            ("og:description", present(&meta.og_description)),
            ("og:image", present(&meta.og_image)),
            ("og:url", present(&meta.og_url)),
        ];
        for (key, value) in og {
            if let Some(value) = value {
                self.upsert(MetaAttr::Property, key, value);
            }
        }
        self.upsert(MetaAttr::Property, "og:type", "article");

        self.upsert(MetaAttr::Name, "twitter:card", &meta.twitter_card);
        let twitter = [
            ("twitter:title", present(&meta.og_title)),
            ("twitter:description", present(&meta.og_description)),
            ("twitter:image", present(&meta.og_image)),
        ];
        for (key, value) in twitter {
            if let Some(value) = value {
                self.upsert(MetaAttr::Name, key, value);
            }
        }

        match present(&meta.canonical) {
            Some(href) => self.set_canonical(href),
            None => self.remove_canonical(),
        }
    }
}

// an empty string counts as absent
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Runs [`HeadTagSet::sync`] on the first `apply` and afterwards only when
/// the metadata changed by value. There is no teardown between syncs.
#[derive(Clone, Debug)]
pub struct MetaSync {
    head: HeadTagSet,
    last: Option<PageMetadata>,
}

impl MetaSync {
    pub fn new(head: HeadTagSet) -> Self {
        Self { head, last: None }
    }

    /// Returns `true` when a sync ran.
    pub fn apply(&mut self, meta: &PageMetadata) -> bool {
        if self.last.as_ref() == Some(meta) {
            return false;
        }
        self.head.sync(meta);
        self.last = Some(meta.clone());
        true
    }

    pub fn into_head(self) -> HeadTagSet {
        self.head
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn blog_meta() -> PageMetadata {
        PageMetadata {
            title: Some("Blog | Kunamix".to_string()),
            description: Some("Articles about MVPs".to_string()),
            canonical: Some("https://kunamix.com/blog".to_string()),
            og_title: Some("Blog".to_string()),
            og_description: Some("Insights".to_string()),
            og_image: Some("https://kunamix.com/cover.png".to_string()),
            og_url: Some("https://kunamix.com/blog".to_string()),
            ..Default::default()
        }
    }

    fn assert_unique_keys(head: &HeadTagSet) {
        let mut seen = HashSet::new();
        for tag in head.tags() {
            assert!(
                seen.insert((tag.attr(), tag.key().to_string())),
                "duplicate tag {:?} {}",
                tag.attr(),
                tag.key()
            );
        }
    }

    #[test]
    fn sync_writes_every_present_field() {
        let mut head = HeadTagSet::new();
        head.sync(&blog_meta());

        assert_eq!(head.title(), Some("Blog | Kunamix"));
        assert_eq!(head.get(MetaAttr::Name, "description"), Some("Articles about MVPs"));
        assert_eq!(head.get(MetaAttr::Property, "og:title"), Some("Blog"));
        assert_eq!(head.get(MetaAttr::Property, "og:type"), Some("article"));
        assert_eq!(
            head.get(MetaAttr::Name, "twitter:card"),
            Some(DEFAULT_TWITTER_CARD)
        );
        assert_eq!(head.get(MetaAttr::Name, "twitter:title"), Some("Blog"));
        assert_eq!(
            head.get(MetaAttr::Name, "twitter:image"),
            Some("https://kunamix.com/cover.png")
        );
        assert_eq!(head.canonical(), Some("https://kunamix.com/blog"));
    }

    #[test]
    fn sync_is_idempotent() {
        let mut once = HeadTagSet::new();
        once.sync(&blog_meta());
        let mut twice = once.clone();
        twice.sync(&blog_meta());
        assert_eq!(once, twice);
    }

    #[test]
    fn repeated_syncs_never_duplicate_tags() {
        let mut head = HeadTagSet::new();
        head.upsert(MetaAttr::Name, "theme-color", "#0f172a");
        let variants = [
            blog_meta(),
            PageMetadata::default(),
            PageMetadata {
                og_title: Some("Other".to_string()),
                twitter_card: "summary".to_string(),
                ..Default::default()
            },
            blog_meta(),
        ];
        for meta in &variants {
            head.sync(meta);
            assert_unique_keys(&head);
        }
        assert_eq!(head.get(MetaAttr::Name, "theme-color"), Some("#0f172a"));
    }

    #[test]
    fn missing_canonical_removes_link() {
        let mut head = HeadTagSet::new();
        head.sync(&blog_meta());
        assert!(head.canonical().is_some());

        head.sync(&PageMetadata {
            title: Some("Not found".to_string()),
            ..Default::default()
        });
        assert_eq!(head.canonical(), None);
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let mut head = HeadTagSet::new();
        head.set_title("Kept");
        head.sync(&PageMetadata {
            title: Some(String::new()),
            description: Some(String::new()),
            og_image: Some(String::new()),
            canonical: Some("https://kunamix.com/about".to_string()),
            ..Default::default()
        });
        assert_eq!(head.title(), Some("Kept"));
        assert_eq!(head.get(MetaAttr::Name, "description"), None);
        assert_eq!(head.get(MetaAttr::Property, "og:image"), None);
        assert_eq!(head.get(MetaAttr::Name, "twitter:image"), None);

        head.sync(&PageMetadata {
            canonical: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(head.canonical(), None);
    }

    #[test]
    fn empty_description_keeps_previous_tag() {
        let mut head = HeadTagSet::new();
        head.sync(&blog_meta());
        head.sync(&PageMetadata {
            description: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(head.get(MetaAttr::Name, "description"), Some("Articles about MVPs"));
    }

    #[test]
    fn absent_fields_keep_previous_values() {
        let mut head = HeadTagSet::new();
        head.sync(&blog_meta());
        head.sync(&PageMetadata {
            title: Some("About".to_string()),
            og_title: Some("About Kunamix".to_string()),
            ..Default::default()
        });

        assert_eq!(head.title(), Some("About"));
        assert_eq!(head.get(MetaAttr::Property, "og:title"), Some("About Kunamix"));
        assert_eq!(head.get(MetaAttr::Name, "twitter:title"), Some("About Kunamix"));
        // stale until overwritten
        assert_eq!(
            head.get(MetaAttr::Property, "og:image"),
            Some("https://kunamix.com/cover.png")
        );
        assert_eq!(head.get(MetaAttr::Name, "description"), Some("Articles about MVPs"));
    }

    #[test]
    fn og_type_and_twitter_card_are_forced() {
        let mut head = HeadTagSet::new();
        head.upsert(MetaAttr::Property, "og:type", "website");
        head.sync(&PageMetadata {
            twitter_card: "summary".to_string(),
            ..Default::default()
        });
        assert_eq!(head.get(MetaAttr::Property, "og:type"), Some("article"));
        assert_eq!(head.get(MetaAttr::Name, "twitter:card"), Some("summary"));
        assert_eq!(head.get(MetaAttr::Name, "twitter:title"), None);
    }

    #[test]
    fn meta_sync_skips_unchanged_metadata() {
        let mut sync = MetaSync::new(HeadTagSet::new());
        assert!(sync.apply(&blog_meta()));
        assert!(!sync.apply(&blog_meta()));

        let mut changed = blog_meta();
        changed.og_url = Some("https://kunamix.com/blog?page=2".to_string());
        assert!(sync.apply(&changed));
        assert_eq!(
            sync.into_head().get(MetaAttr::Property, "og:url"),
            Some("https://kunamix.com/blog?page=2")
        );
    }

    #[test]
    fn meta_sync_runs_on_first_apply_even_for_defaults() {
        let mut sync = MetaSync::new(HeadTagSet::new());
        assert!(sync.apply(&PageMetadata::default()));
        let head = sync.into_head();
        assert_eq!(head.get(MetaAttr::Property, "og:type"), Some("article"));
    }

    #[test]
    fn attr_for_key_matches_open_graph_prefixes() {
        assert_eq!(MetaAttr::for_key("og:site_name"), MetaAttr::Property);
        assert_eq!(MetaAttr::for_key("article:published_time"), MetaAttr::Property);
        assert_eq!(MetaAttr::for_key("twitter:site"), MetaAttr::Name);
        assert_eq!(MetaAttr::for_key("robots"), MetaAttr::Name);
    }
}
