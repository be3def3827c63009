mod blog;
pub mod legal;
pub mod refer;
pub mod site;

pub use blog::{emphasis_spans, filter, BlogPost, Catalog, Span};

#[cfg(test)]
pub(crate) use blog::tests::post as test_post;
