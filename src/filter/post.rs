use uuid::Uuid;

use super::{Filter, ident};
use crate::domain::post::Post;

/// A typed filter value for the post family.
#[derive(Debug, Clone, PartialEq)]
pub enum PostFilter {
    /// Exact title match, case-sensitive
    Title { title: String },
    /// Case-insensitive substring match on the title
    TitleContains { part: String },
    /// At least one of the candidate tags is on the post
    Tags { tags: Vec<String> },
    /// Exact author match
    Author { author_id: Uuid },
}

impl Filter for PostFilter {
    type Entity = Post;

    fn identifier(&self) -> &'static str {
        match self {
            Self::Title { .. } => ident::post::TITLE,
            Self::TitleContains { .. } => ident::post::TITLE_CONTAINS,
            Self::Tags { .. } => ident::post::TAGS,
            Self::Author { .. } => ident::post::AUTHOR,
        }
    }

    fn matches(&self, post: &Post) -> bool {
        match self {
            Self::Title { title } => post.title == *title,
            Self::TitleContains { part } => post
                .title
                .to_lowercase()
                .contains(&part.to_lowercase()),
            Self::Tags { tags } => tags.iter().any(|tag| post.tags.contains(tag)),
            Self::Author { author_id } => post.author_id == *author_id,
        }
    }
}
