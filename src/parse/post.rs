//! Parsers for the post family, one per filter kind.

use std::sync::LazyLock;

use super::{string_list, string_operand, uuid_operand};
use crate::errors::FilterError;
use crate::filter::{PostFilter, ident::post as ident};
use crate::models::RawParams;
use crate::registry::{ParseFn, Registry};

static POST_PARSERS: LazyLock<Registry<ParseFn<PostFilter>>> = LazyLock::new(|| {
    let mut registry: Registry<ParseFn<PostFilter>> = Registry::new();
    registry.register(ident::TITLE, parse_title);
    registry.register(ident::TITLE_CONTAINS, parse_title_contains);
    registry.register(ident::TAGS, parse_tags);
    registry.register(ident::AUTHOR, parse_author);
    registry
});

/// The process-wide post parser registry, populated on first access.
pub fn post_parsers() -> &'static Registry<ParseFn<PostFilter>> {
    &POST_PARSERS
}

fn parse_title(raw: &RawParams<'_>) -> Result<PostFilter, FilterError> {
    let title = string_operand(ident::TITLE, "title", raw)?;
    Ok(PostFilter::Title { title })
}

fn parse_title_contains(raw: &RawParams<'_>) -> Result<PostFilter, FilterError> {
    let part = string_operand(ident::TITLE_CONTAINS, "part", raw)?;
    Ok(PostFilter::TitleContains { part })
}

fn parse_tags(raw: &RawParams<'_>) -> Result<PostFilter, FilterError> {
    let tags = string_list(ident::TAGS, "tags", raw)?;
    Ok(PostFilter::Tags { tags })
}

fn parse_author(raw: &RawParams<'_>) -> Result<PostFilter, FilterError> {
    let author_id = uuid_operand(ident::AUTHOR, "author_id", raw)?;
    Ok(PostFilter::Author { author_id })
}
