//! SQL translators for the post family.
//!
//! Posts store tags in a `post_tag` join table, so tag membership compiles
//! to an `IN (SELECT ...)` subquery. Title substring matching wraps both
//! sides in `UPPER` so it stays case-insensitive on any backend.

use std::sync::LazyLock;

use sea_orm::Condition;
use sea_orm::sea_query::{Alias, Expr, Func, Query, SimpleExpr};

use crate::errors::FilterError;
use crate::filter::{Filter, PostFilter, ident::post as ident};
use crate::registry::{Registry, TranslateFn};

static POST_TRANSLATORS: LazyLock<Registry<TranslateFn<PostFilter>>> = LazyLock::new(|| {
    let mut registry: Registry<TranslateFn<PostFilter>> = Registry::new();
    registry.register(ident::TITLE, translate_title);
    registry.register(ident::TITLE_CONTAINS, translate_title_contains);
    registry.register(ident::TAGS, translate_tags);
    registry.register(ident::AUTHOR, translate_author);
    registry
});

/// The process-wide post translator registry, populated on first access.
pub fn post_translators() -> &'static Registry<TranslateFn<PostFilter>> {
    &POST_TRANSLATORS
}

fn translate_title(filter: &PostFilter) -> Result<Condition, FilterError> {
    let PostFilter::Title { title } = filter else {
        return Err(FilterError::type_mismatch(ident::TITLE, filter.identifier()));
    };
    Ok(Condition::all().add(Expr::col(Alias::new("title")).eq(title.clone())))
}

fn translate_title_contains(filter: &PostFilter) -> Result<Condition, FilterError> {
    let PostFilter::TitleContains { part } = filter else {
        return Err(FilterError::type_mismatch(
            ident::TITLE_CONTAINS,
            filter.identifier(),
        ));
    };
    Ok(Condition::all().add(
        SimpleExpr::FunctionCall(Func::upper(Expr::col(Alias::new("title"))))
            .like(format!("%{}%", part.to_uppercase())),
    ))
}

fn translate_tags(filter: &PostFilter) -> Result<Condition, FilterError> {
    let PostFilter::Tags { tags } = filter else {
        return Err(FilterError::type_mismatch(ident::TAGS, filter.identifier()));
    };
    // An empty candidate set matches nothing, same as the in-memory
    // evaluator.
    if tags.is_empty() {
        return Ok(Condition::all().add(Expr::value(false)));
    }
    let tagged = Query::select()
        .column(Alias::new("post_id"))
        .from(Alias::new("post_tag"))
        .and_where(Expr::col(Alias::new("tag")).is_in(tags.iter().cloned()))
        .to_owned();
    Ok(Condition::all().add(Expr::col(Alias::new("id")).in_subquery(tagged)))
}

fn translate_author(filter: &PostFilter) -> Result<Condition, FilterError> {
    let PostFilter::Author { author_id } = filter else {
        return Err(FilterError::type_mismatch(
            ident::AUTHOR,
            filter.identifier(),
        ));
    };
    Ok(Condition::all().add(Expr::col(Alias::new("author_id")).eq(*author_id)))
}
