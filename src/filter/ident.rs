//! Canonical filter kind identifiers.
//!
//! Both registries of a family key off these constants, so the parser side
//! and the translator side can never drift apart on spelling.

pub mod plant {
    pub const NAME: &str = "name";
    pub const LATIN_NAME: &str = "latin_name";
    pub const CATEGORY: &str = "category";
    pub const EXACT_NAME: &str = "exact_name";
    pub const IDS: &str = "ids";
    pub const HEIGHT: &str = "height";
    pub const DIAMETER: &str = "diameter";
    pub const SOIL_ACIDITY: &str = "soil_acidity";
    pub const SOIL_MOISTURE: &str = "soil_moisture";
    pub const LIGHT_RELATION: &str = "light_relation";
    pub const SOIL_TYPE: &str = "soil_type";
    pub const WINTER_HARDINESS: &str = "winter_hardiness";
    pub const FLOWERING_PERIOD: &str = "flowering_period";
    pub const ALBUM: &str = "album";
}

pub mod post {
    pub const TITLE: &str = "title";
    pub const TITLE_CONTAINS: &str = "title_contains";
    pub const TAGS: &str = "tags";
    pub const AUTHOR: &str = "author";
}
