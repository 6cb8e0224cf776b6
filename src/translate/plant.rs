//! SQL translators for the plant family.
//!
//! Plant measurements live in a `specification` JSONB column, so scalar
//! comparisons extract the field as text with `->>` and cast it to the
//! comparison type. The cast expressions target Postgres.

use std::sync::LazyLock;

use sea_orm::Condition;
use sea_orm::sea_query::{Alias, Expr, ExprTrait, Query, SimpleExpr};

use crate::errors::FilterError;
use crate::filter::{Filter, PlantFilter, ident::plant as ident};
use crate::registry::{Registry, TranslateFn};

/// JSONB field keys inside the `specification` column. They mirror the
/// serialized form of the specification structs, so a rename there must be
/// applied here too.
mod spec_key {
    pub const HEIGHT_M: &str = "height_m";
    pub const DIAMETER_M: &str = "diameter_m";
    pub const SOIL_ACIDITY: &str = "soil_acidity";
    pub const SOIL_MOISTURE: &str = "soil_moisture";
    pub const LIGHT_RELATION: &str = "light_relation";
    pub const SOIL_TYPE: &str = "soil_type";
    pub const WINTER_HARDINESS: &str = "winter_hardiness";
    pub const FLOWERING_PERIOD: &str = "flowering_period";
}

const SPEC_COLUMN: &str = "specification";

static PLANT_TRANSLATORS: LazyLock<Registry<TranslateFn<PlantFilter>>> = LazyLock::new(|| {
    let mut registry: Registry<TranslateFn<PlantFilter>> = Registry::new();
    registry.register(ident::NAME, translate_name);
    registry.register(ident::LATIN_NAME, translate_latin_name);
    registry.register(ident::CATEGORY, translate_category);
    registry.register(ident::EXACT_NAME, translate_exact_name);
    registry.register(ident::IDS, translate_ids);
    registry.register(ident::HEIGHT, translate_height);
    registry.register(ident::DIAMETER, translate_diameter);
    registry.register(ident::SOIL_ACIDITY, translate_soil_acidity);
    registry.register(ident::SOIL_MOISTURE, translate_soil_moisture);
    registry.register(ident::LIGHT_RELATION, translate_light_relation);
    registry.register(ident::SOIL_TYPE, translate_soil_type);
    registry.register(ident::WINTER_HARDINESS, translate_winter_hardiness);
    registry.register(ident::FLOWERING_PERIOD, translate_flowering_period);
    registry.register(ident::ALBUM, translate_album);
    registry
});

/// The process-wide plant translator registry, populated on first access.
pub fn plant_translators() -> &'static Registry<TranslateFn<PlantFilter>> {
    &PLANT_TRANSLATORS
}

/// `(specification ->> 'key')`, text extraction with no cast.
fn spec_text(key: &str) -> SimpleExpr {
    Expr::cust(format!("({SPEC_COLUMN} ->> '{key}')"))
}

/// `(specification ->> 'key')::double precision`
fn spec_float(key: &str) -> SimpleExpr {
    Expr::cust(format!("({SPEC_COLUMN} ->> '{key}')::double precision"))
}

/// `(specification ->> 'key')::integer`
fn spec_int(key: &str) -> SimpleExpr {
    Expr::cust(format!("({SPEC_COLUMN} ->> '{key}')::integer"))
}

/// One-of membership over a JSONB text field. An empty candidate set matches
/// nothing, same as the in-memory evaluator.
fn spec_one_of(key: &str, candidates: &[String]) -> Condition {
    if candidates.is_empty() {
        return Condition::all().add(Expr::value(false));
    }
    Condition::all().add(spec_text(key).is_in(candidates.iter().cloned()))
}

fn translate_name(filter: &PlantFilter) -> Result<Condition, FilterError> {
    let PlantFilter::Name { name } = filter else {
        return Err(FilterError::type_mismatch(ident::NAME, filter.identifier()));
    };
    Ok(Condition::all().add(Expr::col(Alias::new("name")).eq(name.clone())))
}

fn translate_latin_name(filter: &PlantFilter) -> Result<Condition, FilterError> {
    let PlantFilter::LatinName { latin_name } = filter else {
        return Err(FilterError::type_mismatch(
            ident::LATIN_NAME,
            filter.identifier(),
        ));
    };
    Ok(Condition::all().add(Expr::col(Alias::new("latin_name")).eq(latin_name.clone())))
}

fn translate_category(filter: &PlantFilter) -> Result<Condition, FilterError> {
    let PlantFilter::Category { category } = filter else {
        return Err(FilterError::type_mismatch(
            ident::CATEGORY,
            filter.identifier(),
        ));
    };
    Ok(Condition::all().add(Expr::col(Alias::new("category")).eq(category.clone())))
}

fn translate_exact_name(filter: &PlantFilter) -> Result<Condition, FilterError> {
    let PlantFilter::ExactName { name } = filter else {
        return Err(FilterError::type_mismatch(
            ident::EXACT_NAME,
            filter.identifier(),
        ));
    };
    Ok(Condition::all().add(Expr::col(Alias::new("name")).eq(name.clone())))
}

fn translate_ids(filter: &PlantFilter) -> Result<Condition, FilterError> {
    let PlantFilter::Ids { ids } = filter else {
        return Err(FilterError::type_mismatch(ident::IDS, filter.identifier()));
    };
    if ids.is_empty() {
        return Ok(Condition::all().add(Expr::value(false)));
    }
    Ok(Condition::all().add(Expr::col(Alias::new("id")).is_in(ids.iter().copied())))
}

fn translate_height(filter: &PlantFilter) -> Result<Condition, FilterError> {
    let PlantFilter::Height { min, max } = filter else {
        return Err(FilterError::type_mismatch(
            ident::HEIGHT,
            filter.identifier(),
        ));
    };
    Ok(Condition::all()
        .add(spec_float(spec_key::HEIGHT_M).gt(*min))
        .add(spec_float(spec_key::HEIGHT_M).lt(*max)))
}

fn translate_diameter(filter: &PlantFilter) -> Result<Condition, FilterError> {
    let PlantFilter::Diameter { min, max } = filter else {
        return Err(FilterError::type_mismatch(
            ident::DIAMETER,
            filter.identifier(),
        ));
    };
    Ok(Condition::all()
        .add(spec_float(spec_key::DIAMETER_M).gt(*min))
        .add(spec_float(spec_key::DIAMETER_M).lt(*max)))
}

fn translate_soil_acidity(filter: &PlantFilter) -> Result<Condition, FilterError> {
    let PlantFilter::SoilAcidity { min, max } = filter else {
        return Err(FilterError::type_mismatch(
            ident::SOIL_ACIDITY,
            filter.identifier(),
        ));
    };
    // Inclusive on both bounds, unlike the other ranges.
    Ok(Condition::all()
        .add(spec_int(spec_key::SOIL_ACIDITY).gte(*min))
        .add(spec_int(spec_key::SOIL_ACIDITY).lte(*max)))
}

fn translate_soil_moisture(filter: &PlantFilter) -> Result<Condition, FilterError> {
    let PlantFilter::SoilMoisture { moistures } = filter else {
        return Err(FilterError::type_mismatch(
            ident::SOIL_MOISTURE,
            filter.identifier(),
        ));
    };
    Ok(spec_one_of(spec_key::SOIL_MOISTURE, moistures))
}

fn translate_light_relation(filter: &PlantFilter) -> Result<Condition, FilterError> {
    let PlantFilter::LightRelation { relations } = filter else {
        return Err(FilterError::type_mismatch(
            ident::LIGHT_RELATION,
            filter.identifier(),
        ));
    };
    Ok(spec_one_of(spec_key::LIGHT_RELATION, relations))
}

fn translate_soil_type(filter: &PlantFilter) -> Result<Condition, FilterError> {
    let PlantFilter::SoilType { soil_types } = filter else {
        return Err(FilterError::type_mismatch(
            ident::SOIL_TYPE,
            filter.identifier(),
        ));
    };
    Ok(spec_one_of(spec_key::SOIL_TYPE, soil_types))
}

fn translate_winter_hardiness(filter: &PlantFilter) -> Result<Condition, FilterError> {
    let PlantFilter::WinterHardiness { min, max } = filter else {
        return Err(FilterError::type_mismatch(
            ident::WINTER_HARDINESS,
            filter.identifier(),
        ));
    };
    Ok(Condition::all()
        .add(spec_int(spec_key::WINTER_HARDINESS).gt(*min))
        .add(spec_int(spec_key::WINTER_HARDINESS).lt(*max)))
}

fn translate_flowering_period(filter: &PlantFilter) -> Result<Condition, FilterError> {
    let PlantFilter::FloweringPeriod { periods } = filter else {
        return Err(FilterError::type_mismatch(
            ident::FLOWERING_PERIOD,
            filter.identifier(),
        ));
    };
    // Coniferous specifications have no flowering_period key; `->>` yields
    // NULL for them and the comparison never matches, same as in memory.
    Ok(spec_one_of(spec_key::FLOWERING_PERIOD, periods))
}

fn translate_album(filter: &PlantFilter) -> Result<Condition, FilterError> {
    let PlantFilter::Album { album_id, .. } = filter else {
        return Err(FilterError::type_mismatch(
            ident::ALBUM,
            filter.identifier(),
        ));
    };
    let members = Query::select()
        .column(Alias::new("plant_id"))
        .from(Alias::new("plant_album"))
        .and_where(Expr::col(Alias::new("album_id")).eq(*album_id))
        .to_owned();
    Ok(Condition::all().add(Expr::col(Alias::new("id")).in_subquery(members)))
}
