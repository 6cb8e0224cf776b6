//! Parsers for the plant family, one per filter kind.

use std::sync::LazyLock;

use super::{f64_range, i32_range, string_list, string_operand, uuid_list, uuid_operand};
use crate::errors::FilterError;
use crate::filter::{PlantFilter, ident::plant as ident};
use crate::models::RawParams;
use crate::registry::{ParseFn, Registry};

static PLANT_PARSERS: LazyLock<Registry<ParseFn<PlantFilter>>> = LazyLock::new(|| {
    let mut registry: Registry<ParseFn<PlantFilter>> = Registry::new();
    registry.register(ident::NAME, parse_name);
    registry.register(ident::LATIN_NAME, parse_latin_name);
    registry.register(ident::CATEGORY, parse_category);
    registry.register(ident::EXACT_NAME, parse_exact_name);
    registry.register(ident::IDS, parse_ids);
    registry.register(ident::HEIGHT, parse_height);
    registry.register(ident::DIAMETER, parse_diameter);
    registry.register(ident::SOIL_ACIDITY, parse_soil_acidity);
    registry.register(ident::SOIL_MOISTURE, parse_soil_moisture);
    registry.register(ident::LIGHT_RELATION, parse_light_relation);
    registry.register(ident::SOIL_TYPE, parse_soil_type);
    registry.register(ident::WINTER_HARDINESS, parse_winter_hardiness);
    registry.register(ident::FLOWERING_PERIOD, parse_flowering_period);
    registry.register(ident::ALBUM, parse_album);
    registry
});

/// The process-wide plant parser registry, populated on first access.
pub fn plant_parsers() -> &'static Registry<ParseFn<PlantFilter>> {
    &PLANT_PARSERS
}

fn parse_name(raw: &RawParams<'_>) -> Result<PlantFilter, FilterError> {
    let name = string_operand(ident::NAME, "name", raw)?;
    Ok(PlantFilter::Name { name })
}

fn parse_latin_name(raw: &RawParams<'_>) -> Result<PlantFilter, FilterError> {
    let latin_name = string_operand(ident::LATIN_NAME, "latin_name", raw)?;
    Ok(PlantFilter::LatinName { latin_name })
}

fn parse_category(raw: &RawParams<'_>) -> Result<PlantFilter, FilterError> {
    let category = string_operand(ident::CATEGORY, "category", raw)?;
    Ok(PlantFilter::Category { category })
}

fn parse_exact_name(raw: &RawParams<'_>) -> Result<PlantFilter, FilterError> {
    let name = string_operand(ident::EXACT_NAME, "name", raw)?;
    Ok(PlantFilter::ExactName { name })
}

fn parse_ids(raw: &RawParams<'_>) -> Result<PlantFilter, FilterError> {
    let ids = uuid_list(ident::IDS, "ids", raw)?;
    Ok(PlantFilter::Ids { ids })
}

fn parse_height(raw: &RawParams<'_>) -> Result<PlantFilter, FilterError> {
    let (min, max) = f64_range(ident::HEIGHT, raw)?;
    Ok(PlantFilter::Height { min, max })
}

fn parse_diameter(raw: &RawParams<'_>) -> Result<PlantFilter, FilterError> {
    let (min, max) = f64_range(ident::DIAMETER, raw)?;
    Ok(PlantFilter::Diameter { min, max })
}

fn parse_soil_acidity(raw: &RawParams<'_>) -> Result<PlantFilter, FilterError> {
    let (min, max) = i32_range(ident::SOIL_ACIDITY, raw)?;
    Ok(PlantFilter::SoilAcidity { min, max })
}

fn parse_soil_moisture(raw: &RawParams<'_>) -> Result<PlantFilter, FilterError> {
    let moistures = string_list(ident::SOIL_MOISTURE, "moistures", raw)?;
    Ok(PlantFilter::SoilMoisture { moistures })
}

fn parse_light_relation(raw: &RawParams<'_>) -> Result<PlantFilter, FilterError> {
    let relations = string_list(ident::LIGHT_RELATION, "light_relations", raw)?;
    Ok(PlantFilter::LightRelation { relations })
}

fn parse_soil_type(raw: &RawParams<'_>) -> Result<PlantFilter, FilterError> {
    let soil_types = string_list(ident::SOIL_TYPE, "soil_types", raw)?;
    Ok(PlantFilter::SoilType { soil_types })
}

fn parse_winter_hardiness(raw: &RawParams<'_>) -> Result<PlantFilter, FilterError> {
    let (min, max) = i32_range(ident::WINTER_HARDINESS, raw)?;
    Ok(PlantFilter::WinterHardiness { min, max })
}

fn parse_flowering_period(raw: &RawParams<'_>) -> Result<PlantFilter, FilterError> {
    let periods = string_list(ident::FLOWERING_PERIOD, "flowering_periods", raw)?;
    Ok(PlantFilter::FloweringPeriod { periods })
}

fn parse_album(raw: &RawParams<'_>) -> Result<PlantFilter, FilterError> {
    let album_id = uuid_operand(ident::ALBUM, "album_id", raw)?;
    // The member list is resolved by the repository, never parsed from input.
    Ok(PlantFilter::Album {
        album_id,
        plant_ids: None,
    })
}
