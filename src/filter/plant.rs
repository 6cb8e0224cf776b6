use uuid::Uuid;

use super::{Filter, ident};
use crate::domain::plant::Plant;

/// A typed filter value for the plant family.
///
/// Range bounds are not validated at construction; an empty range (for the
/// strict kinds, any range with `min >= max`) simply matches nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum PlantFilter {
    /// Exact name match, case-sensitive
    Name { name: String },
    /// Exact latin name match, case-sensitive
    LatinName { latin_name: String },
    /// Exact category match
    Category { category: String },
    /// Exact name match used by repository-side lookups
    ExactName { name: String },
    /// Membership of the plant id in a fixed id set
    Ids { ids: Vec<Uuid> },
    /// Height in metres, strictly between `min` and `max`
    Height { min: f64, max: f64 },
    /// Crown diameter in metres, strictly between `min` and `max`
    Diameter { min: f64, max: f64 },
    /// Soil acidity (pH), inclusive on both bounds
    SoilAcidity { min: i32, max: i32 },
    /// Soil moisture is one of the candidates
    SoilMoisture { moistures: Vec<String> },
    /// Light relation is one of the candidates
    LightRelation { relations: Vec<String> },
    /// Soil type is one of the candidates
    SoilType { soil_types: Vec<String> },
    /// Winter hardiness zone, strictly between `min` and `max`
    WinterHardiness { min: i32, max: i32 },
    /// Flowering period is one of the candidates; deciduous plants only
    FloweringPeriod { periods: Vec<String> },
    /// Membership of the plant in an album.
    ///
    /// `plant_ids` is the album's resolved member list, filled in by the
    /// repository when the filter is evaluated in memory; the SQL translator
    /// only needs `album_id`. Without the resolved list nothing matches.
    Album {
        album_id: Uuid,
        plant_ids: Option<Vec<Uuid>>,
    },
}

impl Filter for PlantFilter {
    type Entity = Plant;

    fn identifier(&self) -> &'static str {
        match self {
            Self::Name { .. } => ident::plant::NAME,
            Self::LatinName { .. } => ident::plant::LATIN_NAME,
            Self::Category { .. } => ident::plant::CATEGORY,
            Self::ExactName { .. } => ident::plant::EXACT_NAME,
            Self::Ids { .. } => ident::plant::IDS,
            Self::Height { .. } => ident::plant::HEIGHT,
            Self::Diameter { .. } => ident::plant::DIAMETER,
            Self::SoilAcidity { .. } => ident::plant::SOIL_ACIDITY,
            Self::SoilMoisture { .. } => ident::plant::SOIL_MOISTURE,
            Self::LightRelation { .. } => ident::plant::LIGHT_RELATION,
            Self::SoilType { .. } => ident::plant::SOIL_TYPE,
            Self::WinterHardiness { .. } => ident::plant::WINTER_HARDINESS,
            Self::FloweringPeriod { .. } => ident::plant::FLOWERING_PERIOD,
            Self::Album { .. } => ident::plant::ALBUM,
        }
    }

    fn matches(&self, plant: &Plant) -> bool {
        let spec = &plant.specification;
        match self {
            Self::Name { name } | Self::ExactName { name } => plant.name == *name,
            Self::LatinName { latin_name } => plant.latin_name == *latin_name,
            Self::Category { category } => plant.category == *category,
            Self::Ids { ids } => ids.contains(&plant.id),
            Self::Height { min, max } => {
                let height = spec.height_m();
                height > *min && height < *max
            }
            Self::Diameter { min, max } => {
                let diameter = spec.diameter_m();
                diameter > *min && diameter < *max
            }
            Self::SoilAcidity { min, max } => {
                let acidity = spec.soil_acidity();
                acidity >= *min && acidity <= *max
            }
            Self::SoilMoisture { moistures } => {
                moistures.iter().any(|m| m == spec.soil_moisture())
            }
            Self::LightRelation { relations } => {
                relations.iter().any(|r| r == spec.light_relation())
            }
            Self::SoilType { soil_types } => soil_types.iter().any(|s| s == spec.soil_type()),
            Self::WinterHardiness { min, max } => {
                let hardiness = spec.winter_hardiness();
                hardiness > *min && hardiness < *max
            }
            Self::FloweringPeriod { periods } => spec
                .flowering_period()
                .is_some_and(|period| periods.iter().any(|p| p == period)),
            Self::Album { plant_ids, .. } => plant_ids
                .as_ref()
                .is_some_and(|ids| ids.contains(&plant.id)),
        }
    }
}
