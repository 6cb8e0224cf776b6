use uuid::Uuid;

/// A catalog plant as the evaluator sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct Plant {
    pub id: Uuid,
    pub name: String,
    pub latin_name: String,
    pub category: String,
    pub specification: PlantSpecification,
}

/// Physical specification, one variant per plant family.
///
/// Only deciduous plants carry a flowering period; filters on attributes a
/// variant does not have never match that variant.
#[derive(Debug, Clone, PartialEq)]
pub enum PlantSpecification {
    Coniferous(ConiferousSpecification),
    Deciduous(DeciduousSpecification),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConiferousSpecification {
    pub height_m: f64,
    pub diameter_m: f64,
    pub soil_acidity: i32,
    pub soil_moisture: String,
    pub light_relation: String,
    pub soil_type: String,
    pub winter_hardiness: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeciduousSpecification {
    pub height_m: f64,
    pub diameter_m: f64,
    pub flowering_period: String,
    pub soil_acidity: i32,
    pub soil_moisture: String,
    pub light_relation: String,
    pub soil_type: String,
    pub winter_hardiness: i32,
}

impl PlantSpecification {
    #[must_use]
    pub fn height_m(&self) -> f64 {
        match self {
            Self::Coniferous(s) => s.height_m,
            Self::Deciduous(s) => s.height_m,
        }
    }

    #[must_use]
    pub fn diameter_m(&self) -> f64 {
        match self {
            Self::Coniferous(s) => s.diameter_m,
            Self::Deciduous(s) => s.diameter_m,
        }
    }

    #[must_use]
    pub fn soil_acidity(&self) -> i32 {
        match self {
            Self::Coniferous(s) => s.soil_acidity,
            Self::Deciduous(s) => s.soil_acidity,
        }
    }

    #[must_use]
    pub fn soil_moisture(&self) -> &str {
        match self {
            Self::Coniferous(s) => &s.soil_moisture,
            Self::Deciduous(s) => &s.soil_moisture,
        }
    }

    #[must_use]
    pub fn light_relation(&self) -> &str {
        match self {
            Self::Coniferous(s) => &s.light_relation,
            Self::Deciduous(s) => &s.light_relation,
        }
    }

    #[must_use]
    pub fn soil_type(&self) -> &str {
        match self {
            Self::Coniferous(s) => &s.soil_type,
            Self::Deciduous(s) => &s.soil_type,
        }
    }

    #[must_use]
    pub fn winter_hardiness(&self) -> i32 {
        match self {
            Self::Coniferous(s) => s.winter_hardiness,
            Self::Deciduous(s) => s.winter_hardiness,
        }
    }

    /// Flowering period, present on deciduous plants only.
    #[must_use]
    pub fn flowering_period(&self) -> Option<&str> {
        match self {
            Self::Deciduous(s) => Some(&s.flowering_period),
            Self::Coniferous(_) => None,
        }
    }
}
