//! Quote calculation: `width × height × price_per_area[material] × coefficient[type]`.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, instrument, warn};

use crate::error::{ComputeError, Result};

/// Board material the furniture is made from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Material {
    Ldsp,
    Mdf,
    Wood,
}

impl Material {
    pub const ALL: [Material; 3] = [Material::Ldsp, Material::Mdf, Material::Wood];

    pub fn as_str(&self) -> &'static str {
        match self {
            Material::Ldsp => "ldsp",
            Material::Mdf => "mdf",
            Material::Wood => "wood",
        }
    }

    /// Price of one square meter.
    pub fn price_per_area(&self) -> Decimal {
        match self {
            Material::Ldsp => Decimal::new(150, 0),
            Material::Mdf => Decimal::new(250, 0),
            Material::Wood => Decimal::new(400, 0),
        }
    }
}

impl FromStr for Material {
    type Err = ComputeError;

    fn from_str(s: &str) -> Result<Self> {
        Material::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ComputeError::UnknownMaterial(s.to_string()))
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of furniture, which scales the material price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FurnitureType {
    Cabinet,
    Wardrobe,
    Kitchen,
}

impl FurnitureType {
    pub const ALL: [FurnitureType; 3] = [
        FurnitureType::Cabinet,
        FurnitureType::Wardrobe,
        FurnitureType::Kitchen,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FurnitureType::Cabinet => "cabinet",
            FurnitureType::Wardrobe => "wardrobe",
            FurnitureType::Kitchen => "kitchen",
        }
    }

    pub fn coefficient(&self) -> Decimal {
        match self {
            FurnitureType::Cabinet => Decimal::new(10, 1),
            FurnitureType::Wardrobe => Decimal::new(12, 1),
            FurnitureType::Kitchen => Decimal::new(15, 1),
        }
    }
}

impl FromStr for FurnitureType {
    type Err = ComputeError;

    fn from_str(s: &str) -> Result<Self> {
        FurnitureType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ComputeError::UnknownFurnitureType(s.to_string()))
    }
}

impl fmt::Display for FurnitureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decimal places kept for dimensions, area and price, matching the order columns.
pub const SCALE: u32 = 4;

fn to_scale(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Result of pricing one piece of furniture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub material: Material,
    pub furniture_type: FurnitureType,
    pub width: Decimal,
    pub height: Decimal,
    /// Square meters
    pub area: Decimal,
    pub price: Decimal,
}

/// Parse a width or height given as free text.
///
/// Plain and scientific notation are accepted. No range check is applied.
pub fn parse_dimension(field: &'static str, raw: &str) -> Result<Decimal> {
    let trimmed = raw.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| {
            warn!("Rejected {} value '{}'", field, raw);
            ComputeError::InvalidDimension {
                field,
                value: raw.to_string(),
            }
        })
}

/// Price a piece from already parsed dimensions.
///
/// The material is resolved before the furniture type, so a request with both
/// wrong reports the material. Dimensions are rounded to [`SCALE`] places before
/// pricing, and area and price are rounded to the same scale.
#[instrument]
pub fn quote(material: &str, furniture_type: &str, width: Decimal, height: Decimal) -> Result<Quote> {
    let material: Material = material.parse()?;
    let furniture_type: FurnitureType = furniture_type.parse()?;

    let width = to_scale(width);
    let height = to_scale(height);

    let overflow = || ComputeError::PriceOverflow { width, height };
    let area = width.checked_mul(height).ok_or_else(overflow)?;
    let price = area
        .checked_mul(material.price_per_area())
        .and_then(|p| p.checked_mul(furniture_type.coefficient()))
        .ok_or_else(overflow)?;
    let area = to_scale(area);
    let price = to_scale(price);

    debug!(%material, %furniture_type, %area, %price, "Quote computed");

    Ok(Quote {
        material,
        furniture_type,
        width,
        height,
        area,
        price,
    })
}

/// Price a piece straight from request text: width, then height, then the table lookups.
pub fn quote_raw(material: &str, furniture_type: &str, width: &str, height: &str) -> Result<Quote> {
    let width = parse_dimension("width", width)?;
    let height = parse_dimension("height", height)?;
    quote(material, furniture_type, width, height)
}
