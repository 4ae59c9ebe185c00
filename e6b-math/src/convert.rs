//! Conversions between the units printed on the E6B conversion scales.

use crate::units::{
    AVGAS_POUNDS_PER_US_GALLON, Dimension, FEET_PER_METER, KM_PER_NM, LITRES_PER_US_GALLON,
    MILES_PER_NM, POUNDS_PER_KG, Unit,
};


#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ConvertError {
    #[error("cannot convert {from} ({from_dimension}) to {to} ({to_dimension})")]
    IncompatibleUnits {
        from:           Unit,
        from_dimension: Dimension,
        to:             Unit,
        to_dimension:   Dimension,
    },
    #[error("cannot convert non-finite value {0}")]
    NonFinite(f64),
}

/// An affine map from the base unit of a dimension into another unit of the same dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Formula {
    Identity,
    Multiply(f64),
    Divide(f64),
    Affine { factor: f64, offset: f64 },
}

impl Formula {
    /// Converts a value in the base unit into the target unit.
    #[must_use]
    pub fn from_base(self, base: f64) -> f64 {
        match self {
            Self::Identity => base,
            Self::Multiply(factor) => base * factor,
            Self::Divide(divisor) => base / divisor,
            Self::Affine { factor, offset } => base * factor + offset,
        }
    }

    /// Converts a value in the target unit back into the base unit.
    #[must_use]
    pub fn into_base(self, value: f64) -> f64 {
        match self {
            Self::Identity => value,
            Self::Multiply(factor) => value / factor,
            Self::Divide(divisor) => value * divisor,
            Self::Affine { factor, offset } => (value - offset) / factor,
        }
    }
}

impl Unit {
    /// The base unit of this unit's dimension.
    #[must_use]
    pub fn base(self) -> Unit {
        match self.dimension() {
            Dimension::Volume => Unit::UsGallons,
            Dimension::Distance => Unit::NauticalMiles,
            Dimension::Mass => Unit::Pounds,
            Dimension::Length => Unit::Feet,
            Dimension::Temperature => Unit::Celsius,
        }
    }

    /// How this unit is derived from [`Unit::base`].
    #[must_use]
    pub fn formula(self) -> Formula {
        match self {
            Self::UsGallons | Self::NauticalMiles | Self::Pounds | Self::Feet | Self::Celsius => {
                Formula::Identity
            }
            Self::Litres => Formula::Multiply(LITRES_PER_US_GALLON),
            Self::StatuteMiles => Formula::Multiply(MILES_PER_NM),
            Self::Kilometers => Formula::Multiply(KM_PER_NM),
            Self::Kilograms => Formula::Divide(POUNDS_PER_KG),
            Self::Meters => Formula::Divide(FEET_PER_METER),
            Self::Fahrenheit => Formula::Affine { factor: 9. / 5., offset: 32. },
        }
    }

    /// The units this unit can be converted into, excluding itself.
    pub fn counterparts(self) -> impl Iterator<Item = Unit> {
        <Unit as strum::IntoEnumIterator>::iter()
            .filter(move |&other| other != self && other.dimension() == self.dimension())
    }
}

/// Converts `value` from one unit to another of the same dimension.
///
/// The result is exact to floating point precision. Approximations are applied by the caller.
pub fn convert(value: f64, from: Unit, to: Unit) -> Result<f64, ConvertError> {
    if !value.is_finite() {
        return Err(ConvertError::NonFinite(value));
    }

    if from.dimension() != to.dimension() {
        return Err(ConvertError::IncompatibleUnits {
            from,
            from_dimension: from.dimension(),
            to,
            to_dimension: to.dimension(),
        });
    }

    if from == to {
        return Ok(value);
    }

    Ok(to.formula().from_base(from.formula().into_base(value)))
}

/// A value in one unit alongside its equivalent in another.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ConversionPair {
    pub value:          f64,
    pub unit:           Unit,
    pub converted:      f64,
    pub converted_unit: Unit,
}

impl ConversionPair {
    /// Converts `value` into `converted_unit`, keeping the unrounded result.
    pub fn new(value: f64, unit: Unit, converted_unit: Unit) -> Result<Self, ConvertError> {
        let converted = convert(value, unit, converted_unit)?;
        Ok(Self { value, unit, converted, converted_unit })
    }

    /// Pounds of avgas and the US gallons they fill at ISA sea level.
    #[must_use]
    pub fn avgas(pounds: f64) -> Self {
        Self {
            value:          pounds,
            unit:           Unit::Pounds,
            converted:      pounds / AVGAS_POUNDS_PER_US_GALLON,
            converted_unit: Unit::UsGallons,
        }
    }

    /// The pair with the converted value as read by `read`, e.g. rounded to a scale.
    #[must_use]
    pub fn read_with(self, read: impl FnOnce(f64) -> f64) -> Self {
        Self { converted: read(self.converted), ..self }
    }

    /// The same pair read in the opposite direction.
    #[must_use]
    pub fn swap(self) -> Self {
        Self {
            value:          self.converted,
            unit:           self.converted_unit,
            converted:      self.value,
            converted_unit: self.unit,
        }
    }
}
