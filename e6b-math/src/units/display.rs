use std::fmt;

/// The physical dimension a [`Unit`] measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Dimension {
    Volume,
    Distance,
    Mass,
    Length,
    Temperature,
}

/// A unit found on the E6B conversion scales.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    strum::EnumString,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    #[strum(serialize = "gal", serialize = "us_gallons")]
    UsGallons,
    #[strum(serialize = "l", serialize = "litres", serialize = "liters")]
    Litres,
    #[strum(serialize = "nm", serialize = "nmi", serialize = "nautical_miles")]
    NauticalMiles,
    #[strum(serialize = "sm", serialize = "mi", serialize = "statute_miles")]
    StatuteMiles,
    #[strum(serialize = "km", serialize = "kilometers")]
    Kilometers,
    #[strum(serialize = "lb", serialize = "lbs", serialize = "pounds")]
    Pounds,
    #[strum(serialize = "kg", serialize = "kilograms")]
    Kilograms,
    #[strum(serialize = "ft", serialize = "feet")]
    Feet,
    #[strum(serialize = "m", serialize = "metres", serialize = "meters")]
    Meters,
    #[strum(serialize = "c", serialize = "celsius")]
    Celsius,
    #[strum(serialize = "f", serialize = "fahrenheit")]
    Fahrenheit,
}

impl Unit {
    #[must_use]
    pub fn dimension(self) -> Dimension {
        match self {
            Self::UsGallons | Self::Litres => Dimension::Volume,
            Self::NauticalMiles | Self::StatuteMiles | Self::Kilometers => Dimension::Distance,
            Self::Pounds | Self::Kilograms => Dimension::Mass,
            Self::Feet | Self::Meters => Dimension::Length,
            Self::Celsius | Self::Fahrenheit => Dimension::Temperature,
        }
    }

    /// The short symbol of the unit.
    #[must_use]
    pub fn to_str(self) -> &'static str {
        match self {
            Self::UsGallons => "US gal",
            Self::Litres => "L",
            Self::NauticalMiles => "nm",
            Self::StatuteMiles => "sm",
            Self::Kilometers => "km",
            Self::Pounds => "lb",
            Self::Kilograms => "kg",
            Self::Feet => "ft",
            Self::Meters => "m",
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }

    /// The plural name of the unit as used in prose.
    #[must_use]
    pub fn plural_name(self) -> &'static str {
        match self {
            Self::UsGallons => "US gallons",
            Self::Litres => "litres",
            Self::NauticalMiles => "nautical miles",
            Self::StatuteMiles => "statute miles",
            Self::Kilometers => "kilometers",
            Self::Pounds => "pounds",
            Self::Kilograms => "kilograms",
            Self::Feet => "feet",
            Self::Meters => "metres",
            Self::Celsius => "degrees Celsius",
            Self::Fahrenheit => "degrees Fahrenheit",
        }
    }

    /// Where the unit's index mark sits on the E6B slide rule scale, if it has one.
    #[must_use]
    pub fn scale_mark(self) -> Option<&'static str> {
        match self {
            Self::UsGallons => Some("13"),
            Self::Litres => Some("50"),
            Self::NauticalMiles => Some("66"),
            Self::StatuteMiles => Some("76"),
            Self::Kilometers => Some("12"),
            Self::Pounds => Some("36"),
            Self::Kilograms => Some("17"),
            Self::Feet => Some("14"),
            Self::Meters => Some("44"),
            Self::Celsius | Self::Fahrenheit => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.to_str()) }
}
